use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::{use_submitter, SendStatus};
use crate::config;
use crate::forms::{ContactForm, Submission};
use crate::modal::use_modal;

/// The single consumer of the modal state. Mounted once in the app shell.
#[function_component(ContactModal)]
pub fn contact_modal() -> Html {
    let modal = use_modal();
    let form = use_state(ContactForm::default);
    let (status, send) = use_submitter();

    {
        let modal = modal.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && modal.is_open() {
                modal.close();
            }
        });
    }

    // a fresh form every time the modal is opened after a successful send
    {
        let form = form.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |open| {
                if *open && *status == SendStatus::Sent {
                    form.set(ContactForm::default());
                    status.set(SendStatus::Idle);
                }
                || ()
            },
            modal.is_open(),
        );
    }

    if !modal.is_open() {
        return html! {};
    }

    let close = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.close())
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_input = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            next.message = value;
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit(Submission::Contact((*form).clone()));
        })
    };

    let body = match &*status {
        SendStatus::Sent => html! {
            <div class="modal-sent">
                <h2>{"Thank you"}</h2>
                <p>{"We've received your message and will be in touch within one business day."}</p>
                <button type="button" class="hero-cta" onclick={close.clone()}>{"Close"}</button>
            </div>
        },
        current => html! {
            <form class="contact-form" {onsubmit}>
                <h2>{"Talk to an advisor"}</h2>
                <p class="modal-lead">
                    {"Tell us a little about your situation. Prefer the phone? Call "}
                    <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{ config::CONTACT_PHONE }</a>
                    {"."}
                </p>
                <label>
                    {"Name"}
                    <input type="text" value={form.name.clone()} oninput={on_input(|f, v| f.name = v)} />
                </label>
                <label>
                    {"Email"}
                    <input type="email" value={form.email.clone()} oninput={on_input(|f, v| f.email = v)} />
                </label>
                <label>
                    {"Phone (optional)"}
                    <input type="tel" value={form.phone.clone()} oninput={on_input(|f, v| f.phone = v)} />
                </label>
                <label>
                    {"How can we help?"}
                    <textarea rows="4" value={form.message.clone()} oninput={on_message} />
                </label>
                {
                    if let SendStatus::Failed(message) = current {
                        html! { <p class="form-error">{ message.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="hero-cta" disabled={*current == SendStatus::Sending}>
                    { if *current == SendStatus::Sending { "Sending..." } else { "Send message" } }
                </button>
            </form>
        },
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_open}>
                <button type="button" class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                { body }
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(15, 23, 42, 0.55);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                    padding: 1rem;
                }
                .modal-panel {
                    position: relative;
                    background: #fbf8f3;
                    border-radius: 14px;
                    padding: 2.5rem;
                    width: 100%;
                    max-width: 520px;
                    max-height: 90vh;
                    overflow-y: auto;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.8rem;
                    color: #1b365d;
                    cursor: pointer;
                }
                .contact-form h2,
                .modal-sent h2 {
                    font-family: Georgia, serif;
                    color: #1b365d;
                    margin-bottom: 0.5rem;
                }
                .modal-lead {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                    margin-bottom: 1rem;
                    font-size: 0.9rem;
                    color: #1f2937;
                }
                .contact-form input,
                .contact-form textarea {
                    padding: 0.7rem 0.8rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    font: inherit;
                }
                "#}
            </style>
        </div>
    }
}
