use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{use_submitter, SendStatus};
use crate::components::motion::Reveal;
use crate::config;
use crate::forms::{CallRequest, Submission, CALL_TIMES};
use crate::Route;

#[function_component(ScheduleCall)]
pub fn schedule_call() -> Html {
    let request = use_state(|| CallRequest {
        preferred_time: CALL_TIMES[0].0.to_string(),
        ..Default::default()
    });
    let (status, send) = use_submitter();

    if *status == SendStatus::Sent {
        return html! {
            <div class="funnel-page funnel-success">
                <Reveal>
                    <h1>{"Your call is requested"}</h1>
                    <p class="funnel-lead">
                        {"An advisor will phone you within one business day to confirm a time. Nothing to prepare; a rough idea of what you own and who you want to provide for is plenty."}
                    </p>
                    <Link<Route> to={Route::Home} classes="back-link">{"Back to the home page"}</Link<Route>>
                </Reveal>
            </div>
        };
    }

    let on_text = |apply: fn(&mut CallRequest, String)| {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*request).clone();
            apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
            request.set(next);
        })
    };
    let on_time = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let mut next = (*request).clone();
            next.preferred_time = e.target_unchecked_into::<HtmlSelectElement>().value();
            request.set(next);
        })
    };
    let on_notes = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*request).clone();
            next.notes = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            request.set(next);
        })
    };
    let onsubmit = {
        let request = request.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit(Submission::CallRequest((*request).clone()));
        })
    };

    html! {
        <div class="funnel-page schedule-page">
            <Reveal>
                <h1>{"Book your free 30-minute call"}</h1>
                <p class="funnel-lead">
                    {"Leave a number and a time of day. Or call us directly on "}
                    <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{ config::CONTACT_PHONE }</a>
                    {"."}
                </p>
            </Reveal>
            <form class="funnel-form" {onsubmit}>
                <label>
                    {"Name"}
                    <input type="text" value={request.name.clone()} oninput={on_text(|r, v| r.name = v)} />
                </label>
                <label>
                    {"Phone"}
                    <input type="tel" value={request.phone.clone()} oninput={on_text(|r, v| r.phone = v)} />
                </label>
                <label>
                    {"Email (optional)"}
                    <input type="email" value={request.email.clone()} oninput={on_text(|r, v| r.email = v)} />
                </label>
                <label>
                    {"Best time to reach you"}
                    <select onchange={on_time}>
                        { for CALL_TIMES.iter().map(|(key, label)| html! {
                            <option value={*key} selected={request.preferred_time == *key}>{ *label }</option>
                        }) }
                    </select>
                </label>
                <label>
                    {"Anything we should know? (optional)"}
                    <textarea rows="3" value={request.notes.clone()} oninput={on_notes} />
                </label>
                {
                    if let SendStatus::Failed(message) = &*status {
                        html! { <p class="form-error">{ message.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="hero-cta" disabled={*status == SendStatus::Sending}>
                    { if *status == SendStatus::Sending { "Sending..." } else { "Request my call" } }
                </button>
            </form>
        </div>
    }
}
