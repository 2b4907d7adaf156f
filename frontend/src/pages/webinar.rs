use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{use_submitter, SendStatus};
use crate::components::motion::{Reveal, StaggerItem, StaggeredList};
use crate::forms::{Submission, WebinarRegistration, WEBINAR_SESSIONS};
use crate::Route;

fn takeaways() -> Vec<StaggerItem> {
    vec![
        StaggerItem::new(Some("✔"), html! { {"Why a will alone rarely keeps an estate out of probate"} }),
        StaggerItem::new(Some("✔"), html! { {"The beneficiary-form mistake that overrides a perfect plan"} }),
        StaggerItem::new(Some("✔"), html! { {"How to plan for incapacity, not just death"} }),
        StaggerItem::new(Some("✔"), html! { {"What to tell your children, and when"} }),
        StaggerItem::new(Some("✔"), html! { {"A one-page checklist to take home"} }),
    ]
}

#[function_component(Webinar)]
pub fn webinar() -> Html {
    let registration = use_state(|| WebinarRegistration {
        session: WEBINAR_SESSIONS[0].0.to_string(),
        ..Default::default()
    });
    let (status, send) = use_submitter();
    let navigator = use_navigator();

    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |status| {
                if *status == SendStatus::Sent {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::WebinarRegistered);
                    }
                }
                || ()
            },
            (*status).clone(),
        );
    }

    let on_name = {
        let registration = registration.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*registration).clone();
            next.name = e.target_unchecked_into::<HtmlInputElement>().value();
            registration.set(next);
        })
    };
    let on_email = {
        let registration = registration.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*registration).clone();
            next.email = e.target_unchecked_into::<HtmlInputElement>().value();
            registration.set(next);
        })
    };
    let on_session = {
        let registration = registration.clone();
        Callback::from(move |e: Event| {
            let mut next = (*registration).clone();
            next.session = e.target_unchecked_into::<HtmlSelectElement>().value();
            registration.set(next);
        })
    };
    let onsubmit = {
        let registration = registration.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit(Submission::WebinarRegistration((*registration).clone()));
        })
    };

    html! {
        <div class="funnel-page webinar-page">
            <Reveal>
                <span class="funnel-kicker">{"Free live webinar"}</span>
                <h1>{"The 5 Estate Planning Mistakes That Cost Families the Most"}</h1>
                <p class="funnel-lead">
                    {"Forty-five minutes with a senior advisor. Bring your questions; there is time for Q&A at the end."}
                </p>
            </Reveal>
            <StaggeredList items={takeaways()} stagger_ms={100} class="takeaway-list" />
            <form class="funnel-form" {onsubmit}>
                <label>
                    {"Name"}
                    <input type="text" value={registration.name.clone()} oninput={on_name} />
                </label>
                <label>
                    {"Email"}
                    <input type="email" value={registration.email.clone()} oninput={on_email} />
                </label>
                <label>
                    {"Session"}
                    <select onchange={on_session}>
                        { for WEBINAR_SESSIONS.iter().map(|(key, label)| html! {
                            <option value={*key} selected={registration.session == *key}>{ *label }</option>
                        }) }
                    </select>
                </label>
                {
                    if let SendStatus::Failed(message) = &*status {
                        html! { <p class="form-error">{ message.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="hero-cta" disabled={*status == SendStatus::Sending}>
                    { if *status == SendStatus::Sending { "Reserving..." } else { "Reserve my seat" } }
                </button>
            </form>
            <style>
                {r#"
                .funnel-kicker {
                    display: inline-block;
                    color: #c9a86a;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.85rem;
                    margin-bottom: 0.8rem;
                }
                .takeaway-list {
                    margin-bottom: 2.5rem;
                }
                .takeaway-list .stagger-item {
                    background: transparent;
                    border: none;
                    padding: 0.4rem 0;
                }
                .takeaway-list .stagger-icon {
                    font-size: 1.1rem;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(WebinarRegistered)]
pub fn webinar_registered() -> Html {
    html! {
        <div class="funnel-page funnel-success">
            <Reveal>
                <h1>{"You're registered"}</h1>
                <p class="funnel-lead">
                    {"A confirmation with your joining link is on its way. While you wait, a few minutes on our questionnaire lets the advisor tailor the session to families like yours."}
                </p>
                <Link<Route> to={Route::Qualify} classes="forward-link">
                    <button class="hero-cta">{"Answer 5 quick questions"}</button>
                </Link<Route>>
            </Reveal>
        </div>
    }
}
