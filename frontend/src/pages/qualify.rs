use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{use_submitter, SendStatus};
use crate::components::motion::Reveal;
use crate::forms::{QualificationAnswers, Submission, ESTATE_SIZES, EXISTING_PLAN_OPTIONS};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ChoiceProps {
    label: AttrValue,
    options: &'static [(&'static str, &'static str)],
    selected: String,
    onchange: Callback<String>,
}

/// A radio-card group; questionnaire answers read better as cards than a select.
#[function_component(Choice)]
fn choice(props: &ChoiceProps) -> Html {
    html! {
        <fieldset class="choice-group">
            <legend>{ props.label.clone() }</legend>
            { for props.options.iter().map(|(key, label)| {
                let onchange = props.onchange.clone();
                let key = *key;
                html! {
                    <label class={classes!("choice-card", (props.selected == key).then_some("chosen"))}>
                        <input
                            type="radio"
                            name={props.label.clone()}
                            value={key}
                            checked={props.selected == key}
                            onchange={Callback::from(move |_: Event| onchange.emit(key.to_string()))}
                        />
                        { *label }
                    </label>
                }
            }) }
        </fieldset>
    }
}

#[function_component(Qualify)]
pub fn qualify() -> Html {
    let answers = use_state(QualificationAnswers::default);
    let (status, send) = use_submitter();

    if *status == SendStatus::Sent {
        return html! {
            <div class="funnel-page funnel-success">
                <Reveal>
                    <h1>{"Thank you, we have what we need"}</h1>
                    <p class="funnel-lead">
                        {"Based on your answers, a free 30-minute call with an advisor is the right next step. Pick a time that suits you."}
                    </p>
                    <Link<Route> to={Route::ScheduleCall} classes="forward-link">
                        <button class="hero-cta">{"Schedule my call"}</button>
                    </Link<Route>>
                </Reveal>
            </div>
        };
    }

    let on_text = |apply: fn(&mut QualificationAnswers, String)| {
        let answers = answers.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*answers).clone();
            apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
            answers.set(next);
        })
    };
    let on_choice = |apply: fn(&mut QualificationAnswers, String)| {
        let answers = answers.clone();
        Callback::from(move |value: String| {
            let mut next = (*answers).clone();
            apply(&mut next, value);
            answers.set(next);
        })
    };
    let on_goal = {
        let answers = answers.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*answers).clone();
            next.primary_goal = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            answers.set(next);
        })
    };
    let onsubmit = {
        let answers = answers.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit(Submission::Qualification((*answers).clone()));
        })
    };

    html! {
        <div class="funnel-page qualify-page">
            <Reveal>
                <h1>{"Is estate planning with us a good fit?"}</h1>
                <p class="funnel-lead">
                    {"Five questions, about two minutes. Your answers go only to the advisor who will call you."}
                </p>
            </Reveal>
            <form class="funnel-form" {onsubmit}>
                <label>
                    {"Name"}
                    <input type="text" value={answers.name.clone()} oninput={on_text(|a, v| a.name = v)} />
                </label>
                <label>
                    {"Email"}
                    <input type="email" value={answers.email.clone()} oninput={on_text(|a, v| a.email = v)} />
                </label>
                <label>
                    {"Phone (optional)"}
                    <input type="tel" value={answers.phone.clone()} oninput={on_text(|a, v| a.phone = v)} />
                </label>
                <Choice
                    label="Roughly how large is your estate?"
                    options={ESTATE_SIZES}
                    selected={answers.estate_size.clone()}
                    onchange={on_choice(|a, v| a.estate_size = v)}
                />
                <Choice
                    label="Where does your planning stand today?"
                    options={EXISTING_PLAN_OPTIONS}
                    selected={answers.has_existing_plan.clone()}
                    onchange={on_choice(|a, v| a.has_existing_plan = v)}
                />
                <label>
                    {"What matters most to you? (optional)"}
                    <textarea rows="3" value={answers.primary_goal.clone()} oninput={on_goal} />
                </label>
                {
                    if let SendStatus::Failed(message) = &*status {
                        html! { <p class="form-error">{ message.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="hero-cta" disabled={*status == SendStatus::Sending}>
                    { if *status == SendStatus::Sending { "Sending..." } else { "See my next step" } }
                </button>
            </form>
            <style>
                {r#"
                .choice-group {
                    border: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                }
                .choice-group legend {
                    font-size: 0.95rem;
                    color: #1f2937;
                    margin-bottom: 0.6rem;
                }
                .choice-card {
                    display: flex;
                    flex-direction: row !important;
                    align-items: center;
                    gap: 0.6rem !important;
                    padding: 0.8rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    margin-bottom: 0.5rem !important;
                    cursor: pointer;
                    transition: border-color 0.2s ease, background 0.2s ease;
                }
                .choice-card.chosen {
                    border-color: #1b365d;
                    background: #f3ede3;
                }
                "#}
            </style>
        </div>
    }
}
