use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundaryState {
    fault: Option<String>,
    attempt: u32,
}

impl BoundaryState {
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }
}

pub enum BoundaryAction {
    Report(String),
    Retry,
}

impl Reducible for BoundaryState {
    type Action = BoundaryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // keep the first fault, later ones are usually fallout from it
            BoundaryAction::Report(_) if self.fault.is_some() => self,
            BoundaryAction::Report(detail) => Rc::new(BoundaryState {
                fault: Some(detail),
                attempt: self.attempt,
            }),
            BoundaryAction::Retry => Rc::new(BoundaryState {
                fault: None,
                attempt: self.attempt + 1,
            }),
        }
    }
}

/// Handed to everything under a [`FaultBoundary`] so it can give up on its
/// subtree without taking the rest of the page down.
#[derive(Clone, PartialEq)]
pub struct FaultReporter {
    report: Callback<String>,
}

impl FaultReporter {
    pub fn report(&self, detail: impl Into<String>) {
        self.report.emit(detail.into());
    }
}

#[hook]
pub fn use_fault_reporter() -> Option<FaultReporter> {
    use_context::<FaultReporter>()
}

#[derive(Properties, PartialEq)]
pub struct FaultBoundaryProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FaultBoundary)]
pub fn fault_boundary(props: &FaultBoundaryProps) -> Html {
    let state = use_reducer(BoundaryState::default);

    let reporter = {
        let state = state.clone();
        FaultReporter {
            report: Callback::from(move |detail: String| {
                log::error!("Content fault: {}", detail);
                state.dispatch(BoundaryAction::Report(detail));
            }),
        }
    };

    // a fault belongs to the page it happened on
    {
        let state = state.clone();
        let path = use_location()
            .map(|location| location.path().to_string())
            .unwrap_or_default();
        use_effect_with_deps(
            move |_| {
                if state.fault().is_some() {
                    state.dispatch(BoundaryAction::Retry);
                }
                || ()
            },
            path,
        );
    }

    let on_retry = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(BoundaryAction::Retry))
    };

    if state.fault().is_some() {
        return html! {
            <section class="fault-view">
                <h2>{"Something went wrong"}</h2>
                <p>{"This part of the page could not be shown. You can try again or head back to the home page."}</p>
                <div class="fault-actions">
                    <button type="button" class="hero-cta" onclick={on_retry}>{"Try again"}</button>
                    <Link<Route> to={Route::Home} classes="fault-home-link">{"Go to home page"}</Link<Route>>
                </div>
                <style>
                    {r#"
                    .fault-view {
                        max-width: 640px;
                        margin: 8rem auto;
                        padding: 3rem 2rem;
                        text-align: center;
                        background: #fbf8f3;
                        border: 1px solid rgba(27, 54, 93, 0.12);
                        border-radius: 12px;
                    }
                    .fault-view h2 {
                        color: #1b365d;
                        margin-bottom: 1rem;
                    }
                    .fault-actions {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                        margin-top: 2rem;
                    }
                    "#}
                </style>
            </section>
        };
    }

    html! {
        <ContextProvider<FaultReporter> context={reporter}>
            // keyed on the attempt so "Try again" remounts the subtree from scratch
            <div key={state.attempt()} class="fault-boundary">
                { for props.children.iter() }
            </div>
        </ContextProvider<FaultReporter>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_report_is_kept() {
        let state = Rc::new(BoundaryState::default())
            .reduce(BoundaryAction::Report("image failed".into()))
            .reduce(BoundaryAction::Report("layout failed".into()));
        assert_eq!(state.fault(), Some("image failed"));
    }

    #[test]
    fn retry_clears_fault_and_bumps_attempt() {
        let state = Rc::new(BoundaryState::default())
            .reduce(BoundaryAction::Report("boom".into()))
            .reduce(BoundaryAction::Retry);
        assert_eq!(state.fault(), None);
        assert_eq!(state.attempt(), 1);

        let state = state
            .reduce(BoundaryAction::Report("again".into()))
            .reduce(BoundaryAction::Retry);
        assert_eq!(state.attempt(), 2);
    }
}
