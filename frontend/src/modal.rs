use std::rc::Rc;
use yew::prelude::*;

/// Visibility of the contact modal for the whole session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }
}

pub enum ModalAction {
    Open,
    Close,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = matches!(action, ModalAction::Open);
        if self.open == open {
            // same Rc back, so subscribers skip the re-render
            self
        } else {
            Rc::new(ModalState { open })
        }
    }
}

/// The only way to touch [`ModalState`]. Triggers call `open`, the modal
/// itself reads `is_open` and calls `close`.
#[derive(Clone, PartialEq)]
pub struct ModalHandle {
    state: UseReducerHandle<ModalState>,
}

impl ModalHandle {
    pub fn open(&self) {
        self.state.dispatch(ModalAction::Open);
    }

    pub fn close(&self) {
        self.state.dispatch(ModalAction::Close);
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let state = use_reducer(ModalState::default);
    let handle = ModalHandle { state };

    html! {
        <ContextProvider<ModalHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<ModalHandle>>
    }
}

#[hook]
pub fn use_modal() -> ModalHandle {
    use_context::<ModalHandle>().expect("ModalProvider must wrap the app")
}

#[derive(Properties, PartialEq)]
pub struct ContactTriggerProps {
    #[prop_or(AttrValue::Static("Contact"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Any button that should bring up the contact modal.
#[function_component(ContactTrigger)]
pub fn contact_trigger(props: &ContactTriggerProps) -> Html {
    let modal = use_modal();
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        modal.open();
    });

    html! {
        <button type="button" class={classes!("contact-trigger", props.class.clone())} {onclick}>
            { props.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(actions: impl IntoIterator<Item = ModalAction>) -> Rc<ModalState> {
        actions
            .into_iter()
            .fold(Rc::new(ModalState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn starts_closed() {
        assert!(!ModalState::default().is_open());
    }

    #[test]
    fn repeated_open_stays_open() {
        let state = apply([ModalAction::Open, ModalAction::Open, ModalAction::Open]);
        assert!(state.is_open());
    }

    #[test]
    fn close_wins_at_any_point() {
        assert!(!apply([ModalAction::Open, ModalAction::Close]).is_open());
        assert!(!apply([ModalAction::Close]).is_open());
        assert!(!apply([ModalAction::Open, ModalAction::Open, ModalAction::Close, ModalAction::Close]).is_open());
        assert!(apply([ModalAction::Close, ModalAction::Open]).is_open());
    }

    #[test]
    fn redundant_actions_return_the_same_state() {
        let open = Rc::new(ModalState::default()).reduce(ModalAction::Open);
        let again = open.clone().reduce(ModalAction::Open);
        assert!(Rc::ptr_eq(&open, &again));

        let closed = Rc::new(ModalState::default());
        let still_closed = closed.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&closed, &still_closed));
    }
}
