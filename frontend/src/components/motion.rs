use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// Entrance delay of the `index`-th item in a staggered list.
pub fn stagger_delay_ms(index: usize, base_delay_ms: u32, stagger_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_delay_ms.saturating_add(index.saturating_mul(stagger_ms))
}

pub fn effective_timing(timing: Timing, reduced_motion: bool) -> Timing {
    if reduced_motion {
        Timing { duration_ms: 0, delay_ms: 0 }
    } else {
        timing
    }
}

/// Inline style for an element that slides up and fades in once `visible`.
pub fn entrance_style(timing: Timing, visible: bool) -> String {
    let (opacity, transform) = if visible { ("1", "none") } else { ("0", "translateY(24px)") };
    format!(
        "opacity: {opacity}; transform: {transform}; \
         transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
        d = timing.duration_ms,
        delay = timing.delay_ms,
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Reads the accessibility setting once, then follows its `change` events.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(|| reduced_motion_query().map(|q| q.matches()).unwrap_or(false));

    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let listener = reduced_motion_query().map(|query| {
                    let callback = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                        log::info!("Reduced motion preference changed: {}", event.matches());
                        reduced.set(event.matches());
                    });
                    let _ = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
                    (query, callback)
                });
                move || {
                    if let Some((query, callback)) = listener {
                        let _ = query.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    *reduced
}

#[derive(Properties, PartialEq)]
pub struct MotionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MotionProvider)]
pub fn motion_provider(props: &MotionProviderProps) -> Html {
    let reduced = use_reduced_motion();
    let preference = MotionPreference { reduced };

    html! {
        <ContextProvider<MotionPreference> context={preference}>
            { for props.children.iter() }
        </ContextProvider<MotionPreference>>
    }
}

#[hook]
fn use_motion_preference() -> MotionPreference {
    use_context::<MotionPreference>().unwrap_or_default()
}

/// Flips to `true` the first time `node` intersects the viewport and never
/// back. Browsers without IntersectionObserver just show the content.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer_parts = None;
                if let Some(element) = node.cast::<Element>() {
                    let on_intersect = {
                        let revealed = revealed.clone();
                        Closure::<dyn Fn(Array, IntersectionObserver)>::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                let intersecting = entries.iter().any(|entry| {
                                    entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting()
                                });
                                if intersecting {
                                    revealed.set(true);
                                    // once: nothing left to watch
                                    observer.disconnect();
                                }
                            },
                        )
                    };
                    match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&element);
                            observer_parts = Some((observer, on_intersect));
                        }
                        Err(_) => revealed.set(true),
                    }
                }
                move || {
                    if let Some((observer, _on_intersect)) = observer_parts {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(600)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone());
    let preference = use_motion_preference();
    let timing = effective_timing(
        Timing { duration_ms: props.duration_ms, delay_ms: props.delay_ms },
        preference.reduced,
    );

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={entrance_style(timing, revealed)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct StaggerItem {
    pub icon: Option<AttrValue>,
    pub content: Html,
}

impl StaggerItem {
    pub fn new(icon: Option<&'static str>, content: Html) -> Self {
        StaggerItem { icon: icon.map(AttrValue::Static), content }
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggeredListProps {
    pub items: Vec<StaggerItem>,
    #[prop_or(500)]
    pub duration_ms: u32,
    #[prop_or(120)]
    pub stagger_ms: u32,
    #[prop_or_default]
    pub base_delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// All items wait for the list to enter the viewport, then come in one after
/// another.
#[function_component(StaggeredList)]
pub fn staggered_list(props: &StaggeredListProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone());
    let preference = use_motion_preference();

    html! {
        <ul ref={node} class={classes!("stagger-list", props.class.clone())}>
            { for props.items.iter().enumerate().map(|(index, item)| {
                let timing = effective_timing(
                    Timing {
                        duration_ms: props.duration_ms,
                        delay_ms: stagger_delay_ms(index, props.base_delay_ms, props.stagger_ms),
                    },
                    preference.reduced,
                );
                html! {
                    <li class="stagger-item" style={entrance_style(timing, revealed)}>
                        {
                            match &item.icon {
                                Some(icon) => html! { <span class="stagger-icon" aria-hidden="true">{ icon.clone() }</span> },
                                None => html! {},
                            }
                        }
                        <div class="stagger-content">{ item.content.clone() }</div>
                    </li>
                }
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delay_grows_linearly_from_base() {
        let delays: Vec<u32> = (0..4).map(|i| stagger_delay_ms(i, 200, 150)).collect();
        assert_eq!(delays, vec![200, 350, 500, 650]);
        assert_eq!(stagger_delay_ms(0, 0, 120), 0);
    }

    #[test]
    fn stagger_delay_saturates_instead_of_overflowing() {
        assert_eq!(stagger_delay_ms(usize::MAX, 10, 2), u32::MAX);
    }

    #[test]
    fn reduced_motion_collapses_timing() {
        let timing = Timing { duration_ms: 600, delay_ms: 240 };
        assert_eq!(effective_timing(timing, false), timing);
        assert_eq!(effective_timing(timing, true), Timing { duration_ms: 0, delay_ms: 0 });
    }

    #[test]
    fn entrance_style_reflects_visibility_and_timing() {
        let hidden = entrance_style(Timing { duration_ms: 500, delay_ms: 120 }, false);
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("opacity 500ms ease-out 120ms"));

        let shown = entrance_style(Timing { duration_ms: 0, delay_ms: 0 }, true);
        assert!(shown.contains("opacity: 1"));
        assert!(shown.contains("transform: none"));
        assert!(shown.contains("0ms ease-out 0ms"));
    }
}
