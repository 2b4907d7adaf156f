use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::{Footer, MinimalFooter};
use crate::scroll_reset::use_scroll_reset;
use crate::Nav;

/// Paths belonging to the conversion flow. Matched as plain string prefixes,
/// so `/webinar/registered` is a funnel page too.
pub const FUNNEL_PREFIXES: &[&str] = &["/webinar", "/qualify", "/schedule-call"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunnelMode {
    Standard,
    Funnel,
}

pub fn classify(path: &str) -> FunnelMode {
    if FUNNEL_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        FunnelMode::Funnel
    } else {
        FunnelMode::Standard
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVariant {
    Full,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterVariant {
    Full,
    Minimal,
}

/// Which header and footer wrap the page content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chrome {
    pub header: HeaderVariant,
    pub footer: FooterVariant,
}

pub fn compose(mode: FunnelMode) -> Chrome {
    match mode {
        FunnelMode::Standard => Chrome {
            header: HeaderVariant::Full,
            footer: FooterVariant::Full,
        },
        FunnelMode::Funnel => Chrome {
            header: HeaderVariant::Hidden,
            footer: FooterVariant::Minimal,
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Wraps the routed page in the chrome that fits the current path. Runs on
/// every navigation because `use_location` changes with it.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let mode = classify(&path);
    let chrome = compose(mode);

    use_scroll_reset();

    let header = match chrome.header {
        HeaderVariant::Full => html! { <Nav /> },
        HeaderVariant::Hidden => html! {},
    };
    let footer = match chrome.footer {
        FooterVariant::Full => html! { <Footer /> },
        FooterVariant::Minimal => html! { <MinimalFooter /> },
    };
    let main_class = match mode {
        FunnelMode::Standard => "site-main",
        FunnelMode::Funnel => "site-main funnel-main",
    };

    html! {
        <>
            { header }
            <main class={main_class}>
                { for props.children.iter() }
            </main>
            { footer }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funnel_prefixes_classify_as_funnel() {
        for path in [
            "/webinar",
            "/webinar/registered",
            "/qualify",
            "/qualify?step=2",
            "/schedule-call",
            "/schedule-call/confirm",
            "/webinar-replay",
        ] {
            assert_eq!(classify(path), FunnelMode::Funnel, "{path}");
        }
    }

    #[test]
    fn everything_else_is_standard() {
        for path in [
            "",
            "/",
            "/about",
            "/blog/webinar-recap",
            "/services",
            "webinar",
            "/Webinar",
            "/schedule",
            "//webinar",
        ] {
            assert_eq!(classify(path), FunnelMode::Standard, "{path}");
        }
    }

    #[test]
    fn funnel_chrome_drops_full_header_and_uses_minimal_footer() {
        let chrome = compose(FunnelMode::Funnel);
        assert_ne!(chrome.header, HeaderVariant::Full);
        assert_eq!(chrome.footer, FooterVariant::Minimal);
    }

    #[test]
    fn standard_chrome_has_full_header_and_footer() {
        let chrome = compose(FunnelMode::Standard);
        assert_eq!(chrome.header, HeaderVariant::Full);
        assert_eq!(chrome.footer, FooterVariant::Full);
    }

    #[test]
    fn composition_follows_each_navigation() {
        let visited = ["/", "/webinar", "/about", "/qualify", "/blog"];
        let headers: Vec<_> = visited
            .iter()
            .map(|path| compose(classify(path)).header)
            .collect();
        assert_eq!(
            headers,
            vec![
                HeaderVariant::Full,
                HeaderVariant::Hidden,
                HeaderVariant::Full,
                HeaderVariant::Hidden,
                HeaderVariant::Full,
            ]
        );
    }
}
