use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod config;
mod forms;
mod layout;
mod modal;
mod scroll_reset;
mod components {
    pub mod contact_modal;
    pub mod fault_boundary;
    pub mod footer;
    pub mod motion;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod blog;
    pub mod webinar;
    pub mod qualify;
    pub mod schedule_call;
    pub mod termsprivacy;
    pub mod not_found;
}
mod blog {
    pub mod posts;
}

use components::{
    contact_modal::ContactModal,
    fault_boundary::FaultBoundary,
    motion::MotionProvider,
};
use layout::Layout;
use modal::{ContactTrigger, ModalProvider};
use pages::{
    home::Home,
    about::About,
    services::Services,
    blog::{Blog, BlogPostPage},
    webinar::{Webinar, WebinarRegistered},
    qualify::Qualify,
    schedule_call::ScheduleCall,
    termsprivacy::{TermsAndConditions, PrivacyPolicy},
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/webinar")]
    Webinar,
    #[at("/webinar/registered")]
    WebinarRegistered,
    #[at("/qualify")]
    Qualify,
    #[at("/schedule-call")]
    ScheduleCall,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPostPage slug={slug} /> }
        },
        Route::Webinar => {
            info!("Rendering Webinar page");
            html! { <Webinar /> }
        },
        Route::WebinarRegistered => {
            info!("Rendering Webinar confirmation page");
            html! { <WebinarRegistered /> }
        },
        Route::Qualify => {
            info!("Rendering Qualify page");
            html! { <Qualify /> }
        },
        Route::ScheduleCall => {
            info!("Rendering Schedule call page");
            html! { <ScheduleCall /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering Not found page");
            html! { <NotFound /> }
        },
    }
}


/// The full site header. Funnel pages render without it.
#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_top = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 80.0);
                    }) as Box<dyn FnMut()>)
                };
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::SITE_NAME }
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Webinar} classes="nav-link">
                            {"Free webinar"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <ContactTrigger class="nav-contact-button" />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(251, 248, 243, 0.96);
                    box-shadow: 0 2px 12px rgba(27, 54, 93, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1.2rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-family: Georgia, serif;
                    font-size: 1.4rem;
                    color: #1b365d;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }
                .nav-link {
                    color: #1f2937;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #1b365d;
                }
                .nav-contact-button {
                    background: #1b365d;
                    color: #fff;
                    border: none;
                    padding: 0.6rem 1.3rem;
                    border-radius: 6px;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1b365d;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: #fbf8f3;
                        padding: 1.5rem 2rem;
                        gap: 1.2rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <MotionProvider>
                <ModalProvider>
                    <FaultBoundary>
                        <Layout>
                            <FaultBoundary>
                                <Switch<Route> render={switch} />
                            </FaultBoundary>
                        </Layout>
                        <ContactModal />
                    </FaultBoundary>
                </ModalProvider>
            </MotionProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
