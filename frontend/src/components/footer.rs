use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::modal::ContactTrigger;
use crate::Route;

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">{ config::SITE_NAME }</Link<Route>>
                    <p>{"Estate, trust and succession planning for families who want the next chapter handled with care."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Planning"}</h4>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Webinar}>{"Free webinar"}</Link<Route>>
                    <Link<Route> to={Route::Qualify}>{"See if we're a fit"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Get in touch"}</h4>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                    <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{ config::CONTACT_PHONE }</a>
                    <ContactTrigger label="Send us a message" class="footer-contact" />
                </div>
            </div>
            <div class="footer-bottom">
                <span>{ format!("© {} {}", current_year(), config::SITE_NAME) }</span>
                <span class="footer-legal">
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                </span>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #1b365d;
                    color: rgba(255, 255, 255, 0.85);
                    padding: 4rem 2rem 2rem;
                }
                .footer-columns {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1.3fr;
                    gap: 2.5rem;
                }
                .footer-logo {
                    font-family: Georgia, serif;
                    font-size: 1.4rem;
                    color: #fff;
                    text-decoration: none;
                }
                .footer-brand p {
                    margin-top: 1rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.7);
                }
                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .footer-column h4 {
                    color: #c9a86a;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    font-size: 0.85rem;
                    margin-bottom: 0.4rem;
                }
                .footer-column a {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                }
                .footer-column a:hover {
                    color: #fff;
                }
                .footer-contact {
                    align-self: flex-start;
                    margin-top: 0.5rem;
                    background: transparent;
                    border: 1px solid #c9a86a;
                    color: #c9a86a;
                    padding: 0.6rem 1.2rem;
                    border-radius: 6px;
                    cursor: pointer;
                }
                .footer-contact:hover {
                    background: #c9a86a;
                    color: #1b365d;
                }
                .footer-bottom {
                    max-width: 1100px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.15);
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.85rem;
                }
                .footer-legal a {
                    color: rgba(255, 255, 255, 0.7);
                    margin-left: 1.5rem;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .footer-columns {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .footer-legal a {
                        margin: 0 1.5rem 0 0;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

/// Funnel pages keep the visitor on task: no navigation, only legal links.
#[function_component(MinimalFooter)]
pub fn minimal_footer() -> Html {
    html! {
        <footer class="minimal-footer">
            <span>{ format!("© {} {}", current_year(), config::SITE_NAME) }</span>
            <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
            <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
            <style>
                {r#"
                .minimal-footer {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 2rem;
                    font-size: 0.85rem;
                    color: #6b7280;
                    border-top: 1px solid rgba(27, 54, 93, 0.1);
                }
                .minimal-footer a {
                    color: #6b7280;
                    text-decoration: none;
                }
                .minimal-footer a:hover {
                    color: #1b365d;
                }
                "#}
            </style>
        </footer>
    }
}
