use yew::prelude::*;
use yew_router::components::Link;
use crate::components::motion::{Reveal, StaggerItem, StaggeredList};
use crate::config;
use crate::modal::ContactTrigger;
use crate::Route;

fn values() -> Vec<StaggerItem> {
    vec![
        StaggerItem::new(None, html! {
            <>
                <h3>{"Plain language"}</h3>
                <p>{"If a clause needs a lawyer to explain it, we explain it before you sign."}</p>
            </>
        }),
        StaggerItem::new(None, html! {
            <>
                <h3>{"Flat fees"}</h3>
                <p>{"You get a written quote after the first call. It does not change."}</p>
            </>
        }),
        StaggerItem::new(None, html! {
            <>
                <h3>{"Plans that get reviewed"}</h3>
                <p>{"Births, marriages, a new business. We check in every two years so your plan keeps up."}</p>
            </>
        }),
    ]
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <Reveal class="about-hero">
                <h1>{format!("About {}", config::SITE_NAME)}</h1>
                <p>
                    {"We are a small team of estate planning advisors. For fifteen years we have helped families, farmers and business owners decide what happens to what they have built."}
                </p>
            </Reveal>

            <section class="about-section">
                <Reveal delay_ms={100}>
                    <h2>{"Why we started"}</h2>
                    <p>
                        {"Most of the families we meet come to us after a probate that took two years and cost a fifth of the estate. Nearly all of it was avoidable with a few hours of planning. We started the practice to make those hours easy to book and easy to understand."}
                    </p>
                </Reveal>
            </section>

            <section class="about-section">
                <Reveal>
                    <h2>{"How we work"}</h2>
                </Reveal>
                <StaggeredList items={values()} class="values-list" />
            </section>

            <section class="about-section about-cta">
                <Reveal>
                    <h2>{"Start with a conversation"}</h2>
                    <div class="about-cta-buttons">
                        <Link<Route> to={Route::Qualify} classes="forward-link">
                            <button class="hero-cta">{"See if we're a fit"}</button>
                        </Link<Route>>
                        <ContactTrigger label="Send us a message" class="hero-secondary" />
                    </div>
                </Reveal>
            </section>

            <style>
                {r#"
                .about-page {
                    padding-top: 74px;
                    background: #fbf8f3;
                    color: #1f2937;
                }
                .about-hero {
                    text-align: center;
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 5rem 2rem 2rem;
                }
                .about-hero h1 {
                    font-family: Georgia, serif;
                    font-size: 3rem;
                    color: #1b365d;
                    margin-bottom: 1.2rem;
                }
                .about-hero p {
                    font-size: 1.15rem;
                    line-height: 1.7;
                    color: #4b5563;
                }
                .about-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .about-section h2 {
                    font-family: Georgia, serif;
                    color: #1b365d;
                    margin-bottom: 1rem;
                }
                .about-section p {
                    line-height: 1.75;
                }
                .values-list .stagger-item {
                    margin-bottom: 1rem;
                }
                .about-cta {
                    text-align: center;
                    padding-bottom: 5rem;
                }
                .about-cta-buttons {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                    flex-wrap: wrap;
                }
                .hero-secondary {
                    background: transparent;
                    border: 1px solid #1b365d;
                    color: #1b365d;
                    padding: 0.95rem 2rem;
                    font-size: 1.05rem;
                    border-radius: 8px;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
