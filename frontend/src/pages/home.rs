use yew::prelude::*;
use yew_router::components::Link;
use crate::components::motion::{Reveal, StaggerItem, StaggeredList};
use crate::modal::ContactTrigger;
use crate::Route;

fn pillars() -> Vec<StaggerItem> {
    vec![
        StaggerItem::new(Some("📜"), html! {
            <>
                <h3>{"Wills & trusts"}</h3>
                <p>{"Documents drafted around your family, not a template."}</p>
            </>
        }),
        StaggerItem::new(Some("🏛️"), html! {
            <>
                <h3>{"Probate avoidance"}</h3>
                <p>{"Keep your estate private and your heirs out of court."}</p>
            </>
        }),
        StaggerItem::new(Some("🤝"), html! {
            <>
                <h3>{"Business succession"}</h3>
                <p>{"Hand the company on without handing over a dispute."}</p>
            </>
        }),
        StaggerItem::new(Some("🛡️"), html! {
            <>
                <h3>{"Incapacity planning"}</h3>
                <p>{"Powers of attorney and healthcare directives that work when they're needed."}</p>
            </>
        }),
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Your legacy, planned with care"}</h1>
                    <p class="hero-subtitle">
                        {"We help families put wills, trusts and succession plans in place, so the people you love inherit clarity instead of paperwork."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Qualify} classes="forward-link">
                            <button class="hero-cta">{"See if we're a fit"}</button>
                        </Link<Route>>
                        <ContactTrigger label="Ask a question" class="hero-secondary" />
                    </div>
                </div>
            </header>

            <section class="home-section">
                <Reveal>
                    <h2>{"What we do"}</h2>
                </Reveal>
                <StaggeredList items={pillars()} class="pillar-list" />
            </section>

            <section class="home-section webinar-teaser">
                <Reveal duration_ms={800}>
                    <h2>{"Free webinar: The 5 mistakes that cost families the most"}</h2>
                    <p>{"Forty-five minutes, no sales pitch, and a checklist you can use the same evening."}</p>
                    <Link<Route> to={Route::Webinar} classes="forward-link">
                        <button class="hero-cta">{"Save my seat"}</button>
                    </Link<Route>>
                </Reveal>
            </section>

            <section class="home-section">
                <Reveal>
                    <h2>{"How it works"}</h2>
                </Reveal>
                <StaggeredList
                    items={vec![
                        StaggerItem::new(Some("1"), html! { <p>{"Answer a few questions about your family and goals."}</p> }),
                        StaggerItem::new(Some("2"), html! { <p>{"Meet an advisor for a free 30-minute call."}</p> }),
                        StaggerItem::new(Some("3"), html! { <p>{"Receive a written plan and a flat-fee quote."}</p> }),
                    ]}
                    stagger_ms={180}
                    class="steps-list"
                />
            </section>

            <style>
                {r#"
                .landing-page {
                    color: #1f2937;
                    background: #fbf8f3;
                }
                .hero {
                    min-height: 86vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                    background: linear-gradient(180deg, #f3ede3 0%, #fbf8f3 100%);
                }
                .hero-content {
                    max-width: 760px;
                }
                .hero h1 {
                    font-family: Georgia, serif;
                    font-size: 3.4rem;
                    color: #1b365d;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: #4b5563;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                    margin-top: 2.5rem;
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
                .home-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }
                .home-section h2 {
                    font-family: Georgia, serif;
                    font-size: 2.2rem;
                    color: #1b365d;
                    margin-bottom: 2rem;
                    text-align: center;
                }
                .pillar-list {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .steps-list .stagger-item {
                    margin-bottom: 1rem;
                }
                .webinar-teaser {
                    text-align: center;
                }
                .webinar-teaser p {
                    color: #4b5563;
                    margin-bottom: 2rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                    .hero-cta-group {
                        flex-direction: column;
                    }
                    .pillar-list {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
