use yew::prelude::*;
use yew_router::components::Link;
use crate::components::motion::{Reveal, StaggerItem, StaggeredList};
use crate::modal::ContactTrigger;
use crate::Route;

struct Service {
    icon: &'static str,
    name: &'static str,
    summary: &'static str,
    includes: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        icon: "📜",
        name: "Wills",
        summary: "A clear will naming guardians, executors and who receives what.",
        includes: &["Guardianship for minor children", "Specific gifts and residuary clauses", "Executor briefing letter"],
    },
    Service {
        icon: "🏛️",
        name: "Revocable living trusts",
        summary: "Keep the estate out of probate and the details out of public record.",
        includes: &["Trust agreement and pour-over will", "Funding checklist for accounts and property", "Successor trustee guide"],
    },
    Service {
        icon: "🛡️",
        name: "Incapacity planning",
        summary: "Someone you trust can act for you if you cannot.",
        includes: &["Durable power of attorney", "Healthcare directive", "HIPAA authorisations"],
    },
    Service {
        icon: "🤝",
        name: "Business succession",
        summary: "A plan for who runs, owns and buys out the business.",
        includes: &["Buy-sell agreement review", "Key-person planning", "Ownership transfer timeline"],
    },
    Service {
        icon: "🔄",
        name: "Plan reviews",
        summary: "An existing plan checked against your family as it is today.",
        includes: &["Beneficiary designation audit", "Trust funding audit", "Written list of recommended changes"],
    },
];

fn service_items() -> Vec<StaggerItem> {
    SERVICES
        .iter()
        .map(|service| {
            StaggerItem::new(Some(service.icon), html! {
                <>
                    <h3>{ service.name }</h3>
                    <p>{ service.summary }</p>
                    <ul class="service-includes">
                        { for service.includes.iter().map(|item| html! { <li>{ *item }</li> }) }
                    </ul>
                </>
            })
        })
        .collect()
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <Reveal class="services-hero">
                <h1>{"Services"}</h1>
                <p>{"Every engagement starts with a free call and ends with documents you understand. Fees are flat and quoted in writing."}</p>
            </Reveal>

            <section class="services-section">
                <StaggeredList items={service_items()} stagger_ms={100} class="service-list" />
            </section>

            <section class="services-section services-cta">
                <Reveal>
                    <h2>{"Not sure which you need?"}</h2>
                    <p>{"Most families need two or three of these. Our questionnaire tells us which, before we speak."}</p>
                    <Link<Route> to={Route::Qualify} classes="forward-link">
                        <button class="hero-cta">{"Take the questionnaire"}</button>
                    </Link<Route>>
                    <p class="services-contact">
                        {"Or "}
                        <ContactTrigger label="ask us directly" class="inline-contact" />
                    </p>
                </Reveal>
            </section>

            <style>
                {r#"
                .services-page {
                    padding-top: 74px;
                    background: #fbf8f3;
                    color: #1f2937;
                }
                .services-hero {
                    text-align: center;
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 5rem 2rem 2rem;
                }
                .services-hero h1 {
                    font-family: Georgia, serif;
                    font-size: 3rem;
                    color: #1b365d;
                    margin-bottom: 1rem;
                }
                .services-hero p {
                    color: #4b5563;
                    font-size: 1.15rem;
                    line-height: 1.6;
                }
                .services-section {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .service-list {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .service-list h3 {
                    color: #1b365d;
                    margin-bottom: 0.5rem;
                }
                .service-includes {
                    margin-top: 0.8rem;
                    padding-left: 1.1rem;
                    color: #4b5563;
                    font-size: 0.95rem;
                }
                .services-cta {
                    text-align: center;
                    padding-bottom: 5rem;
                }
                .services-cta h2 {
                    font-family: Georgia, serif;
                    color: #1b365d;
                    margin-bottom: 0.8rem;
                }
                .services-cta p {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }
                .inline-contact {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #1b365d;
                    text-decoration: underline;
                    font: inherit;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
