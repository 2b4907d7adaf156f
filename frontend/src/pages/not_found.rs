use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    #[prop_or(AttrValue::Static("Page not found"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("The page you were looking for has moved or never existed."))]
    pub message: AttrValue,
    #[prop_or(Route::Home)]
    pub back_to: Route,
    #[prop_or(AttrValue::Static("Back to the home page"))]
    pub back_label: AttrValue,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <div class="not-found-page">
            <h1>{ props.title.clone() }</h1>
            <p>{ props.message.clone() }</p>
            <Link<Route> to={props.back_to.clone()} classes="forward-link">
                <button class="hero-cta">{ props.back_label.clone() }</button>
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 60vh;
                    padding: 10rem 2rem 6rem;
                    text-align: center;
                    color: #1f2937;
                }
                .not-found-page h1 {
                    font-family: Georgia, serif;
                    font-size: 2.6rem;
                    color: #1b365d;
                    margin-bottom: 1rem;
                }
                .not-found-page p {
                    color: #4b5563;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
