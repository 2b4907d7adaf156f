use yew::prelude::*;
use yew_router::components::Link;
use crate::blog::posts::{find_post, POSTS};
use crate::components::motion::Reveal;
use crate::modal::ContactTrigger;
use crate::pages::not_found::NotFound;
use crate::Route;

const BLOG_STYLES: &str = r#"
    .blog-list-page,
    .blog-page {
        padding-top: 74px;
        min-height: 100vh;
        color: #1f2937;
        background: #fbf8f3;
    }
    .blog-list-hero,
    .blog-hero {
        text-align: center;
        padding: 5rem 2rem 3rem;
    }
    .blog-list-hero h1,
    .blog-hero h1 {
        font-family: Georgia, serif;
        font-size: 3rem;
        color: #1b365d;
        margin-bottom: 1rem;
    }
    .blog-list-hero p,
    .blog-hero p {
        font-size: 1.15rem;
        color: #4b5563;
        max-width: 640px;
        margin: 0 auto;
    }
    .blog-list-section,
    .blog-content {
        max-width: 800px;
        margin: 0 auto;
        padding: 2rem;
    }
    .blog-post-preview {
        background: #fff;
        border: 1px solid rgba(27, 54, 93, 0.1);
        border-radius: 12px;
        margin-bottom: 2rem;
        transition: all 0.3s ease;
    }
    .blog-post-preview:hover {
        border-color: rgba(27, 54, 93, 0.3);
        transform: translateY(-4px);
    }
    .blog-post-preview a {
        text-decoration: none;
        color: inherit;
        display: block;
        padding: 1.5rem;
    }
    .blog-post-preview h2 {
        font-family: Georgia, serif;
        color: #1b365d;
        font-size: 1.6rem;
    }
    .blog-post-preview p {
        color: #4b5563;
        margin: 1rem 0;
    }
    .blog-date {
        display: block;
        color: #9ca3af;
        font-size: 0.9rem;
    }
    .blog-content h2 {
        font-family: Georgia, serif;
        color: #1b365d;
        margin: 2rem 0 0.8rem;
    }
    .blog-content p {
        line-height: 1.75;
    }
    .blog-cta {
        text-align: center;
        margin: 4rem 0 2rem;
        padding: 2.5rem;
        background: #fff;
        border-radius: 12px;
        border: 1px solid rgba(27, 54, 93, 0.1);
    }
    .blog-cta h3 {
        font-family: Georgia, serif;
        color: #1b365d;
        margin-bottom: 1.5rem;
    }
    @media (max-width: 768px) {
        .blog-list-hero h1,
        .blog-hero h1 {
            font-size: 2.2rem;
        }
        .blog-list-section,
        .blog-content {
            padding: 1rem;
        }
    }
"#;

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Insights"}</h1>
                <p>{"Plain-language notes on wills, trusts and keeping the family conversation going."}</p>
            </section>
            <section class="blog-list-section">
                { for POSTS.iter().enumerate().map(|(index, post)| html! {
                    <Reveal delay_ms={(index as u32) * 100} class="blog-post-preview">
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                            <h2>{ post.title }</h2>
                            <p>{ post.summary }</p>
                            <span class="blog-date">{ post.date }</span>
                        </Link<Route>>
                    </Reveal>
                }) }
            </section>
            <style>{ BLOG_STYLES }</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    let Some(post) = find_post(&props.slug) else {
        log::warn!("No blog post with slug '{}'", props.slug);
        return html! {
            <NotFound
                title="Article not found"
                message="We couldn't find that article. It may have been renamed."
                back_to={Route::Blog}
                back_label="See all articles"
            />
        };
    };

    html! {
        <div class="blog-page">
            <section class="blog-hero">
                <h1>{ post.title }</h1>
                <p>{ post.summary }</p>
                <span class="blog-date">{ post.date }</span>
            </section>
            <section class="blog-content">
                { for post.sections.iter().map(|(heading, body)| html! {
                    <Reveal>
                        <h2>{ *heading }</h2>
                        <p>{ *body }</p>
                    </Reveal>
                }) }
                <div class="blog-cta">
                    <h3>{"Questions about your own plan?"}</h3>
                    <ContactTrigger label="Talk to an advisor" class="hero-cta" />
                </div>
                <Link<Route> to={Route::Blog} classes="back-link">{"← All articles"}</Link<Route>>
            </section>
            <style>{ BLOG_STYLES }</style>
        </div>
    }
}
