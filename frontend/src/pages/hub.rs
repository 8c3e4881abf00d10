use yew::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::breadcrumb::{Breadcrumb, Crumb};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::cards::{ArticleCard, ArticleCardProps};
use crate::components::scroll::use_scroll_to_top;
use crate::content;
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Hub)]
pub fn hub() -> Html {
    use_scroll_to_top();
    let category = use_state(|| None::<&'static str>);

    let select = |choice: Option<&'static str>| {
        let category = category.clone();
        Callback::from(move |_: MouseEvent| category.set(choice))
    };
    let filter_button = |label: &'static str, choice: Option<&'static str>| {
        let variant = if *category == choice {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Secondary
        };
        html! {
            <Button variant={variant} size={ButtonSize::Sm} onclick={select(choice)}>{ label }</Button>
        }
    };

    let articles = content::articles_in(*category);

    html! {
        <div class="hub-page">
            <section class="hero">
                <Badge variant={BadgeVariant::Blue}>{"Insights Hub"}</Badge>
                <h1>{"Field notes from production."}</h1>
                <p>{"What we learn shipping data and AI platforms, written by the engineers who did the work."}</p>
            </section>

            <section class="section">
                <div class="hub-filters" role="toolbar" aria-label="Filter by category">
                    { filter_button("All", None) }
                    { for content::article_categories().into_iter().map(|c| filter_button(c, Some(c))) }
                </div>
                if articles.is_empty() {
                    <p class="hub-empty">{"Nothing published in this category yet."}</p>
                } else {
                    <div class="grid">
                        { for articles.into_iter().map(|article| html! {
                            <ArticleCard ..ArticleCardProps::from_article(article) />
                        }) }
                    </div>
                }
            </section>

            <style>
                {r#"
                .hub-filters {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }
                .hub-empty {
                    color: var(--muted);
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    use_scroll_to_top();

    let Some(article) = content::article_by_slug(&props.slug) else {
        log::warn!("No article found for slug {}", props.slug);
        return html! { <NotFound /> };
    };
    let related: Vec<_> = content::articles_in(Some(article.category))
        .into_iter()
        .filter(|other| other.slug != article.slug)
        .take(2)
        .collect();

    html! {
        <article class="blog-post">
            <header class="hero">
                <Breadcrumb items={vec![
                    Crumb::link("Hub", Route::Hub),
                    Crumb::here(article.title),
                ]} />
                <Badge variant={BadgeVariant::Purple}>{ article.category }</Badge>
                <h1>{ article.title }</h1>
                <div class="blog-post__byline">
                    <Avatar name={article.author} src={Some(AttrValue::Static(article.author_photo))} size={40} />
                    <div>
                        <strong>{ article.author }</strong>
                        <span>{ format!("{} · {}", article.display_date(), article.read_time()) }</span>
                    </div>
                </div>
            </header>

            <img class="blog-post__image" src={article.image} alt={article.title} />

            <div class="section prose">
                { for article.body.iter().map(|para| html! { <p>{ *para }</p> }) }
            </div>

            if !related.is_empty() {
                <section class="section">
                    <h2>{"Keep reading"}</h2>
                    <div class="grid">
                        { for related.into_iter().map(|other| html! {
                            <ArticleCard ..ArticleCardProps::from_article(other) />
                        }) }
                    </div>
                </section>
            }

            <section class="section">
                <Button variant={ButtonVariant::Link} to={Route::Hub}>{"Back to the hub"}</Button>
            </section>

            <style>
                {r#"
                .blog-post__byline {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .blog-post__byline span {
                    display: block;
                    font-size: 0.85rem;
                    color: var(--muted);
                }
                .blog-post__image {
                    display: block;
                    width: 100%;
                    max-width: 1180px;
                    margin: 0 auto;
                    max-height: 460px;
                    object-fit: cover;
                    border-radius: 16px;
                }
                "#}
            </style>
        </article>
    }
}
