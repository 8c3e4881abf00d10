use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::cards::{ServiceCard, ServiceCardProps};
use crate::components::carousel::Carousel;
use crate::components::scroll::use_scroll_to_top;
use crate::content::{self, CaseStudy};
use crate::Route;

fn featured_slide(study: &CaseStudy) -> Html {
    html! {
        <article class="featured-slide">
            <img class="featured-slide__image" src={study.image} alt={study.client} loading="lazy" />
            <div class="featured-slide__body">
                <span class="featured-slide__client">{ study.client }</span>
                <h3>{ study.title }</h3>
                <p>{ study.summary }</p>
                <div class="featured-slide__metrics">
                    { for study.metrics.iter().map(|m| html! {
                        <div class="metric">
                            <strong>{ m.value }</strong>
                            <span>{ m.label }</span>
                        </div>
                    }) }
                </div>
                <Button variant={ButtonVariant::Link} to={Route::CaseStudyDetail { slug: study.slug.to_string() }}>
                    {"Read the case study"}
                </Button>
            </div>
        </article>
    }
}

fn testimonial_slide(quote: &str, attribution: &str) -> Html {
    html! {
        <blockquote class="testimonial">
            <p>{ format!("\u{201c}{}\u{201d}", quote) }</p>
            <cite>{ attribution.to_string() }</cite>
        </blockquote>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    let testimonials: Vec<Html> = content::CASE_STUDIES
        .iter()
        .filter_map(|study| study.quote)
        .map(|(quote, attribution)| testimonial_slide(quote, attribution))
        .collect();

    html! {
        <div class="home-page">
            <section class="hero home-hero">
                <Badge variant={BadgeVariant::Blue}>{"Google Cloud Premier Partner"}</Badge>
                <h1>{"Engineering the AI-native enterprise."}</h1>
                <p class="home-hero__lead">
                    {"We design, build and run data platforms and generative AI systems on Google Cloud, from the first architecture review to production."}
                </p>
                <div class="home-hero__actions">
                    <Button to={Route::Contact} size={ButtonSize::Lg}>{"Book a Call"}</Button>
                    <Button to={Route::CaseStudies} variant={ButtonVariant::Secondary} size={ButtonSize::Lg}>
                        {"See our work"}
                    </Button>
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2>{"What we do"}</h2>
                    <Button variant={ButtonVariant::Link} to={Route::Services}>{"All services"}</Button>
                </div>
                <div class="grid grid--2">
                    { for content::SERVICES.iter().map(|service| html! {
                        <ServiceCard ..ServiceCardProps::from_service(service) />
                    }) }
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2>{"Featured work"}</h2>
                    <Button variant={ButtonVariant::Link} to={Route::CaseStudies}>{"All case studies"}</Button>
                </div>
                <Carousel auto_play=true label="Featured case studies">
                    { for content::CASE_STUDIES.iter().map(featured_slide) }
                </Carousel>
            </section>

            if !testimonials.is_empty() {
                <section class="section">
                    <h2>{"What our clients say"}</h2>
                    <Carousel auto_play=true interval_ms={7_000} label="Client testimonials">
                        { for testimonials }
                    </Carousel>
                </section>
            }

            <section class="section home-faq">
                <h2>{"Common questions"}</h2>
                <Accordion items={vec![
                    AccordionItem::text(
                        "How does an engagement usually start?",
                        "With a two-week discovery sprint. We map your current platform, agree on the outcomes that matter and leave you with a costed roadmap whether or not we build it together.",
                    ),
                    AccordionItem::text(
                        "Do you only work on Google Cloud?",
                        "Google Cloud is where we are deepest, and we routinely integrate with workloads that stay on AWS, Azure or on-premises.",
                    ),
                    AccordionItem::text(
                        "Can you work alongside our in-house team?",
                        "Most of our engagements are blended teams. We pair with your engineers so the capability stays when we leave.",
                    ),
                ]} />
            </section>

            <section class="section home-cta">
                <h2>{"Ready to move from pilot to production?"}</h2>
                <Button to={Route::Contact} size={ButtonSize::Lg}>{"Talk to an architect"}</Button>
            </section>

            <style>
                {r#"
                .home-hero {
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .home-hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    max-width: 900px;
                }
                .home-hero__lead {
                    font-size: 1.2rem;
                    color: var(--muted);
                    max-width: 680px;
                }
                .home-hero__actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .featured-slide {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                }
                .featured-slide__image {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 12px;
                }
                .featured-slide__client {
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    font-size: 0.8rem;
                    color: var(--muted);
                }
                .featured-slide__metrics {
                    display: flex;
                    gap: 2rem;
                    margin: 1.5rem 0;
                }
                .metric strong {
                    display: block;
                    font-size: 1.75rem;
                }
                .metric span {
                    font-size: 0.85rem;
                    color: var(--muted);
                }
                .testimonial {
                    margin: 0 auto;
                    max-width: 760px;
                    text-align: center;
                    font-size: 1.25rem;
                }
                .testimonial cite {
                    display: block;
                    margin-top: 1rem;
                    font-size: 0.9rem;
                    color: var(--muted);
                }
                .home-faq {
                    max-width: 800px;
                }
                .home-cta {
                    text-align: center;
                }
                @media (max-width: 900px) {
                    .featured-slide {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
