use yew::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::breadcrumb::{Breadcrumb, Crumb};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::cards::{CaseStudyCard, CaseStudyCardProps};
use crate::components::scroll::use_scroll_to_top;
use crate::content;
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    use_scroll_to_top();

    html! {
        <div class="work-page">
            <section class="hero">
                <Badge>{"Our work"}</Badge>
                <h1>{"Results, not slideware."}</h1>
                <p>{"A selection of engagements we can talk about publicly."}</p>
            </section>
            <section class="section">
                <div class="grid">
                    { for content::CASE_STUDIES.iter().map(|study| html! {
                        <CaseStudyCard ..CaseStudyCardProps::from_case_study(study) />
                    }) }
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyDetailProps {
    pub slug: String,
}

#[function_component(CaseStudyDetail)]
pub fn case_study_detail(props: &CaseStudyDetailProps) -> Html {
    use_scroll_to_top();

    let Some(study) = content::case_study_by_slug(&props.slug) else {
        log::warn!("No case study found for slug {}", props.slug);
        return html! { <NotFound /> };
    };
    let industry = content::industry_by_slug(study.industry);

    html! {
        <div class="case-study">
            <section class="hero">
                <Breadcrumb items={vec![
                    Crumb::link("Work", Route::CaseStudies),
                    Crumb::here(study.client),
                ]} />
                <div class="pill-list">
                    { for study.tags.iter().map(|tag| html! { <Badge>{ *tag }</Badge> }) }
                </div>
                <h1>{ study.title }</h1>
                <p>{ study.summary }</p>
            </section>

            <section class="section">
                <img class="case-study__image" src={study.image} alt={study.client} />
                <div class="case-study__metrics">
                    { for study.metrics.iter().map(|m| html! {
                        <div class="case-study__metric">
                            <strong>{ m.value }</strong>
                            <span>{ m.label }</span>
                        </div>
                    }) }
                </div>
            </section>

            if let Some((quote, attribution)) = study.quote {
                <section class="section">
                    <blockquote class="case-study__quote">
                        <p>{ quote }</p>
                        <cite>{ attribution }</cite>
                    </blockquote>
                </section>
            }

            <section class="section case-study__footer">
                if let Some(industry) = industry {
                    <>
                        <Badge variant={BadgeVariant::Green}>{ industry.name }</Badge>
                        <Button variant={ButtonVariant::Link} to={Route::IndustryDetail { slug: industry.slug.to_string() }}>
                            {"More from this industry"}
                        </Button>
                    </>
                }
                <Button to={Route::Contact} size={ButtonSize::Lg}>{"Start a similar project"}</Button>
            </section>

            <style>
                {r#"
                .case-study__image {
                    width: 100%;
                    max-height: 480px;
                    object-fit: cover;
                    border-radius: 16px;
                }
                .case-study__metrics {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .case-study__metric strong {
                    display: block;
                    font-size: 2.5rem;
                }
                .case-study__metric span {
                    color: var(--muted);
                }
                .case-study__quote {
                    font-size: 1.4rem;
                    border-left: 4px solid var(--primary);
                    padding-left: 1.5rem;
                    margin: 0;
                }
                .case-study__quote cite {
                    display: block;
                    font-size: 0.9rem;
                    color: var(--muted);
                    margin-top: 1rem;
                }
                .case-study__footer {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }
                "#}
            </style>
        </div>
    }
}
