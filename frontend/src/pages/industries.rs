use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::badge::Badge;
use crate::components::breadcrumb::{Breadcrumb, Crumb};
use crate::components::button::{Button, ButtonSize};
use crate::components::cards::{CaseStudyCard, CaseStudyCardProps};
use crate::components::scroll::use_scroll_to_top;
use crate::content;
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Industries)]
pub fn industries() -> Html {
    use_scroll_to_top();

    html! {
        <div class="industries-page">
            <section class="hero">
                <Badge>{"Industries"}</Badge>
                <h1>{"Regulated, high-stakes, data-heavy."}</h1>
                <p>{"We work where compliance, scale and uptime are not negotiable."}</p>
            </section>
            <section class="section">
                <div class="grid grid--2">
                    { for content::INDUSTRIES.iter().map(|industry| html! {
                        <Link<Route>
                            to={Route::IndustryDetail { slug: industry.slug.to_string() }}
                            classes={classes!("card", "industry-card")}
                        >
                            <div class="card__content">
                                <h3 class="card__title">{ industry.name }</h3>
                                <p class="card__text">{ industry.summary }</p>
                                <span class="card__more">{"Explore →"}</span>
                            </div>
                        </Link<Route>>
                    }) }
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IndustryDetailProps {
    pub slug: String,
}

#[function_component(IndustryDetail)]
pub fn industry_detail(props: &IndustryDetailProps) -> Html {
    use_scroll_to_top();

    let Some(industry) = content::industry_by_slug(&props.slug) else {
        log::warn!("No industry found for slug {}", props.slug);
        return html! { <NotFound /> };
    };
    let studies: Vec<Html> = content::case_studies_in(industry.slug)
        .map(|study| html! { <CaseStudyCard ..CaseStudyCardProps::from_case_study(study) /> })
        .collect();

    html! {
        <div class="industry-detail">
            <section class="hero">
                <Breadcrumb items={vec![
                    Crumb::link("Industries", Route::Industries),
                    Crumb::here(industry.name),
                ]} />
                <h1>{ industry.name }</h1>
                <p>{ industry.summary }</p>
            </section>

            <section class="section">
                <h2>{"Challenges we solve"}</h2>
                <ul class="check-list">
                    { for industry.challenges.iter().map(|c| html! { <li>{ *c }</li> }) }
                </ul>
            </section>

            <section class="section">
                <h2>{"Case studies"}</h2>
                if studies.is_empty() {
                    <p>{"Our published work in this sector is under NDA. Ask us for a private walkthrough."}</p>
                } else {
                    <div class="grid">{ for studies }</div>
                }
                <Button to={Route::Contact} size={ButtonSize::Lg}>{"Talk to a sector lead"}</Button>
            </section>
        </div>
    }
}
