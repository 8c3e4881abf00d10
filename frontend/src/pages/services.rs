use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::breadcrumb::{Breadcrumb, Crumb};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::cards::{ServiceCard, ServiceCardProps};
use crate::components::scroll::use_scroll_to_top;
use crate::content;
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <div class="services-page">
            <section class="hero">
                <Badge>{"Services"}</Badge>
                <h1>{"From strategy to production."}</h1>
                <p>{"Four practices, one delivery team. Pick the part of the journey you need help with, or bring us in end to end."}</p>
            </section>
            <section class="section">
                <div class="grid grid--2">
                    { for content::SERVICES.iter().map(|service| html! {
                        <ServiceCard ..ServiceCardProps::from_service(service) />
                    }) }
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    use_scroll_to_top();

    let Some(service) = content::service_by_slug(&props.slug) else {
        log::warn!("No service found for slug {}", props.slug);
        return html! { <NotFound /> };
    };

    let faq: Vec<AccordionItem> = service
        .faq
        .iter()
        .map(|&(question, answer)| AccordionItem::text(question, answer))
        .collect();

    html! {
        <div class="service-detail">
            <section class="hero">
                <Breadcrumb items={vec![
                    Crumb::link("Services", Route::Services),
                    Crumb::here(service.title),
                ]} />
                <Badge variant={BadgeVariant::Purple}>{ service.practice }</Badge>
                <h1>{ service.title }</h1>
                <p>{ service.summary }</p>
                <Button to={Route::Contact} size={ButtonSize::Lg}>{"Discuss your project"}</Button>
            </section>

            <section class="section">
                <h2>{"What you get"}</h2>
                <ul class="check-list">
                    { for service.outcomes.iter().map(|outcome| html! { <li>{ *outcome }</li> }) }
                </ul>
            </section>

            if !faq.is_empty() {
                <section class="section">
                    <h2>{"Questions we hear"}</h2>
                    <Accordion items={faq} />
                </section>
            }

            <section class="section">
                <div class="section__header">
                    <h2>{"Other services"}</h2>
                    <Button variant={ButtonVariant::Link} to={Route::Services}>{"All services"}</Button>
                </div>
                <div class="grid">
                    { for content::SERVICES.iter().filter(|other| other.slug != service.slug).map(|other| html! {
                        <ServiceCard ..ServiceCardProps::from_service(other) />
                    }) }
                </div>
            </section>
        </div>
    }
}
