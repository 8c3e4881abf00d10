use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::content::{Article, CaseStudy, Service};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub practice: AttrValue,
    pub to: Route,
}

impl ServiceCardProps {
    pub fn from_service(service: &Service) -> Self {
        Self {
            title: service.title.into(),
            description: service.summary.into(),
            practice: service.practice.into(),
            to: Route::ServiceDetail { slug: service.slug.to_string() },
        }
    }
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes={classes!("card", "card--service")}>
            <span class="card__eyebrow">{ props.practice.clone() }</span>
            <h4 class="card__title">{ props.title.clone() }</h4>
            <p class="card__text">{ props.description.clone() }</p>
            <span class="card__more">{"Learn more →"}</span>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyCardProps {
    pub client: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    pub image: AttrValue,
    pub tags: Vec<AttrValue>,
    pub to: Route,
}

impl CaseStudyCardProps {
    pub fn from_case_study(study: &CaseStudy) -> Self {
        Self {
            client: study.client.into(),
            title: study.title.into(),
            description: study.summary.into(),
            image: study.image.into(),
            tags: study.tags.iter().map(|t| AttrValue::from(*t)).collect(),
            to: Route::CaseStudyDetail { slug: study.slug.to_string() },
        }
    }
}

#[function_component(CaseStudyCard)]
pub fn case_study_card(props: &CaseStudyCardProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes={classes!("card", "card--case-study")}>
            <img class="card__image" src={props.image.clone()} alt={props.client.clone()} loading="lazy" />
            <div class="card__content">
                <span class="card__eyebrow">{ props.client.clone() }</span>
                <h4 class="card__title">{ props.title.clone() }</h4>
                <p class="card__text">{ props.description.clone() }</p>
                <div class="card__tags">
                    { for props.tags.iter().map(|tag| html! { <Badge>{ tag.clone() }</Badge> }) }
                </div>
            </div>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub title: AttrValue,
    pub excerpt: AttrValue,
    pub category: AttrValue,
    pub date: AttrValue,
    pub read_time: AttrValue,
    pub image: AttrValue,
    pub to: Route,
}

impl ArticleCardProps {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.into(),
            excerpt: article.excerpt.into(),
            category: article.category.into(),
            date: article.display_date().into(),
            read_time: article.read_time().into(),
            image: article.image.into(),
            to: Route::BlogPost { slug: article.slug.to_string() },
        }
    }
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes={classes!("card", "card--article")}>
            <div class="card__media">
                <img class="card__image" src={props.image.clone()} alt={props.title.clone()} loading="lazy" />
                <Badge variant={BadgeVariant::Purple}>{ props.category.clone() }</Badge>
            </div>
            <div class="card__content">
                <div class="card__meta">
                    <span>{ props.date.clone() }</span>
                    <span>{" • "}</span>
                    <span>{ props.read_time.clone() }</span>
                </div>
                <h3 class="card__title">{ props.title.clone() }</h3>
                <p class="card__text">{ props.excerpt.clone() }</p>
                <span class="card__more">{"Read article →"}</span>
            </div>
        </Link<Route>>
    }
}
