use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, PartialEq)]
pub struct Crumb {
    pub label: AttrValue,
    pub to: Option<Route>,
}

impl Crumb {
    pub fn link(label: impl Into<AttrValue>, to: Route) -> Self {
        Self { label: label.into(), to: Some(to) }
    }

    pub fn here(label: impl Into<AttrValue>) -> Self {
        Self { label: label.into(), to: None }
    }
}

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    pub items: Vec<Crumb>,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    let last = props.items.len().saturating_sub(1);

    html! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            <Link<Route> to={Route::Home} classes={classes!("breadcrumb__link")}>{"Home"}</Link<Route>>
            { for props.items.iter().enumerate().map(|(i, crumb)| html! {
                <>
                    <span class="breadcrumb__sep">{"›"}</span>
                    {
                        match (&crumb.to, i == last) {
                            (Some(route), false) => html! {
                                <Link<Route> to={route.clone()} classes={classes!("breadcrumb__link")}>{ crumb.label.clone() }</Link<Route>>
                            },
                            _ => html! {
                                <span class="breadcrumb__current" aria-current="page">{ crumb.label.clone() }</span>
                            },
                        }
                    }
                </>
            }) }
        </nav>
    }
}
