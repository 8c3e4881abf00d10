use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Link,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[prop_or(ButtonSize::Md)]
    pub size: ButtonSize,
    #[prop_or_default]
    pub to: Option<Route>,
    // Opens in a new tab.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

fn button_classes(props: &ButtonProps) -> Classes {
    let variant = match props.variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Link => "btn--link",
    };
    let size = match (props.variant, props.size) {
        (ButtonVariant::Link, _) => None,
        (_, ButtonSize::Sm) => Some("btn--sm"),
        (_, ButtonSize::Md) => Some("btn--md"),
        (_, ButtonSize::Lg) => Some("btn--lg"),
    };
    classes!("btn", variant, size, props.class.clone())
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = button_classes(props);
    let arrow = (props.variant == ButtonVariant::Link)
        .then(|| html! { <span class="btn__arrow">{"→"}</span> });

    if let Some(route) = &props.to {
        return html! {
            <Link<Route> to={route.clone()} classes={classes}>
                { for props.children.iter() }
                { arrow }
            </Link<Route>>
        };
    }

    if let Some(href) = &props.href {
        return html! {
            <a href={href.clone()} class={classes} target="_blank" rel="noopener noreferrer">
                { for props.children.iter() }
                { arrow }
            </a>
        };
    }

    html! {
        <button
            type={if props.submit { "submit" } else { "button" }}
            class={classes}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
            { arrow }
        </button>
    }
}
