use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Tag,
    Green,
    Purple,
    Blue,
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub children: Children,
    #[prop_or(BadgeVariant::Tag)]
    pub variant: BadgeVariant,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let variant = match props.variant {
        BadgeVariant::Tag => "badge--tag",
        BadgeVariant::Green => "badge--green",
        BadgeVariant::Purple => "badge--purple",
        BadgeVariant::Blue => "badge--blue",
    };

    html! {
        <span class={classes!("badge", variant)}>{ for props.children.iter() }</span>
    }
}
