use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TooltipPosition {
    Top,
    Bottom,
}

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub children: Children,
    pub content: AttrValue,
    #[prop_or(config::TOOLTIP_SHOW_DELAY_MS)]
    pub delay_show_ms: u32,
    #[prop_or(config::TOOLTIP_HIDE_DELAY_MS)]
    pub delay_hide_ms: u32,
    #[prop_or(TooltipPosition::Top)]
    pub position: TooltipPosition,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let visible = use_state(|| false);
    // One pending show or hide at a time; replacing the slot cancels the old one.
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let show = {
        let visible = visible.clone();
        let pending = pending.clone();
        let delay = props.delay_show_ms;
        Callback::from(move |_: ()| {
            let visible = visible.clone();
            *pending.borrow_mut() = Some(Timeout::new(delay, move || visible.set(true)));
        })
    };

    let hide = {
        let visible = visible.clone();
        let pending = pending.clone();
        let delay = props.delay_hide_ms;
        Callback::from(move |_: ()| {
            let visible = visible.clone();
            *pending.borrow_mut() = Some(Timeout::new(delay, move || visible.set(false)));
        })
    };

    let bubble_class = match props.position {
        TooltipPosition::Top => "tooltip__bubble tooltip__bubble--top",
        TooltipPosition::Bottom => "tooltip__bubble tooltip__bubble--bottom",
    };

    html! {
        <div
            class="tooltip"
            onmouseenter={show.reform(|_: MouseEvent| ())}
            onmouseleave={hide.reform(|_: MouseEvent| ())}
            onfocusin={show.reform(|_: FocusEvent| ())}
            onfocusout={hide.reform(|_: FocusEvent| ())}
        >
            { for props.children.iter() }
            if *visible {
                <div class={bubble_class} role="tooltip">{ props.content.clone() }</div>
            }
        </div>
    }
}
