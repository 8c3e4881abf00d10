use yew::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonSize};
use crate::components::scroll::use_scroll_to_top;
use crate::components::tooltip::{Tooltip, TooltipPosition};
use crate::content;
use crate::Route;

#[function_component(Partners)]
pub fn partners() -> Html {
    use_scroll_to_top();

    html! {
        <div class="partners-page">
            <section class="hero">
                <Badge>{"Partners"}</Badge>
                <h1>{"The ecosystem behind the work."}</h1>
                <p>{"We partner with the platforms our clients bet on, and we hold the certifications to prove it."}</p>
            </section>
            <section class="section">
                <div class="grid">
                    { for content::PARTNERS.iter().map(|partner| html! {
                        <div class="card partner-card">
                            <div class="card__content">
                                <h3 class="card__title">{ partner.name }</h3>
                                <Tooltip content={partner.detail} position={TooltipPosition::Bottom}>
                                    <Badge variant={BadgeVariant::Green}>{ partner.tier }</Badge>
                                </Tooltip>
                            </div>
                        </div>
                    }) }
                </div>
            </section>
            <section class="section partners-cta">
                <h2>{"Building on one of these platforms?"}</h2>
                <Button to={Route::Contact} size={ButtonSize::Lg}>{"Talk to a certified architect"}</Button>
            </section>
            <style>
                {r#"
                .partner-card {
                    min-height: 160px;
                }
                .partners-cta {
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
