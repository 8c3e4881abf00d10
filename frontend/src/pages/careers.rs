use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::badge::Badge;
use crate::components::button::{Button, ButtonSize};
use crate::components::scroll::use_scroll_to_top;
use crate::content::{self, Opening};
use crate::Route;

fn opening_item(opening: &Opening) -> AccordionItem {
    AccordionItem {
        question: AttrValue::from(format!("{} · {}", opening.title, opening.team)),
        answer: html! {
            <div class="opening">
                <p class="opening__location">{ opening.location }</p>
                <p>{ opening.description }</p>
            </div>
        },
    }
}

#[function_component(Careers)]
pub fn careers() -> Html {
    use_scroll_to_top();

    let openings: Vec<AccordionItem> = content::OPENINGS.iter().map(opening_item).collect();

    html! {
        <div class="careers-page">
            <section class="hero">
                <Badge>{"Careers"}</Badge>
                <h1>{"Do the best work of your career."}</h1>
                <p>{"Hard problems, senior peers and clients who let us ship. We hire for curiosity and craft."}</p>
            </section>

            <section class="section">
                <h2>{"Open roles"}</h2>
                if openings.is_empty() {
                    <p>{"No open roles right now. We still read every introduction."}</p>
                } else {
                    <Accordion items={openings} allow_multiple=true />
                }
            </section>

            <section class="section">
                <h2>{"Don't see your role?"}</h2>
                <Button to={Route::Contact} size={ButtonSize::Lg}>{"Introduce yourself"}</Button>
            </section>

            <style>
                {r#"
                .opening__location {
                    font-size: 0.85rem;
                    color: var(--muted);
                    margin-bottom: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}
