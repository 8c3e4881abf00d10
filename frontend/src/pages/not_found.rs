use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::scroll::use_scroll_to_top;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_scroll_to_top();

    html! {
        <section class="hero not-found">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for has moved or never existed."}</p>
            <div class="not-found__actions">
                <Button to={Route::Home} size={ButtonSize::Lg}>{"Back to home"}</Button>
                <Button to={Route::Contact} variant={ButtonVariant::Secondary} size={ButtonSize::Lg}>
                    {"Contact us"}
                </Button>
            </div>
            <style>
                {r#"
                .not-found {
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .not-found h1 {
                    font-size: 6rem;
                }
                .not-found__actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </section>
    }
}
