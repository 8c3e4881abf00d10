use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::config;
use crate::consent::{self, ConsentChoice};

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let stored = consent::stored_choice();
                if let Err(e) = &stored {
                    gloo_console::warn!(format!("Cookie consent unreadable: {}", e));
                }
                let timer = consent::should_ask(&stored).then(|| {
                    Timeout::new(config::COOKIE_BANNER_DELAY_MS, move || visible.set(true))
                });
                move || drop(timer)
            },
            (),
        );
    }

    let choose = |choice: ConsentChoice| {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = consent::record_choice(choice) {
                log::error!("Failed to store cookie consent: {}", e);
            }
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="dialog" aria-label="Cookie consent">
            <p>
                {"We use cookies to analyze web traffic, personalize content, and improve our website's performance. \
                  By clicking \"Accept all\", you agree to the storing of cookies on your device."}
            </p>
            <div class="cookie-banner__actions">
                <Button variant={ButtonVariant::Secondary} size={ButtonSize::Sm} onclick={choose(ConsentChoice::Rejected)}>
                    {"Reject non-essential"}
                </Button>
                <Button size={ButtonSize::Sm} onclick={choose(ConsentChoice::Accepted)}>
                    {"Accept all"}
                </Button>
            </div>
        </div>
    }
}
