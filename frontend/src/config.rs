#[cfg(debug_assertions)]
pub fn get_form_relay_url() -> &'static str {
    "http://localhost:3001/submit"  // Local relay stub while developing
}

#[cfg(not(debug_assertions))]
pub fn get_form_relay_url() -> &'static str {
    "https://api.web3forms.com/submit"
}

#[cfg(debug_assertions)]
pub fn get_form_relay_key() -> &'static str {
    "dev-access-key"
}

#[cfg(not(debug_assertions))]
pub fn get_form_relay_key() -> &'static str {
    "3b7d2f2e-6a51-4c2a-9f0e-faan00000001"
}

pub const CONTACT_EMAIL: &str = "hello@faan.ai";

pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;

pub const TOOLTIP_SHOW_DELAY_MS: u32 = 300;
pub const TOOLTIP_HIDE_DELAY_MS: u32 = 100;

pub const COOKIE_CONSENT_KEY: &str = "faan_cookie_consent";
// Banner slides in after the first paint settles
pub const COOKIE_BANNER_DELAY_MS: u32 = 1_500;
