use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod consent;
mod contact;
mod content;
mod timer;
mod components {
    pub mod accordion;
    pub mod avatar;
    pub mod badge;
    pub mod breadcrumb;
    pub mod button;
    pub mod cards;
    pub mod carousel;
    pub mod cookie_banner;
    pub mod footer;
    pub mod scroll;
    pub mod toast;
    pub mod tooltip;
}
mod pages {
    pub mod about;
    pub mod careers;
    pub mod contact;
    pub mod hub;
    pub mod home;
    pub mod industries;
    pub mod not_found;
    pub mod partners;
    pub mod services;
    pub mod work;
}

use components::{
    cookie_banner::CookieBanner,
    footer::Footer,
    toast::ToastProvider,
};
use pages::{
    about::About,
    careers::Careers,
    contact::Contact,
    home::Home,
    hub::{BlogPost, Hub},
    industries::{Industries, IndustryDetail},
    not_found::NotFound,
    partners::Partners,
    services::{ServiceDetail, Services},
    work::{CaseStudies, CaseStudyDetail},
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    ServiceDetail { slug: String },
    #[at("/industries")]
    Industries,
    #[at("/industries/:slug")]
    IndustryDetail { slug: String },
    #[at("/work")]
    CaseStudies,
    #[at("/work/:slug")]
    CaseStudyDetail { slug: String },
    #[at("/partners")]
    Partners,
    #[at("/hub")]
    Hub,
    #[at("/hub/:slug")]
    BlogPost { slug: String },
    #[at("/about")]
    About,
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::ServiceDetail { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServiceDetail slug={slug} /> }
        },
        Route::Industries => {
            info!("Rendering Industries page");
            html! { <Industries /> }
        },
        Route::IndustryDetail { slug } => {
            info!("Rendering Industry page for {}", slug);
            html! { <IndustryDetail slug={slug} /> }
        },
        Route::CaseStudies => {
            info!("Rendering Work page");
            html! { <CaseStudies /> }
        },
        Route::CaseStudyDetail { slug } => {
            info!("Rendering Case Study page for {}", slug);
            html! { <CaseStudyDetail slug={slug} /> }
        },
        Route::Partners => {
            info!("Rendering Partners page");
            html! { <Partners /> }
        },
        Route::Hub => {
            info!("Rendering Hub page");
            html! { <Hub /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Hub article {}", slug);
            html! { <BlogPost slug={slug} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: &[(&str, Route)] = &[
    ("Services", Route::Services),
    ("Industries", Route::Industries),
    ("Work", Route::CaseStudies),
    ("Hub", Route::Hub),
    ("About", Route::About),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(y) = scroll_window.scroll_y() {
                        is_scrolled.set(y > 20.0);
                    }
                }) as Box<dyn FnMut()>);
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not attach scroll listener");
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    if window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not detach scroll listener");
                    }
                }
            }
        }, ());
    }

    // Navigating anywhere closes the mobile menu.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |_| {
            menu_open.set(false);
            || ()
        }, route);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes={classes!("nav-logo")}>
                    {"FAAN"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(label, to)| html! {
                        <Link<Route> to={to.clone()} classes={classes!("nav-link")}>{ *label }</Link<Route>>
                    }) }
                    <Link<Route> to={Route::Contact} classes={classes!("nav-cta")}>
                        {"Book a Call"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <style>{ SITE_CSS }</style>
                <Nav />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <CookieBanner />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

const SITE_CSS: &str = r#"
:root {
    --bg: #faf7f2;
    --bg-alt: #f1ece4;
    --text: #1f2328;
    --muted: #656d76;
    --border: #d8d2c8;
    --green: #1a7f37;
    --blue: #0969da;
    --purple: #8250df;
    --red: #cf222e;
}
body { margin: 0; background: var(--bg); color: var(--text); font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }
a { color: inherit; }
.site-main { min-height: 80vh; padding-top: 64px; }
.section { max-width: 1180px; margin: 0 auto; padding: 4rem 1.5rem; }
.section h2 { font-size: 2rem; margin-bottom: 1.5rem; }
.hero { padding: 6rem 1.5rem 4rem; max-width: 1180px; margin: 0 auto; }
.hero h1 { font-size: 3.5rem; line-height: 1.1; margin: 1rem 0; }
.hero p { font-size: 1.25rem; color: var(--muted); max-width: 680px; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); }
.grid--2 { grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); }
.section--muted { background: var(--bg-alt); border-radius: 24px; }
.section__header { display: flex; align-items: baseline; justify-content: space-between; gap: 1rem; flex-wrap: wrap; }
.prose { max-width: 720px; font-size: 1.1rem; line-height: 1.7; }
.prose p { margin: 0 0 1.25rem; }
.pill-list { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; padding: 0; }
.check-list { list-style: none; padding: 0; display: grid; gap: 0.75rem; }
.check-list li::before { content: "✓"; color: var(--green); font-weight: 700; margin-right: 0.6rem; }

.top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 1000; transition: background 0.3s ease; }
.top-nav.scrolled { background: rgba(250, 247, 242, 0.9); backdrop-filter: blur(8px); border-bottom: 1px solid var(--border); }
.nav-content { max-width: 1180px; margin: 0 auto; height: 64px; display: flex; align-items: center; justify-content: space-between; padding: 0 1.5rem; }
.nav-logo { font-size: 26px; font-weight: 900; text-decoration: none; }
.nav-right { display: flex; align-items: center; gap: 0.5rem; }
.nav-link { padding: 0.5rem 1rem; text-decoration: none; color: var(--muted); font-weight: 600; font-size: 0.9rem; }
.nav-link:hover { color: var(--text); }
.nav-cta { padding: 0.5rem 1.25rem; background: var(--green); color: #fff; border-radius: 999px; font-weight: 700; text-decoration: none; }
.burger-menu { display: none; background: none; border: none; cursor: pointer; }
.burger-menu span { display: block; width: 22px; height: 2px; margin: 5px 0; background: var(--text); }
@media (max-width: 768px) {
    .burger-menu { display: block; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open { display: flex; flex-direction: column; position: absolute; top: 64px; left: 0; right: 0; background: var(--bg); padding: 1.5rem; border-top: 1px solid var(--border); }
    .hero h1 { font-size: 2.4rem; }
}

.site-footer { border-top: 1px solid var(--border); background: var(--bg-alt); padding: 3rem 1.5rem; }
.site-footer__inner { max-width: 1180px; margin: 0 auto; display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: space-between; }
.site-footer__logo { font-weight: 900; font-size: 1.25rem; margin-right: 0.75rem; }
.site-footer__copy { color: var(--muted); font-size: 0.875rem; }
.site-footer__links { display: flex; gap: 1.25rem; font-size: 0.875rem; }

.btn { display: inline-flex; align-items: center; gap: 0.35rem; border-radius: 8px; font-weight: 600; cursor: pointer; text-decoration: none; border: 1px solid transparent; }
.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn--primary { background: var(--green); color: #fff; }
.btn--secondary { background: var(--bg-alt); color: var(--text); border-color: var(--border); }
.btn--link { background: none; color: var(--blue); padding: 0; }
.btn--sm { padding: 0.35rem 0.75rem; font-size: 0.75rem; }
.btn--md { padding: 0.5rem 1.25rem; font-size: 0.875rem; }
.btn--lg { padding: 0.75rem 1.5rem; font-size: 1rem; }

.badge { display: inline-flex; align-items: center; border-radius: 999px; white-space: nowrap; font-size: 12px; padding: 3px 10px; }
.badge--tag { background: var(--bg-alt); color: var(--muted); }
.badge--green { background: var(--green); color: #fff; text-transform: uppercase; letter-spacing: 0.04em; font-weight: 600; }
.badge--purple { background: var(--purple); color: #fff; text-transform: uppercase; letter-spacing: 0.04em; font-weight: 600; }
.badge--blue { background: var(--blue); color: #fff; text-transform: uppercase; letter-spacing: 0.04em; font-weight: 600; }

.card { display: flex; flex-direction: column; background: #fff; border: 1px solid var(--border); border-radius: 12px; overflow: hidden; text-decoration: none; transition: transform 0.3s ease, box-shadow 0.3s ease; }
.card:hover { transform: translateY(-4px); box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08); }
.card--service { padding: 2rem; }
.card__content { padding: 1.5rem; display: flex; flex-direction: column; gap: 0.5rem; flex: 1; }
.card__media { position: relative; }
.card__media .badge { position: absolute; top: 1rem; left: 1rem; }
.card__image { width: 100%; height: 200px; object-fit: cover; display: block; background: var(--bg-alt); }
.card__eyebrow { font-size: 0.75rem; text-transform: uppercase; color: var(--muted); letter-spacing: 0.06em; }
.card__title { margin: 0.25rem 0; font-size: 1.25rem; }
.card__text { color: var(--muted); margin: 0; }
.card__meta { font-size: 0.8rem; color: var(--muted); font-family: monospace; }
.card__tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: auto; }
.card__more { color: var(--blue); font-weight: 600; margin-top: auto; }

.accordion__item { border-bottom: 1px solid var(--border); padding: 1.25rem 0; }
.accordion__question { width: 100%; display: flex; justify-content: space-between; align-items: center; background: none; border: none; font-size: 1.1rem; font-weight: 500; text-align: left; cursor: pointer; color: var(--text); }
.accordion__icon { color: var(--purple); margin-left: 1rem; }
.accordion__answer { color: var(--muted); margin-top: 0.75rem; line-height: 1.6; }

.carousel { position: relative; width: 100%; display: flex; flex-direction: column; align-items: center; }
.carousel__viewport { position: relative; width: 100%; min-height: 320px; overflow: hidden; display: flex; align-items: center; }
.carousel__slide { width: 100%; padding: 0 4.5rem; box-sizing: border-box; }
.slide-in-forward { animation: slideFromRight 0.4s ease-out; }
.slide-in-backward { animation: slideFromLeft 0.4s ease-out; }
@keyframes slideFromRight { from { transform: translateX(40px); opacity: 0; } to { transform: none; opacity: 1; } }
@keyframes slideFromLeft { from { transform: translateX(-40px); opacity: 0; } to { transform: none; opacity: 1; } }
.carousel__arrow { position: absolute; top: 50%; transform: translateY(-50%); z-index: 2; width: 40px; height: 40px; border-radius: 50%; border: 1px solid var(--border); background: #fff; cursor: pointer; font-size: 1.4rem; }
.carousel__arrow--prev { left: 1rem; }
.carousel__arrow--next { right: 1rem; }
.carousel__dots { display: flex; gap: 0.5rem; margin-top: 1.5rem; }
.carousel__dot { width: 8px; height: 8px; border-radius: 50%; border: none; background: var(--border); cursor: pointer; padding: 0; }
.carousel__dot.active { background: var(--green); }

.tooltip { position: relative; display: inline-flex; }
.tooltip__bubble { position: absolute; left: 50%; transform: translateX(-50%); z-index: 50; max-width: 240px; width: max-content; background: #fff; border: 1px solid var(--border); border-radius: 6px; padding: 0.35rem 0.75rem; font-size: 0.85rem; color: var(--muted); pointer-events: none; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
.tooltip__bubble--top { bottom: 100%; margin-bottom: 0.5rem; }
.tooltip__bubble--bottom { top: 100%; margin-top: 0.5rem; }

.breadcrumb { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; padding: 0.75rem 0; }
.breadcrumb__link { color: var(--muted); text-decoration: none; }
.breadcrumb__link:hover { color: var(--blue); }
.breadcrumb__current { font-weight: 500; }

.avatar { border-radius: 50%; object-fit: cover; display: inline-flex; align-items: center; justify-content: center; color: #fff; font-weight: 700; flex-shrink: 0; }

.toast-stack { position: fixed; top: 1.5rem; right: 1.5rem; z-index: 9999; display: flex; flex-direction: column; align-items: flex-end; gap: 0.75rem; pointer-events: none; }
.toast { pointer-events: auto; position: relative; display: flex; gap: 0.75rem; width: 360px; max-width: calc(100vw - 3rem); background: #fff; border: 1px solid var(--border); border-left-width: 4px; border-radius: 8px; padding: 1rem 2.25rem 1rem 1rem; box-shadow: 0 12px 32px rgba(0, 0, 0, 0.15); animation: toastIn 0.3s ease-out; }
@keyframes toastIn { from { transform: translateX(50px); opacity: 0; } to { transform: none; opacity: 1; } }
.toast--success { border-left-color: var(--green); }
.toast--error { border-left-color: var(--red); }
.toast--info { border-left-color: var(--blue); }
.toast__icon { font-weight: 700; }
.toast__title { margin: 0 0 0.25rem; font-size: 0.875rem; }
.toast__message { margin: 0; font-size: 0.875rem; color: var(--muted); }
.toast__close { position: absolute; top: 0.75rem; right: 0.75rem; background: none; border: none; cursor: pointer; color: var(--muted); font-size: 1.1rem; }

.cookie-banner { position: fixed; bottom: 0; left: 0; right: 0; z-index: 5000; background: var(--bg-alt); border-top: 1px solid var(--border); padding: 1rem 1.5rem; display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; justify-content: space-between; box-shadow: 0 -4px 16px rgba(0, 0, 0, 0.1); }
.cookie-banner p { flex: 1; margin: 0; font-size: 0.875rem; color: var(--muted); min-width: 260px; }
.cookie-banner__actions { display: flex; gap: 0.75rem; }
"#;

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn paths_resolve_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(
            Route::recognize("/work/harbor-retail-forecasting"),
            Some(Route::CaseStudyDetail { slug: "harbor-retail-forecasting".into() })
        );
        assert_eq!(
            Route::recognize("/hub/state-of-finops-2025"),
            Some(Route::BlogPost { slug: "state-of-finops-2025".into() })
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = Route::recognize("/definitely/not/here").unwrap_or(Route::NotFound);
        assert_eq!(route, Route::NotFound);
    }

    #[test]
    fn detail_routes_render_their_slug() {
        assert_eq!(Route::ServiceDetail { slug: "training".into() }.to_path(), "/services/training");
        assert_eq!(Route::IndustryDetail { slug: "retail".into() }.to_path(), "/industries/retail");
    }
}
