use yew::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badge::Badge;
use crate::components::button::{Button, ButtonVariant};
use crate::components::scroll::use_scroll_to_top;
use crate::content;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <div class="about-page">
            <section class="hero">
                <Badge>{"About us"}</Badge>
                <h1>{"Engineers first."}</h1>
                <p>{"We started as a handful of platform engineers who were tired of watching good strategy die in the hand-off to delivery. Every engagement is still led by people who write the code."}</p>
            </section>

            <section class="section prose">
                <h2>{"How we work"}</h2>
                <p>{"Small senior teams, fixed outcomes and weekly demos. We measure ourselves on what runs in production, not on what is in the deck."}</p>
                <p>{"When we leave, your team owns the platform. Pairing, documentation and runbooks are part of the scope from day one."}</p>
            </section>

            <section class="section">
                <h2>{"Leadership"}</h2>
                <div class="team-grid">
                    { for content::TEAM.iter().map(|member| html! {
                        <div class="team-member">
                            <Avatar name={member.name} src={Some(AttrValue::Static(member.photo))} size={96} />
                            <h3>{ member.name }</h3>
                            <p>{ member.role }</p>
                        </div>
                    }) }
                </div>
                <Button variant={ButtonVariant::Link} to={Route::Careers}>{"Join the team"}</Button>
            </section>

            <style>
                {r#"
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .team-member {
                    text-align: center;
                }
                .team-member h3 {
                    margin: 0.75rem 0 0.25rem;
                    font-size: 1.05rem;
                }
                .team-member p {
                    margin: 0;
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}
