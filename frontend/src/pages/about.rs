use yew::prelude::*;

use crate::components::layout::{use_scroll_to_top, SectionCta};
use crate::components::reveal::Reveal;
use crate::components::tactical_hud::TacticalHud;
use crate::context::use_theme;

const CREW: &[(&str, &str, &str, &str)] = &[
    (
        "Isaac",
        "Founder",
        "Acquisition Architecture",
        "With roots deep in aviation operations, Isaac founded Stratus to bring the same level of checklists and precision found in the flight deck to marketing systems.",
    ),
    (
        "Cristian",
        "Partner",
        "Operational Scaling",
        "A strategic force in high-ticket service growth, Cristian ensures our internal protocols match the rapid scaling targets of our top-tier clients.",
    ),
];

const VALUES: &[(&str, &str, &str)] = &[
    ("💙", "Deep Care for Operators", "Your business isn't just a spreadsheet. We care about the instructors, the aircraft, and the students behind the clicks."),
    ("⚖️", "Judgment You Can Trust", "Our recommendations aren't based on guesses. They are derived from the same precision data pilots use to navigate."),
    ("⚡", "Collaborative Velocity", "We build systems with you, not just for you. Confident decisions come from a shared cockpit vision."),
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();
    let theme = use_theme();

    html! {
        <div class="about-page">
            <section class="page-hero">
                <Reveal>
                    <div class="eyebrow"><span>{"Foundations & Intent"}</span></div>
                    <h2 class="page-title">
                        {"Partnership "}<span class="gradient-text">{"Built on Trust"}</span>{"."}
                    </h2>
                    <p class="page-lead">
                        {"We aren't just an agency; we're your tactical acquisition department. We focus on long-term health, building relationships that turn data into confident decisions."}
                    </p>
                </Reveal>
            </section>

            <section class={classes!("crew", theme.pick("band-dark", "band-light"))}>
                <Reveal class="section-heading">
                    <h3>{"The Flight Crew"}</h3>
                    <p>{"Stratus is led by operators who have been in the cockpit and on the hangar floor."}</p>
                </Reveal>
                <div class="crew-grid">
                    { for CREW.iter().enumerate().map(|(i, (name, role, focus, bio))| html! {
                        <Reveal class={classes!("crew-card", theme.pick("panel-dark", "panel-light"))} delay_ms={i as u32 * 150}>
                            <div class="crew-badge">
                                <div class="crew-initial">{ name.chars().next().map(String::from).unwrap_or_default() }</div>
                                <div>
                                    <h4>{*name}</h4>
                                    <div class="crew-role">{*role}</div>
                                </div>
                            </div>
                            <div class="crew-briefing">{"Operational Briefing"}</div>
                            <p>{*bio}</p>
                            <span class="crew-focus">{ format!("Focus: {}", focus) }</span>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="standard">
                <div class="standard-grid">
                    <Reveal class="standard-copy">
                        <h3>{"The Stratus Standard"}</h3>
                        <p>{"We emphasize building a healthy long-term relationship with our clients. We want to reach a point where we make confident decisions together and trust our collective judgment as marketing and advertising consultants."}</p>
                        { for VALUES.iter().map(|(icon, title, desc)| html! {
                            <div class="value-row">
                                <div class="value-icon">{*icon}</div>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*desc}</p>
                                </div>
                            </div>
                        }) }
                    </Reveal>
                    <Reveal class="standard-hud" delay_ms={200}>
                        <TacticalHud />
                    </Reveal>
                </div>
            </section>

            <SectionCta />
        </div>
    }
}
