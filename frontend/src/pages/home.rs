use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::layout::{use_scroll_to_top, SectionCta};
use crate::components::radar::RadarView;
use crate::components::reveal::Reveal;
use crate::config;
use crate::context::use_theme;
use crate::Route;

const SECTORS: &[(&str, &str, &str)] = &[
    ("🛫", "Flight Schools", "Intro flights, PPL, and advanced training pipelines that match your aircraft, instructors, and seasonality."),
    ("💼", "High Ticket Services", "Consultants and service businesses that want booked, qualified calls, not just form fills."),
    ("🚀", "Service-Based Businesses", "Growth-focused companies looking for predictable pipelines and scalable customer acquisition protocols."),
];

const SNAPSHOT: &[(&str, &str, &str)] = &[
    ("Lead Volume", "2.5x Increase", "Qualified inquiries."),
    ("Booked Intros", "4 Weeks Ahead", "Calendars filled."),
    ("Revenue Clarity", "100% Control", "Predictable planning."),
];

const FUNNEL: &[(&str, &str)] = &[
    ("The Ad is Seen", "funnel-amber"),
    ("Lead is Captured", "funnel-sky"),
    ("High-Intent Follow-up", "funnel-indigo"),
    ("Booked Intro Flight", "funnel-emerald"),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let theme = use_theme();

    html! {
        <div class="home-page">
            <section class="hero">
                <Reveal class={classes!("glass-panel", theme.pick("panel-dark", "panel-light"))}>
                    <div class="eyebrow">
                        <span class="pulse-dot"></span>
                        <span>{"Performance Systems Architecture"}</span>
                    </div>
                    <h1>
                        {"Fill your calendar"}<br/>
                        <span class="gradient-text">{"with qualified bookings."}</span>
                    </h1>
                    <p class="hero-lead">
                        {"We design and run Meta, Instagram, and Facebook ads, systems, and funnels so your calendar fills with the right calls and discovery flights, not just random clicks."}
                    </p>
                    <div class="hero-actions">
                        <a href={config::CALENDLY_LINK} target="_blank" rel="noopener noreferrer" class="btn-primary btn-book-glow">
                            {"Book Now"}
                        </a>
                        <Link<Route> to={Route::Services} classes="btn-ghost">
                            {"How It Works"}
                        </Link<Route>>
                    </div>
                </Reveal>
                <Reveal class="hero-radar" delay_ms={150}>
                    <RadarView />
                </Reveal>
            </section>

            <section class="sectors">
                <Reveal class="section-heading">
                    <h2>{"Aviation first, but not aviation-only."}</h2>
                    <p>{"Stratus started inside a flight school and now works with operators and founders running serious service-based businesses."}</p>
                </Reveal>
                <div class="card-grid">
                    { for SECTORS.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                        <Reveal class={classes!("sector-card", theme.pick("card-dark", "card-light"))} delay_ms={i as u32 * 120}>
                            <div class="sector-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class={classes!("snapshot", theme.pick("band-dark", "band-light"))}>
                <div class="snapshot-grid">
                    <Reveal class="snapshot-copy">
                        <h2>{"Pipeline Snapshot"}</h2>
                        <p>{"In practice, our clients see a steady, predictable flow of qualified inquiries that turn into booked intro flights, discovery flights, and long-term students. Not one good month followed by silence."}</p>
                        <div class="stat-row">
                            { for SNAPSHOT.iter().map(|(label, value, desc)| html! {
                                <div class={classes!("stat-card", theme.pick("card-dark", "card-light"))}>
                                    <div class="stat-label">{*label}</div>
                                    <div class="stat-value"><CountUp value={*value} /></div>
                                    <div class="stat-desc">{*desc}</div>
                                </div>
                            }) }
                        </div>
                    </Reveal>
                    <Reveal class={classes!("funnel", theme.pick("panel-dark", "panel-light"))} delay_ms={200}>
                        { for FUNNEL.iter().enumerate().map(|(i, (label, color))| {
                            let last = i == FUNNEL.len() - 1;
                            html! {
                                <div class="funnel-step">
                                    <div class={classes!("funnel-node", *color)}>
                                        if last {
                                            {"✓"}
                                        } else {
                                            { (i + 1).to_string() }
                                        }
                                    </div>
                                    <div class={classes!("funnel-label", last.then(|| "funnel-label-active"))}>
                                        {*label}
                                    </div>
                                </div>
                            }
                        }) }
                    </Reveal>
                </div>
            </section>

            <SectionCta />
        </div>
    }
}
