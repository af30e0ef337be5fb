use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::{use_scroll_to_top, SectionCta};
use crate::components::pipeline_steps::PipelineSteps;
use crate::components::reveal::Reveal;
use crate::config;
use crate::context::use_theme;
use crate::Route;

struct Module {
    title: &'static str,
    highlight: &'static str,
    desc: &'static str,
    bullets: [&'static str; 3],
    accent: &'static str,
}

const MODULES: &[Module] = &[
    Module {
        title: "Meta Acquisition Engine",
        highlight: "Facebook & Instagram Ads",
        desc: "Precision management of FB & IG campaigns designed to fill calendars by targeting high-intent aviation prospects.",
        bullets: ["Creative Hook Strategy", "Algorithm Audience Tuning", "Daily Bid Calibration"],
        accent: "accent-sky",
    },
    Module {
        title: "Performance Systems",
        highlight: "Landing Pages & Funnels",
        desc: "Ultra-fast landing environments optimized for the specific decision-making behavior of high-ticket clients.",
        bullets: ["Frictionless Booking UX", "Deep Tracking Integration", "Operator CRM Sync"],
        accent: "accent-indigo",
    },
    Module {
        title: "Operational Strategy",
        highlight: "Growth Systems Reset",
        desc: "For operators with existing infra who need a reset on unit economics, creative strategy, and backend follow-up.",
        bullets: ["Unit Economic Analysis", "Follow-up Protocol Design", "Asset Lifecycle Audit"],
        accent: "accent-emerald",
    },
];

const WEB_FEATURES: &[(&str, &str, &str)] = &[
    ("🔍", "SEO-Targeted Engines", "Built to dominate local search for aviation and high-ticket service keywords."),
    ("⭐", "5-Star Review Funnel", "Integrated automation that methodically captures and promotes your client's success."),
    ("📲", "Lead Follow-up Automation", "Instant text and email response modules triggered by every conversion."),
    ("🏎️", "Operator-First UX", "Lightning-fast environments designed for high-intent decision making."),
];

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();
    let theme = use_theme();

    html! {
        <div class="services-page">
            <section class="page-hero">
                <Reveal>
                    <div class="eyebrow"><span>{"Protocol Manifest"}</span></div>
                    <h2 class="page-title">{"Scale Protocols."}</h2>
                    <p class="page-lead">{"High-integrity acquisition modules for aviation and high-ticket operators."}</p>
                </Reveal>
            </section>

            <section class={classes!("engine", theme.pick("band-dark", "band-light"))}>
                <Reveal class="section-heading">
                    <h2>{"The Engine"}</h2>
                    <p>{"Our protocol for deploying and maintaining high-integrity acquisition systems."}</p>
                </Reveal>
                <Reveal delay_ms={150}>
                    <PipelineSteps />
                </Reveal>
            </section>

            <section class="modules">
                <Reveal class="section-heading">
                    <h2>{"Operational Modules"}</h2>
                    <p>{"Core acquisition systems for high-performance pipelines."}</p>
                </Reveal>
                <div class="card-grid">
                    { for MODULES.iter().enumerate().map(|(i, module)| html! {
                        <Reveal class={classes!("module-card", theme.pick("card-dark", "card-light"))} delay_ms={i as u32 * 120}>
                            <div class={classes!("module-highlight", module.accent)}>{module.highlight}</div>
                            <h3>{module.title}</h3>
                            <p>{module.desc}</p>
                            <ul class="module-bullets">
                                { for module.bullets.iter().map(|bullet| html! {
                                    <li><span class={classes!("bullet-dot", module.accent)}></span><span>{*bullet}</span></li>
                                }) }
                            </ul>
                            <Link<Route> to={Route::Contact} classes="btn-ghost">
                                {"Request Briefing"}
                            </Link<Route>>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="web-module">
                <Reveal class={classes!("web-panel", theme.pick("panel-dark", "panel-light"))}>
                    <div class="eyebrow">
                        <span class="pulse-dot"></span>
                        <span>{"Sector Base: Web Architecture"}</span>
                    </div>
                    <h2>
                        {"High-Converting"}<br/>
                        <span class="gradient-text">{"Search Engines."}</span>
                    </h2>
                    <p>{"We engineer ultra-performance web environments for service-based businesses that prioritize deep SEO integration and frictionless conversion logic."}</p>
                    <div class="feature-grid">
                        { for WEB_FEATURES.iter().map(|(icon, title, desc)| html! {
                            <div class="feature">
                                <div class="feature-icon">{*icon}</div>
                                <h4>{*title}</h4>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                    <a href={config::STRATUS_WEBSITES_URL} target="_blank" rel="noopener noreferrer" class="btn-primary">
                        <span>{"DEPLOY WEBSITE MODULE"}</span>
                    </a>
                </Reveal>
            </section>

            <SectionCta />
        </div>
    }
}
