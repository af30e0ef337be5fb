use yew::prelude::*;

use crate::components::contact_form::MissionDispatch;
use crate::components::layout::use_scroll_to_top;
use crate::components::reveal::Reveal;
use crate::config;
use crate::context::use_theme;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let theme = use_theme();

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <Reveal>
                    <div class="eyebrow"><span>{"Sector Briefing"}</span></div>
                    <h2 class="page-title">{"Initiate Dispatch."}</h2>
                    <p class="page-lead">{"Ready to calibrate your acquisition system? Secure a strategy call with our operations lead to discuss your growth targets."}</p>
                </Reveal>
            </section>

            <section class="contact-split">
                <div class="contact-modules">
                    <Reveal class={classes!("contact-card", theme.pick("panel-dark", "panel-light"))} delay_ms={100}>
                        <div class="contact-kicker">{"Direct Line"}</div>
                        <h3>{"Tactical Support"}</h3>
                        <div class="contact-lines">
                            <a href={format!("tel:{}", config::CONTACT_PHONE)}>{config::CONTACT_PHONE}</a>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </div>
                        <a href={config::CALENDLY_LINK} target="_blank" rel="noopener noreferrer" class="btn-primary btn-book-glow">
                            <span>{"Book on Calendly"}</span>
                        </a>
                        <p class="contact-sync">{"Instant Operations Sync"}</p>
                    </Reveal>
                    <Reveal class={classes!("contact-note", theme.pick("panel-dark", "panel-light"))} delay_ms={200}>
                        <div class="contact-kicker">{"Operator Note"}</div>
                        <p>{"\"We don't do discovery calls. We do strategy briefings. Come prepared with your current utilization rates and instructor headcount.\""}</p>
                    </Reveal>
                </div>
                <Reveal class="contact-form-slot" delay_ms={300}>
                    <MissionDispatch />
                </Reveal>
            </section>
        </div>
    }
}
