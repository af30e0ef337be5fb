use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::layout::{use_scroll_to_top, SectionCta};
use crate::components::reveal::Reveal;
use crate::context::use_theme;

struct CaseStudy {
    category: &'static str,
    client: &'static str,
    stat: &'static str,
    label: &'static str,
    challenge: &'static str,
    impact: &'static str,
}

const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        category: "Aviation",
        client: "Regional Flight School",
        stat: "3.4x",
        label: "Booking Increase",
        challenge: "Inconsistent student flow and high seasonal churn.",
        impact: "Built a persistent lead engine that filled the instructor calendar weeks in advance.",
    },
    CaseStudy {
        category: "Services",
        client: "High-Ticket Consulting",
        stat: "42",
        label: "Monthly Booked Calls",
        challenge: "Spending too much time on manual outreach with low-quality leads.",
        impact: "Automated the qualification funnel, delivering 10+ high-value strategy sessions weekly.",
    },
    CaseStudy {
        category: "B2B",
        client: "Executive Aviation Group",
        stat: "510%",
        label: "Ad Spend ROI",
        challenge: "Struggling to reach ultra-high-net-worth individuals on social platforms.",
        impact: "Precision target logic and creative hooks turned an 'unscalable' niche into a revenue driver.",
    },
];

const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    ("Flight school owner on stabilizing demand", "videos/CoreTestimonial1.mp4", "Stabilized Scale", "testimonial-sky"),
    ("Consultant on predictable scaling", "videos/video2.mp4", "High-Ticket Growth", "testimonial-indigo"),
    ("CEO on achieving 5x ROI", "videos/video3.mp4", "Precision Impact", "testimonial-emerald"),
];

#[derive(Properties, PartialEq)]
struct TestimonialProps {
    caption: &'static str,
    src: &'static str,
    tag: &'static str,
    tint: &'static str,
}

/// Video card that falls back to a static play badge until the clip loads.
#[function_component(VideoTestimonial)]
fn video_testimonial(props: &TestimonialProps) -> Html {
    let loaded = use_state(|| false);
    let failed = use_state(|| false);

    let onloadeddata = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };
    let playable = *loaded && !*failed;

    html! {
        <div class="testimonial">
            <div class={classes!("testimonial-frame", props.tint)}>
                if !*failed {
                    <video
                        class={classes!("testimonial-video", playable.then(|| "testimonial-video-ready"))}
                        src={props.src}
                        playsinline=true
                        muted=true
                        loop=true
                        {onloadeddata}
                        {onerror}
                    />
                }
                <span class="testimonial-tag">{props.tag}</span>
                <div class={classes!("testimonial-play", playable.then(|| "testimonial-play-hover"))}>{"▶"}</div>
            </div>
            <p class="testimonial-caption">{props.caption}</p>
            <div class="testimonial-verified">
                <span class="pulse-dot pulse-emerald"></span>
                <span>{"Verified Client"}</span>
            </div>
        </div>
    }
}

#[function_component(Results)]
pub fn results() -> Html {
    use_scroll_to_top();
    let theme = use_theme();

    html! {
        <div class="results-page">
            <section class="page-hero">
                <Reveal>
                    <div class="eyebrow"><span>{"Sector Intelligence"}</span></div>
                    <h2 class="page-title">{"Proof of Performance"}</h2>
                    <p class="page-lead">{"We track every dollar and every lead. Here is how our protocols perform in active service-based pipelines."}</p>
                </Reveal>
                <div class="card-grid">
                    { for CASE_STUDIES.iter().enumerate().map(|(i, study)| html! {
                        <Reveal class={classes!("case-card", theme.pick("panel-dark", "panel-light"))} delay_ms={i as u32 * 120}>
                            <div class="case-category">{study.category}</div>
                            <h4>{study.client}</h4>
                            <div class="case-stat"><CountUp value={study.stat} /></div>
                            <Reveal delay_ms={200}><div class="case-label">{study.label}</div></Reveal>
                            <Reveal delay_ms={300}>
                                <div class="case-heading">{"Challenge"}</div>
                                <p>{study.challenge}</p>
                            </Reveal>
                            <Reveal delay_ms={450}>
                                <div class="case-heading case-heading-impact">{"Impact"}</div>
                                <p>{study.impact}</p>
                            </Reveal>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="testimonials">
                <Reveal class="section-heading">
                    <h3>{"Direct from the Flight Deck"}</h3>
                    <p>{"Real results shared by operators who scaled with Stratus."}</p>
                </Reveal>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().map(|&(caption, src, tag, tint)| html! {
                        <VideoTestimonial {caption} {src} {tag} {tint} />
                    }) }
                </div>
            </section>

            <SectionCta />
        </div>
    }
}
