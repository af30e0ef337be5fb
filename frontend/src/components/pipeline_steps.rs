use yew::prelude::*;

use crate::context::use_theme;
use crate::motion::clock::use_interval_clock;
use crate::motion::widgets::{pipeline_progress_percent, pipeline_step};

const STEPS: &[(&str, &str)] = &[
    ("Market Audit", "Analyzing unit economics, operational bandwidth, and sector geography to set clear scale targets."),
    ("System Design", "Engineering high-intent creative assets and performance funnels designed for complex decision cycles."),
    ("Deployment", "Activating the acquisition engine and tuning lead quality to match your specific conversion capacity."),
    ("Precision Scale", "Methodically increasing volume based on high-integrity data points and operational throughput."),
];

#[function_component(PipelineSteps)]
pub fn pipeline_steps() -> Html {
    let theme = use_theme();
    // A click restarts the cycle from the chosen step.
    let anchor = use_state(|| (0usize, 0u32));
    let (start_step, epoch) = *anchor;
    let elapsed = use_interval_clock(250, epoch);
    let active = pipeline_step(elapsed, start_step, STEPS.len());

    html! {
        <div class={classes!("pipeline", format!("pipeline-{}", theme.as_str()))}>
            <div class="pipeline-track">
                <div class="pipeline-line"></div>
                <div
                    class="pipeline-line pipeline-line-active"
                    style={format!("width: calc({:.0}% - 20px);", pipeline_progress_percent(active, STEPS.len()))}
                ></div>
                { for STEPS.iter().enumerate().map(|(idx, _)| {
                    let onclick = {
                        let anchor = anchor.clone();
                        Callback::from(move |_: MouseEvent| anchor.set((idx, epoch.wrapping_add(1))))
                    };
                    html! {
                        <button class={classes!("pipeline-node", (idx <= active).then(|| "pipeline-node-done"))} {onclick}>
                            { (idx + 1).to_string() }
                        </button>
                    }
                }) }
            </div>
            <div class="pipeline-cards">
                { for STEPS.iter().enumerate().map(|(idx, (label, desc))| html! {
                    <div class={classes!("pipeline-card", (idx == active).then(|| "pipeline-card-active"))}>
                        <div class="pipeline-card-module">{ format!("Module 0{}", idx + 1) }</div>
                        <h4>{*label}</h4>
                        <p>{*desc}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
