use yew::prelude::*;

use crate::motion::clock::use_frame_clock;
use crate::motion::widgets::{blip_pinging, is_scanned, sweep_rotation};

struct Blip {
    x: u32,
    y: u32,
    angle: f64,
    label: &'static str,
    color: &'static str,
}

const BLIPS: &[Blip] = &[
    Blip { x: 75, y: 25, angle: 45.0, label: "Market Intent Scan", color: "blip-sky" },
    Blip { x: 20, y: 60, angle: 210.0, label: "Acquisition Logic", color: "blip-indigo" },
    Blip { x: 50, y: 80, angle: 110.0, label: "Operational Throughput", color: "blip-pale" },
];

#[function_component(RadarView)]
pub fn radar_view() -> Html {
    let elapsed = use_frame_clock(true, None);
    let hovered = use_state(|| None::<usize>);
    let rotation = sweep_rotation(elapsed);

    html! {
        <div class="radar">
            <div class="radar-scope">
                <div class="radar-grid">
                    <div class="radar-axis radar-axis-h"></div>
                    <div class="radar-axis radar-axis-v"></div>
                    <div class="radar-ring radar-ring-3"></div>
                    <div class="radar-ring radar-ring-2"></div>
                    <div class="radar-ring radar-ring-1"></div>
                </div>
                <div class="radar-sweep" style={format!("transform: rotate({:.2}deg);", rotation)}></div>
            </div>
            { for BLIPS.iter().enumerate().map(|(index, blip)| {
                let active = is_scanned(rotation, blip.angle) || *hovered == Some(index);
                let pinging = blip_pinging(index, elapsed);
                let on_enter = {
                    let hovered = hovered.clone();
                    Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                };
                let on_leave = {
                    let hovered = hovered.clone();
                    Callback::from(move |_: MouseEvent| hovered.set(None))
                };
                html! {
                    <div
                        class="radar-blip-anchor"
                        style={format!("left: {}%; top: {}%;", blip.x, blip.y)}
                        onmouseenter={on_enter}
                        onmouseleave={on_leave}
                    >
                        <div class={classes!("radar-blip", blip.color, active.then(|| "radar-blip-active"), pinging.then(|| "radar-blip-ping"))}>
                            if active {
                                <div class="radar-blip-ring"></div>
                            }
                        </div>
                        <div class={classes!("radar-label", active.then(|| "radar-label-active"))}>
                            {blip.label}
                        </div>
                    </div>
                }
            }) }
            <div class="radar-caption">{"SYSTEM SCAN"}</div>
        </div>
    }
}
