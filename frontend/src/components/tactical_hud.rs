use yew::prelude::*;

use crate::context::use_theme;
use crate::motion::clock::use_interval_clock;
use crate::motion::widgets::hud_readout;

const COMPASS: [&str; 4] = ["N", "E", "S", "W"];

#[function_component(TacticalHud)]
pub fn tactical_hud() -> Html {
    let theme = use_theme();
    let elapsed = use_interval_clock(50, 0);
    let hud = hud_readout(elapsed);

    html! {
        <div class={classes!("hud", format!("hud-{}", theme.as_str()))}>
            <div class="hud-circle"></div>
            <div class="hud-horizon"></div>
            <div class="hud-ladder" style={format!("transform: translateY({:.1}px);", hud.ladder_shift_px)}>
                { for (0..5).map(|i| html! {
                    <div class="hud-rung">
                        <div class="hud-rung-bar"></div>
                        <div class="hud-rung-label">{ (i * 10 + 100).to_string() }</div>
                    </div>
                }) }
            </div>
            <div class="hud-crosshair">
                <div class="hud-crosshair-h"></div>
                <div class="hud-crosshair-v"></div>
                <div class="hud-crosshair-dot"></div>
            </div>
            <div class="hud-status">
                <div class="hud-status-title">{"Protocol Status"}</div>
                <div class="hud-status-value">{"PARTNERSHIP STABILIZED"}</div>
            </div>
            <div class="hud-readout hud-readout-left">
                <div>{"ALT: "}<span>{ format!("{:.0}", hud.altitude_ft) }</span></div>
                <div>{"SPD: "}<span>{ format!("{:.1}KTS", hud.speed_kts) }</span></div>
            </div>
            <div class="hud-readout hud-readout-right">
                <div>{"TRK: "}<span>{"045°"}</span></div>
                <div>{"HGT: "}<span>{"AGL 12.5k"}</span></div>
            </div>
            <div class="hud-compass">
                { for COMPASS.iter().enumerate().map(|(i, dir)| html! {
                    <div class="hud-compass-mark" style={format!("transform: rotate({}deg) translateY(-170px);", i * 90)}>
                        {*dir}
                    </div>
                }) }
            </div>
        </div>
    }
}
