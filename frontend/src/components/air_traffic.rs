use yew::prelude::*;

use crate::context::use_theme;
use crate::motion::clock::use_interval_clock;
use crate::motion::widgets::ticker_frame;

#[derive(Clone, Copy, PartialEq)]
enum AlertKind {
    Target,
    Sector,
    Dispatch,
    Sync,
}

impl AlertKind {
    fn icon(self) -> &'static str {
        match self {
            AlertKind::Target => "🎯",
            AlertKind::Sector => "📡",
            AlertKind::Dispatch => "🚀",
            AlertKind::Sync => "⚡",
        }
    }
}

const ALERTS: &[(AlertKind, &str)] = &[
    (AlertKind::Target, "TARGET ACQUIRED: FLIGHT SCHOOL IN TEXAS BOOKED 4 DISCOVERY FLIGHTS"),
    (AlertKind::Sector, "SECTOR SYNC: CALIFORNIA CHARTER OP DEPLOYED ACQUISITION ENGINE"),
    (AlertKind::Dispatch, "DISPATCH: FLORIDA HANGAR CONFIRMED +15 QUALIFIED LEADS"),
    (AlertKind::Sync, "GROWTH LOCKED: ARIZONA OPERATOR ACHIEVED 3.4X ROI"),
    (AlertKind::Target, "TARGET ACQUIRED: NEW YORK CONSULTANCY FILLED CALENDAR 3 WEEKS AHEAD"),
    (AlertKind::Dispatch, "DISPATCH: MIDWEST FLIGHT ACADEMY INITIATED SCALE PROTOCOL"),
];

#[function_component(AirTrafficFeed)]
pub fn air_traffic_feed() -> Html {
    let theme = use_theme();
    let elapsed = use_interval_clock(100, 0);
    let frame = ticker_frame(elapsed, ALERTS.len());
    let (kind, message) = ALERTS[frame.index];

    html! {
        <div class={classes!("atc-feed", format!("atc-feed-{}", theme.as_str()))}>
            <div class="atc-feed-inner">
                <div class="atc-feed-left">
                    <span class="atc-live">
                        <span class="atc-live-dot"></span>
                        {"Live Air Traffic"}
                    </span>
                    <div class="atc-divider"></div>
                    <div class={classes!("atc-alert", (!frame.visible).then(|| "atc-alert-hidden"))}>
                        <span class="atc-alert-icon">{kind.icon()}</span>
                        <span class="atc-alert-text">{message}</span>
                    </div>
                </div>
                <div class="atc-frequency">{"Sector: Global // Frequency: 121.5"}</div>
            </div>
        </div>
    }
}
