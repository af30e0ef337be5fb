use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::motion::clock::use_frame_clock;
use crate::motion::count_up::{CountUpValue, DEFAULT_DURATION_MS};

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub value: AttrValue,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: f64,
}

/// Counts a statistic up from zero the first time it scrolls into view.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone()).is_some();
    let parsed = use_memo(|value| CountUpValue::parse(value), props.value.clone());

    let elapsed = use_frame_clock(revealed, Some(props.duration_ms));
    let text = if revealed {
        parsed.frame(elapsed, props.duration_ms)
    } else {
        parsed.frame(0.0, props.duration_ms)
    };

    html! {
        <span ref={node}>{text}</span>
    }
}
