use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_unmount;

use crate::config::{self, StrategyConfig};
use crate::context::{AppAction, AppContext};
use crate::strategy::error::StrategyError;
use crate::strategy::model::{BusinessType, StrategyDraft, StrategyPlan};
use crate::strategy::requester::{RequestPhase, StrategyPlanRequester};
use crate::strategy::transport::GeminiTransport;

type Requester = StrategyPlanRequester<GeminiTransport>;

#[derive(Clone, Copy, PartialEq)]
enum Station {
    Identity,
    Parameters,
}

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: StrategyPlan,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    html! {
        <div class="plan-card">
            <div class="plan-headline">
                <h5>{"Proposed Strategy"}</h5>
                <p class="plan-name">{ plan.strategy_name.clone() }</p>
            </div>
            <div>
                <h5>{"Focus Channels"}</h5>
                <div class="plan-chips">
                    { for plan.focus_channels.iter().map(|channel| html! {
                        <span class="plan-chip">{ channel.clone() }</span>
                    }) }
                </div>
            </div>
            <div>
                <h5>{"Tactical Steps"}</h5>
                <ul class="plan-steps">
                    { for plan.tactical_steps.iter().map(|step| html! {
                        <li><span class="plan-check">{"✓"}</span><span>{ step.clone() }</span></li>
                    }) }
                </ul>
            </div>
            <div class="plan-outcome">
                <h5>{"Expected Outcome"}</h5>
                <p>{ plan.expected_outcome.clone() }</p>
            </div>
            <div class="plan-advice">
                <h5>{"Operator's Pro-Tip"}</h5>
                <p>{ format!("\"{}\"", plan.operator_advice) }</p>
            </div>
            <div class="plan-actions">
                <a href={config::CALENDLY_LINK} target="_blank" rel="noopener noreferrer" class="btn-primary btn-book-glow">
                    {"Book Now"}
                </a>
                <a href={config::CALENDLY_LINK} target="_blank" rel="noopener noreferrer" class="btn-ghost">
                    {"Confirm Schedule"}
                </a>
            </div>
        </div>
    }
}

fn phase_error(phase: &RequestPhase) -> Option<String> {
    match phase {
        RequestPhase::Failed(e) => Some(e.user_message()),
        _ => None,
    }
}

/// Floating launcher plus the three-station strategy co-pilot modal.
#[function_component(StrategyCopilot)]
pub fn strategy_copilot() -> Html {
    let app = use_context::<AppContext>();
    let requester = use_memo(
        |_| {
            let config = StrategyConfig::from_build_env();
            let retries = config.max_retries;
            StrategyPlanRequester::new(GeminiTransport::new(config), retries)
        },
        (),
    );
    let station = use_state(|| Station::Identity);
    let draft = use_state(StrategyDraft::default);
    let phase = use_state(RequestPhase::default);
    let invalid = use_state(|| None::<String>);

    {
        let requester = requester.clone();
        use_unmount(move || requester.abandon());
    }

    let is_open = app.as_ref().map_or(false, |app| app.copilot_open);
    let loading = matches!(*phase, RequestPhase::Submitting);
    let error = (*invalid).clone().or_else(|| phase_error(&phase));

    let open = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(app) = app.as_ref() {
                app.dispatch(AppAction::OpenCopilot);
            }
        })
    };

    let close = {
        let app = app.clone();
        let requester = requester.clone();
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            requester.abandon();
            phase.set(requester.phase());
            if let Some(app) = app.as_ref() {
                app.dispatch(AppAction::CloseCopilot);
            }
        })
    };

    let update_draft = |apply: fn(&mut StrategyDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let on_name = update_draft(|d, v| d.name = v);
    let on_leads = update_draft(|d, v| d.current_leads = v);
    let on_growth = update_draft(|d, v| d.target_growth = v);
    let on_pain = update_draft(|d, v| d.pain_point = v);
    let on_type = update_draft(|d, v| {
        if let Some(kind) = BusinessType::from_label(&v) {
            d.business_type = kind;
        }
    });

    let go_to = |target: Station| {
        let station = station.clone();
        let requester = requester.clone();
        let phase = phase.clone();
        let invalid = invalid.clone();
        Callback::from(move |_: MouseEvent| {
            requester.reset();
            phase.set(requester.phase());
            invalid.set(None);
            station.set(target);
        })
    };

    let generate = {
        let requester = requester.clone();
        let draft = draft.clone();
        let phase = phase.clone();
        let invalid = invalid.clone();
        Callback::from(move |_: MouseEvent| {
            if requester.is_in_flight() {
                return;
            }
            let request = match draft.validate() {
                Ok(request) => request,
                Err(e) => {
                    invalid.set(Some(e.user_message()));
                    return;
                }
            };
            requester.reset();
            invalid.set(None);
            phase.set(RequestPhase::Submitting);

            let requester: Rc<Requester> = requester.clone();
            let phase = phase.clone();
            spawn_local(async move {
                match requester.submit(&request).await {
                    // The modal was closed or unmounted meanwhile.
                    Err(StrategyError::Abandoned) => return,
                    Ok(result) => info!("Flight plan ready: {}", result.strategy_name),
                    Err(_) => {}
                }
                phase.set(requester.phase());
            });
        })
    };

    html! {
        <>
            <button onclick={open} class="copilot-launcher btn-book-glow">
                <span class="copilot-launcher-icon">{"⚡"}</span>
                <span>{"How we fit for you"}</span>
            </button>
            if is_open {
                <div class="modal-backdrop">
                    <div class="copilot-modal">
                        <header class="copilot-header">
                            <div>
                                <h3><span class="pulse-dot"></span>{"AI Strategy Co-Pilot"}</h3>
                                <p>{"Analyze your marketing flight plan in seconds."}</p>
                            </div>
                            <button class="copilot-close" onclick={close}>{"✕"}</button>
                        </header>
                        <div class="copilot-body">
                            if let Some(message) = error {
                                <div class="copilot-error">{message}</div>
                            }
                            {
                                match (&*phase, *station) {
                                    (RequestPhase::Success(plan), _) => html! { <PlanCard plan={plan.clone()} /> },
                                    (_, Station::Identity) => html! {
                                        <div class="copilot-station">
                                            <h4>{"Input Flight Parameters"}</h4>
                                            <label>{"Business Name"}</label>
                                            <input
                                                type="text"
                                                placeholder="e.g. Blue Sky Aviation"
                                                value={draft.name.clone()}
                                                oninput={on_name.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                                            />
                                            <label>{"Business Type"}</label>
                                            <select onchange={on_type.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())}>
                                                { for BusinessType::ALL.iter().map(|kind| html! {
                                                    <option selected={*kind == draft.business_type}>{ kind.label() }</option>
                                                }) }
                                            </select>
                                            <button
                                                class="btn-primary"
                                                disabled={!draft.can_advance()}
                                                onclick={go_to(Station::Parameters)}
                                            >
                                                {"Next Station"}
                                            </button>
                                        </div>
                                    },
                                    (_, Station::Parameters) => html! {
                                        <div class="copilot-station">
                                            <label>{"Primary Pain Point"}</label>
                                            <textarea
                                                placeholder="e.g. Inconsistent lead volume..."
                                                value={draft.pain_point.clone()}
                                                oninput={on_pain.reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value())}
                                            />
                                            <div class="copilot-grid">
                                                <div>
                                                    <label>{"Target Growth (%)"}</label>
                                                    <input
                                                        type="number"
                                                        placeholder="20"
                                                        value={draft.target_growth.clone()}
                                                        oninput={on_growth.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                                                    />
                                                </div>
                                                <div>
                                                    <label>{"Current Leads/Mo"}</label>
                                                    <input
                                                        type="number"
                                                        placeholder="10"
                                                        value={draft.current_leads.clone()}
                                                        oninput={on_leads.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                                                    />
                                                </div>
                                            </div>
                                            <div class="copilot-row">
                                                <button class="btn-ghost" disabled={loading} onclick={go_to(Station::Identity)}>{"Back"}</button>
                                                <button class="btn-primary" disabled={loading} onclick={generate}>
                                                    if loading {
                                                        <div class="spinner"></div>
                                                    } else {
                                                        {"Generate Flight Plan"}
                                                    }
                                                </button>
                                            </div>
                                        </div>
                                    },
                                }
                            }
                        </div>
                    </div>
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_skies() -> StrategyPlan {
        StrategyPlan {
            strategy_name: "Clear Skies Protocol".to_string(),
            focus_channels: vec!["Meta Ads".to_string()],
            tactical_steps: vec!["Audit".to_string(), "Launch".to_string()],
            expected_outcome: "2x leads".to_string(),
            operator_advice: "Check your fuel before takeoff.".to_string(),
        }
    }

    #[tokio::test]
    async fn plan_card_shows_every_section_of_the_plan() {
        let html = yew::ServerRenderer::<PlanCard>::with_props(|| PlanCardProps { plan: clear_skies() })
            .render()
            .await;

        assert!(html.contains("Clear Skies Protocol"));
        assert!(html.contains("plan-chip"));
        assert!(html.contains("Meta Ads"));
        let audit = html.find("Audit").expect("first step rendered");
        let launch = html.find("Launch").expect("second step rendered");
        assert!(audit < launch);
        assert!(html.contains("2x leads"));
        assert!(
            html.contains("\"Check your fuel before takeoff.\"")
                || html.contains("&quot;Check your fuel before takeoff.&quot;")
        );
        assert!(html.contains(config::CALENDLY_LINK));
    }

    #[test]
    fn only_failed_requests_surface_an_error() {
        assert_eq!(phase_error(&RequestPhase::Idle), None);
        assert_eq!(phase_error(&RequestPhase::Submitting), None);
        assert_eq!(phase_error(&RequestPhase::Success(clear_skies())), None);

        let failed = RequestPhase::Failed(StrategyError::Timeout(15_000));
        let message = phase_error(&failed).expect("failure has a message");
        assert_eq!(message, StrategyError::Timeout(15_000).user_message());
    }
}
