use std::cell::RefCell;

use log::{error, info, warn};

use super::error::StrategyError;
use super::model::{StrategyPlan, StrategyRequest};
use super::prompt::GenerateContentRequest;
use super::transport::PlanTransport;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Submitting,
    Success(StrategyPlan),
    Failed(StrategyError),
}

#[derive(Debug, Default)]
struct RequesterState {
    phase: RequestPhase,
    // Bumped on abandon so late responses can tell they are stale.
    generation: u64,
}

/// Turns a validated intake into a plan, one request at a time.
pub struct StrategyPlanRequester<T> {
    transport: T,
    max_retries: u32,
    state: RefCell<RequesterState>,
}

impl<T: PlanTransport> StrategyPlanRequester<T> {
    pub fn new(transport: T, max_retries: u32) -> Self {
        Self {
            transport,
            max_retries,
            state: RefCell::new(RequesterState::default()),
        }
    }

    pub fn phase(&self) -> RequestPhase {
        self.state.borrow().phase.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state.borrow().phase, RequestPhase::Submitting)
    }

    /// Back to Idle after a result has been shown or dismissed.
    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        if !matches!(state.phase, RequestPhase::Submitting) {
            state.phase = RequestPhase::Idle;
        }
    }

    /// Drops interest in whatever is outstanding. A response that arrives
    /// later is discarded.
    pub fn abandon(&self) {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.phase = RequestPhase::Idle;
    }

    pub async fn submit(&self, request: &StrategyRequest) -> Result<StrategyPlan, StrategyError> {
        let ticket = {
            let mut state = self.state.borrow_mut();
            if matches!(state.phase, RequestPhase::Submitting) {
                return Err(StrategyError::InFlight);
            }
            state.phase = RequestPhase::Submitting;
            state.generation
        };

        info!("Generating flight plan for {}", request.name);
        let outcome = self.run(request).await;

        let mut state = self.state.borrow_mut();
        if state.generation != ticket {
            info!("Discarding flight plan for {}, request was abandoned", request.name);
            return Err(StrategyError::Abandoned);
        }
        state.phase = match &outcome {
            Ok(plan) => RequestPhase::Success(plan.clone()),
            Err(e) => {
                error!("Flight plan failed: {}", e);
                RequestPhase::Failed(e.clone())
            }
        };
        outcome
    }

    async fn run(&self, request: &StrategyRequest) -> Result<StrategyPlan, StrategyError> {
        let body = GenerateContentRequest::for_request(request);
        let mut attempt = 0;
        loop {
            match self.transport.generate(&body).await {
                Ok(text) => return StrategyPlan::from_json(&text),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!("Flight plan attempt {} failed ({}), retrying", attempt, e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::model::BusinessType;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{join, FutureExt};
    use std::cell::Cell;
    use std::collections::VecDeque;

    const CLEAR_SKIES: &str = r#"{"strategyName":"Clear Skies Protocol","focusChannels":["Meta Ads"],"tacticalSteps":["Audit","Launch"],"expectedOutcome":"2x leads","operatorAdvice":"Check your fuel before takeoff."}"#;

    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<String, StrategyError>>>,
        calls: Cell<usize>,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<Result<&str, StrategyError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into_iter().map(|r| r.map(str::to_string)).collect()),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl PlanTransport for ScriptedTransport {
        async fn generate(&self, _body: &GenerateContentRequest) -> Result<String, StrategyError> {
            self.calls.set(self.calls.get() + 1);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(StrategyError::Network("script exhausted".into())))
        }
    }

    /// Holds the reply until the test releases it.
    struct GatedTransport {
        gate: RefCell<Option<oneshot::Receiver<Result<String, StrategyError>>>>,
    }

    #[async_trait(?Send)]
    impl PlanTransport for GatedTransport {
        async fn generate(&self, _body: &GenerateContentRequest) -> Result<String, StrategyError> {
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(StrategyError::Network("gate dropped".into()))),
                None => Err(StrategyError::Network("no gate".into())),
            }
        }
    }

    fn blue_sky() -> StrategyRequest {
        StrategyRequest {
            name: "Blue Sky Aviation".to_string(),
            business_type: BusinessType::FlightSchool,
            current_monthly_leads: 10,
            target_growth_percent: 20.0,
            pain_point: "inconsistent leads".to_string(),
        }
    }

    #[test]
    fn complete_response_becomes_the_plan() {
        let requester = StrategyPlanRequester::new(ScriptedTransport::new(vec![Ok(CLEAR_SKIES)]), 1);
        let plan = block_on(requester.submit(&blue_sky())).unwrap();

        assert_eq!(plan.strategy_name, "Clear Skies Protocol");
        assert_eq!(plan.focus_channels, vec!["Meta Ads".to_string()]);
        assert_eq!(plan.tactical_steps, vec!["Audit".to_string(), "Launch".to_string()]);
        assert_eq!(plan.expected_outcome, "2x leads");
        assert_eq!(plan.operator_advice, "Check your fuel before takeoff.");
        assert_eq!(requester.phase(), RequestPhase::Success(plan));
    }

    #[test]
    fn missing_field_fails_without_a_partial_plan() {
        let partial = r#"{"strategyName":"Clear Skies Protocol","focusChannels":["Meta Ads"],"tacticalSteps":["Audit"],"expectedOutcome":"2x leads"}"#;
        let requester = StrategyPlanRequester::new(ScriptedTransport::new(vec![Ok(partial)]), 1);
        let result = block_on(requester.submit(&blue_sky()));

        assert!(matches!(result, Err(StrategyError::Schema(_))));
        assert!(matches!(requester.phase(), RequestPhase::Failed(StrategyError::Schema(_))));
        // Schema problems are not retried.
        assert_eq!(requester.transport.calls.get(), 1);
    }

    #[test]
    fn network_failure_leaves_requester_ready_for_another_go() {
        let transport = ScriptedTransport::new(vec![
            Err(StrategyError::Network("offline".into())),
            Err(StrategyError::Network("still offline".into())),
            Ok(CLEAR_SKIES),
        ]);
        let requester = StrategyPlanRequester::new(transport, 1);

        let first = block_on(requester.submit(&blue_sky()));
        assert_eq!(first, Err(StrategyError::Network("still offline".into())));
        assert!(!requester.is_in_flight());
        assert_eq!(requester.transport.calls.get(), 2);

        requester.reset();
        assert_eq!(requester.phase(), RequestPhase::Idle);
        let second = block_on(requester.submit(&blue_sky()));
        assert!(second.is_ok());
    }

    #[test]
    fn a_single_transient_failure_is_retried() {
        let transport = ScriptedTransport::new(vec![Err(StrategyError::Timeout(15_000)), Ok(CLEAR_SKIES)]);
        let requester = StrategyPlanRequester::new(transport, 1);
        assert!(block_on(requester.submit(&blue_sky())).is_ok());
        assert_eq!(requester.transport.calls.get(), 2);
    }

    #[test]
    fn no_retries_when_disabled() {
        let transport = ScriptedTransport::new(vec![Err(StrategyError::Network("offline".into())), Ok(CLEAR_SKIES)]);
        let requester = StrategyPlanRequester::new(transport, 0);
        assert!(block_on(requester.submit(&blue_sky())).is_err());
        assert_eq!(requester.transport.calls.get(), 1);
    }

    #[test]
    fn service_errors_are_not_retried() {
        let transport = ScriptedTransport::new(vec![
            Err(StrategyError::Service { status: 403, message: "API key not valid".into() }),
            Ok(CLEAR_SKIES),
        ]);
        let requester = StrategyPlanRequester::new(transport, 1);
        let result = block_on(requester.submit(&blue_sky()));
        assert!(matches!(result, Err(StrategyError::Service { status: 403, .. })));
        assert_eq!(requester.transport.calls.get(), 1);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let (tx, rx) = oneshot::channel();
        let requester = StrategyPlanRequester::new(GatedTransport { gate: RefCell::new(Some(rx)) }, 1);
        let request = blue_sky();

        let mut first = Box::pin(requester.submit(&request));
        assert!(first.as_mut().now_or_never().is_none());
        assert!(requester.is_in_flight());

        let second = block_on(requester.submit(&request));
        assert_eq!(second, Err(StrategyError::InFlight));

        tx.send(Ok(CLEAR_SKIES.to_string())).unwrap();
        assert!(block_on(first).is_ok());
        assert!(!requester.is_in_flight());
    }

    #[test]
    fn abandoned_requests_do_not_touch_state() {
        let (tx, rx) = oneshot::channel();
        let requester = StrategyPlanRequester::new(GatedTransport { gate: RefCell::new(Some(rx)) }, 1);
        let request = blue_sky();

        let release = async {
            requester.abandon();
            tx.send(Ok(CLEAR_SKIES.to_string())).unwrap();
        };
        let (result, ()) = block_on(join(requester.submit(&request), release));

        assert_eq!(result, Err(StrategyError::Abandoned));
        assert_eq!(requester.phase(), RequestPhase::Idle);
    }
}
