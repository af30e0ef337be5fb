use std::future::Future;

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::debug;

use super::error::StrategyError;
use super::prompt::{extract_text, service_error, GenerateContentRequest};
use crate::config::StrategyConfig;

/// Sends one generate call and hands back the model's raw text.
#[async_trait(?Send)]
pub trait PlanTransport {
    async fn generate(&self, body: &GenerateContentRequest) -> Result<String, StrategyError>;
}

/// Races `work` against `deadline`; the deadline winning is a timeout.
pub async fn with_deadline<T, W, D>(work: W, deadline: D, timeout_ms: u32) -> Result<T, StrategyError>
where
    W: Future<Output = Result<T, StrategyError>>,
    D: Future<Output = ()>,
{
    match future::select(Box::pin(work), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(StrategyError::Timeout(timeout_ms)),
    }
}

/// Talks to the hosted Gemini `generateContent` endpoint from the browser.
pub struct GeminiTransport {
    config: StrategyConfig,
}

impl GeminiTransport {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }

    async fn send(&self, url: &str, body: &GenerateContentRequest) -> Result<String, StrategyError> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| StrategyError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| StrategyError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StrategyError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(service_error(status, &text));
        }
        extract_text(&text)
    }
}

#[async_trait(?Send)]
impl PlanTransport for GeminiTransport {
    async fn generate(&self, body: &GenerateContentRequest) -> Result<String, StrategyError> {
        let url = self.config.generate_url().ok_or(StrategyError::MissingApiKey)?;
        debug!("Requesting flight plan from model {}", self.config.model);
        let timeout_ms = self.config.timeout_ms;
        with_deadline(self.send(&url, body), TimeoutFuture::new(timeout_ms), timeout_ms).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn finished_work_beats_a_pending_deadline() {
        let result = block_on(with_deadline(
            future::ready(Ok::<_, StrategyError>("plan")),
            future::pending::<()>(),
            15_000,
        ));
        assert_eq!(result, Ok("plan"));
    }

    #[test]
    fn expired_deadline_is_a_timeout() {
        let result = block_on(with_deadline(
            future::pending::<Result<(), StrategyError>>(),
            future::ready(()),
            15_000,
        ));
        assert_eq!(result, Err(StrategyError::Timeout(15_000)));
    }

    #[test]
    fn work_errors_pass_through() {
        let result = block_on(with_deadline(
            future::ready(Err::<(), _>(StrategyError::Network("offline".into()))),
            future::pending::<()>(),
            10,
        ));
        assert_eq!(result, Err(StrategyError::Network("offline".into())));
    }
}
