//! Routes a validated `/bfhl` body to the numeric routines or the AI gateway.

use crate::error::DispatchError;
use crate::models::{BfhlRequest, Output};
use crate::services::answer::extract_answer;
use crate::services::numeric;
use crate::services::providers::{build_prompt, AiGateway, GatewayError};
use metrics::counter;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Stateless dispatcher. Cloning is cheap; all clones share one gateway.
#[derive(Clone)]
pub struct RequestDispatcher {
    gateway: Arc<dyn AiGateway>,
    ai_timeout: Duration,
}

impl RequestDispatcher {
    pub fn new(gateway: Arc<dyn AiGateway>, ai_timeout: Duration) -> Self {
        Self {
            gateway,
            ai_timeout,
        }
    }

    pub fn gateway(&self) -> &Arc<dyn AiGateway> {
        &self.gateway
    }

    /// Validate `body` and compute its result.
    #[tracing::instrument(skip(self, body))]
    pub async fn handle(&self, body: &Value) -> Result<Output, DispatchError> {
        let request = match BfhlRequest::parse(body) {
            Ok(request) => request,
            Err(e) => {
                record("none", e.kind());
                return Err(e);
            }
        };

        let variant = request.variant();
        let result = self.execute(request).await;

        match &result {
            Ok(_) => {
                record(variant.as_str(), "success");
                tracing::debug!(variant = %variant, "Request handled");
            }
            Err(e) => {
                record(variant.as_str(), e.kind());
                tracing::warn!(variant = %variant, error = %e, "Request failed");
            }
        }
        result
    }

    pub async fn execute(&self, request: BfhlRequest) -> Result<Output, DispatchError> {
        match request {
            BfhlRequest::Ai(question) => {
                let raw = self.ask(&question).await?;
                Ok(Output::Answer(extract_answer(&question, &raw)))
            }
            // Trial division over a large array can run for seconds; keep it
            // off the async workers.
            numeric_request => tokio::task::spawn_blocking(move || compute(numeric_request))
                .await
                .map_err(|e| DispatchError::Internal(e.to_string()))?,
        }
    }

    /// One gateway round trip, bounded by the configured timeout.
    async fn ask(&self, question: &str) -> Result<String, DispatchError> {
        let prompt = build_prompt(question);

        match tokio::time::timeout(self.ai_timeout, self.gateway.ask(&prompt)).await {
            Ok(Ok(raw)) => Ok(raw),
            Ok(Err(e)) => {
                tracing::error!(error = %e, "AI gateway call failed");
                Err(DispatchError::UpstreamFailure(e))
            }
            Err(_) => {
                let e = GatewayError::Timeout(self.ai_timeout.as_millis());
                tracing::error!(error = %e, "AI gateway call timed out");
                Err(DispatchError::UpstreamFailure(e))
            }
        }
    }
}

fn compute(request: BfhlRequest) -> Result<Output, DispatchError> {
    match request {
        BfhlRequest::Fibonacci(n) => Ok(Output::Sequence(numeric::fibonacci(n))),
        BfhlRequest::Prime(values) => Ok(Output::Integers(numeric::filter_primes(&values))),
        BfhlRequest::Lcm(values) => Ok(Output::Integer(numeric::reduce_lcm(&values)?)),
        BfhlRequest::Hcf(values) => Ok(Output::Integer(numeric::reduce_hcf(&values)?)),
        BfhlRequest::Ai(_) => Err(DispatchError::Internal(
            "AI requests are not computed locally".to_string(),
        )),
    }
}

fn record(variant: &'static str, outcome: &'static str) {
    counter!("bfhl_requests_total", "variant" => variant, "outcome" => outcome).increment(1);
}
