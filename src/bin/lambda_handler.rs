//! AWS Lambda handler for benefit estimates
//!
//! Accepts personal inputs and an earnings history as JSON and returns the full
//! calculation result, optionally with a claiming-age sweep.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use std::time::Instant;

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use benefit_estimator::{
    scenario::ClaimingOption, CalculationConfig, CalculationResult, EarningRecord, PersonalInputs, ScenarioRunner,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Input for a benefit estimate
#[derive(Debug, Deserialize)]
pub struct BenefitRequest {
    #[serde(flatten)]
    pub inputs: PersonalInputs,

    /// Reported earnings; empty means the whole career is projected
    #[serde(default)]
    pub earnings: Vec<EarningRecord>,

    /// COLAs apply through the year before this one (default: current year)
    #[serde(default)]
    pub valuation_year: Option<i32>,

    /// Also return benefits for claiming ages 62-70
    #[serde(default)]
    pub include_sweep: bool,
}

/// Output from the calculation
#[derive(Debug, Serialize, Default)]
pub struct BenefitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claiming_options: Option<Vec<ClaimingOption>>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn json_response(status: u16, response: &BenefitResponse) -> Value {
    let body = serde_json::to_string(response)
        .unwrap_or_else(|e| format!("{{\"error\":\"failed to serialize response: {}\"}}", e));
    json!({
        "statusCode": status,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
        },
        "body": body,
    })
}

fn error_response(status: u16, message: String, start: Instant) -> Value {
    log::warn!("request failed: {}", message);
    json_response(
        status,
        &BenefitResponse {
            error: Some(message),
            execution_time_ms: start.elapsed().as_millis() as u64,
            ..Default::default()
        },
    )
}

async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let start = Instant::now();
    let payload = event.payload;

    if payload.is_base64_encoded {
        return Ok(error_response(400, "base64-encoded bodies are not supported".to_string(), start));
    }

    let body = payload.body.unwrap_or_default();
    let request: BenefitRequest = match serde_json::from_str(if body.is_empty() { "{}" } else { &body }) {
        Ok(request) => request,
        Err(e) => return Ok(error_response(400, format!("invalid request: {}", e), start)),
    };

    let config = request
        .valuation_year
        .map(CalculationConfig::new)
        .unwrap_or_else(CalculationConfig::current_year);
    let runner = ScenarioRunner::new(config);

    let result = match runner.run(&request.earnings, &request.inputs) {
        Ok(result) => result,
        Err(e) => return Ok(error_response(500, e.to_string(), start)),
    };

    let claiming_options = if request.include_sweep {
        match runner.claiming_sweep(&request.earnings, &request.inputs) {
            Ok(options) => Some(options),
            Err(e) => return Ok(error_response(500, e.to_string(), start)),
        }
    } else {
        None
    };

    log::info!(
        "birth {} start {}/{}: benefit {} in {:?}",
        request.inputs.birth_year,
        request.inputs.benefit_start_month,
        request.inputs.benefit_start_year,
        result.benefit,
        start.elapsed()
    );

    let response = BenefitResponse {
        result: Some(result),
        claiming_options,
        execution_time_ms: start.elapsed().as_millis() as u64,
        error: None,
    };

    Ok(json_response(200, &response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
