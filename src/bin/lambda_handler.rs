//! AWS Lambda handler for business case calculations
//!
//! Accepts the calculator inputs as a JSON body (API Gateway proxy event) and
//! returns the full report with chart data. Reduction values are 0-100
//! percentages; omitted fields take the configured defaults.

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use business_case::{
    report::ReportEnvelope, BusinessCaseInputs, CalculatorConfig, CalculatorError, ScenarioRunner,
};
use http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use http::Method;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Deserialize;

/// Input for one calculation. Omitted fields take the configured defaults
/// (`CalculatorConfig::from_env`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    pub monthly_audits: Option<f64>,
    pub audit_unit_cost: Option<f64>,
    pub monthly_frauds: Option<f64>,
    pub monthly_fraud_cost: Option<f64>,
    /// Expected audit reduction (0-100)
    pub audit_reduction_pct: Option<f64>,
    /// Expected fraud reduction (0-100)
    pub fraud_reduction_pct: Option<f64>,
    pub upfront_investment: Option<f64>,
    /// Months to project (default: 36)
    pub horizon_months: Option<u32>,
}

impl CalculationRequest {
    fn inputs(&self, defaults: &BusinessCaseInputs) -> BusinessCaseInputs {
        BusinessCaseInputs::from_percentages(
            self.monthly_audits.unwrap_or(defaults.monthly_audits),
            self.audit_unit_cost.unwrap_or(defaults.audit_unit_cost),
            self.monthly_frauds.unwrap_or(defaults.monthly_frauds),
            self.monthly_fraud_cost.unwrap_or(defaults.monthly_fraud_cost),
            self.audit_reduction_pct.unwrap_or_else(|| defaults.audit_reduction_pct()),
            self.fraud_reduction_pct.unwrap_or_else(|| defaults.fraud_reduction_pct()),
            self.upfront_investment.unwrap_or(defaults.upfront_investment),
        )
    }
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    headers
}

fn json_response(status: i64, body: String) -> ApiGatewayProxyResponse {
    let mut headers = cors_headers();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    ApiGatewayProxyResponse {
        status_code: status,
        headers,
        body: Some(Body::Text(body)),
        ..Default::default()
    }
}

fn error_response(status: i64, message: &str) -> ApiGatewayProxyResponse {
    let body = serde_json::json!({ "error": message }).to_string();
    json_response(status, body)
}

/// Lambda handler function
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let request = event.payload;

    // CORS preflight
    if request.http_method == Method::OPTIONS {
        return Ok(ApiGatewayProxyResponse {
            status_code: 200,
            headers: cors_headers(),
            ..Default::default()
        });
    }

    let body = request.body.unwrap_or_else(|| "{}".to_string());
    let calc: CalculationRequest = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
    };

    let mut config = CalculatorConfig::from_env();
    if let Some(horizon) = calc.horizon_months {
        config.horizon_months = horizon;
    }
    if let Err(e) = config.validate() {
        return Ok(error_response(400, &e.to_string()));
    }

    let inputs = calc.inputs(&config.default_inputs);
    let report = match ScenarioRunner::with_config(config).run(&inputs) {
        Ok(report) => report,
        Err(e @ CalculatorError::InvalidInput { .. }) => {
            return Ok(error_response(400, &e.to_string()));
        }
        Err(e) => {
            log::error!("Calculation failed: {}", e);
            return Ok(error_response(500, &e.to_string()));
        }
    };

    let json = ReportEnvelope::new(report).to_json()?;
    Ok(json_response(200, json))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
