use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::Value;
use validator::Validate;

use crate::domain::ai::dto::alert_edits_request::{AlertEditsRequest, AlertEditsResponse};
use crate::domain::ai::dto::justification_request::{JustificationRequest, JustificationResponse};
use crate::errors::AppError;

const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";
const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";

const JUSTIFICATION_PROMPT: &str = "\
You are an AI assistant that helps MeteOps Leads quickly create alert justifications.

Given the following information, suggest a justification for the alert. Be concise and clear.

Regions: {{REGIONS}}
Event Date: {{EVENT_DATE}}
Event Type: {{EVENT_TYPE}}
Severity: {{SEVERITY}}
Ensemble Forecasts: {{ENSEMBLE_FORECASTS}}

Justification:";

const ALERT_EDITS_PROMPT: &str = "\
You are an AI assistant helping a MeteOps Lead identify suggested edits to an alert based on updated forecast data.

Original Alert: {{ORIGINAL_ALERT}}
Updated Forecast Data: {{UPDATED_FORECAST}}

Based on the updated forecast data, suggest specific edits to the original alert. Be as concise as possible.
Return the suggested edits, with explanations if necessary.";

/// Connection settings for the suggestion model, read from the environment
/// on every call so token rotation needs no restart.
#[derive(Debug, Clone)]
struct AiConfig {
    base_url: String,
    token: String,
    model: String,
}

impl AiConfig {
    fn from_env() -> Result<Self> {
        let token = std::env::var("METEOPS_AI_TOKEN")
            .map_err(|_| anyhow!("AI token is missing; set METEOPS_AI_TOKEN"))?;
        let base_url =
            std::env::var("METEOPS_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("METEOPS_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            base_url,
            token,
            model,
        })
    }

    /// Normalized chat-completions endpoint for the configured base URL.
    fn completions_url(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.ends_with("/chat/completions") {
            trimmed.to_string()
        } else {
            format!("{}/chat/completions", trimmed)
        }
    }
}

/// Suggestion flows backed by an OpenAI-compatible completion endpoint.
#[derive(Clone, Default)]
pub struct AiSuggestionService;

impl AiSuggestionService {
    /// Draft a justification paragraph from the alert form's inputs.
    pub async fn suggest_justification(
        &self,
        payload: JustificationRequest,
    ) -> Result<JustificationResponse> {
        payload.validate()?;

        let prompt = build_justification_prompt(&payload);
        let justification = complete(&AiConfig::from_env()?, &prompt).await?;

        Ok(JustificationResponse { justification })
    }

    /// Suggest edits to an existing alert after its forecast changed.
    pub async fn suggest_alert_edits(
        &self,
        payload: AlertEditsRequest,
    ) -> Result<AlertEditsResponse> {
        payload.validate()?;

        let prompt = build_alert_edits_prompt(&payload);
        let suggested_edits = complete(&AiConfig::from_env()?, &prompt).await?;

        Ok(AlertEditsResponse { suggested_edits })
    }
}

fn build_justification_prompt(req: &JustificationRequest) -> String {
    JUSTIFICATION_PROMPT
        .replace("{{REGIONS}}", &req.regions.join(", "))
        .replace("{{EVENT_DATE}}", &req.event_date)
        .replace("{{EVENT_TYPE}}", &req.event_type)
        .replace("{{SEVERITY}}", &req.severity.to_string())
        .replace("{{ENSEMBLE_FORECASTS}}", &req.ensemble_forecasts)
}

fn build_alert_edits_prompt(req: &AlertEditsRequest) -> String {
    ALERT_EDITS_PROMPT
        .replace("{{ORIGINAL_ALERT}}", &req.original_alert)
        .replace("{{UPDATED_FORECAST}}", &req.updated_forecast)
}

/// Send one user-role prompt and return the assistant's text.
async fn complete(cfg: &AiConfig, prompt: &str) -> Result<String> {
    let url = cfg.completions_url();
    let body = serde_json::json!({
        "model": cfg.model,
        "messages": [{ "role": "user", "content": prompt }],
        "stream": false,
    });

    let client = Client::builder()
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

    let resp = client
        .post(&url)
        .bearer_auth(&cfg.token)
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::AiApiError(format!("request to {url} failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(AppError::AiApiError(format!(
            "suggestion model returned {status}: {text} (url={url})"
        ))
        .into());
    }

    let json: Value = resp
        .json()
        .await
        .map_err(|e| AppError::AiApiError(format!("failed to decode response from {url}: {e}")))?;

    extract_completion_text(&json).ok_or_else(|| {
        AppError::AiApiError(format!("response from {url} held no message content")).into()
    })
}

fn extract_completion_text(response: &Value) -> Option<String> {
    response
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|text| text.trim().to_string())
}
