// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("llm.base_url must not be empty");
        }
        let parsed = Url::parse(&base_url)
            .with_context(|| format!("llm.base_url {base_url:?} is not an absolute URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "llm.base_url {:?} must use http or https, got {:?}",
                base_url,
                parsed.scheme()
            );
        }
        let model = model.trim().trim_start_matches("models/");
        if model.is_empty() {
            bail!("llm.model must not be empty");
        }
        if api_key.trim().is_empty() {
            bail!(
                "API key is empty -- set [llm].api_key or the GEMINI_API_KEY environment variable"
            );
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            model: model.to_owned(),
            api_key: api_key.trim().to_owned(),
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .http
            .get(format!("{}/models", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: ModelsResponse = response.json().context("decode model list")?;
        Ok(parsed
            .models
            .into_iter()
            .map(|model| model.name.trim_start_matches("models/").to_owned())
            .collect())
    }

    pub fn ping(&self) -> Result<()> {
        let models = self.list_models()?;
        if !models.iter().any(|name| name == &self.model) {
            bail!(
                "model {:?} is not available for this API key -- set [llm].model to one of the listed models",
                self.model
            );
        }
        Ok(())
    }

    pub fn generate_content(&self, prompt: &str) -> Result<String> {
        let endpoint = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!(%endpoint, prompt_chars = prompt.len(), "sending generateContent");

        let response = self
            .http
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateRequest::new(prompt))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        debug!(status = status.as_u16(), "generateContent responded");
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: GenerateResponse = response.json().context("decode generation response")?;
        extract_text(parsed)
    }
}

fn extract_text(response: GenerateResponse) -> Result<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        if let Some(reason) = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
        {
            bail!("prompt was blocked by the model ({reason})");
        }
        bail!("no candidates in generation response");
    };

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(match candidate.finish_reason {
            Some(reason) => {
                anyhow!("generation response contained no text (finish reason {reason})")
            }
            None => anyhow!("generation response contained no text"),
        });
    }
    Ok(text)
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        return anyhow!(
            "request to {} timed out -- raise [llm].timeout or retry ({})",
            base_url,
            error
        );
    }
    anyhow!(
        "cannot reach {} -- check your network connection and [llm].base_url ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.message.is_empty()
    {
        if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || error.status.as_deref() == Some("PERMISSION_DENIED")
        {
            return anyhow!(
                "authentication failed ({}): {} -- check [llm].api_key or GEMINI_API_KEY",
                status.as_u16(),
                error.message
            );
        }
        return anyhow!("server error ({}): {}", status.as_u16(), error.message);
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    models: Vec<ModelRow>,
}

#[derive(Debug, Deserialize)]
struct ModelRow {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    status: Option<String>,
}
