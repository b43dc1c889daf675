use std::time::Duration;

use serde_json::Value;

use crate::core::{
    errors::{AppError, AppResult},
    types::{Attachment, PersonDetails, SubmitAck, SuggestionField},
};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// The three endpoints the form talks to. The controller is generic over
/// this trait so tests can drive it without a server.
#[allow(async_fn_in_trait)]
pub trait PresenceApi {
    async fn autocomplete(&self, term: &str, field: SuggestionField) -> AppResult<Vec<String>>;

    async fn person_details(&self, husband: &str, wife: &str)
        -> AppResult<Option<PersonDetails>>;

    async fn submit(
        &self,
        fields: &[(String, String)],
        attachment: Option<Attachment>,
    ) -> AppResult<SubmitAck>;
}

#[derive(Debug, Clone)]
pub struct HttpPresenceApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPresenceApi {
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read_json(response: reqwest::Response) -> AppResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

impl PresenceApi for HttpPresenceApi {
    async fn autocomplete(&self, term: &str, field: SuggestionField) -> AppResult<Vec<String>> {
        let response = self
            .http
            .get(self.endpoint("/api/autocomplete"))
            .query(&[("term", term), ("field", field.column_key())])
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        parse_suggestions(&body)
    }

    async fn person_details(
        &self,
        husband: &str,
        wife: &str,
    ) -> AppResult<Option<PersonDetails>> {
        let response = self
            .http
            .get(self.endpoint("/api/get_person_details"))
            .query(&[("nama_suami", husband), ("nama_istri", wife)])
            .send()
            .await?;
        let body = Self::read_json(response).await?;

        if !body.get("success").and_then(Value::as_bool).unwrap_or(false) {
            return Ok(None);
        }
        Ok(body.get("person").map(PersonDetails::from_record))
    }

    async fn submit(
        &self,
        fields: &[(String, String)],
        attachment: Option<Attachment>,
    ) -> AppResult<SubmitAck> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }
        if let Some(attachment) = attachment {
            let part = reqwest::multipart::Part::bytes(attachment.bytes)
                .file_name(attachment.file_name)
                .mime_str(&attachment.mime)
                .map_err(|err| AppError::InvalidInput(format!("attachment mime: {err}")))?;
            form = form.part("attachment", part);
        }

        let response = self
            .http
            .post(self.endpoint("/api/submit"))
            .multipart(form)
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        Ok(serde_json::from_value(body)?)
    }
}

fn parse_suggestions(body: &Value) -> AppResult<Vec<String>> {
    let items = body
        .get("suggestions")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::InvalidResponse("missing suggestions list".to_string()))?;
    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

/// Pull a human-readable failure message out of an error response body,
/// if there is one. The upstream server reports validation and handler
/// failures as `{"detail": "..."}`.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
}
