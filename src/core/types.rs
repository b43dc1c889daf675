use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The two identity columns the autocomplete and lookup endpoints key on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionField {
    Husband,
    Wife,
}

impl SuggestionField {
    /// Upstream spreadsheet column header, sent verbatim as the `field`
    /// request parameter.
    pub fn column_key(&self) -> &'static str {
        match self {
            Self::Husband => "Nama Lengkap Peserta (Suami)",
            Self::Wife => "Nama Lengkap Peserta (Istri)",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    pub husband_name: String,
    pub wife_name: String,
    pub phone_number: String,
    pub marriage_date: Option<String>,
}

impl PersonDetails {
    /// Extract a person record from the lookup response's `person` object.
    ///
    /// The upstream record is a raw spreadsheet row serialized to JSON:
    /// extra columns appear as unknown keys and cell values may be numbers
    /// or nulls, so every field is read permissively.
    pub fn from_record(record: &Value) -> Self {
        let marriage_date = match record_text(record, "Tanggal Pernikahan") {
            value if value.is_empty() => None,
            value => Some(value),
        };
        Self {
            husband_name: record_text(record, SuggestionField::Husband.column_key()),
            wife_name: record_text(record, SuggestionField::Wife.column_key()),
            phone_number: record_text(record, "Nomor Handphone/ WA"),
            marriage_date,
        }
    }
}

fn record_text(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success { message: Option<String> },
    Failure { message: String },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Optional file carried with the multipart submission body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}
