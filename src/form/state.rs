use serde::{Deserialize, Serialize};

use crate::core::types::{Attachment, SuggestionField};

/// Owned snapshot of the form. This is the system of record: the UI binding
/// mirrors these values into its widgets and writes user edits back here.
/// Nothing survives a page reload, so there is no identity or persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub husband_name: String,
    pub wife_name: String,
    pub phone_number: String,
    /// Calendar string `YYYY-MM-DD`, as a native date input holds it.
    pub marriage_date: String,
    pub remarks: String,
    #[serde(skip)]
    pub attachment: Option<Attachment>,
}

impl FormState {
    pub fn field(&self, field: SuggestionField) -> &str {
        match field {
            SuggestionField::Husband => &self.husband_name,
            SuggestionField::Wife => &self.wife_name,
        }
    }

    pub fn set_field(&mut self, field: SuggestionField, value: impl Into<String>) {
        match field {
            SuggestionField::Husband => self.husband_name = value.into(),
            SuggestionField::Wife => self.wife_name = value.into(),
        }
    }

    /// Text parts for the multipart submission body, named as the submit
    /// endpoint expects them.
    pub fn submission_fields(&self) -> Vec<(String, String)> {
        vec![
            ("nama_suami".to_string(), self.husband_name.clone()),
            ("nama_istri".to_string(), self.wife_name.clone()),
            ("phone_number".to_string(), self.phone_number.clone()),
            ("tanggal_pernikahan".to_string(), self.marriage_date.clone()),
            ("remarks".to_string(), self.remarks.clone()),
        ]
    }

    /// Clear every field back to its default, as a form reset does.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
