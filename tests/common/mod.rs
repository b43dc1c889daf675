#![allow(dead_code)]

use std::sync::Mutex;

use presensi_lib::{
    core::{
        errors::{AppError, AppResult},
        types::{Attachment, PersonDetails, SubmitAck, SuggestionField},
    },
    providers::presence_api::PresenceApi,
};

/// Scripted reply for one fake endpoint.
pub enum Scripted<T> {
    Respond(T),
    NetworkFail,
    HttpFail { status: u16, body: String },
}

impl<T: Clone> Scripted<T> {
    fn resolve(&self) -> AppResult<T> {
        match self {
            Self::Respond(value) => Ok(value.clone()),
            Self::NetworkFail => Err(AppError::Network("connection refused".to_string())),
            Self::HttpFail { status, body } => Err(AppError::Http {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

#[derive(Default)]
pub struct Counters {
    pub autocomplete: u32,
    pub person_details: u32,
    pub submit: u32,
}

/// In-memory stand-in for the three HTTP endpoints. Replies are scripted
/// per endpoint and every call is counted so tests can assert that a flow
/// issued no request at all.
pub struct FakeApi {
    pub suggestions: Scripted<Vec<String>>,
    pub person: Scripted<Option<PersonDetails>>,
    pub ack: Scripted<SubmitAck>,
    pub counters: Mutex<Counters>,
    pub last_person_query: Mutex<Option<(String, String)>>,
    pub last_submit_fields: Mutex<Vec<(String, String)>>,
    pub last_submit_had_attachment: Mutex<bool>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            suggestions: Scripted::Respond(Vec::new()),
            person: Scripted::Respond(None),
            ack: Scripted::Respond(SubmitAck {
                success: true,
                message: Some("Presence recorded successfully".to_string()),
            }),
            counters: Mutex::new(Counters::default()),
            last_person_query: Mutex::new(None),
            last_submit_fields: Mutex::new(Vec::new()),
            last_submit_had_attachment: Mutex::new(false),
        }
    }
}

impl PresenceApi for &FakeApi {
    async fn autocomplete(&self, _term: &str, _field: SuggestionField) -> AppResult<Vec<String>> {
        self.counters.lock().expect("counters").autocomplete += 1;
        self.suggestions.resolve()
    }

    async fn person_details(
        &self,
        husband: &str,
        wife: &str,
    ) -> AppResult<Option<PersonDetails>> {
        self.counters.lock().expect("counters").person_details += 1;
        *self.last_person_query.lock().expect("last query") =
            Some((husband.to_string(), wife.to_string()));
        self.person.resolve()
    }

    async fn submit(
        &self,
        fields: &[(String, String)],
        attachment: Option<Attachment>,
    ) -> AppResult<SubmitAck> {
        self.counters.lock().expect("counters").submit += 1;
        *self.last_submit_fields.lock().expect("last fields") = fields.to_vec();
        *self.last_submit_had_attachment.lock().expect("attachment flag") = attachment.is_some();
        self.ack.resolve()
    }
}
