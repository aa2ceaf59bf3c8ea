// src/infrastructure/http.rs
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

/// Store adapter speaking the backend's HTTP/JSON surface.
///
/// One blocking client, owned by the store worker thread; the request
/// timeout is the only cancellation mechanism.
pub struct HttpNoteStore {
    client: Client,
    base_url: String,
}

impl HttpNoteStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        reqwest::Url::parse(base_url)
            .with_context(|| format!("Invalid backend URL: {base_url}"))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();
        info!(%base_url, ?timeout, "Using HTTP note store");
        Ok(Self { client, base_url })
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: i64) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }

    /// Map transport failures into the domain error space.
    fn transport(e: reqwest::Error) -> DomainError {
        DomainError::BackendError(e.to_string())
    }

    /// Reject non-success responses; 404 carries the note id when known.
    fn check(id: Option<i64>, response: Response) -> Result<Response, DomainError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(DomainError::NoteNotFound(id));
            }
        }
        if !status.is_success() {
            return Err(DomainError::BackendError(format!(
                "Backend returned {status}"
            )));
        }
        Ok(response)
    }
}

impl NoteStore for HttpNoteStore {
    #[instrument(level = "debug", skip(self))]
    fn create_note(&mut self, title: &str) -> Result<Note, DomainError> {
        let response = self
            .client
            .post(self.notes_url())
            .json(&json!({ "title": title }))
            .send()
            .map_err(Self::transport)?;

        let note: Note = Self::check(None, response)?.json().map_err(Self::transport)?;
        debug!(note_id = note.id, "Created note on backend");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let response = self
            .client
            .get(self.notes_url())
            .send()
            .map_err(Self::transport)?;

        Self::check(None, response)?.json().map_err(Self::transport)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        let response = self
            .client
            .get(self.note_url(id))
            .send()
            .map_err(Self::transport)?;

        Self::check(Some(id), response)?.json().map_err(Self::transport)
    }

    #[instrument(level = "debug", skip(self, title))]
    fn update_title(&mut self, id: i64, title: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .put(format!("{}/title", self.note_url(id)))
            .json(&json!({ "title": title }))
            .send()
            .map_err(Self::transport)?;

        Self::check(Some(id), response).map(|_| ())
    }

    #[instrument(level = "debug", skip(self, body))]
    fn update_body(&mut self, id: i64, body: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .put(format!("{}/body", self.note_url(id)))
            .json(&json!({ "note": body }))
            .send()
            .map_err(Self::transport)?;

        Self::check(Some(id), response).map(|_| ())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .map_err(Self::transport)?;

        Self::check(Some(id), response).map(|_| ())
    }
}
