// src/services/shortened_url.rs - Session access for the HTTP surface
use std::sync::{Mutex, MutexGuard};

use log::debug;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{InputEdit, PendingInput, ShortenedUrlResponseDto};
use crate::store::{Action, Outcome, Session};

type Result<T> = std::result::Result<T, AppError>;

/// Snapshot of the whole session as the page would render it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub pending_inputs: Vec<PendingInput>,
    pub error: Option<String>,
    pub urls: Vec<ShortenedUrlResponseDto>,
}

pub trait ShortenedUrlServiceTrait {
    fn view(&self) -> Result<SessionView>;
    fn add_input(&self) -> Result<Vec<PendingInput>>;
    fn edit_input(&self, index: usize, edit: InputEdit) -> Result<Vec<PendingInput>>;
    fn submit(&self) -> Result<Vec<ShortenedUrlResponseDto>>;
    fn list(&self) -> Result<Vec<ShortenedUrlResponseDto>>;
    /// Returns the long URL to send the client to
    fn redirect(&self, shortcode: &str) -> Result<String>;
    /// Whether any record, live or expired, carries `shortcode`
    fn is_registered(&self, shortcode: &str) -> Result<bool>;
    fn record_count(&self) -> Result<usize>;
    fn close(&self) -> Result<()>;
}

pub struct ShortenedUrlService {
    session: Mutex<Session>,
    public_base_url: String,
}

impl ShortenedUrlService {
    pub fn new(session: Session, public_base_url: impl Into<String>) -> Self {
        Self {
            session: Mutex::new(session),
            public_base_url: public_base_url.into(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Session>> {
        self.session.lock().map_err(|e| {
            log::error!("Session lock poisoned: {}", e);
            AppError::Internal("Session state is unavailable".to_string())
        })
    }

    fn to_dtos(&self, session: &Session, skip: usize) -> Vec<ShortenedUrlResponseDto> {
        session
            .state()
            .records
            .iter()
            .skip(skip)
            .map(|record| ShortenedUrlResponseDto::from_record(record, &self.public_base_url))
            .collect()
    }
}

impl ShortenedUrlServiceTrait for ShortenedUrlService {
    fn view(&self) -> Result<SessionView> {
        let session = self.lock()?;
        let state = session.state();
        Ok(SessionView {
            pending_inputs: state.pending_inputs.clone(),
            error: state.error.clone(),
            urls: self.to_dtos(&session, 0),
        })
    }

    fn add_input(&self) -> Result<Vec<PendingInput>> {
        let mut session = self.lock()?;
        if session.dispatch(Action::AddInput) == Outcome::Ignored {
            debug!(
                "Pending input cap of {} reached",
                session.settings().max_pending_inputs
            );
        }
        Ok(session.state().pending_inputs.clone())
    }

    fn edit_input(&self, index: usize, edit: InputEdit) -> Result<Vec<PendingInput>> {
        let mut session = self.lock()?;
        match session.dispatch(Action::EditInput { index, edit }) {
            Outcome::Ignored => Err(AppError::NotFound(format!(
                "No pending input at index {}",
                index
            ))),
            _ => Ok(session.state().pending_inputs.clone()),
        }
    }

    fn submit(&self) -> Result<Vec<ShortenedUrlResponseDto>> {
        let mut session = self.lock()?;
        let before = session.state().records.len();
        match session.dispatch(Action::Submit) {
            Outcome::Rejected(err) => Err(err.into()),
            _ => Ok(self.to_dtos(&session, before)),
        }
    }

    fn list(&self) -> Result<Vec<ShortenedUrlResponseDto>> {
        let session = self.lock()?;
        Ok(self.to_dtos(&session, 0))
    }

    fn redirect(&self, shortcode: &str) -> Result<String> {
        let mut session = self.lock()?;
        match session.dispatch(Action::Redirect {
            shortcode: shortcode.to_string(),
        }) {
            Outcome::Opened(long_url) => Ok(long_url),
            Outcome::Rejected(err) => Err(err.into()),
            Outcome::Applied | Outcome::Ignored => Err(AppError::NotFound(format!(
                "No URL registered for code '{}'",
                shortcode
            ))),
        }
    }

    fn is_registered(&self, shortcode: &str) -> Result<bool> {
        Ok(self.lock()?.state().find_record(shortcode).is_some())
    }

    fn record_count(&self) -> Result<usize> {
        Ok(self.lock()?.state().records.len())
    }

    fn close(&self) -> Result<()> {
        self.lock()?.close();
        Ok(())
    }
}
