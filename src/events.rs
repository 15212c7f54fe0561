// src/events.rs - Diagnostic events emitted by the session
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{log, Level};

/// Lifecycle and action events of a shortening session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Started,
    Closed,
    InvalidUrl {
        url: String,
    },
    InvalidValidity,
    Shortened {
        long_url: String,
        shortcode: String,
        validity_minutes: i64,
    },
    Accessed {
        shortcode: String,
        long_url: String,
        access_time: DateTime<Utc>,
    },
    ExpiredAccess {
        shortcode: String,
    },
}

impl AppEvent {
    /// Lifecycle and success events are informational, rejected input is an
    /// error and an expired access is a warning.
    pub fn level(&self) -> Level {
        match self {
            AppEvent::Started
            | AppEvent::Closed
            | AppEvent::Shortened { .. }
            | AppEvent::Accessed { .. } => Level::Info,
            AppEvent::InvalidUrl { .. } | AppEvent::InvalidValidity => Level::Error,
            AppEvent::ExpiredAccess { .. } => Level::Warn,
        }
    }
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEvent::Started => write!(f, "Application started"),
            AppEvent::Closed => write!(f, "Application closed"),
            AppEvent::InvalidUrl { url } => write!(f, "Invalid URL format: url={:?}", url),
            AppEvent::InvalidValidity => write!(f, "Invalid validity period"),
            AppEvent::Shortened {
                long_url,
                shortcode,
                validity_minutes,
            } => write!(
                f,
                "URL shortened: long_url={:?} shortcode={:?} validity={}",
                long_url, shortcode, validity_minutes
            ),
            AppEvent::Accessed {
                shortcode,
                long_url,
                access_time,
            } => write!(
                f,
                "URL accessed: shortcode={:?} long_url={:?} access_time={}",
                shortcode,
                long_url,
                access_time.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            AppEvent::ExpiredAccess { shortcode } => {
                write!(f, "Expired URL accessed: shortcode={:?}", shortcode)
            }
        }
    }
}

/// Receiver of session events; nothing it returns is observed.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    fn record(&self, event: &AppEvent);
}

/// Writes every event through the `log` facade at the event's level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn record(&self, event: &AppEvent) {
        log!(event.level(), "{}", event);
    }
}
