// src/models/shortened_url.rs - Committed registry records
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Represents a shortened URL committed to the session registry
///
/// Click data is only reachable through [`ShortenedRecord::with_click`], which
/// keeps `click_count` equal to the length of `click_timestamps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedRecord {
    long_url: String,
    shortcode: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    click_count: u64,
    click_timestamps: Vec<DateTime<Utc>>,
}

impl ShortenedRecord {
    pub fn new(
        long_url: String,
        shortcode: String,
        created_at: DateTime<Utc>,
        validity_minutes: i64,
    ) -> Self {
        Self {
            long_url,
            shortcode,
            created_at,
            expires_at: expiry_after(created_at, validity_minutes),
            click_count: 0,
            click_timestamps: Vec::new(),
        }
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn shortcode(&self) -> &str {
        &self.shortcode
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn click_count(&self) -> u64 {
        self.click_count
    }

    pub fn click_timestamps(&self) -> &[DateTime<Utc>] {
        &self.click_timestamps
    }

    /// Checks if the record is still usable at `now`
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Returns a copy with one more click recorded at `at`
    pub fn with_click(&self, at: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.click_count += 1;
        next.click_timestamps.push(at);
        next
    }
}

// Saturates at the latest representable instant for absurd validity periods.
fn expiry_after(created_at: DateTime<Utc>, validity_minutes: i64) -> DateTime<Utc> {
    TimeDelta::try_minutes(validity_minutes)
        .and_then(|validity| created_at.checked_add_signed(validity))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

// DTO for the statistics list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrlResponseDto {
    pub long_url: String,
    pub shortcode: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
    pub click_timestamps: Vec<DateTime<Utc>>,
}

impl ShortenedUrlResponseDto {
    pub fn from_record(record: &ShortenedRecord, public_base_url: &str) -> Self {
        ShortenedUrlResponseDto {
            long_url: record.long_url.clone(),
            shortcode: record.shortcode.clone(),
            short_url: display_link(public_base_url, &record.shortcode),
            created_at: record.created_at,
            expires_at: record.expires_at,
            click_count: record.click_count,
            click_timestamps: record.click_timestamps.clone(),
        }
    }
}

/// Builds the display-only link for a shortcode, escaped as a single path segment
pub fn display_link(public_base_url: &str, shortcode: &str) -> String {
    format!(
        "{}/{}",
        public_base_url.trim_end_matches('/'),
        urlencoding::encode(shortcode)
    )
}
