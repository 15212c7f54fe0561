use url::Url;

use crate::errors::ShortenError;
use crate::models::PendingInput;

/// Shortest accepted validity period, in minutes
pub const MIN_VALIDITY_MINUTES: i64 = 1;

/// True iff the string parses as an absolute URL
pub fn is_valid_url(url_str: &str) -> bool {
    Url::parse(url_str).is_ok()
}

pub fn is_valid_validity(minutes: i64) -> bool {
    minutes >= MIN_VALIDITY_MINUTES
}

/// Validates a batch of pending inputs in order, stopping at the first failure.
///
/// Within one input the URL is checked before the validity period.
pub fn validate_batch(inputs: &[PendingInput]) -> Result<(), ShortenError> {
    for input in inputs {
        if !is_valid_url(&input.long_url) {
            return Err(ShortenError::InvalidUrl(input.long_url.clone()));
        }
        if !is_valid_validity(input.validity_minutes) {
            return Err(ShortenError::InvalidValidity);
        }
    }
    Ok(())
}
