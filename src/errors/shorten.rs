use thiserror::Error;

/// User-visible failures of the shortening session.
///
/// The `Display` output is exactly the message placed in the session's
/// error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    /// A pending long URL could not be parsed
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// A pending validity period was below one minute
    #[error("Validity period must be at least 1 minute")]
    InvalidValidity,

    /// The redirected shortcode is past its expiry time
    #[error("This URL has expired")]
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_banner_text() {
        assert_eq!(
            ShortenError::InvalidUrl("not-a-url".into()).to_string(),
            "Invalid URL format: not-a-url"
        );
        assert_eq!(
            ShortenError::InvalidValidity.to_string(),
            "Validity period must be at least 1 minute"
        );
        assert_eq!(ShortenError::Expired.to_string(), "This URL has expired");
    }

    #[test]
    fn invalid_url_keeps_empty_input_in_message() {
        assert_eq!(
            ShortenError::InvalidUrl(String::new()).to_string(),
            "Invalid URL format: "
        );
    }
}
