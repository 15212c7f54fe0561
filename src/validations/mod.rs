mod shortened_url;

pub use shortened_url::{is_valid_url, is_valid_validity, validate_batch, MIN_VALIDITY_MINUTES};
