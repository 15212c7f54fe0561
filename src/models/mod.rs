mod pending_input;
mod shortened_url;

pub use pending_input::{InputEdit, PendingInput};
pub use shortened_url::{display_link, ShortenedRecord, ShortenedUrlResponseDto};
