pub mod base36;
pub mod id_generator;

pub use id_generator::{generate, RandomShortcodeGenerator, ShortcodeGenerator, DEFAULT_CODE_LENGTH};
