use rand::{rng, Rng};

use super::base36::encode_fraction;

/// Default number of characters in a generated shortcode
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Source of generated shortcodes.
#[cfg_attr(test, mockall::automock)]
pub trait ShortcodeGenerator: Send + Sync {
    fn random_code(&self, length: usize) -> String;
}

/// Draws a random fraction and expands it into base-36 digits.
///
/// Codes are lowercase alphanumeric and are not checked for collisions.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomShortcodeGenerator;

impl ShortcodeGenerator for RandomShortcodeGenerator {
    fn random_code(&self, length: usize) -> String {
        let fraction: f64 = rng().random();
        encode_fraction(fraction, length)
    }
}

/// Uses the custom code when one was typed, otherwise asks the generator.
pub fn generate(custom_code: &str, generator: &dyn ShortcodeGenerator, length: usize) -> String {
    if custom_code.is_empty() {
        generator.random_code(length)
    } else {
        custom_code.to_string()
    }
}
