// src/navigation.rs - Hand-off of redirect targets
use log::debug;

/// Opens a target URL in a new browsing context. Success is never reported back.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str);
}

/// Navigator for the HTTP surface, where the client follows the redirect response
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientNavigator;

impl Navigator for ClientNavigator {
    fn open(&self, url: &str) {
        debug!("Handing {} to the client for navigation", url);
    }
}
