//! Blocking browser dialogs (`window.confirm`, `window.alert`).

/// The two prompts the handlers need. Both block the calling handler until the
/// user answers.
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// [`Dialogs`] backed by the page's `window`.
///
/// Outside the browser there is nobody to ask: `confirm` answers "no" and
/// `alert` only logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!("No dialog available, declining: {}", message);
            false
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!("Alert: {}", message);
        }
    }
}
