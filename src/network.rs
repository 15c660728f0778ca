//! Network constants and origin lookup.

use std::time::Duration;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "REPOWIKI_API_BASE_URL";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Origin of the current page, used to resolve relative URLs in the browser.
#[cfg(target_arch = "wasm32")]
pub fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Native targets have no page to resolve against.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_origin() -> Option<String> {
    None
}
