// Browser helpers. Everything that touches window/document lives here so the
// rest of the crate stays renderable off-browser.

use gloo::console::warn;
use gloo::history::{BrowserHistory, History, HistoryListener};
use web_sys::window;

use crate::config::{BODY_MODE_ATTR, PREFERS_DARK_QUERY};
use crate::theme::DisplayMode;

/// True when the host reports a dark color-scheme preference.
/// Any failure reading it counts as "no preference".
pub fn prefers_dark() -> bool {
    let Some(w) = window() else { return false; };
    match w.match_media(PREFERS_DARK_QUERY) {
        Ok(Some(mq)) => mq.matches(),
        Ok(None) => false,
        Err(e) => {
            warn!("matchMedia failed, defaulting to light:", e);
            false
        }
    }
}

pub fn current_path() -> String {
    BrowserHistory::new().location().path().to_string()
}

pub fn set_title(title: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

pub fn set_body_mode(mode: DisplayMode) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        warn!("no <body>, skipping", BODY_MODE_ATTR);
        return;
    };
    if let Err(e) = body.set_attribute(BODY_MODE_ATTR, mode.as_str()) {
        warn!("set_attribute failed:", e);
    }
}

pub fn push_path(path: &str) {
    BrowserHistory::new().push(path.to_string());
}

/// Calls `on_change` with the new path after back/forward or a push.
/// Drop the returned listener to stop listening.
pub fn listen_path<F>(on_change: F) -> HistoryListener
where
    F: Fn(String) + 'static,
{
    let history = BrowserHistory::new();
    let reader = history.clone();
    history.listen(move || on_change(reader.location().path().to_string()))
}
