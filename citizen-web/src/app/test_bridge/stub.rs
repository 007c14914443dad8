use crate::app::state::AppState;
use yew::prelude::*;

/// No-op off the browser; the bridge only exists for WebDriver runs.
#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let _ = app_state;
}
