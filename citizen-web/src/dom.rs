use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, UrlSearchParams, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Current `location.pathname`, e.g. `/community-leaderboard`.
#[must_use]
pub fn current_pathname() -> Option<String> {
    window().and_then(|win| win.location().pathname().ok())
}

/// Current `location.search` including the leading `?`, or an empty string.
#[must_use]
pub fn current_search() -> Option<String> {
    window().and_then(|win| win.location().search().ok())
}

/// Read a single query parameter from the current URL.
#[must_use]
pub fn query_param(name: &str) -> Option<String> {
    let search = current_search()?;
    UrlSearchParams::new_with_str(&search)
        .ok()
        .and_then(|params| params.get(name))
}

/// Viewport width in CSS pixels.
#[must_use]
pub fn viewport_width() -> Option<f64> {
    window().and_then(|win| win.inner_width().ok()).and_then(|value| value.as_f64())
}

/// Rewrite the query-string portion of the current URL, preserving the
/// path. `push` creates a history entry; otherwise the current entry is
/// replaced in place. This is the only history writer outside the router,
/// and it never touches the path segment.
///
/// # Errors
/// Returns an error when the browser history API is unavailable or rejects
/// the new URL.
pub fn rewrite_query(query: &str, push: bool) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let path = win.location().pathname()?;
    let url = format!("{path}{query}");
    let history = win.history()?;
    if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(&url))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying
/// JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}
