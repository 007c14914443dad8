use crate::app::page::Page;
use crate::app::state::AppState;
use crate::dom;
use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Sticky: evaluated once at startup, before any tab-sync rewrite can
/// strip `test=1` from the query string.
static TEST_MODE: Lazy<bool> = Lazy::new(|| {
    dom::current_search().is_some_and(|search| search.contains("test=1"))
});

#[derive(Serialize)]
struct BridgeState {
    page: &'static str,
    path: String,
    search: String,
}

fn bridge_state(page: Page) -> BridgeState {
    BridgeState {
        page: page.id(),
        path: dom::current_pathname().unwrap_or_default(),
        search: dom::current_search().unwrap_or_default(),
    }
}

/// Expose `window.__citizenTest` for the WebDriver harness when the app
/// was opened with `?test=1`. `state()` returns the current page id plus
/// the live pathname and query string as a JSON string.
#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    use_effect_with(*app_state.page, move |current| {
        if !*TEST_MODE {
            return Box::new(|| {}) as Box<dyn FnOnce()>;
        }
        let current = *current;
        let state_fn = Closure::<dyn FnMut() -> JsValue>::new(move || {
            serde_json::to_string(&bridge_state(current))
                .map_or(JsValue::NULL, |json| JsValue::from_str(&json))
        });
        if let Some(win) = dom::window() {
            let bridge = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&bridge, &JsValue::from_str("state"), state_fn.as_ref());
            let _ = js_sys::Reflect::set(&win, &JsValue::from_str("__citizenTest"), &bridge);
        }
        Box::new(move || drop(state_fn)) as Box<dyn FnOnce()>
    });
}
