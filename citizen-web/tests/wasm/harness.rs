use citizen_web::app::App;
use citizen_web::dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};
use yew::Renderer;

pub fn ensure_app_root() -> Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

/// Rewrite the address bar without reloading, so each test starts from a
/// known URL regardless of what the previous test pushed.
pub fn reset_url(url: &str) {
    let win = dom::window().expect("window");
    win.history()
        .expect("history")
        .replace_state_with_url(&JsValue::NULL, "", Some(url))
        .expect("replace url");
}

pub fn render_app_at(url: &str) {
    reset_url(url);
    Renderer::<App>::with_root(ensure_app_root()).render();
}

pub async fn settle() {
    // Let effects, history updates, and timers queued at 0ms run.
    let _ = dom::sleep_ms(50).await;
}

pub fn click_testid(id: &str) {
    let doc = dom::document().expect("document");
    let element: HtmlElement = doc
        .query_selector(&format!("[data-testid='{id}']"))
        .expect("query test id")
        .unwrap_or_else(|| panic!("missing element {id}"))
        .dyn_into()
        .expect("cast to HtmlElement");
    element.click();
}

pub fn pathname() -> String {
    dom::current_pathname().unwrap_or_default()
}

pub fn search() -> String {
    dom::current_search().unwrap_or_default()
}

pub fn history_length() -> u32 {
    dom::window()
        .expect("window")
        .history()
        .expect("history")
        .length()
        .expect("history length")
}

pub fn go_back() {
    dom::window()
        .expect("window")
        .history()
        .expect("history")
        .back()
        .expect("history back");
}
