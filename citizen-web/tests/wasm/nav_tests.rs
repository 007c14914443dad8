use super::harness::{click_testid, go_back, pathname, render_app_at, settle};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
async fn unknown_path_resolves_to_dashboard_without_a_rewrite() {
    render_app_at("/definitely-not-a-page");
    settle().await;
    // The page falls back silently; the address bar is left alone.
    assert_eq!(pathname(), "/definitely-not-a-page");
    let doc = citizen_web::dom::document().expect("document");
    assert!(
        doc.query_selector("[data-testid='nav-dashboard'][aria-current='page']")
            .expect("query")
            .is_some(),
        "dashboard should be the active page"
    );
}

#[wasm_bindgen_test]
async fn navigate_pushes_the_canonical_path_synchronously() {
    render_app_at("/dashboard");
    settle().await;

    click_testid("nav-leaderboard");
    // The path is reflected before any asynchronous work runs.
    assert_eq!(pathname(), "/community-leaderboard");
    settle().await;
    // The mount-time tab read then canonicalizes the default period.
    assert_eq!(super::harness::search(), "?period=monthly");
}

#[wasm_bindgen_test]
async fn back_returns_to_the_previously_visited_page() {
    render_app_at("/dashboard");
    settle().await;

    click_testid("nav-my-reports");
    settle().await;
    click_testid("nav-rewards");
    settle().await;
    assert_eq!(pathname(), "/rewards-and-events");

    go_back();
    settle().await;
    assert_eq!(pathname(), "/track-my-reports");

    let doc = citizen_web::dom::document().expect("document");
    assert!(
        doc.query_selector("[data-testid='my-reports-page']")
            .expect("query")
            .is_some(),
        "my-reports page should remount after back navigation"
    );
}
