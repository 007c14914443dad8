use super::harness::{
    click_testid, go_back, history_length, pathname, render_app_at, search, settle,
};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
async fn unknown_tab_value_is_rewritten_in_place() {
    render_app_at("/community-leaderboard?period=yearly");
    let before = history_length();
    settle().await;

    // Default resolved and canonicalized with replaceState: same entry.
    assert_eq!(search(), "?period=monthly");
    assert_eq!(pathname(), "/community-leaderboard");
    assert_eq!(history_length(), before);
}

#[wasm_bindgen_test]
async fn tab_switch_pushes_exactly_one_entry_and_back_undoes_it() {
    render_app_at("/community-leaderboard");
    settle().await;
    assert_eq!(search(), "?period=monthly");
    let before = history_length();

    click_testid("tab-weekly");
    settle().await;
    assert_eq!(search(), "?period=weekly");
    assert_eq!(history_length(), before + 1);

    go_back();
    settle().await;
    // The query reverts; the page does not change.
    assert_eq!(search(), "?period=monthly");
    assert_eq!(pathname(), "/community-leaderboard");
}

#[wasm_bindgen_test]
async fn each_tab_page_canonicalizes_its_own_param() {
    for (url, expected) in [
        ("/track-my-reports", "?tab=my-reports"),
        ("/rewards-and-events?section=bogus", "?section=rewards"),
        ("/emergency-sos?type=manual", "?type=instant"),
    ] {
        render_app_at(url);
        settle().await;
        assert_eq!(search(), expected, "canonical query for {url}");
    }
}
