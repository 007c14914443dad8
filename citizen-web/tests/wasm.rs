//! Browser-only behavioral tests. Run with
//! `wasm-pack test --headless --chrome citizen-web`.
#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[path = "wasm/harness.rs"]
mod harness;
#[path = "wasm/nav_tests.rs"]
mod nav_tests;
#[path = "wasm/tab_sync_tests.rs"]
mod tab_sync_tests;
