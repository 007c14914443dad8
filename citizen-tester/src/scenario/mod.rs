use crate::browser::{BridgeState, CitizenBridge};
use anyhow::{Result, ensure};
use std::time::Duration;
use thirtyfour::prelude::*;

mod history;
mod journey;
mod paths;
mod tabs;

pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub bridge: CitizenBridge<'a>,
    pub verbose: bool,
}

#[async_trait::async_trait]
pub trait NavScenario {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

pub fn get_scenario(name: &str) -> Option<Box<dyn NavScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "paths" => Some(Box::new(paths::Paths)),
        "history" => Some(Box::new(history::History)),
        "tabs" => Some(Box::new(tabs::Tabs)),
        "journey" => Some(Box::new(journey::Journey)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    [
        get_scenario("paths"),
        get_scenario("history"),
        get_scenario("tabs"),
        get_scenario("journey"),
    ]
    .into_iter()
    .flatten()
    .map(|scenario| (scenario.name(), scenario.description()))
    .collect()
}

/// Open an app URL with the test bridge enabled. `path_and_query` must be
/// absolute, e.g. `/community-leaderboard?period=bogus`.
pub(crate) async fn open(
    driver: &WebDriver,
    ctx: &ScenarioCtx<'_>,
    path_and_query: &str,
) -> Result<()> {
    let base = ctx.base_url.trim_end_matches('/');
    let separator = if path_and_query.contains('?') { "&" } else { "?" };
    let url = format!("{base}{path_and_query}{separator}test=1");
    if ctx.verbose {
        log::info!("opening {url}");
    }
    driver.goto(&url).await?;
    settle().await;
    ctx.bridge.ensure_available().await?;
    Ok(())
}

/// Give the single-threaded app a beat to run effects and history writes.
pub(crate) async fn settle() {
    tokio::time::sleep(Duration::from_millis(300)).await;
}

pub(crate) async fn expect_state(
    ctx: &ScenarioCtx<'_>,
    page: &str,
    path: &str,
    search: &str,
) -> Result<BridgeState> {
    let state = ctx.bridge.state().await?;
    ensure!(
        state.page == page && state.path == path && state.search == search,
        "expected page={page} path={path} search={search:?}, got page={} path={} search={:?}",
        state.page,
        state.path,
        state.search,
    );
    Ok(state)
}
