use super::{NavScenario, ScenarioCtx, expect_state, open, settle};
use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

pub struct Journey;

#[async_trait::async_trait]
impl NavScenario for Journey {
    fn name(&self) -> &'static str {
        "journey"
    }

    fn description(&self) -> &'static str {
        "end to end: / -> leaderboard -> weekly tab -> back"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        // Start at the root: resolved page is the dashboard and the URL is
        // left untouched.
        open(driver, ctx, "/").await?;
        let state = ctx.bridge.state().await?;
        ensure!(
            state.page == "dashboard" && state.path == "/",
            "root should resolve to dashboard in place, got page={} path={}",
            state.page,
            state.path
        );

        // Navigate to the leaderboard: canonical path plus default period.
        ctx.bridge.click_testid("nav-leaderboard").await?;
        settle().await;
        expect_state(ctx, "leaderboard", "/community-leaderboard", "?period=monthly").await?;

        // Switch the period tab.
        ctx.bridge.click_testid("tab-weekly").await?;
        settle().await;
        expect_state(ctx, "leaderboard", "/community-leaderboard", "?period=weekly").await?;

        // Back: the query reverts, the page stays.
        ctx.bridge.go_back().await?;
        settle().await;
        expect_state(ctx, "leaderboard", "/community-leaderboard", "?period=monthly").await?;
        Ok(())
    }
}
