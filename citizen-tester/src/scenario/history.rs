use super::{NavScenario, ScenarioCtx, open, settle};
use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

pub struct History;

#[async_trait::async_trait]
impl NavScenario for History {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "navigate(p) then navigate(q) then back lands on p"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        open(driver, ctx, "/dashboard").await?;

        ctx.bridge.click_testid("nav-my-reports").await?;
        settle().await;
        let state = ctx.bridge.state().await?;
        ensure!(state.page == "my-reports", "expected my-reports, got {}", state.page);
        ensure!(
            state.path == "/track-my-reports",
            "expected /track-my-reports, got {}",
            state.path
        );

        ctx.bridge.click_testid("nav-rewards").await?;
        settle().await;
        let state = ctx.bridge.state().await?;
        ensure!(state.page == "rewards", "expected rewards, got {}", state.page);

        ctx.bridge.go_back().await?;
        settle().await;
        let state = ctx.bridge.state().await?;
        ensure!(
            state.page == "my-reports" && state.path == "/track-my-reports",
            "back should land on my-reports, got page={} path={}",
            state.page,
            state.path
        );
        Ok(())
    }
}
