use super::{NavScenario, ScenarioCtx, open, settle};
use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

/// Path ↔ page table from the URL surface, plus the unknown-path fallback.
const CANONICAL: [(&str, &str); 7] = [
    ("/dashboard", "dashboard"),
    ("/report-new-issue", "report-issue"),
    ("/track-my-reports", "my-reports"),
    ("/community-leaderboard", "leaderboard"),
    ("/rewards-and-events", "rewards"),
    ("/emergency-sos", "sos"),
    ("/feedback-center", "feedback"),
];

pub struct Paths;

#[async_trait::async_trait]
impl NavScenario for Paths {
    fn name(&self) -> &'static str {
        "paths"
    }

    fn description(&self) -> &'static str {
        "every canonical path resolves to its page; unknown paths resolve to dashboard"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        for (path, page) in CANONICAL {
            open(driver, ctx, path).await?;
            settle().await;
            let state = ctx.bridge.state().await?;
            ensure!(
                state.page == page,
                "{path} should resolve to {page}, got {}",
                state.page
            );
            ensure!(
                state.path == path,
                "{path} should be left in the address bar, got {}",
                state.path
            );
        }

        open(driver, ctx, "/definitely-not-a-page").await?;
        settle().await;
        let state = ctx.bridge.state().await?;
        ensure!(
            state.page == "dashboard",
            "unknown paths should fall back to dashboard, got {}",
            state.page
        );
        ensure!(
            state.path == "/definitely-not-a-page",
            "the unknown path should not be rewritten, got {}",
            state.path
        );
        Ok(())
    }
}
