use super::{NavScenario, ScenarioCtx, expect_state, open, settle};
use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

pub struct Tabs;

#[async_trait::async_trait]
impl NavScenario for Tabs {
    fn name(&self) -> &'static str {
        "tabs"
    }

    fn description(&self) -> &'static str {
        "unknown tab values rewrite in place; a tab switch pushes exactly one entry"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        // Unrecognized value: default activated, URL rewritten with
        // replaceState, no history entry added.
        open(driver, ctx, "/community-leaderboard?period=yearly").await?;
        let after_load = ctx.bridge.history_length().await?;
        expect_state(ctx, "leaderboard", "/community-leaderboard", "?period=monthly").await?;
        ensure!(
            ctx.bridge.history_length().await? == after_load,
            "canonicalizing the default must not create a history entry"
        );

        // User-initiated switch: exactly one new entry.
        ctx.bridge.click_testid("tab-weekly").await?;
        settle().await;
        expect_state(ctx, "leaderboard", "/community-leaderboard", "?period=weekly").await?;
        ensure!(
            ctx.bridge.history_length().await? == after_load + 1,
            "a tab switch must push exactly one history entry"
        );

        // Back undoes the switch without changing the page.
        ctx.bridge.go_back().await?;
        settle().await;
        expect_state(ctx, "leaderboard", "/community-leaderboard", "?period=monthly").await?;

        // The same discipline holds on the other three tab-bearing pages.
        for (path_and_query, path, page, canonical) in [
            (
                "/track-my-reports?tab=everything",
                "/track-my-reports",
                "my-reports",
                "?tab=my-reports",
            ),
            (
                "/rewards-and-events?section=bogus",
                "/rewards-and-events",
                "rewards",
                "?section=rewards",
            ),
            (
                "/emergency-sos?type=manual",
                "/emergency-sos",
                "sos",
                "?type=instant",
            ),
        ] {
            open(driver, ctx, path_and_query).await?;
            expect_state(ctx, page, path, canonical).await?;
        }
        Ok(())
    }
}
