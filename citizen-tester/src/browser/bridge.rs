use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thirtyfour::prelude::*;

/// Snapshot returned by `window.__citizenTest.state()`.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeState {
    pub page: String,
    pub path: String,
    pub search: String,
}

#[derive(Debug, Clone)]
pub struct CitizenBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> CitizenBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__citizenTest", vec![])
            .await?;
        let ok = result.json().as_bool().unwrap_or(false);
        if !ok {
            bail!("__citizenTest is not available. Did you pass ?test=1 to the app?");
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<BridgeState> {
        let result = self
            .driver
            .execute("return window.__citizenTest.state()", vec![])
            .await?;
        let raw = result
            .json()
            .as_str()
            .context("bridge state() should return a JSON string")?
            .to_string();
        serde_json::from_str(&raw).context("parsing BridgeState")
    }

    pub async fn history_length(&self) -> Result<u64> {
        let result = self
            .driver
            .execute("return window.history.length", vec![])
            .await?;
        result
            .json()
            .as_u64()
            .context("history.length should be a number")
    }

    pub async fn click_testid(&self, test_id: &str) -> Result<()> {
        let selector = format!("[data-testid='{test_id}']");
        let element = self
            .driver
            .find(By::Css(selector.as_str()))
            .await
            .with_context(|| format!("element [data-testid='{test_id}'] not found"))?;
        element.click().await?;
        Ok(())
    }

    pub async fn go_back(&self) -> Result<()> {
        self.driver.back().await?;
        Ok(())
    }
}
