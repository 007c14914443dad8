mod browser;
mod scenario;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, CitizenBridge, new_session};
use scenario::{ScenarioCtx, get_scenario, list_scenarios};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "citizen-tester", version = "0.1.0")]
#[command(about = "Automated QA for CitizenConnect - navigation and tab-sync behavior in real browsers")]
struct Args {
    /// Scenarios to run (comma-separated)
    #[arg(long, default_value = "paths,history,tabs,journey")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Base URL of a running build of the app
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Browsers to run (chrome,edge,firefox,safari)
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ScenarioOutcome {
    browser: String,
    scenario: String,
    passed: bool,
    duration_ms: u128,
    message: Option<String>,
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_browsers(raw: &str) -> Result<Vec<BrowserKind>> {
    split_csv(raw)
        .iter()
        .map(|name| {
            BrowserKind::from_str(name, true)
                .map_err(|err| anyhow::anyhow!("unknown browser `{name}`: {err}"))
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        println!("Available scenarios:");
        for (name, description) in list_scenarios() {
            println!("  {name:<10} {description}");
        }
        return Ok(());
    }

    let scenario_names = split_csv(&args.scenarios);
    for name in &scenario_names {
        if get_scenario(name).is_none() {
            anyhow::bail!("unknown scenario `{name}` (try --list-scenarios)");
        }
    }
    let browsers = parse_browsers(&args.browsers)?;

    let cfg = BrowserConfig {
        headless: args.headless.is_headless(),
        remote_hub: args.hub.clone(),
        ..BrowserConfig::default()
    };

    let mut outcomes = Vec::new();
    for kind in browsers {
        let driver = new_session(kind, &cfg)
            .await
            .with_context(|| format!("starting {kind:?} session"))?;
        let ctx = ScenarioCtx {
            base_url: args.base_url.clone(),
            bridge: CitizenBridge::new(&driver),
            verbose: args.verbose,
        };

        for name in &scenario_names {
            let scenario = get_scenario(name).expect("validated above");
            let started = Instant::now();
            let result = scenario.run(&driver, &ctx).await;
            let outcome = ScenarioOutcome {
                browser: format!("{kind:?}").to_lowercase(),
                scenario: name.clone(),
                passed: result.is_ok(),
                duration_ms: started.elapsed().as_millis(),
                message: result.err().map(|err| format!("{err:#}")),
            };
            print_progress(&outcome);
            outcomes.push(outcome);
        }

        driver.quit().await?;
    }

    render_report(&args, &outcomes)?;

    if outcomes.iter().any(|outcome| !outcome.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn print_progress(outcome: &ScenarioOutcome) {
    let status = if outcome.passed {
        "PASS".green()
    } else {
        "FAIL".red()
    };
    println!(
        "[{status}] {}/{} ({} ms)",
        outcome.browser, outcome.scenario, outcome.duration_ms
    );
    if let Some(message) = &outcome.message {
        println!("       {}", message.red());
    }
}

fn render_report(args: &Args, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(stdout()),
    };

    match args.report.as_str() {
        "json" => {
            let report = serde_json::json!({
                "generated_at": chrono::Local::now().to_rfc3339(),
                "base_url": args.base_url,
                "outcomes": outcomes,
            });
            writeln!(sink, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        _ => {
            let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
            writeln!(sink)?;
            writeln!(sink, "{} scenarios, {} passed", outcomes.len(), passed)?;
        }
    }
    Ok(())
}
