use std::time::Duration;

use agecalc::report;
use agecalc::{Snapshot, Ticker};
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};

const USAGE: &str = "usage: agecalc <YYYY-MM-DD> [--json] [--live]";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut json = false;
    let mut live = false;
    let mut date_arg = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--live" => live = true,
            _ if date_arg.is_none() => date_arg = Some(arg),
            _ => bail!("unexpected argument: {arg}\n{USAGE}"),
        }
    }

    let date_arg = date_arg.context(USAGE)?;
    let birth = NaiveDate::parse_from_str(&date_arg, "%Y-%m-%d")
        .with_context(|| format!("invalid birth date {date_arg:?}, expected YYYY-MM-DD"))?;

    if live {
        // Re-render once per second until interrupted; the ticker owns the
        // recurring task and is torn down on the way out.
        let ticker = Ticker::spawn(birth, Duration::from_secs(1), |snapshot| {
            println!("{}", report::render(&snapshot));
        });
        tokio::signal::ctrl_c()
            .await
            .context("failed to listen for ctrl-c")?;
        ticker.stop().await;
        return Ok(());
    }

    let snapshot = Snapshot::compute(birth, Local::now().naive_local())
        .context("could not compute age")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", report::render(&snapshot));
    }

    Ok(())
}
