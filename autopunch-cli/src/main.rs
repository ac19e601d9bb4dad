use anyhow::Context;
use clap::{Parser, ValueEnum};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use autopunch::{
    jibble, run_worker, Browser, Config, JibbleClock, Scheduler, Session, SessionOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BrowserArg {
    Chrome,
    Firefox,
}

impl From<BrowserArg> for Browser {
    fn from(arg: BrowserArg) -> Self {
        match arg {
            BrowserArg::Chrome => Browser::Chrome,
            BrowserArg::Firefox => Browser::Firefox,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "autopunch")]
#[command(about = "Records Jibble clock-in/out entries on a configured schedule")]
struct Args {
    /// Browser to be used
    #[arg(short, long, value_enum, default_value_t = BrowserArg::Firefox)]
    browser: BrowserArg,

    /// Path to the browser executable
    #[arg(short = 'p', long)]
    browser_path: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "autopunch.json")]
    config: String,

    /// WebDriver endpoint (a running geckodriver/chromedriver)
    #[arg(long, default_value = "http://localhost:4444")]
    webdriver_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("autopunch v{}", env!("CARGO_PKG_VERSION"));

    // Configuration problems abort before any browser is launched.
    let config = Config::load(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config))?;

    let session = Session::connect(&SessionOptions {
        webdriver_url: args.webdriver_url,
        browser: args.browser.into(),
        browser_path: args.browser_path,
    })
    .await
    .context("connecting to the webdriver endpoint")?;

    let clock = JibbleClock::new(session);
    clock.open().await.context("opening the Jibble app")?;
    clock.login(&config.profile).await.context("logging in")?;

    // The work start is recorded right away; everything else is timer-driven.
    clock
        .record_entry(config.schedule.base.start)
        .await
        .context("recording the work-start entry")?;

    let mut scheduler = Scheduler::new();
    scheduler.schedule_remaining(&config.schedule);
    info!(
        "{} entries scheduled against {}",
        scheduler.len(),
        jibble::APP_URL
    );

    let (tx, rx) = mpsc::channel(16);
    let worker = tokio::spawn(run_worker(clock, rx));
    scheduler.run(tx).await;

    // Channel closed above, so the worker loop ends once its queue drains.
    let clock = worker.await.context("worker task failed")?;
    clock.close().await.context("closing the browser session")?;

    info!("all entries recorded, exiting");
    Ok(())
}
