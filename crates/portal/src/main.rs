//! The `portal` terminal client.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use portal::core::{Page, PortalClient};
use portal::{Effect, Runner, Shell, ShellEvent};
use portal_http_backend::{HttpBackend, PortalConfigBuilder};
use tokio::io::{self, AsyncBufReadExt};
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::sleep;

#[derive(Parser, Debug)]
#[command(
    name = "portal",
    about = "Employee onboarding portal in the terminal"
)]
struct Cli {
    /// Base URL of the onboarding API.
    #[arg(long, env = "PORTAL_API_URL")]
    api_url: Option<String>,

    /// Page to open first.
    #[arg(long, default_value = "dashboard")]
    page: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = PortalConfigBuilder::new();
    if let Some(api_url) = cli.api_url {
        config = config.with_base_url(api_url);
    }
    let config = config.build();
    info!("using backend at {}", config.base_url());

    let mut shell = Shell::new(config.base_url());
    let runner = Runner::new(PortalClient::new(HttpBackend::new(config)));
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    let mut effects = shell.navigate(Page::from_id(&cli.page));

    loop {
        // Input is not read while anything is outstanding.
        let label = effects.first().map(Effect::label);
        let mut pending = spawn_effects(&runner, effects, &event_tx);
        if let Some(label) = label {
            let progress_bar = ProgressBar::new_spinner();
            progress_bar.set_style(progress_style.clone());
            progress_bar.set_message(label);

            while pending > 0 {
                progress_bar.inc(1);

                let sleep = sleep(Duration::from_millis(100));
                let event = select! {
                    event = event_rx.recv() => event,
                    _ = sleep => continue,
                };
                let Some(event) = event else {
                    break;
                };
                pending -= 1;
                shell.handle_event(event);
            }

            // Finish the progress bar before printing anything else.
            progress_bar.finish_and_clear();
        }

        println!("\n{}", shell.render());
        if shell.should_quit() {
            break;
        }

        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line().await else {
            break;
        };
        effects = shell.handle_line(&line);
        if shell.should_quit() {
            break;
        }
    }
}

fn spawn_effects(
    runner: &Runner,
    effects: Vec<Effect>,
    event_tx: &mpsc::UnboundedSender<ShellEvent>,
) -> usize {
    let pending = effects.len();
    for effect in effects {
        let runner = runner.clone();
        let event_tx = event_tx.clone();
        tokio::spawn(async move {
            event_tx.send(runner.run(effect).await).ok();
        });
    }
    pending
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
