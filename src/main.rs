// ABOUTME: Command-line entry point for the panel-fetch client
// ABOUTME: Collects job details, confirms, and drives the lifecycle controller

use anyhow::Result;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing_subscriber::EnvFilter;

use panel_fetch::{ApiClient, JobController, JobRequest, State, TermView};

#[derive(Parser)]
#[command(
    name = "panel-fetch",
    version,
    about = "Submit a media fetch job to a download panel and follow it to completion"
)]
struct Cli {
    /// Video URL to fetch. Prompted for interactively when omitted.
    url: Option<String>,

    /// Output format requested from the panel.
    #[arg(short, long, default_value = "mp3", value_parser = ["mp3", "mp4"])]
    format: String,

    /// Optional title override for the downloaded file.
    #[arg(short, long, default_value = "")]
    title: String,

    /// Base URL of the panel server.
    #[arg(short, long, default_value = "http://127.0.0.1:8090")]
    server: String,

    /// Skip the confirmation prompt and submit immediately.
    #[arg(short = 'y', long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(cli.server.clone())?;
    let mut controller = JobController::new(api, TermView::new());
    let theme = ColorfulTheme::default();

    let mut url = cli.url.clone();
    let mut failed = false;

    loop {
        let target = match url.take() {
            Some(target) => target,
            None => Input::with_theme(&theme)
                .with_prompt("Video URL")
                .interact_text()?,
        };
        let request = JobRequest::new(&target, &cli.format, &cli.title);

        controller.start();
        let confirmed = cli.yes
            || Confirm::with_theme(&theme)
                .with_prompt(format!("Fetch {} as {}?", request.url, request.format))
                .default(true)
                .interact()?;
        if !confirmed {
            controller.decline();
            break;
        }

        match controller.confirm(request).await {
            Ok(()) => {
                controller.run_poll_loop().await;
                if controller.state() == State::Errored {
                    failed = true;
                }
            }
            // Already surfaced to the user through the view.
            Err(_) => failed = true,
        }

        if cli.yes {
            break;
        }
        let again = Confirm::with_theme(&theme)
            .with_prompt("Start another job?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
