//! Wiring & DI. Entry point: bootstrap adapters, inject into the service, report.
//! No business logic here; the workflow lives in PortfolioService.

use clap::Parser;
use dotenv::dotenv;
use gh_portfolio::adapters::ai::{MockGeneratorAdapter, OpenAiAdapter};
use gh_portfolio::adapters::deploy::VercelDeployer;
use gh_portfolio::adapters::github::GithubProfileAdapter;
use gh_portfolio::adapters::ui::progress::StepSpinner;
use gh_portfolio::adapters::ui::report::{render_error, render_outcome};
use gh_portfolio::adapters::ui::tui::TuiInputPort;
use gh_portfolio::domain::{DomainError, Username};
use gh_portfolio::ports::{DeployPort, GeneratorPort, InputPort, ProfilePort};
use gh_portfolio::shared::config::AppConfig;
use gh_portfolio::usecases::PortfolioService;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build a portfolio page from a GitHub profile and deploy it with Vercel.
#[derive(Parser, Debug)]
#[command(name = "gh-portfolio", version, about)]
struct Cli {
    /// GitHub username (prompted for when omitted)
    username: Option<String>,

    /// Generate the page locally without calling the language model
    #[arg(long)]
    mock_ai: bool,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

// Current-thread runtime: every step is awaited in order, nothing runs alongside.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    if !cli.no_banner {
        gh_portfolio::adapters::ui::init_ui();
    }

    let cfg = AppConfig::load()?;

    let username = match cli.username.as_deref() {
        Some(raw) => Username::parse(raw)?,
        None => TuiInputPort::new().ask_username()?,
    };

    let Some(vercel_token) = cfg.vercel_token() else {
        anyhow::bail!("Set GH_PORTFOLIO_VERCEL_TOKEN (or VERCEL_TOKEN) in env or .env");
    };

    // --- Adapters ---
    let profiles: Arc<dyn ProfilePort> = Arc::new(GithubProfileAdapter::new(
        cfg.github_api_url_or_default(),
        cfg.github_token.clone(),
    ));

    let generator: Arc<dyn GeneratorPort> = if cli.mock_ai {
        warn!("--mock-ai set, page will not come from a language model");
        Arc::new(MockGeneratorAdapter::new())
    } else {
        let Some(api_key) = cfg.ai_api_key() else {
            anyhow::bail!(
                "Set GH_PORTFOLIO_AI_API_KEY (or OPENAI_API_KEY), or pass --mock-ai to run offline"
            );
        };
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "AI generation enabled with OpenAI adapter"
        );
        Arc::new(OpenAiAdapter::new(
            cfg.ai_api_url_or_default(),
            api_key,
            cfg.ai_model_or_default(),
            cfg.ai_temperature_or_default(),
            cfg.ai_max_tokens_or_default(),
        ))
    };

    let deployer: Arc<dyn DeployPort> = Arc::new(VercelDeployer::new(
        cfg.vercel_bin_or_default(),
        vercel_token,
    ));

    let service = PortfolioService::new(profiles, generator, deployer);

    // --- Run ---
    let spinner = StepSpinner::new();
    let result = service
        .create_portfolio_with(&username, |step| spinner.step(step))
        .await;
    spinner.finish();

    match result {
        Ok(outcome) => {
            print!("{}", render_outcome(&outcome));
            Ok(if outcome.is_live() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(e @ DomainError::ProfileStatus(_)) => {
            print!("{}", render_error(&e));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
