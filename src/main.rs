mod app;
mod catalog;
mod cli;
mod client;
mod config;
mod consts;
mod error;
mod output;
mod prompt;
mod session;
mod utils;

use clap::Parser;

use app::{CommandContext, handle_explain, handle_list, handle_surprise, run_interactive};
use cli::{Action, Cli};
use client::{CompletionClient, OpenAiBackend};
use config::Config;
use error::AppError;
use prompt::GenerationParams;
use utils::{debug_log, set_debug};

fn run(cli: Cli, config: &Config) -> Result<(), AppError> {
    let ctx = CommandContext {
        json: cli.json,
        use_color: cli.use_color(),
    };
    let action = Action::from(cli.command);

    if !action.needs_client() {
        handle_list(&ctx);
        return Ok(());
    }

    // The key must be present before any client exists
    let api_key = config.api_key_from_env()?;
    let params = GenerationParams::with_model(cli.model.as_deref().unwrap_or(config.model()));
    let timeout = config.timeout();
    debug_log(&format!(
        "endpoint {}, model {}, timeout {}s",
        config.endpoint(),
        params.model,
        timeout.as_secs()
    ));
    let backend = OpenAiBackend::new(config.endpoint(), api_key, timeout);
    let client = CompletionClient::new(backend, params);
    let mut rng = rand::rng();

    match action {
        Action::Explain { name, pick } => handle_explain(&client, &name, pick.as_deref(), &ctx)?,
        Action::Surprise => handle_surprise(&client, &mut rng, &ctx),
        Action::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(
                &client,
                &mut stdin.lock(),
                &mut stdout.lock(),
                &mut rng,
                ctx.use_color,
            )?;
        }
        Action::List => unreachable!(),
    }
    Ok(())
}

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = run(cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
