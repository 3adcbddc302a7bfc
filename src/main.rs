use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sarvam_tl::cli::commands::{chat, configure, key, translate};
use sarvam_tl::cli::exit::exit_code;
use sarvam_tl::cli::{Args, Command};
use sarvam_tl::translation::{print_languages, validate_source, validate_target};
use sarvam_tl::ui::print_error;

const LOG_ENV: &str = "STL_LOG";

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = validate_languages(&args) {
        print_error(&format!("{e:#}"));
        std::process::exit(exitcode::USAGE);
    }

    if let Err(e) = run(args).await {
        print_error(&format!("{e:#}"));
        std::process::exit(exit_code(&e));
    }
}

// Logs go to stderr so translations on stdout stay pipeable.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn validate_languages(args: &Args) -> Result<()> {
    let (from, to) = match &args.command {
        Some(Command::Chat { from, to }) => (from, to),
        None => (&args.from, &args.to),
        Some(_) => return Ok(()),
    };

    if let Some(lang) = from {
        validate_source(lang)?;
    }
    if let Some(lang) = to {
        validate_target(lang)?;
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Key { key, show }) => {
            key::run_key(key, show)?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat { from, to }) => {
            chat::run_chat(chat::ChatOptions { from, to }).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
