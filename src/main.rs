use anyhow::Context;
use clap::Parser;
use combo_finder::core::one_shot::run_one_shot;
use combo_finder::utils::{error::ComboError, logger, validation::Validate};
use combo_finder::{CliConfig, Console, ResolvedConfig, SessionController};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // Logging is not up yet; report config problems directly.
    let resolved = match config.validate().and_then(|_| config.resolve()) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    init_logging(&resolved);
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved settings: {:?}", resolved.session);

    let outcome = match (&config.target, &config.numbers) {
        (Some(target), Some(numbers)) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_one_shot(target, numbers, &resolved.session, config.format, &mut out).map(|found| {
                if found.is_none() {
                    tracing::info!("Exit requested on the command line");
                }
            })
        }
        _ => SessionController::new(Console::stdio(), resolved.session.clone()).run(),
    };

    if let Err(e) = outcome {
        fail(e);
    }

    std::io::stdout().flush().context("flushing stdout")?;
    Ok(())
}

fn init_logging(resolved: &ResolvedConfig) {
    let directive = resolved.log_directive.as_deref();
    if resolved.log_json {
        logger::init_json_logger(resolved.verbose, directive);
    } else {
        logger::init_cli_logger(resolved.verbose, directive);
    }
}

fn fail(e: ComboError) -> ! {
    tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
