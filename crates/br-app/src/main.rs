use std::io;

use anyhow::Result;
use br_render::{LineSink, WriterSink};
use clap::Parser;

pub mod cli;
pub mod commands;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider l'entrée
    cli.validate_input()?;

    // 4. Charger la config et appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    // 5. Imprimer ou décoder
    if let Some(ref text) = cli.text {
        let stdout = io::stdout();
        let mut sink = WriterSink::new(stdout.lock());
        commands::print_text(text, &config, cli.wrap, &mut sink)?;
        if cli.unicode {
            sink.emit_line(&commands::unicode_line(text))?;
        }
    } else if let Some(ref path) = cli.decode {
        let lines = commands::decode_file(path, &config)?;
        commands::emit_stdout(&lines)?;
    }

    Ok(())
}

/// Charge --config si le fichier existe, sinon les valeurs par défaut.
fn resolve_config(cli: &cli::Cli) -> Result<br_core::BrailleConfig> {
    if cli.config.exists() {
        br_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(br_core::BrailleConfig::default())
    }
}
