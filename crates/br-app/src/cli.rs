use std::path::PathBuf;

use clap::Parser;

/// brailline — imprimante et lecteur Braille 6 points en texte.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Texte à imprimer en Braille (lettres a–z et espace).
    #[arg(long)]
    pub text: Option<String>,

    /// Fichier de lignes scannées à décoder (blocs de 3 rangées).
    #[arg(long)]
    pub decode: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Nombre maximal de caractères par ligne.
    #[arg(long)]
    pub line_length: Option<usize>,

    /// Colonnes vides entre deux cellules.
    #[arg(long)]
    pub spacing: Option<usize>,

    /// Symbole d'un point levé.
    #[arg(long)]
    pub dot: Option<char>,

    /// Symbole d'un point plat.
    #[arg(long)]
    pub space: Option<char>,

    /// Imprimer le texte sur plusieurs lignes au lieu de tronquer.
    #[arg(long, default_value_t = false)]
    pub wrap: bool,

    /// Afficher aussi le texte en caractères Unicode Braille (U+2800). Avec --text uniquement.
    #[arg(long, default_value_t = false)]
    pub unicode: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that exactly one of `--text` / `--decode` is provided.
    ///
    /// # Errors
    /// Returns an error if neither or both are specified, or if `--unicode`
    /// is combined with `--decode`.
    pub fn validate_input(&self) -> anyhow::Result<()> {
        if self.unicode && self.decode.is_some() {
            anyhow::bail!("--unicode ne s'applique qu'à --text.");
        }
        match (self.text.is_some(), self.decode.is_some()) {
            (false, false) => {
                anyhow::bail!("Aucune entrée spécifiée. Utilisez --text ou --decode.")
            }
            (true, true) => {
                anyhow::bail!("Une seule entrée à la fois. Spécifiez --text OU --decode.")
            }
            _ => Ok(()),
        }
    }

    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut br_core::BrailleConfig) {
        if let Some(v) = self.line_length {
            config.line_length = v;
        }
        if let Some(v) = self.spacing {
            config.spacing = v;
        }
        if let Some(v) = self.dot {
            config.dot_symbol = v;
        }
        if let Some(v) = self.space {
            config.space_symbol = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_input_is_required() {
        let none = Cli::parse_from(["brailline"]);
        assert!(none.validate_input().is_err());
        let both = Cli::parse_from(["brailline", "--text", "a", "--decode", "scan.txt"]);
        assert!(both.validate_input().is_err());
        let text = Cli::parse_from(["brailline", "--text", "abc"]);
        assert!(text.validate_input().is_ok());
    }

    #[test]
    fn unicode_requires_text_input() {
        let decode = Cli::parse_from(["brailline", "--decode", "scan.txt", "--unicode"]);
        assert!(decode.validate_input().is_err());
        let text = Cli::parse_from(["brailline", "--text", "abc", "--unicode"]);
        assert!(text.validate_input().is_ok());
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from(["brailline", "--text", "a", "--spacing", "1", "--dot", "#"]);
        let mut config = br_core::BrailleConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.spacing, 1);
        assert_eq!(config.dot_symbol, '#');
        assert_eq!(config.line_length, 12);
    }
}
