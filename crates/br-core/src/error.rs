use thiserror::Error;

/// Errors originating from the core module.
///
/// Only configuration and I/O produce these. The encode/decode paths
/// report malformed input through `Option` and default symbols instead.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Cell dimensions that cannot hold a single dot.
    #[error("Dimensions de cellule invalides : {height}×{width}")]
    InvalidDimensions {
        /// Height value.
        height: usize,
        /// Width value.
        width: usize,
    },

    /// Dot and space symbols are the same character.
    #[error("Symbole ambigu : '{symbol}' utilisé pour les points et les espaces")]
    AmbiguousSymbols {
        /// The shared symbol.
        symbol: char,
    },
}
