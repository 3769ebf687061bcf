use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::{CELL_HEIGHT, CELL_WIDTH};

/// Configuration complète de l'imprimante et du lecteur Braille.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
/// `spacing` doit être identique à l'écriture et à la lecture pour
/// qu'une ligne imprimée soit relisible.
///
/// # Example
/// ```
/// use br_core::config::BrailleConfig;
/// let config = BrailleConfig::default();
/// assert_eq!(config.total_width(), Some(12 * 2 + 11 * 4));
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BrailleConfig {
    // === Police ===
    /// Hauteur d'une cellule en lignes (3 en standard).
    pub cell_height: usize,
    /// Largeur d'une cellule en colonnes (2 en standard).
    pub cell_width: usize,
    /// Symbole d'un point levé.
    pub dot_symbol: char,
    /// Symbole d'un point plat.
    pub space_symbol: char,

    // === Ligne ===
    /// Fond du buffer de ligne. `None` = `space_symbol`.
    pub background: Option<char>,
    /// Nombre maximal de caractères par ligne.
    pub line_length: usize,
    /// Colonnes vides entre deux cellules.
    pub spacing: usize,
}

impl Default for BrailleConfig {
    fn default() -> Self {
        Self {
            cell_height: CELL_HEIGHT,
            cell_width: CELL_WIDTH,
            dot_symbol: 'o',
            space_symbol: '.',
            background: None,
            line_length: 12,
            spacing: 4,
        }
    }
}

impl BrailleConfig {
    /// Clamp all numeric fields to values the printer can lay out.
    pub fn clamp_all(&mut self) {
        self.cell_height = self.cell_height.max(1);
        self.cell_width = self.cell_width.max(1);
        self.line_length = self.line_length.max(1);
        self.spacing = self.spacing.max(1);
    }

    /// Vérifie la cohérence de la configuration.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` for an empty cell,
    /// `CoreError::Config` for a zero line length or spacing, and
    /// `CoreError::AmbiguousSymbols` when dots and spaces share a symbol.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.cell_height == 0 || self.cell_width == 0 {
            return Err(CoreError::InvalidDimensions {
                height: self.cell_height,
                width: self.cell_width,
            });
        }
        if self.line_length == 0 {
            return Err(CoreError::Config("line_length doit être > 0".into()));
        }
        if self.spacing == 0 {
            return Err(CoreError::Config("spacing doit être > 0".into()));
        }
        let cells = self
            .total_width()
            .and_then(|w| w.checked_mul(self.cell_height));
        if cells.is_none() {
            return Err(CoreError::Config(format!(
                "ligne trop large : {} cellules × {} colonnes + espacement {}",
                self.line_length, self.cell_width, self.spacing
            )));
        }
        if self.dot_symbol == self.space_symbol {
            return Err(CoreError::AmbiguousSymbols {
                symbol: self.dot_symbol,
            });
        }
        if truncates_dots(self.cell_height, self.cell_width) {
            log::warn!(
                "Cellule {}×{} plus petite que 3×2 : des points seront tronqués",
                self.cell_height,
                self.cell_width
            );
        }
        Ok(())
    }

    /// Fond effectif du buffer de ligne.
    #[must_use]
    pub fn background_symbol(&self) -> char {
        self.background.unwrap_or(self.space_symbol)
    }

    /// Largeur totale d'une ligne : `n·w + (n−1)·s`. `None` en cas de débordement.
    #[must_use]
    pub fn total_width(&self) -> Option<usize> {
        total_width(self.line_length, self.cell_width, self.spacing)
    }
}

/// Largeur en colonnes d'un buffer de `line_length` cellules.
///
/// Returns `None` if the width does not fit in a `usize`.
///
/// # Example
/// ```
/// use br_core::config::total_width;
/// assert_eq!(total_width(5, 2, 1), Some(14));
/// assert_eq!(total_width(1, 2, 4), Some(2));
/// assert_eq!(total_width(2, 2, usize::MAX), None);
/// ```
#[must_use]
pub fn total_width(line_length: usize, cell_width: usize, spacing: usize) -> Option<usize> {
    let cells = line_length.checked_mul(cell_width)?;
    let gaps = line_length.saturating_sub(1).checked_mul(spacing)?;
    cells.checked_add(gaps)
}

fn truncates_dots(height: usize, width: usize) -> bool {
    height < CELL_HEIGHT || width < CELL_WIDTH
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    font: Option<FontSection>,
    line: Option<LineSection>,
}

/// Font section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct FontSection {
    cell_height: Option<usize>,
    cell_width: Option<usize>,
    dot_symbol: Option<char>,
    space_symbol: Option<char>,
}

/// Line section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct LineSection {
    background: Option<char>,
    line_length: Option<usize>,
    spacing: Option<usize>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use br_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<BrailleConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse a TOML document and merge it onto the defaults.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
pub fn parse_config(content: &str) -> Result<BrailleConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = BrailleConfig::default();

    if let Some(f) = file.font {
        if let Some(v) = f.cell_height {
            config.cell_height = v;
        }
        if let Some(v) = f.cell_width {
            config.cell_width = v;
        }
        if let Some(v) = f.dot_symbol {
            config.dot_symbol = v;
        }
        if let Some(v) = f.space_symbol {
            config.space_symbol = v;
        }
    }

    if let Some(l) = file.line {
        if let Some(v) = l.background {
            config.background = Some(v);
        }
        if let Some(v) = l.line_length {
            config.line_length = v;
        }
        if let Some(v) = l.spacing {
            config.spacing = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config("[line]\nspacing = 1\n").unwrap();
        assert_eq!(config.spacing, 1);
        assert_eq!(config.line_length, 12);
        assert_eq!(config.dot_symbol, 'o');
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), BrailleConfig::default());
    }

    #[test]
    fn zero_values_are_clamped() {
        let config = parse_config("[line]\nline_length = 0\nspacing = 0\n").unwrap();
        assert_eq!(config.line_length, 1);
        assert_eq!(config.spacing, 1);
    }

    #[test]
    fn background_defaults_to_space_symbol() {
        let mut config = BrailleConfig::default();
        assert_eq!(config.background_symbol(), '.');
        config.background = Some(' ');
        assert_eq!(config.background_symbol(), ' ');
    }

    #[test]
    fn identical_symbols_are_rejected() {
        let config = BrailleConfig {
            space_symbol: 'o',
            ..BrailleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::AmbiguousSymbols { symbol: 'o' })
        ));
    }

    #[test]
    fn zero_cell_is_rejected() {
        let config = BrailleConfig {
            cell_width: 0,
            ..BrailleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidDimensions { height: 3, width: 0 })
        ));
    }

    #[test]
    fn overflowing_line_is_rejected() {
        let wide = BrailleConfig {
            spacing: usize::MAX,
            ..BrailleConfig::default()
        };
        assert_eq!(wide.total_width(), None);
        assert!(matches!(wide.validate(), Err(CoreError::Config(_))));

        // La largeur tient, mais pas largeur × hauteur.
        let tall = BrailleConfig {
            line_length: 1,
            cell_width: usize::MAX / 2,
            ..BrailleConfig::default()
        };
        assert!(tall.total_width().is_some());
        assert!(matches!(tall.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[font]\ndot_symbol = \"#\"\nspace_symbol = \"-\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.dot_symbol, '#');
        assert_eq!(config.space_symbol, '-');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn shipped_default_file_matches_defaults() {
        let shipped = parse_config(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(shipped, BrailleConfig::default());
    }

    #[test]
    fn serialized_config_reads_back() {
        let config = BrailleConfig {
            dot_symbol: '#',
            background: Some(' '),
            spacing: 1,
            ..BrailleConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        let back: BrailleConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/brailline.toml")).is_err());
    }

    #[test]
    fn geometry_matches_formula() {
        for n in 1..20 {
            assert_eq!(total_width(n, 2, 3), Some(n * 2 + (n - 1) * 3));
        }
    }
}
