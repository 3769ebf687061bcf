use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use br_braille::{BrailleDecoder, BrailleFont, BrailleReader};
use br_core::config::BrailleConfig;
use br_core::error::CoreError;
use br_core::pattern::BrailleEncoder;
use br_core::traits::Encoder;
use br_render::{LinePrinter, LineSink, WriterSink};

/// Imprime `text` en Braille sur `sink`.
///
/// Sans `wrap`, une seule ligne est émise et l'excédent est ignoré.
/// Avec `wrap`, le texte est découpé en lignes de `line_length` caractères.
///
/// # Errors
/// Returns an error if the line buffer cannot be allocated or the sink fails.
pub fn print_text<S: LineSink>(
    text: &str,
    config: &BrailleConfig,
    wrap: bool,
    sink: &mut S,
) -> Result<()> {
    let font = Arc::new(BrailleFont::from_config(config, &BrailleEncoder));
    let mut printer = LinePrinter::new(font, config.line_length, config.spacing)?
        .with_background(config.background_symbol());

    let chars: Vec<char> = text.chars().collect();
    if !wrap || chars.is_empty() {
        printer.write_string(text);
        printer.flush(sink).context("Échec d'écriture de la ligne")?;
        return Ok(());
    }

    for chunk in chars.chunks(printer.line_length()) {
        for &ch in chunk {
            printer.write_character(ch);
        }
        printer.flush(sink).context("Échec d'écriture de la ligne")?;
    }
    log::info!(
        "{} caractère(s) imprimé(s) sur {} ligne(s)",
        chars.len(),
        chars.len().div_ceil(printer.line_length())
    );
    Ok(())
}

/// Équivalent Unicode Braille (U+2800) de `text`.
#[must_use]
pub fn unicode_line(text: &str) -> String {
    text.chars()
        .map(|ch| BrailleEncoder.to_pattern(ch).to_unicode())
        .collect()
}

/// Décode un fichier de lignes scannées, une ligne de texte par bloc de 3 rangées.
///
/// Les lignes vides du fichier sont ignorées.
///
/// # Errors
/// Returns an error if the file is missing or unreadable.
pub fn decode_file(path: &Path, config: &BrailleConfig) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    Ok(decode_scan(&content, config))
}

/// Decode scan text already in memory.
#[must_use]
pub fn decode_scan(content: &str, config: &BrailleConfig) -> Vec<String> {
    let lines: Vec<&str> = content.lines().filter(|l| !l.is_empty()).collect();
    let reader = BrailleReader::new(BrailleDecoder::new(&BrailleEncoder));
    let decoded = reader.translate_page(&lines, config.dot_symbol, config.spacing);
    log::info!("{} ligne(s) Braille décodée(s)", decoded.len());
    decoded
}

/// Write decoded text lines to stdout.
///
/// # Errors
/// Returns an error if stdout cannot be written.
pub fn emit_stdout(lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut sink = WriterSink::new(stdout.lock());
    for line in lines {
        sink.emit_line(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(spacing: usize, line_length: usize) -> BrailleConfig {
        BrailleConfig {
            spacing,
            line_length,
            ..BrailleConfig::default()
        }
    }

    #[test]
    fn wrapped_text_round_trips() {
        let config = config(1, 4);
        let mut out: Vec<String> = Vec::new();
        print_text("hello world", &config, true, &mut out).unwrap();
        assert_eq!(out.len(), 9);

        let decoded = decode_scan(&out.join("\n"), &config);
        assert_eq!(decoded, vec!["hell", "o wo", "rld "]);
    }

    #[test]
    fn unwrapped_text_is_truncated() {
        let config = config(1, 4);
        let mut out: Vec<String> = Vec::new();
        print_text("hello world", &config, false, &mut out).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(decode_scan(&out.join("\n"), &config), vec!["hell"]);
    }

    #[test]
    fn blank_separator_lines_are_skipped() {
        let config = config(1, 2);
        let scan = "\no. .o\noo o.\n.. ..\n\n\no.\n..\n..\n\n";
        assert_eq!(decode_scan(scan, &config), vec!["hi", "a"]);
    }

    #[test]
    fn blank_separators_in_file_are_skipped() {
        use std::io::Write;

        let config = config(1, 2);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "o. .o\noo o.\n.. ..\n\n.o o.\noo .o\n.. ..\n").unwrap();
        assert_eq!(decode_file(file.path(), &config).unwrap(), vec!["hi", "je"]);
    }

    #[test]
    fn overflowing_spacing_is_an_error() {
        let config = config(usize::MAX, 2);
        let mut out: Vec<String> = Vec::new();
        assert!(print_text("ab", &config, false, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn unicode_line_uses_braille_block() {
        assert_eq!(unicode_line("ab c"), "\u{2801}\u{2803}\u{2800}\u{2809}");
    }

    #[test]
    fn missing_scan_file_reports_not_found() {
        let err = decode_file(Path::new("/nonexistent/scan.txt"), &BrailleConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }
}
