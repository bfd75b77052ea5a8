// System status display: configured vector tables, reference corpora and
// window defaults.

use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::reference::Reference;

/// Display system status to the terminal.
pub fn show(config: &Config) {
    println!("{}", "=== axidoc status ===".bold());

    println!("\nVector tables:");
    print_file("GloVe", &config.glove_vectors);
    print_file("Word2Vec", &config.word2vec_vectors);
    match config.max_vectors {
        Some(n) => println!("  Pruned to the first {n} rows"),
        None => println!("  Loading full tables"),
    }

    println!("\nReference corpora ({}):", config.data_dir.display());
    for reference in [Reference::Values, Reference::Objectivity] {
        print_file(&reference.to_string(), &reference.path_in(&config.data_dir));
    }

    println!(
        "\nDefault windows: {} tokens, shift {}",
        config.window_size, config.window_shift
    );

    if config.require_vectors().is_err() {
        println!(
            "\n{}",
            "Set AXIDOC_GLOVE_VECTORS and AXIDOC_WORD2VEC_VECTORS in .env to enable analysis."
                .yellow()
        );
    }
}

fn print_file(label: &str, path: &Path) {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => println!(
            "  {:<12} {} ({})",
            label,
            path.display(),
            format_bytes(meta.len()).green()
        ),
        _ => println!("  {:<12} {} ({})", label, path.display(), "missing".red()),
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
