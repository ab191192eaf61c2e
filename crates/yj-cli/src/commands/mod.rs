pub mod cast;
pub mod delete;
pub mod history;
pub mod methods;
pub mod show;
pub mod table;

use std::path::Path;

use colored::Colorize;
use yj_core::{Hexagram, Line};
use yj_reading::{JsonFileStore, UserId};

/// Validate an optional `--user` value.
pub fn parse_user(user: Option<&str>) -> Result<Option<UserId>, String> {
    user.map(UserId::new).transpose().map_err(|e| e.to_string())
}

/// Open the reading store under `data_dir`.
pub fn open_store(data_dir: &Path) -> JsonFileStore {
    JsonFileStore::new(data_dir)
}

/// Print lines top-down, the way a hexagram is drawn.
pub fn print_lines(lines: &[Line]) {
    for line in lines.iter().rev() {
        let glyph = line.glyph();
        let glyph = if line.is_changing() {
            glyph.yellow().to_string()
        } else {
            glyph.to_string()
        };
        println!("  {}  {glyph}", line.position().to_string().dimmed());
    }
}

/// Print a hexagram heading with its trigrams.
pub fn print_hexagram_header(label: &str, hexagram: &Hexagram) {
    println!("  {} {}", format!("{label}:").dimmed(), hexagram.to_string().bold());
    println!(
        "    {} {} over {}",
        "Trigrams:".dimmed(),
        hexagram.upper,
        hexagram.lower
    );
}
