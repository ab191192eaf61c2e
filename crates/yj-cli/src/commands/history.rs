use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use yj_reading::{ReadingStore, SavedReading};

use super::{open_store, parse_user};

fn hexagram_label(number: u8) -> String {
    yj_core::by_number(number)
        .map(|h| format!("{} {}", h.symbol(), h.name))
        .unwrap_or_else(|_| number.to_string())
}

fn transition(reading: &SavedReading) -> String {
    match reading.relating {
        Some(relating) => format!(
            "{} → {}",
            hexagram_label(reading.primary),
            hexagram_label(relating)
        ),
        None => hexagram_label(reading.primary),
    }
}

pub async fn run(data_dir: &Path, user: Option<&str>, json: bool) -> Result<(), String> {
    let user = parse_user(user)?;
    let store = open_store(data_dir);
    let history = store
        .load_history(user.as_ref())
        .await
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&history).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if history.is_empty() {
        println!("  No readings found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Date", "Question", "Hexagram", "Source"]);

    for reading in &history {
        let question = if reading.question.chars().count() > 48 {
            let short: String = reading.question.chars().take(45).collect();
            format!("{short}...")
        } else {
            reading.question.clone()
        };
        table.add_row(vec![
            reading.id.to_string(),
            reading.created_at.format("%Y-%m-%d %H:%M").to_string(),
            question,
            transition(reading),
            reading.interpretation.source.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} readings", history.len());

    Ok(())
}
