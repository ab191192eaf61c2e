use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let hexagrams = yj_core::hexagram::all();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["No", "Symbol", "Name", "Pinyin", "Upper", "Lower"]);

    for hexagram in hexagrams {
        table.add_row(vec![
            hexagram.number.to_string(),
            hexagram.symbol().to_string(),
            hexagram.name.to_string(),
            format!("{} {}", hexagram.pinyin, hexagram.character),
            hexagram.upper.to_string(),
            hexagram.lower.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", hexagrams.len());

    Ok(())
}
