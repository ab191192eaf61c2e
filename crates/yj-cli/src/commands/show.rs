use colored::Colorize;

pub fn run(number: u8) -> Result<(), String> {
    let hexagram = yj_core::by_number(number).map_err(|e| e.to_string())?;

    println!("  {}", hexagram.to_string().bold());
    println!();

    for (i, yang) in hexagram.lines().iter().enumerate().rev() {
        let glyph = if *yang { "━━━━━━━━━" } else { "━━━   ━━━" };
        println!("  {}  {glyph}", (i + 1).to_string().dimmed());
    }
    println!();

    for (label, trigram) in [("upper:", hexagram.upper), ("lower:", hexagram.lower)] {
        println!(
            "  {:<10} {}  {}, {}, {}",
            label,
            trigram,
            trigram.attribute(),
            trigram.family(),
            trigram.element()
        );
    }
    println!("  {:<10} {}", "nuclear:", hexagram.nuclear());
    println!();

    println!("  {}", "Judgment".bold().underline());
    for line in hexagram.judgment.lines() {
        println!("  {}", line.trim());
    }
    println!();

    println!("  {}", "Image".bold().underline());
    for line in hexagram.image.lines() {
        println!("  {}", line.trim());
    }

    if !hexagram.keywords.is_empty() {
        println!();
        println!("  {} {}", "keywords:".dimmed(), hexagram.keywords.join(", "));
    }

    Ok(())
}
