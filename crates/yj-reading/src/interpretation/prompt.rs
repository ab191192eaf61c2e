//! Prompt rendering for the generative service.

use yj_core::{Hexagram, Trigram};

use super::context::{HexagramView, ReadingContext};
use super::{DetailLevel, ResponseFormat};

const V1_SHAPE: &str = r#"{
  "interpretation": {
    "overview": string,
    "present_situation": string,
    "trigram_dynamics": string,
    "changing_lines": string | null,
    "transformation": string | null,
    "guidance": string,
    "timing": string,
    "key_insight": string
  },
  "tone": "warm" | "wise" | "encouraging" | "cautionary",
  "confidence": "high" | "medium" | "low"
}"#;

const V2_SHAPE: &str = r#"{
  "title": string,
  "summary": string,
  "tone": "Contemplative" | "Dynamic" | "Cautionary" | "Auspicious",
  "overview": string,
  "presentSituation": string,
  "trigramDynamics": { "interaction": string, "upperMeaning": string, "lowerMeaning": string },
  "changingLines": { "present": string, "significance": string } | null,
  "transformation": { "journey": string, "futureState": string } | null,
  "guidance": { "wisdom": string, "rightAction": [string], "toEmbody": [string], "toAvoid": [string] },
  "timing": { "nature": string, "whenToAct": string, "whenToWait": string },
  "keyInsight": string,
  "reflectionPrompts": [string, string, string],
  "conclusion": string
}"#;

fn trigram_line(label: &str, t: Trigram) -> String {
    format!(
        "{label} trigram: {} {} ({}), {}, element {}, {}, {}",
        t.symbol(),
        t.name(),
        t.pinyin(),
        t.attribute(),
        t.element(),
        t.family(),
        t.direction()
    )
}

fn describe(out: &mut String, heading: &str, hex: &Hexagram) {
    out.push_str(&format!("{heading}: {hex}\n"));
    out.push_str(&format!("{}\n", trigram_line("Upper", hex.upper)));
    out.push_str(&format!("{}\n", trigram_line("Lower", hex.lower)));
    out.push_str(&format!("Judgment: {}\n", hex.judgment));
    out.push_str(&format!("Image: {}\n", hex.image));
    out.push_str(&format!("Keywords: {}\n", hex.keywords.join(", ")));
}

fn changing(view: &HexagramView) -> String {
    if view.changing_lines.is_empty() {
        return "none (the situation is stable)".to_string();
    }
    view.changing_lines
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the completion prompt for a reading.
pub fn build_prompt(ctx: &ReadingContext, detail: DetailLevel, format: ResponseFormat) -> String {
    let mut out = String::new();
    out.push_str("You are an experienced I Ching reader. Interpret the cast below for the querent.\n");
    out.push_str(&format!("\nQuestion: {}\n", ctx.question));
    out.push_str(&format!("Casting method: {}\n\n", ctx.method));

    describe(&mut out, "Primary hexagram", ctx.primary.hexagram);
    out.push_str(&format!("Changing lines: {}\n", changing(&ctx.primary)));
    out.push_str(&format!("Nuclear hexagram: {}\n", ctx.nuclear));
    if let Some(relating) = &ctx.relating {
        out.push('\n');
        describe(&mut out, "Relating hexagram", relating.hexagram);
    }

    out.push_str(&format!("\nDepth: {detail}.\n"));
    match format {
        ResponseFormat::Legacy => {
            let (min, max) = detail.text_bounds();
            out.push_str(&format!(
                "Answer in plain prose between {min} and {max} characters. Do not use JSON.\n"
            ));
        }
        ResponseFormat::V1 => {
            out.push_str(&format!("Answer with a single JSON object of this shape:\n{V1_SHAPE}\n"));
        }
        ResponseFormat::V2 => {
            out.push_str(&format!("Answer with a single JSON object of this shape:\n{V2_SHAPE}\n"));
        }
    }
    if ctx.relating.is_none() && format != ResponseFormat::Legacy {
        out.push_str("No line is changing: set changing lines and transformation to null.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use yj_core::{CastingMethod, cast_all_lines, read};

    fn ctx(entropy: &[u64]) -> ReadingContext {
        let lines = cast_all_lines(CastingMethod::ThreeCoin, entropy).unwrap();
        ReadingContext::new("Will the harvest be good?", CastingMethod::ThreeCoin, &read(&lines))
    }

    #[test]
    fn prompt_carries_question_and_hexagrams() {
        let prompt = build_prompt(&ctx(&[0; 18]), DetailLevel::Detailed, ResponseFormat::V2);
        assert!(prompt.contains("Question: Will the harvest be good?"));
        assert!(prompt.contains("1. The Creative"));
        assert!(prompt.contains("Relating hexagram"));
        assert!(prompt.contains("2. The Receptive"));
        assert!(prompt.contains("Changing lines: 1, 2, 3, 4, 5, 6"));
        assert!(prompt.contains("\"keyInsight\""));
    }

    #[test]
    fn prompt_sections_sit_on_their_own_lines() {
        let prompt = build_prompt(&ctx(&[0; 18]), DetailLevel::Detailed, ResponseFormat::V2);
        let lines: Vec<&str> = prompt.lines().collect();
        assert!(lines.contains(&"Question: Will the harvest be good?"));
        assert!(lines.contains(&"Depth: detailed."));
        assert_eq!(lines.iter().filter(|l| l.starts_with("Judgment: ")).count(), 2);
        assert_eq!(lines.iter().filter(|l| l.starts_with("Keywords: ")).count(), 2);
        assert!(prompt.ends_with("}\n"));
    }

    #[test]
    fn legacy_prompt_states_length_bounds() {
        let prompt = build_prompt(&ctx(&[0; 18]), DetailLevel::Concise, ResponseFormat::Legacy);
        assert!(prompt.contains("between 150 and 2000 characters"));
        assert!(!prompt.contains("\"keyInsight\""));
    }

    #[test]
    fn stable_prompt_asks_for_nulls() {
        let prompt = build_prompt(&ctx(&[0, 1, 1].repeat(6)), DetailLevel::Detailed, ResponseFormat::V1);
        assert!(prompt.contains("Changing lines: none"));
        assert!(prompt.contains("set changing lines and transformation to null"));
        assert!(prompt.contains("\"key_insight\""));
        assert!(!prompt.contains("Relating hexagram"));
    }
}
