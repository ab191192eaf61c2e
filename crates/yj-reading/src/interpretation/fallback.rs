//! Static interpretation synthesized from local hexagram data.
//!
//! Used whenever the generator fails or its answer is rejected. It reads
//! nothing but the static tables, so it cannot fail.

use yj_core::{Hexagram, Trigram};

use super::context::ReadingContext;
use super::schema::{
    ChangingLines, Guidance, Interpretation, InterpretationV2, Timing, ToneV2, Transformation,
    TrigramDynamics,
};

fn trigram_phrase(t: Trigram) -> String {
    format!(
        "{} ({}), {} and associated with {}",
        t.name(),
        t.pinyin(),
        t.attribute(),
        t.element()
    )
}

fn position_name(position: u8) -> &'static str {
    match position {
        1 => "first",
        2 => "second",
        3 => "third",
        4 => "fourth",
        5 => "fifth",
        _ => "top",
    }
}

fn keyword(hex: &Hexagram, index: usize) -> &'static str {
    hex.keywords
        .get(index)
        .or_else(|| hex.keywords.first())
        .copied()
        .unwrap_or("balance")
}

/// Build a V2 interpretation from the context alone.
pub fn synthesize(ctx: &ReadingContext) -> Interpretation {
    let hex = ctx.primary.hexagram;
    let upper = hex.upper;
    let lower = hex.lower;

    let changing_lines = (!ctx.primary.changing_lines.is_empty()).then(|| {
        let names: Vec<&str> = ctx
            .primary
            .changing_lines
            .iter()
            .map(|p| position_name(*p))
            .collect();
        ChangingLines {
            present: format!("Changing lines in the {} place.", names.join(", ")),
            significance: format!(
                "{} of six lines are in motion; the situation of {} is not fixed and is already becoming something else.",
                names.len(),
                hex.name
            ),
        }
    });

    let transformation = ctx.relating.as_ref().map(|relating| Transformation {
        journey: format!(
            "From {} toward {}: {} gives way to {}.",
            hex.name,
            relating.hexagram.name,
            keyword(hex, 0),
            keyword(relating.hexagram, 0)
        ),
        future_state: format!("{} {}", relating.hexagram.name, relating.hexagram.judgment),
    });

    let tone = if changing_lines.is_some() {
        ToneV2::Dynamic
    } else {
        ToneV2::Contemplative
    };

    let summary = match &ctx.relating {
        Some(relating) => format!(
            "{} ({}) is moving toward {} ({}).",
            hex.name, hex.number, relating.hexagram.name, relating.hexagram.number
        ),
        None => format!(
            "{} ({}) describes a stable situation with no changing lines.",
            hex.name, hex.number
        ),
    };

    Interpretation::V2(InterpretationV2 {
        title: format!("{} {}", hex.symbol(), hex.name),
        summary,
        tone,
        overview: format!(
            "On the question \"{}\", the oracle answers with hexagram {}, {}. The judgment reads: {}",
            ctx.question, hex.number, hex.name, hex.judgment
        ),
        present_situation: format!("The image: {}", hex.image),
        trigram_dynamics: TrigramDynamics {
            interaction: format!(
                "{} rests above {}; the inner nucleus is {}.",
                upper.name(),
                lower.name(),
                ctx.nuclear.name
            ),
            upper_meaning: format!("Outwardly: {}.", trigram_phrase(upper)),
            lower_meaning: format!("Inwardly: {}.", trigram_phrase(lower)),
        },
        changing_lines,
        transformation,
        guidance: Guidance {
            wisdom: format!("Let {} guide how you meet this moment.", keyword(hex, 0)),
            right_action: vec![format!("Act with {}.", keyword(hex, 1))],
            to_embody: hex.keywords.iter().map(|k| k.to_string()).collect(),
            to_avoid: vec![format!(
                "Ignoring the inner {} ({}).",
                lower.name().to_lowercase(),
                lower.attribute()
            )],
        },
        timing: Timing {
            nature: if ctx.has_changing_lines() {
                "A time of transition.".into()
            } else {
                "A settled time.".into()
            },
            when_to_act: format!("When your actions express {}.", keyword(hex, 0)),
            when_to_wait: format!("While {} is still out of reach.", keyword(hex, 1)),
        },
        key_insight: format!("The way of {} is {}.", hex.name, keyword(hex, 0)),
        reflection_prompts: vec![
            format!("Where does {} already show up in your situation?", keyword(hex, 0)),
            format!("What would it mean to act with {}?", keyword(hex, 1)),
            "What are you holding on to that the moment asks you to release?".into(),
        ],
        conclusion: format!("{} {}", hex.name, hex.image),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpretation::validate::{Validation, validate_response};
    use crate::interpretation::{DetailLevel, ResponseFormat};
    use yj_core::{CastingMethod, LinePattern, Reading, cast_all_lines, cast_hexagram, read, resolve};

    fn ctx_for(reading: &Reading) -> ReadingContext {
        ReadingContext::new("What should I focus on?", CastingMethod::ThreeCoin, reading)
    }

    #[test]
    fn fallback_passes_v2_validation_for_every_hexagram() {
        for bits in 0u8..64 {
            let hex = resolve(LinePattern::from_bits(bits));
            // the fallback must hold up with and without movement
            for changing in [false, true] {
                let kinds: [yj_core::LineKind; 6] = std::array::from_fn(|i| {
                    let yang = hex.lines()[i];
                    match (yang, changing && i == 0) {
                        (true, true) => yj_core::LineKind::ChangingYang,
                        (false, true) => yj_core::LineKind::ChangingYin,
                        (true, false) => yj_core::LineKind::Yang,
                        (false, false) => yj_core::LineKind::Yin,
                    }
                });
                let lines: [yj_core::Line; 6] =
                    std::array::from_fn(|i| yj_core::Line::new(i as u8 + 1, kinds[i]).unwrap());
                let reading = read(&lines);
                assert_eq!(cast_hexagram(&lines).hexagram.number, hex.number);

                let content = synthesize(&ctx_for(&reading));
                let raw = match &content {
                    Interpretation::V2(v2) => serde_json::to_string(v2).unwrap(),
                    other => panic!("expected V2, got {other:?}"),
                };
                match validate_response(&raw, ResponseFormat::V2, DetailLevel::Detailed, changing) {
                    Validation::Ok(parsed) => assert_eq!(parsed, content),
                    Validation::Invalid(reasons) => {
                        panic!("#{} changing={changing}: {reasons:?}", hex.number)
                    }
                }
            }
        }
    }

    #[test]
    fn tone_follows_movement() {
        let moving = read(&cast_all_lines(CastingMethod::ThreeCoin, &[0; 18]).unwrap());
        let Interpretation::V2(v2) = synthesize(&ctx_for(&moving)) else {
            panic!("expected V2");
        };
        assert_eq!(v2.tone, ToneV2::Dynamic);
        assert!(v2.changing_lines.is_some());
        assert!(v2.transformation.unwrap().journey.contains("The Receptive"));

        let stable = read(&cast_all_lines(CastingMethod::ThreeCoin, &[0, 1, 1].repeat(6)).unwrap());
        let Interpretation::V2(v2) = synthesize(&ctx_for(&stable)) else {
            panic!("expected V2");
        };
        assert_eq!(v2.tone, ToneV2::Contemplative);
        assert!(v2.changing_lines.is_none());
        assert!(v2.transformation.is_none());
        assert_eq!(v2.reflection_prompts.len(), 3);
    }

    #[test]
    fn fallback_is_deterministic() {
        let reading = read(&cast_all_lines(CastingMethod::YarrowStalk, &[3, 9, 0, 15, 12, 7]).unwrap());
        assert_eq!(synthesize(&ctx_for(&reading)), synthesize(&ctx_for(&reading)));
    }
}
