//! Interpretation records.
//!
//! A generator answers either with free text (the legacy contract) or with
//! one of two versioned JSON records. [`Interpretation`] is the sum of all
//! three; consumers match on it exhaustively.

use serde::{Deserialize, Serialize};

/// Tone of a V1 record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneV1 {
    /// Warm.
    Warm,
    /// Wise.
    Wise,
    /// Encouraging.
    Encouraging,
    /// Cautionary.
    Cautionary,
}

/// Confidence of a V1 record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// High.
    High,
    /// Medium.
    Medium,
    /// Low.
    Low,
}

/// Body of a V1 record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationV1Body {
    /// What the hexagram says about the question.
    pub overview: String,
    /// Reading of the present situation.
    pub present_situation: String,
    /// How the two trigrams interact.
    pub trigram_dynamics: String,
    /// Commentary on the changing lines, if any.
    pub changing_lines: Option<String>,
    /// Movement toward the relating hexagram, if any.
    pub transformation: Option<String>,
    /// Practical guidance.
    pub guidance: String,
    /// Timing advice.
    pub timing: String,
    /// One-sentence core message.
    pub key_insight: String,
}

/// First structured contract: snake_case fields under `interpretation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationV1 {
    /// The reading.
    pub interpretation: InterpretationV1Body,
    /// Overall tone.
    pub tone: ToneV1,
    /// How confident the generator is.
    pub confidence: Confidence,
}

/// Tone of a V2 record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneV2 {
    /// Inward, reflective.
    Contemplative,
    /// Movement and change.
    Dynamic,
    /// Warning.
    Cautionary,
    /// Favourable.
    Auspicious,
}

impl std::fmt::Display for ToneV2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contemplative => write!(f, "Contemplative"),
            Self::Dynamic => write!(f, "Dynamic"),
            Self::Cautionary => write!(f, "Cautionary"),
            Self::Auspicious => write!(f, "Auspicious"),
        }
    }
}

/// Trigram interaction section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrigramDynamics {
    /// How upper and lower trigram meet.
    pub interaction: String,
    /// Meaning of the upper trigram here.
    pub upper_meaning: String,
    /// Meaning of the lower trigram here.
    pub lower_meaning: String,
}

/// Changing line section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangingLines {
    /// Which lines are moving.
    pub present: String,
    /// What their movement signifies.
    pub significance: String,
}

/// Transformation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    /// The path from primary to relating hexagram.
    pub journey: String,
    /// Where the situation is heading.
    pub future_state: String,
}

/// Guidance section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    /// Core counsel.
    pub wisdom: String,
    /// Concrete actions.
    pub right_action: Vec<String>,
    /// Qualities to cultivate.
    pub to_embody: Vec<String>,
    /// Things to avoid.
    pub to_avoid: Vec<String>,
}

/// Timing section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    /// Nature of the moment.
    pub nature: String,
    /// When to act.
    pub when_to_act: String,
    /// When to hold back.
    pub when_to_wait: String,
}

/// Second structured contract: camelCase, titled, with reflection prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationV2 {
    /// Short title.
    pub title: String,
    /// One-paragraph summary.
    pub summary: String,
    /// Overall tone.
    pub tone: ToneV2,
    /// What the hexagram says about the question.
    pub overview: String,
    /// Reading of the present situation.
    pub present_situation: String,
    /// Trigram interaction.
    pub trigram_dynamics: TrigramDynamics,
    /// Changing lines, `null` when none moved.
    pub changing_lines: Option<ChangingLines>,
    /// Transformation, `null` when there is no relating hexagram.
    pub transformation: Option<Transformation>,
    /// Guidance.
    pub guidance: Guidance,
    /// Timing.
    pub timing: Timing,
    /// One-sentence core message.
    pub key_insight: String,
    /// Questions for the querent, at least three.
    pub reflection_prompts: Vec<String>,
    /// Closing words.
    pub conclusion: String,
}

/// Any accepted interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "schema", content = "content", rename_all = "lowercase")]
pub enum Interpretation {
    /// Free-text interpretation.
    Legacy(String),
    /// First structured contract.
    V1(InterpretationV1),
    /// Second structured contract.
    V2(InterpretationV2),
}

impl Interpretation {
    /// Title, if the record carries one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Legacy(_) | Self::V1(_) => None,
            Self::V2(v2) => Some(&v2.title),
        }
    }

    /// The core message in one sentence, if the record carries one.
    pub fn key_insight(&self) -> Option<&str> {
        match self {
            Self::Legacy(_) => None,
            Self::V1(v1) => Some(&v1.interpretation.key_insight),
            Self::V2(v2) => Some(&v2.key_insight),
        }
    }

    /// Plain-text rendering for terminals and exports.
    pub fn render_text(&self) -> String {
        match self {
            Self::Legacy(text) => text.trim().to_string(),
            Self::V1(v1) => render_v1(v1),
            Self::V2(v2) => render_v2(v2),
        }
    }
}

fn section(out: &mut String, heading: &str, body: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(body.trim());
    out.push_str("\n\n");
}

fn render_v1(v1: &InterpretationV1) -> String {
    let body = &v1.interpretation;
    let mut out = String::new();
    section(&mut out, "Overview", &body.overview);
    section(&mut out, "Present Situation", &body.present_situation);
    section(&mut out, "Trigram Dynamics", &body.trigram_dynamics);
    if let Some(changing) = &body.changing_lines {
        section(&mut out, "Changing Lines", changing);
    }
    if let Some(transformation) = &body.transformation {
        section(&mut out, "Transformation", transformation);
    }
    section(&mut out, "Guidance", &body.guidance);
    section(&mut out, "Timing", &body.timing);
    section(&mut out, "Key Insight", &body.key_insight);
    out.trim_end().to_string()
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("  - {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_v2(v2: &InterpretationV2) -> String {
    let mut out = format!("{}\n{}\n\n", v2.title, v2.summary.trim());
    section(&mut out, "Overview", &v2.overview);
    section(&mut out, "Present Situation", &v2.present_situation);
    section(
        &mut out,
        "Trigram Dynamics",
        &format!(
            "{}\nUpper: {}\nLower: {}",
            v2.trigram_dynamics.interaction,
            v2.trigram_dynamics.upper_meaning,
            v2.trigram_dynamics.lower_meaning
        ),
    );
    if let Some(changing) = &v2.changing_lines {
        section(
            &mut out,
            "Changing Lines",
            &format!("{}\n{}", changing.present, changing.significance),
        );
    }
    if let Some(t) = &v2.transformation {
        section(
            &mut out,
            "Transformation",
            &format!("{}\n{}", t.journey, t.future_state),
        );
    }
    section(
        &mut out,
        "Guidance",
        &format!(
            "{}\nRight action:\n{}\nTo embody:\n{}\nTo avoid:\n{}",
            v2.guidance.wisdom,
            bullets(&v2.guidance.right_action),
            bullets(&v2.guidance.to_embody),
            bullets(&v2.guidance.to_avoid)
        ),
    );
    section(
        &mut out,
        "Timing",
        &format!(
            "{}\nAct: {}\nWait: {}",
            v2.timing.nature, v2.timing.when_to_act, v2.timing.when_to_wait
        ),
    );
    section(&mut out, "Key Insight", &v2.key_insight);
    section(&mut out, "Reflection", &bullets(&v2.reflection_prompts));
    out.push_str(v2.conclusion.trim());
    out
}
