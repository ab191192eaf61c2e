//! Validation of generator responses.
//!
//! Malformed responses are an expected outcome, not an exception: every
//! check collects human-readable reasons and returns
//! [`Validation::Invalid`] instead of failing.

use serde_json::Value;

use super::schema::{Interpretation, InterpretationV1, InterpretationV2};
use super::{DetailLevel, ResponseFormat};

/// Outcome of validating a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    /// The response satisfied the contract.
    Ok(T),
    /// The response was rejected for these reasons.
    Invalid(Vec<String>),
}

impl<T> Validation<T> {
    /// Whether the response was accepted.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Map the accepted value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U> {
        match self {
            Self::Ok(v) => Validation::Ok(f(v)),
            Self::Invalid(reasons) => Validation::Invalid(reasons),
        }
    }
}

/// Phrases that mark a declined request.
const REFUSAL_PHRASES: &[&str] = &[
    "i cannot provide",
    "i can't provide",
    "i can't help with",
    "i cannot help with",
    "i'm unable to",
    "i am unable to",
    "i'm sorry, but",
    "i apologize, but",
    "as an ai",
    "as a language model",
    "i won't be able to",
];

const V1_MIN_OVERVIEW: usize = 50;
const V1_MIN_GUIDANCE: usize = 30;
const V1_MIN_KEY_INSIGHT: usize = 20;
const V2_MIN_OVERVIEW: usize = 50;
const V2_MIN_SUMMARY: usize = 20;
const V2_MIN_KEY_INSIGHT: usize = 20;
const V2_MIN_REFLECTION_PROMPTS: usize = 3;

fn refusal(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    REFUSAL_PHRASES.iter().copied().find(|p| lower.contains(p))
}

/// Validate a free-text response against the length bounds of `detail`.
pub fn validate_text(raw: &str, detail: DetailLevel) -> Validation<String> {
    let text = raw.trim();
    let len = text.chars().count();
    let (min, max) = detail.text_bounds();
    let mut reasons = Vec::new();
    if len < min {
        reasons.push(format!("response too short: {len} characters, minimum {min}"));
    }
    if len > max {
        reasons.push(format!("response too long: {len} characters, maximum {max}"));
    }
    if let Some(phrase) = refusal(text) {
        reasons.push(format!("response contains refusal phrasing: {phrase:?}"));
    }
    if reasons.is_empty() {
        Validation::Ok(text.to_string())
    } else {
        Validation::Invalid(reasons)
    }
}

/// Remove a surrounding Markdown code fence, if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string ("json") on the opening line
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => {
            let info = rest
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(rest.len());
            let after = rest[info..].trim_start();
            if after.starts_with(['{', '[']) { after } else { rest }
        }
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Reasons for a structured body that is not a JSON object, with refusal
/// phrasing reported first.
fn not_an_object(body: &str, reason: String) -> Validation<Interpretation> {
    let mut reasons = Vec::new();
    if let Some(phrase) = refusal(body) {
        reasons.push(format!("response contains refusal phrasing: {phrase:?}"));
    }
    reasons.push(reason);
    Validation::Invalid(reasons)
}

/// Validate a structured response and classify it as V1 or V2.
///
/// An object with `title` and `trigramDynamics` is V2; an object with an
/// `interpretation` object is V1; anything else is rejected. Refusal
/// phrasing only counts outside a JSON object, since a record may quote
/// the question.
pub fn validate_structured(raw: &str) -> Validation<Interpretation> {
    let body = strip_code_fence(raw);
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return not_an_object(body, format!("response is not valid JSON: {e}")),
    };
    let Some(object) = value.as_object() else {
        return not_an_object(body, "response is not a JSON object".into());
    };

    if object.contains_key("title") && object.contains_key("trigramDynamics") {
        validate_v2(value).map(Interpretation::V2)
    } else if object.get("interpretation").is_some_and(Value::is_object) {
        validate_v1(value).map(Interpretation::V1)
    } else {
        Validation::Invalid(vec!["response matches neither structured schema".into()])
    }
}

/// Validate a response under the contract selected by `format`.
///
/// When the cast has changing lines, a V2 record must fill its
/// `changingLines` and `transformation` sections instead of nulling them.
pub fn validate_response(
    raw: &str,
    format: ResponseFormat,
    detail: DetailLevel,
    has_changing_lines: bool,
) -> Validation<Interpretation> {
    match format {
        ResponseFormat::Legacy => validate_text(raw, detail).map(Interpretation::Legacy),
        ResponseFormat::V1 | ResponseFormat::V2 => {
            let validation = validate_structured(raw);
            let mut reasons = Vec::new();
            match (&validation, format) {
                (Validation::Ok(Interpretation::V1(_)), ResponseFormat::V2) => {
                    reasons.push("expected a V2 record, got V1".to_string());
                }
                (Validation::Ok(Interpretation::V2(_)), ResponseFormat::V1) => {
                    reasons.push("expected a V1 record, got V2".to_string());
                }
                (Validation::Ok(Interpretation::V2(v2)), _) if has_changing_lines => {
                    if v2.changing_lines.is_none() {
                        reasons.push("field changingLines is null but lines are changing".into());
                    }
                    if v2.transformation.is_none() {
                        reasons.push("field transformation is null but lines are changing".into());
                    }
                }
                _ => {}
            }
            if reasons.is_empty() {
                validation
            } else {
                Validation::Invalid(reasons)
            }
        }
    }
}

fn field_name(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}

fn require_text(value: &Value, pointer: &str, min: usize, reasons: &mut Vec<String>) {
    match value.pointer(pointer) {
        None | Some(Value::Null) => reasons.push(format!("missing field {}", field_name(pointer))),
        Some(Value::String(s)) => {
            let len = s.trim().chars().count();
            if len < min.max(1) {
                reasons.push(format!(
                    "field {} too short: {len} characters, minimum {}",
                    field_name(pointer),
                    min.max(1)
                ));
            }
        }
        Some(_) => reasons.push(format!("field {} must be a string", field_name(pointer))),
    }
}

fn require_enum(value: &Value, pointer: &str, allowed: &[&str], reasons: &mut Vec<String>) {
    match value.pointer(pointer) {
        None => reasons.push(format!("missing field {}", field_name(pointer))),
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => {}
        Some(other) => reasons.push(format!(
            "field {} must be one of {}, got {other}",
            field_name(pointer),
            allowed.join("/")
        )),
    }
}

fn require_list(value: &Value, pointer: &str, min: usize, reasons: &mut Vec<String>) {
    match value.pointer(pointer) {
        None | Some(Value::Null) => reasons.push(format!("missing field {}", field_name(pointer))),
        Some(Value::Array(items)) => {
            let filled = items
                .iter()
                .filter(|i| i.as_str().is_some_and(|s| !s.trim().is_empty()))
                .count();
            if filled != items.len() {
                reasons.push(format!(
                    "field {} must contain only non-empty strings",
                    field_name(pointer)
                ));
            } else if filled < min {
                reasons.push(format!(
                    "field {} needs at least {min} entries, got {filled}",
                    field_name(pointer)
                ));
            }
        }
        Some(_) => reasons.push(format!("field {} must be an array", field_name(pointer))),
    }
}

/// A key that must be present and either `null` or an object with the given text fields.
fn require_nullable_section(value: &Value, pointer: &str, fields: &[&str], reasons: &mut Vec<String>) {
    match value.pointer(pointer) {
        None => reasons.push(format!("missing field {}", field_name(pointer))),
        Some(Value::Null) => {}
        Some(Value::Object(_)) => {
            for field in fields {
                require_text(value, &format!("{pointer}/{field}"), 1, reasons);
            }
        }
        Some(_) => reasons.push(format!(
            "field {} must be an object or null",
            field_name(pointer)
        )),
    }
}

/// A key that must be present and either `null` or a non-empty string.
fn require_nullable_text(value: &Value, pointer: &str, reasons: &mut Vec<String>) {
    match value.pointer(pointer) {
        None => reasons.push(format!("missing field {}", field_name(pointer))),
        Some(Value::Null) => {}
        Some(Value::String(_)) => require_text(value, pointer, 1, reasons),
        Some(_) => reasons.push(format!(
            "field {} must be a string or null",
            field_name(pointer)
        )),
    }
}

fn finish<T: serde::de::DeserializeOwned>(value: Value, reasons: Vec<String>) -> Validation<T> {
    if !reasons.is_empty() {
        return Validation::Invalid(reasons);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Validation::Ok(parsed),
        Err(e) => Validation::Invalid(vec![format!("record does not match schema: {e}")]),
    }
}

fn validate_v1(value: Value) -> Validation<InterpretationV1> {
    let mut reasons = Vec::new();
    require_text(&value, "/interpretation/overview", V1_MIN_OVERVIEW, &mut reasons);
    require_text(&value, "/interpretation/present_situation", 1, &mut reasons);
    require_text(&value, "/interpretation/trigram_dynamics", 1, &mut reasons);
    require_nullable_text(&value, "/interpretation/changing_lines", &mut reasons);
    require_nullable_text(&value, "/interpretation/transformation", &mut reasons);
    require_text(&value, "/interpretation/guidance", V1_MIN_GUIDANCE, &mut reasons);
    require_text(&value, "/interpretation/timing", 1, &mut reasons);
    require_text(&value, "/interpretation/key_insight", V1_MIN_KEY_INSIGHT, &mut reasons);
    require_enum(
        &value,
        "/tone",
        &["warm", "wise", "encouraging", "cautionary"],
        &mut reasons,
    );
    require_enum(&value, "/confidence", &["high", "medium", "low"], &mut reasons);
    finish(value, reasons)
}

fn validate_v2(value: Value) -> Validation<InterpretationV2> {
    let mut reasons = Vec::new();
    require_text(&value, "/title", 1, &mut reasons);
    require_text(&value, "/summary", V2_MIN_SUMMARY, &mut reasons);
    require_enum(
        &value,
        "/tone",
        &["Contemplative", "Dynamic", "Cautionary", "Auspicious"],
        &mut reasons,
    );
    require_text(&value, "/overview", V2_MIN_OVERVIEW, &mut reasons);
    require_text(&value, "/presentSituation", 1, &mut reasons);
    for field in ["interaction", "upperMeaning", "lowerMeaning"] {
        require_text(&value, &format!("/trigramDynamics/{field}"), 1, &mut reasons);
    }
    require_nullable_section(&value, "/changingLines", &["present", "significance"], &mut reasons);
    require_nullable_section(&value, "/transformation", &["journey", "futureState"], &mut reasons);
    require_text(&value, "/guidance/wisdom", 1, &mut reasons);
    for field in ["rightAction", "toEmbody", "toAvoid"] {
        require_list(&value, &format!("/guidance/{field}"), 1, &mut reasons);
    }
    for field in ["nature", "whenToAct", "whenToWait"] {
        require_text(&value, &format!("/timing/{field}"), 1, &mut reasons);
    }
    require_text(&value, "/keyInsight", V2_MIN_KEY_INSIGHT, &mut reasons);
    require_list(
        &value,
        "/reflectionPrompts",
        V2_MIN_REFLECTION_PROMPTS,
        &mut reasons,
    );
    require_text(&value, "/conclusion", 1, &mut reasons);
    finish(value, reasons)
}
