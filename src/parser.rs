use crate::question::ClassifiedQuestion;
use crate::rules::{RuleEngine, OPTIONS_BONUS};
use tracing::debug;

/// Turns pasted free text into classified questions, one per non-blank line.
pub struct QuestionParser;

impl QuestionParser {
    pub fn parse(raw_text: &str) -> Vec<ClassifiedQuestion> {
        let questions: Vec<ClassifiedQuestion> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Self::parse_line)
            .collect();

        debug!(
            input_lines = raw_text.lines().count(),
            questions = questions.len(),
            "parsed question block"
        );
        questions
    }

    /// Classifies a single trimmed line. Never fails.
    pub fn parse_line(line: &str) -> ClassifiedQuestion {
        let classification = RuleEngine::classify(line);
        let mut confidence = classification.confidence;

        let options = if classification.field_type.is_choice() {
            let found = extract_options(line);
            if found.is_empty() {
                None
            } else {
                confidence += OPTIONS_BONUS;
                Some(found)
            }
        } else {
            None
        };

        ClassifiedQuestion {
            text: clean_text(line),
            field_type: classification.field_type,
            required: classification.required,
            options,
            confidence,
        }
    }
}

/// Pulls an option list out of the first non-empty `(...)` group, or failing
/// that the text after the last colon.
pub fn extract_options(line: &str) -> Vec<String> {
    let Some(raw) = first_paren_group(line).or_else(|| colon_suffix(line)) else {
        return Vec::new();
    };

    let without_parens: String = raw.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    let body = match without_parens.strip_prefix(':') {
        Some(rest) => rest.trim_start(),
        None => without_parens.as_str(),
    };

    body.split([',', '&'])
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect()
}

/// Display form of a line: parenthesized groups removed, one trailing `*`
/// dropped, whitespace collapsed.
pub fn clean_text(line: &str) -> String {
    let stripped = remove_paren_groups(line);
    let stripped = stripped.strip_suffix('*').unwrap_or(&stripped);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_paren_group(line: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(open) = line[from..].find('(').map(|i| from + i) {
        let close = open + line[open..].find(')')?;
        if close > open + 1 {
            return Some(&line[open..=close]);
        }
        from = close + 1;
    }
    None
}

fn colon_suffix(line: &str) -> Option<&str> {
    let colon = line.rfind(':')?;
    let suffix = &line[colon..];
    (suffix.len() > 1).then_some(suffix)
}

fn remove_paren_groups(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
