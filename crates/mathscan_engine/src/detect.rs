//! Candidate line selection, sanitization and equation splitting.

use tracing::{debug, trace};

/// Operators the evaluator understands. `=` is deliberately not one of them.
const OPERATORS: [char; 5] = ['+', '-', '*', '/', '^'];

/// A line of OCR text that looks like plain arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Sanitized full line, `=` kept.
    pub raw_expression: String,
    /// Left-hand side, or the whole sanitized line when there is no `=`.
    pub normalized_expression: String,
    /// Right-hand side when the line had a non-empty one.
    pub right_expression: Option<String>,
    /// The trimmed source line before sanitization.
    pub original_line: String,
    pub has_equation: bool,
}

// Hyphen, non-breaking hyphen, figure dash, en/em dash, horizontal bar,
// minus sign, small and fullwidth hyphen-minus.
fn is_dash_variant(c: char) -> bool {
    matches!(c, '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}')
}

fn is_candidate_symbol(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '=' | '×' | '÷' | '·') || is_dash_variant(c)
}

fn has_operator(s: &str) -> bool {
    s.contains(OPERATORS)
}

/// Pre-sanitization filter: a digit, an operator or `=`, and no letters
/// of any script.
pub fn is_candidate_line(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit())
        && line.chars().any(is_candidate_symbol)
        && !line.chars().any(char::is_alphabetic)
}

/// Map operator look-alikes to ASCII, drop everything outside the
/// arithmetic alphabet and collapse whitespace.
pub fn sanitize_line(line: &str) -> String {
    let mapped: String = line
        .chars()
        .filter_map(|c| match c {
            '×' | '·' => Some('*'),
            '÷' => Some('/'),
            c if is_dash_variant(c) => Some('-'),
            c if c.is_ascii_digit() => Some(c),
            '+' | '-' | '*' | '/' | '^' | '(' | ')' | '.' | '=' => Some(c),
            c if c.is_whitespace() => Some(' '),
            _ => None,
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Run the filters and normalization on one already-trimmed line.
pub fn detect_line(line: &str) -> Option<Detection> {
    if !is_candidate_line(line) {
        trace!(target: "detect", line, "not a candidate");
        return None;
    }

    let cleaned = sanitize_line(line);
    if !has_operator(&cleaned) {
        debug!(target: "detect", line, cleaned = %cleaned, "no operator after sanitizing");
        return None;
    }

    let (left, right) = match cleaned.split_once('=') {
        Some((left, right)) => (left.trim(), Some(right.trim()).filter(|r| !r.is_empty())),
        None => (cleaned.as_str(), None),
    };
    let normalized = if left.is_empty() { cleaned.as_str() } else { left };

    // The evaluated side itself must carry an operator: "4 = 2 + 2" is skipped.
    if !has_operator(normalized) {
        debug!(target: "detect", line, normalized, "left-hand side has no operator");
        return None;
    }

    let detection = Detection {
        raw_expression: cleaned.clone(),
        normalized_expression: normalized.to_string(),
        right_expression: right.map(str::to_string),
        original_line: line.to_string(),
        has_equation: cleaned.contains('='),
    };
    debug!(target: "detect", ?detection, "selected line");
    Some(detection)
}

/// Find the first line of `text` worth evaluating as arithmetic.
///
/// Returns `None` when no line qualifies, including for empty input.
pub fn detect(text: &str) -> Option<Detection> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find_map(detect_line)
}
