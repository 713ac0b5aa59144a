//! Upstream text collaborators.
//!
//! OCR, files and stdin all sit behind [`TextSource`]; the pipeline only
//! needs to know whether a source is usable and what text it produced.

use crate::error::SourceError;

pub trait TextSource {
    /// Short label for logs and error messages.
    fn name(&self) -> &str;

    /// Cheap availability probe, checked before [`TextSource::extract_text`].
    fn check_available(&self) -> bool;

    fn extract_text(&self) -> Result<String, SourceError>;
}

/// In-memory text, always available.
#[derive(Debug, Clone)]
pub struct StaticText {
    name: String,
    text: String,
}

impl StaticText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: "static".to_string(),
            text: text.into(),
        }
    }

    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl TextSource for StaticText {
    fn name(&self) -> &str {
        &self.name
    }

    fn check_available(&self) -> bool {
        true
    }

    fn extract_text(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

fn clean_ocr_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '|' => {}
            '_' | '.' => {
                let mut run = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    run += 1;
                }
                match c {
                    _ if run < 3 => out.extend(std::iter::repeat(c).take(run)),
                    '.' => out.push_str("..."),
                    _ => {}
                }
            }
            _ => out.push(c),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove common OCR artifacts line by line: table rules (`|`), fill-in
/// blanks (`___`) and dot leaders (`.....` becomes `...`). Blank lines are
/// dropped; the remaining line structure is kept.
pub fn clean_ocr_text(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(clean_ocr_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_text() {
        let source = StaticText::named("fixture", "1 + 1");
        assert_eq!(source.name(), "fixture");
        assert!(source.check_available());
        assert_eq!(source.extract_text().unwrap(), "1 + 1");
    }

    #[test]
    fn test_clean_removes_pipes_and_blanks() {
        assert_eq!(clean_ocr_text("| 2 + 3 |"), "2 + 3");
        assert_eq!(clean_ocr_text("7 * 6 = ____"), "7 * 6 =");
        assert_eq!(clean_ocr_text("a__b"), "a__b");
    }

    #[test]
    fn test_clean_collapses_dot_leaders() {
        assert_eq!(clean_ocr_text("Total........5"), "Total...5");
        assert_eq!(clean_ocr_text("1.5 + 2.25"), "1.5 + 2.25");
    }

    #[test]
    fn test_clean_keeps_lines() {
        assert_eq!(
            clean_ocr_text("Question 1\r\n\n  4   /  2  \r9-3"),
            "Question 1\n4 / 2\n9-3"
        );
    }
}
