//! Error types for parsing molecule records

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax { span: Span, message: String },
}

impl ParseError {
    /// Build a parse error from a `serde_json` failure, locating it in `source`
    pub fn from_json(err: &serde_json::Error, source: &str) -> Self {
        let offset = byte_offset(source, err.line(), err.column());
        let end = (offset + 1).min(source.len()).max(offset);

        ParseError::Syntax {
            span: offset..end,
            message: describe(err),
        }
    }

    /// The byte range the error points at
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax { span, message } => {
                // Spans are byte offsets, as reported by serde_json
                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_config(Config::default().with_index_type(IndexType::Byte))
                    .with_message("invalid molecule record")
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8(buf).unwrap_or_else(|_| self.to_string())
    }
}

/// Human-readable message without serde_json's trailing "at line X column Y"
fn describe(err: &serde_json::Error) -> String {
    let text = err.to_string();
    let message = match text.rfind(" at line ") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    };
    match err.classify() {
        serde_json::error::Category::Eof => format!("unexpected end of input: {}", message),
        serde_json::error::Category::Data => format!("unexpected record shape: {}", message),
        _ => message,
    }
}

/// Convert a 1-based line/column pair into a byte offset
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let col = column.saturating_sub(1).min(text.len());
            return offset + col;
        }
        offset += text.len();
    }
    source.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error(source: &str) -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>(source).unwrap_err()
    }

    #[test]
    fn test_byte_offset_first_line() {
        assert_eq!(byte_offset("abc", 1, 2), 1);
    }

    #[test]
    fn test_byte_offset_later_line() {
        assert_eq!(byte_offset("ab\ncd\nef", 3, 1), 6);
    }

    #[test]
    fn test_from_json_points_into_source() {
        let source = "{\n  \"name\": ,\n}";
        let err = ParseError::from_json(&json_error(source), source);
        let span = err.span();
        assert!(span.start < source.len());
        assert_eq!(&source[span.start..span.start + 1], ",");
    }

    #[test]
    fn test_message_drops_location_suffix() {
        let source = "{\"a\": }";
        let err = ParseError::from_json(&json_error(source), source);
        assert!(!err.to_string().contains(" at line "));
    }

    #[test]
    fn test_format_mentions_filename() {
        let source = "{\"a\": }";
        let err = ParseError::from_json(&json_error(source), source);
        let report = err.format(source, "water.json");
        assert!(report.contains("water.json"));
        assert!(report.contains("invalid molecule record"));
    }

    #[test]
    fn test_format_keeps_label_after_multibyte_text() {
        let source = "{\"name\": \"Äthanol – Ethyl alcohol\", \"formula\": }";
        let err = ParseError::from_json(&json_error(source), source);
        assert_eq!(&source[err.span().start..err.span().start + 1], "}");

        let report = err.format(source, "ethanol.json");
        assert!(report.contains("Äthanol"), "snippet missing:\n{}", report);
        assert!(report.contains("expected value"), "label missing:\n{}", report);
    }
}
