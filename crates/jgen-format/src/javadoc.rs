use jgen_config::CommentsConfig;

use crate::{CommentFormatter, FormatError};

const OPEN: &str = "/**";
const CLOSE: &str = "*/";
const LINE_PREFIX: &str = " * ";

/// Wraps text in `/** ... */`, reflowing words to fit `max_line_length`.
///
/// Text that fits on one line renders as `/** text */`. Longer text, or text with explicit line
/// breaks, renders one ` * `-prefixed line per wrapped line. A blank input line is kept as a
/// paragraph break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavadocFormatter {
    max_line_length: usize,
    indent: String,
}

impl Default for JavadocFormatter {
    fn default() -> Self {
        Self::from_config(&CommentsConfig::default())
    }
}

impl JavadocFormatter {
    pub fn from_config(config: &CommentsConfig) -> Self {
        Self {
            max_line_length: config.max_line_length,
            indent: config.indent.clone(),
        }
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    fn single_line(&self, text: &str) -> Option<String> {
        if text.contains('\n') {
            return None;
        }
        let words: Vec<&str> = text.split_whitespace().collect();
        let line = if words.is_empty() {
            format!("{}{OPEN} {CLOSE}", self.indent)
        } else {
            format!("{}{OPEN} {} {CLOSE}", self.indent, words.join(" "))
        };
        (line.chars().count() <= self.max_line_length).then_some(line)
    }

    fn wrap_paragraph(&self, paragraph: &str, out: &mut Vec<String>) {
        let budget = self
            .max_line_length
            .saturating_sub(self.indent.chars().count() + LINE_PREFIX.len());
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > budget && !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            out.push(line);
        }
    }
}

impl CommentFormatter for JavadocFormatter {
    fn format(&self, text: &str) -> Result<String, FormatError> {
        if let Some(offset) = text.find(CLOSE) {
            return Err(FormatError::Terminator { offset });
        }
        let text = text.trim();
        if let Some(line) = self.single_line(text) {
            return Ok(line);
        }

        let mut lines = Vec::new();
        let mut pending_break = false;
        for paragraph in text.lines() {
            if paragraph.trim().is_empty() {
                pending_break = !lines.is_empty();
                continue;
            }
            if pending_break {
                lines.push(String::new());
                pending_break = false;
            }
            self.wrap_paragraph(paragraph, &mut lines);
        }

        let mut out = format!("{}{OPEN}\n", self.indent);
        for line in lines {
            out.push_str(&self.indent);
            if line.is_empty() {
                out.push_str(LINE_PREFIX.trim_end());
            } else {
                out.push_str(LINE_PREFIX);
                out.push_str(&line);
            }
            out.push('\n');
        }
        out.push_str(&self.indent);
        out.push(' ');
        out.push_str(CLOSE);
        Ok(out)
    }
}
