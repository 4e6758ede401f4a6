//! Ordered level-2 section document.
//!
//! # Responsibility
//! - Split markdown into a preamble plus `## <heading>` sections.
//! - Look up section bodies by exact heading text.
//! - Replace selected section bodies and serialize in original order.
//!
//! # Invariants
//! - Heading match is exact and case-sensitive on the full heading line
//!   (trailing whitespace ignored), so prefix headings never collide.
//! - Only lines starting with `## ` open a section; `### ` lines are body text.
//! - Sections that are not replaced keep their raw text unchanged.

use std::fmt::{Display, Formatter};

const HEADING_PREFIX: &str = "## ";

/// One `## <heading>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    heading: String,
    heading_line: String,
    body: String,
}

impl Section {
    /// Heading text without the `## ` marker.
    pub fn heading(&self) -> &str {
        &self.heading
    }
}

/// Markdown text viewed as an ordered heading -> body mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkdownDocument {
    preamble: String,
    sections: Vec<Section>,
}

impl MarkdownDocument {
    /// Parses `text` in a single pass over its lines.
    pub fn parse(text: &str) -> Self {
        let mut document = Self::default();
        for line in text.split_inclusive('\n') {
            if let Some(heading) = heading_text(line) {
                document.sections.push(Section {
                    heading: heading.to_string(),
                    heading_line: line.to_string(),
                    body: String::new(),
                });
            } else if let Some(section) = document.sections.last_mut() {
                section.body.push_str(line);
            } else {
                document.preamble.push_str(line);
            }
        }
        document
    }

    /// Headings in document order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::heading)
    }

    /// Returns the first section named exactly `heading`.
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.heading == heading)
    }

    /// Trimmed body of `heading`; empty when the section is absent.
    pub fn section_text(&self, heading: &str) -> &str {
        self.section(heading)
            .map(|section| section.body.trim())
            .unwrap_or("")
    }

    /// Replaces the body of the first section named `heading`.
    ///
    /// The new body is written as a blank line, `content`, and a blank line
    /// separating it from the following heading. Returns `false` and leaves
    /// the document unchanged when the heading is absent.
    pub fn replace_section_body(&mut self, heading: &str, content: &str) -> bool {
        let Some(index) = self
            .sections
            .iter()
            .position(|section| section.heading == heading)
        else {
            return false;
        };

        let is_last = index + 1 == self.sections.len();
        let mut body = format!("\n{}\n", content.trim_end_matches(['\n', '\r']));
        if !is_last {
            body.push('\n');
        }

        let section = &mut self.sections[index];
        if !section.heading_line.ends_with('\n') {
            section.heading_line.push('\n');
        }
        section.body = body;
        true
    }

    /// Serializes back to markdown in original heading order.
    pub fn to_markdown(&self) -> String {
        let capacity = self.preamble.len()
            + self
                .sections
                .iter()
                .map(|section| section.heading_line.len() + section.body.len())
                .sum::<usize>();
        let mut out = String::with_capacity(capacity);
        out.push_str(&self.preamble);
        for section in &self.sections {
            out.push_str(&section.heading_line);
            out.push_str(&section.body);
        }
        out
    }
}

impl Display for MarkdownDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

/// Returns the trimmed body of `## <heading>` in `text`, or an empty string.
pub fn extract_section(text: &str, heading: &str) -> String {
    MarkdownDocument::parse(text)
        .section_text(heading)
        .to_string()
}

fn heading_text(line: &str) -> Option<&str> {
    line.strip_prefix(HEADING_PREFIX).map(str::trim_end)
}
