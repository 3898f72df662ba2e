use std::fmt;

use serde::{Deserialize, Serialize};

use crate::disasm::LABEL_PREFIX;

/// One line of the finished listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum OutputLine {
    /// Standalone marker; holds the address text only (`000c`).
    Label(String),
    /// Fully rendered instruction line.
    Instr(String),
}

impl OutputLine {
    pub fn is_label(&self) -> bool {
        matches!(self, OutputLine::Label(_))
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLine::Label(addr) => write!(f, "{LABEL_PREFIX}{addr}:"),
            OutputLine::Instr(text) => f.write_str(text),
        }
    }
}

/// Ordered listing that grows at the end and accepts label splices in the
/// middle. Line text is never rewritten once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputBuffer {
    lines: Vec<OutputLine>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    /// Insert at `pos`, shifting later lines down. Positions past the end append.
    pub fn insert(&mut self, pos: usize, line: OutputLine) {
        let pos = pos.min(self.lines.len());
        self.lines.insert(pos, line);
    }

    pub fn is_label_at(&self, pos: usize) -> bool {
        self.lines.get(pos).is_some_and(OutputLine::is_label)
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whole listing as text, every line newline-terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a OutputBuffer {
    type Item = &'a OutputLine;
    type IntoIter = std::slice::Iter<'a, OutputLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
