/// A line of the hex listing that is not an 8-digit word.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: expected 8 hex digits, found {text:?}")]
pub struct InputError {
    pub line: usize,
    pub text: String,
}

/// Parse one word per line, most significant nibble first. Trailing blank
/// lines are tolerated; blank lines between words are not.
pub fn parse_words(text: &str) -> Result<Vec<u32>, InputError> {
    let body = text.trim_end();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.lines()
        .enumerate()
        .map(|(line, raw)| parse_word(raw).ok_or_else(|| InputError { line, text: raw.to_string() }))
        .collect()
}

pub fn parse_word(raw: &str) -> Option<u32> {
    let s = raw.trim();
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}
