use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use mips_disasm::input::parse_words;
use mips_disasm::DisasmConfig;

/// Program text as loaded from disk: one word per slot.
#[derive(Debug, Clone)]
pub struct Program {
    pub path: PathBuf,
    pub words: Vec<u32>,
}

pub fn load_hex_file(path: &Path) -> Result<Program> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let words = parse_words(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Program { path: path.to_path_buf(), words })
}

pub fn load_config(path: &Path) -> Result<DisasmConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// `prog.txt` -> `prog.s`, next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("s")
}
