use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::decoder::{Decoded, Decoder, Fault};
use crate::disasm::fmt_decoded;
use crate::listing::{OutputBuffer, OutputLine};
use crate::numeric::{addr_text, branch_offset, is_negative};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One forward pass that splices labels into the listing as it grows.
    #[default]
    SinglePass,
    /// Collect every branch target first, then render with labels in place.
    TwoPass,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DisasmConfig {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot disassemble {word:08x} at line {slot}: {reason}")]
pub struct DecodeError {
    #[source]
    pub reason: Fault,
    pub word: u32,
    pub slot: usize,
}

/// Most recent forward branch target that has not been emitted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLabel {
    pub target_slot: usize,
    pub addr_text: String,
}

pub struct Disassembler<D: Decoder> {
    dec: D,
    cfg: DisasmConfig,
    buf: OutputBuffer,
    pending: Option<PendingLabel>,
}

impl<D: Decoder> Disassembler<D> {
    pub fn new(dec: D, cfg: DisasmConfig) -> Self {
        Self { dec, cfg, buf: OutputBuffer::new(), pending: None }
    }

    pub fn buffer(&self) -> &OutputBuffer {
        &self.buf
    }

    pub fn pending(&self) -> Option<&PendingLabel> {
        self.pending.as_ref()
    }

    /// Disassemble a whole program. Any fault aborts the pass and the partial
    /// listing is dropped.
    pub fn run(mut self, words: &[u32]) -> Result<OutputBuffer, DecodeError> {
        match self.cfg.strategy {
            Strategy::SinglePass => {
                for (slot, &word) in words.iter().enumerate() {
                    self.step(slot, word)?;
                }
            }
            Strategy::TwoPass => self.two_pass(words)?,
        }
        info!(slots = words.len(), lines = self.buf.len(), strategy = ?self.cfg.strategy, "disassembly complete");
        Ok(self.buf)
    }

    fn decode_at(&self, slot: usize, word: u32) -> Result<Decoded, DecodeError> {
        self.dec.decode(word).map_err(|reason| DecodeError { reason, word, slot })
    }

    fn render_at(d: &Decoded, target: Option<&str>, slot: usize, word: u32) -> Result<String, DecodeError> {
        fmt_decoded(d, target).map_err(|reason| DecodeError { reason, word, slot })
    }

    /// Process one slot of the single-pass strategy.
    pub fn step(&mut self, slot: usize, word: u32) -> Result<(), DecodeError> {
        let d = self.decode_at(slot, word)?;
        trace!(slot, word = format_args!("{word:08x}"), ?d, "decoded");

        let Some(imm) = d.branch_imm() else {
            let line = Self::render_at(&d, None, slot, word)?;
            self.buf.push(OutputLine::Instr(line));
            return Ok(());
        };

        // A branch sitting on the pending target is replaced by the label.
        if let Some(p) = self.pending.as_ref().filter(|p| p.target_slot == slot) {
            debug!(slot, addr = %p.addr_text, "discharging forward label");
            self.buf.push(OutputLine::Label(p.addr_text.clone()));
            return Ok(());
        }

        let addr = if is_negative(imm) {
            let dest = slot.saturating_add_signed(branch_offset(imm) as isize);
            let addr = addr_text(dest * 4);
            if self.buf.is_label_at(dest) {
                debug!(slot, dest, "label already present");
            } else {
                debug!(slot, dest, addr = %addr, "splicing backward label");
                self.buf.insert(dest, OutputLine::Label(addr.clone()));
            }
            addr
        } else {
            let dest = slot + usize::from(imm);
            let addr = addr_text(dest * 4 + 4);
            if let Some(old) = &self.pending {
                debug!(replaced = old.target_slot, "pending forward label overwritten");
            }
            debug!(slot, dest, addr = %addr, "pending forward label");
            self.pending = Some(PendingLabel { target_slot: dest, addr_text: addr.clone() });
            addr
        };

        let line = Self::render_at(&d, Some(addr.as_str()), slot, word)?;
        self.buf.push(OutputLine::Instr(line));
        Ok(())
    }

    fn two_pass(&mut self, words: &[u32]) -> Result<(), DecodeError> {
        let len = words.len();
        let mut decoded = Vec::with_capacity(len);
        let mut targets: BTreeMap<usize, String> = BTreeMap::new();
        let mut refs: Vec<Option<String>> = Vec::with_capacity(len);

        for (slot, &word) in words.iter().enumerate() {
            let d = self.decode_at(slot, word)?;
            let target = d.branch_imm().map(|imm| {
                let dest = (slot as i64 + 1 + i64::from(branch_offset(imm))).clamp(0, len as i64) as usize;
                let addr = addr_text(dest * 4);
                targets.entry(dest).or_insert_with(|| addr.clone());
                addr
            });
            decoded.push(d);
            refs.push(target);
        }
        debug!(targets = targets.len(), "branch targets collected");

        for (slot, (d, target)) in decoded.iter().zip(&refs).enumerate() {
            if let Some(addr) = targets.get(&slot) {
                self.buf.push(OutputLine::Label(addr.clone()));
            }
            let line = Self::render_at(d, target.as_deref(), slot, words[slot])?;
            self.buf.push(OutputLine::Instr(line));
        }
        if let Some(addr) = targets.get(&len) {
            self.buf.push(OutputLine::Label(addr.clone()));
        }
        Ok(())
    }
}

/// Convenience wrapper: decode `words` with `dec` under `cfg`.
pub fn disassemble<D: Decoder>(dec: D, cfg: DisasmConfig, words: &[u32]) -> Result<OutputBuffer, DecodeError> {
    Disassembler::new(dec, cfg).run(words)
}
