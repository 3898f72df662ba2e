use crate::decoder::{Decoded, Fault};
use crate::instructions::Shape;
use crate::numeric::unsigned;
use crate::registers::reg_name;

pub const LABEL_PREFIX: &str = "Addr_";

/// Branch operand reference, e.g. `Addr_000c`.
pub fn label_ref(addr_text: &str) -> String {
    format!("{LABEL_PREFIX}{addr_text}")
}

/// Render one decoded instruction as a listing line.
///
/// `target` is the resolved address text for `beq`/`bne`; other instructions
/// ignore it. A branch rendered without a target falls back to its raw
/// immediate.
pub fn fmt_decoded(d: &Decoded, target: Option<&str>) -> Result<String, Fault> {
    let op = d.op();
    let m = op.mnemonic();
    let line = match (*d, op.shape()) {
        (Decoded::R { rd, rt, shamt, .. }, Shape::Shift) => {
            format!("\t{m}, {}, {}, {shamt}", reg_name(rd)?, reg_name(rt)?)
        }
        (Decoded::R { rd, rs, rt, .. }, _) => {
            format!("\t{m}, {}, {}, {}", reg_name(rd)?, reg_name(rs)?, reg_name(rt)?)
        }
        (Decoded::I { rs, rt, imm, .. }, Shape::Mem) => {
            format!("\t{m}, {}, {}({})", reg_name(rt)?, unsigned(imm), reg_name(rs)?)
        }
        (Decoded::I { rs, rt, imm, .. }, Shape::PcRel) => match target {
            Some(addr) => format!("\t{m}, {}, {}, {}", reg_name(rt)?, reg_name(rs)?, label_ref(addr)),
            None => format!("\t{m}, {}, {}, {}", reg_name(rt)?, reg_name(rs)?, unsigned(imm)),
        },
        (Decoded::I { rs, rt, imm, .. }, _) => {
            format!("\t{m}, {}, {}, {}", reg_name(rt)?, reg_name(rs)?, unsigned(imm))
        }
    };
    Ok(line)
}
