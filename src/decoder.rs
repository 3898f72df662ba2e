use serde::{Deserialize, Serialize};

/// Instruction format, selected by the primary opcode field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    /// Primary opcode 0, the function field picks the instruction.
    R,
    /// The primary opcode picks the instruction directly.
    I,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    // R-type
    Sll,
    Srl,
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Nor,
    Slt,
    Sltu,
    // I-type
    Beq,
    Bne,
    Addi,
    Addiu,
    Slti,
    Sltiu,
    Andi,
    Ori,
    Lui,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Ll,
    Sc,
    Sw,
}

impl Op {
    pub fn is_branch(self) -> bool {
        matches!(self, Op::Beq | Op::Bne)
    }
}

/// A single decoded word. Register fields hold raw 5-bit indices; names are
/// resolved when the instruction is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoded {
    R { op: Op, rd: u8, rs: u8, rt: u8, shamt: u8 },
    I { op: Op, rs: u8, rt: u8, imm: u16 },
}

impl Decoded {
    pub fn op(&self) -> Op {
        match *self {
            Decoded::R { op, .. } | Decoded::I { op, .. } => op,
        }
    }

    pub fn format(&self) -> Format {
        match self {
            Decoded::R { .. } => Format::R,
            Decoded::I { .. } => Format::I,
        }
    }

    /// Raw 16-bit immediate of a branch, `None` for anything else.
    pub fn branch_imm(&self) -> Option<u16> {
        match *self {
            Decoded::I { op, imm, .. } if op.is_branch() => Some(imm),
            _ => None,
        }
    }
}

/// Why a word could not be turned into assembly.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),
    #[error("unknown R-type function {0:#04x}")]
    UnknownFunction(u8),
    #[error("unknown register {0}")]
    UnknownRegister(u8),
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Result<Decoded, Fault>;
}
