use crate::decoder::{Format, Op};

/// Operand layout used when rendering an instruction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `op, rd, rt, shamt`
    Shift,
    /// `op, rd, rs, rt`
    Reg,
    /// `op, rt, imm(rs)`
    Mem,
    /// `op, rt, rs, Addr_HHHH`
    PcRel,
    /// `op, rt, rs, imm`
    RegImm,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    pub format: Format,
    /// Function field for R-type, primary opcode for I-type.
    pub code: u8,
    pub shape: Shape,
}

const fn r(op: Op, mnemonic: &'static str, code: u8, shape: Shape) -> InstrDesc {
    InstrDesc { op, mnemonic, format: Format::R, code, shape }
}

const fn i(op: Op, mnemonic: &'static str, code: u8, shape: Shape) -> InstrDesc {
    InstrDesc { op, mnemonic, format: Format::I, code, shape }
}

pub const TABLE: &[InstrDesc] = &[
    r(Op::Sll, "sll", 0x00, Shape::Shift),
    r(Op::Srl, "srl", 0x02, Shape::Shift),
    r(Op::Add, "add", 0x20, Shape::Reg),
    r(Op::Addu, "addu", 0x21, Shape::Reg),
    r(Op::Sub, "sub", 0x22, Shape::Reg),
    r(Op::Subu, "subu", 0x23, Shape::Reg),
    r(Op::And, "and", 0x24, Shape::Reg),
    r(Op::Or, "or", 0x25, Shape::Reg),
    r(Op::Nor, "nor", 0x27, Shape::Reg),
    r(Op::Slt, "slt", 0x2A, Shape::Reg),
    r(Op::Sltu, "sltu", 0x2B, Shape::Reg),
    i(Op::Beq, "beq", 0x04, Shape::PcRel),
    i(Op::Bne, "bne", 0x05, Shape::PcRel),
    i(Op::Addi, "addi", 0x08, Shape::RegImm),
    i(Op::Addiu, "addiu", 0x09, Shape::RegImm),
    i(Op::Slti, "slti", 0x0A, Shape::RegImm),
    i(Op::Sltiu, "sltiu", 0x0B, Shape::RegImm),
    i(Op::Andi, "andi", 0x0C, Shape::RegImm),
    i(Op::Ori, "ori", 0x0D, Shape::RegImm),
    i(Op::Lui, "lui", 0x0F, Shape::RegImm),
    i(Op::Lw, "lw", 0x23, Shape::Mem),
    i(Op::Lbu, "lbu", 0x24, Shape::RegImm),
    i(Op::Lhu, "lhu", 0x25, Shape::RegImm),
    i(Op::Sb, "sb", 0x28, Shape::RegImm),
    i(Op::Sh, "sh", 0x29, Shape::RegImm),
    i(Op::Ll, "ll", 0x30, Shape::RegImm),
    i(Op::Sc, "sc", 0x38, Shape::RegImm),
    i(Op::Sw, "sw", 0x2B, Shape::Mem),
];

pub fn lookup(format: Format, code: u8) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.format == format && d.code == code)
}

pub fn desc(op: Op) -> &'static InstrDesc {
    match TABLE.iter().find(|d| d.op == op) {
        Some(d) => d,
        None => unreachable!("every Op has a table entry"),
    }
}

impl Op {
    pub fn mnemonic(self) -> &'static str {
        desc(self).mnemonic
    }

    pub fn shape(self) -> Shape {
        desc(self).shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(TABLE.iter().filter(|d| d.format == Format::R).count(), 11);
        assert_eq!(TABLE.iter().filter(|d| d.format == Format::I).count(), 17);
    }

    #[test]
    fn codes_unique_per_format() {
        for (n, a) in TABLE.iter().enumerate() {
            for b in &TABLE[n + 1..] {
                assert!(!(a.format == b.format && a.code == b.code), "{} / {}", a.mnemonic, b.mnemonic);
                assert_ne!(a.op, b.op);
            }
        }
    }

    #[test]
    fn r_and_i_share_codes_without_clash() {
        // 0x23 is subu as a function and lw as an opcode
        assert_eq!(lookup(Format::R, 0x23).unwrap().op, Op::Subu);
        assert_eq!(lookup(Format::I, 0x23).unwrap().op, Op::Lw);
        assert!(lookup(Format::I, 0x02).is_none());
    }
}
