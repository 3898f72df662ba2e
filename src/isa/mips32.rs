use bitvec::prelude::*;

use crate::decoder::{Decoded, Decoder, Fault, Format};
use crate::instructions::lookup;

/// Bit positions of the MIPS32 R/I-type fields (inclusive low, exclusive high).
///
/// R-type = | 31..26 op | 25..21 rs | 20..16 rt | 15..11 rd | 10..6 shamt | 5..0 funct |
/// I-type = | 31..26 op | 25..21 rs | 20..16 rt | 15..0 immediate |
mod field {
    use core::ops::Range;

    pub const OPCODE: Range<usize> = 26..32;
    pub const RS: Range<usize> = 21..26;
    pub const RT: Range<usize> = 16..21;
    pub const RD: Range<usize> = 11..16;
    pub const SHAMT: Range<usize> = 6..11;
    pub const FUNCT: Range<usize> = 0..6;
    pub const IMM: Range<usize> = 0..16;
}

/// Field view over one instruction word.
#[derive(Debug, Clone, Copy)]
pub struct Fields(u32);

impl Fields {
    pub fn new(raw32: u32) -> Self {
        Self(raw32)
    }

    fn get(&self, range: core::ops::Range<usize>) -> u32 {
        self.0.view_bits::<Lsb0>()[range].load_le::<u32>()
    }

    pub fn opcode(&self) -> u8 {
        self.get(field::OPCODE) as u8
    }
    pub fn rs(&self) -> u8 {
        self.get(field::RS) as u8
    }
    pub fn rt(&self) -> u8 {
        self.get(field::RT) as u8
    }
    pub fn rd(&self) -> u8 {
        self.get(field::RD) as u8
    }
    pub fn shamt(&self) -> u8 {
        self.get(field::SHAMT) as u8
    }
    pub fn funct(&self) -> u8 {
        self.get(field::FUNCT) as u8
    }
    pub fn imm(&self) -> u16 {
        self.get(field::IMM) as u16
    }
}

/// Decoder for the integer subset this crate understands: eleven R-type
/// functions and seventeen I-type opcodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mips32Decoder;

impl Mips32Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for Mips32Decoder {
    fn decode(&self, raw32: u32) -> Result<Decoded, Fault> {
        let f = Fields::new(raw32);
        let opcode = f.opcode();

        if opcode == 0 {
            let funct = f.funct();
            let desc = lookup(Format::R, funct).ok_or(Fault::UnknownFunction(funct))?;
            return Ok(Decoded::R {
                op: desc.op,
                rd: f.rd(),
                rs: f.rs(),
                rt: f.rt(),
                shamt: f.shamt(),
            });
        }

        let desc = lookup(Format::I, opcode).ok_or(Fault::UnknownOpcode(opcode))?;
        Ok(Decoded::I { op: desc.op, rs: f.rs(), rt: f.rt(), imm: f.imm() })
    }
}
