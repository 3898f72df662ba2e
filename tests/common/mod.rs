#![allow(dead_code)]

use mips_disasm::{disassemble, DecodeError, DisasmConfig, Mips32Decoder, Strategy};

pub const T0: u32 = 8;
pub const T1: u32 = 9;
pub const T2: u32 = 10;

pub fn enc_r(funct: u32, rs: u32, rt: u32, rd: u32, shamt: u32) -> u32 {
    ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | ((rd & 0x1F) << 11) | ((shamt & 0x1F) << 6) | (funct & 0x3F)
}

pub fn enc_i(op: u32, rs: u32, rt: u32, imm: u16) -> u32 {
    ((op & 0x3F) << 26) | ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | imm as u32
}

/// add $t2, $t0, $t1
pub fn add() -> u32 {
    enc_r(0x20, T0, T1, T2, 0)
}

pub fn beq(imm: u16) -> u32 {
    enc_i(0x04, T0, T1, imm)
}

pub fn bne(imm: u16) -> u32 {
    enc_i(0x05, T0, T1, imm)
}

pub fn run(words: &[u32]) -> Result<Vec<String>, DecodeError> {
    run_with(Strategy::SinglePass, words)
}

pub fn run_with(strategy: Strategy, words: &[u32]) -> Result<Vec<String>, DecodeError> {
    let buf = disassemble(Mips32Decoder::new(), DisasmConfig { strategy }, words)?;
    Ok(buf.iter().map(|l| l.to_string()).collect())
}

pub const ADD: &str = "\tadd, $t2, $t0, $t1";
