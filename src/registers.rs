use crate::decoder::Fault;

/// Conventional ABI names, indexed by the 5-bit register field.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", //
    "$t0", "$t1", "$t2", "$t3", "$t4", "$t5", "$t6", "$t7", //
    "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", //
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Map a register field to its name. Every 5-bit value has one; anything
/// wider is rejected so callers see the same `Fault` type as the decoder.
pub fn reg_name(index: u8) -> Result<&'static str, Fault> {
    REG_NAMES
        .get(index as usize)
        .copied()
        .ok_or(Fault::UnknownRegister(index))
}
