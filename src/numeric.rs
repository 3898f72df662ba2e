//! Interpretations of the raw 16-bit immediate field.

pub const SIGN_BIT: u16 = 0x8000;

pub fn is_negative(imm: u16) -> bool {
    imm >= SIGN_BIT
}

/// Plain decimal value, as printed for every non-branch I-type instruction.
pub fn unsigned(imm: u16) -> u32 {
    u32::from(imm)
}

/// Signed branch offset in instruction slots.
///
/// With the sign bit set, the magnitude is the complement of the low fifteen
/// bits plus one, so `0xFFF9` yields `-7` and `0x8000` yields `-32768`.
pub fn branch_offset(imm: u16) -> i32 {
    if is_negative(imm) {
        let magnitude = i32::from(!imm & !SIGN_BIT) + 1;
        -magnitude
    } else {
        i32::from(imm)
    }
}

/// Four lowercase hex digits, zero padded; wider addresses keep every digit.
pub fn addr_text(byte_addr: usize) -> String {
    format!("{byte_addr:04x}")
}
