pub mod decoder;
pub mod disasm;
pub mod engine;
pub mod input;
pub mod instructions;
pub mod listing;
pub mod numeric;
pub mod registers;

pub mod isa {
    pub mod mips32; // MIPS32 integer subset
}

pub use decoder::{Decoded, Decoder, Fault, Op};
pub use engine::{disassemble, DecodeError, DisasmConfig, Disassembler, Strategy};
pub use isa::mips32::Mips32Decoder;
pub use listing::{OutputBuffer, OutputLine};
