//! Unit tests for the x86_decode crate.

mod errors;
mod modrm;
mod prefixes;

use crate::{DecodeMode, Instruction, Result, decode_one};

/// Decode in 64-bit mode with address 0.
pub(crate) fn decode64(bytes: &[u8]) -> Result<Instruction> {
    decode_one(bytes, DecodeMode::Bits64, 0)
}

/// Decode in 32-bit mode with address 0.
pub(crate) fn decode32(bytes: &[u8]) -> Result<Instruction> {
    decode_one(bytes, DecodeMode::Bits32, 0)
}
