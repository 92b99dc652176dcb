#![no_std]
#![doc = include_str!("../README.md")]

#[macro_use]
extern crate log;

mod decode;
mod descriptor;
mod insn;
mod mnemonic;
mod prefix;
mod table;
mod tables;

#[cfg(test)]
mod tests;

pub use decode::{decode, decode_one};
pub use insn::{InsnFlags, Instruction, OpKind, Operand, RegFile};
pub use insn::{REG_CS, REG_DS, REG_ES, REG_FS, REG_GS, REG_IP, REG_NONE, REG_SS};
pub use mnemonic::Mnemonic;
pub use table::{ROOT_OFFSET_32, ROOT_OFFSET_64};

/// Hard architectural limit on the length of one instruction, in bytes.
pub const MAX_INSTRUCTION_LEN: usize = 15;

numeric_enum_macro::numeric_enum! {
    #[repr(u32)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Execution mode of the code being decoded; converts from the raw
    /// mode width (32 or 64), anything else being rejected.
    pub enum DecodeMode {
        Bits32 = 32,
        Bits64 = 64,
    }
}

/// Why a decode request could not be satisfied.
///
/// Errors are returned, never panicked; the output record is
/// unspecified whenever a decode call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended before a required byte.
    Partial,
    /// The encoding is illegal (the processor would raise #UD).
    Undefined,
    /// The requested mode is not supported by this build.
    Internal,
}

impl DecodeError {
    /// Conventional negative error code for FFI-shaped callers.
    pub const fn code(self) -> i32 {
        match self {
            DecodeError::Partial => -1,
            DecodeError::Undefined => -2,
            DecodeError::Internal => -3,
        }
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            DecodeError::Partial => "need more bytes",
            DecodeError::Undefined => "undefined instruction",
            DecodeError::Internal => "unsupported decode mode",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for DecodeError {}

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, DecodeError>;
