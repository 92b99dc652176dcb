//! Prefix scanning: legacy prefixes, REX, and the VEX/EVEX families.
//!
//! The scanner consumes leading prefix bytes and records their final
//! effective values; nothing here looks at the opcode map. VEX/EVEX
//! parsing also lives here because those prefixes fold opcode-map
//! selection, register extension and size controls into 2–4 bytes.

use bitflags::bitflags;

use crate::insn::{Instruction, REG_CS, REG_DS, REG_ES, REG_FS, REG_GS, REG_SS};
use crate::{DecodeError, DecodeMode, Result};

// Mandatory-prefix codes, doubling as the REP state (F3/F2 keep their
// mandatory-prefix numbering so the last-wins rule carries over).
pub(crate) const MAND_NONE: u8 = 0;
pub(crate) const MAND_66: u8 = 1;
pub(crate) const MAND_F3: u8 = 2;
pub(crate) const MAND_F2: u8 = 3;

bitflags! {
    /// Effective REX state. The bit values equal the bits of a raw REX
    /// byte, so a legacy REX prefix is stored as-is; `PRESENT` is bit 6
    /// of the 40h..4Fh byte itself. VEX/EVEX set the individual
    /// extension bits without `PRESENT`. `RR` is the EVEX R' extension.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub(crate) struct Rex: u8 {
        const B = 0x01;
        const X = 0x02;
        const R = 0x04;
        const W = 0x08;
        const RR = 0x10;
        const PRESENT = 0x40;
    }
}

/// Scratch prefix state accumulated before the opcode map is walked.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PrefixState {
    /// REP state: 0 none, `MAND_F3` or `MAND_F2`.
    pub rep: u8,
    pub lock: bool,
    /// 66h seen.
    pub osz: bool,
    /// Effective address-size code (1/2/3 for 16/32/64-bit).
    pub addr_size: u8,
    pub rex: Rex,
    /// Inverted (E)VEX.vvvv, extended with V' in 64-bit mode.
    pub vex_operand: u8,
    /// VEX.L / EVEX.L'L.
    pub vexl: u8,
    /// Fourth EVEX byte | 0x100, or 0 when no EVEX prefix.
    pub evex: u16,
    /// Root-table step: 0..=3 legacy escapes, |4 VEX maps, |8 EVEX maps.
    pub escape: u8,
    /// Effective mandatory prefix on escape/VEX/EVEX paths.
    pub mandatory: u8,
}

impl PrefixState {
    pub fn new(mode: DecodeMode) -> Self {
        Self {
            addr_size: if mode == DecodeMode::Bits64 { 3 } else { 2 },
            ..Self::default()
        }
    }
}

/// Consume legacy prefixes (and REX in 64-bit mode) from the front of
/// `buf`, filling `st` and the segment override in `instr`.
///
/// Returns the offset of the first non-prefix byte. A REX prefix is
/// honored only when it immediately precedes that byte.
pub(crate) fn scan(buf: &[u8], mode: DecodeMode, instr: &mut Instruction, st: &mut PrefixState) -> usize {
    let mut off = 0;
    let mut rex_off = usize::MAX;
    while off < buf.len() {
        match buf[off] {
            // Of multiple segment overrides, the last one wins; the
            // legacy four are ignored in 64-bit mode.
            0x26 => {
                if mode == DecodeMode::Bits32 {
                    instr.segment = REG_ES;
                }
            }
            0x2e => {
                if mode == DecodeMode::Bits32 {
                    instr.segment = REG_CS;
                }
            }
            0x36 => {
                if mode == DecodeMode::Bits32 {
                    instr.segment = REG_SS;
                }
            }
            0x3e => {
                if mode == DecodeMode::Bits32 {
                    instr.segment = REG_DS;
                }
            }
            0x64 => instr.segment = REG_FS,
            0x65 => instr.segment = REG_GS,
            0x66 => st.osz = true,
            0x67 => st.addr_size = if mode == DecodeMode::Bits64 { 2 } else { 1 },
            0xf0 => st.lock = true,
            0xf3 => st.rep = MAND_F3,
            0xf2 => st.rep = MAND_F2,
            b @ 0x40..=0x4f if mode == DecodeMode::Bits64 => {
                st.rex = Rex::from_bits_retain(b);
                rex_off = off;
            }
            _ => break,
        }
        off += 1;
    }

    // REX is only considered when it is the last prefix byte.
    if rex_off != off.wrapping_sub(1) {
        st.rex = Rex::empty();
    }
    off
}

// VEX/EVEX byte layout (x = inverted in the encoding):
//
//         ┌───┬───┬───┬───┬───┬───┬───┬───┐
// C5    : │ Rx│ v̄ │ v̄ │ v̄ │ v̄ │ L │ p │ p │
//         ├───┼───┼───┼───┼───┼───┼───┼───┤
// C4   1: │ Rx│ Xx│ Bx│ m │ m │ m │ m │ m │
//      2: │ W │ v̄ │ v̄ │ v̄ │ v̄ │ L │ p │ p │
//         ├───┼───┼───┼───┼───┼───┼───┼───┤
// 62   1: │ Rx│ Xx│ Bx│R'x│ 0 │ m │ m │ m │
//      2: │ W │ v̄ │ v̄ │ v̄ │ v̄ │ 1 │ p │ p │
//      3: │ z │ L'│ L │ b │V'x│ a │ a │ a │
//         └───┴───┴───┴───┴───┴───┴───┴───┘

/// Try to parse a VEX (C4/C5) or EVEX (62) prefix at `off`.
///
/// Returns the new offset past the prefix, or `None` when the byte
/// sequence is not a VEX/EVEX prefix in 32-bit mode and must be decoded
/// as a plain opcode (LES/LDS/BOUND).
pub(crate) fn parse_vex_evex(
    buf: &[u8],
    len: usize,
    off: usize,
    mode: DecodeMode,
    st: &mut PrefixState,
) -> Result<Option<usize>> {
    let vex_prefix = buf[off];
    if off + 1 >= len {
        return Err(DecodeError::Partial);
    }
    // In 32-bit mode, C4/C5/62 are VEX/EVEX only when the next byte's
    // top two bits are both set (a register-form ModR/M).
    if mode == DecodeMode::Bits32 && buf[off + 1] & 0xc0 != 0xc0 {
        return Ok(None);
    }
    // 66/F3/F2 or a retained REX combined with VEX/EVEX is illegal.
    if st.osz || st.rep != MAND_NONE || !st.rex.is_empty() {
        trace!("vex/evex after 66/F2/F3/REX prefix");
        return Err(DecodeError::Undefined);
    }

    let mut byte = buf[off + 1];
    if vex_prefix == 0xc5 {
        // 2-byte VEX: opcode map 0F, R from the complemented top bit.
        st.escape = 1 | 4;
        st.rex = if byte & 0x80 != 0 { Rex::empty() } else { Rex::R };
    } else {
        // 3-byte VEX or EVEX; R/X/B are ignored in 32-bit mode.
        if mode == DecodeMode::Bits64 {
            st.rex = Rex::from_bits_retain((byte >> 5) ^ 0x7);
        }
        if vex_prefix == 0x62 {
            if byte & 0x08 != 0 {
                return Err(DecodeError::Undefined);
            }
            st.escape = (byte & 0x07) | 8;
            if mode == DecodeMode::Bits64 {
                st.rex |= Rex::from_bits_retain((byte & 0x10) ^ 0x10);
            }
        } else {
            if byte & 0x1c != 0 {
                return Err(DecodeError::Undefined);
            }
            st.escape = (byte & 0x03) | 4;
        }

        if off + 2 >= len {
            return Err(DecodeError::Partial);
        }
        byte = buf[off + 2];
        if byte & 0x80 != 0 {
            st.rex |= Rex::W;
        }
    }

    st.mandatory = byte & 0x03;
    st.vex_operand = ((byte & 0x78) >> 3) ^ 0xf;

    if vex_prefix == 0x62 {
        // Fixed one-bit in the second EVEX byte.
        if byte & 0x04 == 0 {
            return Err(DecodeError::Undefined);
        }
        if off + 3 >= len {
            return Err(DecodeError::Partial);
        }
        let byte = buf[off + 3];
        st.vexl = (byte >> 5) & 0x03;
        st.evex = byte as u16 | 0x100;
        if mode == DecodeMode::Bits64 {
            // V' extends vvvv to five bits, inverted like vvvv.
            if byte & 0x08 == 0 {
                st.vex_operand |= 0x10;
            }
        } else if byte & 0x08 == 0 {
            return Err(DecodeError::Undefined);
        }
        Ok(Some(off + 4))
    } else {
        st.vexl = if byte & 0x04 != 0 { 1 } else { 0 };
        Ok(Some(off + (0xc7 - vex_prefix) as usize))
    }
}
