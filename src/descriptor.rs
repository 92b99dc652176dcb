//! Packed instruction descriptors, the leaves of the dispatch tables.
//!
//! A descriptor is four 16-bit words. The first names the mnemonic; the
//! other three pack the operand-index map, per-operand size selectors,
//! register-file tags and assorted flag bits. The bit assignments are
//! part of the contract with the table registry and never change
//! independently of it.

use bit_field::BitField;

use crate::insn::RegFile;
use crate::mnemonic::Mnemonic;

// Word 1 (`operand_indices`) layout. The three register-ish sources
// store their operand-slot index xor 3 in 2 bits, so 0 means "absent";
// the immediate's slot is stored the same way but its presence comes
// from IMM_CONTROL instead, freeing slot 3 for it.
pub(crate) const IDX_MODRM: usize = 0;
pub(crate) const IDX_MODREG: usize = 2;
pub(crate) const IDX_VEXREG: usize = 4;
pub(crate) const IDX_IMM: usize = 6;
pub(crate) const BIT_EVEX_BCST: usize = 8;
pub(crate) const BIT_EVEX_MASK: usize = 9;
pub(crate) const BIT_ZEROREG_VAL: usize = 10;
pub(crate) const BIT_LOCK: usize = 11;
pub(crate) const IMM_CONTROL: usize = 12; // 3 bits
pub(crate) const BIT_VSIB: usize = 15;

// Word 2 (`operand_sizes`) layout: 2-bit size selectors per operand
// source, then the two fixed size codes and the instruction-width bit.
pub(crate) const SZ_MODRM: usize = 0;
pub(crate) const SZ_MODREG: usize = 2;
pub(crate) const SZ_VEXREG: usize = 4;
pub(crate) const SZ_IMM: usize = 6;
pub(crate) const SZ_FIX1: usize = 10; // 3 bits
pub(crate) const SZ_FIX2: usize = 13; // 2 bits, stored minus one
pub(crate) const BIT_INSTR_WIDTH: usize = 15;

// Word 3 (`reg_types`) layout.
pub(crate) const RT_MODRM: usize = 0; // 3 bits
pub(crate) const RT_MODREG: usize = 3; // 3 bits
pub(crate) const RT_VEXREG: usize = 6; // 2 bits
pub(crate) const BIT_EVEX_SAE: usize = 8;
pub(crate) const BIT_EVEX_ER: usize = 9;
pub(crate) const BIT_EVEX_BCST16: usize = 10;
pub(crate) const OPSIZE: usize = 11; // 3 bits
pub(crate) const BIT_MODRM: usize = 14;
pub(crate) const BIT_IGN66: usize = 15;

/// Register files addressable by the 2-bit vvvv-operand tag.
pub(crate) const VEXREG_FILES: [RegFile; 4] =
    [RegFile::Vec, RegFile::Gpl, RegFile::Mask, RegFile::Fpu];

/// One instruction descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InstrDesc {
    pub mnemonic: Mnemonic,
    pub operand_indices: u16,
    pub operand_sizes: u16,
    pub reg_types: u16,
}

impl InstrDesc {
    fn op_idx(&self, pos: usize) -> usize {
        (self.operand_indices.get_bits(pos..pos + 2) ^ 3) as usize
    }

    /// Whether a ModR/M-encoded (r/m) operand exists.
    pub fn has_modrm_op(&self) -> bool {
        self.operand_indices.get_bits(IDX_MODRM..IDX_MODRM + 2) != 0
    }

    pub fn modrm_idx(&self) -> usize {
        self.op_idx(IDX_MODRM)
    }

    /// Whether a ModR/M.reg-encoded operand exists.
    pub fn has_modreg_op(&self) -> bool {
        self.operand_indices.get_bits(IDX_MODREG..IDX_MODREG + 2) != 0
    }

    pub fn modreg_idx(&self) -> usize {
        self.op_idx(IDX_MODREG)
    }

    /// Whether the (E)VEX.vvvv field maps to an operand (doubling as
    /// the implicit-register slot on legacy encodings).
    pub fn has_vexreg_op(&self) -> bool {
        self.operand_indices.get_bits(IDX_VEXREG..IDX_VEXREG + 2) != 0
    }

    pub fn vexreg_idx(&self) -> usize {
        self.op_idx(IDX_VEXREG)
    }

    pub fn imm_idx(&self) -> usize {
        self.op_idx(IDX_IMM)
    }

    /// Immediate-control code (see the registry for the numbering).
    pub fn imm_control(&self) -> u16 {
        self.operand_indices.get_bits(IMM_CONTROL..IMM_CONTROL + 3)
    }

    pub fn evex_bcst(&self) -> bool {
        self.operand_indices.get_bit(BIT_EVEX_BCST)
    }

    pub fn evex_mask(&self) -> bool {
        self.operand_indices.get_bit(BIT_EVEX_MASK)
    }

    /// Default register index ORed into the vvvv operand (1 selects CL
    /// for shift-by-CL encodings).
    pub fn zeroreg_val(&self) -> u8 {
        self.operand_indices.get_bit(BIT_ZEROREG_VAL) as u8
    }

    pub fn lock_ok(&self) -> bool {
        self.operand_indices.get_bit(BIT_LOCK)
    }

    pub fn vsib(&self) -> bool {
        self.operand_indices.get_bit(BIT_VSIB)
    }

    /// 2-bit size selector for the given operand source; indexes
    /// `[fix1, fix2, op_size, op_size_alt]`.
    pub fn size_sel(&self, pos: usize) -> usize {
        self.operand_sizes.get_bits(pos..pos + 2) as usize
    }

    /// Whether an 8-bit immediate keeps width 1 instead of the operand
    /// size.
    pub fn imm8_sized_byte(&self) -> bool {
        self.operand_sizes.get_bit(SZ_IMM)
    }

    pub fn size_fix1(&self) -> u8 {
        self.operand_sizes.get_bits(SZ_FIX1..SZ_FIX1 + 3) as u8
    }

    pub fn size_fix2(&self) -> u8 {
        self.operand_sizes.get_bits(SZ_FIX2..SZ_FIX2 + 2) as u8 + 1
    }

    /// Whether the decoded record reports a variable operand width.
    pub fn instr_width(&self) -> bool {
        self.operand_sizes.get_bit(BIT_INSTR_WIDTH)
    }

    /// Register-file tag of the r/m operand (register form).
    pub fn regty_modrm(&self) -> u8 {
        self.reg_types.get_bits(RT_MODRM..RT_MODRM + 3) as u8
    }

    /// Register-file tag of the reg operand.
    pub fn regty_modreg(&self) -> u8 {
        self.reg_types.get_bits(RT_MODREG..RT_MODREG + 3) as u8
    }

    /// Register file of the vvvv operand.
    pub fn regty_vexreg(&self) -> u8 {
        self.reg_types.get_bits(RT_VEXREG..RT_VEXREG + 2) as u8
    }

    pub fn evex_sae(&self) -> bool {
        self.reg_types.get_bit(BIT_EVEX_SAE)
    }

    pub fn evex_er(&self) -> bool {
        self.reg_types.get_bit(BIT_EVEX_ER)
    }

    /// Broadcast element is 16-bit (FP16 forms) instead of the
    /// REX.W-selected 32/64-bit.
    pub fn evex_bcst16(&self) -> bool {
        self.reg_types.get_bit(BIT_EVEX_BCST16)
    }

    /// Base operand-size policy code.
    pub fn opsize(&self) -> u8 {
        self.reg_types.get_bits(OPSIZE..OPSIZE + 3) as u8
    }

    /// Whether a ModR/M byte is consumed from the byte stream.
    pub fn has_modrm_byte(&self) -> bool {
        self.reg_types.get_bit(BIT_MODRM)
    }

    /// Whether a 66h prefix is ignored for operand sizing.
    pub fn ign66(&self) -> bool {
        self.reg_types.get_bit(BIT_IGN66)
    }
}
