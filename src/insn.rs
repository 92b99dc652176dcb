//! The decoded-instruction record and its operand model.

use bitflags::bitflags;

use crate::mnemonic::Mnemonic;

/// Register index sentinel: no register (empty memory base/index slot,
/// no segment override).
pub const REG_NONE: u8 = 0x3f;
/// Register index sentinel: the instruction pointer (RIP-relative
/// memory base).
pub const REG_IP: u8 = 0x20;

/// Segment register indices, in hardware encoding order.
pub const REG_ES: u8 = 0;
pub const REG_CS: u8 = 1;
pub const REG_SS: u8 = 2;
pub const REG_DS: u8 = 3;
pub const REG_FS: u8 = 4;
pub const REG_GS: u8 = 5;

bitflags! {
    /// Per-instruction flags.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct InsnFlags: u8 {
        /// F0h prefix, validated against the descriptor.
        const LOCK = 1 << 0;
        /// F3h prefix.
        const REP = 1 << 1;
        /// F2h prefix.
        const REPNZ = 1 << 2;
        /// Instruction was decoded in 64-bit mode.
        const MODE64 = 1 << 3;
    }
}

numeric_enum_macro::numeric_enum! {
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// What an operand slot holds.
    pub enum OpKind {
        /// Empty slot.
        None = 0,
        /// A register, identified by index and register file.
        Reg = 1,
        /// A memory reference.
        Mem = 2,
        /// An EVEX broadcast memory reference (one element, replicated).
        MemBcst = 3,
        /// An immediate (value in [`Instruction::immediate`]).
        Imm = 4,
        /// A PC-relative offset that was not resolved to an absolute
        /// target because the caller passed address 0.
        Off = 5,
    }
}

impl Default for OpKind {
    fn default() -> Self {
        OpKind::None
    }
}

numeric_enum_macro::numeric_enum! {
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Register file a register operand refers to.
    ///
    /// The numbering of the first eight entries matches the 3-bit
    /// register-file tags in the instruction descriptors.
    pub enum RegFile {
        /// Vector registers (XMM/YMM/ZMM).
        Vec = 0,
        /// General-purpose registers, low-byte view for byte operands.
        Gpl = 1,
        /// General-purpose high-byte registers (AH/CH/DH/BH).
        Gph = 2,
        /// Segment registers.
        Seg = 3,
        /// x87 floating-point stack registers.
        Fpu = 4,
        /// MMX registers.
        Mmx = 5,
        /// The instruction pointer.
        Ip = 6,
        /// AVX-512 opmask registers.
        Mask = 7,
        /// Control registers.
        Cr = 8,
        /// Debug registers.
        Dr = 9,
    }
}

/// One decoded operand slot.
///
/// `size` is a width code: 1 = byte, 2 = word, 3 = dword, 4 = qword,
/// 5/6/7 = 128/256/512-bit; 0 = no inherent width (e.g. LEA sources).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operand {
    pub(crate) kind: OpKind,
    pub(crate) size: u8,
    pub(crate) reg: u8,
    pub(crate) misc: u8,
}

impl Operand {
    /// What this slot holds.
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// True for an unused slot.
    pub fn is_none(&self) -> bool {
        self.kind == OpKind::None
    }

    /// Encoded width code (see the type-level docs).
    pub fn size_code(&self) -> u8 {
        self.size
    }

    /// Operand width in bytes, or 0 when it has no inherent width.
    pub fn byte_size(&self) -> u16 {
        match self.size {
            0 => 0,
            s => 1 << (s - 1),
        }
    }

    /// Register index: the operand register for [`OpKind::Reg`], the
    /// base register (possibly [`REG_NONE`] or [`REG_IP`]) for memory
    /// operands.
    pub fn reg(&self) -> u8 {
        self.reg
    }

    /// Register file of a [`OpKind::Reg`] operand.
    pub fn reg_file(&self) -> Option<RegFile> {
        match self.kind {
            OpKind::Reg => RegFile::try_from(self.misc).ok(),
            _ => None,
        }
    }

    /// Index register of a memory operand, or [`REG_NONE`].
    pub fn mem_index(&self) -> u8 {
        self.misc & 0x3f
    }

    /// Scale exponent of a memory operand (0..=3; multiply the index by
    /// `1 << scale`).
    pub fn mem_scale(&self) -> u8 {
        self.misc >> 6
    }
}

/// A fully decoded instruction.
///
/// Produced by [`decode`](crate::decode); the default value is a zeroed
/// record. All fields are plain data, so records are `Copy` and can be
/// compared for equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Instruction {
    pub(crate) mnemonic: Mnemonic,
    pub(crate) flags: InsnFlags,
    // Low 6 bits: segment override register or REG_NONE. Top 2 bits:
    // log2 of the EVEX broadcast element size when broadcasting.
    pub(crate) segment: u8,
    pub(crate) addrsz: u8,
    pub(crate) operandsz: u8,
    pub(crate) size: u8,
    pub(crate) evex: u16,
    pub(crate) operands: [Operand; 4],
    pub(crate) disp: i64,
    pub(crate) imm: i64,
    pub(crate) address: u64,
}

impl Instruction {
    /// Instruction kind.
    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    /// Number of bytes the instruction occupies (1..=15).
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Prefix and mode flags.
    pub fn flags(&self) -> InsnFlags {
        self.flags
    }

    /// Whether a validated LOCK prefix was present.
    pub fn has_lock(&self) -> bool {
        self.flags.contains(InsnFlags::LOCK)
    }

    /// Whether an F3h (REP) prefix was present.
    pub fn has_rep(&self) -> bool {
        self.flags.contains(InsnFlags::REP)
    }

    /// Whether an F2h (REPNZ) prefix was present.
    pub fn has_repnz(&self) -> bool {
        self.flags.contains(InsnFlags::REPNZ)
    }

    /// Effective segment-override register, or [`REG_NONE`].
    pub fn segment(&self) -> u8 {
        self.segment & 0x3f
    }

    /// Log2 of the broadcast element size in bytes; meaningful only
    /// when an operand is [`OpKind::MemBcst`].
    pub fn broadcast_size_log2(&self) -> u8 {
        self.segment >> 6
    }

    /// Effective address-size code: 1 = 16-bit, 2 = 32-bit, 3 = 64-bit.
    pub fn address_size_code(&self) -> u8 {
        self.addrsz
    }

    /// Operand-size code for variable-width instructions (1 = word,
    /// 2 = dword, 3 = qword); 0 when the instruction width is fixed.
    pub fn operand_size_code(&self) -> u8 {
        self.operandsz
    }

    /// Compressed EVEX side-info; 0 iff no EVEX prefix was present.
    pub fn evex(&self) -> u16 {
        self.evex
    }

    /// EVEX opmask register index (0 = unmasked).
    pub fn evex_mask(&self) -> u8 {
        (self.evex & 0x07) as u8
    }

    /// Whether EVEX zeroing-masking was selected.
    pub fn evex_zeroing(&self) -> bool {
        self.evex & 0x80 != 0
    }

    /// EVEX static rounding-control bits, when embedded rounding is in
    /// effect.
    pub fn evex_rounding(&self) -> u8 {
        ((self.evex >> 5) & 0x03) as u8
    }

    /// Displacement of a memory operand, or the absolute address of a
    /// moffs operand.
    pub fn displacement(&self) -> i64 {
        self.disp
    }

    /// Immediate value; for resolved PC-relative operands this is the
    /// absolute branch target.
    pub fn immediate(&self) -> i64 {
        self.imm
    }

    /// Instruction address the caller passed in.
    pub fn address(&self) -> u64 {
        self.address
    }

    /// One operand slot (0..=3).
    pub fn operand(&self, idx: usize) -> &Operand {
        &self.operands[idx]
    }

    /// All four operand slots; unused slots are zeroed.
    pub fn operands(&self) -> &[Operand; 4] {
        &self.operands
    }
}
