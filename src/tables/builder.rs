//! Compile-time table linker.
//!
//! Packs the declarative instruction registry into the dispatch-table
//! blob the decoder walks: one `[u16]` array holding every inner table
//! (roots, 256-way opcode maps, mandatory-prefix tables, ModR/M group
//! tables and their 8-way extensions, VEX W/L tables) plus the packed
//! descriptor array. Everything runs in const eval, so a malformed
//! registry (conflicting slots, out-of-range fields) fails the build
//! instead of misdecoding at run time.

use crate::descriptor::{
    BIT_EVEX_BCST, BIT_EVEX_BCST16, BIT_EVEX_ER, BIT_EVEX_MASK, BIT_EVEX_SAE, BIT_IGN66,
    BIT_INSTR_WIDTH, BIT_LOCK, BIT_MODRM, BIT_VSIB, BIT_ZEROREG_VAL, IDX_IMM, IDX_MODREG,
    IDX_MODRM, IDX_VEXREG, IMM_CONTROL, InstrDesc, OPSIZE, RT_MODREG, RT_MODRM, RT_VEXREG,
    SZ_FIX1, SZ_FIX2, SZ_IMM, SZ_MODREG, SZ_MODRM, SZ_VEXREG,
};
use crate::mnemonic::Mnemonic;
use crate::table::{
    ENTRY_INSTR, ENTRY_MASK, ENTRY_TABLE8E, ENTRY_TABLE16, ENTRY_TABLE256, ENTRY_TABLE_PREFIX,
    ENTRY_TABLE_VEX,
};
use crate::tables::registry;

pub(crate) const TABLE_CAP: usize = 16 * 1024;
pub(crate) const DESC_CAP: usize = 640;

// Mode availability bits.
pub(crate) const M32: u8 = 1 << 0;
pub(crate) const M64: u8 = 1 << 1;
pub(crate) const MBOTH: u8 = M32 | M64;

// Root-table steps (the opcode-escape numbering of the decoder).
pub(crate) const MAP_1B: u8 = 0;
pub(crate) const MAP_0F: u8 = 1;
pub(crate) const MAP_38: u8 = 2;
pub(crate) const MAP_3A: u8 = 3;
pub(crate) const VEX_0F: u8 = 1 | 4;
pub(crate) const VEX_38: u8 = 2 | 4;
pub(crate) const VEX_3A: u8 = 3 | 4;
pub(crate) const EVEX_0F: u8 = 1 | 8;
pub(crate) const EVEX_38: u8 = 2 | 8;
pub(crate) const EVEX_3A: u8 = 3 | 8;
pub(crate) const EVEX_M5: u8 = 5 | 8;
const ROOT_SIZE: usize = 16;

// Mandatory-prefix slots; ANY means "no prefix table at this opcode".
pub(crate) const PNONE: u8 = 0;
pub(crate) const P66: u8 = 1;
pub(crate) const PF3: u8 = 2;
pub(crate) const PF2: u8 = 3;
pub(crate) const PANY: u8 = 0xff;

// ModR/M group forms.
const FORM_NONE: u8 = 0;
const FORM_MEM: u8 = 1;
const FORM_REG: u8 = 2;
const FORM_BOTH: u8 = 3;
/// Not an opcode group: fill all eight memory-form slots (memory-only
/// encodings like LEA or MOVNTI).
const FORM_MEM_ALL: u8 = 4;
/// Fill all eight register-form slots (register-only encodings).
const FORM_REG_ALL: u8 = 5;

const GRP_NONE: u8 = 0xff;
const RM_NONE: u8 = 0xff;

// Operand sources.
const SRC_NONE: u8 = 0;
const SRC_RM: u8 = 1;
const SRC_REG: u8 = 2;
const SRC_VVVV: u8 = 3;
const SRC_IMM: u8 = 4;

// Per-operand size selectors, indexing [fix1, fix2, op_size, alt].
pub(crate) const S_FIX1: u8 = 0;
pub(crate) const S_FIX2: u8 = 1;
pub(crate) const S_OP: u8 = 2;

// VEX W/L table fill masks; an entry index is W | L << 1. Combine by
// intersection, e.g. `W0 & L1`.
pub(crate) const W0: u8 = 0x55;
pub(crate) const W1: u8 = 0xaa;
pub(crate) const L0: u8 = 0x03;
pub(crate) const L1: u8 = 0x0c;

// Register-file tags (descriptor numbering).
pub(crate) const RF_VEC: u8 = 0;
pub(crate) const RF_GPL: u8 = 1;
pub(crate) const RF_SEG: u8 = 3;
pub(crate) const RF_FPU: u8 = 4;
pub(crate) const RF_MMX: u8 = 5;
pub(crate) const RF_MASK: u8 = 7;

// Flag bits of `InsnDef::flags`.
const DF_LOCK: u16 = 1 << 0;
const DF_IGN66: u16 = 1 << 1;
const DF_MASK: u16 = 1 << 2;
const DF_BCST: u16 = 1 << 3;
const DF_BCST16: u16 = 1 << 4;
const DF_SAE: u16 = 1 << 5;
const DF_ER: u16 = 1 << 6;
const DF_VSIB: u16 = 1 << 7;
const DF_CL: u16 = 1 << 8;
const DF_WIDTH: u16 = 1 << 9;
const DF_MODRM: u16 = 1 << 10;
const DF_OPCODE_REG: u16 = 1 << 11;

#[derive(Clone, Copy)]
struct OpSpec {
    src: u8,
    sel: u8,
    file: u8,
}

const OP_NONE: OpSpec = OpSpec {
    src: SRC_NONE,
    sel: 0,
    file: 0,
};

/// One registry entry: where the encoding lives in the opcode maps and
/// what its descriptor says.
#[derive(Clone, Copy)]
pub(crate) struct InsnDef {
    map: u8,
    opcode: u8,
    span: u8,
    modes: u8,
    prefix: u8,
    group: u8,
    group_form: u8,
    ext_rm: u8,
    wl: u8,
    mnemonic: Mnemonic,
    ops: [OpSpec; 4],
    imm_ctl: u8,
    opsize: u8,
    fix1: u8,
    fix2: u8,
    flags: u16,
}

/// Start a registry entry; defaults: both modes, no mandatory-prefix
/// split, no group, no W/L split, no operands.
pub(crate) const fn i(map: u8, opcode: u8, mnemonic: Mnemonic) -> InsnDef {
    InsnDef {
        map,
        opcode,
        span: 1,
        modes: MBOTH,
        prefix: PANY,
        group: GRP_NONE,
        group_form: FORM_NONE,
        ext_rm: RM_NONE,
        wl: 0,
        mnemonic,
        ops: [OP_NONE; 4],
        imm_ctl: 0,
        opsize: 0,
        fix1: 0,
        fix2: 1,
        flags: 0,
    }
}

impl InsnDef {
    pub(crate) const fn span(mut self, n: u8) -> Self {
        self.span = n;
        self
    }

    pub(crate) const fn only32(mut self) -> Self {
        self.modes = M32;
        self
    }

    pub(crate) const fn only64(mut self) -> Self {
        self.modes = M64;
        self
    }

    pub(crate) const fn prefix(mut self, p: u8) -> Self {
        assert!(self.map != MAP_1B, "one-byte opcodes take no mandatory prefix");
        self.prefix = p;
        self
    }

    /// Opcode group: ModR/M.reg extension, both forms.
    pub(crate) const fn grp(mut self, reg: u8) -> Self {
        self.group = reg;
        self.group_form = FORM_BOTH;
        self
    }

    /// Opcode group, memory form only.
    pub(crate) const fn grp_mem(mut self, reg: u8) -> Self {
        self.group = reg;
        self.group_form = FORM_MEM;
        self
    }

    /// Opcode group, register form only.
    pub(crate) const fn grp_reg(mut self, reg: u8) -> Self {
        self.group = reg;
        self.group_form = FORM_REG;
        self
    }

    /// Register-form group slot further split by ModR/M.rm.
    pub(crate) const fn ext(mut self, reg: u8, rm: u8) -> Self {
        self.group = reg;
        self.group_form = FORM_REG;
        self.ext_rm = rm;
        self
    }

    /// Memory-form ModR/M only (any reg value); register form is #UD.
    pub(crate) const fn mem_only(mut self) -> Self {
        self.group_form = FORM_MEM_ALL;
        self
    }

    /// Register-form ModR/M only (any reg value); memory form is #UD.
    pub(crate) const fn reg_only(mut self) -> Self {
        self.group_form = FORM_REG_ALL;
        self
    }

    /// Descend through a VEX W/L table, filling the masked entries.
    pub(crate) const fn wl(mut self, mask: u8) -> Self {
        assert!(mask != 0);
        self.wl = mask;
        self
    }

    const fn op(mut self, slot: usize, src: u8, sel: u8, file: u8) -> Self {
        assert!(self.ops[slot].src == SRC_NONE, "operand slot used twice");
        self.ops[slot] = OpSpec { src, sel, file };
        self
    }

    /// ModR/M r/m operand.
    pub(crate) const fn rm(self, slot: usize, sel: u8, file: u8) -> Self {
        self.op(slot, SRC_RM, sel, file)
    }

    /// ModR/M reg operand.
    pub(crate) const fn reg(self, slot: usize, sel: u8, file: u8) -> Self {
        self.op(slot, SRC_REG, sel, file)
    }

    /// (E)VEX.vvvv operand; on legacy encodings this materializes the
    /// implicit register 0 (rAX), or CL with [`Self::cl`].
    pub(crate) const fn vvvv(self, slot: usize, sel: u8, file: u8) -> Self {
        self.op(slot, SRC_VVVV, sel, file)
    }

    /// Immediate operand with the given control code.
    pub(crate) const fn imm(mut self, ctl: u8, slot: usize, sel: u8) -> Self {
        assert!(ctl != 0 && ctl < 8);
        self.imm_ctl = ctl;
        self.op(slot, SRC_IMM, sel, 0)
    }

    pub(crate) const fn lock(mut self) -> Self {
        self.flags |= DF_LOCK;
        self
    }

    pub(crate) const fn ign66(mut self) -> Self {
        self.flags |= DF_IGN66;
        self
    }

    /// EVEX masking allowed.
    pub(crate) const fn mask(mut self) -> Self {
        self.flags |= DF_MASK;
        self
    }

    /// EVEX broadcast allowed on the memory operand.
    pub(crate) const fn bcst(mut self) -> Self {
        self.flags |= DF_BCST;
        self
    }

    /// Broadcast element is 16-bit.
    pub(crate) const fn bcst16(mut self) -> Self {
        self.flags |= DF_BCST16;
        self
    }

    /// Suppress-all-exceptions supported (EVEX.b on register forms).
    pub(crate) const fn sae(mut self) -> Self {
        self.flags |= DF_SAE;
        self
    }

    /// Embedded rounding supported (implies SAE).
    pub(crate) const fn er(mut self) -> Self {
        self.flags |= DF_ER | DF_SAE;
        self
    }

    /// The memory operand uses a vector index (gather/scatter).
    pub(crate) const fn vsib(mut self) -> Self {
        self.flags |= DF_VSIB;
        self
    }

    /// The vvvv-slot implicit register defaults to CL instead of rAX.
    pub(crate) const fn cl(mut self) -> Self {
        self.flags |= DF_CL;
        self
    }

    /// Report the operand width in the decoded record.
    pub(crate) const fn width(mut self) -> Self {
        self.flags |= DF_WIDTH;
        self
    }

    /// Force a ModR/M byte even without ModR/M-sourced operands.
    pub(crate) const fn modrm(mut self) -> Self {
        self.flags |= DF_MODRM;
        self
    }

    /// The r/m operand register lives in the low opcode bits; no
    /// ModR/M byte is consumed.
    pub(crate) const fn opcode_reg(mut self) -> Self {
        self.flags |= DF_OPCODE_REG;
        self
    }

    pub(crate) const fn opsize(mut self, code: u8) -> Self {
        assert!(code < 8);
        self.opsize = code;
        self
    }

    pub(crate) const fn fix1(mut self, size_code: u8) -> Self {
        assert!(size_code < 8);
        self.fix1 = size_code;
        self
    }

    pub(crate) const fn fix2(mut self, size_code: u8) -> Self {
        assert!(size_code >= 1 && size_code <= 4);
        self.fix2 = size_code;
        self
    }
}

/// The fully linked output: dispatch blob, descriptors, root offsets.
pub(crate) struct Tables {
    pub table: [u16; TABLE_CAP],
    pub len: usize,
    pub descs: [InstrDesc; DESC_CAP],
    pub ndescs: usize,
    pub root32: usize,
    pub root64: usize,
}

pub(crate) const EMPTY_DESC: InstrDesc = InstrDesc {
    mnemonic: Mnemonic::Invalid,
    operand_indices: 0,
    operand_sizes: 0,
    reg_types: 0,
};

const fn vexreg_tag(file: u8) -> u16 {
    match file {
        RF_VEC => 0,
        RF_GPL => 1,
        RF_MASK => 2,
        RF_FPU => 3,
        _ => panic!("register file not addressable from vvvv"),
    }
}

/// Pack one registry entry into descriptor form.
const fn make_desc(d: &InsnDef) -> InstrDesc {
    let mut oi: u16 = 0;
    let mut os: u16 = 0;
    let mut rt: u16 = 0;

    let mut has_rm_or_reg = d.flags & DF_MODRM != 0;
    let mut slot = 0;
    while slot < 4 {
        let op = d.ops[slot];
        let idx = ((slot ^ 3) as u16) & 3;
        match op.src {
            SRC_RM => {
                assert!(slot <= 2, "r/m operand must live in slots 0..=2");
                oi |= idx << IDX_MODRM;
                os |= (op.sel as u16) << SZ_MODRM;
                rt |= (op.file as u16) << RT_MODRM;
                has_rm_or_reg = true;
            }
            SRC_REG => {
                assert!(slot <= 2, "reg operand must live in slots 0..=2");
                oi |= idx << IDX_MODREG;
                os |= (op.sel as u16) << SZ_MODREG;
                rt |= (op.file as u16) << RT_MODREG;
                has_rm_or_reg = true;
            }
            SRC_VVVV => {
                assert!(slot <= 2, "vvvv operand must live in slots 0..=2");
                oi |= idx << IDX_VEXREG;
                os |= (op.sel as u16) << SZ_VEXREG;
                rt |= vexreg_tag(op.file) << RT_VEXREG;
            }
            SRC_IMM => {
                oi |= idx << IDX_IMM;
                os |= (op.sel as u16) << SZ_IMM;
            }
            _ => {}
        }
        slot += 1;
    }

    oi |= (d.imm_ctl as u16) << IMM_CONTROL;
    if d.flags & DF_BCST != 0 {
        oi |= 1 << BIT_EVEX_BCST;
    }
    if d.flags & DF_MASK != 0 {
        oi |= 1 << BIT_EVEX_MASK;
    }
    if d.flags & DF_CL != 0 {
        oi |= 1 << BIT_ZEROREG_VAL;
    }
    if d.flags & DF_LOCK != 0 {
        oi |= 1 << BIT_LOCK;
    }
    if d.flags & DF_VSIB != 0 {
        oi |= 1 << BIT_VSIB;
    }

    os |= (d.fix1 as u16) << SZ_FIX1;
    os |= ((d.fix2 - 1) as u16) << SZ_FIX2;
    if d.flags & DF_WIDTH != 0 {
        os |= 1 << BIT_INSTR_WIDTH;
    }

    if d.flags & DF_SAE != 0 {
        rt |= 1 << BIT_EVEX_SAE;
    }
    if d.flags & DF_ER != 0 {
        rt |= 1 << BIT_EVEX_ER;
    }
    if d.flags & DF_BCST16 != 0 {
        rt |= 1 << BIT_EVEX_BCST16;
    }
    rt |= (d.opsize as u16) << OPSIZE;
    let modrm_byte = d.group_form != FORM_NONE
        || (has_rm_or_reg && d.flags & DF_OPCODE_REG == 0);
    if modrm_byte {
        rt |= 1 << BIT_MODRM;
    }
    if d.flags & DF_IGN66 != 0 {
        rt |= 1 << BIT_IGN66;
    }

    InstrDesc {
        mnemonic: d.mnemonic,
        operand_indices: oi,
        operand_sizes: os,
        reg_types: rt,
    }
}

const fn desc_eq(a: &InstrDesc, b: &InstrDesc) -> bool {
    a.mnemonic as u16 == b.mnemonic as u16
        && a.operand_indices == b.operand_indices
        && a.operand_sizes == b.operand_sizes
        && a.reg_types == b.reg_types
}

struct Linker {
    out: Tables,
}

impl Linker {
    const fn alloc(&mut self, size: usize) -> usize {
        // Table sizes are multiples of 4, keeping every base 4-aligned
        // so the payload survives the 3-bit kind packing.
        assert!(size % 4 == 0);
        assert!(self.out.len + size <= TABLE_CAP, "raise TABLE_CAP");
        let base = self.out.len;
        self.out.len += size;
        base
    }

    /// Get or create the child table behind `at`.
    const fn child(&mut self, at: usize, kind: u16, size: usize) -> usize {
        let entry = self.out.table[at];
        if entry == 0 {
            let base = self.alloc(size);
            self.out.table[at] = kind | ((base as u16) << 1);
            base
        } else {
            assert!(entry & ENTRY_MASK == kind, "registry slot kind conflict");
            ((entry & !ENTRY_MASK) >> 1) as usize
        }
    }

    const fn leaf(&mut self, at: usize, desc_idx: usize) {
        let entry = ENTRY_INSTR | ((desc_idx as u16) << 3);
        assert!(
            self.out.table[at] == 0 || self.out.table[at] == entry,
            "registry slot defined twice"
        );
        self.out.table[at] = entry;
    }

    const fn add_desc(&mut self, desc: InstrDesc) -> usize {
        let mut idx = 0;
        while idx < self.out.ndescs {
            if desc_eq(&self.out.descs[idx], &desc) {
                return idx;
            }
            idx += 1;
        }
        assert!(self.out.ndescs < DESC_CAP, "raise DESC_CAP");
        self.out.descs[self.out.ndescs] = desc;
        self.out.ndescs += 1;
        self.out.ndescs - 1
    }

    /// Terminal placement: optionally descend the W/L table, then leaf.
    const fn place(&mut self, at: usize, d: &InsnDef, desc_idx: usize) {
        if d.wl != 0 {
            let vex = self.child(at, ENTRY_TABLE_VEX, 8);
            let mut k = 0;
            while k < 8 {
                if d.wl >> k & 1 != 0 {
                    self.leaf(vex + k, desc_idx);
                }
                k += 1;
            }
        } else {
            self.leaf(at, desc_idx);
        }
    }

    const fn place_group(&mut self, at: usize, d: &InsnDef, desc_idx: usize) {
        if d.group_form == FORM_NONE {
            self.place(at, d, desc_idx);
            return;
        }
        let t16 = self.child(at, ENTRY_TABLE16, 16);
        match d.group_form {
            FORM_MEM => self.place(t16 + d.group as usize, d, desc_idx),
            FORM_REG => {
                let slot = t16 + 8 + d.group as usize;
                if d.ext_rm != RM_NONE {
                    let e8 = self.child(slot, ENTRY_TABLE8E, 8);
                    self.place(e8 + d.ext_rm as usize, d, desc_idx);
                } else {
                    self.place(slot, d, desc_idx);
                }
            }
            FORM_BOTH => {
                self.place(t16 + d.group as usize, d, desc_idx);
                self.place(t16 + 8 + d.group as usize, d, desc_idx);
            }
            FORM_MEM_ALL => {
                let mut r = 0;
                while r < 8 {
                    self.place(t16 + r, d, desc_idx);
                    r += 1;
                }
            }
            FORM_REG_ALL => {
                let mut r = 0;
                while r < 8 {
                    self.place(t16 + 8 + r, d, desc_idx);
                    r += 1;
                }
            }
            _ => panic!("bad group form"),
        }
    }

    const fn insert(&mut self, root: usize, d: &InsnDef) {
        let desc_idx = self.add_desc(make_desc(d));
        let map256 = self.child(root + d.map as usize, ENTRY_TABLE256, 256);
        let mut s = 0;
        while s < d.span as usize {
            let mut at = map256 + d.opcode as usize + s;
            if d.prefix != PANY {
                let pfx = self.child(at, ENTRY_TABLE_PREFIX, 4);
                at = pfx + d.prefix as usize;
            }
            self.place_group(at, d, desc_idx);
            s += 1;
        }
    }

    const fn build_tree(&mut self, mode: u8) -> usize {
        let root = self.alloc(ROOT_SIZE);
        let defs = registry::DEFS;
        let mut n = 0;
        while n < defs.len() {
            if defs[n].modes & mode != 0 {
                self.insert(root, &defs[n]);
            }
            n += 1;
        }
        root
    }
}

/// Link the registry into the final blob. Evaluated at compile time.
pub(crate) const fn build() -> Tables {
    let mut linker = Linker {
        out: Tables {
            table: [0; TABLE_CAP],
            len: 0,
            descs: [EMPTY_DESC; DESC_CAP],
            ndescs: 0,
            root32: usize::MAX,
            root64: usize::MAX,
        },
    };
    if cfg!(feature = "mode64") {
        linker.out.root64 = linker.build_tree(M64);
    }
    if cfg!(feature = "mode32") {
        linker.out.root32 = linker.build_tree(M32);
    }
    linker.out
}
