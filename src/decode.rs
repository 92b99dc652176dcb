//! The decoding routine: from raw bytes to a populated
//! [`Instruction`] record.
//!
//! Data flows in one direction: prefix scan, opcode-map walk,
//! descriptor interpretation (operand sizes, ModR/M and SIB,
//! EVEX controls, immediates), then a handful of final fixups. No step
//! revisits an earlier one, and nothing is read past the buffer or the
//! architectural 15-byte cap.

use crate::descriptor::{SZ_IMM, SZ_MODREG, SZ_MODRM, SZ_VEXREG, VEXREG_FILES};
use crate::insn::{Instruction, InsnFlags, OpKind, Operand, REG_IP, REG_NONE, RegFile};
use crate::mnemonic::Mnemonic;
use crate::prefix::{self, MAND_66, MAND_F2, MAND_F3, MAND_NONE, PrefixState, Rex};
use crate::table::{
    self, ENTRY_INSTR, ENTRY_NONE, ENTRY_TABLE8E, ENTRY_TABLE16, ENTRY_TABLE256,
    ENTRY_TABLE_PREFIX, ENTRY_TABLE_VEX,
};
use crate::{DecodeError, DecodeMode, MAX_INSTRUCTION_LEN, Result};

/// Decode a single instruction from the front of `buf`.
///
/// `address` is the instruction's address; when nonzero, PC-relative
/// immediates are resolved to absolute targets. On success the number
/// of bytes consumed (1..=15) is returned; on error the contents of
/// `instr` are unspecified.
pub fn decode(
    buf: &[u8],
    mode: DecodeMode,
    address: u64,
    instr: &mut Instruction,
) -> Result<usize> {
    match decode_inner(buf, mode, address, instr) {
        // When the buffer extends past the architectural cap, running
        // out of bytes means the instruction would be longer than 15
        // bytes, which no suffix can repair.
        Err(DecodeError::Partial) if buf.len() > MAX_INSTRUCTION_LEN => {
            Err(DecodeError::Undefined)
        }
        result => result,
    }
}

fn decode_inner(
    buf: &[u8],
    mode: DecodeMode,
    address: u64,
    instr: &mut Instruction,
) -> Result<usize> {
    let len = buf.len().min(MAX_INSTRUCTION_LEN);
    let buf = &buf[..len];

    let root = match mode {
        #[cfg(feature = "mode32")]
        DecodeMode::Bits32 => table::ROOT_OFFSET_32,
        #[cfg(feature = "mode64")]
        DecodeMode::Bits64 => table::ROOT_OFFSET_64,
        #[allow(unreachable_patterns)]
        _ => return Err(DecodeError::Internal),
    };

    *instr = Instruction::default();
    instr.segment = REG_NONE;
    instr.address = address;

    let mut st = PrefixState::new(mode);
    let mut off = prefix::scan(buf, mode, instr, &mut st);
    if off >= len {
        return Err(DecodeError::Partial);
    }

    // Opcode escapes, or a VEX/EVEX prefix folding the map selection.
    if buf[off] == 0x0f {
        if off + 1 >= len {
            return Err(DecodeError::Partial);
        }
        st.escape = match buf[off + 1] {
            0x38 => 2,
            0x3a => 3,
            _ => 1,
        };
        off += if st.escape >= 2 { 2 } else { 1 };
        // A REP prefix takes precedence over 66h as the mandatory
        // prefix; without an escape both stay ordinary prefixes.
        st.mandatory = if st.rep != MAND_NONE {
            st.rep
        } else if st.osz {
            MAND_66
        } else {
            MAND_NONE
        };
    } else if matches!(buf[off], 0xc4 | 0xc5 | 0x62) {
        if let Some(new_off) = prefix::parse_vex_evex(buf, len, off, mode, &mut st)? {
            off = new_off;
        }
    }

    // Walk the dispatch tables to the instruction descriptor.
    let (mut payload, mut kind) = table::walk(root, st.escape as usize);
    if kind == ENTRY_TABLE256 && off < len {
        let opcode = buf[off] as usize;
        off += 1;
        (payload, kind) = table::walk(payload, opcode);
    }
    if kind == ENTRY_TABLE_PREFIX {
        (payload, kind) = table::walk(payload, st.mandatory as usize);
    }
    // ModR/M-encoded opcode extensions peek at the byte without
    // consuming it.
    if kind == ENTRY_TABLE16 && off < len {
        let modrm = buf[off] as usize;
        let isreg = if modrm & 0xc0 == 0xc0 { 8 } else { 0 };
        (payload, kind) = table::walk(payload, ((modrm >> 3) & 7) | isreg);
        if kind == ENTRY_TABLE8E {
            (payload, kind) = table::walk(payload, modrm & 7);
        }
    }
    if kind == ENTRY_TABLE_VEX {
        let idx = (st.rex.contains(Rex::W) as usize) | ((st.vexl as usize) << 1);
        (payload, kind) = table::walk(payload, idx);
    }
    if kind != ENTRY_INSTR {
        return Err(if kind == ENTRY_NONE {
            DecodeError::Undefined
        } else {
            DecodeError::Partial
        });
    }
    let desc = table::descriptor(payload);

    instr.mnemonic = desc.mnemonic;
    instr.addrsz = st.addr_size;
    if st.rep == MAND_F3 {
        instr.flags |= InsnFlags::REP;
    } else if st.rep == MAND_F2 {
        instr.flags |= InsnFlags::REPNZ;
    }
    if mode == DecodeMode::Bits64 {
        instr.flags |= InsnFlags::MODE64;
    }

    let mut vexl = st.vexl;
    let mut vex_operand = st.vex_operand;

    if desc.has_modrm_byte() {
        if off >= len {
            return Err(DecodeError::Partial);
        }
        off += 1;
    }
    // Without a ModR/M byte the opcode's low bits stand in for rm and
    // the register form is forced (opcode-embedded registers).
    let op_byte = buf[off - 1] | if desc.has_modrm_byte() { 0 } else { 0xc0 };

    if st.evex != 0 {
        // Gather/scatter requires a mask and rejects zeroing.
        if desc.vsib() && (st.evex & 0x07 == 0 || st.evex & 0x80 != 0) {
            return Err(DecodeError::Undefined);
        }
        if !desc.evex_mask() && st.evex & 0x87 != 0 {
            return Err(DecodeError::Undefined);
        }
        // Zeroing without a mask register; hardware rejects this.
        if st.evex & 0x87 == 0x80 {
            return Err(DecodeError::Undefined);
        }
        if st.evex & 0x10 != 0 && op_byte & 0xc0 == 0xc0 {
            // EVEX.b on a register form selects SAE/rounding.
            if !desc.evex_sae() {
                return Err(DecodeError::Undefined);
            }
            vexl = 2;
            instr.evex = if desc.evex_er() {
                st.evex
            } else {
                (st.evex & 0x87) | 0x60 | 0x100
            };
        } else {
            if vexl == 3 {
                return Err(DecodeError::Undefined);
            }
            instr.evex = (st.evex & 0x87) | 0x100;
        }
        if desc.vsib() {
            // EVEX.V' extends the SIB index, not vvvv.
            vex_operand &= 0x0f;
        }
    }

    // Base operand size and the per-operand size table.
    let opsize_code = desc.opsize();
    let op_size;
    let mut op_size_alt = 0;
    if opsize_code & 4 == 0 {
        op_size = if opsize_code == 1 {
            1
        } else if mode == DecodeMode::Bits64 {
            if st.rex.contains(Rex::W) || opsize_code == 3 {
                4
            } else if st.osz && !desc.ign66() {
                2
            } else if opsize_code != 0 {
                4
            } else {
                3
            }
        } else if st.osz && !desc.ign66() {
            2
        } else {
            3
        };
    } else {
        op_size = 5 + vexl;
        op_size_alt = op_size - (opsize_code & 3);
    }
    let sizes = [desc.size_fix1(), desc.size_fix2(), op_size, op_size_alt];

    if matches!(instr.mnemonic, Mnemonic::MovCr | Mnemonic::MovDr) {
        // MOV to/from control and debug registers ignores mod and is
        // register-only on both sides.
        let reg_idx =
            ((op_byte >> 3) & 7) | if st.rex.contains(Rex::R) { 8 } else { 0 };
        if instr.mnemonic == Mnemonic::MovCr {
            // Only CR0, CR2, CR3, CR4 and CR8 exist.
            if (0x011d_u32 >> reg_idx) & 1 == 0 {
                return Err(DecodeError::Undefined);
            }
        } else if st.rex.contains(Rex::R) {
            return Err(DecodeError::Undefined);
        }
        let file = if instr.mnemonic == Mnemonic::MovCr {
            RegFile::Cr
        } else {
            RegFile::Dr
        };
        instr.operands[desc.modreg_idx()] = Operand {
            kind: OpKind::Reg,
            size: op_size,
            reg: reg_idx,
            misc: file as u8,
        };
        instr.operands[desc.modrm_idx()] = Operand {
            kind: OpKind::Reg,
            size: op_size,
            reg: (op_byte & 7) | if st.rex.contains(Rex::B) { 8 } else { 0 },
            misc: RegFile::Gpl as u8,
        };
    } else {
        if desc.has_modreg_op() {
            let reg_ty = desc.regty_modreg();
            let mut reg_idx = (op_byte >> 3) & 7;
            if reg_ty < 2 {
                if st.rex.contains(Rex::R) {
                    reg_idx += 8;
                }
            } else if reg_ty == RegFile::Mask as u8
                && (st.rex.contains(Rex::R) || st.evex & 0x80 != 0)
            {
                // REX.R on a mask destination, or zeroing into a mask.
                return Err(DecodeError::Undefined);
            }
            if reg_ty == RegFile::Vec as u8 {
                if st.rex.contains(Rex::RR) {
                    reg_idx += 16;
                }
            } else if st.rex.contains(Rex::RR) {
                return Err(DecodeError::Undefined);
            }
            instr.operands[desc.modreg_idx()] = Operand {
                kind: OpKind::Reg,
                size: sizes[desc.size_sel(SZ_MODREG)],
                reg: reg_idx,
                misc: reg_ty,
            };
        }

        if desc.has_modrm_op() {
            let idx = desc.modrm_idx();
            let size = sizes[desc.size_sel(SZ_MODRM)];
            let rm = op_byte & 7;
            if op_byte >= 0xc0 {
                let reg_ty = desc.regty_modrm();
                let mut reg_idx = rm;
                if reg_ty < 2 && st.rex.contains(Rex::B) {
                    reg_idx += 8;
                }
                if st.evex != 0 && reg_ty == RegFile::Vec as u8 && st.rex.contains(Rex::X) {
                    reg_idx += 16;
                }
                instr.operands[idx] = Operand {
                    kind: OpKind::Reg,
                    size,
                    reg: reg_idx,
                    misc: reg_ty,
                };
            } else {
                let mod_bits = op_byte & 0xc0;
                let vsib = desc.vsib();
                let mut base = rm;
                let misc;
                if rm == 4 {
                    if off >= len {
                        return Err(DecodeError::Partial);
                    }
                    let sib = buf[off];
                    off += 1;
                    let scale = sib & 0xc0;
                    let mut index = ((sib >> 3) & 7)
                        | if st.rex.contains(Rex::X) { 8 } else { 0 };
                    base = sib & 7;
                    if !vsib && index == 4 {
                        // An index of 4 encodes "no index".
                        index = REG_NONE;
                    }
                    if vsib && st.evex != 0 && st.evex & 0x08 == 0 {
                        // EVEX.V' is the fifth index bit for VSIB.
                        index |= 0x10;
                    }
                    misc = scale | index;
                } else {
                    // VSIB requires a SIB byte.
                    if vsib {
                        return Err(DecodeError::Undefined);
                    }
                    misc = REG_NONE;
                }

                // Zeroing-masking cannot target memory.
                if st.evex & 0x80 != 0 && idx == 0 {
                    return Err(DecodeError::Undefined);
                }

                let reg = if mod_bits == 0 && rm == 5 && mode == DecodeMode::Bits64 {
                    REG_IP
                } else if mod_bits == 0 && base == 5 {
                    REG_NONE
                } else {
                    base | if st.rex.contains(Rex::B) { 8 } else { 0 }
                };

                let mut disp_scale = 0u32;
                let kind;
                if st.evex & 0x10 != 0 {
                    if !desc.evex_bcst() {
                        return Err(DecodeError::Undefined);
                    }
                    disp_scale = if desc.evex_bcst16() {
                        1
                    } else if st.rex.contains(Rex::W) {
                        3
                    } else {
                        2
                    };
                    instr.segment |= (disp_scale as u8) << 6;
                    kind = OpKind::MemBcst;
                } else {
                    if st.evex != 0 {
                        // Compressed disp8 scales by the operand size.
                        disp_scale = size.saturating_sub(1) as u32;
                    }
                    kind = OpKind::Mem;
                }

                if op_byte & 0x40 != 0 {
                    if off + 1 > len {
                        return Err(DecodeError::Partial);
                    }
                    instr.disp = ((buf[off] as i8) as i64) << disp_scale;
                    off += 1;
                } else if op_byte & 0x80 != 0 || (mod_bits == 0 && base == 5) {
                    if off + 4 > len {
                        return Err(DecodeError::Partial);
                    }
                    instr.disp = load_le(&buf[off..off + 4]) as u32 as i32 as i64;
                    off += 4;
                } else {
                    instr.disp = 0;
                }

                instr.operands[idx] = Operand {
                    kind,
                    size,
                    reg,
                    misc,
                };
            }
        }

        if desc.has_vexreg_op() {
            if mode == DecodeMode::Bits32 {
                vex_operand &= 0x7;
            }
            let tag = desc.regty_vexreg();
            if tag == 2 && vex_operand >= 8 {
                // Only eight opmask registers exist.
                return Err(DecodeError::Undefined);
            }
            instr.operands[desc.vexreg_idx()] = Operand {
                kind: OpKind::Reg,
                size: sizes[desc.size_sel(SZ_VEXREG)],
                reg: vex_operand | desc.zeroreg_val(),
                misc: VEXREG_FILES[tag as usize] as u8,
            };
        } else if vex_operand != 0 {
            return Err(DecodeError::Undefined);
        }

        // Immediate controls: 1 = constant 1, 2 = moffs, 3 = register
        // in imm8[7:4], 4/6 = imm8/rel8, 5/7 = operand-sized imm/rel.
        let imm_control = desc.imm_control();
        match imm_control {
            0 => {}
            1 => {
                instr.imm = 1;
                instr.operands[desc.imm_idx()] = Operand {
                    kind: OpKind::Imm,
                    size: 1,
                    ..Operand::default()
                };
            }
            2 => {
                let moffsz = 1usize << st.addr_size;
                if off + moffsz > len {
                    return Err(DecodeError::Partial);
                }
                instr.disp = load_le(&buf[off..off + moffsz]) as i64;
                off += moffsz;
                instr.operands[desc.imm_idx()] = Operand {
                    kind: OpKind::Mem,
                    size: op_size,
                    reg: REG_NONE,
                    misc: REG_NONE,
                };
            }
            3 => {
                if off + 1 > len {
                    return Err(DecodeError::Partial);
                }
                let mut raw = buf[off];
                off += 1;
                if mode == DecodeMode::Bits32 {
                    raw &= 0x7f;
                }
                instr.imm = (raw & 0x0f) as i64;
                instr.operands[desc.imm_idx()] = Operand {
                    kind: OpKind::Reg,
                    size: op_size,
                    reg: raw >> 4,
                    misc: RegFile::Vec as u8,
                };
            }
            _ => {
                let imm_byte = imm_control & 1 == 0;
                let imm_offset = imm_control & 2 != 0;
                let idx = desc.imm_idx();
                let size;
                if imm_byte {
                    if off + 1 > len {
                        return Err(DecodeError::Partial);
                    }
                    instr.imm = buf[off] as i8 as i64;
                    off += 1;
                    size = if desc.imm8_sized_byte() { 1 } else { op_size };
                } else {
                    size = sizes[desc.size_sel(SZ_IMM)];
                    let imm_size: usize = match instr.mnemonic {
                        Mnemonic::Ret | Mnemonic::Retf => 2,
                        Mnemonic::JmpF | Mnemonic::CallF => ((1usize << op_size) >> 1) + 2,
                        Mnemonic::Enter => 3,
                        Mnemonic::MovAbs => (1usize << op_size) >> 1,
                        _ => {
                            if op_size == 2 {
                                2
                            } else {
                                4
                            }
                        }
                    };
                    if off + imm_size > len {
                        return Err(DecodeError::Partial);
                    }
                    let raw = load_le(&buf[off..off + imm_size]);
                    instr.imm = match imm_size {
                        2 => raw as u16 as i16 as i64,
                        4 => raw as u32 as i32 as i64,
                        8 => raw as i64,
                        // 3-byte ENTER and far pointers stay unsigned.
                        _ => raw as i64,
                    };
                    off += imm_size;
                }
                let mut kind = OpKind::Imm;
                if imm_offset {
                    if instr.address != 0 {
                        instr.imm = instr
                            .imm
                            .wrapping_add(instr.address.wrapping_add(off as u64) as i64);
                    } else {
                        kind = OpKind::Off;
                    }
                }
                instr.operands[idx] = Operand {
                    kind,
                    size,
                    ..Operand::default()
                };
            }
        }

        if instr.mnemonic == Mnemonic::XchgNop {
            // Only 90, 48 90 and 66 90 are true NOPs.
            if instr.operands[0].reg == 0 && instr.operands[1].reg == 0 {
                instr.operands[0] = Operand::default();
                instr.operands[1] = Operand::default();
                instr.mnemonic = Mnemonic::Nop;
            } else {
                instr.mnemonic = Mnemonic::Xchg;
            }
        }

        if instr.mnemonic == Mnemonic::ThreeDNow {
            // The imm8 suffix opcode must be present in the mnemonic
            // bitmap.
            let opc = instr.imm as u8;
            if opc & 0x40 != 0 {
                return Err(DecodeError::Undefined);
            }
            let map: u64 = if opc & 0x80 != 0 {
                0x88d1_44d1_44d1_4400
            } else {
                0x3000_3000
            };
            if (map >> (opc & 0x3f)) & 1 == 0 {
                return Err(DecodeError::Undefined);
            }
        }
    }

    if st.lock {
        if !desc.lock_ok() || instr.operands[0].kind != OpKind::Mem {
            return Err(DecodeError::Undefined);
        }
        instr.flags |= InsnFlags::LOCK;
    }

    // Without REX, byte registers 4..=7 name AH/CH/DH/BH.
    if op_size == 1 || matches!(instr.mnemonic, Mnemonic::Movsx | Mnemonic::Movzx) {
        if !st.rex.contains(Rex::PRESENT) {
            for op in instr.operands.iter_mut().take(2) {
                if op.kind == OpKind::None {
                    break;
                }
                if op.kind == OpKind::Reg
                    && op.misc == RegFile::Gpl as u8
                    && op.size == 1
                    && op.reg >= 4
                {
                    op.misc = RegFile::Gph as u8;
                }
            }
        }
    }

    instr.size = off as u8;
    instr.operandsz = if desc.instr_width() { op_size - 1 } else { 0 };
    trace!("decoded {:?}, {} bytes", instr.mnemonic, off);

    Ok(off)
}

/// Convenience wrapper returning the record by value.
pub fn decode_one(buf: &[u8], mode: DecodeMode, address: u64) -> Result<Instruction> {
    let mut instr = Instruction::default();
    decode(buf, mode, address, &mut instr)?;
    Ok(instr)
}

/// Little-endian load of up to eight bytes.
fn load_le(bytes: &[u8]) -> u64 {
    let mut value = 0u64;
    let mut idx = bytes.len();
    while idx > 0 {
        idx -= 1;
        value = value << 8 | bytes[idx] as u64;
    }
    value
}
