//! The instruction registry: declarative input to the table linker.
//!
//! One entry per encoding. `i(map, opcode, mnemonic)` starts an entry;
//! chained modifiers place it (mandatory prefix, ModR/M group, W/L
//! split, mode availability) and describe its descriptor (operand
//! slots, sizes, register files, flags). Operand slots are listed in
//! destination-first order.
//!
//! Immediate-control codes: 1 = constant 1, 2 = moffs, 3 = register in
//! imm8[7:4], 4 = 8-bit immediate, 5 = operand-sized immediate,
//! 6 = 8-bit relative offset, 7 = operand-sized relative offset.

use super::builder::{
    EVEX_0F, EVEX_38, EVEX_M5, InsnDef, L0, L1, MAP_0F, MAP_1B, MAP_38, MAP_3A, P66, PF2, PF3,
    PNONE, RF_GPL, RF_MASK, RF_MMX, RF_SEG, RF_VEC, S_FIX1, S_FIX2, S_OP, VEX_0F, VEX_38, VEX_3A,
    W0, W1, i,
};
use crate::mnemonic::Mnemonic::*;

pub(crate) const DEFS: &[InsnDef] = &[
    // ---- One-byte map: ALU grid ------------------------------------
    // For each of the eight classic ALU ops: Eb,Gb / Ev,Gv / Gb,Eb /
    // Gv,Ev / AL,Ib / rAX,Iz.
    i(MAP_1B, 0x00, Add).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0x01, Add).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0x02, Add).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x03, Add).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x04, Add).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x05, Add).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0x08, Or).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0x09, Or).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0x0a, Or).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x0b, Or).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x0c, Or).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x0d, Or).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0x10, Adc).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0x11, Adc).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0x12, Adc).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x13, Adc).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x14, Adc).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x15, Adc).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0x18, Sbb).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0x19, Sbb).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0x1a, Sbb).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x1b, Sbb).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x1c, Sbb).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x1d, Sbb).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0x20, And).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0x21, And).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0x22, And).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x23, And).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x24, And).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x25, And).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0x28, Sub).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0x29, Sub).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0x2a, Sub).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x2b, Sub).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x2c, Sub).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x2d, Sub).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0x30, Xor).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0x31, Xor).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0x32, Xor).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x33, Xor).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x34, Xor).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x35, Xor).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0x38, Cmp).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x39, Cmp).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x3a, Cmp).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x3b, Cmp).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x3c, Cmp).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x3d, Cmp).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    // ---- One-byte map: BCD adjust (32-bit only) --------------------
    i(MAP_1B, 0x27, Daa).only32(),
    i(MAP_1B, 0x2f, Das).only32(),
    i(MAP_1B, 0x37, Aaa).only32(),
    i(MAP_1B, 0x3f, Aas).only32(),
    // 40..4f: INC/DEC with opcode-embedded register; REX in 64-bit.
    i(MAP_1B, 0x40, Inc).span(8).only32().opcode_reg().rm(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x48, Dec).span(8).only32().opcode_reg().rm(0, S_OP, RF_GPL).width(),
    // 50..5f: PUSH/POP r.
    i(MAP_1B, 0x50, Push).span(8).opcode_reg().rm(0, S_OP, RF_GPL).opsize(2).width(),
    i(MAP_1B, 0x58, Pop).span(8).opcode_reg().rm(0, S_OP, RF_GPL).opsize(2).width(),
    i(MAP_1B, 0x60, Pusha).only32().width(),
    i(MAP_1B, 0x61, Popa).only32().width(),
    i(MAP_1B, 0x63, Movsxd).only64().reg(0, S_OP, RF_GPL).rm(1, S_FIX1, RF_GPL).fix1(3).width(),
    i(MAP_1B, 0x68, Push).imm(5, 0, S_OP).opsize(2).width(),
    i(MAP_1B, 0x69, Imul).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).imm(5, 2, S_OP).width(),
    i(MAP_1B, 0x6a, Push).imm(4, 0, S_OP).opsize(2).width(),
    i(MAP_1B, 0x6b, Imul).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).imm(4, 2, S_FIX2).width(),
    i(MAP_1B, 0x6c, Ins).opsize(1),
    i(MAP_1B, 0x6d, Ins).width(),
    i(MAP_1B, 0x6e, Outs).opsize(1),
    i(MAP_1B, 0x6f, Outs).width(),
    // 70..7f: Jcc rel8.
    i(MAP_1B, 0x70, Jo).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x71, Jno).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x72, Jb).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x73, Jae).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x74, Je).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x75, Jne).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x76, Jbe).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x77, Ja).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x78, Js).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x79, Jns).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x7a, Jp).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x7b, Jnp).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x7c, Jl).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x7d, Jge).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x7e, Jle).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0x7f, Jg).imm(6, 0, S_OP).opsize(3).width(),
    // 80/81/83: immediate-form ALU group.
    i(MAP_1B, 0x80, Add).grp(0).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1).lock(),
    i(MAP_1B, 0x80, Or).grp(1).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1).lock(),
    i(MAP_1B, 0x80, Adc).grp(2).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1).lock(),
    i(MAP_1B, 0x80, Sbb).grp(3).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1).lock(),
    i(MAP_1B, 0x80, And).grp(4).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1).lock(),
    i(MAP_1B, 0x80, Sub).grp(5).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1).lock(),
    i(MAP_1B, 0x80, Xor).grp(6).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1).lock(),
    i(MAP_1B, 0x80, Cmp).grp(7).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0x81, Add).grp(0).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width().lock(),
    i(MAP_1B, 0x81, Or).grp(1).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width().lock(),
    i(MAP_1B, 0x81, Adc).grp(2).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width().lock(),
    i(MAP_1B, 0x81, Sbb).grp(3).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width().lock(),
    i(MAP_1B, 0x81, And).grp(4).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width().lock(),
    i(MAP_1B, 0x81, Sub).grp(5).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width().lock(),
    i(MAP_1B, 0x81, Xor).grp(6).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width().lock(),
    i(MAP_1B, 0x81, Cmp).grp(7).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0x83, Add).grp(0).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_1B, 0x83, Or).grp(1).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_1B, 0x83, Adc).grp(2).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_1B, 0x83, Sbb).grp(3).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_1B, 0x83, And).grp(4).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_1B, 0x83, Sub).grp(5).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_1B, 0x83, Xor).grp(6).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_1B, 0x83, Cmp).grp(7).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    // 84..8f.
    i(MAP_1B, 0x84, Test).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x85, Test).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x86, Xchg).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0x87, Xchg).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0x88, Mov).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x89, Mov).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x8a, Mov).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0x8b, Mov).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x8c, Mov).rm(0, S_OP, RF_GPL).reg(1, S_FIX2, RF_SEG).fix2(2).width(),
    i(MAP_1B, 0x8d, Lea).mem_only().reg(0, S_OP, RF_GPL).rm(1, S_FIX1, RF_GPL).width(),
    i(MAP_1B, 0x8e, Mov).reg(0, S_FIX2, RF_SEG).rm(1, S_FIX2, RF_GPL).fix2(2),
    i(MAP_1B, 0x8f, Pop).grp(0).rm(0, S_OP, RF_GPL).opsize(2).width(),
    // 90: XCHG rAX,r; rewritten to NOP when both registers are rAX.
    i(MAP_1B, 0x90, XchgNop).opcode_reg().rm(0, S_OP, RF_GPL).vvvv(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x91, Xchg).span(7).opcode_reg().rm(0, S_OP, RF_GPL).vvvv(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0x98, Cbw).width(),
    i(MAP_1B, 0x99, Cwd).width(),
    i(MAP_1B, 0x9a, CallF).only32().imm(5, 0, S_OP).width(),
    i(MAP_1B, 0x9c, Pushf).opsize(2).width(),
    i(MAP_1B, 0x9d, Popf).opsize(2).width(),
    i(MAP_1B, 0x9e, Sahf),
    i(MAP_1B, 0x9f, Lahf),
    // a0..a3: MOV with direct address (moffs).
    i(MAP_1B, 0xa0, Mov).vvvv(0, S_OP, RF_GPL).imm(2, 1, S_OP).opsize(1),
    i(MAP_1B, 0xa1, Mov).vvvv(0, S_OP, RF_GPL).imm(2, 1, S_OP).width(),
    i(MAP_1B, 0xa2, Mov).imm(2, 0, S_OP).vvvv(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0xa3, Mov).imm(2, 0, S_OP).vvvv(1, S_OP, RF_GPL).width(),
    // a4..af: string ops.
    i(MAP_1B, 0xa4, Movs).opsize(1),
    i(MAP_1B, 0xa5, Movs).width(),
    i(MAP_1B, 0xa6, Cmps).opsize(1),
    i(MAP_1B, 0xa7, Cmps).width(),
    i(MAP_1B, 0xa8, Test).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0xa9, Test).vvvv(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0xaa, Stos).opsize(1),
    i(MAP_1B, 0xab, Stos).width(),
    i(MAP_1B, 0xac, Lods).opsize(1),
    i(MAP_1B, 0xad, Lods).width(),
    i(MAP_1B, 0xae, Scas).opsize(1),
    i(MAP_1B, 0xaf, Scas).width(),
    // b0..bf: MOV r, imm with opcode-embedded register.
    i(MAP_1B, 0xb0, Mov).span(8).opcode_reg().rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0xb8, MovAbs).span(8).opcode_reg().rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    // c0/c1: shift group by imm8.
    i(MAP_1B, 0xc0, Rol).grp(0).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xc0, Ror).grp(1).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xc0, Rcl).grp(2).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xc0, Rcr).grp(3).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xc0, Shl).grp(4).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xc0, Shr).grp(5).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xc0, Shl).grp(6).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xc0, Sar).grp(7).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xc1, Rol).grp(0).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_1B, 0xc1, Ror).grp(1).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_1B, 0xc1, Rcl).grp(2).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_1B, 0xc1, Rcr).grp(3).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_1B, 0xc1, Shl).grp(4).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_1B, 0xc1, Shr).grp(5).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_1B, 0xc1, Shl).grp(6).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_1B, 0xc1, Sar).grp(7).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    // c2..cf.
    i(MAP_1B, 0xc2, Ret).imm(5, 0, S_FIX2).fix2(2).opsize(2),
    i(MAP_1B, 0xc3, Ret).opsize(2),
    i(MAP_1B, 0xc4, Les).only32().mem_only().reg(0, S_OP, RF_GPL).rm(1, S_FIX1, RF_GPL).width(),
    i(MAP_1B, 0xc5, Lds).only32().mem_only().reg(0, S_OP, RF_GPL).rm(1, S_FIX1, RF_GPL).width(),
    i(MAP_1B, 0xc6, Mov).grp(0).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0xc7, Mov).grp(0).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0xc8, Enter).imm(5, 0, S_FIX2).fix2(2).opsize(2),
    i(MAP_1B, 0xc9, Leave).opsize(2),
    i(MAP_1B, 0xca, Retf).imm(5, 0, S_FIX2).fix2(2),
    i(MAP_1B, 0xcb, Retf),
    i(MAP_1B, 0xcc, Int3),
    i(MAP_1B, 0xcd, Int).imm(4, 0, S_FIX2),
    i(MAP_1B, 0xce, Into).only32(),
    i(MAP_1B, 0xcf, Iret).width(),
    // d0..d3: shift group by 1 / by CL.
    i(MAP_1B, 0xd0, Rol).grp(0).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xd0, Ror).grp(1).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xd0, Rcl).grp(2).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xd0, Rcr).grp(3).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xd0, Shl).grp(4).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xd0, Shr).grp(5).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xd0, Shl).grp(6).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xd0, Sar).grp(7).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xd1, Rol).grp(0).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).width(),
    i(MAP_1B, 0xd1, Ror).grp(1).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).width(),
    i(MAP_1B, 0xd1, Rcl).grp(2).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).width(),
    i(MAP_1B, 0xd1, Rcr).grp(3).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).width(),
    i(MAP_1B, 0xd1, Shl).grp(4).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).width(),
    i(MAP_1B, 0xd1, Shr).grp(5).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).width(),
    i(MAP_1B, 0xd1, Shl).grp(6).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).width(),
    i(MAP_1B, 0xd1, Sar).grp(7).rm(0, S_OP, RF_GPL).imm(1, 1, S_FIX2).width(),
    i(MAP_1B, 0xd2, Rol).grp(0).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().opsize(1),
    i(MAP_1B, 0xd2, Ror).grp(1).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().opsize(1),
    i(MAP_1B, 0xd2, Rcl).grp(2).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().opsize(1),
    i(MAP_1B, 0xd2, Rcr).grp(3).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().opsize(1),
    i(MAP_1B, 0xd2, Shl).grp(4).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().opsize(1),
    i(MAP_1B, 0xd2, Shr).grp(5).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().opsize(1),
    i(MAP_1B, 0xd2, Shl).grp(6).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().opsize(1),
    i(MAP_1B, 0xd2, Sar).grp(7).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().opsize(1),
    i(MAP_1B, 0xd3, Rol).grp(0).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().width(),
    i(MAP_1B, 0xd3, Ror).grp(1).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().width(),
    i(MAP_1B, 0xd3, Rcl).grp(2).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().width(),
    i(MAP_1B, 0xd3, Rcr).grp(3).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().width(),
    i(MAP_1B, 0xd3, Shl).grp(4).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().width(),
    i(MAP_1B, 0xd3, Shr).grp(5).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().width(),
    i(MAP_1B, 0xd3, Shl).grp(6).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().width(),
    i(MAP_1B, 0xd3, Sar).grp(7).rm(0, S_OP, RF_GPL).vvvv(1, S_FIX2, RF_GPL).cl().width(),
    i(MAP_1B, 0xd4, Aam).only32().imm(4, 0, S_FIX2),
    i(MAP_1B, 0xd5, Aad).only32().imm(4, 0, S_FIX2),
    i(MAP_1B, 0xd7, Xlat).opsize(1),
    // e0..e3: short loops.
    i(MAP_1B, 0xe0, Loopne).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0xe1, Loope).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0xe2, Loop).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0xe3, Jcxz).imm(6, 0, S_OP).opsize(3).width(),
    // e4..e7, ec..ef: port I/O.
    i(MAP_1B, 0xe4, In).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).opsize(1),
    i(MAP_1B, 0xe5, In).vvvv(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_1B, 0xe6, Out).imm(4, 0, S_FIX2).vvvv(1, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0xe7, Out).imm(4, 0, S_FIX2).vvvv(1, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xe8, Call).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0xe9, Jmp).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0xea, JmpF).only32().imm(5, 0, S_OP).width(),
    i(MAP_1B, 0xeb, Jmp).imm(6, 0, S_OP).opsize(3).width(),
    i(MAP_1B, 0xec, In).vvvv(0, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0xed, In).vvvv(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xee, Out).vvvv(0, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0xef, Out).vvvv(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xf1, Int1),
    i(MAP_1B, 0xf4, Hlt),
    i(MAP_1B, 0xf5, Cmc),
    // f6/f7: unary group (reg 0/1 take an immediate TEST).
    i(MAP_1B, 0xf6, Test).grp(0).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0xf6, Test).grp(1).rm(0, S_OP, RF_GPL).imm(4, 1, S_OP).opsize(1),
    i(MAP_1B, 0xf6, Not).grp(2).rm(0, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0xf6, Neg).grp(3).rm(0, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0xf6, Mul).grp(4).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0xf6, Imul).grp(5).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0xf6, Div).grp(6).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0xf6, Idiv).grp(7).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_1B, 0xf7, Test).grp(0).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0xf7, Test).grp(1).rm(0, S_OP, RF_GPL).imm(5, 1, S_OP).width(),
    i(MAP_1B, 0xf7, Not).grp(2).rm(0, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0xf7, Neg).grp(3).rm(0, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0xf7, Mul).grp(4).rm(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xf7, Imul).grp(5).rm(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xf7, Div).grp(6).rm(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xf7, Idiv).grp(7).rm(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xf8, Clc),
    i(MAP_1B, 0xf9, Stc),
    i(MAP_1B, 0xfa, Cli),
    i(MAP_1B, 0xfb, Sti),
    i(MAP_1B, 0xfc, Cld),
    i(MAP_1B, 0xfd, Std),
    // fe/ff: INC/DEC group and the indirect branch/push group.
    i(MAP_1B, 0xfe, Inc).grp(0).rm(0, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0xfe, Dec).grp(1).rm(0, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_1B, 0xff, Inc).grp(0).rm(0, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0xff, Dec).grp(1).rm(0, S_OP, RF_GPL).width().lock(),
    i(MAP_1B, 0xff, Call).grp(2).rm(0, S_OP, RF_GPL).opsize(3).width(),
    i(MAP_1B, 0xff, CallF).grp_mem(3).rm(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xff, Jmp).grp(4).rm(0, S_OP, RF_GPL).opsize(3).width(),
    i(MAP_1B, 0xff, JmpF).grp_mem(5).rm(0, S_OP, RF_GPL).width(),
    i(MAP_1B, 0xff, Push).grp(6).rm(0, S_OP, RF_GPL).opsize(2).width(),
    // ---- 0F map: system group 7 ------------------------------------
    i(MAP_0F, 0x01, Sgdt).grp_mem(0).rm(0, S_FIX1, RF_GPL),
    i(MAP_0F, 0x01, Sidt).grp_mem(1).rm(0, S_FIX1, RF_GPL),
    i(MAP_0F, 0x01, Monitor).ext(1, 0),
    i(MAP_0F, 0x01, Mwait).ext(1, 1),
    i(MAP_0F, 0x01, Lgdt).grp_mem(2).rm(0, S_FIX1, RF_GPL),
    i(MAP_0F, 0x01, Lidt).grp_mem(3).rm(0, S_FIX1, RF_GPL),
    i(MAP_0F, 0x01, Smsw).grp(4).rm(0, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x01, Lmsw).grp(6).rm(0, S_FIX2, RF_GPL).fix2(2),
    i(MAP_0F, 0x01, Invlpg).grp_mem(7).rm(0, S_FIX1, RF_GPL),
    i(MAP_0F, 0x01, Swapgs).only64().ext(7, 0),
    i(MAP_0F, 0x01, Rdtscp).ext(7, 1),
    i(MAP_0F, 0x05, Syscall).only64(),
    i(MAP_0F, 0x06, Clts),
    i(MAP_0F, 0x0b, Ud2),
    // 0f 0f: 3DNow!; the imm8 suffix opcode is validated separately.
    i(MAP_0F, 0x0f, ThreeDNow).reg(0, S_FIX1, RF_MMX).rm(1, S_FIX1, RF_MMX).fix1(4).imm(4, 2, S_FIX2),
    // 10/11: unaligned vector moves.
    i(MAP_0F, 0x10, Movups).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x10, Movupd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x10, Movss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x10, Movsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x11, Movups).prefix(PNONE).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x11, Movupd).prefix(P66).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x11, Movss).prefix(PF3).rm(0, S_FIX1, RF_VEC).fix1(3).reg(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x11, Movsd).prefix(PF2).rm(0, S_FIX1, RF_VEC).fix1(4).reg(1, S_OP, RF_VEC).opsize(4),
    // 14/15: unpack.
    i(MAP_0F, 0x14, Unpcklps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x14, Unpcklpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x15, Unpckhps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x15, Unpckhpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    // 1f /0: multi-byte NOP.
    i(MAP_0F, 0x1f, Nop).grp(0).rm(0, S_OP, RF_GPL).width(),
    // 20..23: control/debug register moves (mod is ignored).
    i(MAP_0F, 0x20, MovCr).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(3),
    i(MAP_0F, 0x21, MovDr).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(3),
    i(MAP_0F, 0x22, MovCr).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(3),
    i(MAP_0F, 0x23, MovDr).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).opsize(3),
    // 28/29: aligned vector moves.
    i(MAP_0F, 0x28, Movaps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x28, Movapd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x29, Movaps).prefix(PNONE).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x29, Movapd).prefix(P66).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    // 2a/2c/2d: int <-> scalar float conversions (GPR width by REX.W).
    i(MAP_0F, 0x2a, Cvtsi2ss).prefix(PF3).reg(0, S_FIX1, RF_VEC).fix1(5).rm(1, S_OP, RF_GPL).ign66().width(),
    i(MAP_0F, 0x2a, Cvtsi2sd).prefix(PF2).reg(0, S_FIX1, RF_VEC).fix1(5).rm(1, S_OP, RF_GPL).ign66().width(),
    i(MAP_0F, 0x2c, Cvttss2si).prefix(PF3).reg(0, S_OP, RF_GPL).rm(1, S_FIX1, RF_VEC).fix1(3).ign66().width(),
    i(MAP_0F, 0x2c, Cvttsd2si).prefix(PF2).reg(0, S_OP, RF_GPL).rm(1, S_FIX1, RF_VEC).fix1(4).ign66().width(),
    i(MAP_0F, 0x2d, Cvtss2si).prefix(PF3).reg(0, S_OP, RF_GPL).rm(1, S_FIX1, RF_VEC).fix1(3).ign66().width(),
    i(MAP_0F, 0x2d, Cvtsd2si).prefix(PF2).reg(0, S_OP, RF_GPL).rm(1, S_FIX1, RF_VEC).fix1(4).ign66().width(),
    // 2e/2f: scalar compares.
    i(MAP_0F, 0x2e, Ucomiss).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x2e, Ucomisd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x2f, Comiss).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x2f, Comisd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    // 30..35.
    i(MAP_0F, 0x30, Wrmsr),
    i(MAP_0F, 0x31, Rdtsc),
    i(MAP_0F, 0x32, Rdmsr),
    i(MAP_0F, 0x33, Rdpmc),
    i(MAP_0F, 0x34, Sysenter),
    i(MAP_0F, 0x35, Sysexit),
    // 40..4f: CMOVcc.
    i(MAP_0F, 0x40, Cmovo).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x41, Cmovno).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x42, Cmovb).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x43, Cmovae).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x44, Cmove).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x45, Cmovne).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x46, Cmovbe).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x47, Cmova).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x48, Cmovs).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x49, Cmovns).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x4a, Cmovp).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x4b, Cmovnp).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x4c, Cmovl).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x4d, Cmovge).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x4e, Cmovle).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x4f, Cmovg).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    // 51..5f: packed/scalar float arithmetic, split by mandatory prefix.
    i(MAP_0F, 0x51, Sqrtps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x51, Sqrtpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x51, Sqrtss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x51, Sqrtsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x52, Rsqrtps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x52, Rsqrtss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x53, Rcpps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x53, Rcpss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x54, Andps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x54, Andpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x55, Andnps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x55, Andnpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x56, Orps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x56, Orpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x57, Xorps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x57, Xorpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x58, Addps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x58, Addpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x58, Addss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x58, Addsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x59, Mulps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x59, Mulpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x59, Mulss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x59, Mulsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x5a, Cvtps2pd).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x5a, Cvtpd2ps).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5a, Cvtss2sd).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x5a, Cvtsd2ss).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x5b, Cvtdq2ps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5b, Cvtps2dq).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5c, Subps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5c, Subpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5c, Subss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x5c, Subsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x5d, Minps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5d, Minpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5d, Minss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x5d, Minsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x5e, Divps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5e, Divpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5e, Divss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x5e, Divsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x5f, Maxps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5f, Maxpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x5f, Maxss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(MAP_0F, 0x5f, Maxsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    // 6e/7e, 6f/7f, d6: MMX/SSE moves between register files.
    i(MAP_0F, 0x6e, Movd).prefix(PNONE).reg(0, S_FIX1, RF_MMX).fix1(4).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0x6e, Movd).prefix(P66).reg(0, S_FIX1, RF_VEC).fix1(5).rm(1, S_OP, RF_GPL).ign66().width(),
    i(MAP_0F, 0x6f, Movq).prefix(PNONE).reg(0, S_FIX1, RF_MMX).rm(1, S_FIX1, RF_MMX).fix1(4),
    i(MAP_0F, 0x6f, Movdqa).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x6f, Movdqu).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x70, Pshufd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).imm(4, 2, S_FIX2).opsize(4),
    // 71..73: vector shift groups, register form only.
    i(MAP_0F, 0x71, Psrlw).prefix(P66).grp_reg(2).rm(0, S_OP, RF_VEC).imm(4, 1, S_FIX2).opsize(4),
    i(MAP_0F, 0x71, Psllw).prefix(P66).grp_reg(6).rm(0, S_OP, RF_VEC).imm(4, 1, S_FIX2).opsize(4),
    i(MAP_0F, 0x72, Psrld).prefix(P66).grp_reg(2).rm(0, S_OP, RF_VEC).imm(4, 1, S_FIX2).opsize(4),
    i(MAP_0F, 0x72, Pslld).prefix(P66).grp_reg(6).rm(0, S_OP, RF_VEC).imm(4, 1, S_FIX2).opsize(4),
    i(MAP_0F, 0x73, Psrlq).prefix(P66).grp_reg(2).rm(0, S_OP, RF_VEC).imm(4, 1, S_FIX2).opsize(4),
    i(MAP_0F, 0x73, Psllq).prefix(P66).grp_reg(6).rm(0, S_OP, RF_VEC).imm(4, 1, S_FIX2).opsize(4),
    i(MAP_0F, 0x74, Pcmpeqb).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x75, Pcmpeqw).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x76, Pcmpeqd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x77, Emms),
    i(MAP_0F, 0x7e, Movd).prefix(PNONE).rm(0, S_OP, RF_GPL).reg(1, S_FIX1, RF_MMX).fix1(4).width(),
    i(MAP_0F, 0x7e, Movd).prefix(P66).rm(0, S_OP, RF_GPL).reg(1, S_FIX1, RF_VEC).fix1(5).ign66().width(),
    i(MAP_0F, 0x7e, Movq).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(MAP_0F, 0x7f, Movq).prefix(PNONE).rm(0, S_FIX1, RF_MMX).reg(1, S_FIX1, RF_MMX).fix1(4),
    i(MAP_0F, 0x7f, Movdqa).prefix(P66).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0x7f, Movdqu).prefix(PF3).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    // 80..8f: Jcc rel32.
    i(MAP_0F, 0x80, Jo).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x81, Jno).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x82, Jb).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x83, Jae).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x84, Je).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x85, Jne).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x86, Jbe).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x87, Ja).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x88, Js).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x89, Jns).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x8a, Jp).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x8b, Jnp).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x8c, Jl).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x8d, Jge).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x8e, Jle).imm(7, 0, S_OP).opsize(3).width(),
    i(MAP_0F, 0x8f, Jg).imm(7, 0, S_OP).opsize(3).width(),
    // 90..9f: SETcc.
    i(MAP_0F, 0x90, Seto).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x91, Setno).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x92, Setb).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x93, Setae).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x94, Sete).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x95, Setne).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x96, Setbe).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x97, Seta).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x98, Sets).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x99, Setns).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x9a, Setp).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x9b, Setnp).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x9c, Setl).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x9d, Setge).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x9e, Setle).rm(0, S_OP, RF_GPL).opsize(1),
    i(MAP_0F, 0x9f, Setg).rm(0, S_OP, RF_GPL).opsize(1),
    // a2..af.
    i(MAP_0F, 0xa2, Cpuid),
    i(MAP_0F, 0xa3, Bt).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xa4, Shld).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).imm(4, 2, S_FIX2).width(),
    i(MAP_0F, 0xa5, Shld).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).vvvv(2, S_FIX2, RF_GPL).cl().width(),
    i(MAP_0F, 0xab, Bts).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_0F, 0xac, Shrd).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).imm(4, 2, S_FIX2).width(),
    i(MAP_0F, 0xad, Shrd).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).vvvv(2, S_FIX2, RF_GPL).cl().width(),
    // ae: fences, cache control, MXCSR.
    i(MAP_0F, 0xae, Ldmxcsr).grp_mem(2).rm(0, S_FIX1, RF_GPL).fix1(3),
    i(MAP_0F, 0xae, Stmxcsr).grp_mem(3).rm(0, S_FIX1, RF_GPL).fix1(3),
    i(MAP_0F, 0xae, Lfence).ext(5, 0),
    i(MAP_0F, 0xae, Mfence).ext(6, 0),
    i(MAP_0F, 0xae, Sfence).ext(7, 0),
    i(MAP_0F, 0xae, Clflush).grp_mem(7).rm(0, S_FIX1, RF_GPL).fix1(1),
    i(MAP_0F, 0xaf, Imul).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xb0, Cmpxchg).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_0F, 0xb1, Cmpxchg).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_0F, 0xb3, Btr).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_0F, 0xb6, Movzx).reg(0, S_OP, RF_GPL).rm(1, S_FIX2, RF_GPL).width(),
    i(MAP_0F, 0xb7, Movzx).reg(0, S_OP, RF_GPL).rm(1, S_FIX2, RF_GPL).fix2(2).width(),
    i(MAP_0F, 0xb8, Popcnt).prefix(PF3).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    // ba: BT group with immediate.
    i(MAP_0F, 0xba, Bt).grp(4).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width(),
    i(MAP_0F, 0xba, Bts).grp(5).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_0F, 0xba, Btr).grp(6).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_0F, 0xba, Btc).grp(7).rm(0, S_OP, RF_GPL).imm(4, 1, S_FIX2).width().lock(),
    i(MAP_0F, 0xbb, Btc).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    // bc/bd: 66h stays a size prefix here, so it gets its own slot.
    i(MAP_0F, 0xbc, Bsf).prefix(PNONE).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xbc, Bsf).prefix(P66).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xbc, Tzcnt).prefix(PF3).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xbd, Bsr).prefix(PNONE).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xbd, Bsr).prefix(P66).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xbd, Lzcnt).prefix(PF3).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xbe, Movsx).reg(0, S_OP, RF_GPL).rm(1, S_FIX2, RF_GPL).width(),
    i(MAP_0F, 0xbf, Movsx).reg(0, S_OP, RF_GPL).rm(1, S_FIX2, RF_GPL).fix2(2).width(),
    i(MAP_0F, 0xc0, Xadd).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).opsize(1).lock(),
    i(MAP_0F, 0xc1, Xadd).rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width().lock(),
    i(MAP_0F, 0xc2, Cmpps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).imm(4, 2, S_FIX2).opsize(4),
    i(MAP_0F, 0xc2, Cmppd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).imm(4, 2, S_FIX2).opsize(4),
    i(MAP_0F, 0xc2, Cmpss).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).imm(4, 2, S_FIX2).opsize(4),
    i(MAP_0F, 0xc2, Cmpsd).prefix(PF2).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).imm(4, 2, S_FIX2).opsize(4),
    i(MAP_0F, 0xc3, Movnti).mem_only().rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xc6, Shufps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).imm(4, 2, S_FIX2).opsize(4),
    i(MAP_0F, 0xc6, Shufpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).imm(4, 2, S_FIX2).opsize(4),
    // c7: CMPXCHG8B/16B (split on REX.W), RDRAND, RDSEED.
    i(MAP_0F, 0xc7, Cmpxchg8b).grp_mem(1).wl(W0 & L0).rm(0, S_FIX1, RF_GPL).fix1(4).lock(),
    i(MAP_0F, 0xc7, Cmpxchg16b).only64().grp_mem(1).wl(W1 & L0).rm(0, S_FIX1, RF_GPL).fix1(5).lock(),
    i(MAP_0F, 0xc7, Rdrand).grp_reg(6).rm(0, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xc7, Rdseed).grp_reg(7).rm(0, S_OP, RF_GPL).width(),
    // c8..cf: BSWAP r.
    i(MAP_0F, 0xc8, Bswap).span(8).opcode_reg().rm(0, S_OP, RF_GPL).width(),
    i(MAP_0F, 0xd6, Movq).prefix(P66).rm(0, S_FIX1, RF_VEC).fix1(4).reg(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0xdb, Pand).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0xeb, Por).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_0F, 0xef, Pxor).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    // ---- 0F 38 map -------------------------------------------------
    i(MAP_38, 0x00, Pshufb).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(MAP_38, 0xf0, Movbe).prefix(PNONE).mem_only().reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_38, 0xf0, Movbe).prefix(P66).mem_only().reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).width(),
    i(MAP_38, 0xf0, Crc32).prefix(PF2).reg(0, S_OP, RF_GPL).rm(1, S_FIX2, RF_GPL).ign66().width(),
    i(MAP_38, 0xf1, Movbe).prefix(PNONE).mem_only().rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width(),
    i(MAP_38, 0xf1, Movbe).prefix(P66).mem_only().rm(0, S_OP, RF_GPL).reg(1, S_OP, RF_GPL).width(),
    i(MAP_38, 0xf1, Crc32).prefix(PF2).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).ign66().width(),
    // ---- 0F 3A map -------------------------------------------------
    i(MAP_3A, 0x0f, Palignr).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).imm(4, 2, S_FIX2).opsize(4),
    // ---- VEX map 1 -------------------------------------------------
    i(VEX_0F, 0x10, Vmovups).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x10, Vmovupd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x10, Vmovss).prefix(PF3).mem_only().reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(VEX_0F, 0x10, Vmovss).prefix(PF3).reg_only().reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(VEX_0F, 0x10, Vmovsd).prefix(PF2).mem_only().reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(VEX_0F, 0x10, Vmovsd).prefix(PF2).reg_only().reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(VEX_0F, 0x11, Vmovups).prefix(PNONE).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x11, Vmovupd).prefix(P66).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x11, Vmovss).prefix(PF3).mem_only().rm(0, S_FIX1, RF_VEC).fix1(3).reg(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x11, Vmovss).prefix(PF3).reg_only().rm(0, S_FIX1, RF_VEC).fix1(3).vvvv(1, S_OP, RF_VEC).reg(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x11, Vmovsd).prefix(PF2).mem_only().rm(0, S_FIX1, RF_VEC).fix1(4).reg(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x11, Vmovsd).prefix(PF2).reg_only().rm(0, S_FIX1, RF_VEC).fix1(4).vvvv(1, S_OP, RF_VEC).reg(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x28, Vmovaps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x28, Vmovapd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x29, Vmovaps).prefix(PNONE).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x29, Vmovapd).prefix(P66).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    // 41..47: opmask-register logic (VEX.L1, W0).
    i(VEX_0F, 0x41, Kandw).prefix(PNONE).wl(W0 & L1).reg_only().reg(0, S_FIX2, RF_MASK).vvvv(1, S_FIX2, RF_MASK).rm(2, S_FIX2, RF_MASK).fix2(2),
    i(VEX_0F, 0x44, Knotw).prefix(PNONE).wl(W0 & L0).reg_only().reg(0, S_FIX2, RF_MASK).rm(1, S_FIX2, RF_MASK).fix2(2),
    i(VEX_0F, 0x45, Korw).prefix(PNONE).wl(W0 & L1).reg_only().reg(0, S_FIX2, RF_MASK).vvvv(1, S_FIX2, RF_MASK).rm(2, S_FIX2, RF_MASK).fix2(2),
    i(VEX_0F, 0x47, Kxorw).prefix(PNONE).wl(W0 & L1).reg_only().reg(0, S_FIX2, RF_MASK).vvvv(1, S_FIX2, RF_MASK).rm(2, S_FIX2, RF_MASK).fix2(2),
    i(VEX_0F, 0x51, Vsqrtps).prefix(PNONE).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x51, Vsqrtpd).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x54, Vandps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x54, Vandpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x56, Vorps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x56, Vorpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x57, Vxorps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x57, Vxorpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x58, Vaddps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x58, Vaddpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x58, Vaddss).prefix(PF3).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_FIX1, RF_VEC).fix1(3).opsize(4),
    i(VEX_0F, 0x58, Vaddsd).prefix(PF2).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_FIX1, RF_VEC).fix1(4).opsize(4),
    i(VEX_0F, 0x59, Vmulps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x59, Vmulpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x5c, Vsubps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x5c, Vsubpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x5d, Vminps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x5d, Vminpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x5e, Vdivps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x5e, Vdivpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x5f, Vmaxps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x5f, Vmaxpd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x6f, Vmovdqa).prefix(P66).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x6f, Vmovdqu).prefix(PF3).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4),
    // 77: VZEROUPPER / VZEROALL, selected by VEX.L.
    i(VEX_0F, 0x77, Vzeroupper).prefix(PNONE).wl(L0),
    i(VEX_0F, 0x77, Vzeroall).prefix(PNONE).wl(L1),
    i(VEX_0F, 0x7f, Vmovdqa).prefix(P66).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    i(VEX_0F, 0x7f, Vmovdqu).prefix(PF3).rm(0, S_OP, RF_VEC).reg(1, S_OP, RF_VEC).opsize(4),
    // 90..93: opmask moves.
    i(VEX_0F, 0x90, Kmovw).prefix(PNONE).wl(W0 & L0).reg(0, S_FIX2, RF_MASK).rm(1, S_FIX2, RF_MASK).fix2(2),
    i(VEX_0F, 0x92, Kmovw).prefix(PNONE).wl(W0 & L0).reg_only().reg(0, S_FIX2, RF_MASK).fix2(2).rm(1, S_FIX1, RF_GPL).fix1(3),
    i(VEX_0F, 0x93, Kmovw).prefix(PNONE).wl(W0 & L0).reg_only().reg(0, S_FIX1, RF_GPL).fix1(3).rm(1, S_FIX2, RF_MASK).fix2(2),
    i(VEX_0F, 0xc2, Vcmpps).prefix(PNONE).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).imm(4, 3, S_FIX2).opsize(4),
    i(VEX_0F, 0xc2, Vcmppd).prefix(P66).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).imm(4, 3, S_FIX2).opsize(4),
    // ---- VEX map 2 -------------------------------------------------
    i(VEX_38, 0x18, Vbroadcastss).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4),
    // 90: gathers; the mask vector rides in vvvv.
    i(VEX_38, 0x90, Vpgatherdd).prefix(P66).wl(W0).mem_only().vsib().reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).vvvv(2, S_OP, RF_VEC).opsize(4),
    i(VEX_38, 0x90, Vpgatherdq).prefix(P66).wl(W1).mem_only().vsib().reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).vvvv(2, S_OP, RF_VEC).opsize(4),
    // FMA, W-split between the ps/pd forms.
    i(VEX_38, 0x98, Vfmadd132ps).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_38, 0x98, Vfmadd132pd).prefix(P66).wl(W1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_38, 0xa8, Vfmadd213ps).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_38, 0xa8, Vfmadd213pd).prefix(P66).wl(W1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_38, 0xb8, Vfmadd231ps).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    i(VEX_38, 0xb8, Vfmadd231pd).prefix(P66).wl(W1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4),
    // BMI; GPR width tracks VEX.W, 66h is an opcode selector only.
    i(VEX_38, 0xf2, Andn).prefix(PNONE).wl(L0).reg(0, S_OP, RF_GPL).vvvv(1, S_OP, RF_GPL).rm(2, S_OP, RF_GPL).ign66().width(),
    i(VEX_38, 0xf3, Blsr).prefix(PNONE).wl(L0).grp(1).vvvv(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).ign66().width(),
    i(VEX_38, 0xf3, Blsmsk).prefix(PNONE).wl(L0).grp(2).vvvv(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).ign66().width(),
    i(VEX_38, 0xf3, Blsi).prefix(PNONE).wl(L0).grp(3).vvvv(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).ign66().width(),
    i(VEX_38, 0xf7, Bextr).prefix(PNONE).wl(L0).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).vvvv(2, S_OP, RF_GPL).ign66().width(),
    i(VEX_38, 0xf7, Shlx).prefix(P66).wl(L0).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).vvvv(2, S_OP, RF_GPL).ign66().width(),
    i(VEX_38, 0xf7, Sarx).prefix(PF3).wl(L0).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).vvvv(2, S_OP, RF_GPL).ign66().width(),
    i(VEX_38, 0xf7, Shrx).prefix(PF2).wl(L0).reg(0, S_OP, RF_GPL).rm(1, S_OP, RF_GPL).vvvv(2, S_OP, RF_GPL).ign66().width(),
    // ---- VEX map 3 -------------------------------------------------
    i(VEX_3A, 0x18, Vinsertf128).prefix(P66).wl(W0 & L1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_FIX1, RF_VEC).fix1(5).imm(4, 3, S_FIX2).opsize(4),
    i(VEX_3A, 0x19, Vextractf128).prefix(P66).wl(W0 & L1).rm(0, S_FIX1, RF_VEC).fix1(5).reg(1, S_OP, RF_VEC).imm(4, 2, S_FIX2).opsize(4),
    // 4a..4c: variable blends; the fourth register rides in imm8[7:4].
    i(VEX_3A, 0x4a, Vblendvps).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).imm(3, 3, S_OP).opsize(4),
    i(VEX_3A, 0x4b, Vblendvpd).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).imm(3, 3, S_OP).opsize(4),
    i(VEX_3A, 0x4c, Vpblendvb).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).imm(3, 3, S_OP).opsize(4),
    // ---- EVEX map 1 ------------------------------------------------
    i(EVEX_0F, 0x58, Vaddps).prefix(PNONE).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    i(EVEX_0F, 0x58, Vaddpd).prefix(P66).wl(W1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    i(EVEX_0F, 0x58, Vaddss).prefix(PF3).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_FIX1, RF_VEC).fix1(3).opsize(4).mask().er(),
    i(EVEX_0F, 0x58, Vaddsd).prefix(PF2).wl(W1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_FIX1, RF_VEC).fix1(4).opsize(4).mask().er(),
    i(EVEX_0F, 0x51, Vsqrtps).prefix(PNONE).wl(W0).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    i(EVEX_0F, 0x51, Vsqrtpd).prefix(P66).wl(W1).reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    // c2: compare into an opmask register, SAE but no rounding.
    i(EVEX_0F, 0xc2, Vcmpps).prefix(PNONE).wl(W0).reg(0, S_FIX2, RF_MASK).fix2(2).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).imm(4, 3, S_FIX2).opsize(4).mask().bcst().sae(),
    i(EVEX_0F, 0xc2, Vcmppd).prefix(P66).wl(W1).reg(0, S_FIX2, RF_MASK).fix2(2).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).imm(4, 3, S_FIX2).opsize(4).mask().bcst().sae(),
    // ---- EVEX map 2 ------------------------------------------------
    i(EVEX_38, 0x18, Vbroadcastss).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).rm(1, S_FIX1, RF_VEC).fix1(3).opsize(4).mask(),
    // 90: gathers; EVEX.V' extends the VSIB index, masking via aaa.
    i(EVEX_38, 0x90, Vpgatherdd).prefix(P66).wl(W0).mem_only().vsib().reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4).mask(),
    i(EVEX_38, 0x90, Vpgatherdq).prefix(P66).wl(W1).mem_only().vsib().reg(0, S_OP, RF_VEC).rm(1, S_OP, RF_VEC).opsize(4).mask(),
    i(EVEX_38, 0x98, Vfmadd132ps).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    i(EVEX_38, 0x98, Vfmadd132pd).prefix(P66).wl(W1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    i(EVEX_38, 0xa8, Vfmadd213ps).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    i(EVEX_38, 0xa8, Vfmadd213pd).prefix(P66).wl(W1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    i(EVEX_38, 0xb8, Vfmadd231ps).prefix(P66).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    i(EVEX_38, 0xb8, Vfmadd231pd).prefix(P66).wl(W1).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().er(),
    // ---- EVEX map 5 (FP16) -----------------------------------------
    i(EVEX_M5, 0x58, Vaddph).prefix(PNONE).wl(W0).reg(0, S_OP, RF_VEC).vvvv(1, S_OP, RF_VEC).rm(2, S_OP, RF_VEC).opsize(4).mask().bcst().bcst16().er(),
];
