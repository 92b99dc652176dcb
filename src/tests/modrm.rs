//! ModR/M, SIB, displacement and register-extension decoding.

use super::{decode32, decode64};
use crate::{Mnemonic, OpKind, REG_IP, REG_NONE, RegFile};

#[test]
fn test_mem_no_displacement() {
    // add [rax], ecx
    let instr = decode64(&[0x01, 0x08]).unwrap();
    assert_eq!(instr.size(), 2);
    let dst = instr.operand(0);
    assert_eq!(dst.kind(), OpKind::Mem);
    assert_eq!(dst.reg(), 0);
    assert_eq!(dst.mem_index(), REG_NONE);
    assert_eq!(instr.displacement(), 0);
}

#[test]
fn test_mem_disp8() {
    let instr = decode64(&[0x01, 0x48, 0x10]).unwrap();
    assert_eq!(instr.size(), 3);
    assert_eq!(instr.displacement(), 0x10);
    let instr = decode64(&[0x01, 0x48, 0xf0]).unwrap();
    assert_eq!(instr.displacement(), -16);
}

#[test]
fn test_mem_disp32() {
    let instr = decode64(&[0x01, 0x88, 0x78, 0x56, 0x34, 0x12]).unwrap();
    assert_eq!(instr.size(), 6);
    assert_eq!(instr.displacement(), 0x12345678);
}

#[test]
fn test_sib_scaled_index() {
    // mov eax, [rsi + rcx*4 + 0x10]
    let instr = decode64(&[0x8b, 0x44, 0x8e, 0x10]).unwrap();
    assert_eq!(instr.size(), 4);
    let src = instr.operand(1);
    assert_eq!(src.kind(), OpKind::Mem);
    assert_eq!(src.reg(), 6);
    assert_eq!(src.mem_index(), 1);
    assert_eq!(src.mem_scale(), 2);
    assert_eq!(instr.displacement(), 0x10);
}

#[test]
fn test_sib_index_none() {
    // mov eax, [rsp]: index 4 encodes "no index".
    let instr = decode64(&[0x8b, 0x04, 0x24]).unwrap();
    let src = instr.operand(1);
    assert_eq!(src.reg(), 4);
    assert_eq!(src.mem_index(), REG_NONE);
}

#[test]
fn test_sib_no_base_disp32() {
    // mov eax, [0x12345678]
    let instr = decode64(&[0x8b, 0x04, 0x25, 0x78, 0x56, 0x34, 0x12]).unwrap();
    assert_eq!(instr.size(), 7);
    let src = instr.operand(1);
    assert_eq!(src.reg(), REG_NONE);
    assert_eq!(instr.displacement(), 0x12345678);
}

#[test]
fn test_rip_relative() {
    let instr = decode64(&[0x8b, 0x05, 0x44, 0x33, 0x22, 0x11]).unwrap();
    assert_eq!(instr.operand(1).reg(), REG_IP);
    assert_eq!(instr.displacement(), 0x11223344);
    // The same encoding is a plain absolute address in 32-bit mode.
    let instr = decode32(&[0x8b, 0x05, 0x44, 0x33, 0x22, 0x11]).unwrap();
    assert_eq!(instr.operand(1).reg(), REG_NONE);
    assert_eq!(instr.displacement(), 0x11223344);
}

#[test]
fn test_rex_b_x_extend_sib() {
    // mov eax, [r14 + r9*4 + 0x10]
    let instr = decode64(&[0x43, 0x8b, 0x44, 0x8e, 0x10]).unwrap();
    let src = instr.operand(1);
    assert_eq!(src.reg(), 14);
    assert_eq!(src.mem_index(), 9);
}

#[test]
fn test_opcode_embedded_register() {
    let instr = decode64(&[0x41, 0x50]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Push);
    assert_eq!(instr.operand(0).kind(), OpKind::Reg);
    assert_eq!(instr.operand(0).reg(), 8);
    assert_eq!(instr.operand(0).size_code(), 4);
}

#[test]
fn test_bswap_opcode_register() {
    let instr = decode64(&[0x49, 0x0f, 0xc9]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Bswap);
    assert_eq!(instr.operand(0).reg(), 9);
    assert_eq!(instr.operand(0).size_code(), 4);
}

#[test]
fn test_high_byte_aliasing() {
    // Without REX, byte register 4 is AH.
    let instr = decode64(&[0x0f, 0xb6, 0xc4]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Movzx);
    assert_eq!(instr.operand(1).reg(), 4);
    assert_eq!(instr.operand(1).reg_file(), Some(RegFile::Gph));
    // With any REX it is SPL instead.
    let instr = decode64(&[0x40, 0x0f, 0xb6, 0xc4]).unwrap();
    assert_eq!(instr.operand(1).reg_file(), Some(RegFile::Gpl));
}

#[test]
fn test_shift_by_cl_materializes_cl() {
    // shl ah, cl
    let instr = decode64(&[0xd2, 0xe4]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Shl);
    assert_eq!(instr.operand(0).reg(), 4);
    assert_eq!(instr.operand(0).reg_file(), Some(RegFile::Gph));
    let cl = instr.operand(1);
    assert_eq!(cl.kind(), OpKind::Reg);
    assert_eq!(cl.reg(), 1);
    assert_eq!(cl.size_code(), 1);
    assert_eq!(cl.reg_file(), Some(RegFile::Gpl));
}

#[test]
fn test_shift_by_one() {
    // shr eax, 1
    let instr = decode64(&[0xd1, 0xe8]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Shr);
    assert_eq!(instr.operand(1).kind(), OpKind::Imm);
    assert_eq!(instr.immediate(), 1);
}

#[test]
fn test_lea_rip_relative() {
    let instr = decode64(&[0x48, 0x8d, 0x05, 0x78, 0x56, 0x34, 0x12]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Lea);
    assert_eq!(instr.size(), 7);
    assert_eq!(instr.operand(0).reg(), 0);
    assert_eq!(instr.operand(0).size_code(), 4);
    let src = instr.operand(1);
    assert_eq!(src.kind(), OpKind::Mem);
    assert_eq!(src.reg(), REG_IP);
    assert_eq!(src.byte_size(), 0);
}

#[test]
fn test_mov_segment_register() {
    // mov eax, ds
    let instr = decode64(&[0x8c, 0xd8]).unwrap();
    assert_eq!(instr.operand(1).reg_file(), Some(RegFile::Seg));
    assert_eq!(instr.operand(1).reg(), 3);
    assert_eq!(instr.operand(1).size_code(), 2);
}

#[test]
fn test_moffs_64bit_address() {
    let instr = decode64(&[0xa1, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Mov);
    assert_eq!(instr.size(), 9);
    assert_eq!(instr.operand(0).reg(), 0);
    let mem = instr.operand(1);
    assert_eq!(mem.kind(), OpKind::Mem);
    assert_eq!(mem.reg(), REG_NONE);
    assert_eq!(instr.displacement(), 0x1122334455667788);
}

#[test]
fn test_moffs_with_address_size_override() {
    let instr = decode64(&[0x67, 0xa1, 0x44, 0x33, 0x22, 0x11]).unwrap();
    assert_eq!(instr.size(), 6);
    assert_eq!(instr.address_size_code(), 2);
    assert_eq!(instr.displacement(), 0x11223344);
}

#[test]
fn test_vsib_gather() {
    // vpgatherdd xmm0, [rdi + xmm1], xmm2
    let instr = decode64(&[0xc4, 0xe2, 0x69, 0x90, 0x04, 0x0f]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vpgatherdd);
    let mem = instr.operand(1);
    assert_eq!(mem.kind(), OpKind::Mem);
    assert_eq!(mem.reg(), 7);
    assert_eq!(mem.mem_index(), 1);
    assert_eq!(instr.operand(2).reg(), 2);
}

#[test]
fn test_evex_gather_vprime_index() {
    // vpgatherdd zmm1{k1}, [rax + zmm17*1]: EVEX.V' extends the index.
    let instr = decode64(&[0x62, 0xf2, 0x7d, 0x41, 0x90, 0x0c, 0x08]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vpgatherdd);
    assert_eq!(instr.evex_mask(), 1);
    let mem = instr.operand(1);
    assert_eq!(mem.reg(), 0);
    assert_eq!(mem.mem_index(), 17);
}

#[test]
fn test_evex_compressed_disp8() {
    // vaddps zmm1, zmm0, [rax + 0x40]: disp8 scales by the vector size.
    let instr = decode64(&[0x62, 0xf1, 0x7c, 0x48, 0x58, 0x48, 0x01]).unwrap();
    assert_eq!(instr.displacement(), 64);
    assert_eq!(instr.operand(2).kind(), OpKind::Mem);
}

#[test]
fn test_evex_broadcast() {
    // vaddps zmm1, zmm0, dword [rax + 4]{1to16}
    let instr = decode64(&[0x62, 0xf1, 0x7c, 0x58, 0x58, 0x48, 0x01]).unwrap();
    let mem = instr.operand(2);
    assert_eq!(mem.kind(), OpKind::MemBcst);
    assert_eq!(instr.broadcast_size_log2(), 2);
    // Broadcast disp8 scales by the element size, not the vector size.
    assert_eq!(instr.displacement(), 4);
    assert_ne!(instr.evex(), 0);
}

#[test]
fn test_evex_broadcast_16bit_element() {
    // vaddph zmm1, zmm0, word [rax + 2]{1to32}
    let instr = decode64(&[0x62, 0xf5, 0x7c, 0x58, 0x58, 0x48, 0x01]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vaddph);
    assert_eq!(instr.operand(2).kind(), OpKind::MemBcst);
    assert_eq!(instr.broadcast_size_log2(), 1);
    assert_eq!(instr.displacement(), 2);
}

#[test]
fn test_evex_rounding_control() {
    // vaddps zmm0, zmm0, zmm1, {rn-sae}: EVEX.b on a register form.
    let instr = decode64(&[0x62, 0xf1, 0x7c, 0x18, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vaddps);
    assert_eq!(instr.evex_rounding(), 0);
    // Rounding forces 512-bit operands regardless of L'L.
    assert_eq!(instr.operand(0).size_code(), 7);
    // {rd-sae} in L'L.
    let instr = decode64(&[0x62, 0xf1, 0x7c, 0x38, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.evex_rounding(), 1);
}

#[test]
fn test_evex_sae_only_sets_rc_pattern() {
    // vcmpps supports SAE but not rounding; the stored side-info keeps
    // the mask bits with the RC-set/b-clear pattern.
    let instr = decode64(&[0x62, 0xf1, 0x74, 0x18, 0xc2, 0xc2, 0x01]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vcmpps);
    assert_eq!(instr.evex() & 0x7f, 0x60);
    assert_ne!(instr.evex() & 0x100, 0);
}

#[test]
fn test_vcmpps_mask_destination() {
    let instr = decode64(&[0x62, 0xf1, 0x74, 0x48, 0xc2, 0xc2, 0x01]).unwrap();
    assert_eq!(instr.operand(0).reg_file(), Some(RegFile::Mask));
    assert_eq!(instr.operand(0).reg(), 0);
    assert_eq!(instr.operand(1).reg(), 1);
    assert_eq!(instr.operand(2).reg(), 2);
    assert_eq!(instr.immediate(), 1);
}

#[test]
fn test_evex_register_form_x_extension() {
    // vaddps zmm0, zmm0, zmm17: EVEX.X extends the rm register.
    let instr = decode64(&[0x62, 0xb1, 0x7c, 0x48, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.operand(2).reg(), 17);
}

#[test]
fn test_is4_blend() {
    // vblendvps xmm3, xmm2, xmm4, xmm4
    let instr = decode64(&[0xc4, 0xe3, 0x69, 0x4a, 0xdc, 0x40]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vblendvps);
    assert_eq!(instr.operand(0).reg(), 3);
    assert_eq!(instr.operand(1).reg(), 2);
    assert_eq!(instr.operand(2).reg(), 4);
    let is4 = instr.operand(3);
    assert_eq!(is4.kind(), OpKind::Reg);
    assert_eq!(is4.reg_file(), Some(RegFile::Vec));
    assert_eq!(is4.reg(), 4);
    assert_eq!(instr.immediate(), 0);
}

#[test]
fn test_movsxd() {
    let instr = decode64(&[0x48, 0x63, 0xc1]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Movsxd);
    assert_eq!(instr.operand(0).size_code(), 4);
    assert_eq!(instr.operand(1).size_code(), 3);
}

#[test]
fn test_vmovss_forms() {
    // Register form carries the vvvv merge operand, memory form not.
    let instr = decode64(&[0xc5, 0xf2, 0x10, 0xc2]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vmovss);
    assert_eq!(instr.operand(1).reg(), 1);
    assert_eq!(instr.operand(2).reg(), 2);
    let instr = decode64(&[0xc5, 0xfa, 0x10, 0x00]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vmovss);
    assert_eq!(instr.operand(1).kind(), OpKind::Mem);
    assert!(instr.operand(2).is_none());
}
