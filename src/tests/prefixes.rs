//! Legacy-prefix, REX and VEX/EVEX prefix handling.

use super::{decode32, decode64};
use crate::{Mnemonic, REG_DS, REG_FS, REG_GS, REG_NONE, RegFile};

#[test]
fn test_rex_counts_only_when_last() {
    // 48 66 01 c8: the REX byte is not adjacent to the opcode and is
    // dropped; the 66h prefix still applies.
    let instr = decode64(&[0x48, 0x66, 0x01, 0xc8]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Add);
    assert_eq!(instr.size(), 4);
    assert_eq!(instr.operand_size_code(), 1);
    assert_eq!(instr.operand(0).size_code(), 2);
    // Swapped order keeps the REX.
    let instr = decode64(&[0x66, 0x48, 0x01, 0xc8]).unwrap();
    assert_eq!(instr.operand(0).size_code(), 4);
}

#[test]
fn test_segment_overrides_64bit() {
    let instr = decode64(&[0x64, 0x89, 0x08]).unwrap();
    assert_eq!(instr.segment(), REG_FS);
    let instr = decode64(&[0x65, 0x89, 0x08]).unwrap();
    assert_eq!(instr.segment(), REG_GS);
    // ES/CS/SS/DS overrides are ignored in 64-bit mode.
    let instr = decode64(&[0x3e, 0x89, 0x08]).unwrap();
    assert_eq!(instr.segment(), REG_NONE);
}

#[test]
fn test_segment_overrides_32bit_last_wins() {
    let instr = decode32(&[0x3e, 0x89, 0x08]).unwrap();
    assert_eq!(instr.segment(), REG_DS);
    let instr = decode32(&[0x3e, 0x64, 0x89, 0x08]).unwrap();
    assert_eq!(instr.segment(), REG_FS);
    let instr = decode32(&[0x64, 0x3e, 0x89, 0x08]).unwrap();
    assert_eq!(instr.segment(), REG_DS);
}

#[test]
fn test_address_size_codes() {
    assert_eq!(decode64(&[0x90]).unwrap().address_size_code(), 3);
    assert_eq!(decode64(&[0x67, 0x90]).unwrap().address_size_code(), 2);
    assert_eq!(decode32(&[0x90]).unwrap().address_size_code(), 2);
    assert_eq!(decode32(&[0x67, 0x90]).unwrap().address_size_code(), 1);
}

#[test]
fn test_rep_last_wins() {
    let instr = decode64(&[0xf3, 0xa4]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Movs);
    assert!(instr.has_rep() && !instr.has_repnz());
    let instr = decode64(&[0xf3, 0xf2, 0xa4]).unwrap();
    assert!(instr.has_repnz() && !instr.has_rep());
    let instr = decode64(&[0xf2, 0xf3, 0xa4]).unwrap();
    assert!(instr.has_rep());
}

#[test]
fn test_rep_beats_66_as_mandatory_prefix() {
    // 66 f3 0f bc: F3 wins the mandatory-prefix slot, so this is TZCNT
    // with a 16-bit operand.
    let instr = decode64(&[0x66, 0xf3, 0x0f, 0xbc, 0xc1]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Tzcnt);
    assert_eq!(instr.operand_size_code(), 1);
}

#[test]
fn test_rex_register_extensions() {
    // REX.R extends the reg field, REX.B the rm field.
    let instr = decode64(&[0x4c, 0x01, 0xc8]).unwrap();
    assert_eq!(instr.operand(1).reg(), 9);
    let instr = decode64(&[0x49, 0x01, 0xc8]).unwrap();
    assert_eq!(instr.operand(0).reg(), 8);
}

#[test]
fn test_rex_makes_spl_addressable() {
    // mov spl, dil needs REX; without it these are AH/BH.
    let instr = decode64(&[0x40, 0x88, 0xfc]).unwrap();
    assert_eq!(instr.operand(0).reg(), 4);
    assert_eq!(instr.operand(0).reg_file(), Some(RegFile::Gpl));
    assert_eq!(instr.operand(1).reg(), 7);
    assert_eq!(instr.operand(1).reg_file(), Some(RegFile::Gpl));
    let instr = decode64(&[0x88, 0xfc]).unwrap();
    assert_eq!(instr.operand(0).reg_file(), Some(RegFile::Gph));
    assert_eq!(instr.operand(1).reg_file(), Some(RegFile::Gph));
}

#[test]
fn test_vex2_fields() {
    // vaddps xmm1, xmm7, xmm2
    let instr = decode64(&[0xc5, 0xc0, 0x58, 0xca]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vaddps);
    assert_eq!(instr.operand(0).reg(), 1);
    assert_eq!(instr.operand(1).reg(), 7);
    assert_eq!(instr.operand(2).reg(), 2);
    assert_eq!(instr.operand(0).size_code(), 5);
}

#[test]
fn test_vex3_rxb_extensions() {
    // vaddps xmm8, xmm0, xmm9: R and B from the second VEX byte.
    let instr = decode64(&[0xc4, 0x41, 0x7c, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.operand(0).reg(), 8);
    assert_eq!(instr.operand(2).reg(), 9);
}

#[test]
fn test_vex3_b_ignored_in_32bit() {
    // The complemented B bit is an extension in 64-bit mode and reads
    // as zero in 32-bit mode.
    let instr = decode64(&[0xc4, 0xc1, 0x7c, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.operand(2).reg(), 9);
    let instr = decode32(&[0xc4, 0xc1, 0x7c, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vaddps);
    assert_eq!(instr.operand(2).reg(), 1);
}

#[test]
fn test_vex_vvvv_masked_in_32bit() {
    // vvvv reaches only xmm0..7 in 32-bit mode.
    let bytes = [0xc4, 0xe1, 0x04, 0x58, 0xca];
    let instr = decode64(&bytes).unwrap();
    assert_eq!(instr.operand(1).reg(), 15);
    let instr = decode32(&bytes).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vaddps);
    assert_eq!(instr.operand(1).reg(), 7);
}

#[test]
fn test_vex_w_ignored_when_not_split() {
    let instr = decode64(&[0xc4, 0xe1, 0xf4, 0x58, 0xc2]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::Vaddps);
    assert_eq!(instr.size(), 5);
    assert_eq!(instr.operand(1).reg(), 1);
}

#[test]
fn test_vex_map0_is_undefined() {
    use crate::DecodeError;
    assert_eq!(
        decode64(&[0xc4, 0xe0, 0x7c, 0x58, 0xc1]),
        Err(DecodeError::Undefined)
    );
}

#[test]
fn test_evex_stores_fourth_byte_marker() {
    // Plain EVEX stores only the masking bits plus the presence
    // marker.
    let instr = decode64(&[0x62, 0xf1, 0x7c, 0x48, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.evex(), 0x100);
    let instr = decode64(&[0x62, 0xf1, 0x7c, 0x4b, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.evex(), 0x103);
    assert_eq!(instr.evex_mask(), 3);
    // Zeroing with a mask.
    let instr = decode64(&[0x62, 0xf1, 0x7c, 0xc9, 0x58, 0xc1]).unwrap();
    assert!(instr.evex_zeroing());
}

#[test]
fn test_no_evex_means_zero_side_info() {
    assert_eq!(decode64(&[0xc5, 0xf4, 0x58, 0xc2]).unwrap().evex(), 0);
    assert_eq!(decode64(&[0x48, 0x01, 0xc8]).unwrap().evex(), 0);
}
