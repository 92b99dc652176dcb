//! Error-path tests: truncation, #UD conditions, mode handling.

use super::{decode32, decode64};
use crate::{DecodeError, DecodeMode, MAX_INSTRUCTION_LEN};

#[test]
fn test_empty_buffer() {
    assert_eq!(decode64(&[]), Err(DecodeError::Partial));
    assert_eq!(decode32(&[]), Err(DecodeError::Partial));
}

#[test]
fn test_truncated_modrm() {
    assert_eq!(decode64(&[0xff]), Err(DecodeError::Partial));
    assert_eq!(decode64(&[0x01]), Err(DecodeError::Partial));
}

#[test]
fn test_truncated_sib_and_disp() {
    // add [rax+rcx], ecx cut short at the SIB byte.
    assert_eq!(decode64(&[0x01, 0x0c]), Err(DecodeError::Partial));
    // Four-byte displacement cut short.
    assert_eq!(decode64(&[0x01, 0x88, 0x11, 0x22]), Err(DecodeError::Partial));
}

#[test]
fn test_truncated_immediate() {
    assert_eq!(decode64(&[0xb8, 0x01, 0x02, 0x03]), Err(DecodeError::Partial));
    assert_eq!(
        decode64(&[0x48, 0xb8, 0, 1, 2, 3, 4, 5, 6]),
        Err(DecodeError::Partial)
    );
    assert_eq!(decode64(&[0xcd]), Err(DecodeError::Partial));
}

#[test]
fn test_truncated_vex_evex() {
    assert_eq!(decode64(&[0xc5]), Err(DecodeError::Partial));
    assert_eq!(decode64(&[0xc4, 0xe2]), Err(DecodeError::Partial));
    assert_eq!(decode64(&[0x62, 0xf1, 0x7c]), Err(DecodeError::Partial));
}

#[test]
fn test_every_strict_prefix_is_partial() {
    let bytes = [0x62, 0xf1, 0x7c, 0x48, 0x58, 0x48, 0x01];
    let full = decode64(&bytes).unwrap();
    assert_eq!(full.size() as usize, bytes.len());
    for cut in 0..bytes.len() {
        assert_eq!(decode64(&bytes[..cut]), Err(DecodeError::Partial));
    }
}

#[test]
fn test_prefixes_only() {
    assert_eq!(decode64(&[0x66, 0x66, 0x66]), Err(DecodeError::Partial));
    assert_eq!(decode64(&[0x66; MAX_INSTRUCTION_LEN]), Err(DecodeError::Partial));
    assert_eq!(decode64(&[0x48; 4]), Err(DecodeError::Partial));
    assert_eq!(decode32(&[0x2e; 7]), Err(DecodeError::Partial));
}

#[test]
fn test_oversized_window_is_never_partial() {
    // With more than 15 bytes available, running out means the
    // instruction would exceed the architectural limit.
    assert_eq!(decode64(&[0x66; 16]), Err(DecodeError::Undefined));
    assert_eq!(decode64(&[0x48; 16]), Err(DecodeError::Undefined));
    // 66 48 b8 <8-byte imm> would need 11 bytes; the prefix run here
    // pushes it past 15.
    let mut long = [0x66u8; 16];
    long[7] = 0x48;
    long[8] = 0xb8;
    assert_eq!(decode64(&long), Err(DecodeError::Undefined));
}

#[test]
fn test_unknown_opcodes_ud() {
    assert_eq!(decode64(&[0x0f, 0x04]), Err(DecodeError::Undefined));
    assert_eq!(decode64(&[0x0f, 0xff]), Err(DecodeError::Undefined));
    assert_eq!(decode64(&[0x0f, 0x3a, 0x00, 0xc0, 0x00]), Err(DecodeError::Undefined));
}

#[test]
fn test_mode_restricted_opcodes() {
    // SYSCALL and SWAPGS are 64-bit only.
    assert_eq!(decode32(&[0x0f, 0x05]), Err(DecodeError::Undefined));
    assert!(decode64(&[0x0f, 0x05]).is_ok());
    assert_eq!(decode32(&[0x0f, 0x01, 0xf8]), Err(DecodeError::Undefined));
    // INTO, AAM and the BCD adjusts are 32-bit only.
    assert_eq!(decode64(&[0xce]), Err(DecodeError::Undefined));
    assert!(decode32(&[0xce]).is_ok());
    assert_eq!(decode64(&[0xd4, 0x0a]), Err(DecodeError::Undefined));
    assert!(decode32(&[0xd4, 0x0a]).is_ok());
    assert_eq!(decode64(&[0x27]), Err(DecodeError::Undefined));
}

#[test]
fn test_lock_rules() {
    // LOCK with a register destination.
    assert_eq!(decode64(&[0xf0, 0x01, 0xc8]), Err(DecodeError::Undefined));
    // LOCK on an instruction that never takes it.
    assert_eq!(decode64(&[0xf0, 0x90]), Err(DecodeError::Undefined));
    assert_eq!(decode64(&[0xf0, 0x89, 0x08]), Err(DecodeError::Undefined));
    // LOCK with a memory destination on a lockable opcode.
    assert!(decode64(&[0xf0, 0x01, 0x08]).is_ok());
    assert!(decode64(&[0xf0, 0x0f, 0xc7, 0x0f]).is_ok());
}

#[test]
fn test_vex_with_legacy_prefixes_ud() {
    assert_eq!(decode64(&[0x66, 0xc5, 0xf8, 0x77]), Err(DecodeError::Undefined));
    assert_eq!(decode64(&[0xf3, 0xc5, 0xf8, 0x77]), Err(DecodeError::Undefined));
    assert_eq!(decode64(&[0xf2, 0xc5, 0xf8, 0x77]), Err(DecodeError::Undefined));
    assert_eq!(decode64(&[0x48, 0xc5, 0xf8, 0x77]), Err(DecodeError::Undefined));
    // A REX that is not the last prefix is dropped, not an error.
    assert!(decode64(&[0x48, 0xf0, 0x01, 0x08]).is_ok());
}

#[test]
fn test_vex_reserved_map_bits_ud() {
    // 3-byte VEX map bits outside 1..=3.
    assert_eq!(
        decode64(&[0xc4, 0xe4, 0x70, 0xf2, 0xca]),
        Err(DecodeError::Undefined)
    );
    // EVEX with the reserved bit 3 of the map field set.
    assert_eq!(
        decode64(&[0x62, 0xf9, 0x7c, 0x48, 0x58, 0xc1]),
        Err(DecodeError::Undefined)
    );
    // EVEX with the fixed one-bit in byte 2 clear.
    assert_eq!(
        decode64(&[0x62, 0xf1, 0x78, 0x58, 0xc1]),
        Err(DecodeError::Undefined)
    );
}

#[test]
fn test_unused_vvvv_ud() {
    // vmovdqa does not take a vvvv operand; a nonzero field is illegal.
    assert_eq!(decode64(&[0xc5, 0xf5, 0x6f, 0xc1]), Err(DecodeError::Undefined));
    assert!(decode64(&[0xc5, 0xfd, 0x6f, 0xc1]).is_ok());
}

#[test]
fn test_mask_register_range_ud() {
    // kandw with vvvv >= 8: only eight opmask registers exist.
    assert_eq!(
        decode64(&[0xc4, 0xe1, 0x1c, 0x41, 0xca]),
        Err(DecodeError::Undefined)
    );
}

#[test]
fn test_evex_zeroing_without_mask_ud() {
    assert_eq!(
        decode64(&[0x62, 0xf1, 0x7c, 0xc8, 0x58, 0xc1]),
        Err(DecodeError::Undefined)
    );
    // Zeroing with a mask register selected is fine.
    assert!(decode64(&[0x62, 0xf1, 0x7c, 0xc9, 0x58, 0xc1]).is_ok());
}

#[test]
fn test_evex_l3_ud() {
    assert_eq!(
        decode64(&[0x62, 0xf1, 0x7c, 0x68, 0x58, 0xc1]),
        Err(DecodeError::Undefined)
    );
}

#[test]
fn test_evex_masking_on_unmaskable_ud() {
    // EVEX gathers demand a mask; plain arithmetic rejects stray aaa
    // when the descriptor forbids masking. vpgatherdd with aaa == 0:
    assert_eq!(
        decode64(&[0x62, 0xf2, 0x7d, 0x48, 0x90, 0x04, 0x0f]),
        Err(DecodeError::Undefined)
    );
}

#[test]
fn test_evex_broadcast_unsupported_ud() {
    // Scalar vaddss cannot broadcast.
    assert_eq!(
        decode64(&[0x62, 0xf1, 0x7e, 0x18, 0x58, 0x48, 0x01]),
        Err(DecodeError::Undefined)
    );
}

#[test]
fn test_evex_sae_unsupported_ud() {
    // vbroadcastss takes neither SAE nor rounding.
    assert_eq!(
        decode64(&[0x62, 0xf2, 0x7d, 0x18, 0x18, 0xc1]),
        Err(DecodeError::Undefined)
    );
}

#[test]
fn test_vsib_requires_sib_ud() {
    // vpgatherdd with rm != 4 has no SIB byte to carry the index.
    assert_eq!(
        decode64(&[0xc4, 0xe2, 0x69, 0x90, 0x01]),
        Err(DecodeError::Undefined)
    );
    // Register-form gather is meaningless.
    assert_eq!(
        decode64(&[0xc4, 0xe2, 0x69, 0x90, 0xc1]),
        Err(DecodeError::Undefined)
    );
}

#[test]
fn test_mov_cr_dr_rules() {
    use crate::Mnemonic;
    // CR1 does not exist.
    assert_eq!(decode64(&[0x0f, 0x22, 0xc8]), Err(DecodeError::Undefined));
    assert!(decode64(&[0x0f, 0x22, 0xd8]).is_ok());
    // REX.R reaches CR8 but is illegal on debug registers.
    let instr = decode64(&[0x44, 0x0f, 0x22, 0xc0]).unwrap();
    assert_eq!(instr.mnemonic(), Mnemonic::MovCr);
    assert_eq!(instr.operand(0).reg(), 8);
    assert_eq!(decode64(&[0x44, 0x0f, 0x21, 0xc0]), Err(DecodeError::Undefined));
}

#[test]
fn test_threednow_suffix_validation() {
    assert_eq!(decode64(&[0x0f, 0x0f, 0xc1, 0x42]), Err(DecodeError::Undefined));
    assert_eq!(decode64(&[0x0f, 0x0f, 0xc1, 0x01]), Err(DecodeError::Undefined));
    assert!(decode64(&[0x0f, 0x0f, 0xc1, 0x0c]).is_ok());
}

#[test]
fn test_lea_requires_memory() {
    assert_eq!(decode64(&[0x8d, 0xc0]), Err(DecodeError::Undefined));
}

#[test]
fn test_evex_vprime_in_32bit_ud() {
    // EVEX.V' must read as zero in 32-bit mode.
    assert_eq!(
        decode32(&[0x62, 0xf1, 0x7c, 0x40, 0x58, 0xc1]),
        Err(DecodeError::Undefined)
    );
    // In 64-bit mode the same encoding extends vvvv to zmm16.
    let instr = decode64(&[0x62, 0xf1, 0x7c, 0x40, 0x58, 0xc1]).unwrap();
    assert_eq!(instr.operand(1).reg(), 16);
}

#[test]
fn test_mode_conversion() {
    assert_eq!(DecodeMode::try_from(32), Ok(DecodeMode::Bits32));
    assert_eq!(DecodeMode::try_from(64), Ok(DecodeMode::Bits64));
    assert!(DecodeMode::try_from(16).is_err());
    assert_eq!(DecodeError::Internal.code(), -3);
}
