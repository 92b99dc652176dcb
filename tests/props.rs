//! Randomized decoder invariants.

use proptest::prelude::*;
use x86_decode::{DecodeError, DecodeMode, MAX_INSTRUCTION_LEN, decode_one};

proptest! {
    // The decoder must never panic, and a successful decode reports a
    // length within the buffer and the architectural cap.
    #[test]
    fn decode_never_panics_and_size_is_sane_64(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INSTRUCTION_LEN)
    ) {
        if let Ok(instr) = decode_one(&bytes, DecodeMode::Bits64, 0x1000) {
            let size = instr.size() as usize;
            prop_assert!(size >= 1);
            prop_assert!(size <= bytes.len().min(MAX_INSTRUCTION_LEN));
        }
    }

    #[test]
    fn decode_never_panics_and_size_is_sane_32(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INSTRUCTION_LEN)
    ) {
        if let Ok(instr) = decode_one(&bytes, DecodeMode::Bits32, 0x1000) {
            let size = instr.size() as usize;
            prop_assert!(size >= 1);
            prop_assert!(size <= bytes.len().min(MAX_INSTRUCTION_LEN));
        }
    }

    // Decoding is a pure function of the consumed bytes: the exact
    // prefix re-decodes to the identical record, truncating by one
    // yields "need more bytes", and suffix bytes never matter.
    #[test]
    fn consumed_prefix_determines_result(
        bytes in proptest::collection::vec(any::<u8>(), 1..=MAX_INSTRUCTION_LEN),
        suffix in proptest::collection::vec(any::<u8>(), 0..4)
    ) {
        if let Ok(instr) = decode_one(&bytes, DecodeMode::Bits64, 0) {
            let size = instr.size() as usize;
            let again = decode_one(&bytes[..size], DecodeMode::Bits64, 0);
            prop_assert_eq!(again, Ok(instr));

            prop_assert_eq!(
                decode_one(&bytes[..size - 1], DecodeMode::Bits64, 0),
                Err(DecodeError::Partial)
            );

            if bytes[..size].len() + suffix.len() <= MAX_INSTRUCTION_LEN {
                let mut extended = bytes[..size].to_vec();
                extended.extend_from_slice(&suffix);
                prop_assert_eq!(decode_one(&extended, DecodeMode::Bits64, 0), Ok(instr));
            }
        }
    }

    // Streams consisting purely of prefix bytes never form an
    // instruction.
    #[test]
    fn prefix_only_streams_are_partial(
        picks in proptest::collection::vec(0usize..10, 1..=MAX_INSTRUCTION_LEN)
    ) {
        const PREFIXES: [u8; 10] =
            [0x26, 0x2e, 0x36, 0x3e, 0x64, 0x65, 0x66, 0x67, 0xf0, 0xf2];
        let bytes: Vec<u8> = picks.iter().map(|&p| PREFIXES[p]).collect();
        prop_assert_eq!(
            decode_one(&bytes, DecodeMode::Bits64, 0),
            Err(DecodeError::Partial)
        );
        prop_assert_eq!(
            decode_one(&bytes, DecodeMode::Bits32, 0),
            Err(DecodeError::Partial)
        );
    }

    // Identical inputs decode identically (no hidden state).
    #[test]
    fn decoding_is_deterministic(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INSTRUCTION_LEN)
    ) {
        let first = decode_one(&bytes, DecodeMode::Bits64, 0x7fff_0000);
        let second = decode_one(&bytes, DecodeMode::Bits64, 0x7fff_0000);
        prop_assert_eq!(first, second);
    }
}
