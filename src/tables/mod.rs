//! The dispatch tables and descriptor array.
//!
//! The registry is linked into the packed blob at compile time; the
//! statics below are exact-size copies living in rodata, so decoding
//! involves no startup initialization and no synchronization.

mod builder;
mod registry;

use builder::{EMPTY_DESC, Tables};

use crate::descriptor::InstrDesc;

pub(crate) const TABLES: Tables = builder::build();

const TABLE_LEN: usize = TABLES.len;
const NDESCS: usize = TABLES.ndescs;

/// The packed dispatch table; see [`crate::table`] for the entry
/// encoding.
pub(crate) static DECODE_TABLE: [u16; TABLE_LEN] = {
    let mut table = [0u16; TABLE_LEN];
    let mut idx = 0;
    while idx < table.len() {
        table[idx] = TABLES.table[idx];
        idx += 1;
    }
    table
};

/// Descriptor array addressed by leaf entries.
pub(crate) static DESCRIPTORS: [InstrDesc; NDESCS] = {
    let mut descs = [EMPTY_DESC; NDESCS];
    let mut idx = 0;
    while idx < descs.len() {
        descs[idx] = TABLES.descs[idx];
        idx += 1;
    }
    descs
};
