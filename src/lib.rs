#![cfg_attr(not(test), no_std)]

#![deny(unsafe_op_in_unsafe_fn)]

//! Bit-level phase alignment over byte-addressed storage.
//!
//! Bit 0 is the most significant bit of the first byte of a store. Bit `n`
//! lives in byte `n >> 3`, at position `n & 7` counted from the most
//! significant end, the way pixels are laid out in packed display memory.

pub mod align;
pub mod common;
pub mod field;
pub mod read;

pub use align::{PhaseAligner, Strategy};
pub use field::{fields, read_field, try_read_field, Fields};
pub use read::{
    read_be16, read_be32, read_byte, read_le16, read_le32,
    try_read_be16, try_read_be32, try_read_byte, try_read_le16, try_read_le32,
};
