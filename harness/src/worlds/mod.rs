//! Problem worlds: one module per problem family.
//!
//! Each world exposes an input type, an `encode_*` factory returning an
//! [`crate::contract::EncodedSearchV1`], and a decoder for the incumbent.

pub mod connect_four;
pub mod jobshop;
pub mod sudoku;
pub mod tour;
