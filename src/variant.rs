//======================================================================
// src/variant.rs
// Defines security parameter variants for DIZY.
//======================================================================

use cipher::consts::{U10, U16};

use crate::consts::{LANE_BITS, M_128, M_80, SEGMENTS};

/// A trait that defines the parameters for a specific DIZY variant.
///
/// Each variant is a single immutable configuration record: state and
/// key widths, the group size and matrix of the diffusion layer, and
/// the split used when absorbing key and IV material.
pub trait DizyVariant: Sized + Clone {
    /// Key size in bytes.
    type KeySize: cipher::ArrayLength<u8>;
    /// IV size in bytes. The IV is always as wide as the key.
    type IvSize: cipher::ArrayLength<u8>;

    /// Key (and IV) width in bits.
    const KEY_BITS: usize;
    /// State width in bits.
    const STATE_BITS: usize;
    /// Group width of the linear diffusion layer in bits.
    const GROUP_BITS: usize;
    /// Tap sets of the diffusion matrix, one per output bit.
    const MATRIX: &'static [&'static [u8]];

    /// Width of the upper key/IV half. Both halves are absorbed with
    /// this width.
    const UPPER_BITS: usize;
    /// Width of the lower key/IV half.
    const LOWER_BITS: usize;

    /// Number of 5-bit substitution lanes in the state.
    const LANES: usize = Self::STATE_BITS / LANE_BITS;
    /// Number of groups the diffusion layer splits the state into.
    const GROUPS: usize = Self::STATE_BITS / Self::GROUP_BITS;
    /// Width of one mixing segment in bits.
    const SEGMENT_BITS: usize = Self::STATE_BITS / SEGMENTS;
}

/// DIZY variant with an 80-bit key and a 120-bit state.
#[derive(Clone)]
pub struct Dizy80;
impl DizyVariant for Dizy80 {
    type KeySize = U10;
    type IvSize = U10;

    const KEY_BITS: usize = 80;
    const STATE_BITS: usize = 120;
    const GROUP_BITS: usize = 30;
    const MATRIX: &'static [&'static [u8]] = &M_80;

    const UPPER_BITS: usize = 48;
    const LOWER_BITS: usize = 32;
}

/// DIZY variant with a 128-bit key and a 160-bit state.
#[derive(Clone)]
pub struct Dizy128;
impl DizyVariant for Dizy128 {
    type KeySize = U16;
    type IvSize = U16;

    const KEY_BITS: usize = 128;
    const STATE_BITS: usize = 160;
    const GROUP_BITS: usize = 40;
    const MATRIX: &'static [&'static [u8]] = &M_128;

    const UPPER_BITS: usize = 64;
    const LOWER_BITS: usize = 64;
}
