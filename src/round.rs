//======================================================================
// src/round.rs
// The DIZY round function and its four layers.
//======================================================================

use crate::consts::{LANE_BITS, RC_BITS, SBOX, SEGMENTS, SEGMENT_ORDER};
use crate::state::State;
use crate::variant::DizyVariant;

/// XORs the 4-bit round constant into every 5-bit lane, from the least
/// significant lane up. The raw constant pattern is placed at each lane
/// offset without per-lane masking; the resulting overlap of a lane's
/// top bit with its neighbour is part of the cipher definition.
pub(crate) fn add_round_constant<V: DizyVariant>(mut state: State, rc: u8) -> State {
    for lane in 0..V::LANES {
        state.xor_at(u64::from(rc), lane * LANE_BITS);
    }
    state
}

/// Replaces every 5-bit lane through the substitution table. Lanes are
/// independent of one another.
pub(crate) fn apply_sbox<V: DizyVariant>(state: State) -> State {
    let mut out = State::ZERO;
    for lane in 0..V::LANES {
        let value = state.extract(lane * LANE_BITS, LANE_BITS);
        out.xor_at(u64::from(SBOX[value as usize]), lane * LANE_BITS);
    }
    out
}

/// Applies the variant's diffusion matrix to each group of the state.
/// Output bits are produced most significant first and accumulated by
/// shifting, so the exact bit order of the matrix rows is preserved.
pub(crate) fn apply_matrix<V: DizyVariant>(state: State) -> State {
    let mut out = State::ZERO;
    for g in 0..V::GROUPS {
        let group = state.group(g, V::GROUP_BITS, V::GROUPS);
        for taps in V::MATRIX {
            let mut bit = 0;
            for &tap in *taps {
                // Tap positions count from the group's most significant bit.
                bit ^= (group >> (V::GROUP_BITS - 1 - tap as usize)) & 1;
            }
            out.shl_or(1, bit);
        }
    }
    out
}

/// Splits the state into 8 equal segments and reassembles them in the
/// fixed interleave order, first visited segment at the most
/// significant end.
pub(crate) fn mix_segments<V: DizyVariant>(state: State) -> State {
    let mut out = State::ZERO;
    for &segment in SEGMENT_ORDER.iter() {
        out.shl_or(V::SEGMENT_BITS, state.group(segment, V::SEGMENT_BITS, SEGMENTS));
    }
    out
}

/// One round of the DIZY state transition: constant addition,
/// substitution, linear diffusion, segment mixing.
///
/// The round constant must fit in 4 bits.
pub fn round<V: DizyVariant>(state: State, round_constant: u8) -> State {
    assert!(
        round_constant < (1u8 << RC_BITS),
        "round constant wider than 4 bits"
    );

    #[cfg(feature = "trace")]
    tracing::trace!("state in:         {}", state.hex(V::STATE_BITS));

    let state = add_round_constant::<V>(state, round_constant);
    #[cfg(feature = "trace")]
    tracing::trace!("state const add:  {}", state.hex(V::STATE_BITS));

    let state = apply_sbox::<V>(state);
    #[cfg(feature = "trace")]
    tracing::trace!("state sbox:       {}", state.hex(V::STATE_BITS));

    let state = apply_matrix::<V>(state);
    #[cfg(feature = "trace")]
    tracing::trace!("state matrix:     {}", state.hex(V::STATE_BITS));

    let state = mix_segments::<V>(state);
    #[cfg(feature = "trace")]
    tracing::trace!("state mix:        {}", state.hex(V::STATE_BITS));

    state
}
