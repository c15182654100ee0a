//======================================================================
// src/consts.rs
// Defines constants and lookup tables shared by the DIZY variants.
//======================================================================

/// Width of one substitution lane in bits.
pub const LANE_BITS: usize = 5;

/// Width of a round constant in bits.
pub const RC_BITS: usize = 4;

/// Number of equal segments the mixing layer splits the state into.
pub const SEGMENTS: usize = 8;

/// Rounds per initialization phase, equal to the length of the
/// round-constant schedule.
pub const ROUNDS: usize = 15;

/// Seed of the 4-bit feedback register that drives the schedule.
const RC_SEED: u8 = 0b1000;

/// One step of the 4-bit feedback register: the new low bit is
/// bit 3 XOR bit 0 of the current value.
const fn lfsr_step(state: u8) -> u8 {
    let fb = ((state >> 3) ^ state) & 1;
    ((state << 1) | fb) & 0x0F
}

/// Generates the full round-constant schedule. Each entry records the
/// register value before the step that produces the next one.
pub const fn generate_round_constants() -> [u8; ROUNDS] {
    let mut schedule = [0u8; ROUNDS];
    let mut state = RC_SEED;
    let mut i = 0;
    while i < ROUNDS {
        schedule[i] = state;
        state = lfsr_step(state);
        i += 1;
    }
    schedule
}

/// Round constants (RC), precomputed from the feedback register.
pub const ROUND_CONSTANTS: [u8; ROUNDS] = generate_round_constants();

/// The 5-bit substitution table, applied independently to every lane.
pub const SBOX: [u8; 32] = [
    0x00, 0x04, 0x0e, 0x09, 0x0d, 0x0b, 0x1e, 0x1b,
    0x1c, 0x14, 0x13, 0x18, 0x17, 0x1d, 0x05, 0x0c,
    0x0f, 0x11, 0x08, 0x15, 0x03, 0x1f, 0x19, 0x06,
    0x10, 0x02, 0x16, 0x07, 0x1a, 0x0a, 0x01, 0x12,
];

/// Visit order for the segment-mixing layer. The first visited segment
/// becomes the most significant part of the result.
pub const SEGMENT_ORDER: [usize; SEGMENTS] = [0, 4, 1, 5, 2, 6, 3, 7];

/// Diffusion matrix for the 80-bit variant, one tap set per output bit,
/// most significant output bit first. Tap positions are counted from the
/// most significant bit of a 30-bit group.
pub const M_80: [&[u8]; 30] = [
    &[6, 22],  &[16, 8],  &[0, 18],  &[15], &[1],
    &[7, 27],  &[20, 13], &[2, 23],  &[21], &[11],
    &[12, 17], &[26, 3],  &[10, 28], &[25], &[5],
    &[2, 27],  &[21, 9],  &[11, 24], &[16], &[0],
    &[7, 17],  &[15, 14], &[1, 29],  &[20], &[10],
    &[12, 25], &[22, 4],  &[5, 19],  &[26], &[6],
];

/// Diffusion matrix for the 128-bit variant over 40-bit groups.
pub const M_128: [&[u8]; 40] = [
    &[22, 2],  &[35, 8],  &[16, 28], &[10], &[31],
    &[20, 7],  &[27, 13], &[1, 33],  &[15], &[36],
    &[25, 12], &[32, 18], &[6, 38],  &[0],  &[21],
    &[37, 17], &[26, 3],  &[11, 23], &[5],  &[30],
    &[27, 17], &[30, 9],  &[0, 24],  &[11], &[35],
    &[32, 2],  &[36, 14], &[5, 29],  &[16], &[20],
    &[37, 7],  &[21, 19], &[10, 34], &[1],  &[25],
    &[22, 12], &[31, 4],  &[15, 39], &[6],  &[26],
];
