//======================================================================
// src/core.rs
// DizyCore: key/IV absorption and the initialized cipher state.
//======================================================================

use core::fmt;
use core::marker::PhantomData;

use cipher::{Iv, IvSizeUser, Key, KeyIvInit, KeySizeUser};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::ROUND_CONSTANTS;
use crate::round::round;
use crate::state::State;
use crate::variant::DizyVariant;

/// The initialized internal state of a DIZY instance.
///
/// Construction absorbs the key and then the IV, each across one full
/// pass over the round-constant schedule. The core only exposes the
/// state transition; keystream extraction is a separate concern layered
/// on top of it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DizyCore<V: DizyVariant> {
    /// The packed cipher state.
    pub(crate) state: State,
    /// PhantomData to associate the core with a specific `DizyVariant`.
    #[zeroize(skip)]
    _variant: PhantomData<V>,
}

impl<V: DizyVariant> KeySizeUser for DizyCore<V> {
    type KeySize = V::KeySize;
}

impl<V: DizyVariant> IvSizeUser for DizyCore<V> {
    type IvSize = V::IvSize;
}

impl<V: DizyVariant> KeyIvInit for DizyCore<V> {
    /// Creates a new `DizyCore`, absorbing key and IV given as
    /// big-endian byte strings.
    fn new(key: &Key<Self>, iv: &Iv<Self>) -> Self {
        Self::initialize(be_uint(key), be_uint(iv))
    }
}

impl<V: DizyVariant> DizyCore<V> {
    /// Runs the full two-phase initialization: the key is absorbed
    /// first, then the IV.
    ///
    /// Panics if `key` or `iv` exceed the variant's key width.
    pub fn initialize(key: u128, iv: u128) -> Self {
        let mut this = Self::initialize_key_only(key);
        #[cfg(feature = "trace")]
        tracing::trace!("absorbing IV");
        this.absorb(iv);
        this
    }

    /// Stops after the key phase, yielding the intermediate state
    /// before any IV material is absorbed.
    ///
    /// Panics if `key` exceeds the variant's key width.
    pub fn initialize_key_only(key: u128) -> Self {
        let mut this = Self {
            state: State::ZERO,
            _variant: PhantomData,
        };
        #[cfg(feature = "trace")]
        tracing::trace!("absorbing key");
        this.absorb(key);
        this
    }

    /// One absorption phase: the value's upper half is injected before
    /// round 0 and its lower half before round 1, then the round
    /// function runs over the whole constant schedule.
    ///
    /// Both halves are injected with the upper half's width. The lower
    /// half is masked to its own width first, so its missing high bits
    /// read as zero; the bit placement this produces is what the cipher
    /// definition asks for.
    fn absorb(&mut self, value: u128) {
        // A 128-bit value cannot exceed the 128-bit variant's width.
        let excess = value.checked_shr(V::KEY_BITS as u32).unwrap_or(0);
        assert!(excess == 0, "key/IV wider than the variant permits");
        let upper = value >> V::LOWER_BITS;
        let lower = value & ((1u128 << V::LOWER_BITS) - 1);
        for (i, &rc) in ROUND_CONSTANTS.iter().enumerate() {
            match i {
                0 => inject_part::<V>(&mut self.state, upper, V::UPPER_BITS),
                1 => inject_part::<V>(&mut self.state, lower, V::UPPER_BITS),
                _ => {}
            }
            self.state = round::<V>(self.state, rc);
        }
    }

    /// Advances the state by one full pass over the round-constant
    /// schedule.
    pub fn step(&mut self) {
        for &rc in ROUND_CONSTANTS.iter() {
            self.state = round::<V>(self.state, rc);
        }
    }

    /// Returns the current internal state.
    pub fn state(&self) -> State {
        self.state
    }
}

/// XORs key or IV material into the state, two bits per lane. Pair `i`
/// comes from the most significant unconsumed bits of `part` and lands
/// one bit below the top of the `i`-th lane from the state's most
/// significant end.
fn inject_part<V: DizyVariant>(state: &mut State, part: u128, part_bits: usize) {
    assert!(part_bits % 2 == 0, "part width must be even");
    for i in 0..part_bits / 2 {
        let pair = ((part >> (part_bits - (i + 1) * 2)) & 0b11) as u64;
        state.xor_at(pair, V::STATE_BITS - (i + 1) * 5 + 3);
    }
}

/// Folds a big-endian byte string into an unsigned integer.
fn be_uint(bytes: &[u8]) -> u128 {
    bytes.iter().fold(0, |acc, &b| (acc << 8) | u128::from(b))
}

impl<V: DizyVariant> fmt::LowerHex for DizyCore<V> {
    /// Renders the state as `STATE_BITS / 4` zero-padded hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state.hex(V::STATE_BITS), f)
    }
}

impl<V: DizyVariant> fmt::Display for DizyCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{self:x}")
    }
}
