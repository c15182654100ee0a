//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires up the modules.
//======================================================================
#![no_std]
#![doc = include_str!("../README.md")]

pub use cipher; // Re-export cipher crate for downstream users

// --- Module declarations ---
pub mod consts;
pub mod variant;

mod core;
mod round;
mod state;

pub use crate::core::DizyCore;
pub use crate::round::round;
pub use crate::state::State;
pub use crate::variant::{Dizy128, Dizy80, DizyVariant};

// --- Convenience Type Aliases for Users ---
pub type Dizy80Core = DizyCore<Dizy80>;
pub type Dizy128Core = DizyCore<Dizy128>;
