//! Deterministic placeholder text
//!
//! This crate provides the seeded generator behind the `lorem` tools:
//! a xoshiro128++ stream, the random primitives derived from it, and the
//! word/sentence/paragraph synthesizer. Output for a given seed is
//! byte-identical across runs and platforms.
//!
//! The PRNG, seeder, sort and word lists are no_std compatible. The
//! `std` feature (on by default) adds the text generator, which needs
//! float math and heap allocation.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod rng;
pub mod seed;
pub mod sort;
pub mod vocab;

#[cfg(feature = "std")]
pub mod generator;
#[cfg(feature = "std")]
pub mod text;

pub use error::Error;
pub use rng::Xoshiro128pp;

#[cfg(feature = "std")]
pub use generator::TextGenerator;
#[cfg(feature = "std")]
pub use text::Length;

/// Default seed used by the CLI and fixtures
pub const DEFAULT_SEED: u32 = 47513;
