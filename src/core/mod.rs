//! Automaton Core Module
//!
//! Platform-independent automaton state. This module contains:
//! - Rule numbers and their lookup table
//! - Generations (immutable rows of binary cells)
//! - The state transition function
//!
//! The core is completely deterministic: given the same generation and rule
//! it always produces the same next generation, and it knows nothing about
//! pixels, timing or configuration sources.

mod engine;
mod generation;
mod rule;

pub use engine::{next_generation, Evolution};
pub use generation::{Generation, GenerationError};
pub use rule::{Radix, Rule, RuleError};
