//! Generations: one time step's row of binary cells

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Error produced when building a generation from raw states
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("a generation needs at least one cell")]
    Empty,
    #[error("cell {index} has state {value}, expected 0 or 1")]
    InvalidState { index: usize, value: u8 },
    #[error("unexpected character '{0}' in generation")]
    InvalidChar(char),
}

/// An immutable row of cell states, indexed left to right
///
/// The length is fixed at creation and is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Generation {
    cells: Box<[bool]>,
}

impl Generation {
    /// Build from an owned vector of states
    pub(crate) fn from_cells(cells: Vec<bool>) -> Self {
        debug_assert!(!cells.is_empty());
        Self {
            cells: cells.into_boxed_slice(),
        }
    }

    /// Build from 0/1 states
    pub fn from_states<I>(states: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = u8>,
    {
        let cells = states
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(GenerationError::InvalidState { index, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if cells.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(Self::from_cells(cells))
    }

    /// Uniformly random states
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, GenerationError> {
        if len == 0 {
            return Err(GenerationError::Empty);
        }
        Ok(Self::from_cells((0..len).map(|_| rng.random::<bool>()).collect()))
    }

    /// All zeros except index `len / 2 - 1`
    ///
    /// A single-cell row has nowhere left of center, so its only cell is set.
    pub fn single_cell(len: usize) -> Result<Self, GenerationError> {
        if len == 0 {
            return Err(GenerationError::Empty);
        }
        let active = (len / 2).saturating_sub(1);
        Ok(Self::from_cells((0..len).map(|i| i == active).collect()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// States as 0/1 bytes
    pub fn states(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| c as u8).collect()
    }

    /// Render with the given characters for live and dead cells
    pub fn render(&self, live: char, dead: char) -> String {
        self.cells
            .iter()
            .map(|&c| if c { live } else { dead })
            .collect()
    }
}

impl TryFrom<Vec<u8>> for Generation {
    type Error = GenerationError;

    fn try_from(states: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_states(states)
    }
}

impl From<Generation> for Vec<u8> {
    fn from(generation: Generation) -> Self {
        generation.states()
    }
}

impl FromStr for Generation {
    type Err = GenerationError;

    /// Parses `0`/`1` or `.`/`#`; whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0' | '.' => Ok(false),
                '1' | '#' => Ok(true),
                other => Err(GenerationError::InvalidChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if cells.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(Self::from_cells(cells))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('1', '0'))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_from_states() {
        let gen = Generation::from_states([0, 1, 1, 0]).unwrap();
        assert_eq!(gen.len(), 4);
        assert_eq!(gen.cells(), &[false, true, true, false]);
        assert_eq!(gen.population(), 2);
    }

    #[test]
    fn test_from_states_rejects_bad_input() {
        assert_eq!(Generation::from_states(Vec::new()), Err(GenerationError::Empty));
        assert_eq!(
            Generation::from_states([0, 2]),
            Err(GenerationError::InvalidState { index: 1, value: 2 })
        );
    }

    #[test]
    fn test_parse_and_display() {
        let gen: Generation = "0001000".parse().unwrap();
        assert_eq!(gen.to_string(), "0001000");
        let gen: Generation = "..#..".parse().unwrap();
        assert_eq!(gen.render('#', '.'), "..#..");
        assert_eq!(
            "01x".parse::<Generation>(),
            Err(GenerationError::InvalidChar('x'))
        );
    }

    #[test]
    fn test_single_cell_position() {
        // 640 / 10 = 64 cells, active index 31
        let gen = Generation::single_cell(64).unwrap();
        assert_eq!(gen.population(), 1);
        assert_eq!(gen.get(31), Some(true));

        let gen = Generation::single_cell(7).unwrap();
        assert_eq!(gen.to_string(), "0010000");

        assert_eq!(Generation::single_cell(1).unwrap().to_string(), "1");
        assert_eq!(Generation::single_cell(2).unwrap().to_string(), "10");
        assert_eq!(Generation::single_cell(0), Err(GenerationError::Empty));
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let a = Generation::random(128, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Generation::random(128, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
        assert!(Generation::random(0, &mut StdRng::seed_from_u64(7)).is_err());
    }

    #[test]
    fn test_serde_as_states() {
        let gen: Generation = "0110".parse().unwrap();
        let json = serde_json::to_string(&gen).unwrap();
        assert_eq!(json, "[0,1,1,0]");
        let back: Generation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gen);
        assert!(serde_json::from_str::<Generation>("[]").is_err());
    }
}
