//! State transition for elementary automata
//!
//! The row is treated as a ring: the first and last cells are neighbors.
//! For rows of length 1 or 2 a cell can be its own neighbor, which falls out
//! of the same index arithmetic without special cases.

use super::generation::Generation;
use super::rule::Rule;

/// Compute the generation that follows `current` under `rule`
pub fn next_generation(current: &Generation, rule: Rule) -> Generation {
    let cells = current.cells();
    let len = cells.len();

    let next = (0..len)
        .map(|i| {
            let left = cells[(i + len - 1) % len];
            let center = cells[i];
            let right = cells[(i + 1) % len];
            rule.output(left, center, right)
        })
        .collect();

    Generation::from_cells(next)
}

/// Iterator over successive generations, starting after `seed`
pub struct Evolution {
    current: Generation,
    rule: Rule,
}

impl Evolution {
    pub fn new(seed: Generation, rule: Rule) -> Self {
        Self {
            current: seed,
            rule,
        }
    }
}

impl Iterator for Evolution {
    type Item = Generation;

    fn next(&mut self) -> Option<Self::Item> {
        let next = next_generation(&self.current, self.rule);
        self.current = next.clone();
        Some(next)
    }
}
