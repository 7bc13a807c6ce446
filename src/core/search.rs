use crate::domain::model::{Combination, TOLERANCE};

/// Lazily walks every non-empty subset of `numbers`, smallest size first and
/// lexicographic by position within a size, yielding the ones whose sum is
/// strictly within `tolerance` of `target`.
///
/// The walk is exhaustive (2^n - 1 candidates) and holds no state outside
/// the iterator, so two searches over the same input yield the same sequence.
#[derive(Debug, Clone)]
pub struct CombinationSearch<'a> {
    numbers: &'a [f64],
    target: f64,
    tolerance: f64,
    size: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> CombinationSearch<'a> {
    pub fn new(numbers: &'a [f64], target: f64, tolerance: f64) -> Self {
        Self {
            numbers,
            target,
            tolerance,
            size: 1,
            indices: if numbers.is_empty() { Vec::new() } else { vec![0] },
            exhausted: numbers.is_empty(),
        }
    }

    fn matches(&self) -> bool {
        let sum = self
            .indices
            .iter()
            .fold(0.0, |acc, &i| acc + self.numbers[i]);
        (sum - self.target).abs() < self.tolerance
    }

    /// Moves `indices` to the next subset; grows the size once the current
    /// size is used up.
    fn advance(&mut self) {
        let n = self.numbers.len();
        let r = self.size;

        if let Some(pos) = (0..r).rev().find(|&pos| self.indices[pos] < n - r + pos) {
            self.indices[pos] += 1;
            for next in pos + 1..r {
                self.indices[next] = self.indices[next - 1] + 1;
            }
            return;
        }

        if r == n {
            self.exhausted = true;
            return;
        }

        self.size += 1;
        self.indices = (0..self.size).collect();
        tracing::trace!(size = self.size, "enumerating next subset size");
    }
}

impl Iterator for CombinationSearch<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        while !self.exhausted {
            let found = self.matches().then(|| Combination {
                indices: self.indices.clone(),
                values: self.indices.iter().map(|&i| self.numbers[i]).collect(),
            });
            self.advance();
            if found.is_some() {
                return found;
            }
        }
        None
    }
}

pub fn search(numbers: &[f64], target: f64) -> CombinationSearch<'_> {
    CombinationSearch::new(numbers, target, TOLERANCE)
}

pub fn search_with_tolerance(numbers: &[f64], target: f64, tolerance: f64) -> CombinationSearch<'_> {
    CombinationSearch::new(numbers, target, tolerance)
}
