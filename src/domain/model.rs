use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute margin around the target inside which a sum counts as a match.
pub const TOLERANCE: f64 = 0.01;

/// Case-insensitive word that ends the session at any prompt.
pub const EXIT_SENTINEL: &str = "sair";

/// Numbers typed by the user for one round. Position is identity: equal
/// values at different positions are different elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberList(Vec<f64>);

impl NumberList {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for NumberList {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Selected positions of a [`NumberList`] with their values, in original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
}

impl Combination {
    /// Left-to-right float sum, no compensation.
    pub fn sum(&self) -> f64 {
        self.values.iter().fold(0.0, |acc, v| acc + v)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}
