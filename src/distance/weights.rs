//! Cost weights for the four edit operations.
//!
//! Every operation carries its own non-negative multiplier. Nothing ties the
//! weights together: a swap may be made cheaper or dearer than a delete plus an
//! insert, and a weight of zero is a legitimate choice that is never confused
//! with "not supplied".

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{EditDistanceError, Result};

/// Numeric type usable as an edit cost.
///
/// Integer weights yield integer distances and floating point weights yield
/// real distances. The distance core only ever adds weights together with
/// [`Weight::add_cost`] and compares partial sums.
pub trait Weight:
    Copy + PartialOrd + Add<Output = Self> + Zero + One + fmt::Debug + Send + Sync + 'static
{
    /// Sum of two costs. Integer sums saturate at the type's maximum.
    fn add_cost(self, other: Self) -> Self;
}

macro_rules! saturating_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn add_cost(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

saturating_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Weight for f32 {
    #[inline]
    fn add_cost(self, other: Self) -> Self {
        self + other
    }
}

impl Weight for f64 {
    #[inline]
    fn add_cost(self, other: Self) -> Self {
        self + other
    }
}

/// The four edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transposition of two adjacent symbols.
    Swap,
    /// Replacement of one symbol by another.
    Substitute,
    /// Insertion of a target symbol.
    Insert,
    /// Deletion of a source symbol.
    Delete,
}

impl Operation {
    /// All operations, in the order the recurrence considers them.
    pub const ALL: [Operation; 4] = [
        Operation::Substitute,
        Operation::Swap,
        Operation::Delete,
        Operation::Insert,
    ];

    /// Lowercase name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Swap => "swap",
            Operation::Substitute => "substitute",
            Operation::Insert => "insert",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully resolved cost weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostWeights<W> {
    pub swap: W,
    pub substitute: W,
    pub insert: W,
    pub delete: W,
}

impl<W: Weight> Default for CostWeights<W> {
    fn default() -> Self {
        Self::uniform(W::one())
    }
}

impl<W: Weight> CostWeights<W> {
    /// Create weights from explicit values.
    pub fn new(swap: W, substitute: W, insert: W, delete: W) -> Self {
        Self {
            swap,
            substitute,
            insert,
            delete,
        }
    }

    /// Use the same weight for every operation.
    pub fn uniform(weight: W) -> Self {
        Self::new(weight, weight, weight, weight)
    }

    pub fn with_swap(mut self, swap: W) -> Self {
        self.swap = swap;
        self
    }

    pub fn with_substitute(mut self, substitute: W) -> Self {
        self.substitute = substitute;
        self
    }

    pub fn with_insert(mut self, insert: W) -> Self {
        self.insert = insert;
        self
    }

    pub fn with_delete(mut self, delete: W) -> Self {
        self.delete = delete;
        self
    }

    /// Weight of a single operation.
    pub fn get(&self, operation: Operation) -> W {
        match operation {
            Operation::Swap => self.swap,
            Operation::Substitute => self.substitute,
            Operation::Insert => self.insert,
            Operation::Delete => self.delete,
        }
    }

    /// Check that every weight is non-negative.
    ///
    /// NaN compares as neither smaller nor larger than zero and is rejected
    /// along with negative values. Invalid weights are reported, never clamped.
    pub fn validate(&self) -> Result<()> {
        for operation in Operation::ALL {
            let value = self.get(operation);
            match value.partial_cmp(&W::zero()) {
                Some(Ordering::Equal) | Some(Ordering::Greater) => {}
                _ => return Err(EditDistanceError::invalid_weight(operation, value)),
            }
        }
        Ok(())
    }
}

/// Optionally supplied weights, as they arrive from a caller or a config file.
///
/// A field left as `None` resolves to 1. An explicit zero stays zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightOverrides<W> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<W>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitute: Option<W>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert: Option<W>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<W>,
}

impl<W> Default for WeightOverrides<W> {
    fn default() -> Self {
        Self {
            swap: None,
            substitute: None,
            insert: None,
            delete: None,
        }
    }
}

impl<W: Weight> WeightOverrides<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swap(mut self, swap: W) -> Self {
        self.swap = Some(swap);
        self
    }

    pub fn substitute(mut self, substitute: W) -> Self {
        self.substitute = Some(substitute);
        self
    }

    pub fn insert(mut self, insert: W) -> Self {
        self.insert = Some(insert);
        self
    }

    pub fn delete(mut self, delete: W) -> Self {
        self.delete = Some(delete);
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: WeightOverrides<W>) -> Self {
        Self {
            swap: other.swap.or(self.swap),
            substitute: other.substitute.or(self.substitute),
            insert: other.insert.or(self.insert),
            delete: other.delete.or(self.delete),
        }
    }

    /// Fill unset fields with 1.
    pub fn resolve(&self) -> CostWeights<W> {
        let one = W::one();
        CostWeights {
            swap: self.swap.unwrap_or(one),
            substitute: self.substitute.unwrap_or(one),
            insert: self.insert.unwrap_or(one),
            delete: self.delete.unwrap_or(one),
        }
    }
}

impl<W: Weight> From<CostWeights<W>> for WeightOverrides<W> {
    fn from(weights: CostWeights<W>) -> Self {
        Self {
            swap: Some(weights.swap),
            substitute: Some(weights.substitute),
            insert: Some(weights.insert),
            delete: Some(weights.delete),
        }
    }
}
