//! Various types related to exchange graph conversion.

use derive_more::Display;

/// The vertex id type of the input edge list.
pub type VId = i64;

/// The remapped vertex index type of the Glasgow format.
pub type Index = usize;

/// An edge of the input edge list.
pub type Edge = (VId, VId);

/// The category a vertex is classified into.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A non-directed donor, never the target of an edge.
    #[display(fmt = "altruist")]
    Altruist,
    /// A donor/recipient pair.
    #[display(fmt = "pair")]
    Pair,
}

/// The edge weight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(pub f64);

impl Weight {
    /// The weight assigned to every converted edge.
    pub const UNIT: Weight = Weight(1.0);
}

impl Default for Weight {
    fn default() -> Self {
        Self::UNIT
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
