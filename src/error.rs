//! Defines the error type used across this crate.
use thiserror::Error;


/// Errors reported by this crate.
/// Configuration errors are raised before any induction begins,
/// so a degenerate noise scale never reaches the Laplace mechanism.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrivTreeError {
    /// The total privacy budget must be strictly positive.
    #[error("epsilon must be positive, got {0}")]
    NonPositiveEpsilon(f64),


    /// The scaling factor feeds `m - 1` and `m^d - 1` denominators
    /// in the exponential layer policies.
    #[error("m value must be greater than 1, got {0}")]
    InvalidMValue(f64),


    /// The proportion of each layer's budget spent on the row-count query.
    #[error("a proportion must be in [0, 1], got {0}")]
    InvalidAProportion(f64),


    /// A parameter literal that is neither a number nor `rand(a, b)`.
    #[error("malformed parameter literal: `{0}`")]
    MalformedParam(String),


    /// An unknown layer-policy name.
    #[error("unknown layer policy: `{0}`")]
    UnknownLayerPolicy(String),


    /// A record reached a branch node whose split attribute takes a value
    /// that no child was grown for.
    /// The record cannot be classified by the tree.
    #[error("no branch for value `{value}` of attribute `{attribute}`")]
    Unclassifiable {
        /// The split attribute at the branch node.
        attribute: String,
        /// The record's value for that attribute.
        value: String,
    },


    /// A record refers to an attribute the sample does not have.
    #[error("attribute `{0}` does not exist in the sample")]
    UnknownAttribute(String),


    /// The sample has no rows, or a column length disagrees
    /// with the class column.
    #[error("invalid sample shape: {0} rows, {1} attributes")]
    InvalidShape(usize, usize),
}
