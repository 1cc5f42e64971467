#![warn(missing_docs)]

//!
//! A crate that trains classification trees over categorical tabular
//! data under a differential-privacy guarantee.
//!
//! Every statistic the induction algorithm reads from the data,
//! partition sizes, per-label counts, and split scores,
//! is released through the Laplace mechanism,
//! so the trained tree reveals bounded information
//! about any single record.
//!
//! This crate provides two learners over the same tree structure.
//!
//! - [`DpDecisionTree`]:
//!     the private learner. A total budget `epsilon` is divided across
//!     tree layers by a [`LayerPolicy`]; every recursive call spends
//!     exactly its layer's share, regardless of sibling fan-out.
//!
//! - [`Id3`]:
//!     the classic entropy/information-gain baseline,
//!     with no noise and no budget accounting.
//!

pub mod error;
pub mod mechanism;
pub mod sample;
pub mod classifier;
pub mod tree;
pub mod evaluation;
pub mod research;
pub mod prelude;


pub use error::PrivTreeError;

pub use sample::{Attribute, Sample, SampleReader};

pub use classifier::Classifier;

pub use tree::{
    Node,
    BranchNode,
    LeafNode,
    DecisionTreeClassifier,
    LayerPolicy,
    Id3Config,
    Param,
    DpDecisionTree,
    Id3,
};

pub use evaluation::{accuracy, f_scores, FScores, RandomGuesser};

pub use research::{Experiment, TrialRecord};
