//! The files in `tree/` directory define
//! the decision-tree data structure, the per-layer budget policies,
//! the training configuration, and the two induction algorithms.

mod node;
mod tree_classifier;
mod budget;
mod config;
mod dp_id3;
mod id3;

pub use node::{Node, BranchNode, LeafNode};
pub use tree_classifier::DecisionTreeClassifier;
pub use budget::LayerPolicy;
pub use config::{Id3Config, Param};
pub use dp_id3::DpDecisionTree;
pub use id3::Id3;
