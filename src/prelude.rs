//! Exports the user-facing surface of this crate.
//!
pub use crate::sample::{
    Attribute,
    Sample,
    SampleReader,
};


pub use crate::tree::{
    // Private learner and its knobs
    DpDecisionTree,
    Id3Config,
    Param,
    LayerPolicy,


    // Non-private baseline
    Id3,


    // Trained model
    DecisionTreeClassifier,
    Node,
};


pub use crate::classifier::Classifier;


pub use crate::evaluation::{
    accuracy,
    f_scores,
    FScores,
    RandomGuesser,
};


pub use crate::error::PrivTreeError;
