//! Defines the decision-tree classifier.
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample, PrivTreeError};
use super::node::Node;


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl DecisionTreeClassifier {
    /// The root node of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// The number of layers of the tree.
    /// A single leaf has depth `1`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, sample: &Sample, row: usize)
        -> Result<String, PrivTreeError>
    {
        self.root.evaluate(sample, row)
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
