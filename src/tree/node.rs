//! Defines the inner representation of the decision-tree classifier.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::{Sample, PrivTreeError};


/// Enumeration of `BranchNode` and `LeafNode`.
///
/// Nodes are created strictly top-down, one per recursive call of the
/// induction algorithm, and are owned exclusively by their parent.
/// Nothing mutates a subtree once its construction returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on an attribute.
    /// It has one child per attribute value
    /// observed in its training partition.
    Branch(BranchNode),


    /// A node that has no child and predicts a single class label.
    Leaf(LeafNode),
}


/// Represents the branch nodes of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(crate) attribute: String,
    pub(crate) children: BTreeMap<String, Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(crate) fn from_raw(
        attribute: String,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        Self { attribute, children, }
    }


    /// The attribute this node splits on.
    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }


    /// The children of this node, keyed by attribute value.
    #[inline]
    pub fn children(&self) -> &BTreeMap<String, Node> {
        &self.children
    }
}


/// Represents the leaf nodes of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(crate) label: String,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the given label.
    #[inline]
    pub(crate) fn from_raw(label: String) -> Self {
        Self { label }
    }


    /// The class label this leaf predicts.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}


impl Node {
    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// The number of layers below and including this node.
    /// A leaf has depth `1`.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(branch) => {
                let deepest = branch.children.values()
                    .map(|child| child.depth())
                    .max()
                    .unwrap_or(0);
                deepest + 1
            },
        }
    }


    /// Classify the `row`-th record of `sample`
    /// by walking down from this node.
    pub(crate) fn evaluate(&self, sample: &Sample, row: usize)
        -> Result<String, PrivTreeError>
    {
        match self {
            Node::Leaf(leaf) => Ok(leaf.label.clone()),
            Node::Branch(branch) => {
                let attr = sample.attribute(&branch.attribute)
                    .ok_or_else(|| PrivTreeError::UnknownAttribute(
                        branch.attribute.clone()
                    ))?;
                let value = attr.at(row);

                match branch.children.get(value) {
                    Some(child) => child.evaluate(sample, row),
                    None => Err(PrivTreeError::Unclassifiable {
                        attribute: branch.attribute.clone(),
                        value: value.to_string(),
                    }),
                }
            },
        }
    }


    /// Write an indented rendering of the subtree rooted at this node.
    fn write_indented(&self, f: &mut fmt::Formatter<'_>, level: usize)
        -> fmt::Result
    {
        let pad = "\t".repeat(level);
        match self {
            Node::Leaf(leaf) => writeln!(f, "{pad}{}", leaf.label),
            Node::Branch(branch) => {
                writeln!(f, "{pad}{}:", branch.attribute)?;
                for (value, child) in &branch.children {
                    writeln!(f, "{pad}\t{value} ->")?;
                    child.write_indented(f, level + 2)?;
                }
                Ok(())
            },
        }
    }
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
