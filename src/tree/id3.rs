//! Defines the classic, non-private ID3 baseline.
use std::collections::BTreeMap;

use crate::Sample;
use super::node::{Node, BranchNode, LeafNode};
use super::tree_classifier::DecisionTreeClassifier;


/// Classic entropy-based ID3 induction.
/// No noise is added and no privacy budget is spent;
/// this learner exists as a reference point for the private one.
///
/// The recursion stops when no attribute is left
/// (majority-label leaf) or when a partition carries
/// a single remaining label.
/// There is no depth limit.
pub struct Id3;


impl Id3 {
    /// Construct a new instance of [`Id3`].
    #[inline]
    pub fn new() -> Self {
        Self
    }


    /// Train a decision tree on `sample`.
    pub fn fit(&self, sample: &Sample) -> DecisionTreeClassifier {
        let n_sample = sample.shape().0;
        let rows = (0..n_sample).collect::<Vec<usize>>();
        let attrs = (0..sample.attributes().len()).collect::<Vec<usize>>();

        let root = grow(sample, rows, &attrs[..]);
        DecisionTreeClassifier::from(root)
    }
}


impl Default for Id3 {
    fn default() -> Self {
        Self::new()
    }
}


fn grow(sample: &Sample, rows: Vec<usize>, attrs: &[usize]) -> Node {
    let label_counts = sample.class_labels()
        .iter()
        .map(|label| sample.count_label(label, &rows[..]))
        .collect::<Vec<_>>();

    // Majority label, ties to the earliest declared label.
    let majority = sample.class_labels()
        .iter()
        .zip(&label_counts)
        .fold(None::<(&str, usize)>, |best, (label, &count)| match best {
            Some((_, top)) if count <= top => best,
            _ => Some((label, count)),
        })
        .map(|(label, _)| label.to_string())
        .expect("no class labels declared");

    if attrs.is_empty() {
        return Node::Leaf(LeafNode::from_raw(majority));
    }

    let n_distinct = label_counts.iter().filter(|&&c| c > 0).count();
    if n_distinct <= 1 {
        return Node::Leaf(LeafNode::from_raw(majority));
    }

    // Pick the attribute with the largest information gain,
    // ties to the earliest in declared order.
    let best_attr = attrs.iter()
        .copied()
        .map(|a| (a, information_gain(sample, &rows[..], a)))
        .fold(None::<(usize, f64)>, |best, (a, gain)| match best {
            Some((_, top)) if gain <= top => best,
            _ => Some((a, gain)),
        })
        .map(|(a, _)| a)
        .unwrap();

    let remaining = attrs.iter()
        .copied()
        .filter(|&a| a != best_attr)
        .collect::<Vec<_>>();

    let attribute = &sample.attributes()[best_attr];
    let mut children = BTreeMap::new();
    for value in attribute.domain() {
        let child_rows = rows.iter()
            .copied()
            .filter(|&i| attribute.at(i) == value)
            .collect::<Vec<_>>();
        if child_rows.is_empty() {
            continue;
        }

        children.insert(value.clone(), grow(sample, child_rows, &remaining[..]));
    }

    Node::Branch(BranchNode::from_raw(attribute.name().to_string(), children))
}


/// The entropy `H(D) = -sum_i p_i log2(p_i)` of the class distribution
/// over the partition `rows`.
fn entropy(sample: &Sample, rows: &[usize]) -> f64 {
    let total = rows.len() as f64;
    sample.class_labels()
        .iter()
        .map(|label| sample.count_label(label, rows))
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// The information gain `H(D) - sum_v (|D_v|/|D|) H(D_v)`
/// of splitting `rows` on the attribute at index `attr`.
fn information_gain(sample: &Sample, rows: &[usize], attr: usize) -> f64 {
    let attribute = &sample.attributes()[attr];
    let total = rows.len() as f64;

    let mut gain = entropy(sample, rows);
    for value in attribute.domain() {
        let subset = rows.iter()
            .copied()
            .filter(|&i| attribute.at(i) == value)
            .collect::<Vec<_>>();
        if subset.is_empty() {
            continue;
        }

        gain -= (subset.len() as f64 / total) * entropy(sample, &subset[..]);
    }

    gain
}
