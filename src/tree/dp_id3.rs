//! Defines the differentially private decision-tree induction algorithm.
use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::Sample;
use crate::mechanism::laplace;
use super::node::{Node, BranchNode, LeafNode};
use super::tree_classifier::DecisionTreeClassifier;
use super::config::Id3Config;


/// Generates a [`DecisionTreeClassifier`] from a categorical sample
/// under an `epsilon`-differential-privacy guarantee.
///
/// Every statistic read from the data, the partition size,
/// the per-label counts behind a leaf,
/// and the marginal/joint counts behind a split score,
/// is released through the Laplace mechanism.
///
/// Budget accounting is per layer, not per node:
/// every recursive call at depth `n` spends exactly
/// `layer_policy.fraction(m, n, d) * epsilon`,
/// regardless of how many sibling branches exist at that depth.
/// Sibling calls query mutually exclusive partitions,
/// so they compose in parallel and the total spend over one
/// root-to-leaf path never exceeds `epsilon`.
///
/// # Example
/// ```no_run
/// use privtree::prelude::*;
///
/// # fn f(sample: &Sample) -> Result<(), PrivTreeError> {
/// let config = Id3Config::new(1.0, 4, 2.0, 0.5, LayerPolicy::EvenSplit)?;
/// let tree = DpDecisionTree::new(config)
///     .seed(777)
///     .fit(sample);
/// # Ok(())
/// # }
/// ```
pub struct DpDecisionTree {
    config: Id3Config,
    rng: StdRng,
}


impl DpDecisionTree {
    /// Construct a new instance of [`DpDecisionTree`]
    /// with an entropy-seeded noise source.
    #[inline]
    pub fn new(config: Id3Config) -> Self {
        Self { config, rng: StdRng::from_entropy(), }
    }


    /// Seed the noise source.
    /// Useful to reproduce a training run exactly.
    /// Note that a fixed, public seed voids the privacy guarantee.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }


    /// The configuration of this learner.
    #[inline]
    pub fn config(&self) -> &Id3Config {
        &self.config
    }


    /// Train a decision tree on `sample`,
    /// spending the configured privacy budget once.
    pub fn fit(&mut self, sample: &Sample) -> DecisionTreeClassifier {
        let n_sample = sample.shape().0;
        let rows = (0..n_sample).collect::<Vec<usize>>();
        let attrs = (0..sample.attributes().len()).collect::<Vec<usize>>();

        debug!(
            epsilon = self.config.epsilon,
            max_depth = self.config.max_depth,
            policy = %self.config.layer_policy,
            n_sample,
            "growing private tree"
        );

        let root = self.grow(sample, rows, &attrs[..], 0);
        DecisionTreeClassifier::from(root)
    }


    /// One recursive call of the induction.
    /// `rows` indexes the current partition of `sample`;
    /// `attrs` indexes the attributes still available for splitting,
    /// in declared order.
    fn grow(
        &mut self,
        sample: &Sample,
        rows: Vec<usize>,
        attrs: &[usize],
        depth: usize,
    ) -> Node
    {
        let config = self.config;
        let d = config.max_depth + 1;

        // This layer's slice of the total budget.
        // `eps1` funds the row-count feasibility check,
        // the remainder funds either the leaf label or the split scores.
        let eps_layer =
            config.layer_policy.fraction(config.m_value, depth, d)
            * config.epsilon;
        let eps1 = eps_layer * config.a_proportion;
        let eps_rest = eps_layer - eps1;

        let noisy_rows = rows.len() as f64 + laplace(&mut self.rng, 1.0 / eps1);

        let max_domain = attrs.iter()
            .map(|&a| sample.attributes()[a].domain_size())
            .max()
            .unwrap_or(0);
        let n_labels = sample.class_labels().len();

        // Stop when no attribute is left, the depth cap is reached,
        // or the expected per-cell count at the next layer is too small
        // for the signal to dominate the noise.
        // The noisy count may be negative here; the density test then
        // fails and a leaf is emitted, which is the intended reading.
        let out_of_attributes = attrs.is_empty();
        let depth_exceeded = depth == config.max_depth;
        let too_sparse = !out_of_attributes
            && noisy_rows / ((max_domain * n_labels) as f64)
                < std::f64::consts::SQRT_2 / eps1;

        if out_of_attributes || too_sparse || depth_exceeded {
            return self.noisy_majority_leaf(sample, &rows[..], eps_rest);
        }

        // Score every remaining attribute over its full declared domain,
        // never only the observed values,
        // so the chosen split leaks nothing about which values are absent.
        let eps2 = eps_rest / (2.0 * attrs.len() as f64);
        let mut best: Option<(usize, f64)> = None;
        for &a in attrs {
            let score = self.split_score(sample, &rows[..], a, eps2);
            match best {
                Some((_, top)) if score <= top => {},
                _ => { best = Some((a, score)); },
            }
        }
        // `attrs` is non-empty here.
        let (best_attr, best_score) = best.unwrap();

        debug!(
            depth,
            attribute = sample.attributes()[best_attr].name(),
            score = best_score,
            eps_layer,
            "split"
        );

        let remaining = attrs.iter()
            .copied()
            .filter(|&a| a != best_attr)
            .collect::<Vec<_>>();

        // One child per value observed in this partition.
        // Unobserved legal values get no child; a record carrying one
        // at evaluation time is reported as unclassifiable.
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

            let child = self.grow(sample, child_rows, &remaining[..], depth + 1);
            children.insert(value.clone(), child);
        }

        Node::Branch(
            BranchNode::from_raw(attribute.name().to_string(), children)
        )
    }


    /// Emit a leaf holding the label with the largest noisy count,
    /// one independent draw per declared label.
    /// Ties keep the earliest label in declared order.
    fn noisy_majority_leaf(
        &mut self,
        sample: &Sample,
        rows: &[usize],
        eps_rest: f64,
    ) -> Node
    {
        let mut best: Option<(&str, f64)> = None;
        for label in sample.class_labels() {
            let noisy = sample.count_label(label, rows) as f64
                + laplace(&mut self.rng, 1.0 / eps_rest);
            match best {
                Some((_, top)) if noisy <= top => {},
                _ => { best = Some((label, noisy)); },
            }
        }

        // The declared label set is never empty for a valid sample.
        let (label, _) = best.expect("no class labels declared");
        Node::Leaf(LeafNode::from_raw(label.to_string()))
    }


    /// The noisy mutual-information-like utility of splitting on `attr`:
    /// the sum of `joint * log2(joint / marginal)` over every
    /// (domain value, class label) cell,
    /// where each count carries independent `Laplace(0, 1/eps2)` noise.
    ///
    /// Cells whose noisy marginal or joint is not strictly positive
    /// contribute zero: the logarithm is undefined there,
    /// and skipping such cells is the documented policy,
    /// not an omission.
    fn split_score(
        &mut self,
        sample: &Sample,
        rows: &[usize],
        attr: usize,
        eps2: f64,
    ) -> f64
    {
        let attribute = &sample.attributes()[attr];
        let mut score = 0.0;

        for value in attribute.domain() {
            let marginal = attribute.count(value, rows) as f64
                + laplace(&mut self.rng, 1.0 / eps2);

            for label in sample.class_labels() {
                let joint = sample.count_joint(attribute, value, label, rows) as f64
                    + laplace(&mut self.rng, 1.0 / eps2);

                if marginal > 0.0 && joint > 0.0 {
                    score += joint * (joint / marginal).log2();
                }
            }
        }

        score
    }
}
