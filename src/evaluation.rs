//! Scoring utilities for trained classifiers:
//! accuracy, per-class F1 with macro/weighted averages,
//! and a frequency-proportional random guesser as a trivial baseline.
use rand::distributions::{Distribution, WeightedIndex};
use rayon::prelude::*;

use crate::{Classifier, Sample, PrivTreeError};


/// The fraction of records of `sample`
/// that `classifier` labels correctly.
/// An unclassifiable record counts as misclassified.
pub fn accuracy<C>(classifier: &C, sample: &Sample) -> f64
    where C: Classifier + Sync,
{
    let n_sample = sample.shape().0;
    let n_correct = (0..n_sample).into_par_iter()
        .filter(|&row| {
            matches!(
                classifier.predict(sample, row),
                Ok(label) if label == sample.label(row)
            )
        })
        .count();

    n_correct as f64 / n_sample as f64
}


/// Per-class F1 scores together with their macro and weighted averages.
#[derive(Debug, Clone, PartialEq)]
pub struct FScores {
    per_class: Vec<(String, f64)>,
    macro_f1: f64,
    weighted_f1: f64,
}


impl FScores {
    /// The F1 score of each declared class label, in declared order.
    pub fn per_class(&self) -> &[(String, f64)] {
        &self.per_class[..]
    }


    /// The unweighted mean of the per-class F1 scores.
    pub fn macro_f1(&self) -> f64 {
        self.macro_f1
    }


    /// The mean of the per-class F1 scores,
    /// weighted by each class's true frequency.
    pub fn weighted_f1(&self) -> f64 {
        self.weighted_f1
    }
}


/// Compute per-class F1 scores of `classifier` over `sample`
/// from a confusion count of predicted vs. true labels.
/// Precision and recall fall back to `0` on a zero denominator,
/// and an unclassifiable record counts as "no prediction":
/// it appears in no predicted-label tally
/// but still weighs against recall for its true label.
pub fn f_scores<C>(classifier: &C, sample: &Sample) -> FScores
    where C: Classifier,
{
    let labels = sample.class_labels();
    let k = labels.len();
    let index_of = |label: &str| labels.iter().position(|l| l == label);

    let mut true_counts = vec![0usize; k];
    let mut predicted_counts = vec![0usize; k];
    let mut correct_counts = vec![0usize; k];

    let n_sample = sample.shape().0;
    for row in 0..n_sample {
        let truth = index_of(sample.label(row))
            .expect("a record carries an undeclared class label");
        true_counts[truth] += 1;

        if let Ok(predicted) = classifier.predict(sample, row) {
            if let Some(p) = index_of(&predicted) {
                predicted_counts[p] += 1;
                if p == truth {
                    correct_counts[p] += 1;
                }
            }
        }
    }

    let per_class = labels.iter()
        .enumerate()
        .map(|(i, label)| {
            let precision = ratio(correct_counts[i], predicted_counts[i]);
            let recall = ratio(correct_counts[i], true_counts[i]);

            let f1 = if precision == 0.0 || recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };
            (label.clone(), f1)
        })
        .collect::<Vec<_>>();

    let macro_f1 = per_class.iter()
        .map(|(_, f1)| f1)
        .sum::<f64>() / k as f64;

    let weighted_f1 = per_class.iter()
        .zip(&true_counts)
        .map(|((_, f1), &count)| count as f64 * f1)
        .sum::<f64>() / n_sample as f64;

    FScores { per_class, macro_f1, weighted_f1, }
}


#[inline]
fn ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 { 0.0 } else { numer as f64 / denom as f64 }
}


/// A baseline classifier that guesses a label at random,
/// with probability proportional to each label's
/// empirical frequency in the training sample.
pub struct RandomGuesser {
    labels: Vec<String>,
    weights: WeightedIndex<usize>,
}


impl RandomGuesser {
    /// Construct a random guesser from the class frequencies of `sample`.
    pub fn new(sample: &Sample) -> Self {
        let n_sample = sample.shape().0;
        let rows = (0..n_sample).collect::<Vec<_>>();

        let labels = sample.class_labels().to_vec();
        let counts = labels.iter()
            .map(|label| sample.count_label(label, &rows[..]))
            .collect::<Vec<_>>();

        // A valid sample has at least one row,
        // so at least one count is positive.
        let weights = WeightedIndex::new(counts)
            .expect("every declared class label has zero frequency");

        Self { labels, weights, }
    }
}


impl Classifier for RandomGuesser {
    fn predict(&self, _sample: &Sample, _row: usize)
        -> Result<String, PrivTreeError>
    {
        let mut rng = rand::thread_rng();
        let i = self.weights.sample(&mut rng);
        Ok(self.labels[i].clone())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute;


    #[test]
    fn random_guesser_emits_observed_labels_only() {
        let a = Attribute::new("a", ["x", "y"], ["x", "x", "y"]);
        let target = vec!["no".into(), "no".into(), "no".into()];
        let sample =
            Sample::from_parts(vec![a], "Class", ["no", "yes"], target).unwrap();

        let guesser = RandomGuesser::new(&sample);
        for row in 0..3 {
            assert_eq!(guesser.predict(&sample, row).unwrap(), "no");
        }
    }
}
