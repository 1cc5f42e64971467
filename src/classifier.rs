//! Defines the classifier trait implemented by trained models.
use crate::{Sample, PrivTreeError};


/// A trait that defines the behavior of a categorical classifier.
/// You only need to implement the `predict` method.
///
/// `predict` is fallible:
/// a decision tree grows children only for attribute values observed
/// in the training partition, so a record can reach a branch node with
/// a value no child was grown for. Such a record is *unclassifiable*
/// and the failure is reported distinctly from any label.
pub trait Classifier {
    /// Predicts the class label of the `row`-th record of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> Result<String, PrivTreeError>;


    /// Predicts the class labels of all records in `sample`.
    fn predict_all(&self, sample: &Sample)
        -> Vec<Result<String, PrivTreeError>>
    {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
