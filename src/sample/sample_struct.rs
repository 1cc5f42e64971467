//! Defines the categorical sample struct used for training and scoring.
use std::collections::HashMap;

use crate::PrivTreeError;
use super::attribute::Attribute;


/// Struct `Sample` holds a batch of categorical records in column order:
/// attribute columns, one class column, and the declared class labels.
///
/// Attribute order and class-label order are fixed at construction.
/// Both the private and the non-private induction algorithms iterate
/// in that declared order, which makes their argmax tiebreaks
/// deterministic.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) attributes: Vec<Attribute>,
    pub(super) class_column: String,
    pub(super) class_labels: Vec<String>,
    pub(super) target: Vec<String>,
    pub(super) n_sample: usize,
}


impl Sample {
    /// Construct a sample from attribute columns,
    /// the class-column name, the declared class labels,
    /// and one class value per row.
    ///
    /// Every attribute column must have as many rows as `target`.
    pub fn from_parts<T, L>(
        attributes: Vec<Attribute>,
        class_column: T,
        class_labels: L,
        target: Vec<String>,
    ) -> Result<Self, PrivTreeError>
        where T: ToString,
              L: IntoIterator,
              L::Item: ToString,
    {
        // A sample with no attribute columns is degenerate but legal:
        // induction then emits a single majority leaf.
        let n_sample = target.len();
        if n_sample == 0 {
            return Err(PrivTreeError::InvalidShape(n_sample, attributes.len()));
        }

        for attr in &attributes {
            if attr.values.len() != n_sample {
                return Err(
                    PrivTreeError::InvalidShape(attr.values.len(), attributes.len())
                );
            }
        }

        let name_to_index = attributes.iter()
            .enumerate()
            .map(|(i, a)| (a.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let class_labels = class_labels.into_iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>();

        Ok(Self {
            name_to_index,
            attributes,
            class_column: class_column.to_string(),
            class_labels,
            target,
            n_sample,
        })
    }


    /// Returns the pair `(#rows, #attributes)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.attributes.len())
    }


    /// Returns a slice over the attribute columns, in declared order.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    /// Returns the attribute of the given name, if any.
    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.name_to_index.get(name)
            .map(|&i| &self.attributes[i])
    }


    /// The class-column name.
    #[inline]
    pub fn class_column(&self) -> &str {
        &self.class_column
    }


    /// The declared class labels, in declared order.
    #[inline]
    pub fn class_labels(&self) -> &[String] {
        &self.class_labels[..]
    }


    /// The class value of every row.
    #[inline]
    pub fn target(&self) -> &[String] {
        &self.target[..]
    }


    /// The class value of the given row.
    #[inline]
    pub fn label(&self, row: usize) -> &str {
        &self.target[row]
    }


    /// Count the rows of `rows` whose class value is `label`.
    #[inline]
    pub(crate) fn count_label(&self, label: &str, rows: &[usize]) -> usize {
        rows.iter()
            .filter(|&&i| self.target[i] == label)
            .count()
    }


    /// Count the rows of `rows` where attribute `attr` takes `value`
    /// and the class value is `label`.
    #[inline]
    pub(crate) fn count_joint(
        &self,
        attr: &Attribute,
        value: &str,
        label: &str,
        rows: &[usize],
    ) -> usize
    {
        rows.iter()
            .filter(|&&i| attr.at(i) == value && self.target[i] == label)
            .count()
    }
}
