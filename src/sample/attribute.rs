//! Defines a single categorical column of a sample.


/// One categorical attribute:
/// a name, the full declared set of legal values,
/// and the observed value of every row.
///
/// The declared domain matters for privacy:
/// noisy counting must run over every legal value,
/// not only the values present in some partition,
/// otherwise the released tree would leak which values are absent.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub(super) name: String,
    pub(super) domain: Vec<String>,
    pub(super) values: Vec<String>,
}


impl Attribute {
    /// Construct an attribute from its name, declared domain,
    /// and one value per row.
    #[inline]
    pub fn new<T, D, V>(name: T, domain: D, values: V) -> Self
        where T: ToString,
              D: IntoIterator,
              D::Item: ToString,
              V: IntoIterator,
              V::Item: ToString,
    {
        let name = name.to_string();
        let domain = domain.into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();

        Self { name, domain, values, }
    }


    /// Construct an attribute whose domain is
    /// the sorted set of distinct observed values.
    pub fn with_inferred_domain<T, V>(name: T, values: V) -> Self
        where T: ToString,
              V: IntoIterator,
              V::Item: ToString,
    {
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();

        let mut domain = values.clone();
        domain.sort();
        domain.dedup();

        Self { name: name.to_string(), domain, values, }
    }


    /// The attribute name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// The full declared set of legal values.
    #[inline]
    pub fn domain(&self) -> &[String] {
        &self.domain[..]
    }


    /// Number of legal values in the declared domain.
    #[inline]
    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }


    /// The observed value at the given row.
    #[inline]
    pub fn at(&self, row: usize) -> &str {
        &self.values[row]
    }


    /// Count the rows of `rows` taking the given value.
    #[inline]
    pub(crate) fn count(&self, value: &str, rows: &[usize]) -> usize {
        rows.iter()
            .filter(|&&i| self.values[i] == value)
            .count()
    }
}
