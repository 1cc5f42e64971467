//! Defines a CSV reader that yields [`Sample`].
use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::collections::HashMap;

use super::attribute::Attribute;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file of categorical tokens
/// into [`Sample`].
///
/// Attribute domains default to the sorted distinct values observed in
/// each column. Datasets that declare their domains up front
/// (the usual case for a privacy-sensitive pipeline, where the legal
/// values are public but the observed ones are not) can override the
/// inference per column with [`SampleReader::domain`].
///
/// # Example
/// ```no_run
/// use privtree::SampleReader;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data.csv")
///     .has_header(true)
///     .class_column("Class")
///     .class_labels(["e", "p"])
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    class_column: Option<S>,
    class_labels: Option<Vec<String>>,
    domains: HashMap<String, Vec<String>>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            class_column: None,
            class_labels: None,
            domains: HashMap::new(),
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Declare the full set of legal class labels.
    /// If not given, the sorted distinct observed labels are used.
    pub fn class_labels<I>(mut self, labels: I) -> Self
        where I: IntoIterator,
              I::Item: ToString,
    {
        let labels = labels.into_iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>();
        self.class_labels = Some(labels);
        self
    }


    /// Declare the full legal-value domain of the attribute named `name`.
    pub fn domain<T, I>(mut self, name: T, values: I) -> Self
        where T: ToString,
              I: IntoIterator,
              I::Item: ToString,
    {
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        self.domains.insert(name.to_string(), values);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the class-column name.
    pub fn class_column(mut self, name: S) -> Self {
        self.class_column = Some(name);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>,
{
    /// Read the file into a [`Sample`].
    pub fn read(self) -> io::Result<Sample> {
        let file = self.file
            .ok_or_else(|| invalid_data("no file is specified"))?;
        let class_column = self.class_column
            .ok_or_else(|| invalid_data("no class column is specified"))?;
        let class_column = class_column.as_ref();

        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut names = Vec::new();
        if self.has_header {
            let line = lines.next()
                .ok_or_else(|| invalid_data("the file is empty"))??;
            names = line.split(',')
                .map(|name| name.trim().to_string())
                .collect::<Vec<_>>();
        }

        let mut columns: Vec<Vec<String>> = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let tokens = line.split(',')
                .map(|token| token.trim().to_string())
                .collect::<Vec<_>>();

            // Without a header row, name the columns by position.
            if names.is_empty() {
                names = (1..=tokens.len())
                    .map(|i| format!("Attr. [{i}]"))
                    .collect::<Vec<_>>();
            }

            if tokens.len() != names.len() {
                return Err(invalid_data("rows have inconsistent arity"));
            }

            if columns.is_empty() {
                columns = vec![Vec::new(); names.len()];
            }
            for (column, token) in columns.iter_mut().zip(tokens) {
                column.push(token);
            }
        }

        if columns.is_empty() {
            return Err(invalid_data("the file has no data rows"));
        }

        let class_pos = names.iter()
            .position(|name| name == class_column)
            .ok_or_else(|| invalid_data("the class column does not exist"))?;

        let target = columns.remove(class_pos);
        names.remove(class_pos);

        let class_labels = match self.class_labels {
            Some(labels) => labels,
            None => {
                let mut labels = target.clone();
                labels.sort();
                labels.dedup();
                labels
            },
        };

        let domains = self.domains;
        let attributes = names.into_iter()
            .zip(columns)
            .map(|(name, values)| match domains.get(&name) {
                Some(domain) => Attribute::new(name, domain, values),
                None => Attribute::with_inferred_domain(name, values),
            })
            .collect::<Vec<_>>();

        Sample::from_parts(attributes, class_column, class_labels, target)
            .map_err(|e| invalid_data(&e.to_string()))
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


fn invalid_data(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}
