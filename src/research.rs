//! Repeated train-and-score trials over one dataset,
//! with the per-trial results written out as CSV.
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Sample, Id3Config, DpDecisionTree};
use crate::evaluation::{accuracy, f_scores};

const HEADER: &str =
    "maxDepth,epsilon,mValue,aProportion,layerFunction,\
     accuracy,macroF1Score,weightedF1Score\n";


/// The outcome of one trial:
/// the resolved configuration it ran under and its scores.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    /// The configuration of this trial,
    /// with any `rand(a, b)` literal already resolved.
    pub config: Id3Config,
    /// Training-set accuracy.
    pub accuracy: f64,
    /// Unweighted mean of per-class F1 scores.
    pub macro_f1: f64,
    /// True-frequency-weighted mean of per-class F1 scores.
    pub weighted_f1: f64,
}


/// Struct `Experiment` trains and scores a sequence of private trees
/// on one sample, re-resolving the parameter literals for every trial
/// so that `rand(a, b)` sweeps draw fresh values each time.
///
/// # Example
/// ```no_run
/// use privtree::prelude::*;
/// use privtree::Experiment;
///
/// # fn f(sample: &Sample) -> std::io::Result<()> {
/// let records = Experiment::new(sample)
///     .epsilon("rand(0.5, 2.0)")
///     .max_depth("4")
///     .layer_policy("boundedExponential")
///     .n_trials(100)
///     .verbose(true)
///     .run("output.csv")?;
/// # Ok(())
/// # }
/// ```
pub struct Experiment<'a> {
    sample: &'a Sample,
    epsilon: String,
    max_depth: String,
    m_value: String,
    a_proportion: String,
    layer_policy: String,
    n_trials: usize,
    verbose: bool,
}


impl<'a> Experiment<'a> {
    /// Construct a new instance of `Experiment`
    /// with the defaults
    /// `epsilon = 1`, `max_depth = 4`, `m_value = 2`,
    /// `a_proportion = 0.5`, `layer_policy = evenSplit`,
    /// and `10` trials.
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            epsilon: "1".into(),
            max_depth: "4".into(),
            m_value: "2".into(),
            a_proportion: "0.5".into(),
            layer_policy: "evenSplit".into(),
            n_trials: 10,
            verbose: false,
        }
    }


    /// Set the privacy-budget literal. Accepts `rand(a, b)`.
    pub fn epsilon<T: ToString>(mut self, literal: T) -> Self {
        self.epsilon = literal.to_string();
        self
    }


    /// Set the maximal-depth literal. Accepts `rand(a, b)`.
    pub fn max_depth<T: ToString>(mut self, literal: T) -> Self {
        self.max_depth = literal.to_string();
        self
    }


    /// Set the scaling-factor literal. Accepts `rand(a, b)`.
    pub fn m_value<T: ToString>(mut self, literal: T) -> Self {
        self.m_value = literal.to_string();
        self
    }


    /// Set the count-proportion literal. Accepts `rand(a, b)`.
    pub fn a_proportion<T: ToString>(mut self, literal: T) -> Self {
        self.a_proportion = literal.to_string();
        self
    }


    /// Set the layer-policy name.
    pub fn layer_policy<T: ToString>(mut self, name: T) -> Self {
        self.layer_policy = name.to_string();
        self
    }


    /// Set the number of trees to train and score.
    pub fn n_trials(mut self, n: usize) -> Self {
        self.n_trials = n;
        self
    }


    /// Print progress to stdout every ten trials.
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }


    /// Run all trials, write one CSV row per trial to `filename`,
    /// and return the records.
    pub fn run<P: AsRef<Path>>(&self, filename: P)
        -> io::Result<Vec<TrialRecord>>
    {
        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;

        let mut rng = StdRng::from_entropy();
        let mut records = Vec::with_capacity(self.n_trials);

        for trial in 1..=self.n_trials {
            let config = Id3Config::from_literals(
                &self.epsilon,
                &self.max_depth,
                &self.m_value,
                &self.a_proportion,
                &self.layer_policy,
                &mut rng,
            ).map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
            })?;

            let tree = DpDecisionTree::new(config).fit(self.sample);

            let acc = accuracy(&tree, self.sample);
            let fs = f_scores(&tree, self.sample);

            let line = format!(
                "{depth},{eps},{m},{a},{policy},{acc},{macro_f1},{weighted_f1}\n",
                depth = config.max_depth(),
                eps = config.epsilon(),
                m = config.m_value(),
                a = config.a_proportion(),
                policy = config.layer_policy(),
                macro_f1 = fs.macro_f1(),
                weighted_f1 = fs.weighted_f1(),
            );
            file.write_all(line.as_bytes())?;

            records.push(TrialRecord {
                config,
                accuracy: acc,
                macro_f1: fs.macro_f1(),
                weighted_f1: fs.weighted_f1(),
            });

            if self.verbose && trial % 10 == 0 {
                let msg = format!("Progress: {trial}/{}", self.n_trials);
                println!("{}", msg.green().bold());
            }
        }

        Ok(records)
    }
}
