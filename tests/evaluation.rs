use privtree::prelude::*;

const TOLERANCE: f64 = 1e-9;


/// Ninety "no" rows and ten "yes" rows over one uninformative attribute.
fn imbalanced_sample() -> Sample {
    let n = 100;
    let values = (0..n)
        .map(|i| if i % 2 == 0 { "u" } else { "v" })
        .collect::<Vec<_>>();
    let a = Attribute::new("A", ["u", "v"], values);

    let target = (0..n)
        .map(|i| if i < 90 { "no".to_string() } else { "yes".to_string() })
        .collect::<Vec<_>>();

    Sample::from_parts(vec![a], "Class", ["no", "yes"], target).unwrap()
}


#[test]
fn majority_predictor_scores_match_by_hand_computation() {
    let sample = imbalanced_sample();

    // Depth zero with negligible noise collapses to
    // an always-predict-the-majority classifier.
    let config = Id3Config::new(1e9, 0, 2.0, 0.5, LayerPolicy::EvenSplit)
        .unwrap();
    let tree = DpDecisionTree::new(config)
        .seed(11)
        .fit(&sample);
    assert!(tree.root().is_leaf());

    assert!((accuracy(&tree, &sample) - 0.9).abs() < TOLERANCE);

    let scores = f_scores(&tree, &sample);

    // Majority class: precision 0.9, recall 1.
    let f1_no = 2.0 * 0.9 / 1.9;
    // Minority class is never predicted: recall 0, F1 0.
    let expected = [("no".to_string(), f1_no), ("yes".to_string(), 0.0)];
    for ((label, f1), (expected_label, expected_f1)) in
        scores.per_class().iter().zip(&expected)
    {
        assert_eq!(label, expected_label);
        assert!((f1 - expected_f1).abs() < TOLERANCE);
    }

    let expected_macro = f1_no / 2.0;
    let expected_weighted = 0.9 * f1_no;
    assert!((scores.macro_f1() - expected_macro).abs() < TOLERANCE);
    assert!((scores.weighted_f1() - expected_weighted).abs() < TOLERANCE);

    // The frequent class dominates the weighted average.
    assert!(scores.macro_f1() < scores.weighted_f1());
}


#[test]
fn random_guesser_tracks_class_frequencies() {
    let sample = imbalanced_sample();
    let guesser = RandomGuesser::new(&sample);

    let n_no = guesser.predict_all(&sample)
        .into_iter()
        .filter(|p| p.as_deref() == Ok("no"))
        .count();

    // The guess rate for "no" concentrates around 0.9;
    // the bound below fails with probability well under 1e-6.
    assert!((60..=100).contains(&n_no), "guessed `no` {n_no} times");
}


#[test]
fn perfect_and_worthless_classifiers_bound_the_scores() {
    let sample = imbalanced_sample();

    struct Oracle;
    impl Classifier for Oracle {
        fn predict(&self, sample: &Sample, row: usize)
            -> Result<String, PrivTreeError>
        {
            Ok(sample.label(row).to_string())
        }
    }

    struct Contrarian;
    impl Classifier for Contrarian {
        fn predict(&self, sample: &Sample, row: usize)
            -> Result<String, PrivTreeError>
        {
            let wrong = if sample.label(row) == "no" { "yes" } else { "no" };
            Ok(wrong.to_string())
        }
    }

    assert_eq!(accuracy(&Oracle, &sample), 1.0);
    assert_eq!(f_scores(&Oracle, &sample).macro_f1(), 1.0);

    assert_eq!(accuracy(&Contrarian, &sample), 0.0);
    assert_eq!(f_scores(&Contrarian, &sample).weighted_f1(), 0.0);
}
