use privtree::prelude::*;


// Epsilon so large that every Laplace draw is vanishingly small,
// making the private learner effectively deterministic.
const HUGE_BUDGET: f64 = 1e9;


/// Eight rows split perfectly by attribute `A`;
/// attribute `B` carries no signal.
fn clean_split_sample() -> Sample {
    let a = Attribute::new(
        "A",
        ["x", "y"],
        ["x", "x", "x", "x", "y", "y", "y", "y"],
    );
    let b = Attribute::new(
        "B",
        ["p", "q"],
        ["p", "q", "p", "q", "p", "q", "p", "q"],
    );
    let target = ["yes", "yes", "yes", "yes", "no", "no", "no", "no"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    Sample::from_parts(vec![a, b], "Class", ["yes", "no"], target).unwrap()
}


#[test]
fn clean_split_recovers_the_generating_attribute() {
    let sample = clean_split_sample();
    let config = Id3Config::new(
        HUGE_BUDGET, 1, 2.0, 0.5, LayerPolicy::EvenSplit,
    ).unwrap();

    let tree = DpDecisionTree::new(config)
        .seed(777)
        .fit(&sample);

    let root = match tree.root() {
        Node::Branch(branch) => branch,
        Node::Leaf(_) => panic!("expected a split at the root"),
    };
    assert_eq!(root.attribute(), "A");
    assert_eq!(root.children().len(), 2);

    let under_x = match &root.children()["x"] {
        Node::Leaf(leaf) => leaf.label(),
        Node::Branch(_) => panic!("expected a leaf under `x`"),
    };
    assert_eq!(under_x, "yes");

    let under_y = match &root.children()["y"] {
        Node::Leaf(leaf) => leaf.label(),
        Node::Branch(_) => panic!("expected a leaf under `y`"),
    };
    assert_eq!(under_y, "no");

    assert_eq!(accuracy(&tree, &sample), 1.0);
}


#[test]
fn depth_zero_yields_a_single_leaf() {
    let sample = clean_split_sample();
    let config = Id3Config::new(
        HUGE_BUDGET, 0, 2.0, 0.5, LayerPolicy::EvenSplit,
    ).unwrap();

    let tree = DpDecisionTree::new(config)
        .seed(777)
        .fit(&sample);

    assert!(tree.root().is_leaf());
    assert_eq!(tree.depth(), 1);
}


#[test]
fn tree_depth_never_exceeds_the_cap() {
    let n = 64;
    let tokens = ["a", "b", "c", "d"];
    let attributes = (0..4)
        .map(|j| {
            let values = (0..n)
                .map(|i| tokens[(i >> j) % 4])
                .collect::<Vec<_>>();
            Attribute::new(format!("f{j}"), tokens, values)
        })
        .collect::<Vec<_>>();
    let target = (0..n)
        .map(|i| if i % 3 == 0 { "yes".to_string() } else { "no".to_string() })
        .collect::<Vec<_>>();
    let sample =
        Sample::from_parts(attributes, "Class", ["yes", "no"], target).unwrap();

    for max_depth in 0..4 {
        for seed in [1, 7, 42, 1010] {
            let config = Id3Config::new(
                1.0, max_depth, 2.0, 0.5, LayerPolicy::BoundedExponential,
            ).unwrap();
            let tree = DpDecisionTree::new(config)
                .seed(seed)
                .fit(&sample);

            // `max_depth + 1` layers at most: root at depth 0,
            // deepest leaf at depth `max_depth`.
            assert!(tree.depth() <= max_depth + 1);
        }
    }
}


#[test]
fn no_attributes_forces_a_majority_leaf() {
    let target = ["no", "no", "no", "yes"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    let sample =
        Sample::from_parts(Vec::new(), "Class", ["yes", "no"], target).unwrap();

    let config = Id3Config::new(
        HUGE_BUDGET, 3, 2.0, 0.5, LayerPolicy::EvenSplit,
    ).unwrap();
    let tree = DpDecisionTree::new(config)
        .seed(123)
        .fit(&sample);

    match tree.root() {
        Node::Leaf(leaf) => assert_eq!(leaf.label(), "no"),
        Node::Branch(_) => panic!("nothing to split on"),
    }
}


#[test]
fn noisy_choice_matches_information_gain_at_large_budget() {
    // Three candidate attributes; only `A` separates the classes.
    // With negligible noise, the private utility score reduces to a
    // mutual-information statistic and must pick the same root split
    // as classic information-gain ID3.
    let sample = clean_split_sample();

    let baseline = Id3::new().fit(&sample);
    let baseline_root = match baseline.root() {
        Node::Branch(branch) => branch.attribute().to_string(),
        Node::Leaf(_) => panic!("baseline found nothing to split on"),
    };

    let config = Id3Config::new(
        HUGE_BUDGET, 2, 2.0, 0.5, LayerPolicy::EvenSplit,
    ).unwrap();
    let tree = DpDecisionTree::new(config)
        .seed(999)
        .fit(&sample);
    let private_root = match tree.root() {
        Node::Branch(branch) => branch.attribute().to_string(),
        Node::Leaf(_) => panic!("private learner found nothing to split on"),
    };

    assert_eq!(private_root, baseline_root);
    assert_eq!(private_root, "A");
}


#[test]
fn unobserved_domain_value_is_unclassifiable() {
    // `z` is a legal value of `A` that never occurs in training,
    // so the root grows no child for it.
    let a = Attribute::new(
        "A",
        ["x", "y", "z"],
        ["x", "x", "x", "x", "y", "y", "y", "y"],
    );
    let target = ["yes", "yes", "yes", "yes", "no", "no", "no", "no"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    let train =
        Sample::from_parts(vec![a], "Class", ["yes", "no"], target).unwrap();

    let config = Id3Config::new(
        HUGE_BUDGET, 1, 2.0, 0.5, LayerPolicy::EvenSplit,
    ).unwrap();
    let tree = DpDecisionTree::new(config)
        .seed(5)
        .fit(&train);

    let a = Attribute::new("A", ["x", "y", "z"], ["x", "z"]);
    let test = Sample::from_parts(
        vec![a],
        "Class",
        ["yes", "no"],
        vec!["yes".into(), "no".into()],
    ).unwrap();

    assert_eq!(tree.predict(&test, 0).unwrap(), "yes");

    let err = tree.predict(&test, 1).unwrap_err();
    assert_eq!(
        err,
        PrivTreeError::Unclassifiable {
            attribute: "A".into(),
            value: "z".into(),
        },
    );

    // Scoring treats the unclassifiable row as misclassified.
    assert_eq!(accuracy(&tree, &test), 0.5);
}


#[test]
fn every_layer_policy_trains_on_the_clean_split() {
    let sample = clean_split_sample();
    let policies = [
        LayerPolicy::EvenSplit,
        LayerPolicy::BoundedExponential,
        LayerPolicy::ReversedBoundedExponential,
    ];

    for policy in policies {
        let config = Id3Config::new(HUGE_BUDGET, 1, 2.0, 0.5, policy).unwrap();
        let tree = DpDecisionTree::new(config)
            .seed(2024)
            .fit(&sample);
        assert_eq!(accuracy(&tree, &sample), 1.0, "failed under {policy}");
    }
}
