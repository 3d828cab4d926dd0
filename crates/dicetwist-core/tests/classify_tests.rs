use dicetwist_core::{
    generate_seeded, FaceClassifier, RawSumClassifier, RollConfig, RollResults, SumClassifier,
    TupleClassifier,
};

fn five_sum_rolls() -> RollResults {
    let mut results = RollResults::new(RollConfig::new(5, 3, 6).unwrap());
    results.set_roll_values(0, &[1, 1, 1]).unwrap(); // 3
    results.set_roll_values(1, &[1, 2, 3]).unwrap(); // 6
    results.set_roll_values(2, &[3, 3, 3]).unwrap(); // 9
    results.set_roll_values(3, &[3, 4, 5]).unwrap(); // 12
    results.set_roll_values(4, &[6, 6, 6]).unwrap(); // 18
    results
}

#[test]
fn sum_classifier_over_declared_ranges() {
    let results = five_sum_rolls();
    let classifier = SumClassifier::new(vec![(3, 6), (7, 12), (13, 18)]);
    let classified = results.classify(&classifier);

    let groups: Vec<&String> = classified.groups().collect();
    assert_eq!(groups, vec!["3-6", "7-12", "13-18"]);

    assert_eq!(classified.occurrences(&"3-6".to_string()), 2);
    assert_eq!(classified.occurrences(&"7-12".to_string()), 2);
    assert_eq!(classified.occurrences(&"13-18".to_string()), 1);

    assert!((classified.probability(&"3-6".to_string()) - 2.0 / 5.0).abs() < 1e-12);
    assert!((classified.probability(&"7-12".to_string()) - 2.0 / 5.0).abs() < 1e-12);
    assert!((classified.probability(&"13-18".to_string()) - 1.0 / 5.0).abs() < 1e-12);
}

#[test]
fn declared_groups_survive_with_zero_occurrences() {
    let results = five_sum_rolls();
    // gap between 7 and 12, plus a range nothing hits
    let classifier = SumClassifier::new(vec![(3, 6), (13, 18), (19, 30)]);
    let classified = results.classify(&classifier);

    let groups: Vec<&String> = classified.groups().collect();
    assert_eq!(groups, vec!["3-6", "13-18", "19-30"]);
    assert_eq!(classified.occurrences(&"19-30".to_string()), 0);
    assert_eq!(classified.probability(&"19-30".to_string()), 0.0);
}

#[test]
fn raw_sum_classifier_is_open_ended() {
    let results = five_sum_rolls();
    let classified = results.classify(&RawSumClassifier);

    // first-seen order, one group per distinct sum
    let groups: Vec<u32> = classified.groups().copied().collect();
    assert_eq!(groups, vec![3, 6, 9, 12, 18]);
    for sum in [3u32, 6, 9, 12, 18] {
        assert_eq!(classified.occurrences(&sum), 1);
    }
}

#[test]
fn tuple_classifier_counts_n_of_a_kind() {
    let mut results = RollResults::new(RollConfig::new(6, 3, 6).unwrap());
    results.set_roll_values(0, &[1, 1, 1]).unwrap(); // triple
    results.set_roll_values(1, &[1, 2, 3]).unwrap(); // nothing
    results.set_roll_values(2, &[3, 3, 2]).unwrap(); // pair
    results.set_roll_values(3, &[3, 2, 2]).unwrap(); // pair
    results.set_roll_values(4, &[3, 3, 2]).unwrap(); // pair
    results.set_roll_values(5, &[6, 6, 6]).unwrap(); // triple

    let classifier = TupleClassifier::new(results.config());
    let classified = results.classify(&classifier);

    let groups: Vec<usize> = classified.groups().copied().collect();
    assert_eq!(groups, vec![2, 3]);
    assert_eq!(classified.occurrences(&2), 3);
    assert_eq!(classified.occurrences(&3), 2);
    assert!((classified.probability(&2) - 3.0 / 6.0).abs() < 1e-12);
    assert!((classified.probability(&3) - 2.0 / 6.0).abs() < 1e-12);
}

#[test]
fn face_classifier_counts_individual_dice() {
    let mut results = RollResults::new(RollConfig::new(2, 3, 6).unwrap());
    results.set_roll_values(0, &[1, 1, 2]).unwrap();
    results.set_roll_values(1, &[2, 3, 1]).unwrap();

    let classified = results.classify(&FaceClassifier);
    assert_eq!(classified.occurrences(&1), 3);
    assert_eq!(classified.occurrences(&2), 2);
    assert_eq!(classified.occurrences(&3), 1);

    // normalized against total dice observed, not total rolls
    let total_dice = (results.rolls_count() * results.dice_count()) as u64;
    assert!((classified.probability_of(&1, total_dice) - 3.0 / 6.0).abs() < 1e-12);
}

#[test]
fn pick_returns_matching_rolls_in_order() {
    let results = five_sum_rolls();
    let picked = results.pick(|view| view.sum() <= 6, 10);

    assert_eq!(picked.len(), 2);
    assert_eq!(picked[0].roll, 0);
    assert_eq!(picked[0].values, vec![1, 1, 1]);
    assert_eq!(picked[0].sum, 3);
    assert_eq!(picked[1].roll, 1);
    assert_eq!(picked[1].values, vec![1, 2, 3]);
    assert_eq!(picked[1].sum, 6);
}

#[test]
fn pick_stops_at_limit() {
    let results = five_sum_rolls();
    let picked = results.pick(|view| view.sum() <= 6, 1);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].roll, 0);

    assert!(results.pick(|view| view.sum() <= 6, 0).is_empty());
    assert!(results.pick(|view| view.sum() > 100, 10).is_empty());
}

#[test]
fn visit_stops_at_first_match() {
    let results = five_sum_rolls();
    let found = results.visit(|view| (view.sum() > 6).then(|| view.roll()));
    assert_eq!(found, Some(2));

    let none = results.visit(|view| (view.sum() > 100).then(|| view.roll()));
    assert_eq!(none, None);
}

#[test]
fn par_classify_matches_sequential_tallies() {
    let config = RollConfig::new(20_000, 3, 6).unwrap();
    let results = generate_seeded(&config, 7);

    let classifier = SumClassifier::new(vec![(3, 6), (7, 12), (13, 18)]);
    let sequential = results.classify(&classifier);
    let parallel = results.par_classify(&classifier);

    let seq_groups: Vec<&String> = sequential.groups().collect();
    let par_groups: Vec<&String> = parallel.groups().collect();
    assert_eq!(seq_groups, par_groups);
    for group in sequential.groups() {
        assert_eq!(sequential.occurrences(group), parallel.occurrences(group));
    }

    let tuples = TupleClassifier::new(results.config());
    let seq = results.classify(&tuples);
    let par = results.par_classify(&tuples);
    for group in seq.groups() {
        assert_eq!(seq.occurrences(group), par.occurrences(group));
    }
}
