use dicetwist_core::{generate, generate_seeded, RollConfig};

#[test]
fn generated_values_stay_in_face_range() {
    let config = RollConfig::new(1000, 3, 6).unwrap();
    let results = generate(&config);
    assert_eq!(results.rolls_count(), 1000);

    for roll in 0..results.rolls_count() {
        for dice in 0..results.dice_count() {
            let value = results.get(roll, dice).unwrap();
            assert!((1..=6).contains(&value), "roll {roll} die {dice} = {value}");
        }
        let sum = results.sum(roll).unwrap();
        assert!((3..=18).contains(&sum), "roll {roll} sum = {sum}");
    }
}

#[test]
fn same_seed_same_batch() {
    let config = RollConfig::new(5000, 4, 12).unwrap();
    let a = generate_seeded(&config, 1234);
    let b = generate_seeded(&config, 1234);

    for roll in 0..config.rolls() {
        assert_eq!(a.values(roll).unwrap(), b.values(roll).unwrap());
    }
    assert_eq!(a.face_totals(), b.face_totals());
}

#[test]
fn different_seeds_diverge() {
    let config = RollConfig::new(5000, 4, 12).unwrap();
    let a = generate_seeded(&config, 1);
    let b = generate_seeded(&config, 2);

    let diverged = (0..config.rolls())
        .any(|roll| a.values(roll).unwrap() != b.values(roll).unwrap());
    assert!(diverged, "20000 dice came out identical across seeds");
}

#[test]
fn single_face_die_always_rolls_one() {
    let config = RollConfig::new(100, 2, 1).unwrap();
    let results = generate(&config);
    for roll in 0..results.rolls_count() {
        assert_eq!(results.values(roll).unwrap(), &[1, 1]);
        assert_eq!(results.face_occurrences(roll).unwrap(), &[2]);
    }
}
