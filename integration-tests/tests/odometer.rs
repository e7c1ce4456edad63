use std::collections::HashSet;

use integration_tests::venue::{seat, seating};
use serde_json::json;
use tumbler_core::{
    Dial, Odometer, OdometerError,
    sweep::{self, Action, Config, Event, Status},
};

#[test]
fn fresh_odometer_runs_to_exhaustion_and_resets() {
    let mut odometer = Odometer::new(seating()).unwrap();
    let first = seat([("section", json!(100)), ("row", json!("A")), ("seat", json!(1))]);

    assert_eq!(odometer.current(), Some(first.clone()));

    for call in 1..=26 {
        assert!(odometer.advance().is_some(), "advance {call} ended early");
    }
    assert_eq!(odometer.advance(), None);
    assert!(odometer.is_exhausted());

    assert_eq!(odometer.reset(), Some(first));
}

#[test]
fn iteration_covers_the_cross_product_once() {
    let odometer = Odometer::new(seating()).unwrap();

    let all: Vec<_> = odometer.collect();
    let unique: HashSet<String> = all
        .iter()
        .map(|combo| serde_json::to_string(combo).unwrap())
        .collect();

    assert_eq!(all.len(), 27);
    assert_eq!(unique.len(), 27);
}

#[test]
fn successive_combinations_follow_carry_rule() {
    let odometer = Odometer::new(seating()).unwrap();
    let lengths: Vec<usize> = odometer.dials().iter().map(Dial::len).collect();

    let indices: Vec<Vec<usize>> = odometer
        .clone()
        .map(|combo| {
            odometer
                .dials()
                .iter()
                .map(|dial| dial.index_of(combo.get(dial.name()).unwrap()).unwrap())
                .collect()
        })
        .collect();

    for pair in indices.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let pivot = (0..lengths.len())
            .rev()
            .find(|&i| prev[i] + 1 < lengths[i])
            .unwrap();

        assert_eq!(next[pivot], prev[pivot] + 1);
        assert_eq!(&next[..pivot], &prev[..pivot]);
        assert!(next[pivot + 1..].iter().all(|&i| i == 0));
    }
}

#[test]
fn prebuilt_dials_keep_declaration_order() {
    let dials = vec![
        Dial::new("section", vec![100, 101, 102]).unwrap(),
        Dial::new("row", vec![1, 2, 3]).unwrap(),
        Dial::new("seat", vec![1, 2, 3]).unwrap(),
    ];
    let mut odometer = Odometer::from_dials(dials).unwrap();

    let names: Vec<_> = odometer.current().unwrap().names().map(str::to_owned).collect();
    assert_eq!(names, ["section", "row", "seat"]);

    let second = odometer.advance().unwrap();
    assert_eq!(second.get("seat"), Some(&2));
}

#[test]
fn prebuilt_duplicate_is_reported_by_position() {
    let dials = vec![
        Dial::new("row", vec![1]).unwrap(),
        Dial::new("seat", vec![1]).unwrap(),
        Dial::new("row", vec![2]).unwrap(),
    ];

    assert_eq!(
        Odometer::from_dials(dials),
        Err(OdometerError::DuplicateName {
            index: 2,
            name: "row".to_string()
        })
    );
}

#[test]
fn skip_mode_uses_odometer_definitions() {
    let odometer = Odometer::new(seating()).unwrap();

    let next = odometer
        .next_after(&seat([("section", json!(100)), ("seat", json!(1))]))
        .unwrap();

    assert_eq!(next, Some(seat([("section", json!(100)), ("seat", json!(2))])));
}

#[test]
fn sweep_stops_at_first_matching_seat() {
    let mut odometer = Odometer::new(seating()).unwrap();
    let mut found = None;

    let summary = sweep::sweep(&mut odometer, &Config::default(), |event: &Event<'_, _>| {
        if event.combination.get("row") == Some(&json!("B")) {
            found = Some(event.combination.clone());
            return Some(Action::Stop);
        }
        None
    });

    assert_eq!(summary.status, Status::StoppedByObserver);
    assert_eq!(summary.visited, 4);
    assert_eq!(
        found,
        Some(seat([("section", json!(100)), ("row", json!("B")), ("seat", json!(1))]))
    );
}
