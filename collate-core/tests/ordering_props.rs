use std::cmp::Ordering;

use chrono::DateTime;
use collate_core::{
    Channel, Collection, Component, InstalledSensor, Span, Stream, compare_collections, precedes,
    sort_collections,
};
use proptest::prelude::*;

fn collection(
    station: &str,
    location: &str,
    component: i32,
    channel: i32,
    start: i64,
    rate: f64,
    tag: usize,
) -> Collection {
    let ts = DateTime::from_timestamp(start, 0).unwrap();
    Collection {
        span: Span::new(ts, ts),
        installed_sensor: InstalledSensor {
            station: station.into(),
            location: location.into(),
            ..Default::default()
        },
        component: Component {
            number: component,
            ..Default::default()
        },
        channel: Channel {
            number: channel,
            // carries the input position so stability can be checked
            response: tag.to_string(),
            ..Default::default()
        },
        stream: Stream {
            sampling_rate: rate,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn keys_apply_in_priority_order() {
    let base = collection("B", "10", 1, 1, 100, 50.0, 0);
    assert!(precedes(&collection("A", "99", 9, 9, 999, 1.0, 0), &base));
    assert!(precedes(&collection("B", "00", 9, 9, 999, 1.0, 0), &base));
    assert!(precedes(&collection("B", "10", 0, 9, 999, 1.0, 0), &base));
    assert!(precedes(&collection("B", "10", 1, 0, 999, 1.0, 0), &base));
    assert!(precedes(&collection("B", "10", 1, 1, 99, 1.0, 0), &base));
    // higher sampling rate sorts first
    assert!(precedes(&collection("B", "10", 1, 1, 100, 100.0, 0), &base));
    assert!(!precedes(&collection("B", "10", 1, 1, 100, 40.0, 0), &base));
}

#[test]
fn full_ties_compare_equal() {
    let a = collection("B", "10", 1, 1, 100, 50.0, 0);
    let b = collection("B", "10", 1, 1, 100, 50.0, 1);
    assert_eq!(compare_collections(&a, &b), Ordering::Equal);
    assert!(!precedes(&a, &b) && !precedes(&b, &a));
}

fn arb_collections() -> impl Strategy<Value = Vec<Collection>> {
    proptest::collection::vec(
        (
            proptest::sample::select(&["A", "B"][..]),
            proptest::sample::select(&["00", "10"][..]),
            0i32..3,
            0i32..3,
            0i64..4,
            proptest::sample::select(&[1.0f64, 40.0, 100.0][..]),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(tag, (st, loc, comp, chan, start, rate))| {
                collection(st, loc, comp, chan, start, rate, tag)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn sorted_output_never_inverts(mut rows in arb_collections()) {
        sort_collections(&mut rows);
        for w in rows.windows(2) {
            prop_assert!(!precedes(&w[1], &w[0]));
        }
    }

    #[test]
    fn sort_is_stable_on_ties(mut rows in arb_collections()) {
        sort_collections(&mut rows);
        for w in rows.windows(2) {
            if compare_collections(&w[0], &w[1]) == Ordering::Equal {
                let a: usize = w[0].channel.response.parse().unwrap();
                let b: usize = w[1].channel.response.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }
}
