use collate_core::{Gain, Span, collect_overlapping};
use collate_mock::fixtures::{span, year};

fn gain(subsource: &str, span: Span, factor: f64) -> Gain {
    Gain {
        station: "WEL".into(),
        location: "10".into(),
        subsource: subsource.into(),
        span,
        factor,
        ..Default::default()
    }
}

#[test]
fn keeps_overlapping_matches_sorted_by_start() {
    let gains = vec![
        gain("Z", span(2010, 2020), 3.0),
        gain("Z", span(1990, 1999), 1.0),
        gain("Z", span(2000, 2005), 2.0),
        gain("N", span(2000, 2020), 9.0),
    ];
    let got = collect_overlapping(&gains, &span(2004, 2012), |g| g.subsource == "Z");
    let factors: Vec<f64> = got.iter().map(|g| g.factor).collect();
    assert_eq!(factors, vec![2.0, 3.0]);
}

#[test]
fn equal_starts_keep_registry_order() {
    let gains = vec![
        gain("Z", span(2000, 2010), 1.0),
        gain("Z", span(2000, 2001), 2.0),
        gain("Z", span(1999, 2003), 0.5),
        gain("Z", span(2000, 2020), 3.0),
    ];
    let got = collect_overlapping(&gains, &span(2000, 2000), |_| true);
    let factors: Vec<f64> = got.iter().map(|g| g.factor).collect();
    assert_eq!(factors, vec![0.5, 1.0, 2.0, 3.0]);
}

#[test]
fn key_matching_is_case_sensitive() {
    let gains = vec![gain("z", span(2000, 2010), 1.0)];
    let got = collect_overlapping(&gains, &span(2000, 2010), |g| g.subsource == "Z");
    assert!(got.is_empty());
}

#[test]
fn touching_spans_are_included() {
    let gains = vec![gain("Z", span(2000, 2005), 1.0)];
    let got = collect_overlapping(
        &gains,
        &Span::new(year(2005), year(2006)),
        |g| g.subsource == "Z",
    );
    assert_eq!(got.len(), 1);
}
