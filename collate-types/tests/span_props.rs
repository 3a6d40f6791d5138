use chrono::{DateTime, TimeZone, Utc};
use collate_types::Span;
use proptest::prelude::*;

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn y(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

fn arb_span() -> impl Strategy<Value = Span> {
    (-2_000_000_000i64..2_000_000_000i64, 0i64..500_000_000i64)
        .prop_map(|(start, len)| Span::new(t(start), t(start + len)))
}

#[test]
fn touching_spans_overlap() {
    let a = Span::new(y(2000), y(2005));
    let b = Span::new(y(2005), y(2010));
    assert!(a.overlaps(&b));
    assert_eq!(a.extent(&[b]), Some(Span::new(y(2005), y(2005))));
}

#[test]
fn disjoint_spans_have_no_extent() {
    let a = Span::new(y(2000), y(2010));
    assert!(a.extent(&[Span::new(y(1990), y(1995))]).is_none());
}

#[test]
fn extent_of_nothing_is_self() {
    let a = Span::new(y(2000), y(2010));
    assert_eq!(a.extent(&[]), Some(a));
}

#[test]
fn three_way_extent_fails_if_any_span_misses() {
    let a = Span::new(y(2000), y(2010));
    let b = Span::new(y(2002), y(2004));
    let c = Span::new(y(2006), y(2008));
    // a overlaps both, but b and c do not overlap each other
    assert!(a.overlaps(&b) && a.overlaps(&c));
    assert!(a.extent(&[b, c]).is_none());
    assert!(a.extent(&[c, b]).is_none());
}

proptest! {
    #[test]
    fn pairwise_extent_is_exact_intersection(a in arb_span(), b in arb_span()) {
        let start = a.start.max(b.start);
        let end = a.end.min(b.end);
        match a.extent(&[b]) {
            Some(s) => {
                prop_assert!(start <= end);
                prop_assert_eq!(s, Span::new(start, end));
            }
            None => prop_assert!(start > end),
        }
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        prop_assert_eq!(a.overlaps(&b), start <= end);
    }

    #[test]
    fn extent_is_order_independent(spans in proptest::collection::vec(arb_span(), 1..6)) {
        let head = spans[0];
        let forward = head.extent(&spans[1..]);
        let mut rest = spans[1..].to_vec();
        rest.reverse();
        prop_assert_eq!(forward, head.extent(&rest));
        if let Some(s) = forward {
            prop_assert!(s.start <= s.end);
            for other in &spans {
                prop_assert!(other.start <= s.start && s.end <= other.end);
            }
        }
    }
}
