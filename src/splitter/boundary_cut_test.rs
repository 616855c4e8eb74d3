use super::boundary_cut::BoundaryCut;
use super::test_util::{equator, flatten, route, unnamed, wp};
use super::SplitPolicy;
use crate::assert_eq_pretty;
use crate::error::ErrorType;

#[test]
fn invalid_pattern() {
    let err = BoundaryCut::new("Jour (").unwrap_err();
    assert_eq!(err.get_type(), ErrorType::InputError);
}

#[test]
fn no_waypoints() {
    let policy = BoundaryCut::new(r"Jour \d+").unwrap();
    let r = route(&equator(3), vec![]);
    assert_eq_pretty!(policy.split(&r), vec![unnamed(0, 3)]);
}

#[test]
fn cuts_at_matching_waypoints() {
    let policy = BoundaryCut::new("^(Refuge|Camp)").unwrap();
    let r = route(
        &equator(8),
        vec![
            wp("Camp 2", 5.1, 0.0),
            wp("Lake", 3.0, 0.0),
            wp("Refuge du lac", 1.9, 0.1),
        ],
    );
    let segments = policy.split(&r);
    assert_eq_pretty!(
        segments,
        vec![unnamed(0, 3), unnamed(3, 6), unnamed(6, 8)]
    );
    assert_eq!(flatten(&segments), (0..8).collect::<Vec<_>>());
}

#[test]
fn shared_nearest_point_cuts_once() {
    let policy = BoundaryCut::new("Stop").unwrap();
    let r = route(
        &equator(5),
        vec![
            wp("Stop A", 2.0, 0.0),
            wp("Stop B", 2.0, 0.2),
            wp("Stop C", 0.0, 0.0),
        ],
    );
    assert_eq_pretty!(
        policy.split(&r),
        vec![unnamed(0, 1), unnamed(1, 3), unnamed(3, 5)]
    );
}
