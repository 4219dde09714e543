use crate::workflows::eligibility::strategy::{
    bands, lookup, BandKind, NOT_RECOMMENDED_MESSAGE, STRATEGY_TABLE,
};

#[test]
fn every_score_maps_to_exactly_one_band() {
    for score in 0..=100u8 {
        let matches = bands().iter().filter(|band| band.contains(score)).count();
        assert_eq!(matches, 1, "score {score} matched {matches} bands");
    }
}

#[test]
fn ranges_are_contiguous_in_table_order() {
    assert_eq!(STRATEGY_TABLE[0].low, 0);
    assert_eq!(STRATEGY_TABLE[STRATEGY_TABLE.len() - 1].high, 100);
    for pair in STRATEGY_TABLE.windows(2) {
        assert_eq!(pair[0].high + 1, pair[1].low);
    }
    let kinds: Vec<BandKind> = bands().iter().map(|band| band.kind).collect();
    assert_eq!(
        kinds,
        vec![BandKind::Weak, BandKind::Medium, BandKind::Good, BandKind::Strong]
    );
}

#[test]
fn lookup_uses_inclusive_edges() {
    assert_eq!(lookup(39).map(|band| band.kind), Some(BandKind::Weak));
    assert_eq!(lookup(40).map(|band| band.kind), Some(BandKind::Medium));
    assert_eq!(lookup(79).map(|band| band.kind), Some(BandKind::Good));
    assert_eq!(lookup(80).map(|band| band.kind), Some(BandKind::Strong));
    assert!(lookup(101).is_none());
}

#[test]
fn country_lists_join_with_slashes() {
    let weak = lookup(10).expect("weak band");
    assert_eq!(weak.recommended_countries(), NOT_RECOMMENDED_MESSAGE);

    let medium = lookup(50).expect("medium band");
    assert_eq!(
        medium.recommended_countries(),
        "Greece / Spain / Italy / Lithuania / Croatia"
    );
}
