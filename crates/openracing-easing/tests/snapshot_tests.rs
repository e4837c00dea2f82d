//! Snapshot tests for the curve registry and curve LUTs using insta.

use openracing_easing::{Easing, EasingLut, NORMALIZED_EASINGS};

/// LUT samples as whole millionths, so the snapshot text does not depend on
/// float formatting.
fn normalize_lut_for_snapshot(lut: &EasingLut) -> Vec<i64> {
    lut.table()
        .iter()
        .map(|&v| (v * 1_000_000.0).round() as i64)
        .collect()
}

#[test]
fn snapshot_easing_names() {
    let names: Vec<&str> = NORMALIZED_EASINGS.iter().map(|(name, _)| *name).collect();
    insta::assert_json_snapshot!("easing_names", names);
}

#[test]
fn snapshot_easing_luts() {
    for easing in Easing::ALL {
        let snapshot = normalize_lut_for_snapshot(&easing.to_lut());
        insta::assert_json_snapshot!(format!("{}_lut", easing.name()), snapshot);
    }
}
