// Host-side tests for presentation and calculator constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod blend {
        include!("../src/core/blend.rs");
    }
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod schema {
        include!("../src/core/schema.rs");
    }
}

use crate::core::blend::*;
use crate::core::color::*;
use crate::core::schema::*;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn chart_styling_is_within_reasonable_bounds() {
    // Alphas and ratios are fractions
    assert!(RADAR_FILL_ALPHA > 0.0 && RADAR_FILL_ALPHA <= 1.0);
    assert!(RADAR_GRID_ALPHA > 0.0 && RADAR_GRID_ALPHA <= 1.0);
    assert!(RADAR_OUTER_RADIUS > 0.0 && RADAR_OUTER_RADIUS <= 1.0);
    assert!(BAR_FILL_RATIO > 0.0 && BAR_FILL_RATIO <= 1.0);

    // Labels sit outside the value polygon
    assert!(RADAR_LABEL_PAD > 1.0);
    assert!(RADAR_GRID_RINGS > 0);
    assert_eq!(FLAVOR_DOMAIN_MAX, ATTRIBUTE_MAX);
}

#[test]
fn one_bar_color_per_flavor_axis() {
    assert_eq!(FLAVOR_BAR_COLORS.len(), FLAVOR_AXES.len());
    for c in FLAVOR_BAR_COLORS {
        assert!(Rgb::from_hex(c).is_some(), "{c}");
    }
    assert!(Rgb::from_hex(RADAR_STROKE).is_some());
    assert!(Rgb::from_hex(LABEL_COLOR).is_some());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn blend_constants_match_slot_layout() {
    assert_eq!(DEFAULT_WEIGHTS, [30, 20, 50]);
    assert!(DEFAULT_WEIGHTS.iter().all(|w| *w <= WEIGHT_MAX));
    assert_eq!(SLOT_GAIN.len(), SLOT_COUNT);
    assert!(SLOT_GAIN[0] > SLOT_GAIN[1]);
    assert_eq!(SLOT_GAIN[1], SLOT_GAIN[2]);
}

#[test]
fn opacity_spans_nominal_range() {
    assert_eq!(liquid_opacity(0), OPACITY_BASE);
    let full = liquid_opacity(SLOT_COUNT as u64 * WEIGHT_MAX as u64);
    assert!((full - (OPACITY_BASE + OPACITY_SPAN)).abs() < 1e-12);
    assert!((full - 0.85).abs() < 1e-12);
}

#[test]
fn health_and_flavor_schemas_have_five_distinct_axes() {
    for schema in [HEALTH_SCHEMA, FLAVOR_SCHEMA] {
        assert_eq!(schema.len(), 5);
        for (i, a) in schema.axes.iter().enumerate() {
            assert!(schema.axes[i + 1..].iter().all(|b| b.key != a.key));
        }
    }
    assert_eq!(HEALTH_SCHEMA.full_mark, Some(10.0));
    assert_eq!(FLAVOR_SCHEMA.full_mark, None);
}
