use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

// Pure chart geometry in canvas pixel space (y grows downward).

/// Angle of radar axis `index`; axis 0 points straight up and the rest
/// follow clockwise.
#[inline]
pub fn radar_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    -FRAC_PI_2 + TAU * index as f32 / count as f32
}

/// Unit direction of radar axis `index`.
#[inline]
pub fn radar_direction(index: usize, count: usize) -> Vec2 {
    Vec2::from_angle(radar_angle(index, count))
}

/// Position of `value` on radar axis `index`, scaled against the fixed
/// `full_mark` ceiling. Values outside [0, full_mark] are pinned to the rim
/// or the center.
#[inline]
pub fn radar_point(
    center: Vec2,
    outer_radius: f32,
    index: usize,
    count: usize,
    value: f64,
    full_mark: f64,
) -> Vec2 {
    let ratio = if full_mark > 0.0 {
        (value / full_mark).clamp(0.0, 1.0) as f32
    } else {
        0.0
    };
    center + radar_direction(index, count) * outer_radius * ratio
}

/// Vertices of the full-scale ring at `fraction` of the outer radius.
pub fn radar_ring(center: Vec2, outer_radius: f32, count: usize, fraction: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| center + radar_direction(i, count) * outer_radius * fraction)
        .collect()
}

/// Length in pixels of a horizontal bar for `value` on a [0, domain_max] axis.
#[inline]
pub fn bar_length(value: f64, domain_max: f64, track_px: f32) -> f32 {
    if domain_max <= 0.0 || track_px <= 0.0 {
        return 0.0;
    }
    ((value / domain_max).clamp(0.0, 1.0) as f32) * track_px
}

/// Top edge and thickness of bar `index` when `count` rows share `height_px`.
#[inline]
pub fn bar_row(index: usize, count: usize, height_px: f32, fill_ratio: f32) -> (f32, f32) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let row = height_px / count as f32;
    let thickness = row * fill_ratio.clamp(0.0, 1.0);
    let top = row * index as f32 + (row - thickness) * 0.5;
    (top, thickness)
}
