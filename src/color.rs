//! Color helpers for mapping scalar values and ramps to RGB.

use crate::float_types::Real;

/// Convert an HSV triple to linear RGB.
///
/// Hue wraps into `[0, 1)`, so ramps may run past 1.0 without clamping;
/// saturation and value are expected in `[0, 1]`.
pub fn hsv_to_rgb(hue: Real, saturation: Real, value: Real) -> [Real; 3] {
    let hue = hue - hue.floor();
    let sector_position = hue * 6.0;
    let sector = sector_position.floor() as usize % 6;
    let fraction = sector_position - sector_position.floor();

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    match sector {
        0 => [value, t, p],
        1 => [q, value, p],
        2 => [p, value, t],
        3 => [p, q, value],
        4 => [t, p, value],
        _ => [value, p, q],
    }
}
