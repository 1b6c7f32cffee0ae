//! Hexagon outline geometry for renderers.
//!
//! Hexagons are pointy-top: corner `i` sits at angle `60i - 90` degrees, so
//! corner 0 points straight up.

use crate::error::{LayoutError, Result};

/// Corners per hexagon.
pub const HEX_CORNERS: usize = 6;

fn check_size(size: f64) -> Result<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(LayoutError::invalid(format!(
            "hexagon size must be finite and positive, got {size}"
        )));
    }
    Ok(())
}

/// Corner points of a hexagon of `size` centered at `(cx, cy)`.
pub fn hex_corners(cx: f64, cy: f64, size: f64) -> Result<[(f64, f64); HEX_CORNERS]> {
    check_size(size)?;
    if !cx.is_finite() || !cy.is_finite() {
        return Err(LayoutError::invalid(format!(
            "hexagon center must be finite, got ({cx}, {cy})"
        )));
    }
    Ok(std::array::from_fn(|i| {
        let angle = (i as f64 * 60.0 - 90.0).to_radians();
        (cx + size * angle.cos(), cy + size * angle.sin())
    }))
}

// Keeps float noise like 6e-17 from printing as "-0.00".
fn snap(v: f64) -> f64 {
    if v.abs() < 1e-9 {
        0.0
    } else {
        v
    }
}

/// SVG path for a hexagon of `size` centered at the origin.
///
/// ```
/// let path = hive_layout::hex_path(10.0).unwrap();
/// assert!(path.starts_with("M 0.00,-10.00 L 8.66,-5.00"));
/// assert!(path.ends_with(" Z"));
/// ```
pub fn hex_path(size: f64) -> Result<String> {
    let points: Vec<String> = hex_corners(0.0, 0.0, size)?
        .iter()
        .map(|&(x, y)| format!("{:.2},{:.2}", snap(x), snap(y)))
        .collect();
    Ok(format!("M {} Z", points.join(" L ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_on_circle() {
        let corners = hex_corners(100.0, 50.0, 40.0).unwrap();
        for (x, y) in corners {
            let r = (x - 100.0).hypot(y - 50.0);
            assert!((r - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn first_corner_points_up() {
        let [(x, y), ..] = hex_corners(0.0, 0.0, 10.0).unwrap();
        assert!(x.abs() < 1e-9);
        assert!((y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn neighbouring_corners_are_one_side_apart() {
        // A regular hexagon's side equals its circumradius
        let corners = hex_corners(0.0, 0.0, 25.0).unwrap();
        for i in 0..HEX_CORNERS {
            let (ax, ay) = corners[i];
            let (bx, by) = corners[(i + 1) % HEX_CORNERS];
            assert!(((ax - bx).hypot(ay - by) - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn path_format() {
        assert_eq!(
            hex_path(10.0).unwrap(),
            "M 0.00,-10.00 L 8.66,-5.00 L 8.66,5.00 L 0.00,10.00 L -8.66,5.00 L -8.66,-5.00 Z"
        );
    }

    #[test]
    fn rejects_bad_size() {
        assert!(hex_path(0.0).is_err());
        assert!(hex_path(-3.0).is_err());
        assert!(hex_corners(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_non_finite_center() {
        assert!(hex_corners(f64::NAN, 0.0, 10.0).is_err());
        assert!(hex_corners(0.0, f64::INFINITY, 10.0).is_err());
        assert!(hex_corners(-5.0, 5.0, 10.0).is_ok());
    }
}
