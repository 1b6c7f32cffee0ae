//! Layout properties across roster sizes and canvases.

use hive_layout::{compute_positions, connectors_for, select_size_tier, would_overflow, Canvas, GridLayout};
use proptest::prelude::*;

#[test]
fn nodes_never_overlap_on_default_canvas() {
    let canvas = Canvas::default();
    for count in 1..=200 {
        let tier = select_size_tier(count);
        let positions = compute_positions(count, &canvas).unwrap();
        assert_eq!(positions.len(), count);

        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(
                    a.distance(b) >= 2.0 * tier.radius,
                    "count {}: nodes {} and {} overlap at radius {}",
                    count,
                    a.index,
                    b.index,
                    tier.radius
                );
            }
        }
    }
}

#[test]
fn connectors_only_join_distinct_in_range_indices() {
    let canvas = Canvas::default();
    for count in 0..=100 {
        let positions = compute_positions(count, &canvas).unwrap();
        let connectors = connectors_for(&positions, select_size_tier(count)).unwrap();
        for c in connectors {
            assert!(c.a() < c.b());
            assert!(c.b() < count);
        }
    }
}

#[test]
fn default_canvas_holds_twenty_four() {
    let canvas = Canvas::default();
    let first_overflow = (0..=200).find(|&n| would_overflow(n, &canvas).unwrap());
    assert_eq!(first_overflow, Some(25));
}

proptest! {
    #[test]
    fn positions_are_deterministic(
        count in 0usize..300,
        width in 250.0f64..4000.0,
        height in 100.0f64..4000.0,
    ) {
        let canvas = Canvas::new(width, height).unwrap();
        let first = compute_positions(count, &canvas).unwrap();
        let second = compute_positions(count, &canvas).unwrap();
        prop_assert_eq!(first.len(), count);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn positions_stay_inside_canvas_width(
        count in 1usize..300,
        width in 250.0f64..4000.0,
    ) {
        let canvas = Canvas::new(width, 600.0).unwrap();
        let grid = GridLayout::default();
        for p in compute_positions(count, &canvas).unwrap() {
            prop_assert!(p.x - grid.node_radius >= 0.0);
            prop_assert!(p.x + grid.node_radius <= width);
        }
    }

    #[test]
    fn overflow_matches_last_position(
        count in 1usize..200,
        height in 100.0f64..3000.0,
    ) {
        let canvas = Canvas::new(1200.0, height).unwrap();
        let positions = compute_positions(count, &canvas).unwrap();
        let last = positions[count - 1];
        let expected = last.y + select_size_tier(count).radius > height;
        prop_assert_eq!(would_overflow(count, &canvas).unwrap(), expected);
    }
}
