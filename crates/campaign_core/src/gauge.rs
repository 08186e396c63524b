//! Semicircular budget gauge geometry.
//!
//! Angles are measured in radians from the rightmost point of the arc (0)
//! counterclockwise to the leftmost point (π). The rightmost end maps to the
//! maximum value and the leftmost end to the minimum.

use std::f64::consts::PI;

pub const GAUGE_MIN: u32 = 100;
pub const GAUGE_MAX: u32 = 1_000;
const GAUGE_SPAN: f64 = (GAUGE_MAX - GAUGE_MIN) as f64;

/// Half-width of the recommended band drawn on the track.
pub const RECOMMENDED_BAND_HALF_WIDTH: u32 = 50;

/// Tick positions as fractions of the range.
pub const TICK_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Arc placement inside a fixed view box. Widget coordinates are scaled into
/// the view box before any angle is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub view_width: f64,
    pub view_height: f64,
    pub center: Point,
    pub radius: f64,
    pub tick_radius: f64,
    pub marker_radius: f64,
}

impl Default for GaugeGeometry {
    fn default() -> Self {
        Self {
            view_width: 240.0,
            view_height: 140.0,
            center: Point::new(120.0, 110.0),
            radius: 90.0,
            tick_radius: 78.0,
            marker_radius: 108.0,
        }
    }
}

impl GaugeGeometry {
    /// Scales a point given relative to a widget of `width` x `height` into
    /// view-box coordinates. Degenerate widgets map to the origin.
    pub fn to_view_box(&self, local: Point, width: f64, height: f64) -> Point {
        if width <= 0.0 || height <= 0.0 {
            return Point::default();
        }
        Point::new(
            local.x * self.view_width / width,
            local.y * self.view_height / height,
        )
    }

    /// Pointer angle in view-box space, pinned to the arc.
    ///
    /// Points below the baseline snap to whichever end of the arc is closer,
    /// so sweeping past the left end stays at the minimum.
    pub fn angle_for_point(&self, p: Point) -> f64 {
        let dx = p.x - self.center.x;
        let dy = self.center.y - p.y;
        let angle = dy.atan2(dx);
        if angle >= 0.0 {
            angle.min(PI)
        } else if angle < -PI / 2.0 {
            PI
        } else {
            0.0
        }
    }

    pub fn value_for_point(&self, p: Point) -> u32 {
        value_for_angle(self.angle_for_point(p))
    }

    /// Position on a circle of `radius` around the centre at `angle`.
    pub fn point_at(&self, angle: f64, radius: f64) -> Point {
        Point::new(
            self.center.x + angle.cos() * radius,
            self.center.y - angle.sin() * radius,
        )
    }

    /// Knob position for `value` on the track.
    pub fn knob_position(&self, value: u32) -> Point {
        self.point_at(angle_for_value(value), self.radius)
    }
}

/// Maps an arc angle to a gauge value: round(100 + 900 × (1 − θ/π)).
pub fn value_for_angle(angle: f64) -> u32 {
    let theta = angle.clamp(0.0, PI);
    let value = (GAUGE_MIN as f64 + GAUGE_SPAN * (1.0 - theta / PI)).round();
    (value as u32).clamp(GAUGE_MIN, GAUGE_MAX)
}

/// Share of the range covered by `value`, in [0, 1].
pub fn fill_fraction(value: u32) -> f64 {
    (f64::from(value.saturating_sub(GAUGE_MIN)) / GAUGE_SPAN).clamp(0.0, 1.0)
}

/// Inverse of [`value_for_angle`]. Values outside the gauge range pin to the ends.
pub fn angle_for_value(value: u32) -> f64 {
    (1.0 - fill_fraction(value)) * PI
}

/// Track segment around the recommended budget, as `(start, end)` angles.
/// `start` is the lower-value end, so it has the larger angle.
pub fn recommended_band(recommended: u32) -> (f64, f64) {
    let low = recommended
        .saturating_sub(RECOMMENDED_BAND_HALF_WIDTH)
        .max(GAUGE_MIN);
    let high = recommended
        .saturating_add(RECOMMENDED_BAND_HALF_WIDTH)
        .min(GAUGE_MAX);
    (angle_for_value(low), angle_for_value(high))
}

pub fn tick_angles() -> impl Iterator<Item = f64> {
    TICK_FRACTIONS.iter().map(|fraction| (1.0 - fraction) * PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GaugeGeometry {
        GaugeGeometry::default()
    }

    #[test]
    fn value_is_monotonic_and_bounded_over_the_arc() {
        let mut previous = u32::MAX;
        for i in 0..=1_000 {
            let theta = PI * f64::from(i) / 1_000.0;
            let value = value_for_angle(theta);
            assert!((GAUGE_MIN..=GAUGE_MAX).contains(&value));
            assert!(value <= previous, "value rose at theta={theta}");
            previous = value;
        }
    }

    #[test]
    fn ends_and_midpoint() {
        assert_eq!(value_for_angle(0.0), 1_000);
        assert_eq!(value_for_angle(PI), 100);
        assert_eq!(value_for_angle(PI / 2.0), 550);
    }

    #[test]
    fn dragging_past_the_ends_pins_the_value() {
        let g = geometry();
        // Far right, slightly below the baseline.
        let right = Point::new(300.0, 130.0);
        assert_eq!(g.angle_for_point(right), 0.0);
        assert_eq!(g.value_for_point(right), 1_000);

        // Far left, slightly below the baseline.
        let left = Point::new(-50.0, 130.0);
        assert_eq!(g.angle_for_point(left), PI);
        assert_eq!(g.value_for_point(left), 100);
    }

    #[test]
    fn top_of_arc_is_the_midpoint() {
        let g = geometry();
        assert_eq!(g.value_for_point(Point::new(120.0, 20.0)), 550);
    }

    #[test]
    fn widget_coordinates_scale_into_view_box() {
        let g = geometry();
        let p = g.to_view_box(Point::new(240.0, 110.0), 480.0, 280.0);
        assert_eq!(p, Point::new(120.0, 55.0));
        assert_eq!(g.to_view_box(Point::new(5.0, 5.0), 0.0, 10.0), Point::default());
    }

    #[test]
    fn inverse_mapping_round_trips_the_knob() {
        let g = geometry();
        for value in [100, 250, 550, 775, 1_000] {
            let knob = g.knob_position(value);
            assert_eq!(g.value_for_point(knob), value);
        }
    }

    #[test]
    fn angle_for_value_pins_out_of_range_values() {
        assert_eq!(angle_for_value(0), PI);
        assert_eq!(angle_for_value(5_000), 0.0);
        assert_eq!(fill_fraction(5_000), 1.0);
    }

    #[test]
    fn recommended_band_is_clamped_to_range() {
        let (start, end) = recommended_band(120);
        assert_eq!(start, angle_for_value(100));
        assert_eq!(end, angle_for_value(170));

        let (start, end) = recommended_band(1_000);
        assert_eq!(start, angle_for_value(950));
        assert_eq!(end, 0.0);
    }

    #[test]
    fn ticks_cover_the_arc() {
        let angles: Vec<f64> = tick_angles().collect();
        assert_eq!(angles.len(), 5);
        assert_eq!(angles[0], PI);
        assert_eq!(angles[4], 0.0);
    }
}
