//! Semicircular budget gauge widget.
//!
//! All geometry comes from the core's `GaugeView`; this module only maps view
//! box coordinates onto the allocated rect and turns pointer input into
//! messages.

use campaign_core::gauge::{GAUGE_MAX, GAUGE_MIN};
use campaign_core::{GaugeGeometry, GaugeView, Msg, Point};
use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Shape, Stroke};

use super::constants::*;
use super::render::format_with_commas;

const ARC_SEGMENTS: usize = 64;
const TRACK_WIDTH: f64 = 12.0;
const KNOB_RADIUS: f64 = 10.0;
const KNOB_DOT_RADIUS: f64 = 3.0;
const TICK_RADIUS: f64 = 1.5;

/// Maps between gauge view-box coordinates and screen pixels.
#[derive(Debug, Clone, Copy)]
struct ViewBox {
    rect: Rect,
    geometry: GaugeGeometry,
}

impl ViewBox {
    fn scale(&self) -> f32 {
        self.rect.width() / self.geometry.view_width as f32
    }

    fn to_view(self, pos: Pos2) -> Point {
        self.geometry.to_view_box(
            Point::new(
                f64::from(pos.x - self.rect.left()),
                f64::from(pos.y - self.rect.top()),
            ),
            f64::from(self.rect.width()),
            f64::from(self.rect.height()),
        )
    }

    fn to_screen(self, p: Point) -> Pos2 {
        let x = p.x * f64::from(self.rect.width()) / self.geometry.view_width;
        let y = p.y * f64::from(self.rect.height()) / self.geometry.view_height;
        egui::pos2(self.rect.left() + x as f32, self.rect.top() + y as f32)
    }

    fn arc(self, from: f64, to: f64, radius: f64) -> Vec<Pos2> {
        (0..=ARC_SEGMENTS)
            .map(|i| {
                let t = i as f64 / ARC_SEGMENTS as f64;
                let angle = from + (to - from) * t;
                self.to_screen(self.geometry.point_at(angle, radius))
            })
            .collect()
    }
}

pub fn show(
    ui: &mut egui::Ui,
    gauge: &GaugeView,
    pending: u32,
    captured: bool,
    outbox: &mut Vec<Msg>,
) {
    let geometry = gauge.geometry;
    let width = ui.available_width().min(GAUGE_MAX_WIDTH);
    let height = width * (geometry.view_height / geometry.view_width) as f32;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), Sense::click_and_drag());
    let view = ViewBox { rect, geometry };

    collect_input(ui, &response, view, captured, outbox);
    paint(ui.painter_at(rect.expand(4.0)), gauge, pending, view);
}

/// Press starts a session; while captured, every pointer position is forwarded
/// regardless of where the pointer is, until the button goes up.
fn collect_input(
    ui: &egui::Ui,
    response: &egui::Response,
    view: ViewBox,
    captured: bool,
    outbox: &mut Vec<Msg>,
) {
    let pressed_at = if response.is_pointer_button_down_on() {
        response.interact_pointer_pos()
    } else {
        None
    };
    let (pos, primary_down) = ui.input(|i| (i.pointer.interact_pos(), i.pointer.primary_down()));
    outbox.extend(pointer_message(view, captured, pressed_at, pos, primary_down));
}

/// Only the primary button opens a drag session.
fn pointer_message(
    view: ViewBox,
    captured: bool,
    pressed_at: Option<Pos2>,
    pos: Option<Pos2>,
    primary_down: bool,
) -> Option<Msg> {
    if !captured {
        return match pressed_at {
            Some(at) if primary_down => Some(Msg::GaugePressed(view.to_view(at))),
            _ => None,
        };
    }
    match (primary_down, pos) {
        (true, Some(pos)) => Some(Msg::GaugeDragged(view.to_view(pos))),
        (true, None) => None,
        (false, _) => Some(Msg::GaugeReleased),
    }
}

fn paint(painter: egui::Painter, gauge: &GaugeView, pending: u32, view: ViewBox) {
    let geometry = view.geometry;
    let scale = view.scale();
    let track = Stroke::new(TRACK_WIDTH as f32 * scale, TRACK);

    painter.add(Shape::line(
        view.arc(std::f64::consts::PI, 0.0, geometry.radius),
        track,
    ));

    let (band_start, band_end) = gauge.recommended_band;
    painter.add(Shape::line(
        view.arc(band_start, band_end, geometry.radius),
        Stroke::new(TRACK_WIDTH as f32 * scale, RECOMMENDED_BAND),
    ));

    if gauge.fill_fraction > 0.0 {
        painter.add(Shape::line(
            view.arc(std::f64::consts::PI, gauge.knob_angle, geometry.radius),
            Stroke::new(TRACK_WIDTH as f32 * scale, TRACK_FILL),
        ));
    }

    for angle in &gauge.tick_angles {
        let pos = view.to_screen(geometry.point_at(*angle, geometry.tick_radius));
        painter.circle_filled(pos, TICK_RADIUS as f32 * scale, TICK);
    }

    paint_marker(&painter, gauge.recommended_angle, view);

    let knob = view.to_screen(geometry.point_at(gauge.knob_angle, geometry.radius));
    painter.circle_filled(knob, KNOB_RADIUS as f32 * scale, egui::Color32::WHITE);
    painter.circle_stroke(knob, KNOB_RADIUS as f32 * scale, Stroke::new(1.0, TICK));
    painter.circle_filled(knob, KNOB_DOT_RADIUS as f32 * scale, TRACK_FILL);

    let label_font = FontId::proportional(10.0 * scale);
    let baseline = geometry.center.y + 5.0;
    painter.text(
        view.to_screen(Point::new(geometry.center.x - geometry.radius - 10.0, baseline)),
        Align2::RIGHT_CENTER,
        format!("${}", format_with_commas(u64::from(GAUGE_MIN))),
        label_font.clone(),
        GAUGE_LABEL,
    );
    painter.text(
        view.to_screen(Point::new(geometry.center.x + geometry.radius + 10.0, baseline)),
        Align2::LEFT_CENTER,
        format!("${}", format_with_commas(u64::from(GAUGE_MAX))),
        label_font,
        GAUGE_LABEL,
    );

    painter.text(
        view.to_screen(Point::new(geometry.center.x, geometry.center.y - 35.0)),
        Align2::CENTER_CENTER,
        format!("${pending}"),
        FontId::monospace(30.0 * scale),
        GAUGE_VALUE,
    );
    painter.text(
        view.to_screen(Point::new(geometry.center.x, geometry.center.y - 12.0)),
        Align2::CENTER_CENTER,
        "DAILY CAP",
        FontId::proportional(8.0 * scale),
        GAUGE_LABEL,
    );
}

/// Small triangle just outside the track, pointing at the centre.
fn paint_marker(painter: &egui::Painter, angle: f64, view: ViewBox) {
    let geometry = view.geometry;
    let tip = geometry.point_at(angle, geometry.marker_radius - 3.0);
    let half_width = 3.5 / geometry.marker_radius;
    let base_radius = geometry.marker_radius + 4.0;
    let left = geometry.point_at(angle + half_width, base_radius);
    let right = geometry.point_at(angle - half_width, base_radius);
    painter.add(Shape::convex_polygon(
        vec![
            view.to_screen(tip),
            view.to_screen(left),
            view.to_screen(right),
        ],
        RECOMMENDED_MARKER,
        Stroke::NONE,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_box() -> ViewBox {
        ViewBox {
            rect: Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(480.0, 280.0)),
            geometry: GaugeGeometry::default(),
        }
    }

    #[test]
    fn screen_and_view_coordinates_round_trip() {
        let view = view_box();
        let centre = view.to_screen(view.geometry.center);
        assert_eq!(centre, egui::pos2(340.0, 270.0));
        assert_eq!(view.to_view(centre), view.geometry.center);
    }

    #[test]
    fn right_end_of_screen_arc_is_maximum() {
        let view = view_box();
        let right = view.to_screen(view.geometry.point_at(0.0, view.geometry.radius));
        assert_eq!(view.geometry.value_for_point(view.to_view(right)), GAUGE_MAX);
    }

    #[test]
    fn only_primary_press_starts_a_drag() {
        let view = view_box();
        let centre = view.to_screen(view.geometry.center);

        assert_eq!(pointer_message(view, false, Some(centre), Some(centre), false), None);
        assert_eq!(
            pointer_message(view, false, Some(centre), Some(centre), true),
            Some(Msg::GaugePressed(view.geometry.center))
        );
        assert_eq!(pointer_message(view, false, None, Some(centre), true), None);
    }

    #[test]
    fn captured_pointer_drags_until_primary_is_released() {
        let view = view_box();
        let centre = view.to_screen(view.geometry.center);

        assert_eq!(
            pointer_message(view, true, None, Some(centre), true),
            Some(Msg::GaugeDragged(view.geometry.center))
        );
        assert_eq!(pointer_message(view, true, None, None, true), None);
        assert_eq!(
            pointer_message(view, true, None, Some(centre), false),
            Some(Msg::GaugeReleased)
        );
    }

    #[test]
    fn arc_has_expected_endpoints() {
        let view = view_box();
        let points = view.arc(std::f64::consts::PI, 0.0, view.geometry.radius);
        assert_eq!(points.len(), ARC_SEGMENTS + 1);
        assert!(points[0].x < points[ARC_SEGMENTS].x);
        assert_eq!(view.scale(), 2.0);
    }
}
