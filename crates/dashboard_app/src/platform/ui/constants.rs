use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "TradeTrust Campaign Manager";
pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const EDITOR_WIDTH: f32 = 460.0;
pub const GAUGE_MAX_WIDTH: f32 = 420.0;

pub const SIDEBAR_BG: Color32 = Color32::from_rgb(15, 23, 42);
pub const SIDEBAR_TEXT: Color32 = Color32::from_rgb(203, 213, 225);
pub const SIDEBAR_MUTED: Color32 = Color32::from_rgb(148, 163, 184);

pub const INFO: Color32 = Color32::from_rgb(96, 165, 250);
pub const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
pub const WARNING: Color32 = Color32::from_rgb(250, 204, 21);
pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128);

pub const TRACK: Color32 = Color32::from_rgb(241, 245, 249);
pub const TRACK_FILL: Color32 = Color32::from_rgb(59, 130, 246);
pub const RECOMMENDED_BAND: Color32 = Color32::from_rgb(209, 250, 229);
pub const RECOMMENDED_MARKER: Color32 = Color32::from_rgb(16, 185, 129);
pub const TICK: Color32 = Color32::from_rgb(203, 213, 225);
pub const GAUGE_LABEL: Color32 = Color32::from_rgb(148, 163, 184);
pub const GAUGE_VALUE: Color32 = Color32::from_rgb(15, 23, 42);
