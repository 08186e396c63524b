//! Card renderers for the central panel. Each reads the view model and pushes
//! messages for whatever the user clicked.

use campaign_core::{AppViewModel, LogEntry, MetricsView, Msg, PreviewMode, Severity};
use eframe::egui::{self, Color32, RichText};

use super::constants::*;

fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(15.0));
            ui.add_space(6.0);
            add_contents(ui);
        });
    ui.add_space(10.0);
}

pub fn filter_card(ui: &mut egui::Ui, view: &AppViewModel, outbox: &mut Vec<Msg>) {
    card(ui, "Job Filter", |ui| {
        ui.label(
            RichText::new(format!(
                "{} of {} keywords active",
                view.metrics.active_keywords, view.metrics.total_keywords
            ))
            .color(MUTED),
        );
        ui.horizontal_wrapped(|ui| {
            for keyword in &view.keywords {
                if ui.selectable_label(keyword.active, keyword.text.as_str()).clicked() {
                    outbox.push(Msg::KeywordToggled(keyword.text.clone()));
                }
            }
        });
    });
}

pub fn publishers_card(ui: &mut egui::Ui, view: &AppViewModel, outbox: &mut Vec<Msg>) {
    card(ui, "Verified Publishers", |ui| {
        ui.label(
            RichText::new(format!(
                "Reach: {} households",
                view.metrics.reach_label
            ))
            .color(MUTED),
        );
        for publisher in &view.publishers {
            ui.horizontal(|ui| {
                let mut enabled = publisher.enabled;
                if ui.checkbox(&mut enabled, publisher.name.as_str()).changed() {
                    outbox.push(Msg::PublisherToggled(publisher.name.clone()));
                }
                if publisher.verified {
                    ui.colored_label(SUCCESS, "verified");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format_with_commas(publisher.reach));
                });
            });
        }
        ui.label(format!(
            "{} of {} publishers enabled",
            view.metrics.enabled_publishers, view.metrics.total_publishers
        ));
    });
}

pub fn ad_preview_card(ui: &mut egui::Ui, view: &AppViewModel, outbox: &mut Vec<Msg>) {
    card(ui, "Ad Preview", |ui| {
        ui.horizontal(|ui| {
            let mut mode = view.preview_mode;
            ui.radio_value(&mut mode, PreviewMode::Desktop, "Desktop");
            ui.radio_value(&mut mode, PreviewMode::Mobile, "Mobile");
            if mode != view.preview_mode {
                outbox.push(Msg::PreviewModeSelected(mode));
            }
        });
        ui.add_space(6.0);

        let width = match view.preview_mode {
            PreviewMode::Desktop => ui.available_width(),
            PreviewMode::Mobile => ui.available_width().min(320.0),
        };
        egui::Frame::group(ui.style())
            .fill(Color32::WHITE)
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new("Sponsored").small().color(MUTED));
                ui.label(
                    RichText::new(&view.profile.ad_headline)
                        .strong()
                        .color(ACCENT)
                        .size(16.0),
                );
                ui.label(view.profile.ad_body.as_str());
                ui.label(
                    RichText::new(format!(
                        "{} · License {} · Serving {}",
                        view.profile.advertiser_domain,
                        view.profile.license_id,
                        view.profile.service_zip
                    ))
                    .small()
                    .color(MUTED),
                );
            });
    });
}

pub fn metrics_card(ui: &mut egui::Ui, view: &AppViewModel, outbox: &mut Vec<Msg>) {
    let metrics = &view.metrics;
    card(ui, "Campaign Forecast", |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("${}/day", format_with_commas(u64::from(view.committed_budget))))
                    .strong()
                    .size(22.0),
            );
            if ui.button("Adjust").clicked() {
                outbox.push(Msg::BudgetEditOpened);
            }
        });
        ui.label(
            RichText::new(format!("Recommended: ${}/day", metrics.recommended_budget)).color(MUTED),
        );
        ui.add_space(8.0);

        egui::Grid::new("metrics_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                metric_row(ui, "Verified jobs / month", jobs_range_label(metrics), None);
                metric_row(
                    ui,
                    "Wasted inventory removed",
                    waste_label(metrics.waste_inventory),
                    Some(DANGER),
                );
                metric_row(
                    ui,
                    "Publishers enabled",
                    format!("{}/{}", metrics.enabled_publishers, metrics.total_publishers),
                    None,
                );
                metric_row(
                    ui,
                    "Est. clicks",
                    format_with_commas(u64::from(metrics.estimated_clicks)),
                    None,
                );
                metric_row(ui, "Avg. cost per job", cost_per_job_label(metrics), None);
                metric_row(
                    ui,
                    "Est. monthly spend",
                    format!("${}", format_with_commas(u64::from(metrics.estimated_cost))),
                    None,
                );
            });
    });
}

fn metric_row(ui: &mut egui::Ui, label: &str, value: String, color: Option<Color32>) {
    ui.label(RichText::new(label).color(MUTED));
    let text = RichText::new(value).strong();
    ui.label(match color {
        Some(color) => text.color(color),
        None => text,
    });
    ui.end_row();
}

pub fn log_line(entry: &LogEntry) -> RichText {
    let color = match entry.severity {
        Severity::Info => INFO,
        Severity::Success => SUCCESS,
        Severity::Warning => WARNING,
    };
    RichText::new(format!("> {}", entry.message))
        .monospace()
        .color(color)
}

fn jobs_range_label(metrics: &MetricsView) -> String {
    let (low, high) = metrics.verified_jobs;
    format!("{low}-{high}")
}

fn cost_per_job_label(metrics: &MetricsView) -> String {
    match metrics.avg_cost_per_job {
        Some(cost) => format!("${}", format_with_commas(u64::from(cost))),
        None => "n/a".to_string(),
    }
}

/// Waste can go negative when few keywords are active; the sign is kept.
pub fn waste_label(waste: i64) -> String {
    let digits = format_with_commas(waste.unsigned_abs());
    if waste < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

pub fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_000), "1,000");
        assert_eq!(format_with_commas(12_500_000), "12,500,000");
    }

    #[test]
    fn negative_waste_keeps_its_sign() {
        assert_eq!(waste_label(-2_500), "-2,500");
        assert_eq!(waste_label(4_200), "4,200");
        assert_eq!(waste_label(0), "0");
    }

    #[test]
    fn missing_cost_per_job_reads_as_not_applicable() {
        let metrics = MetricsView {
            total_reach: 0,
            reach_label: "0.0M".to_string(),
            waste_inventory: 0,
            estimated_clicks: 0,
            estimated_cost: 0,
            recommended_budget: 0,
            enabled_publishers: 0,
            total_publishers: 4,
            active_keywords: 0,
            total_keywords: 5,
            verified_jobs: (0, 0),
            avg_cost_per_job: None,
        };
        assert_eq!(cost_per_job_label(&metrics), "n/a");
        assert_eq!(jobs_range_label(&metrics), "0-0");
    }
}
