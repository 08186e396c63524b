use campaign_core::{
    ActivationState, AppViewModel, BudgetEditorView, CampaignSummary, Msg, BUDGET_MAX, BUDGET_MIN,
};
use eframe::egui::{self, RichText};

use super::constants::*;
use super::gauge;
use super::render;

pub fn show(
    ctx: &egui::Context,
    view: &AppViewModel,
    pointer_captured: bool,
    outbox: &mut Vec<Msg>,
) {
    sidebar(ctx, view);
    header(ctx, view);
    activation_bar(ctx, view, outbox);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            if view.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.label(RichText::new("Analyzing your market...").color(MUTED));
                });
                return;
            }
            if view.reveal.filter {
                render::filter_card(ui, view, outbox);
            }
            if view.reveal.ad_preview {
                render::ad_preview_card(ui, view, outbox);
            }
            if view.reveal.publishers {
                render::publishers_card(ui, view, outbox);
            }
            if view.reveal.metrics {
                render::metrics_card(ui, view, outbox);
            }
        });
    });

    if let Some(editor) = &view.budget_editor {
        budget_editor(ctx, editor, pointer_captured, outbox);
    }
    if let Some(summary) = &view.activation.summary {
        confirmation(ctx, summary, outbox);
    }
}

fn sidebar(ctx: &egui::Context, view: &AppViewModel) {
    egui::SidePanel::left("activity")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::new()
                .fill(SIDEBAR_BG)
                .inner_margin(egui::Margin::same(14)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("TradeTrust").strong().size(18.0).color(egui::Color32::WHITE));
                if view.unsaved_changes {
                    ui.label(RichText::new("● unsaved").small().color(WARNING));
                }
            });
            ui.add_space(12.0);
            ui.label(RichText::new("SYSTEM ACTIVITY").small().color(SIDEBAR_MUTED));
            ui.separator();

            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .max_height(ui.available_height() - 40.0)
                .show(ui, |ui| {
                    for entry in &view.logs {
                        ui.label(render::log_line(entry));
                    }
                    if view.processing {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label(RichText::new("Processing...").color(SIDEBAR_TEXT));
                        });
                    }
                });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                let now = chrono::Local::now();
                ui.label(
                    RichText::new(format!("Last updated {}", now.format("%H:%M:%S")))
                        .small()
                        .color(SIDEBAR_MUTED),
                );
            });
        });
}

fn header(ctx: &egui::Context, view: &AppViewModel) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Forensic Strategy Audit").strong().size(20.0));
                ui.label(RichText::new(&view.profile.advertiser_domain).color(MUTED));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("LICENSE VERIFIED {}", view.profile.license_id))
                        .strong()
                        .color(SUCCESS),
                );
            });
        });
        ui.add_space(6.0);
    });
}

fn activation_bar(ctx: &egui::Context, view: &AppViewModel, outbox: &mut Vec<Msg>) {
    let activation = &view.activation;
    if !activation.trigger_visible {
        return;
    }
    egui::TopBottomPanel::bottom("activation").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            let label = match activation.state {
                ActivationState::Activating => "Processing Campaign...".to_string(),
                _ => format!(
                    "Activate Campaign ${}/DAY",
                    render::format_with_commas(u64::from(view.committed_budget))
                ),
            };
            let button = egui::Button::new(RichText::new(label).strong().color(egui::Color32::WHITE))
                .fill(ACCENT)
                .min_size(egui::vec2(320.0, 40.0));
            if ui.add_enabled(activation.trigger_enabled, button).clicked() {
                outbox.push(Msg::ActivateClicked);
            }
        });
        ui.add_space(8.0);
    });
}

fn budget_editor(
    ctx: &egui::Context,
    editor: &BudgetEditorView,
    pointer_captured: bool,
    outbox: &mut Vec<Msg>,
) {
    egui::Window::new("Adjust Daily Budget")
        .collapsible(false)
        .resizable(false)
        .default_width(EDITOR_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!(
                    "We recommend ${}/day for your market.",
                    editor.recommended
                ))
                .color(MUTED),
            );
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                gauge::show(ui, &editor.gauge, editor.pending, pointer_captured, outbox);
            });

            ui.horizontal(|ui| {
                ui.label("Daily cap $");
                let mut text = editor.text.clone();
                let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(100.0));
                if response.changed() {
                    outbox.push(Msg::BudgetTextChanged(text));
                }
                if response.lost_focus() {
                    outbox.push(Msg::BudgetTextCommitted);
                }
                ui.label(
                    RichText::new(format!(
                        "Min ${} · Max ${}",
                        render::format_with_commas(u64::from(BUDGET_MIN)),
                        render::format_with_commas(u64::from(BUDGET_MAX))
                    ))
                    .small()
                    .color(MUTED),
                );
            });

            ui.add_space(6.0);
            ui.label(format!(
                "Projected: {} clicks · {} leads per day",
                render::format_with_commas(u64::from(editor.projected_clicks)),
                editor.projected_leads
            ));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    outbox.push(Msg::BudgetEditCancelled);
                }
                if ui.add(egui::Button::new("Apply").fill(ACCENT)).clicked() {
                    outbox.push(Msg::BudgetApplied);
                }
            });
        });
}

fn confirmation(ctx: &egui::Context, summary: &CampaignSummary, outbox: &mut Vec<Msg>) {
    egui::Window::new("Campaign Activated")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(RichText::new("Your campaign is live.").strong().color(SUCCESS));
            ui.add_space(6.0);
            egui::Grid::new("summary_grid").num_columns(2).show(ui, |ui| {
                ui.label("Daily budget");
                ui.label(format!(
                    "${}",
                    render::format_with_commas(u64::from(summary.daily_budget))
                ));
                ui.end_row();
                ui.label("Active filters");
                ui.label(summary.active_keywords.to_string());
                ui.end_row();
                ui.label("Publishers");
                ui.label(summary.enabled_publishers.to_string());
                ui.end_row();
            });
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                outbox.push(Msg::ConfirmationDismissed);
            }
        });
}
