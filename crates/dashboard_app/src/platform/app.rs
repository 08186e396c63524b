use std::time::Duration;

use campaign_core::{update, ActivationState, AppState, AppViewModel, Msg, Settings};
use dashboard_logging::{dash_info, dash_trace, dash_warn, set_frame};
use eframe::egui;

use super::config;
use super::effects::EffectRunner;
use super::logging;
use super::ui;

pub fn run_app() -> eframe::Result<()> {
    let config_path = config::config_path();
    let (app_config, problem) = config::load(&config_path);
    logging::initialize(app_config.log_destination, app_config.level_filter());
    if let Some(err) = problem {
        dash_warn!("Using default config: {}", err);
    }
    dash_info!("Starting dashboard with config {:?}", app_config);

    let settings = app_config.settings();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::constants::WINDOW_TITLE)
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::constants::WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            let runner = EffectRunner::new()?;
            Ok(Box::new(DashboardApp::new(settings, runner)))
        }),
    )
}

struct DashboardApp {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    frame: u64,
}

impl DashboardApp {
    fn new(settings: Settings, runner: EffectRunner) -> Self {
        let state = AppState::with_settings(settings);
        let view = state.view();
        let mut app = Self {
            state,
            view,
            runner,
            frame: 0,
        };
        app.dispatch(Msg::Mounted);
        app
    }

    fn dispatch(&mut self, msg: Msg) {
        dash_trace!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
        self.runner.run(effects);
    }

    fn repaint_interval(&self) -> Duration {
        let busy = self.view.processing
            || self.view.activation.state == ActivationState::Activating
            || self.runner.pointer_captured();
        if busy {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame = self.frame.wrapping_add(1);
        set_frame(self.frame);

        for msg in self.runner.drain_fired() {
            self.dispatch(msg);
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.dispatch(Msg::Teardown);
            self.runner.shutdown();
            return;
        }

        let mut outbox = Vec::new();
        ui::layout::show(ctx, &self.view, self.runner.pointer_captured(), &mut outbox);
        for msg in outbox {
            self.dispatch(msg);
        }

        ctx.request_repaint_after(self.repaint_interval());
    }
}
