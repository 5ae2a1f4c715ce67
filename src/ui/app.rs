use eframe::{Frame, egui};
use poll_promise::Promise;
use std::time::Duration;

use crate::analysis::DivergenceProfile;
use crate::config::SIGNALS;
use crate::domain::ParamInputs;
use crate::engine::{DashboardState, FetchOutcome, FetchWorker};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The market dashboard window.
pub struct SimcoBrokerApp {
    /// Raw form contents, validated only when a fetch is requested
    pub(super) form: ParamInputs,
    pub(super) state: DashboardState,
    pub(super) worker: FetchWorker,
    pub(super) fetch_promise: Option<Promise<FetchOutcome>>,
    pub(super) last_elapsed: Option<Duration>,
    pub(super) plot_view: PlotView,
}

impl SimcoBrokerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        worker: FetchWorker,
        profile: DivergenceProfile,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        log::info!(
            "Dashboard ready (source: {}, profile: {})",
            worker.signature(),
            profile
        );

        Self {
            form: default_form(profile),
            state: DashboardState::default(),
            worker,
            fetch_promise: None,
            last_elapsed: None,
            plot_view: PlotView::new(),
        }
    }
}

/// Form contents at startup.
pub(super) fn default_form(profile: DivergenceProfile) -> ParamInputs {
    let form = &SIGNALS.form;
    ParamInputs {
        realm_id: form.realm_id.to_string(),
        resource_id: form.resource_id.to_string(),
        quality: form.quality.to_string(),
        interval: form.interval,
        show_vwap: form.show_vwap,
        show_sma: form.show_sma,
        sma_window: SIGNALS.default_sma_window.to_string(),
        profile,
    }
}

impl eframe::App for SimcoBrokerApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // The worker thread finishes on its own; nobody reads the answer
        self.fetch_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_fetch(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}
