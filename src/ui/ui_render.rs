use eframe::egui::{
    CentralPanel, Context, Frame, Margin, RichText, ScrollArea, SidePanel, TopBottomPanel,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, ParameterEvent, ParameterPanel};
use crate::ui::utils::section_heading;

use super::app::SimcoBrokerApp;

impl SimcoBrokerApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let is_fetching = self.is_fetching();
                let events = ScrollArea::vertical()
                    .id_salt("parameter_panel")
                    .show(ui, |ui| {
                        ParameterPanel::new(&mut self.form, is_fetching).render(ui)
                    })
                    .inner;

                for event in events {
                    match event {
                        ParameterEvent::FetchRequested => self.start_fetch(),
                        ParameterEvent::ProfileChanged(profile) => {
                            self.apply_profile_change(profile)
                        }
                    }
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(10));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                section_heading(ui, UI_TEXT.market_heading);

                if let Some(error) = &self.state.last_error {
                    ui.label_error(error);
                    ui.add_space(5.0);
                }

                let Some(report) = self.state.report.clone() else {
                    ui.label_subdued(UI_TEXT.no_data_yet);
                    return;
                };

                let tier_color = UI_CONFIG.tier_color(report.divergence.tier);
                let mut lines = report.summary.lines();
                for line in lines.by_ref().take(2) {
                    ui.label(RichText::new(line).monospace());
                }
                // Divergence and recommendation line
                if let Some(line) = lines.next() {
                    ui.label(RichText::new(line).monospace().strong().color(tier_color));
                }

                ui.add_space(5.0);
                ui.label_subdued(report.plot.point_count_label());
                ui.add_space(5.0);

                self.plot_view.show_my_plot(ui, &report.plot);
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.metric("📡", self.worker.signature(), UI_CONFIG.colors.label);
                    ui.separator();
                    if self.is_fetching() {
                        ui.spinner();
                        ui.label_subdued(UI_TEXT.fetching_label);
                    } else if let Some(elapsed) = self.last_elapsed {
                        ui.label_subdued(format!("{:.0?}", elapsed));
                    }
                });
            });
    }
}
