use eframe::egui::{Button, ComboBox, Grid, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::analysis::DivergenceProfile;
use crate::domain::{MarketInterval, ParamInputs};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterEvent {
    FetchRequested,
    ProfileChanged(DivergenceProfile),
}

/// Panel holding the market query form. Edits the raw inputs in place.
pub struct ParameterPanel<'a> {
    form: &'a mut ParamInputs,
    is_fetching: bool,
}

impl<'a> ParameterPanel<'a> {
    pub fn new(form: &'a mut ParamInputs, is_fetching: bool) -> Self {
        Self { form, is_fetching }
    }

    fn render_query_fields(&mut self, ui: &mut Ui) {
        Grid::new("market_query_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                id_field(ui, UI_TEXT.realm_label, &mut self.form.realm_id);
                id_field(ui, UI_TEXT.resource_label, &mut self.form.resource_id);
                id_field(ui, UI_TEXT.quality_label, &mut self.form.quality);

                ui.label(UI_TEXT.interval_label);
                ComboBox::from_id_salt("interval_selector")
                    .selected_text(self.form.interval.to_string())
                    .show_ui(ui, |ui| {
                        for interval in MarketInterval::iter() {
                            ui.selectable_value(
                                &mut self.form.interval,
                                interval,
                                interval.to_string(),
                            );
                        }
                    });
                ui.end_row();
            });
    }

    fn render_overlay_options(&mut self, ui: &mut Ui) {
        ui.checkbox(&mut self.form.show_vwap, UI_TEXT.show_vwap_label);
        ui.checkbox(&mut self.form.show_sma, UI_TEXT.show_sma_label);

        ui.add_enabled_ui(self.form.show_sma, |ui| {
            ui.horizontal(|ui| {
                ui.label(UI_TEXT.sma_length_label);
                ui.add(
                    TextEdit::singleline(&mut self.form.sma_window)
                        .desired_width(UI_CONFIG.id_field_width / 2.0),
                );
            });
        });
    }

    fn render_profile_selector(&mut self, ui: &mut Ui) -> Option<DivergenceProfile> {
        ui.label(colored_subsection_heading(UI_TEXT.profile_heading));
        let before = self.form.profile;
        // Locked while a cycle is in flight
        ui.add_enabled_ui(!self.is_fetching, |ui| {
            ComboBox::from_id_salt("profile_selector")
                .selected_text(self.form.profile.to_string())
                .show_ui(ui, |ui| {
                    for profile in DivergenceProfile::iter() {
                        ui.selectable_value(&mut self.form.profile, profile, profile.to_string());
                    }
                });
        });
        (self.form.profile != before).then_some(self.form.profile)
    }

    fn render_fetch_button(&mut self, ui: &mut Ui) -> bool {
        let clicked = ui
            .add_enabled(!self.is_fetching, Button::new(UI_TEXT.fetch_button))
            .clicked();
        if self.is_fetching {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(UI_TEXT.fetching_label);
            });
        }
        clicked
    }
}

fn id_field(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).desired_width(UI_CONFIG.id_field_width));
    ui.end_row();
}

impl<'a> Panel for ParameterPanel<'a> {
    type Event = ParameterEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        section_heading(ui, UI_TEXT.parameters_heading);
        self.render_query_fields(ui);

        spaced_separator(ui);
        self.render_overlay_options(ui);

        spaced_separator(ui);
        if let Some(profile) = self.render_profile_selector(ui) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Threshold profile changed to {}", profile);
            }
            events.push(ParameterEvent::ProfileChanged(profile));
        }

        spaced_separator(ui);
        if self.render_fetch_button(ui) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Fetch requested");
            }
            events.push(ParameterEvent::FetchRequested);
        }

        events
    }
}
