use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

use crate::analysis::DivergenceProfile;
use crate::engine::FetchRequest;
use crate::ui::app::SimcoBrokerApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// How often to repaint while a cycle is in flight, so the answer is picked up.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl SimcoBrokerApp {
    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }

    /// Validate the form and start one fetch cycle on a background thread.
    /// Ignored while another cycle is in flight.
    pub(super) fn start_fetch(&mut self) {
        if self.is_fetching() {
            return;
        }

        let params = match self.form.validate() {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Fetch not started: {}", e);
                self.state.reject(e.user_message());
                return;
            }
        };

        let Some(request_id) = self.state.begin_request() else {
            return;
        };

        let worker = self.worker.clone();
        let request = FetchRequest { request_id, params };
        self.fetch_promise = Some(Promise::spawn_thread("fetch_cycle", move || {
            worker.run(request)
        }));
    }

    pub(super) fn poll_fetch(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.fetch_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(outcome) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_fetch_timings {
                    log::info!(
                        "Cycle #{} finished in {:?}",
                        outcome.request_id,
                        outcome.elapsed
                    );
                }
                let elapsed = outcome.elapsed;
                if self.state.apply(outcome, self.form.profile) {
                    self.last_elapsed = Some(elapsed);
                }
                ctx.request_repaint();
            }
            Err(promise) => {
                // Still running
                self.fetch_promise = Some(promise);
                ctx.request_repaint_after(POLL_INTERVAL);
            }
        }
    }

    /// Re-run the recommendation for the report on screen against the new thresholds.
    pub(super) fn apply_profile_change(&mut self, profile: DivergenceProfile) {
        let Some(report) = self.state.report.as_ref() else {
            return;
        };
        match report.reclassify(&profile.table()) {
            Ok(updated) => self.state.replace_report(updated),
            Err(e) => {
                log::error!("Could not reclassify with {}: {}", profile, e);
                self.state.reject(e.user_message());
            }
        }
    }
}
