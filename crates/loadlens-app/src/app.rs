//! Application state and UI layout.
//!
//! The app has three interaction states: the idle main panel, a modal error
//! dialog that disables the rest of the UI until dismissed, and any number
//! of open results windows. Each submit that succeeds opens a fresh results
//! window; closing one returns focus to the main panel.

use crate::chart;
use loadlens_core::{Prediction, PredictionRequest, ToolLabel};
use loadlens_predict::Predictor;

/// One open results window.
struct ResultsWindow {
    id: usize,
    title: String,
    prediction: Prediction,
    tool: ToolLabel,
    open: bool,
}

/// Top-level application state.
pub struct LoadlensApp {
    predictor: Predictor,
    category_input: String,
    method_input: String,
    /// Message of the modal error dialog, if one is showing.
    error: Option<String>,
    results: Vec<ResultsWindow>,
    next_window_id: usize,
}

impl LoadlensApp {
    /// Create the app around a loaded predictor.
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor,
            category_input: String::new(),
            method_input: String::new(),
            error: None,
            results: Vec::new(),
            next_window_id: 0,
        }
    }

    /// Handle a submit: validate, predict, and open a results window or the
    /// error dialog.
    fn submit(&mut self) {
        let request = PredictionRequest::new(&self.category_input, &self.method_input);
        if request.has_empty_field() {
            self.error = Some("Please enter both API category and method.".to_string());
            return;
        }

        match self
            .predictor
            .predict(&self.category_input, &self.method_input)
        {
            Ok(prediction) => {
                let normalized = request.normalized();
                let id = self.next_window_id;
                self.next_window_id += 1;
                let tool = ToolLabel::from_name(&prediction.recommended_tool);
                self.results.push(ResultsWindow {
                    id,
                    title: format!(
                        "Prediction Results - {} {}",
                        normalized.method, normalized.category
                    ),
                    prediction,
                    tool,
                    open: true,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Prediction failed");
                self.error = Some(format!("Failed to make prediction: {e}"));
            }
        }
    }

    /// Number of currently open results windows.
    #[cfg(test)]
    fn open_results(&self) -> usize {
        self.results.iter().filter(|w| w.open).count()
    }

    fn main_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading("Predictive Load Testing & API Tool Recommender");
            ui.add_space(16.0);

            ui.label("Enter API Category:");
            ui.add(
                egui::TextEdit::singleline(&mut self.category_input)
                    .hint_text("Users")
                    .desired_width(240.0),
            );
            ui.add_space(8.0);

            ui.label("Enter API Method (GET, POST, PUT, DELETE):");
            ui.add(
                egui::TextEdit::singleline(&mut self.method_input)
                    .hint_text("GET")
                    .desired_width(240.0),
            );
            ui.add_space(12.0);

            if ui.button("Show Result").clicked() {
                self.submit();
            }
        });
    }

    fn error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error.clone() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
            });
    }

    fn results_windows(&mut self, ctx: &egui::Context) {
        for window in &mut self.results {
            egui::Window::new(&window.title)
                .id(egui::Id::new(window.id))
                .open(&mut window.open)
                .default_width(460.0)
                .show(ctx, |ui| {
                    ui.heading("Prediction Results");
                    ui.add_space(6.0);
                    ui.label(format!(
                        "Response Time: {}",
                        window.prediction.response_time_text()
                    ));
                    ui.label(format!(
                        "Error Rate: {}",
                        window.prediction.error_rate_text()
                    ));
                    ui.label(format!(
                        "Throughput: {}",
                        window.prediction.throughput_text()
                    ));
                    ui.add_space(6.0);
                    ui.strong(format!("Recommended Tool: {}", window.tool));
                    ui.label("Recommendation Reason:");
                    ui.label(window.tool.justification());
                    ui.add_space(10.0);
                    ui.label(
                        "API Performance Metrics (Response Time, Throughput, and Error Rate)",
                    );
                    chart::metrics_plot(ui, window.id, &window.prediction);
                });
        }
        self.results.retain(|w| w.open);
    }
}

impl eframe::App for LoadlensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // The error dialog is modal: the main panel stays inert until
            // it is dismissed.
            ui.add_enabled_ui(self.error.is_none(), |ui| {
                self.main_panel(ui);
            });
        });

        self.results_windows(ctx);
        self.error_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadlens_artifacts::ArtifactBundle;

    fn test_app() -> LoadlensApp {
        let predictor = Predictor::from_bundle(ArtifactBundle::sample()).unwrap();
        LoadlensApp::new(predictor)
    }

    #[test]
    fn submit_with_empty_category_shows_error_and_no_window() {
        let mut app = test_app();
        app.method_input = "POST".to_string();
        app.submit();

        assert!(app.error.is_some());
        assert_eq!(app.open_results(), 0);
    }

    #[test]
    fn submit_with_known_pair_opens_window() {
        let mut app = test_app();
        app.category_input = "Users".to_string();
        app.method_input = "get".to_string();
        app.submit();

        assert!(app.error.is_none());
        assert_eq!(app.open_results(), 1);

        let window = &app.results[0];
        assert_eq!(window.prediction.recommended_tool, "K6");
        assert_eq!(window.tool, ToolLabel::K6);
        assert!(window.title.contains("GET"));
    }

    #[test]
    fn each_submit_opens_a_new_window() {
        let mut app = test_app();
        app.category_input = "Users".to_string();
        app.method_input = "GET".to_string();
        app.submit();
        app.submit();

        assert_eq!(app.open_results(), 2);
        assert_ne!(app.results[0].id, app.results[1].id);
    }

    #[test]
    fn submit_with_unknown_category_shows_error() {
        let mut app = test_app();
        app.category_input = "Payments".to_string();
        app.method_input = "GET".to_string();
        app.submit();

        assert!(app
            .error
            .as_deref()
            .is_some_and(|m| m.starts_with("Failed to make prediction:")));
        assert_eq!(app.open_results(), 0);
    }
}
