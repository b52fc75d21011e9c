//! The results chart.
//!
//! Response time and throughput are drawn as bars; the error rate is a
//! dashed constant line across the plot. egui_plot has a single y axis, so
//! the error-rate line shares it and the legend names carry the units.

use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoints};
use loadlens_core::Prediction;

/// Render the metrics chart for one prediction.
pub fn metrics_plot(ui: &mut egui::Ui, window_id: usize, prediction: &Prediction) {
    let bars = vec![
        Bar::new(0.5, prediction.response_time_ms)
            .name("Response Time (ms)")
            .width(0.6),
        Bar::new(1.5, prediction.throughput_rps)
            .name("Throughput (Req/sec)")
            .width(0.6),
    ];
    let chart = BarChart::new(bars).name("Response Time & Throughput");

    let error_rate = prediction.error_rate_pct;
    let error_line = Line::new(PlotPoints::from(vec![
        [0.0, error_rate],
        [2.0, error_rate],
    ]))
    .style(LineStyle::dashed_loose())
    .name("Error Rate (%)");

    Plot::new(("metrics_plot", window_id))
        .legend(Legend::default())
        .height(220.0)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            plot_ui.line(error_line);
        });
}
