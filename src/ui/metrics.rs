use eframe::egui::{self, RichText, Ui};

use crate::analysis::summary::Summary;
use crate::ui::format;

/// Four headline cards side by side.
pub fn metric_cards(ui: &mut Ui, summary: &Summary) {
    ui.columns(4, |cols| {
        metric(&mut cols[0], "💵 Mean salary", &format::usd(summary.mean_salary));
        metric(&mut cols[1], "🏆 Max salary", &format::usd(summary.max_salary));
        metric(
            &mut cols[2],
            "📊 Records",
            &format::thousands(summary.count as u64),
        );
        metric(&mut cols[3], "👔 Most common title", &summary.top_job_title);
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(24.0).strong());
    });
}
