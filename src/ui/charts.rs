use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::analysis::charts::{CountryChart, HistogramBin, JobMean, RemoteShare};
use crate::color::{generate_palette, ColorScale};
use crate::config::DashboardConfig;
use crate::ui::format;

const HISTOGRAM_COLOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

// ---------------------------------------------------------------------------
// Ranked horizontal bars (top jobs, countries)
// ---------------------------------------------------------------------------

/// One bar of a ranked chart: axis label, length, and hover text.
struct RankedItem {
    label: String,
    value: f64,
    hover: String,
}

/// Horizontal bars, one per item, bottom to top in slice order. Bars are
/// coloured by value on `scale`; the y axis shows the labels.
fn ranked_bars(
    ui: &mut Ui,
    id: &str,
    items: Vec<RankedItem>,
    scale: ColorScale,
    x_label: &str,
    height: f32,
) {
    let (min, max) = items
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), item| {
            (lo.min(item.value), hi.max(item.value))
        });

    let bars: Vec<Bar> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Bar::new(i as f64, item.value)
                .name(&item.hover)
                .fill(scale.map(item.value, min, max))
        })
        .collect();
    let labels: Vec<String> = items.into_iter().map(|item| item.label).collect();

    Plot::new(id)
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label(x_label)
        .x_axis_formatter(|mark: GridMark, _range| format::usd(mark.value))
        .y_axis_formatter(move |mark: GridMark, _range| {
            let v = mark.value;
            if v >= 0.0 && v.fract() == 0.0 {
                labels.get(v as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

pub fn top_jobs_chart(ui: &mut Ui, jobs: &[JobMean], config: &DashboardConfig) {
    ui.strong(format!("Top {} job titles by mean salary", config.top_jobs));
    let items = jobs
        .iter()
        .map(|j| RankedItem {
            label: j.title.clone(),
            value: j.mean_salary,
            hover: format!("{}: {}", j.title, format::usd(j.mean_salary)),
        })
        .collect();
    ranked_bars(
        ui,
        "top_jobs",
        items,
        ColorScale::Viridis,
        "Mean salary (USD)",
        config.chart_height,
    );
}

pub fn country_chart(ui: &mut Ui, country: &CountryChart, config: &DashboardConfig) {
    ui.strong(format!("Mean {} salary by country", config.focus_job_title));
    match country {
        CountryChart::NoMatches => {
            ui.label(format!(
                "ℹ No {} records under the selected filters.",
                config.focus_job_title
            ));
        }
        CountryChart::Ready(countries) => {
            // Highest mean on top.
            let items = countries
                .iter()
                .rev()
                .map(|c| RankedItem {
                    label: c.iso3.clone(),
                    value: c.mean_salary,
                    hover: format!(
                        "{}: {} (n={})",
                        c.iso3,
                        format::usd(c.mean_salary),
                        format::thousands(c.count as u64)
                    ),
                })
                .collect();
            ranked_bars(
                ui,
                "country_salary",
                items,
                ColorScale::RedYellowGreen,
                "Mean salary (USD)",
                config.chart_height,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Salary histogram
// ---------------------------------------------------------------------------

pub fn histogram_chart(ui: &mut Ui, bins: &[HistogramBin], config: &DashboardConfig) {
    ui.strong("Annual salary distribution");

    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!(
                    "{} to {}",
                    format::usd(bin.lower),
                    format::usd(bin.upper)
                ))
        })
        .collect();

    Plot::new("salary_histogram")
        .height(config.chart_height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Salary range (USD)")
        .y_axis_label("Records")
        .x_axis_formatter(|mark: GridMark, _range| format::usd(mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(HISTOGRAM_COLOR).name("Records"));
        });
}

// ---------------------------------------------------------------------------
// Remote-work donut
// ---------------------------------------------------------------------------

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::angled(angle) * radius
}

/// Donut with a legend on the right. Slices start at twelve o'clock and run
/// clockwise in `shares` order.
pub fn remote_share_chart(ui: &mut Ui, shares: &[RemoteShare], config: &DashboardConfig) {
    ui.strong("Work arrangement share");
    let colors = generate_palette(shares.len());

    ui.horizontal(|ui: &mut Ui| {
        let side = config.chart_height.min(ui.available_width() * 0.6);
        let (rect, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
        let painter = ui.painter_at(rect);

        let center = rect.center();
        let outer = side / 2.0 * 0.95;
        let inner = outer * 0.5;

        let mut start = -FRAC_PI_2;
        for (share, color) in shares.iter().zip(&colors) {
            let sweep = share.fraction as f32 * TAU;
            // Short quads keep every piece convex, even for slices over 180°.
            let steps = ((share.fraction as f32) * 120.0).ceil().max(1.0) as usize;
            for s in 0..steps {
                let a0 = start + sweep * s as f32 / steps as f32;
                let a1 = start + sweep * (s + 1) as f32 / steps as f32;
                let quad = vec![
                    polar(center, inner, a0),
                    polar(center, outer, a0),
                    polar(center, outer, a1),
                    polar(center, inner, a1),
                ];
                painter.add(Shape::convex_polygon(quad, *color, Stroke::NONE));
            }
            start += sweep;
        }

        ui.vertical(|ui: &mut Ui| {
            for (share, color) in shares.iter().zip(&colors) {
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, *color);
                    ui.label(format!(
                        "{}  {:.1}%",
                        share.kind,
                        share.fraction * 100.0
                    ));
                    ui.label(
                        RichText::new(format!("({})", format::thousands(share.count as u64)))
                            .weak(),
                    );
                });
            }
        });
    });
}
