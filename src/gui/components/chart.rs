// src/gui/components/chart.rs
//
// Small painter-drawn charts: monthly line chart and a labelled bar chart.
// Both allocate the full available width and a fixed height.

use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, pos2, vec2,
};

use crate::core::MonthlySeries;
use crate::format::{format_euros, format_large_number};

pub const ORANGE: Color32 = Color32::from_rgb(0xFF, 0xA5, 0x00);
pub const BLUE: Color32 = Color32::from_rgb(0x4A, 0x90, 0xE2);

const Y_TICKS: usize = 5;
const MARGIN_LEFT: f32 = 72.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_BOTTOM: f32 = 44.0;
const MIN_LABEL_SPACING: f32 = 96.0;

pub struct Line<'a> {
    pub name: &'a str,
    pub color: Color32,
    pub series: &'a MonthlySeries,
}

/// Value axis bounds with a little headroom. Flat data gets a band around it.
fn y_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        let pad = (hi.abs() * 0.1).max(1.0);
        return (lo - pad, hi + pad);
    }
    let pad = (hi - lo) * 0.08;
    (lo - pad, hi + pad)
}

/// Every `step`-th x label is drawn so they never overlap.
fn label_step(points: usize, width: f32) -> usize {
    let fit = ((width / MIN_LABEL_SPACING).floor() as usize).max(1);
    points.div_ceil(fit).max(1)
}

fn plot_rect(outer: Rect) -> Rect {
    Rect::from_min_max(
        pos2(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
        pos2(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
    )
}

fn y_to_screen(plot: Rect, (lo, hi): (f64, f64), v: f64) -> f32 {
    let t = ((v - lo) / (hi - lo)) as f32;
    plot.bottom() - t * plot.height()
}

fn x_at(plot: Rect, i: usize, n: usize) -> f32 {
    if n <= 1 {
        plot.center().x
    } else {
        plot.left() + plot.width() * i as f32 / (n - 1) as f32
    }
}

fn draw_y_axis(painter: &egui::Painter, plot: Rect, bounds: (f64, f64), grid: Stroke, text: Color32) {
    let (lo, hi) = bounds;
    for k in 0..Y_TICKS {
        let v = lo + (hi - lo) * k as f64 / (Y_TICKS - 1) as f64;
        let y = y_to_screen(plot, bounds, v);
        painter.line_segment([pos2(plot.left(), y), pos2(plot.right(), y)], grid);
        painter.text(
            pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format_large_number(v.max(0.0)),
            FontId::proportional(11.0),
            text,
        );
    }
}

fn diamond(center: Pos2, r: f32, color: Color32) -> Shape {
    Shape::convex_polygon(
        vec![
            center + vec2(0.0, -r),
            center + vec2(r, 0.0),
            center + vec2(0.0, r),
            center + vec2(-r, 0.0),
        ],
        color,
        Stroke::NONE,
    )
}

fn legend(ui: &mut egui::Ui, lines: &[Line<'_>]) {
    ui.horizontal_wrapped(|ui| {
        for line in lines {
            let (r, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(r, 2.0, line.color);
            ui.label(line.name);
            ui.add_space(12.0);
        }
    });
}

/// Monthly line chart. All lines are expected to share the same months;
/// x labels and the hover tooltip come from the first line.
pub fn line_chart(ui: &mut egui::Ui, lines: &[Line<'_>], height: f32) {
    let Some(first) = lines.first() else { return };
    legend(ui, lines);

    let (outer, response) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);
    let visuals = ui.visuals();
    let grid = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);
    let text = visuals.weak_text_color();

    let plot = plot_rect(outer);
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }
    painter.rect_filled(plot, 2.0, visuals.faint_bg_color);

    let bounds = y_bounds(lines.iter().flat_map(|l| l.series.iter().map(|p| p.value)));
    draw_y_axis(&painter, plot, bounds, grid, text);

    let n = first.series.len();
    let step = label_step(n, plot.width());
    for (i, p) in first.series.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let x = x_at(plot, i, n);
        painter.line_segment([pos2(x, plot.bottom()), pos2(x, plot.bottom() + 4.0)], grid);
        painter.text(
            pos2(x, plot.bottom() + 8.0),
            Align2::CENTER_TOP,
            &p.label,
            FontId::proportional(11.0),
            text,
        );
    }

    for line in lines {
        let m = line.series.len();
        let pts: Vec<Pos2> = line
            .series
            .iter()
            .enumerate()
            .map(|(i, p)| pos2(x_at(plot, i, m), y_to_screen(plot, bounds, p.value)))
            .collect();
        if pts.len() > 1 {
            painter.add(Shape::line(pts.clone(), Stroke::new(3.0, line.color)));
        }
        for pt in pts {
            painter.add(diamond(pt, 5.0, line.color));
        }
    }

    let Some(hover) = response.hover_pos().filter(|p| plot.expand2(vec2(8.0, 0.0)).contains(*p)) else {
        return;
    };
    let i = if n <= 1 {
        0
    } else {
        let t = ((hover.x - plot.left()) / plot.width()).clamp(0.0, 1.0);
        (t * (n - 1) as f32).round() as usize
    };
    let x = x_at(plot, i, n);
    painter.line_segment([pos2(x, plot.top()), pos2(x, plot.bottom())], Stroke::new(1.0, text));

    let label = first.series.points().get(i).map(|p| p.label.clone()).unwrap_or_default();
    response.on_hover_ui_at_pointer(|ui| {
        ui.strong(label);
        for line in lines {
            if let Some(p) = line.series.points().get(i) {
                ui.colored_label(line.color, format!("{}: {}", line.name, format_euros(p.value)));
            }
        }
    });
}

pub struct Bar<'a> {
    pub label: &'a str,
    pub value: f64,
}

/// Vertical bars from zero, value text above each bar, names below.
pub fn bar_chart(ui: &mut egui::Ui, bars: &[Bar<'_>], color: Color32, height: f32) {
    let (outer, response) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
    if bars.is_empty() {
        return;
    }
    let painter = ui.painter_at(outer);
    let visuals = ui.visuals();
    let grid = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);
    let text = visuals.text_color();
    let weak = visuals.weak_text_color();

    let plot = plot_rect(outer);
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }
    let top = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let bounds = (0.0, if top > 0.0 { top * 1.12 } else { 1.0 });
    draw_y_axis(&painter, plot, bounds, grid, weak);

    let slot = plot.width() / bars.len() as f32;
    let bar_w = (slot * 0.6).max(4.0);
    let mut hovered = None;

    for (i, bar) in bars.iter().enumerate() {
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let y = y_to_screen(plot, bounds, bar.value.max(0.0));
        let rect = Rect::from_min_max(pos2(cx - bar_w / 2.0, y), pos2(cx + bar_w / 2.0, plot.bottom()));
        let hot = response.hover_pos().is_some_and(|p| rect.contains(p));
        if hot {
            hovered = Some(i);
        }
        let fill = if hot { color.gamma_multiply(0.8) } else { color };
        painter.rect_filled(rect, 2.0, fill);

        painter.text(
            pos2(cx, y - 4.0),
            Align2::CENTER_BOTTOM,
            format_euros(bar.value),
            FontId::proportional(12.0),
            text,
        );
        painter.text(
            pos2(cx, plot.bottom() + 8.0),
            Align2::CENTER_TOP,
            bar.label,
            FontId::proportional(12.0),
            text,
        );
    }

    if let Some(bar) = hovered.and_then(|i| bars.get(i)) {
        response.on_hover_ui_at_pointer(|ui| {
            ui.strong(bar.label);
            ui.label(format_euros(bar.value));
        });
    }
}
