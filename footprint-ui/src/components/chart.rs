//! History Chart Component
//!
//! Two-series line chart (footprint vs. ideal) over the record dates,
//! drawn on HTML5 Canvas. X positions follow insertion order, one slot per
//! record; nothing is sorted by date. Rendered only when history exists.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use footprint::ChartPoint;

use crate::state::global::AppState;

const FOOTPRINT_COLOR: &str = "#F44336"; // Red
const IDEAL_COLOR: &str = "#4CAF50"; // Green

/// Footprint history chart component
#[component]
pub fn HistoryChart() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the history changes
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let points: Vec<ChartPoint> = state_for_effect
            .history
            .get()
            .iter()
            .map(ChartPoint::from)
            .collect();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points);
        }
    });

    view! {
        {move || {
            if state.history.get().is_empty() {
                view! {}.into_view()
            } else {
                view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Your Footprint History"</h2>
                        <canvas
                            node_ref=canvas_ref
                            width="800"
                            height="400"
                            class="w-full h-64 md:h-96 rounded-lg"
                        />
                        <ChartLegend />
                    </section>
                }.into_view()
            }
        }}
    }
}

/// Legend for the two fixed series
#[component]
fn ChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center gap-6 mt-4">
            <LegendEntry label="Footprint" color=FOOTPRINT_COLOR />
            <LegendEntry label="Ideal" color=IDEAL_COLOR />
        </div>
    }
}

#[component]
fn LegendEntry(label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div
                class="w-3 h-3 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-sm text-gray-300">{label}</span>
        </div>
    }
}

/// Draw both series on the canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[ChartPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        return;
    }

    // Y range covers both series
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;
    for point in points {
        global_min = global_min.min(point.footprint).min(point.ideal);
        global_max = global_max.max(point.footprint).max(point.ideal);
    }

    // Add padding to y range
    let y_range = global_max - global_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    global_min -= y_padding;
    global_max += y_padding;

    // One x slot per record, in insertion order
    let x_for = |i: usize| -> f64 {
        if points.len() == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (points.len() - 1) as f64) * chart_width
        }
    };
    let y_for = |value: f64| -> f64 {
        margin_top + ((global_max - value) / (global_max - global_min)) * chart_height
    };

    // Draw grid lines with y-axis labels (5 bands)
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = global_max - (i as f64 / 5.0) * (global_max - global_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Draw both series
    draw_series(&ctx, points, FOOTPRINT_COLOR, &x_for, &y_for, |p| {
        p.footprint
    });
    draw_series(&ctx, points, IDEAL_COLOR, &x_for, &y_for, |p| p.ideal);

    // X-axis date labels; thin out when there are many records
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let step = (points.len() / 6).max(1);
    for (i, point) in points.iter().enumerate() {
        if i % step != 0 && i != points.len() - 1 {
            continue;
        }
        let _ = ctx.fill_text(&point.date, x_for(i) - 20.0, height - 10.0);
    }
}

/// Draw one polyline with point markers
fn draw_series(
    ctx: &CanvasRenderingContext2d,
    points: &[ChartPoint],
    color: &str,
    x_for: &dyn Fn(usize) -> f64,
    y_for: &dyn Fn(f64) -> f64,
    value_of: impl Fn(&ChartPoint) -> f64,
) {
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, point) in points.iter().enumerate() {
        let x = x_for(i);
        let y = y_for(value_of(point));

        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&color.into());
    for (i, point) in points.iter().enumerate() {
        let x = x_for(i);
        let y = y_for(value_of(point));

        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}
