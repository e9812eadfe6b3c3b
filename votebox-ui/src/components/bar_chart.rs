//! Bar Chart Component
//!
//! Vote tally bar chart using HTML5 Canvas, redrawn whenever the
//! tally or language changes.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{Candidate, GlobalState, Language, Tally};

/// Tally bar chart component
#[component]
pub fn BarChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw chart when tally, candidates or language change
    create_effect(move |_| {
        let tally = state.tally.get();
        let candidates = state.candidates.get();
        let language = state.language.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &tally, &candidates, language);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

/// Draw the bar chart on canvas
fn draw_chart(
    canvas: &HtmlCanvasElement,
    tally: &Tally,
    candidates: &[Candidate],
    language: Language,
) {
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
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if candidates.is_empty() {
        return;
    }

    // Y-axis scale: at least 5 so a near-empty poll still has gridlines
    let max_count = candidates
        .iter()
        .map(|c| tally.count(&c.id))
        .max()
        .unwrap_or(0)
        .max(5);

    // Draw grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_count as f64 - (i as f64 / 5.0) * max_count as f64;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // One bar per candidate
    let slot_width = chart_width / candidates.len() as f64;
    let bar_width = slot_width * 0.6;

    for (i, candidate) in candidates.iter().enumerate() {
        let count = tally.count(&candidate.id);
        let bar_height = (count as f64 / max_count as f64) * chart_height;

        let x = margin_left + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&candidate.color.as_str().into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Count above the bar
        ctx.set_fill_style(&"#ffffff".into());
        ctx.set_font("bold 14px sans-serif");
        let _ = ctx.fill_text(
            &count.to_string(),
            x + bar_width / 2.0 - 6.0,
            (y - 6.0).max(margin_top + 12.0),
        );

        // Candidate label below the axis
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("13px sans-serif");
        let label = candidate.label(language);
        let _ = ctx.fill_text(
            label,
            x + bar_width / 2.0 - label.chars().count() as f64 * 3.5,
            height - 15.0,
        );
    }
}
