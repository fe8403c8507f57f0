//! Macronutrient charts
//!
//! Pie and bar charts of the protein/fat/carbohydrate split, rendered to
//! SVG with plotters. The whole figure is redrawn on every call.

use std::f64::consts::PI;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::pizza::{MacroDistribution, MacroShare, Macronutrient, PizzaBuilder};

pub const EMPTY_CHART_MESSAGE: &str = "Select ingredients to see distribution";

/// Accepted canvas size range, per side, in pixels
pub const MIN_CHART_DIMENSION: u32 = 200;
pub const MAX_CHART_DIMENSION: u32 = 4096;

const PIE_EXPLODE: f64 = 0.05;
const PIE_START_DEGREES: f64 = 90.0;
const BAR_WIDTH: f64 = 0.7;

type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Slice and bar colour for a macronutrient
pub fn macro_color(nutrient: Macronutrient) -> RGBColor {
    match nutrient {
        Macronutrient::Protein => RGBColor(0xFF, 0x6B, 0x6B),
        Macronutrient::Fat => RGBColor(0x4E, 0xCD, 0xC4),
        Macronutrient::Carbohydrates => RGBColor(0xFF, 0xE6, 0x6D),
    }
}

/// Render the distribution chart for the session's current totals
pub fn macro_chart_svg(pizza: &PizzaBuilder, width: u32, height: u32) -> Result<String, String> {
    let totals = pizza.totals().map_err(|e| e.to_string())?;
    render_macro_chart(&totals.macro_distribution(), width, height)
}

/// Render pie and bar charts side by side, or a placeholder when there is
/// nothing to show
pub fn render_macro_chart(dist: &MacroDistribution, width: u32, height: u32) -> Result<String, String> {
    for (label, value) in [("width", width), ("height", height)] {
        if !(MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION).contains(&value) {
            return Err(format!(
                "Chart {} must be between {} and {} pixels, got {}",
                label, MIN_CHART_DIMENSION, MAX_CHART_DIMENSION, value
            ));
        }
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        if dist.is_empty() {
            draw_placeholder(&root)?;
        } else {
            let panels = root.split_evenly((1, 2));
            draw_pie(&panels[0], dist)?;
            draw_bars(&panels[1], dist)?;
        }

        root.present().map_err(|e| e.to_string())?;
    }

    tracing::debug!(width, height, bytes = svg.len(), "Rendered macro chart");
    Ok(svg)
}

fn centered_text(size: u32) -> TextStyle<'static> {
    ("sans-serif", size)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

fn draw_placeholder(area: &SvgArea) -> Result<(), String> {
    let (w, h) = area.dim_in_pixel();
    area.draw(&Text::new(
        EMPTY_CHART_MESSAGE,
        ((w / 2) as i32, (h / 2) as i32),
        centered_text(16),
    ))
    .map_err(|e| e.to_string())
}

/// Point on a circle in pixel space (y grows downwards)
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    (
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 - radius * angle.sin()).round() as i32,
    )
}

fn draw_pie(area: &SvgArea, dist: &MacroDistribution) -> Result<(), String> {
    let body = area
        .titled("Pie Chart", ("sans-serif", 18).into_font())
        .map_err(|e| e.to_string())?;
    let (w, h) = body.dim_in_pixel();
    let center = (w as f64 / 2.0, h as f64 / 2.0);
    let radius = (w.min(h) as f64) * 0.36;

    // Slices run counter-clockwise from 12 o'clock
    let mut start = PIE_START_DEGREES.to_radians();
    for share in dist.shares.iter().filter(|s| s.grams > 0.0) {
        let sweep = 2.0 * PI * share.percent / 100.0;
        let mid = start + sweep / 2.0;
        let origin = (
            center.0 + PIE_EXPLODE * radius * mid.cos(),
            center.1 - PIE_EXPLODE * radius * mid.sin(),
        );

        let steps = ((sweep.to_degrees() / 2.0).ceil() as usize).max(2);
        let mut points = vec![polar(origin, 0.0, 0.0)];
        points.extend((0..=steps).map(|i| polar(origin, radius, start + sweep * i as f64 / steps as f64)));

        body.draw(&Polygon::new(points, macro_color(share.nutrient).filled()))
            .map_err(|e| e.to_string())?;
        draw_slice_labels(&body, share, origin, radius, mid)?;

        start += sweep;
    }
    Ok(())
}

fn draw_slice_labels(
    area: &SvgArea,
    share: &MacroShare,
    origin: (f64, f64),
    radius: f64,
    angle: f64,
) -> Result<(), String> {
    area.draw(&Text::new(
        format!("{:.1}%", share.percent),
        polar(origin, radius * 0.6, angle),
        centered_text(12),
    ))
    .map_err(|e| e.to_string())?;
    area.draw(&Text::new(
        share.nutrient.label(),
        polar(origin, radius * 1.2, angle),
        centered_text(12),
    ))
    .map_err(|e| e.to_string())
}

fn bar_label(x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    Macronutrient::ALL
        .get(index as usize)
        .map(|n| n.label().to_string())
        .unwrap_or_default()
}

fn draw_bars(area: &SvgArea, dist: &MacroDistribution) -> Result<(), String> {
    let y_max = dist
        .shares
        .iter()
        .map(|s| s.grams)
        .fold(0.0, f64::max)
        * 1.1;
    let x_max = dist.shares.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption("Bar Chart", ("sans-serif", 18).into_font())
        .margin(15)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(-0.5..x_max, 0.0..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(dist.shares.len())
        .x_label_formatter(&|x| bar_label(*x))
        .y_desc("Grams (g)")
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(dist.shares.iter().enumerate().map(|(i, share)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, share.grams)],
                macro_color(share.nutrient).mix(0.8).filled(),
            )
        }))
        .map_err(|e| e.to_string())?;

    Ok(())
}
