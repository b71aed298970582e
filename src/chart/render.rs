use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use super::layout::{Annotation, ChartLayout, pixel_size, uts_caption};
use crate::analysis::MechanicalProperties;
use crate::color::SeriesColors;
use crate::data::model::SampleSeries;

// Sizes in pixels at 300 DPI (1 pt ≈ 4.17 px).
const FONT: &str = "sans-serif";
const TITLE_PX: f64 = 50.0;
const AXIS_DESC_PX: f64 = 42.0;
const TICK_LABEL_PX: f64 = 36.0;
const ANNOTATION_PX: f64 = 42.0;
const LINE_PX: u32 = 6;
const MARKER_PX: i32 = 12;
const BOX_PADDING_PX: i32 = 14;
const DASH_PX: i32 = 24;
const DASH_GAP_PX: i32 = 16;

type StressStrainChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

// ---------------------------------------------------------------------------
// Chart style
// ---------------------------------------------------------------------------

/// Presentation settings that do not depend on the data.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub title: String,
    pub colors: SeriesColors,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Stress-Strain Curve".to_string(),
            colors: SeriesColors::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the annotated stress-strain chart to a PNG at `destination`.
///
/// The layout is validated and the whole image rasterised in memory before
/// the file is created, so a failure never leaves a partial image behind.
pub fn render(
    series: &SampleSeries,
    props: &MechanicalProperties,
    style: &ChartStyle,
    destination: &Path,
) -> Result<()> {
    let layout = ChartLayout::new(series, props)?;
    log::debug!(
        "Elastic fit extended to strain {} over {} points",
        layout.fit_bound,
        layout.fit_line.len()
    );
    render_layout(&layout, style, destination)
}

/// Rasterise an already validated layout and write it as PNG.
fn render_layout(layout: &ChartLayout, style: &ChartStyle, destination: &Path) -> Result<()> {
    let (width, height) = pixel_size();
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    draw(&mut buffer, (width, height), layout, style).context("drawing chart")?;

    let image =
        RgbImage::from_raw(width, height, buffer).context("chart buffer has the wrong size")?;
    image
        .save_with_format(destination, ImageFormat::Png)
        .with_context(|| format!("writing {}", destination.display()))?;

    log::info!("Wrote {width}x{height} chart to {}", destination.display());
    Ok(())
}

fn draw(
    buffer: &mut [u8],
    size: (u32, u32),
    layout: &ChartLayout,
    style: &ChartStyle,
) -> Result<()> {
    let colors = style.colors;
    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.title, (FONT, TITLE_PX))
        .margin(40)
        .x_label_area_size(110)
        .y_label_area_size(150)
        .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc("Strain")
        .y_desc("Stress (GPa)")
        .axis_desc_style((FONT, AXIS_DESC_PX))
        .label_style((FONT, TICK_LABEL_PX))
        .draw()?;

    // ---- Raw samples: line + markers ----
    let curve_style = colors.curve.stroke_width(LINE_PX);
    chart
        .draw_series(LineSeries::new(layout.curve.iter().copied(), curve_style))?
        .label("Stress-Strain Curve")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 60, y)], curve_style));
    chart.draw_series(
        layout
            .curve
            .iter()
            .map(|&p| Circle::new(p, MARKER_PX, colors.curve.filled())),
    )?;

    // ---- Elastic fit extended to the peak stress ----
    let fit_style = colors.fit.stroke_width(LINE_PX);
    chart
        .draw_series(DashedLineSeries::new(
            layout.fit_line.iter().copied(),
            DASH_PX,
            DASH_GAP_PX,
            fit_style,
        ))?
        .label("Young's Modulus Fit")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 60, y)], fit_style));

    // ---- UTS reference line ----
    let uts_style = colors.uts.stroke_width(LINE_PX);
    let uts_line = [
        (layout.x_range.start, layout.uts),
        (layout.x_range.end, layout.uts),
    ];
    chart
        .draw_series(DashedLineSeries::new(uts_line, DASH_PX, DASH_GAP_PX, uts_style))?
        .label(uts_caption(layout.uts))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 60, y)], uts_style));

    draw_annotation(&mut chart, &layout.equation, colors.fit)?;
    draw_annotation(&mut chart, &layout.uts_label, colors.uts)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, TICK_LABEL_PX))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draw a text block in a translucent white box with a coloured border.
/// The box grows up and to the right from the annotation anchor.
fn draw_annotation(
    chart: &mut StressStrainChart<'_, '_>,
    annotation: &Annotation,
    color: RGBColor,
) -> Result<()> {
    let line_height = (ANNOTATION_PX * 1.25) as i32;
    let widest = annotation
        .lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let width = (widest as f64 * ANNOTATION_PX * 0.55) as i32 + 2 * BOX_PADDING_PX;
    let height = annotation.lines.len() as i32 * line_height + 2 * BOX_PADDING_PX;

    let frame = EmptyElement::at(annotation.anchor)
        + Rectangle::new([(0, -height), (width, 0)], WHITE.mix(0.7).filled())
        + Rectangle::new([(0, -height), (width, 0)], color.stroke_width(3));
    chart.draw_series(std::iter::once(frame))?;

    let font = (FONT, ANNOTATION_PX).into_font().color(&color);
    for (i, line) in annotation.lines.iter().enumerate() {
        let top = -height + BOX_PADDING_PX + i as i32 * line_height;
        let text = EmptyElement::at(annotation.anchor)
            + Text::new(line.clone(), (BOX_PADDING_PX, top), font.clone());
        chart.draw_series(std::iter::once(text))?;
    }
    Ok(())
}
