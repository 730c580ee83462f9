//! Static renderer: draw a [`ChartSpec`] to **SVG** or **PNG**.
//!
//! - Category (date) labels on X, the spec's shared value domain on Y
//! - Shared axis labelled on the left; dedicated axes labelled on the right, tinted and named
//! - Benchmark markers as thin horizontal lines in the series color
//! - The slider zoom windows of the spec are applied to the drawn ranges

use crate::chart::{AxisPosition, ChartSpec, Color as SpecColor, ZoomDimension, ZoomKind};
use anyhow::{Result, anyhow};
use num_format::{Locale, ToFormattedString};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

const MARGIN: u32 = 16;
const LABEL_AREA_PX: u32 = 60;
const MAX_X_LABELS: usize = 12;

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `de`, `fr`, `es`, `it`, `pt`, `nl`. Defaults to
/// English.
fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

#[inline]
fn rgb(c: SpecColor) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Draw `spec` to `out_path`; `.svg` selects SVG output, anything else PNG.
pub fn plot_spec<P: AsRef<Path>>(
    spec: &ChartSpec,
    out_path: P,
    width: u32,
    height: u32,
    locale_tag: &str,
) -> Result<()> {
    if spec.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    if spec.axes.is_empty() {
        return Err(anyhow!("chart spec has no value axis"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let num_locale = map_locale(locale_tag);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_spec(root, spec, num_locale)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_spec(root, spec, num_locale)?;
    }
    log::info!("wrote chart to {}", out_path.display());
    Ok(())
}

/// Visible `[lo, hi]` of one dimension after applying the spec's slider window.
fn visible_range(spec: &ChartSpec, dimension: ZoomDimension, lo: f64, hi: f64) -> (f64, f64) {
    spec.zoom
        .iter()
        .find(|z| z.kind == ZoomKind::Slider && z.dimension == dimension)
        .map(|z| z.window(lo, hi))
        .unwrap_or((lo, hi))
}

fn draw_spec<DB>(root: DrawingArea<DB, Shift>, spec: &ChartSpec, num_locale: &Locale) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let n = spec.categories.len();
    let (first, last) = visible_range(spec, ZoomDimension::X, 0.0, (n - 1) as f64);
    let (first, last) = (first.floor(), last.ceil());
    let (x_lo, x_hi) = (first - 0.5, last + 0.5);

    // All axes share one domain; the first one is representative.
    let domain = &spec.axes[0];
    let (y_lo, y_hi) = visible_range(spec, ZoomDimension::Y, domain.min, domain.max);
    let y_label_count = (((y_hi - y_lo) / domain.tick_interval).round() as usize + 1).max(2);

    let left_axis = spec.axes.iter().any(|a| a.position == AxisPosition::Left);
    let right_axes: Vec<_> = spec
        .axes
        .iter()
        .filter(|a| a.position == AxisPosition::Right)
        .collect();
    let right_px = right_axes
        .iter()
        .map(|a| LABEL_AREA_PX + a.offset)
        .max()
        .unwrap_or(0);

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(MARGIN)
        .caption(&spec.title, (FontFamily::SansSerif, 22))
        .set_label_area_size(LabelAreaPosition::Bottom, 56);
    if left_axis {
        builder.set_label_area_size(LabelAreaPosition::Left, LABEL_AREA_PX);
    }
    if right_px > 0 {
        builder.set_label_area_size(LabelAreaPosition::Right, right_px);
    }
    let mut chart = builder
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(|e| anyhow!("{:?}", e))?
        .set_secondary_coord(x_lo..x_hi, y_lo..y_hi);

    let categories = &spec.categories;
    let x_label_fmt = |x: &f64| {
        let i = x.round();
        if (x - i).abs() < 1e-6 && i >= 0.0 {
            categories.get(i as usize).cloned().unwrap_or_default()
        } else {
            String::new()
        }
    };
    let y_label_fmt = |v: &f64| (v.round() as i64).to_formatted_string(num_locale);
    let x_label_count = ((last - first) as usize + 1).min(MAX_X_LABELS);

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(if left_axis { "Recovery (%)" } else { "" })
        .x_labels(x_label_count)
        .y_labels(y_label_count)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    if !right_axes.is_empty() {
        // Dedicated axes share the domain, so one right-hand scale serves them all.
        let names: Vec<&str> = right_axes.iter().filter_map(|a| a.name.as_deref()).collect();
        let tint = match right_axes.as_slice() {
            [only] => only.color_hint.map(rgb).unwrap_or(BLACK),
            _ => BLACK,
        };
        chart
            .configure_secondary_axes()
            .y_desc(names.join(" / "))
            .y_labels(y_label_count)
            .y_label_formatter(&y_label_fmt)
            .label_style((FontFamily::SansSerif, 12))
            .axis_desc_style((FontFamily::SansSerif, 14).into_font().color(&tint))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    for s in &spec.series {
        let color = rgb(s.color);
        let points: Vec<(f64, f64)> = s
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .filter(|(x, _)| *x >= first && *x <= last)
            .collect();

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| anyhow!("{:?}", e))?
            .label(s.name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2))
            });

        if let Some(b) = s.benchmark_line {
            let marker = color.mix(0.6);
            chart
                .draw_series(LineSeries::new(vec![(x_lo, b), (x_hi, b)], marker.stroke_width(1)))
                .map_err(|e| anyhow!("{:?}", e))?
                .label(format!("Benchmark {}", b))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], marker.stroke_width(1))
                });
        }
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 12))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
