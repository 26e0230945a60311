// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and rendering pipeline (Skia CPU raster, PNG, SVG and RGBA outputs).

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::annotation::{Annotation, HAlign, VAlign};
use crate::geometry::RectI32;
use crate::scale::PlotScales;
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, WIDTH, HEIGHT};
use crate::view::ViewState;
use crate::Axis;

const TICK_LEN: f32 = 6.0;
const MINOR_TICK_LEN: f32 = 3.0;
const TICK_FONT: f32 = 13.0;
const LABEL_FONT: f32 = 15.0;
const LEGEND_FONT: f32 = 13.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (ticks, axis labels, legend, annotations). Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// One legend row: swatch color and text.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            annotations: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_legend: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Legend rows for every labelled series, in insertion order.
    pub fn legend_entries(&self, theme: &Theme) -> Vec<LegendEntry> {
        self.series
            .iter()
            .filter_map(|s| {
                s.label.as_ref().map(|label| LegendEntry {
                    label: label.clone(),
                    color: s.color.unwrap_or_else(|| default_color(s, theme)),
                })
            })
            .collect()
    }

    /// Fit both axes to the data, padding Y by `y_margin` (fraction of the span).
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        let mut view = ViewState::from_chart(self);
        let pad = (view.y_max - view.y_min) * y_margin.max(0.0);
        view.y_min -= pad;
        view.y_max += pad;
        view.apply_to_chart(self);
    }

    /// Draw the whole chart onto any Skia canvas (raster or SVG).
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, shaper: &TextShaper) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let scales = PlotScales::new(&plot, &self.x_axis, &self.y_axis);

        draw_grid(canvas, &plot, &scales, &self.x_axis, &self.y_axis, theme);

        // Series are clipped to the plot area; areas first so lines stay on top.
        canvas.save();
        canvas.clip_rect(to_rect(&plot), None, true);
        for s in self.series.iter().filter(|s| s.series_type == SeriesType::StepArea) {
            draw_area_series(canvas, &scales, s, theme);
        }
        for s in self.series.iter().filter(|s| s.series_type != SeriesType::StepArea) {
            draw_line_series(canvas, &scales, s, theme);
        }
        canvas.restore();

        draw_axes(canvas, &plot, &scales, &self.x_axis, &self.y_axis, theme, opts.draw_labels.then_some(shaper));

        if opts.draw_labels {
            for a in &self.annotations {
                let (x, y) = scales.to_px(a.x, a.y);
                shaper.draw_aligned(canvas, &a.text, x, y, a.size, a.color.unwrap_or(theme.annotation), a.h_align, a.v_align);
            }
            if self.show_legend {
                draw_legend(canvas, &plot, &self.legend_entries(theme), theme, shaper);
            }
        }
    }

    fn render_raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {}x{}", opts.width, opts.height))?;
        let shaper = TextShaper::new();
        self.draw(surface.canvas(), opts, &shaper);
        Ok(surface)
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    /// Render to an SVG document in memory.
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let bounds = skia::Rect::from_iwh(opts.width, opts.height);
        let canvas = skia::svg::Canvas::new(bounds, None);
        let shaper = TextShaper::new();
        self.draw(&canvas, opts, &shaper);
        let data = canvas.end();
        if data.as_bytes().is_empty() {
            anyhow::bail!("SVG canvas produced no output");
        }
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart as a vector SVG file at `output_svg_path`.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts)?;
        write_output(output_svg_path.as_ref(), &bytes)
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_raster(opts)?;
        let (w, h) = (opts.width.max(1) as u32, opts.height.max(1) as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, stride))
    }
}

// ---- helpers ----------------------------------------------------------------

fn write_output(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn default_color(s: &Series, theme: &Theme) -> skia::Color {
    match s.series_type {
        SeriesType::StepArea => theme.area_fill,
        SeriesType::Line | SeriesType::Step => theme.line_stroke,
    }
}

fn to_path(points: &[(f64, f64)], scales: &PlotScales, close: bool) -> Option<skia::Path> {
    let (&first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to(scales.to_px(first.0, first.1));
    for &(x, y) in rest {
        path.line_to(scales.to_px(x, y));
    }
    if close {
        path.close();
    }
    Some(path)
}

fn draw_grid(canvas: &skia::Canvas, plot: &RectI32, scales: &PlotScales, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(0.6);
    paint.set_path_effect(skia::PathEffect::dash(&[1.0, 2.5], 0.0));

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    if x.grid {
        for v in x.major_ticks().into_iter().chain(x.minor_ticks()) {
            let px = scales.x.to_px(v);
            canvas.draw_line((px, t), (px, b), &paint);
        }
    }
    if y.grid {
        for v in y.major_ticks().into_iter().chain(y.minor_ticks()) {
            let py = scales.y.to_px(v);
            canvas.draw_line((l, py), (r, py), &paint);
        }
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: &RectI32,
    scales: &PlotScales,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.2);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // Left and bottom spines only
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let x_major = x.major_ticks();
    let y_major = y.major_ticks();
    for &v in &x_major {
        let px = scales.x.to_px(v);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick_paint);
    }
    for v in x.minor_ticks() {
        let px = scales.x.to_px(v);
        canvas.draw_line((px, b), (px, b + MINOR_TICK_LEN), &tick_paint);
    }
    for &v in &y_major {
        let py = scales.y.to_px(v);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick_paint);
    }
    for v in y.minor_ticks() {
        let py = scales.y.to_px(v);
        canvas.draw_line((l - MINOR_TICK_LEN, py), (l, py), &tick_paint);
    }

    let Some(shaper) = shaper else { return };
    for &v in &x_major {
        let px = scales.x.to_px(v);
        shaper.draw_aligned(canvas, &x.format_tick(v), px, b + TICK_LEN + 2.0, TICK_FONT, theme.axis_label, HAlign::Center, VAlign::Top);
    }
    for &v in &y_major {
        let py = scales.y.to_px(v);
        shaper.draw_aligned(canvas, &y.format_tick(v), l - TICK_LEN - 4.0, py, TICK_FONT, theme.axis_label, HAlign::Right, VAlign::Center);
    }

    shaper.draw_aligned(canvas, &x.label, (l + r) * 0.5, b + TICK_LEN + TICK_FONT + 12.0, LABEL_FONT, theme.axis_label, HAlign::Center, VAlign::Top);
    shaper.draw_vertical(canvas, &y.label, l - 56.0, (t + b) * 0.5, LABEL_FONT, theme.axis_label);
}

fn draw_line_series(canvas: &skia::Canvas, scales: &PlotScales, series: &Series, theme: &Theme) {
    if series.data_xy.len() < 2 {
        return;
    }
    let Some(path) = to_path(&series.outline(), scales, false) else { return };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_stroke_join(skia::paint::Join::Miter);
    stroke.set_color(series.color.unwrap_or_else(|| default_color(series, theme)));

    canvas.draw_path(&path, &stroke);
}

fn draw_area_series(canvas: &skia::Canvas, scales: &PlotScales, series: &Series, theme: &Theme) {
    if series.data_xy.is_empty() {
        return;
    }
    let Some(path) = to_path(&series.band_polygon(), scales, true) else { return };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(series.color.unwrap_or_else(|| default_color(series, theme)));

    canvas.draw_path(&path, &fill);
}

fn draw_legend(canvas: &skia::Canvas, plot: &RectI32, entries: &[LegendEntry], theme: &Theme, shaper: &TextShaper) {
    if entries.is_empty() {
        return;
    }
    let pad = 8.0f32;
    let swatch = 14.0f32;
    let row_h = swatch + 6.0;
    let text_w = entries
        .iter()
        .map(|e| shaper.measure_width(&e.label, LEGEND_FONT))
        .fold(0.0f32, f32::max);
    let w = pad * 3.0 + swatch * 1.4 + text_w;
    let h = pad * 2.0 + row_h * entries.len() as f32 - 6.0;
    let (x0, y0) = (plot.left as f32 + 12.0, plot.top as f32 + 8.0);
    let frame = skia::Rect::from_xywh(x0, y0, w, h);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.legend_background);
    canvas.draw_round_rect(frame, 4.0, 4.0, &bg);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(frame, 4.0, 4.0, &border);

    let mut swatch_paint = skia::Paint::default();
    swatch_paint.set_anti_alias(true);
    for (i, e) in entries.iter().enumerate() {
        let top = y0 + pad + row_h * i as f32;
        swatch_paint.set_color(e.color);
        canvas.draw_rect(skia::Rect::from_xywh(x0 + pad, top, swatch * 1.4, swatch), &swatch_paint);
        shaper.draw_aligned(canvas, &e.label, x0 + pad * 2.0 + swatch * 1.4, top + swatch * 0.5, LEGEND_FONT, theme.axis_label, HAlign::Left, VAlign::Center);
    }
}
