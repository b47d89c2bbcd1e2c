// File: crates/tardy-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::{ticks, Tick, X_TICKS, Y_TICKS};
use crate::error::ChartError;
use crate::interaction::HoverState;
use crate::layout::{layout_bars, Bar};
use crate::scale::{extent, LinearScale};
use crate::task::TaskAgePoint;
use crate::theme::Theme;
use crate::types::Viewport;

pub struct RenderOptions {
    pub viewport: Viewport,
    pub theme: Theme,
    /// Tick labels use system fonts; tests turn this off for determinism.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// The chart over one immutable point sequence.
pub struct TaskAgeChart {
    pub points: Vec<TaskAgePoint>,
}

impl TaskAgeChart {
    pub fn new(points: Vec<TaskAgePoint>) -> Self {
        Self { points }
    }

    /// Horizontal scale over [min(id), max(id)] -> [0, inner_width] and
    /// vertical scale over [min(days), max(days)] -> [inner_height, 0].
    /// Empty input falls back to a [0, 1] domain on both axes.
    pub fn scales(&self, viewport: &Viewport) -> (LinearScale, LinearScale) {
        let xd = extent(self.points.iter().map(|p| p.id as f64)).unwrap_or((0.0, 1.0));
        let yd = extent(self.points.iter().map(|p| p.days as f64)).unwrap_or((0.0, 1.0));
        let sx = LinearScale::new(xd, (0.0, viewport.inner_width() as f64));
        let sy = LinearScale::new(yd, (viewport.inner_height() as f64, 0.0));
        (sx, sy)
    }

    /// Bar geometry in plot space.
    pub fn bars(&self, viewport: &Viewport) -> Vec<Bar> {
        let (sx, sy) = self.scales(viewport);
        layout_bars(&self.points, &sx, &sy)
    }

    /// Render to a tightly packed RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
        self.render_to_rgba8_with(opts, None)
    }

    /// RGBA8 render with live hover state applied to the bars.
    pub fn render_to_rgba8_with(
        &self,
        opts: &RenderOptions,
        hover: Option<&HoverState>,
    ) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
        let (w, h) = (opts.viewport.width, opts.viewport.height);
        let mut surface =
            skia::surfaces::raster_n32_premul((w, h)).ok_or(ChartError::Surface)?;
        self.draw(surface.canvas(), opts, hover);

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Surface);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let (w, h) = (opts.viewport.width, opts.viewport.height);
        let mut surface =
            skia::surfaces::raster_n32_premul((w, h)).ok_or(ChartError::Surface)?;
        self.draw(surface.canvas(), opts, None);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, hover: Option<&HoverState>) {
        let vp = &opts.viewport;
        let theme = &opts.theme;
        canvas.clear(theme.background);

        // Plot rect in absolute pixels
        let l = vp.margin.left as f32;
        let t = vp.margin.top as f32;
        let r = (vp.width - vp.margin.right) as f32;
        let b = (vp.height - vp.margin.bottom) as f32;

        let (sx, sy) = self.scales(vp);
        let x_ticks = ticks(&sx, X_TICKS);
        let y_ticks = ticks(&sy, Y_TICKS);

        draw_grid(canvas, theme, l, t, r, b, &x_ticks, &y_ticks);
        draw_axes(canvas, theme, opts.draw_labels, l, t, r, b, &x_ticks, &y_ticks);
        draw_bars(canvas, theme, l, t, &self.bars(vp), hover);
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for tk in x_ticks {
        let x = l + tk.px as f32;
        canvas.draw_line((x, t), (x, b), &paint);
    }
    for tk in y_ticks {
        let y = t + tk.px as f32;
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    theme: &Theme,
    draw_labels: bool,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // Bottom axis along inner_height, left axis at the plot origin
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let mut label_paint = skia::Paint::default();
    label_paint.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(12.0);

    for tk in x_ticks {
        let x = l + tk.px as f32;
        canvas.draw_line((x, b), (x, b + 5.0), &tick_paint);
        if draw_labels {
            canvas.draw_str(&tk.label, (x - 8.0, b + 18.0), &font, &label_paint);
        }
    }
    for tk in y_ticks {
        let y = t + tk.px as f32;
        canvas.draw_line((l - 5.0, y), (l, y), &tick_paint);
        if draw_labels {
            canvas.draw_str(&tk.label, (l - 32.0, y + 4.0), &font, &label_paint);
        }
    }
}

fn draw_bars(
    canvas: &skia::Canvas,
    theme: &Theme,
    l: f32,
    t: f32,
    bars: &[Bar],
    hover: Option<&HoverState>,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (i, bar) in bars.iter().enumerate() {
        let (w, opacity) = match hover {
            Some(h) => (h.width_of(i, bar), h.opacity_of(i)),
            None => (bar.width, 1.0),
        };
        fill.set_color(theme.bar_fill);
        fill.set_alpha_f(opacity as f32);
        let rect = skia::Rect::from_ltrb(
            l + bar.x as f32,
            t + bar.y as f32,
            l + (bar.x + w) as f32,
            t + (bar.y + bar.height) as f32,
        );
        canvas.draw_rect(rect, &fill);
    }
}
