// File: crates/pulseline-render-skia/src/lib.rs
// Summary: Skia-backed Surface implementation plus a CPU raster helper that
// snapshots frames to PNG.

use anyhow::Result;
use pulseline_core::render::{LinearGradient, StrokeStyle, Surface};
use pulseline_core::types::Color;
use skia_safe as skia;

fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_shader(g: &LinearGradient) -> Option<skia::Shader> {
    let colors: Vec<skia::Color> = g.stops.iter().map(|s| to_skia_color(s.color)).collect();
    let positions: Vec<f32> = g.stops.iter().map(|s| s.offset as f32).collect();
    skia::gradient_shader::linear(
        (
            skia::Point::new(g.x0 as f32, g.y0 as f32),
            skia::Point::new(g.x1 as f32, g.y1 as f32),
        ),
        skia::gradient_shader::GradientShaderColors::Colors(&colors),
        Some(&positions[..]),
        skia::TileMode::Clamp,
        None,
        None,
    )
}

/// Canvas-shaped adapter over a Skia canvas. Holds the current path and the
/// sticky stroke/fill state, exactly like a 2D canvas context.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    path: skia::Path,
    stroke_style: StrokeStyle,
    fill_color: Color,
    line_width: f64,
    background: Option<Color>,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self {
            canvas,
            path: skia::Path::new(),
            stroke_style: StrokeStyle::Solid(Color::WHITE),
            fill_color: Color::WHITE,
            line_width: 1.0,
            background: None,
        }
    }

    /// Clears repaint a solid background instead of erasing to transparent.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    fn stroke_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.line_width as f32);
        match &self.stroke_style {
            StrokeStyle::Solid(color) => {
                paint.set_color(to_skia_color(*color));
            }
            StrokeStyle::Gradient(gradient) => {
                paint.set_shader(to_skia_shader(gradient));
            }
        }
        paint
    }
}

impl Surface for SkiaSurface<'_> {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let rect = skia::Rect::from_xywh(x as f32, y as f32, width as f32, height as f32);
        let mut paint = skia::Paint::default();
        match self.background {
            Some(bg) => {
                paint.set_color(to_skia_color(bg));
            }
            None => {
                paint.set_blend_mode(skia::BlendMode::Clear);
            }
        }
        self.canvas.draw_rect(rect, &paint);
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.path.cubic_to(
            (cp1x as f32, cp1y as f32),
            (cp2x as f32, cp2y as f32),
            (x as f32, y as f32),
        );
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let sweep = end_angle - start_angle;
        if (sweep.abs() - std::f64::consts::TAU).abs() < 1e-9 {
            self.path.add_circle((cx as f32, cy as f32), radius as f32, None);
        } else {
            let oval = skia::Rect::from_xywh(
                (cx - radius) as f32,
                (cy - radius) as f32,
                (radius * 2.0) as f32,
                (radius * 2.0) as f32,
            );
            self.path
                .arc_to(oval, start_angle.to_degrees() as f32, sweep.to_degrees() as f32, false);
        }
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.stroke_style = style;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn stroke(&mut self) {
        let paint = self.stroke_paint();
        self.canvas.draw_path(&self.path, &paint);
    }

    fn fill(&mut self) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(self.fill_color));
        self.canvas.draw_path(&self.path, &paint);
    }
}

/// CPU raster frame: a reusable n32 surface that snapshots to PNG bytes.
pub struct RasterFrame {
    surface: skia::Surface,
    background: Color,
}

impl RasterFrame {
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        Ok(Self { surface, background })
    }

    /// A fresh drawing adapter for this frame.
    pub fn surface(&mut self) -> SkiaSurface<'_> {
        SkiaSurface::new(self.surface.canvas()).with_background(self.background)
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
