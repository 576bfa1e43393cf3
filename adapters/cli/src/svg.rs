//! Rendering backend that writes a frame as a standalone SVG document.

use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::{Context, Result};
use bugs_life_rendering::{CircleStyle, Color, Presentation, RenderingBackend, Viewport};

const STROKE_WIDTH: f32 = 1.5;

/// Writes every presented frame to the same file, replacing the previous one.
#[derive(Debug)]
pub(crate) struct SvgBackend {
    path: PathBuf,
    size: f32,
}

impl SvgBackend {
    pub(crate) fn new(path: PathBuf, size: f32) -> Self {
        Self { path, size }
    }
}

impl RenderingBackend for SvgBackend {
    fn present(&mut self, presentation: &Presentation) -> Result<()> {
        let document = render(presentation, self.size)?;
        fs::write(&self.path, document)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

fn render(presentation: &Presentation, size: f32) -> Result<String> {
    let scene = &presentation.scene;
    let viewport = Viewport::new(scene.half_width, size)?;
    let side = viewport.size();
    let mut out = String::new();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {side} {side}">"#
    )?;
    writeln!(out, "  <title>{}</title>", presentation.title)?;
    writeln!(
        out,
        r#"  <rect width="{side}" height="{side}" fill="{}"/>"#,
        hex(presentation.clear_color)
    )?;
    for circle in &scene.circles {
        let center = viewport.to_surface(circle.center);
        let radius = circle.radius * viewport.scale();
        let paint = match circle.style {
            CircleStyle::Filled => format!(r#"fill="{}""#, hex(circle.color)),
            CircleStyle::Outline => format!(
                r#"fill="none" stroke="{}" stroke-width="{STROKE_WIDTH}""#,
                hex(circle.color)
            ),
        };
        writeln!(
            out,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" {paint}/>"#,
            center.x, center.y, radius
        )?;
    }
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn hex(color: Color) -> String {
    let [red, green, blue] = color.to_rgb_u8();
    format!("#{red:02x}{green:02x}{blue:02x}")
}
