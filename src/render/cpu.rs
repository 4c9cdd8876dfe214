use vello_cpu::kurbo::{BezPath, Point as CpuPoint, Rect as CpuRect};
use vello_cpu::peniko::Color;

use crate::document::attrs::Tone;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{ReticleError, ReticleResult};
use crate::render::frame::CursorFrame;

const CIRCLE_SEGMENTS: usize = 96;
const GLYPH_MARK_SIZE: f64 = 2.0;

/// Rasterized cursor frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Output surface for [`rasterize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOpts {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Opaque page color behind the cursor.
    pub background: Rgba8,
}

/// Draw one cursor frame over a flat page.
///
/// The backdrop disc, the outline ring on its edge and the label glyph anchors around it all
/// use the tone color at the reticle opacity. The dot is drawn last with its own opacity.
/// Hidden frames produce only the background.
#[tracing::instrument(skip(frame), fields(visible = frame.visible))]
pub fn rasterize(frame: &CursorFrame, opts: &RasterOpts) -> ReticleResult<FrameRGBA> {
    let width: u16 = opts
        .width
        .try_into()
        .map_err(|_| ReticleError::render("raster width exceeds u16"))?;
    let height: u16 = opts
        .height
        .try_into()
        .map_err(|_| ReticleError::render("raster height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(ReticleError::render("raster size must be non-zero"));
    }

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    let mut ctx = vello_cpu::RenderContext::new(width, height);

    let bg = opts.background;
    ctx.set_paint(Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    ctx.fill_rect(&CpuRect::new(0.0, 0.0, f64::from(width), f64::from(height)));

    if frame.visible {
        draw_cursor(&mut ctx, frame);
    }

    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: u32::from(width),
        height: u32::from(height),
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn draw_cursor(ctx: &mut vello_cpu::RenderContext, frame: &CursorFrame) {
    let ink = tone_color(frame.reticle.tone);
    let reticle = &frame.reticle;
    let radius = reticle.radius();
    // Backdrop, outline and label fade together.
    let reticle_ink = ink.with_opacity(reticle.opacity);

    if radius > 0.0 {
        paint(ctx, reticle_ink);
        ctx.fill_path(&circle_path(reticle.center, radius, false));

        let inner = (radius - reticle.outline_width.max(0.0)).max(0.0);
        let mut ring = circle_path(reticle.center, radius, false);
        ring.extend(circle_path(reticle.center, inner, true).elements().iter().copied());
        ctx.fill_path(&ring);
    }

    if let Some(label) = &frame.label {
        let track = radius + 2.0 * GLYPH_MARK_SIZE;
        paint(ctx, reticle_ink);
        for glyph in label.glyphs.iter().filter(|g| !g.ch.is_whitespace()) {
            let a = (glyph.angle_deg + label.rotation_deg - 90.0).to_radians();
            let at = Point::new(
                reticle.center.x + track * a.cos(),
                reticle.center.y + track * a.sin(),
            );
            ctx.fill_rect(&CpuRect::new(
                at.x - 0.5 * GLYPH_MARK_SIZE,
                at.y - 0.5 * GLYPH_MARK_SIZE,
                at.x + 0.5 * GLYPH_MARK_SIZE,
                at.y + 0.5 * GLYPH_MARK_SIZE,
            ));
        }
    }

    let dot = &frame.dot;
    let dot_radius = 0.5 * dot.size * dot.scale;
    if dot_radius > 0.0 {
        paint(ctx, ink.with_opacity(dot.opacity));
        ctx.fill_path(&circle_path(dot.center, dot_radius, false));
    }
}

fn tone_color(tone: Tone) -> Rgba8 {
    match tone {
        Tone::Light => Rgba8::new(245, 245, 245, 255),
        Tone::Dark => Rgba8::new(17, 17, 17, 255),
    }
}

fn paint(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(Color::from_rgba8(c.r, c.g, c.b, c.a));
}

// Polygonal circle. The reversed winding lets an inner circle punch a hole under non-zero fill.
fn circle_path(center: Point, radius: f64, reverse: bool) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..CIRCLE_SEGMENTS {
        let step = if reverse { CIRCLE_SEGMENTS - i } else { i };
        let a = std::f64::consts::TAU * (step as f64) / (CIRCLE_SEGMENTS as f64);
        let p = CpuPoint::new(center.x + radius * a.cos(), center.y + radius * a.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
