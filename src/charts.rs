use crate::constants::*;
use crate::dom;
use crate::layout;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One 2D canvas plus its context.
pub struct ChartCanvas {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl ChartCanvas {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        dom::sync_canvas_backing_size(&canvas);
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&self) {
        let s = self.size();
        self.ctx.clear_rect(0.0, 0.0, s.x as f64, s.y as f64);
    }

    fn polygon(&self, points: &[Vec2]) {
        let ctx = &self.ctx;
        ctx.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(p.x as f64, p.y as f64);
            } else {
                ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        ctx.close_path();
    }

    fn label_font(&self, dpr: f64) {
        self.ctx
            .set_font(&format!("500 {:.0}px system-ui, sans-serif", LABEL_FONT_PX * dpr));
        self.ctx.set_fill_style_str(LABEL_COLOR);
    }

    /// Health radar: grid rings, spokes, axis labels and the value polygon.
    pub fn draw_radar(&self, labels: &[&str], values: &[f64], full_mark: f64) {
        self.clear();
        let count = labels.len();
        if count < 3 {
            return;
        }
        let ctx = &self.ctx;
        let dpr = dom::device_pixel_ratio();
        let size = self.size();
        let center = size * 0.5;
        let outer = size.min_element() * 0.5 * RADAR_OUTER_RADIUS;

        ctx.set_stroke_style_str(RADAR_STROKE);
        ctx.set_line_width(1.0);
        ctx.set_global_alpha(RADAR_GRID_ALPHA);
        for ring in 1..=RADAR_GRID_RINGS {
            let frac = ring as f32 / RADAR_GRID_RINGS as f32;
            self.polygon(&layout::radar_ring(center, outer, count, frac));
            ctx.stroke();
        }
        for i in 0..count {
            let tip = center + layout::radar_direction(i, count) * outer;
            ctx.begin_path();
            ctx.move_to(center.x as f64, center.y as f64);
            ctx.line_to(tip.x as f64, tip.y as f64);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);

        self.label_font(dpr);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for (i, label) in labels.iter().enumerate() {
            let at = center + layout::radar_direction(i, count) * outer * RADAR_LABEL_PAD;
            _ = ctx.fill_text(label, at.x as f64, at.y as f64);
        }

        let points: Vec<Vec2> = values
            .iter()
            .enumerate()
            .map(|(i, v)| layout::radar_point(center, outer, i, count, *v, full_mark))
            .collect();
        self.polygon(&points);
        ctx.set_fill_style_str(RADAR_STROKE);
        ctx.set_global_alpha(RADAR_FILL_ALPHA);
        ctx.fill();
        ctx.set_global_alpha(1.0);
        ctx.set_line_width(RADAR_LINE_WIDTH * dpr);
        ctx.stroke();
    }

    /// Flavor bars: one horizontal bar per axis on a fixed [0, 10] domain.
    pub fn draw_bars(&self, labels: &[&str], values: &[f64]) {
        self.clear();
        let ctx = &self.ctx;
        let dpr = dom::device_pixel_ratio() as f32;
        let size = self.size();
        let label_w = BAR_LABEL_WIDTH * dpr;
        let track = (size.x - label_w - BAR_RIGHT_MARGIN * dpr).max(0.0);
        let count = labels.len();

        self.label_font(dpr as f64);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        for (i, label) in labels.iter().enumerate() {
            let (top, thickness) = layout::bar_row(i, count, size.y, BAR_FILL_RATIO);
            let mid = top + thickness * 0.5;
            _ = ctx.fill_text(label, (label_w - 4.0 * dpr) as f64, mid as f64);
        }

        for (i, v) in values.iter().enumerate() {
            let (top, thickness) = layout::bar_row(i, count, size.y, BAR_FILL_RATIO);
            let len = layout::bar_length(*v, FLAVOR_DOMAIN_MAX, track);
            ctx.set_fill_style_str(FLAVOR_BAR_COLORS[i % FLAVOR_BAR_COLORS.len()]);
            ctx.fill_rect(label_w as f64, top as f64, len as f64, thickness as f64);
        }
    }
}
