//! Raster visualization of a fit: grid colored by log-error, the outline,
//! and the selected center.
//!
//! Drawing happens on a [`PlotCanvas`] owned by the caller; nothing here
//! touches global state, so plots can be produced from any thread.

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut,
    draw_line_segment_mut,
};
use imageproc::rect::Rect;

use crate::config::PlotConfig;
use crate::outline::Outline;
use crate::search::FitResult;
use crate::C64;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const OUTLINE_COLOR: Rgb<u8> = Rgb([31, 119, 180]);
const CENTER_COLOR: Rgb<u8> = Rgb([255, 127, 14]);
const POINT_EDGE: Rgb<u8> = Rgb([150, 150, 150]);
const FRAME: Rgb<u8> = Rgb([0, 0, 0]);

/// Width reserved on the right for the color bar (gap + bar).
const COLORBAR_BAND_PX: u32 = 40;
const COLORBAR_WIDTH_PX: u32 = 16;

/// Copy of `config` with margin and marker sizes limited to what fits the
/// image.
fn clamp_to_image(config: &PlotConfig) -> PlotConfig {
    let max_px = config.width.max(config.height).min(i32::MAX as u32) as i32;
    PlotConfig {
        margin_px: config.margin_px.min(config.width.min(config.height) / 2),
        point_radius_px: config.point_radius_px.clamp(1, max_px.max(1)),
        center_half_size_px: config.center_half_size_px.clamp(1, max_px.max(1)),
        ..config.clone()
    }
}

/// Reversed gray ramp: `vmin` and below is white, `vmax` and above black.
/// NaN maps to black.
pub fn error_gray(log_error: f64, [vmin, vmax]: [f64; 2]) -> u8 {
    let span = vmax - vmin;
    let t = if log_error.is_nan() {
        1.0
    } else if span > 0.0 {
        ((log_error - vmin) / span).clamp(0.0, 1.0)
    } else if log_error > vmin {
        1.0
    } else {
        0.0
    };
    ((1.0 - t) * 255.0).round() as u8
}

/// Image plus an equal-aspect world→pixel transform.
pub struct PlotCanvas {
    image: RgbImage,
    config: PlotConfig,
    /// World point drawn at `pixel_origin`.
    world_origin: [f64; 2],
    /// Pixel position of `world_origin` (y grows downward).
    pixel_origin: [f64; 2],
    /// Pixels per world unit, same on both axes.
    scale: f64,
}

impl PlotCanvas {
    /// Blank canvas framing the world rectangle `[xmin, xmax] × [ymin, ymax]`.
    ///
    /// Pixel sizes in `config` are clamped to the image dimensions.
    pub fn new(config: &PlotConfig, [xmin, xmax, ymin, ymax]: [f64; 4]) -> Self {
        let config = &clamp_to_image(config);
        let margin = config.margin_px as f64;
        let area_w = (config.width.saturating_sub(COLORBAR_BAND_PX) as f64 - 2.0 * margin).max(1.0);
        let area_h = (config.height as f64 - 2.0 * margin).max(1.0);

        let dx = xmax - xmin;
        let dy = ymax - ymin;
        let mut scale = (area_w / dx).min(area_h / dy);
        if !scale.is_finite() || scale <= 0.0 {
            scale = 1.0;
        }
        let used_w = if dx.is_finite() { dx * scale } else { 0.0 };
        let used_h = if dy.is_finite() { dy * scale } else { 0.0 };

        Self {
            image: RgbImage::from_pixel(config.width, config.height, BACKGROUND),
            config: config.clone(),
            world_origin: [xmin, ymax],
            pixel_origin: [margin + 0.5 * (area_w - used_w), margin + 0.5 * (area_h - used_h)],
            scale,
        }
    }

    /// Canvas framing the outline and the fit's grid.
    pub fn for_fit(config: &PlotConfig, outline: &Outline, result: &FitResult) -> Self {
        let bounds = outline
            .points()
            .iter()
            .chain(&result.grid)
            .chain(std::iter::once(&result.center))
            .filter(|z| z.re.is_finite() && z.im.is_finite())
            .fold(
                [
                    f64::INFINITY,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    f64::NEG_INFINITY,
                ],
                |[x0, x1, y0, y1], z| [x0.min(z.re), x1.max(z.re), y0.min(z.im), y1.max(z.im)],
            );
        Self::new(config, bounds)
    }

    /// Pixel coordinates of a world point.
    pub fn to_pixel(&self, z: C64) -> (f32, f32) {
        let px = self.pixel_origin[0] + (z.re - self.world_origin[0]) * self.scale;
        let py = self.pixel_origin[1] + (self.world_origin[1] - z.im) * self.scale;
        (px as f32, py as f32)
    }

    fn to_pixel_i32(&self, z: C64) -> (i32, i32) {
        let (x, y) = self.to_pixel(z);
        (x.round() as i32, y.round() as i32)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Write the canvas as PNG regardless of the file extension.
    pub fn save_png(&self, path: &Path) -> image::ImageResult<()> {
        self.image.save_with_format(path, image::ImageFormat::Png)
    }

    /// Grid candidates as discs shaded by `log10(error)`.
    pub fn draw_grid(&mut self, grid: &[C64], errors: &[f64]) {
        let r = self.config.point_radius_px.max(1);
        let range = self.config.log_error_range;
        for (&z, &e) in grid.iter().zip(errors) {
            let c = self.to_pixel_i32(z);
            let g = error_gray(e.log10(), range);
            draw_filled_circle_mut(&mut self.image, c, r, Rgb([g, g, g]));
            draw_hollow_circle_mut(&mut self.image, c, r, POINT_EDGE);
        }
    }

    /// Outline as a closed polyline.
    pub fn draw_outline(&mut self, outline: &[C64]) {
        let Some(&first) = outline.first() else {
            return;
        };
        let mut prev = self.to_pixel(first);
        for &z in outline[1..].iter().chain(std::iter::once(&first)) {
            let p = self.to_pixel(z);
            draw_line_segment_mut(&mut self.image, prev, p, OUTLINE_COLOR);
            prev = p;
        }
    }

    /// Filled square on the selected center.
    pub fn draw_center(&mut self, center: C64) {
        let h = self.config.center_half_size_px.max(1);
        let (cx, cy) = self.to_pixel_i32(center);
        let side = h.saturating_mul(2).saturating_add(1) as u32;
        let rect = Rect::at(cx.saturating_sub(h), cy.saturating_sub(h)).of_size(side, side);
        draw_filled_rect_mut(&mut self.image, rect, CENTER_COLOR);
    }

    /// Vertical color bar along the right edge, `vmax` at the top.
    pub fn draw_colorbar(&mut self) {
        let (w, h) = self.image.dimensions();
        let margin = self.config.margin_px;
        if w < margin.saturating_add(COLORBAR_BAND_PX)
            || h <= margin.saturating_mul(2).saturating_add(1)
        {
            return;
        }
        let x0 = w - margin - COLORBAR_WIDTH_PX;
        let top = margin;
        let bar_h = h - 2 * margin;
        let [vmin, vmax] = self.config.log_error_range;

        for row in 0..bar_h {
            let t = 1.0 - row as f64 / (bar_h - 1).max(1) as f64;
            let g = error_gray(vmin + t * (vmax - vmin), self.config.log_error_range);
            for col in 0..COLORBAR_WIDTH_PX {
                self.image.put_pixel(x0 + col, top + row, Rgb([g, g, g]));
            }
        }
        let frame = Rect::at(x0 as i32, top as i32).of_size(COLORBAR_WIDTH_PX, bar_h);
        draw_hollow_rect_mut(&mut self.image, frame, FRAME);
    }
}

/// Draw the complete fit figure onto `canvas`.
pub fn render_fit(canvas: &mut PlotCanvas, outline: &Outline, result: &FitResult) {
    canvas.draw_grid(&result.grid, &result.grid_errors);
    canvas.draw_outline(outline.points());
    canvas.draw_center(result.center);
    canvas.draw_colorbar();
}

/// Fresh canvas sized by `config` with the fit drawn on it.
pub fn plot_fit(config: &PlotConfig, outline: &Outline, result: &FitResult) -> PlotCanvas {
    let mut canvas = PlotCanvas::for_fit(config, outline, result);
    render_fit(&mut canvas, outline, result);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::analyze;
    use crate::test_utils::circle;

    #[test]
    fn gray_ramp_is_reversed_and_clamped() {
        let range = [-3.0, 2.0];
        assert_eq!(error_gray(-3.0, range), 255);
        assert_eq!(error_gray(-10.0, range), 255);
        assert_eq!(error_gray(f64::NEG_INFINITY, range), 255);
        assert_eq!(error_gray(2.0, range), 0);
        assert_eq!(error_gray(7.0, range), 0);
        assert_eq!(error_gray(f64::NAN, range), 0);
        assert_eq!(error_gray(-0.5, range), 128);
    }

    #[test]
    fn transform_keeps_aspect_and_flips_y() {
        let config = PlotConfig::default();
        let canvas = PlotCanvas::new(&config, [0.0, 4.0, 0.0, 1.0]);
        let (x0, y0) = canvas.to_pixel(C64::new(0.0, 0.0));
        let (x1, y1) = canvas.to_pixel(C64::new(4.0, 1.0));
        assert!(x1 > x0);
        assert!(y1 < y0, "y axis must point up");
        let sx = (x1 - x0) / 4.0;
        let sy = y0 - y1;
        assert!((sx - sy).abs() < 1e-3);
        assert!(x0 >= config.margin_px as f32);
        assert!(x1 <= (config.width - COLORBAR_BAND_PX - config.margin_px) as f32 + 0.5);
    }

    #[test]
    fn degenerate_bounds_do_not_panic() {
        let config = PlotConfig::default();
        let canvas = PlotCanvas::new(&config, [1.0, 1.0, 2.0, 2.0]);
        let (x, y) = canvas.to_pixel(C64::new(1.0, 2.0));
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn render_marks_center_outline_and_colorbar() {
        let pts = circle(C64::new(0.0, 0.0), 1.0, 120);
        let outline = Outline::new(pts).unwrap();
        let result = analyze(outline.points().to_vec(), 12).unwrap();
        let config = PlotConfig::default();
        let canvas = plot_fit(&config, &outline, &result);
        let img = canvas.image();
        assert_eq!(img.dimensions(), (config.width, config.height));

        let (cx, cy) = canvas.to_pixel(result.center);
        assert_eq!(
            *img.get_pixel(cx.round() as u32, cy.round() as u32),
            CENTER_COLOR
        );

        let (ox, oy) = canvas.to_pixel(outline.points()[0]);
        let near_outline = (-1..=1).any(|dy: i32| {
            (-1..=1).any(|dx: i32| {
                let x = (ox as i32 + dx) as u32;
                let y = (oy as i32 + dy) as u32;
                *img.get_pixel(x, y) == OUTLINE_COLOR
            })
        });
        assert!(near_outline, "no outline pixel near the first vertex");

        let bar_x = config.width - config.margin_px - COLORBAR_WIDTH_PX / 2;
        let top = img.get_pixel(bar_x, config.margin_px + 2)[0];
        let bottom = img.get_pixel(bar_x, config.height - config.margin_px - 3)[0];
        assert!(top < 10, "top of color bar should be dark, got {}", top);
        assert!(bottom > 245, "bottom of color bar should be light, got {}", bottom);
    }

    #[test]
    fn oversized_pixel_settings_are_clamped() {
        let config = PlotConfig {
            width: 64,
            height: 48,
            margin_px: u32::MAX,
            point_radius_px: i32::MAX,
            center_half_size_px: i32::MAX,
            ..Default::default()
        };
        let clamped = clamp_to_image(&config);
        assert_eq!(clamped.margin_px, 24);
        assert_eq!(clamped.point_radius_px, 64);
        assert_eq!(clamped.center_half_size_px, 64);

        let outline = Outline::new(circle(C64::new(0.0, 0.0), 1.0, 40)).unwrap();
        let result = analyze(outline.points().to_vec(), 8).unwrap();
        let canvas = plot_fit(&config, &outline, &result);
        assert_eq!(canvas.image().dimensions(), (64, 48));
    }

    #[test]
    fn canvas_saves_png() {
        let outline = Outline::new(circle(C64::new(0.0, 0.0), 1.0, 40)).unwrap();
        let result = analyze(outline.points().to_vec(), 8).unwrap();
        let canvas = plot_fit(&PlotConfig::default(), &outline, &result);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fit.png");
        canvas.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), canvas.image().dimensions());
    }
}
