use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::application::ports::{ChartRenderError, ChartRenderer};
use crate::domain::{BarSeries, ChartSet};

use super::bitmap_text::{GLYPH_SIZE, draw_text, fitting_chars};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([160, 160, 160]);
const TEXT: Rgb<u8> = Rgb([40, 40, 40]);
const PANEL_COLORS: [Rgb<u8>; 4] = [
    Rgb([70, 130, 180]),
    Rgb([60, 179, 113]),
    Rgb([238, 130, 238]),
    Rgb([255, 165, 0]),
];
const MARGIN: u32 = 32;
const LABEL_GAP: u32 = 4;
const BAR_GAP: u32 = 4;

/// Draws the four chart panels as a 2x2 grid of bar charts into a PNG file.
///
/// Each panel carries its title above the plot, the largest count at the top
/// of the value axis and one category label under each bar, clipped to the
/// bar's slot.
pub struct PngChartRenderer {
    width: u32,
    height: u32,
}

impl PngChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(4 * MARGIN),
            height: height.max(4 * MARGIN),
        }
    }

    pub fn draw(&self, charts: &ChartSet) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        let panel_width = self.width / 2;
        let panel_height = self.height / 2;

        for (slot, series) in charts.panels().into_iter().enumerate() {
            let slot = slot as u32;
            let area = Rect {
                x: (slot % 2) * panel_width + MARGIN,
                y: (slot / 2) * panel_height + MARGIN,
                width: panel_width - 2 * MARGIN,
                height: panel_height - 2 * MARGIN,
            };
            draw_panel(&mut canvas, &area, series, PANEL_COLORS[slot as usize]);
        }

        canvas
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&self, charts: &ChartSet, destination: &Path) -> Result<(), ChartRenderError> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let canvas = self.draw(charts);
        canvas
            .save_with_format(destination, ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => ChartRenderError::Io(io),
                other => ChartRenderError::EncodingFailed(other.to_string()),
            })?;

        tracing::info!(
            path = %destination.display(),
            width = self.width,
            height = self.height,
            "Chart rendered"
        );
        Ok(())
    }
}

struct Rect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

fn title_top() -> u32 {
    (MARGIN - GLYPH_SIZE) / 2
}

fn draw_panel(canvas: &mut RgbImage, area: &Rect, series: &BarSeries, color: Rgb<u8>) {
    draw_frame(canvas, area);
    draw_text(
        canvas,
        area.x,
        area.y - MARGIN + title_top(),
        &series.title,
        fitting_chars(area.width + MARGIN),
        TEXT,
    );

    let max = series.max_count();
    if series.bars.is_empty() || max == 0 {
        return;
    }

    let max_label = max.to_string();
    let axis_chars = fitting_chars(MARGIN - LABEL_GAP);
    let axis_width = max_label.len().min(axis_chars) as u32 * GLYPH_SIZE;
    draw_text(
        canvas,
        area.x - LABEL_GAP - axis_width,
        area.y,
        &max_label,
        axis_chars,
        TEXT,
    );

    let count = series.bars.len() as u32;
    let slot_width = (area.width / count).max(1);
    let bar_width = slot_width.saturating_sub(BAR_GAP).max(1);
    let label_chars = fitting_chars(slot_width);

    for (i, (label, value)) in series.bars.iter().enumerate() {
        let bar_height = ((*value as u64 * area.height as u64) / max as u64) as u32;
        let bar = Rect {
            x: area.x + i as u32 * slot_width + BAR_GAP / 2,
            y: area.y + area.height - bar_height,
            width: bar_width,
            height: bar_height,
        };
        fill(canvas, &bar, color);
        draw_text(
            canvas,
            area.x + i as u32 * slot_width,
            area.y + area.height + LABEL_GAP,
            label,
            label_chars,
            TEXT,
        );
    }
}

fn draw_frame(canvas: &mut RgbImage, area: &Rect) {
    let right = area.x + area.width;
    let bottom = area.y + area.height;
    for x in area.x..=right {
        put(canvas, x, area.y, FRAME);
        put(canvas, x, bottom, FRAME);
    }
    for y in area.y..=bottom {
        put(canvas, area.x, y, FRAME);
        put(canvas, right, y, FRAME);
    }
}

fn fill(canvas: &mut RgbImage, rect: &Rect, color: Rgb<u8>) {
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            put(canvas, x, y, color);
        }
    }
}

fn put(canvas: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, color);
    }
}
