mod bitmap_text;
mod png_chart_renderer;

pub use png_chart_renderer::PngChartRenderer;
