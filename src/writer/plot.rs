use crate::core::SegmentStatistic;
use crate::error::{StatsError, StatsResult};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// SVG chart of segment boundaries, labels and the mean-F0 trajectory
#[derive(Debug, Clone)]
pub struct ContourPlot {
    path: PathBuf,
    size: (u32, u32),
    caption: Option<String>,
}

impl ContourPlot {
    /// Create a plot that renders to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ContourPlot {
            path: path.as_ref().to_path_buf(),
            size: (1200, 600),
            caption: None,
        }
    }

    /// Set image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set chart caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the chart for one utterance
    pub fn render(&self, stats: &[SegmentStatistic]) -> StatsResult<()> {
        let (x_min, x_max) = time_span(stats);
        let y_max = f0_ceiling(stats);

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20).x_label_area_size(45).y_label_area_size(60);
        if let Some(caption) = &self.caption {
            builder.caption(caption, ("sans-serif", 20));
        }
        let mut chart = builder
            .build_cartesian_2d(x_min..x_max, 0.0..y_max)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Time (s)")
            .y_desc("F0 (Hz)")
            .axis_desc_style(("sans-serif", 16))
            .draw()
            .map_err(render_error)?;

        let boundary = BLACK.mix(0.4);
        let label_style = ("sans-serif", 14)
            .into_font()
            .color(&RED)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for stat in stats {
            for x in [stat.start, stat.end] {
                chart
                    .draw_series(LineSeries::new(vec![(x, 0.0), (x, y_max)], boundary))
                    .map_err(render_error)?;
            }
            chart
                .draw_series(std::iter::once(Text::new(
                    stat.label.clone(),
                    (stat.center(), y_max * 0.9),
                    label_style.clone(),
                )))
                .map_err(render_error)?;
        }

        let means: Vec<(f64, f64)> = stats.iter().map(|s| (s.center(), s.mean())).collect();
        chart
            .draw_series(LineSeries::new(means.clone(), &RED))
            .map_err(render_error)?
            .label("Mean F0")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
        chart
            .draw_series(means.iter().map(|&p| Circle::new(p, 5, RED.filled())))
            .map_err(render_error)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        Ok(())
    }
}

impl super::StatisticsWriter for ContourPlot {
    fn write(&mut self, stats: &[SegmentStatistic]) -> StatsResult<()> {
        self.render(stats)
    }
}

fn render_error<E: Display>(err: E) -> StatsError {
    StatsError::Render(err.to_string())
}

/// Time axis bounds covering every segment
fn time_span(stats: &[SegmentStatistic]) -> (f64, f64) {
    let start = stats.iter().map(|s| s.start).fold(f64::INFINITY, f64::min);
    let end = stats.iter().map(|s| s.end).fold(f64::NEG_INFINITY, f64::max);

    if !start.is_finite() || !end.is_finite() {
        return (0.0, 1.0);
    }
    if end - start < 1e-3 {
        return (start, start + 1e-3);
    }
    (start, end)
}

/// F0 axis top with headroom above the highest mean
fn f0_ceiling(stats: &[SegmentStatistic]) -> f64 {
    let peak = stats.iter().map(|s| s.mean()).fold(0.0, f64::max);
    if peak > 0.0 { peak * 1.2 } else { 1.0 }
}
