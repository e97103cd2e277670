//! The payments chart: a declarative description of the desired chart
//! plus a factory that turns it into a rendered instance.
//!
//! Construction is deliberately "desired state in, handle out": callers
//! describe axes, series, cursor and legend in a [`ChartConfig`] and get
//! an opaque [`ChartHandle`] back. [`ChartLifecycle`] owns the handle
//! and guarantees the previous instance is disposed before a new one is
//! created, so at most one live instance exists per owner.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use api::coin::PoolCoin;
use chrono::Datelike;

use crate::series::DisplayPayment;

/// Series colors matching the dashboard palette: payout blue, fee gold.
pub const PALETTE: [&str; 2] = ["#0069ff", "#edb431"];

const VIEW_WIDTH: f64 = 760.0;
const VIEW_HEIGHT: f64 = 250.0;
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 12.0;
const AXIS_HEIGHT: f64 = 22.0;
const LEGEND_HEIGHT: f64 = 24.0;

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);
static LIVE_INSTANCES: AtomicUsize = AtomicUsize::new(0);

/// Which field of a [`DisplayPayment`] a series plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesField {
    Value,
    Fee,
}

impl SeriesField {
    fn extract(self, point: &DisplayPayment) -> f64 {
        match self {
            Self::Value => point.value,
            Self::Fee => point.fee,
        }
    }
}

/// One column series of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub name: String,
    pub field: SeriesField,
    pub stacked: bool,
    pub stroke_width: u32,
}

/// The desired state of a chart: day-granularity x-axis, one shared
/// value axis, column series, hover cursor, legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub palette: [&'static str; 2],
    pub series: Vec<SeriesSpec>,
    pub cursor: bool,
    pub legend: bool,
}

impl ChartConfig {
    /// The canonical payments chart: stacked value and fee columns on a
    /// shared axis, labeled with the coin's ticker.
    pub fn payments(coin: &PoolCoin) -> Self {
        let ticker = coin.display_ticker();
        Self {
            palette: PALETTE,
            series: vec![
                SeriesSpec {
                    name: format!("Value ({ticker})"),
                    field: SeriesField::Value,
                    stacked: true,
                    stroke_width: 3,
                },
                SeriesSpec {
                    name: format!("Fee ({ticker})"),
                    field: SeriesField::Fee,
                    stacked: true,
                    stroke_width: 3,
                },
            ],
            cursor: true,
            legend: true,
        }
    }
}

/// An opaque handle to one rendered chart instance.
///
/// Handles are created by [`build_chart`] and release their slot when
/// disposed; dropping an undisposed handle disposes it.
#[derive(Debug)]
pub struct ChartHandle {
    id: u64,
    svg: String,
    disposed: bool,
}

impl ChartHandle {
    fn new(svg: String) -> Self {
        LIVE_INSTANCES.fetch_add(1, Ordering::SeqCst);
        Self {
            id: NEXT_INSTANCE_ID.fetch_add(1, Ordering::SeqCst),
            svg,
            disposed: false,
        }
    }

    /// Identifier unique to this instance within the process.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The rendered markup. Empty once disposed.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Tears the instance down. Safe to call more than once.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.svg.clear();
            LIVE_INSTANCES.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Owns the chart instance across a component's renders.
///
/// `Idle` means no instance exists (no coin selected, or no data yet);
/// `Rendering` means exactly one live instance is bound to the last
/// dataset it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ChartState {
    #[default]
    Idle,
    Rendering,
}

#[derive(Debug, Default)]
pub struct ChartLifecycle {
    current: Option<ChartHandle>,
}

impl ChartLifecycle {
    pub fn state(&self) -> ChartState {
        if self.current.is_some() {
            ChartState::Rendering
        } else {
            ChartState::Idle
        }
    }

    /// Builds a fresh instance for `data`, returning its id.
    ///
    /// The prior instance, if any, is disposed before the replacement
    /// exists; two live instances never coexist.
    pub fn render(&mut self, config: &ChartConfig, data: &[DisplayPayment]) -> u64 {
        self.clear();
        let handle = build_chart(config, data);
        let id = handle.id();
        self.current = Some(handle);
        id
    }

    /// Disposes the current instance. A no-op when already idle.
    pub fn clear(&mut self) {
        if let Some(mut handle) = self.current.take() {
            handle.dispose();
        }
    }

    /// Markup of the live instance, if one exists.
    pub fn svg(&self) -> Option<&str> {
        self.current.as_ref().map(ChartHandle::svg)
    }
}

/// Renders `data` according to `config` and returns the handle to the
/// new instance. Construction is infallible; an empty dataset yields an
/// empty plot.
pub fn build_chart(config: &ChartConfig, data: &[DisplayPayment]) -> ChartHandle {
    ChartHandle::new(render_svg(config, data))
}

fn render_svg(config: &ChartConfig, data: &[DisplayPayment]) -> String {
    let bottom_margin = AXIS_HEIGHT + if config.legend { LEGEND_HEIGHT } else { 0.0 };
    let plot_width = VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = VIEW_HEIGHT - MARGIN_TOP - bottom_margin;
    let plot_bottom = MARGIN_TOP + plot_height;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEW_WIDTH} {VIEW_HEIGHT}" preserveAspectRatio="none" width="100%" height="100%">"#,
    );

    // Shared value axis, scaled to the tallest stacked column.
    let y_max = data
        .iter()
        .map(|point| stacked_total(config, point))
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    // Day-granularity x-axis: one slot per calendar day in the span.
    let day_numbers: Vec<i64> = data.iter().map(|p| p.date.num_days_from_ce() as i64).collect();
    let first_day = day_numbers.iter().copied().min().unwrap_or(0);
    let last_day = day_numbers.iter().copied().max().unwrap_or(0);
    let slots = (last_day - first_day + 1) as f64;
    let slot_width = plot_width / slots;
    let column_width = (slot_width * 0.7).max(1.0);

    for (point, day) in data.iter().zip(&day_numbers) {
        let slot_x = MARGIN_LEFT + (day - first_day) as f64 * slot_width;
        let x = slot_x + (slot_width - column_width) / 2.0;

        // Stacked segments accumulate upward from the axis.
        let mut base = plot_bottom;
        for (index, series) in config.series.iter().enumerate() {
            let value = series.field.extract(point);
            let height = (value / y_max) * plot_height;
            let y = base - height;
            let color = config.palette[index % config.palette.len()];

            svg.push_str(&format!(
                r#"<rect class="column" x="{x:.2}" y="{y:.2}" width="{column_width:.2}" height="{height:.2}" fill="{color}" stroke="{color}" stroke-width="{}">"#,
                series.stroke_width,
            ));
            if config.cursor {
                // Tooltip rounding is presentation-only; the data keeps
                // full precision.
                svg.push_str(&format!(
                    "<title>{}: {:.4}</title>",
                    xml_escape(&series.name),
                    value,
                ));
            }
            svg.push_str("</rect>");

            if series.stacked {
                base = y;
            }
        }
    }

    // Axis frame and bounds labels.
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{plot_bottom:.2}" x2="{:.2}" y2="{plot_bottom:.2}" stroke="#c7ccd6" stroke-width="1"/>"##,
        MARGIN_LEFT + plot_width,
    ));
    svg.push_str(&format!(
        r##"<text class="axis-label" x="{:.2}" y="{:.2}" font-size="11" text-anchor="end" fill="#6b7280">{}</text>"##,
        MARGIN_LEFT - 6.0,
        MARGIN_TOP + 10.0,
        format_amount(y_max),
    ));
    if let (Some(first), Some(last)) = (data.first(), data.last()) {
        let label_y = plot_bottom + 14.0;
        svg.push_str(&format!(
            r##"<text class="axis-label" x="{MARGIN_LEFT}" y="{label_y:.2}" font-size="11" fill="#6b7280">{}</text>"##,
            first.date.format("%b %-d"),
        ));
        svg.push_str(&format!(
            r##"<text class="axis-label" x="{:.2}" y="{label_y:.2}" font-size="11" text-anchor="end" fill="#6b7280">{}</text>"##,
            MARGIN_LEFT + plot_width,
            last.date.format("%b %-d"),
        ));
    }

    if config.legend {
        let legend_y = VIEW_HEIGHT - LEGEND_HEIGHT / 2.0;
        let mut legend_x = MARGIN_LEFT;
        for (index, series) in config.series.iter().enumerate() {
            let color = config.palette[index % config.palette.len()];
            svg.push_str(&format!(
                r#"<rect class="legend-swatch" x="{legend_x:.2}" y="{:.2}" width="10" height="10" fill="{color}"/>"#,
                legend_y - 9.0,
            ));
            svg.push_str(&format!(
                r##"<text class="legend-label" x="{:.2}" y="{legend_y:.2}" font-size="12" fill="#374151">{}</text>"##,
                legend_x + 14.0,
                xml_escape(&series.name),
            ));
            legend_x += 14.0 + 8.0 * series.name.len() as f64 + 24.0;
        }
    }

    svg.push_str("</svg>");
    svg
}

fn stacked_total(config: &ChartConfig, point: &DisplayPayment) -> f64 {
    let mut stacked = 0.0;
    let mut tallest = 0.0_f64;
    for series in &config.series {
        let value = series.field.extract(point);
        if series.stacked {
            stacked += value;
        } else {
            tallest = tallest.max(value);
        }
    }
    tallest.max(stacked)
}

fn format_amount(value: f64) -> String {
    let text = format!("{value:.4}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
fn live_instances() -> usize {
    LIVE_INSTANCES.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use std::sync::Mutex;
    use std::sync::MutexGuard;

    // Handle creation touches the process-wide instance counter, so
    // tests that build charts must not overlap.
    static LOCK: Mutex<()> = Mutex::new(());

    fn serialize() -> MutexGuard<'static, ()> {
        LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn point(day: u32, value: f64, fee: f64) -> DisplayPayment {
        DisplayPayment {
            date: Utc.with_ymd_and_hms(2023, 4, day, 12, 0, 0).unwrap(),
            value,
            fee,
        }
    }

    fn sample() -> Vec<DisplayPayment> {
        vec![point(1, 5.0, 0.01), point(2, 3.5, 0.02), point(4, 1.25, 0.01)]
    }

    #[test]
    fn payments_config_labels_series_with_ticker() {
        let config = ChartConfig::payments(&PoolCoin::new("btc", 8));
        let names: Vec<&str> = config.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Value (BTC)", "Fee (BTC)"]);
        assert!(config.series.iter().all(|s| s.stacked));
        assert!(config.cursor);
        assert!(config.legend);
    }

    #[test]
    fn handles_get_distinct_ids() {
        let _guard = serialize();
        let config = ChartConfig::payments(&PoolCoin::new("btc", 8));
        let a = build_chart(&config, &sample());
        let b = build_chart(&config, &sample());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn dispose_is_idempotent_and_clears_markup() {
        let _guard = serialize();
        let config = ChartConfig::payments(&PoolCoin::new("btc", 8));
        let mut handle = build_chart(&config, &sample());
        assert!(!handle.is_disposed());
        handle.dispose();
        handle.dispose();
        assert!(handle.is_disposed());
        assert!(handle.svg().is_empty());
    }

    #[test]
    fn lifecycle_never_holds_two_live_instances() {
        let _guard = serialize();
        let before = live_instances();
        let config = ChartConfig::payments(&PoolCoin::new("btc", 8));
        let mut lifecycle = ChartLifecycle::default();
        assert!(lifecycle.state().is_idle());

        let first = lifecycle.render(&config, &sample());
        assert!(lifecycle.state().is_rendering());
        assert_eq!(live_instances(), before + 1);

        // Changing the dataset replaces the instance, never duplicates it.
        let second = lifecycle.render(&config, &sample()[..1]);
        assert_ne!(first, second);
        assert_eq!(live_instances(), before + 1);

        lifecycle.clear();
        assert!(lifecycle.state().is_idle());
        assert_eq!(live_instances(), before);

        // Disposing a never-created chart is a no-op.
        lifecycle.clear();
        assert!(lifecycle.state().is_idle());
        assert_eq!(live_instances(), before);
    }

    #[test]
    fn renders_one_column_per_series_per_point() {
        let _guard = serialize();
        let config = ChartConfig::payments(&PoolCoin::new("btc", 8));
        let handle = build_chart(&config, &sample());
        let columns = handle.svg().matches(r#"<rect class="column""#).count();
        assert_eq!(columns, sample().len() * config.series.len());
    }

    #[test]
    fn tooltips_round_to_four_decimals_when_cursor_enabled() {
        let _guard = serialize();
        let config = ChartConfig::payments(&PoolCoin::new("btc", 8));
        let handle = build_chart(&config, &sample());
        assert!(handle.svg().contains("<title>Value (BTC): 5.0000</title>"));
        assert!(handle.svg().contains("<title>Fee (BTC): 0.0100</title>"));

        let mut quiet = config.clone();
        quiet.cursor = false;
        let handle = build_chart(&quiet, &sample());
        assert!(!handle.svg().contains("<title>"));
    }

    #[test]
    fn legend_names_each_series() {
        let _guard = serialize();
        let config = ChartConfig::payments(&PoolCoin::new("eth", 18));
        let handle = build_chart(&config, &sample());
        assert!(handle.svg().contains("Value (ETH)"));
        assert!(handle.svg().contains("Fee (ETH)"));
    }

    #[test]
    fn empty_dataset_builds_an_empty_plot() {
        let _guard = serialize();
        let config = ChartConfig::payments(&PoolCoin::new("btc", 8));
        let handle = build_chart(&config, &[]);
        assert!(!handle.svg().is_empty());
        assert!(!handle.svg().contains(r#"<rect class="column""#));
    }
}
