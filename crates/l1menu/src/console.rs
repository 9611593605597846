//! Colorful console output for rate engine runs.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//! Enabled by the default `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "l1menu_rates=info";

/// Initializes console output for rate runs.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default `l1menu_rates=info` filter. If another global
/// subscriber is already installed, that one is kept.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RateConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats rate engine events with colors.
pub struct RateConsoleLayer;

impl<S: Subscriber> Layer<S> for RateConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("l1menu_rates") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_rate_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    mode: Option<String>,
    triggers: Option<u64>,
    events: Option<u64>,
    total_rate: Option<f64>,
    total_rate_error: Option<f64>,
    weight_of_all_events: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "mode" => self.mode = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "triggers" => self.triggers = Some(value),
            "events" => self.events = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        // Negative counts are not counts
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "total_rate" => self.total_rate = Some(value),
            "total_rate_error" => self.total_rate_error = Some(value),
            "weight_of_all_events" => self.weight_of_all_events = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }
}

fn format_rate_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "menu_rate_start" => format_start(v),
        "menu_rate_end" => format_end(v),
        "degenerate_sample" => format_degenerate(v),
        _ => String::new(),
    }
}

fn format_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} menu of {} triggers over {} events ({})",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        "[Rates]".bright_cyan(),
        v.triggers.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.events.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.mode.as_deref().unwrap_or("Serial").white(),
    )
}

fn format_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} total rate ({} ± {}), weight of all events ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Rates]".bright_cyan(),
        format_value(v.total_rate.unwrap_or(f64::NAN)).bright_magenta().bold(),
        format_value(v.total_rate_error.unwrap_or(f64::NAN)).magenta(),
        format_value(v.weight_of_all_events.unwrap_or(f64::NAN)).white(),
    )
}

fn format_degenerate(v: &EventVisitor) -> String {
    format!(
        "{} {} {} sample of {} events has zero total weight, rates are undefined",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Rates]".bright_cyan(),
        v.events.unwrap_or(0).to_formatted_string(&Locale::en).bright_red(),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

// Large values get thousands separators, small ones three decimals.
fn format_value(value: f64) -> String {
    if !value.is_finite() {
        format!("{}", value)
    } else if value.abs() >= 1000.0 {
        let whole = (value.abs().round() as u64).to_formatted_string(&Locale::en);
        if value < 0.0 {
            format!("-{}", whole)
        } else {
            whole
        }
    } else {
        format!("{:.3}", value)
    }
}
