//! Widget model handed to the render target.
//!
//! Mirrors the capabilities of the home-screen widget API: a solid or
//! two-stop gradient background, two centered text blocks, a fixed spacer,
//! and a refresh-after timestamp the host uses to schedule the next run.

use chrono::{DateTime, Duration, Local, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::Quote;

/// Widget background fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    Solid { color: String },
    Gradient { start: String, end: String },
}

/// A positioned run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub font: String,
    pub size: u32,
    pub color: String,
    pub centered: bool,
}

/// The fully composed widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetModel {
    pub background: Background,
    pub quote: TextBlock,
    /// Vertical gap between quote and attribution, in points.
    pub spacer: u32,
    pub attribution: TextBlock,
    /// When the host should run the next refresh.
    pub refresh_after: DateTime<Local>,
}

/// Visual settings for composing the widget.
#[derive(Debug, Clone)]
pub struct WidgetStyle {
    pub background: Background,
    pub text_color: String,
    pub quote_font: String,
    pub quote_size: u32,
    pub attribution_font: String,
    pub attribution_size: u32,
    pub spacer: u32,
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self {
            background: Background::Gradient {
                start: "#EE9C4D".to_string(),
                end: "#E68438".to_string(),
            },
            text_color: "#E4E4E4".to_string(),
            quote_font: "Avenir-Medium".to_string(),
            quote_size: 25,
            attribution_font: "Avenir-Medium".to_string(),
            attribution_size: 18,
            spacer: 6,
        }
    }
}

impl WidgetModel {
    /// Compose the widget for a selected quote.
    pub fn compose(quote: &Quote, style: &WidgetStyle, now: DateTime<Local>) -> Self {
        Self {
            background: style.background.clone(),
            quote: TextBlock {
                text: unescape_newlines(&quote.quote),
                font: style.quote_font.clone(),
                size: style.quote_size,
                color: style.text_color.clone(),
                centered: true,
            },
            spacer: style.spacer,
            attribution: TextBlock {
                text: format!("\u{2014} {}", quote.attribution),
                font: style.attribution_font.clone(),
                size: style.attribution_size,
                color: style.text_color.clone(),
                centered: true,
            },
            refresh_after: next_refresh(now),
        }
    }
}

/// Catalog text may carry literal `\n` sequences; turn them into breaks.
fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Next calendar day at 00:00:05 local time.
///
/// The five-second offset keeps the refresh safely past midnight so the
/// day-based selection sees the new date.
pub fn next_refresh(now: DateTime<Local>) -> DateTime<Local> {
    let tomorrow = now.date_naive() + Duration::days(1);
    let at = NaiveTime::from_hms_opt(0, 0, 5).expect("00:00:05 is a valid time");
    tomorrow
        .and_time(at)
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or(now + Duration::days(1))
}
