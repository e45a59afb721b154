//! Terminal render target.
//!
//! Stands in for the home-screen widget surface: either a styled preview
//! for a human, or the widget model as JSON for a host runner to consume.

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::port::RenderTarget;
use crate::widget::WidgetModel;

const RULE_WIDTH: usize = 56;

pub struct TerminalRender {
    json: bool,
}

impl TerminalRender {
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl RenderTarget for TerminalRender {
    fn render(&self, model: &WidgetModel) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(model)?);
            return Ok(());
        }

        println!();
        for line in model.quote.text.lines() {
            println!("  {}", line.bold());
        }
        println!();
        println!("  {}", model.attribution.text.italic());
        println!();
        println!("{}", "\u{2500}".repeat(RULE_WIDTH).dimmed());
        println!(
            "{}",
            format!("next refresh {}", model.refresh_after.format("%Y-%m-%d %H:%M:%S")).dimmed()
        );
        Ok(())
    }
}
