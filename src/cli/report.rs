//! Handler for the `report` command: usage statistics plus an interactive
//! reset of the no-repeat cycle.

use std::io::IsTerminal;

use tabled::{Table, Tabled};

use crate::adapter::{DialoguerConfirm, FileStateStore, HttpCatalogSource};
use crate::app::{App, UsageReport};
use crate::cli::{output, ReportArgs};
use crate::config::Config;
use crate::domain::{Quote, QuoteId};
use crate::error::Result;
use crate::port::ConfirmSurface;

const QUOTE_PREVIEW_LEN: usize = 80;

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "ID")]
    id: QuoteId,
    #[tabled(rename = "Quote")]
    quote: String,
    #[tabled(rename = "Attribution")]
    attribution: String,
}

impl QuoteRow {
    fn from_quote(id: QuoteId, quote: &Quote) -> Self {
        Self {
            id,
            quote: truncate(&quote.quote),
            attribution: quote.attribution.clone(),
        }
    }

    fn orphan(id: QuoteId) -> Self {
        Self {
            id,
            quote: "(quote not found in current catalog)".to_string(),
            attribution: String::new(),
        }
    }
}

pub async fn execute(args: ReportArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging();

    let source = HttpCatalogSource::new(config.catalog.url.clone(), config.catalog.timeout())?;
    let store = FileStateStore::new(config.store.data_dir());
    let app = App::new(
        source,
        store,
        config.rotation.selection_policy(),
        config.widget.style(),
        config.catalog.cache_ttl(),
    );

    let report = app.usage_report();
    print_report(&report);

    // The reset offer only makes sense on an interactive terminal; piped
    // runs get the plain statistics.
    if !report.used.is_empty() && std::io::stdin().is_terminal() {
        offer_reset(&app, &report, &DialoguerConfirm)?;
    }

    Ok(())
}

fn print_report(report: &UsageReport) {
    output::section("Quote usage statistics");
    output::key_value("Total:", report.summary.total);
    output::key_value("Used:", report.summary.used);
    output::key_value("Remaining:", report.summary.remaining);
    output::key_value("Progress:", report.summary.percent_used());

    output::section("Used quotes");
    if report.used.is_empty() {
        output::note("(No quotes used yet)");
    } else {
        let rows: Vec<QuoteRow> = report
            .used
            .iter()
            .map(|(id, quote)| match quote {
                Some(quote) => QuoteRow::from_quote(*id, quote),
                None => QuoteRow::orphan(*id),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if !report.remaining.is_empty() {
        output::section("Remaining quotes");
        let ids: Vec<String> = report.remaining.iter().map(|(id, _)| id.to_string()).collect();
        output::note(&format!("[{}]", ids.join(", ")));
    }
}

/// Two sequential confirmations gate the destructive write.
fn offer_reset<S, T>(app: &App<S, T>, report: &UsageReport, confirm: &impl ConfirmSurface) -> Result<()>
where
    S: crate::port::CatalogSource,
    T: crate::port::StateStore,
{
    let wants_reset = confirm.confirm(
        "Quote usage",
        &format!(
            "Used {}/{} quotes ({}). Reset the used list?",
            report.summary.used,
            report.summary.total,
            report.summary.percent_used()
        ),
        false,
    )?;
    if !wants_reset {
        return Ok(());
    }

    let confirmed = confirm.confirm(
        "Confirm reset",
        "This clears the used list so every quote can be shown again. Proceed?",
        true,
    )?;
    if !confirmed {
        output::note("Reset cancelled.");
        return Ok(());
    }

    match app.reset_used_ids() {
        Ok(dropped) => output::ok(&format!("Used quotes list reset ({dropped} ids cleared)")),
        Err(e) => output::error(&format!("Failed to reset used quotes list: {e}")),
    }
    Ok(())
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= QUOTE_PREVIEW_LEN {
        return text.to_string();
    }
    let cut: String = text.chars().take(QUOTE_PREVIEW_LEN - 3).collect();
    format!("{cut}...")
}
