use beacon_core::{Company, SearchResult};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

const COMPANY_COLUMNS: [&str; 6] = ["id", "name", "industry", "size", "location", "description"];

/// Render a serializable value as JSON in the requested style.
///
/// Table mode has no generic layout; use the entity-specific renderers.
pub fn render_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Render the directory listing.
pub fn render_companies(companies: &[Company], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render_json(&companies, format);
    }
    if companies.is_empty() {
        return Ok(String::from("(no companies)"));
    }
    Ok(company_table(companies))
}

/// Render a search answer: narrative first, then the ranked recommendations.
pub fn render_search(result: &SearchResult, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render_json(result, format);
    }

    let mut out = result.narrative.clone();
    if !result.source.is_empty() {
        out.push_str(&format!("\n(source: {})", result.source));
    }
    out.push_str("\n\n");
    if result.recommendations.is_empty() {
        out.push_str("(no recommendations)");
    } else {
        out.push_str(&company_table(&result.recommendations));
    }
    Ok(out)
}

fn company_table(companies: &[Company]) -> String {
    let prefs = ui::prefs();
    let rows = companies
        .iter()
        .map(|company| {
            vec![
                company.id.map_or_else(|| String::from("-"), |id| id.to_string()),
                company.name.clone(),
                company.industry.clone(),
                company.size.clone(),
                company.location.clone(),
                company.description.clone(),
            ]
        })
        .collect::<Vec<_>>();

    table::render_table(
        &COMPANY_COLUMNS,
        &rows,
        table::TableOptions {
            max_width: prefs.term_width,
            color: prefs.color,
        },
    )
}
