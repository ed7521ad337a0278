use serde::Serialize;
use serde_json::Value;

use crate::cli::global::OutputFormat;
use crate::ui;

pub mod table;

/// Records with a compact table layout. JSON output keeps the full record.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_value_table(&serde_json::to_value(value)?)),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Render a list of records, using their [`Tabular`] columns for tables.
pub fn render_rows<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&rows, format);
    }
    if rows.is_empty() {
        return Ok(String::from("(no rows)"));
    }
    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();
    Ok(table::render_table(T::HEADERS, &cells, table_options()))
}

pub fn output_rows<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_rows(rows, format)?);
    Ok(())
}

/// Table cell for an optional value.
#[must_use]
pub fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.to_string())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects become key/value tables, arrays of objects one row per item.
fn render_value_table(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(key, v)| vec![key.clone(), value_to_cell(v)])
                .collect();
            table::render_table(&["key", "value"], &rows, table_options())
        }
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut headers: Vec<&str> = Vec::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
                if !headers.contains(&key.as_str()) {
                    headers.push(key);
                }
            }
            let rows: Vec<Vec<String>> = items
                .iter()
                .map(|item| {
                    headers
                        .iter()
                        .map(|h| item.get(*h).map_or_else(|| String::from("-"), value_to_cell))
                        .collect()
                })
                .collect();
            table::render_table(&headers, &rows, table_options())
        }
        Value::Array(items) => {
            let rows: Vec<Vec<String>> = items.iter().map(|v| vec![value_to_cell(v)]).collect();
            table::render_table(&["value"], &rows, table_options())
        }
        scalar => value_to_cell(scalar),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
