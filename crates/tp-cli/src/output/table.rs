//! Fixed-width text tables for `--format table`.

const GAP: &str = "  ";
const MIN_COLUMN: usize = 6;
const ELLIPSIS: char = '…';

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    /// Terminal width to fit into; unbounded when `None`.
    pub max_width: Option<usize>,
    /// Colour known status words.
    pub color: bool,
}

/// Render `rows` under `headers`, one line per row, with a dashed rule under
/// the header. Cells are flattened to one line and truncated with `…` when
/// the table must shrink to fit `max_width`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| single_line(cell)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    if let Some(limit) = options.max_width {
        shrink_to_fit(&mut widths, limit);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(
        headers.iter().map(|h| (*h).to_string()),
        &widths,
        false,
    ));
    let rule_width = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    lines.push("-".repeat(rule_width));
    for row in rows {
        lines.push(format_line(row.into_iter(), &widths, options.color));
    }
    lines.join("\n")
}

fn format_line(cells: impl Iterator<Item = String>, widths: &[usize], color: bool) -> String {
    let rendered: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let text = truncate(&cell, *width);
            let pad = width.saturating_sub(text.chars().count());
            let shown = if color { colorize(&text) } else { text };
            format!("{shown}{}", " ".repeat(pad))
        })
        .collect();
    rendered.join(GAP).trim_end().to_string()
}

/// Narrow the widest column until the row fits, never below `MIN_COLUMN`.
fn shrink_to_fit(widths: &mut [usize], limit: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    loop {
        let total = widths.iter().sum::<usize>() + gaps;
        if total <= limit {
            return;
        }
        let Some((index, widest)) = widths
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|(_, width)| *width)
        else {
            return;
        };
        if widest <= MIN_COLUMN {
            return;
        }
        widths[index] = (widest - (total - limit)).max(MIN_COLUMN);
    }
}

fn single_line(cell: &str) -> String {
    cell.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

fn colorize(text: &str) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "healthy" | "success" | "running" | "strong" => "32",
        "pending" | "degraded" | "fair" => "33",
        "failed" | "error" | "unhealthy" | "weak" => "31",
        _ => return text.to_string(),
    };
    format!("\x1b[{code}m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let table = render_table(
            &["id", "status"],
            &[cells(&["act-1", "running"]), cells(&["act-200", "failed"])],
            TableOptions::default(),
        );
        assert_eq!(
            table,
            "id       status\n----------------\nact-1    running\nact-200  failed"
        );
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let table = render_table(
            &["id", "title"],
            &[cells(&["s-1", "Fractions across four weeks of practice"])],
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("data row");
        assert_eq!(row.chars().count(), 20);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn multiline_cells_are_flattened() {
        let table = render_table(&["note"], &[cells(&["line one\nline two"])], TableOptions::default());
        assert!(table.ends_with("line one line two"));
    }

    #[test]
    fn status_words_are_coloured_only_when_enabled() {
        let rows = [cells(&["healthy"]), cells(&["weak"]), cells(&["other"])];
        let plain = render_table(&["status"], &rows, TableOptions::default());
        assert!(!plain.contains('\x1b'));

        let colored = render_table(
            &["status"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(colored.contains("\x1b[32mhealthy\x1b[0m"));
        assert!(colored.contains("\x1b[31mweak\x1b[0m"));
        assert!(colored.contains("\nother"));
    }
}
