use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank-run pattern is valid"));
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

/// Convert strategy markdown into an HTML fragment.
///
/// Recognized per trimmed line:
///
/// ```text
/// ""           → flush list, <br>
/// "# x"        → <h1>x</h1>     ("## " → h2, "### " → h3)
/// "- x" "* x"  → buffered <li>x</li>
/// anything     → <p>x</p>
/// ```
///
/// `**y**` becomes `<strong>y</strong>` in headers, list items, and
/// paragraphs alike.
///
/// Consecutive list lines share one `<ul>`; the list closes on the first
/// non-list line or at end of input.
#[must_use]
pub fn strategy_to_html(markdown: &str) -> String {
    let normalized = BLANK_RUN_RE.replace_all(markdown, "\n\n");
    let mut html = String::with_capacity(normalized.len() * 2);
    let mut list = ListBuffer::default();

    for raw in normalized.split('\n') {
        let line = raw.trim();

        if line.is_empty() {
            list.flush_into(&mut html);
            html.push_str("<br>");
            continue;
        }

        if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            list.push(item);
            continue;
        }

        list.flush_into(&mut html);

        let (tag, text) = if let Some(text) = line.strip_prefix("# ") {
            ("h1", text)
        } else if let Some(text) = line.strip_prefix("## ") {
            ("h2", text)
        } else if let Some(text) = line.strip_prefix("### ") {
            ("h3", text)
        } else {
            ("p", line)
        };
        push_wrapped(&mut html, tag, &bold(text));
    }

    list.flush_into(&mut html);
    html
}

#[derive(Default)]
struct ListBuffer<'a> {
    items: Vec<&'a str>,
}

impl<'a> ListBuffer<'a> {
    fn push(&mut self, item: &'a str) {
        self.items.push(item);
    }

    fn flush_into(&mut self, html: &mut String) {
        if self.items.is_empty() {
            return;
        }
        html.push_str("<ul>");
        for item in self.items.drain(..) {
            push_wrapped(html, "li", &bold(item));
        }
        html.push_str("</ul>");
    }
}

fn bold(text: &str) -> Cow<'_, str> {
    BOLD_RE.replace_all(text, "<strong>$1</strong>")
}

fn push_wrapped(html: &mut String, tag: &str, text: &str) {
    html.push('<');
    html.push_str(tag);
    html.push('>');
    html.push_str(text);
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_then_list() {
        assert_eq!(
            strategy_to_html("# A\n- b\n- c"),
            "<h1>A</h1><ul><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn header_levels() {
        assert_eq!(
            strategy_to_html("# One\n## Two\n### Three"),
            "<h1>One</h1><h2>Two</h2><h3>Three</h3>"
        );
    }

    #[test]
    fn four_hashes_is_a_paragraph() {
        assert_eq!(strategy_to_html("#### deep"), "<p>#### deep</p>");
    }

    #[test]
    fn star_and_dash_items_share_a_list() {
        assert_eq!(
            strategy_to_html("- one\n* two\n- three"),
            "<ul><li>one</li><li>two</li><li>three</li></ul>"
        );
    }

    #[test]
    fn blank_line_closes_list_and_emits_break() {
        assert_eq!(
            strategy_to_html("- a\n\n- b"),
            "<ul><li>a</li></ul><br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn paragraph_closes_list() {
        assert_eq!(
            strategy_to_html("- a\nafter"),
            "<ul><li>a</li></ul><p>after</p>"
        );
    }

    #[test]
    fn blank_runs_collapse_to_one_gap() {
        assert_eq!(strategy_to_html("a\n\n\n\n\nb"), "<p>a</p><br><p>b</p>");
    }

    #[test]
    fn bold_in_paragraph() {
        assert_eq!(
            strategy_to_html("Focus: **fractions** and **decimals**"),
            "<p>Focus: <strong>fractions</strong> and <strong>decimals</strong></p>"
        );
    }

    #[test]
    fn bold_in_list_items_and_headers() {
        assert_eq!(
            strategy_to_html("- **Week 1**: Fractions\n* plain"),
            "<ul><li><strong>Week 1</strong>: Fractions</li><li>plain</li></ul>"
        );
        assert_eq!(strategy_to_html("## **Goal**"), "<h2><strong>Goal</strong></h2>");
        assert_eq!(strategy_to_html("- **open"), "<ul><li>**open</li></ul>");
    }

    #[test]
    fn unmatched_bold_marker_is_kept() {
        assert_eq!(strategy_to_html("**open only"), "<p>**open only</p>");
        assert_eq!(strategy_to_html("**"), "<p>**</p>");
        assert_eq!(strategy_to_html("a ** b **"), "<p>a <strong> b </strong></p>");
    }

    #[test]
    fn lines_are_trimmed_and_crlf_tolerated() {
        assert_eq!(
            strategy_to_html("  # Plan  \r\n   - item\r\n"),
            "<h1>Plan</h1><ul><li>item</li></ul><br>"
        );
    }

    #[test]
    fn empty_input_is_a_single_break() {
        assert_eq!(strategy_to_html(""), "<br>");
    }
}
