// src/core/html.rs
//
// HTML helpers on top of `scraper`: selector parsing, text extraction, and a
// generic table reader that turns every `<table>` into a `Table` of text cells.
//
// Table conventions:
// - header = last `<thead>` row, or a leading all-`<th>` row when there is no thead
// - empty header text becomes `Unnamed: {index}`; repeats become `X.1`, `X.2`, …
// - `colspan` repeats the cell text across the spanned columns
// - in-body header repeats (`tr.thead`) and spacer rows are skipped; `<tfoot>` is ignored
// - every row is padded or cut to the header width

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::PLACEHOLDER_COLUMN;
use crate::error::{Result, ScrapeError};
use crate::table::Table;
use super::sanitize::normalize_ws;

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::parse(format!("bad selector `{css}`: {e}")))
}

/// Visible text of an element, whitespace collapsed.
pub fn text_of(el: &ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first element matching `css`, if it has any.
pub fn first_text(doc: &Html, css: &str) -> Option<String> {
    let sel = selector(css).ok()?;
    doc.select(&sel)
        .next()
        .map(|el| text_of(&el))
        .filter(|t| !t.is_empty())
}

/// `(text, href)` for each anchor matching `css`, in document order.
pub fn anchors(doc: &Html, css: &str) -> Result<Vec<(String, String)>> {
    let sel = selector(css)?;
    Ok(doc
        .select(&sel)
        .filter_map(|a| a.value().attr("href").map(|href| (text_of(&a), s!(href))))
        .collect())
}

/// Every `<table>` in the document, in document order.
pub fn extract_tables(doc: &Html) -> Result<Vec<Table>> {
    let sel = selector("table")?;
    Ok(doc.select(&sel).map(extract_table).collect())
}

/// Read one `<table>` element.
pub fn extract_table(table: ElementRef) -> Table {
    let mut head_rows: Vec<ElementRef> = Vec::new();
    let mut body_rows: Vec<ElementRef> = Vec::new();

    for section in child_elements(table) {
        match section.value().name() {
            "thead" => head_rows.extend(child_elements(section).filter(|e| e.value().name() == "tr")),
            "tbody" => body_rows.extend(child_elements(section).filter(|e| e.value().name() == "tr")),
            "tr" => body_rows.push(section),
            _ => {} // caption, colgroup, tfoot
        }
    }

    // No thead: promote a leading all-<th> row
    if head_rows.is_empty() {
        if let Some(first) = body_rows.first() {
            let cells: Vec<ElementRef> = row_cells(*first).collect();
            if !cells.is_empty() && cells.iter().all(|c| c.value().name() == "th") {
                head_rows.push(body_rows.remove(0));
            }
        }
    }

    let raw_headers = head_rows.last().map(|tr| read_row(*tr)).unwrap_or_default();
    let width = raw_headers
        .len()
        .max(body_rows.iter().map(|tr| read_row(*tr).len()).max().unwrap_or(0));
    let headers = name_headers(&raw_headers, width);

    let rows = body_rows
        .into_iter()
        .filter(|tr| !is_filler_row(tr))
        .map(|tr| {
            let mut cells = read_row(tr);
            cells.resize(width, s!());
            cells
        })
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    Table::from_text(headers, rows)
}

/* ---------- helpers ---------- */

fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

fn row_cells<'a>(tr: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    child_elements(tr).filter(|c| matches!(c.value().name(), "td" | "th"))
}

/// Cell texts of one row with colspans expanded.
fn read_row(tr: ElementRef) -> Vec<String> {
    let mut out = Vec::new();
    for cell in row_cells(tr) {
        let text = text_of(&cell);
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .clamp(1, 1000);
        for _ in 1..span {
            out.push(text.clone());
        }
        out.push(text);
    }
    out
}

fn is_filler_row(tr: &ElementRef) -> bool {
    tr.value().classes().any(|c| c == "thead" || c == "spacer")
}

/// Blank → `Unnamed: i`, duplicates → `X.1`, missing → index.
fn name_headers(raw: &[String], width: usize) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    (0..width)
        .map(|i| {
            let base = match raw.get(i) {
                Some(h) if !h.is_empty() => h.clone(),
                Some(_) => format!("{PLACEHOLDER_COLUMN} {i}"),
                None => i.to_string(),
            };
            let n = seen.entry(base.clone()).or_insert(0);
            let name = if *n == 0 { base } else { format!("{base}.{n}") };
            *n += 1;
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn one_table(html: &str) -> Table {
        let doc = parse(html);
        extract_tables(&doc).unwrap().remove(0)
    }

    #[test]
    fn reads_thead_and_body() {
        let t = one_table(r#"
            <table>
              <thead><tr><th>Rk</th><th>Opp</th><th>PTS</th></tr></thead>
              <tbody>
                <tr><th>1</th><td>BOS</td><td>31</td></tr>
                <tr class="thead"><th>Rk</th><th>Opp</th><th>PTS</th></tr>
                <tr><th>2</th><td>NYK</td><td>1,024</td></tr>
              </tbody>
              <tfoot><tr><td></td><td>Total</td><td>1055</td></tr></tfoot>
            </table>
        "#);
        assert_eq!(t.headers, vec!["Rk", "Opp", "PTS"]);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows[1][2], Cell::text("1,024"));
    }

    #[test]
    fn blank_and_duplicate_headers_are_named() {
        let t = one_table(r#"
            <table>
              <tr><th>Opp</th><th></th><th>PTS</th><th>PTS</th></tr>
              <tr><td>BOS</td><td>@</td><td>1</td><td>2</td></tr>
            </table>
        "#);
        assert_eq!(t.headers, vec!["Opp", "Unnamed: 1", "PTS", "PTS.1"]);
    }

    #[test]
    fn colspan_repeats_text_and_rows_are_padded() {
        let t = one_table(r#"
            <table>
              <thead><tr><th>G</th><th>Opp</th><th>MP</th><th>PTS</th></tr></thead>
              <tbody>
                <tr><td>3</td><td>MIA</td><td colspan="2">Inactive</td></tr>
                <tr><td>4</td></tr>
              </tbody>
            </table>
        "#);
        assert_eq!(t.rows[0], vec![Cell::text("3"), Cell::text("MIA"), Cell::text("Inactive"), Cell::text("Inactive")]);
        assert_eq!(t.rows[1].len(), 4);
        assert_eq!(t.rows[1][3], Cell::text(""));
    }

    #[test]
    fn last_thead_row_wins() {
        let t = one_table(r#"
            <table>
              <thead>
                <tr class="over_header"><th colspan="2">Shooting</th></tr>
                <tr><th>FG</th><th>FGA</th></tr>
              </thead>
              <tbody><tr><td>5</td><td>9</td></tr></tbody>
            </table>
        "#);
        assert_eq!(t.headers, vec!["FG", "FGA"]);
    }

    #[test]
    fn anchors_keep_document_order() {
        let doc = parse(r#"<table id="roster"><tr><td><a href="/players/a/b.html">B</a></td><td><a href="/players/c/d.html">D</a></td></tr></table>"#);
        let links = anchors(&doc, r#"table#roster a[href*="/players/"]"#).unwrap();
        assert_eq!(links, vec![(s!("B"), s!("/players/a/b.html")), (s!("D"), s!("/players/c/d.html"))]);
    }

    #[test]
    fn first_text_skips_missing_and_empty() {
        let doc = parse("<h1>  </h1><title>X</title>");
        assert_eq!(first_text(&doc, "h1"), None);
        assert_eq!(first_text(&doc, "h2"), None);
        assert_eq!(first_text(&doc, "title").as_deref(), Some("X"));
    }
}
