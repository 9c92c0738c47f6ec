//! Plain-text rendering of a recorded document, for terminals and tests.

use itertools::Itertools;
use std::fmt::Write;
use tabula_idf::{CellContent, Element, StyledCell};
use tabula_render_core::recording::{Recorded, RecordedTable};
use tabula_render_core::RecordingDocument;

fn cell_text(cell: &StyledCell) -> String {
    match &cell.content {
        CellContent::Text(p) => p.text.replace('\n', " "),
        CellContent::Image(image) => format!("[{}]", image.uri),
    }
}

/// Draws `table` as an ASCII grid with a rule below the first row.
pub fn table_preview(table: &RecordedTable) -> String {
    let columns = table.column_count().max(1);
    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let mut widths = vec![0; columns];
    for row in &rows {
        for (i, text) in row.iter().enumerate() {
            widths[i] = widths[i].max(text.chars().count());
        }
    }

    let rule = format!("+{}+", widths.iter().map(|w| "-".repeat(w + 2)).join("+"));
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    for (index, row) in rows.iter().enumerate() {
        let line = widths
            .iter()
            .enumerate()
            .map(|(i, w)| format!(" {:<w$} ", row.get(i).map(String::as_str).unwrap_or(""), w = *w))
            .join("|");
        let _ = writeln!(out, "|{}|", line);
        if index == 0 {
            let _ = writeln!(out, "{}", rule);
        }
    }
    if rows.len() > 1 {
        let _ = writeln!(out, "{}", rule);
    }
    out
}

fn item_preview(item: &Recorded) -> String {
    match item {
        Recorded::Element(Element::Paragraph(p)) => format!("{}\n", p.text),
        Recorded::Element(Element::Image(image)) => match image.size {
            Some(size) => format!("[image {} {}x{}]\n", image.uri, size.width, size.height),
            None => format!("[image {}]\n", image.uri),
        },
        Recorded::Table(table) => table_preview(table),
    }
}

/// Every page of `document`, each under a `--- page N ---` banner.
pub fn document_preview(document: &RecordingDocument) -> String {
    document
        .pages()
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let body: String = page.items.iter().map(item_preview).collect();
            format!("--- page {} ---\n{}", i + 1, body)
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_idf::{ColumnLayout, ImageElement, Paragraph};
    use tabula_render_core::{DocumentRenderer, RecordingTable, TableRenderer};
    use tabula_style::PageConfiguration;

    fn table() -> RecordedTable {
        let mut table = RecordingTable::new(ColumnLayout::Count(2));
        for text in ["Id", "Full Name", "1", "Ana", "2", "Bo"] {
            table.append_cell(&Paragraph::new(text).into());
        }
        table.finish()
    }

    #[test]
    fn test_table_preview() {
        let expected = "\
+----+-----------+
| Id | Full Name |
+----+-----------+
| 1  | Ana       |
| 2  | Bo        |
+----+-----------+
";
        assert_eq!(table_preview(&table()), expected);
    }

    #[test]
    fn test_document_preview() {
        let mut doc = RecordingDocument::new(PageConfiguration::default());
        doc.open().unwrap();
        doc.add_element(&Element::Image(ImageElement::new("logo.png")));
        doc.add_element(&Element::Paragraph(Paragraph::new("Staff")));
        doc.new_page();
        doc.add_table(RecordingTable::new(ColumnLayout::Count(1)));
        doc.close().unwrap();

        let preview = document_preview(&doc);
        assert!(preview.starts_with("--- page 1 ---\n[image logo.png]\nStaff\n"));
        assert!(preview.contains("--- page 2 ---"));
    }
}
