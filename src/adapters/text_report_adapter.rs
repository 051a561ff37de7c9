//! Plain-text table rendering for terminal output.

use crate::domain::error::PivotError;
use crate::domain::layout::{Cell, Table};
use crate::ports::report_port::ReportPort;
use std::io::Write;

pub struct TextReportAdapter {
    precision: Option<usize>,
}

impl TextReportAdapter {
    pub fn new(precision: Option<usize>) -> Self {
        Self { precision }
    }

    /// Render every table as an aligned block, separated by blank lines.
    pub fn render(&self, tables: &[Table]) -> String {
        tables
            .iter()
            .map(|t| render_table(t, self.precision))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render one table: title, header, rule, rows. Numbers are right-aligned,
/// text left-aligned.
pub fn render_table(table: &Table, precision: Option<usize>) -> String {
    let rendered: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|c| c.render(precision)).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rendered
                .iter()
                .filter_map(|r| r.get(i))
                .map(|s| s.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", table.title));

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(name, &w)| format!("{:<w$}", name))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for (row, cells) in rendered.iter().zip(&table.rows) {
        let line: Vec<String> = row
            .iter()
            .zip(cells)
            .zip(&widths)
            .map(|((text, cell), &w)| match cell {
                Cell::Number(_) => format!("{:>w$}", text),
                Cell::Text(_) | Cell::Empty => format!("{:<w$}", text),
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}

impl ReportPort for TextReportAdapter {
    fn write_tables(&self, tables: &[Table]) -> Result<(), PivotError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.render(tables).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table {
            title: "DeMark".into(),
            columns: vec!["Symbol".into(), "Pivot".into(), "R1".into()],
            rows: vec![
                vec![
                    Cell::Text("BHP".into()),
                    Cell::Number(102.5),
                    Cell::Number(115.0),
                ],
                vec![
                    Cell::Text("COMMBANK".into()),
                    Cell::Number(9.0),
                    Cell::Number(1234.5),
                ],
            ],
        }
    }

    #[test]
    fn render_table_aligns_columns() {
        let out = render_table(&table(), Some(1));
        let expected = "== DeMark ==\n\
            Symbol    Pivot  R1\n\
            --------  -----  ------\n\
            BHP       102.5   115.0\n\
            COMMBANK    9.0  1234.5\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn render_joins_tables_with_blank_line() {
        let adapter = TextReportAdapter::new(Some(1));
        let out = adapter.render(&[table(), table()]);
        assert_eq!(out.matches("== DeMark ==").count(), 2);
        assert!(out.contains("1234.5\n\n== DeMark =="));
    }

    #[test]
    fn render_empty_cells_as_blank() {
        let t = Table {
            title: "Classic".into(),
            columns: vec!["Symbol".into(), "Pivot".into(), "Error".into()],
            rows: vec![vec![
                Cell::Text("BAD".into()),
                Cell::Empty,
                Cell::Text("High is missing".into()),
            ]],
        };
        let out = render_table(&t, None);
        assert!(out.contains("BAD            High is missing"));
    }
}
