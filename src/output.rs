//! Terminal rendering: plain text tables and result banners.

use serde::Serialize;

/// Placeholder for values the backend did not send.
pub const NONE: &str = "-";

/// A plain text table with left-aligned columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Adds a row. Missing cells render empty, extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut out = vec![line(&self.headers), line(&separator)];
        out.extend(self.rows.iter().map(|row| line(row)));
        out.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

/// Text for an optional cell.
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NONE.to_string(), |v| v.to_string())
}

/// Shortens `text` to `max` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[must_use]
pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn success(message: &str) {
    println!("\n✅ {}", message);
}

pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("   {}: {}", label, value);
}

/// Pretty-prints `value` as JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let mut table = Table::new(["ID", "NAME"]);
        table.row(["1", "English"]).row(["22", "Wolof"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID  NAME");
        assert_eq!(lines[1], "--  -------");
        assert_eq!(lines[2], "1   English");
        assert_eq!(lines[3], "22  Wolof");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(["A", "B", "C"]);
        table.row(["x"]);
        assert_eq!(table.render().lines().nth(2), Some("x"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 10), "a longe...");
    }

    #[test]
    fn test_cell() {
        assert_eq!(cell(Some(3)), "3");
        assert_eq!(cell::<u32>(None), NONE);
    }
}
