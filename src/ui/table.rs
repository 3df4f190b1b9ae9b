//! Table rendering for formatted output.

use console::measure_text_width;

/// A simple box-drawn table.
///
/// Column widths are measured in terminal cells, so CJK names and
/// styled cells line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row.iter().map(|s| s.as_ref().to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.push(self.render_border('└', '┴', '┘'));

        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let padding = width.saturating_sub(measure_text_width(cell));
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(padding));
            s.push_str(" │");
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_renders_headers() {
        let table = Table::new(vec!["Application", "Installed"]);
        assert!(table.is_empty());
        let output = table.render();
        assert!(output.contains("Application"));
        assert!(output.contains("Installed"));
    }

    #[test]
    fn rows_are_counted_and_rendered() {
        let mut table = Table::new(vec!["Application", "Status"]);
        table.add_row(&["HONOR PC Manager", "Up to date"]);
        table.add_row(&["HONOR Workstation", "Update available"]);

        assert_eq!(table.row_count(), 2);
        let output = table.render();
        assert!(output.contains("HONOR Workstation"));
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        let mut table = Table::new(vec!["Name", "Version"]);
        table.add_row(&["荣耀电脑管家", "17.0"]);
        table.add_row(&["ascii", "1.0"]);

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn missing_cells_are_blank() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(&["only", "two"]);
        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn uses_box_drawing() {
        let mut table = Table::new(vec!["Col1", "Col2"]);
        table.add_row(&["a", "b"]);
        let output = table.render();
        for ch in ["┌", "┬", "┐", "├", "┼", "┤", "└", "┴", "┘", "│"] {
            assert!(output.contains(ch), "missing {}", ch);
        }
    }
}
