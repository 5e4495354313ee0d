//! Box-drawn tables for terminal output.
//!
//! Widths are measured in characters, so `✓` and `…` count as one column.

/// Narrowest the last column may be shrunk to when fitting a maximum width.
pub const MIN_SHRUNK_WIDTH: usize = 10;

/// A simple table for formatted output.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    min_widths: Vec<usize>,
    max_width: Option<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
            min_widths: Vec::new(),
            max_width: None,
        }
    }

    /// Set per-column minimum widths.
    pub fn with_min_widths(mut self, min_widths: Vec<usize>) -> Self {
        self.min_widths = min_widths;
        self
    }

    /// Limit the rendered width; the last column shrinks to fit.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        self.rows.push(row.iter().map(|s| s.to_string()).collect());
    }

    /// Column widths after applying minimums and the maximum width.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let min = self.min_widths.get(i).copied().unwrap_or(0);
                char_len(h).max(min)
            })
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(char_len(cell));
                }
            }
        }

        if let (Some(max_width), Some(last)) = (self.max_width, widths.len().checked_sub(1)) {
            let total: usize = widths.iter().sum::<usize>() + widths.len() * 3 + 1;
            if total > max_width {
                let excess = total - max_width;
                let current = widths[last];
                widths[last] = current.saturating_sub(excess).max(MIN_SHRUNK_WIDTH).min(current);
            }
        }

        widths
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        output.push_str(&render_border(&widths, '┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&render_row(&widths, &self.headers));
        output.push('\n');

        output.push_str(&render_border(&widths, '├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&render_row(&widths, row));
            output.push('\n');
        }

        output.push_str(&render_border(&widths, '└', '┴', '┘'));

        output
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Truncate to `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if char_len(s) <= max {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn render_border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut s = String::new();
    s.push(left);

    for (i, width) in widths.iter().enumerate() {
        s.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            s.push(mid);
        }
    }

    s.push(right);
    s
}

fn render_row(widths: &[usize], row: &[String]) -> String {
    let mut s = String::from("│");

    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
        s.push_str(&format!(" {:width$} │", truncate(cell, *width), width = width));
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_without_rows_renders_headers() {
        let table = Table::new(vec!["A", "B"]);

        let output = table.render();
        assert!(output.contains("A"));
        assert!(output.contains("B"));
    }

    #[test]
    fn table_uses_box_drawing() {
        let mut table = Table::new(vec!["Col1", "Col2"]);
        table.add_row(vec!["a", "b"]);
        let output = table.render();

        for ch in ["┌", "┬", "┐", "├", "┼", "┤", "└", "┴", "┘", "│", "─"] {
            assert!(output.contains(ch), "missing {}", ch);
        }
    }

    #[test]
    fn table_exact_layout() {
        let mut table = Table::new(vec!["name", "ok"]).with_min_widths(vec![0, 5]);
        table.add_row(vec!["rg", "✓"]);

        let expected = "\
┌──────┬───────┐
│ name │ ok    │
├──────┼───────┤
│ rg   │ ✓     │
└──────┴───────┘";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only", "two"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn min_widths_apply() {
        let table = Table::new(vec!["a", "b"]).with_min_widths(vec![8, 3]);
        assert_eq!(table.column_widths(), vec![8, 3]);
    }

    #[test]
    fn shrinks_last_column_to_fit() {
        let mut table = Table::new(vec!["key", "notes"]).with_max_width(30);
        let long = "x".repeat(40);
        table.add_row(vec!["k", &long]);

        let widths = table.column_widths();
        assert_eq!(widths, vec![3, 20]);
        let output = table.render();
        assert!(output.lines().all(|line| line.chars().count() == 30));
        assert!(output.contains(&format!("{}…", "x".repeat(19))));
    }

    #[test]
    fn shrinking_stops_at_minimum() {
        let mut table = Table::new(vec!["key", "notes"]).with_max_width(10);
        table.add_row(vec![&"k".repeat(30), &"n".repeat(30)]);
        assert_eq!(table.column_widths()[1], MIN_SHRUNK_WIDTH);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("héllo", 5), "héllo");
        assert_eq!(truncate("héllo wörld", 6), "héllo…");
    }
}
