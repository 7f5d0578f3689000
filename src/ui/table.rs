//! Box-drawn tables for the statistics view.

use console::measure_text_width;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

#[derive(Debug)]
struct Column {
    title: String,
    align: Align,
    width: usize,
}

/// Which horizontal rule to draw.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Top,
    Separator,
    Bottom,
}

impl Rule {
    fn corners(self) -> (char, char, char) {
        match self {
            Rule::Top => ('┌', '┬', '┐'),
            Rule::Separator => ('├', '┼', '┤'),
            Rule::Bottom => ('└', '┴', '┘'),
        }
    }
}

/// Table with a header row and box-drawing borders.
///
/// Widths are measured in terminal cells, so accented course names
/// line up with plain ones.
#[derive(Debug)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with one left-aligned column per title.
    pub fn new(titles: Vec<&str>) -> Self {
        let columns = titles
            .into_iter()
            .map(|title| Column {
                width: measure_text_width(title),
                title: title.to_string(),
                align: Align::Left,
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Set the alignment of a column. Out-of-range columns are ignored.
    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(col) = self.columns.get_mut(column) {
            col.align = align;
        }
        self
    }

    /// Append a row. Cells beyond the last column are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        let row: Vec<String> = cells
            .iter()
            .take(self.columns.len())
            .map(|c| c.as_ref().to_string())
            .collect();

        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render to a multi-line string without a trailing newline.
    pub fn render(&self) -> String {
        let titles: Vec<String> = self.columns.iter().map(|c| c.title.clone()).collect();

        let mut lines = vec![
            self.rule(Rule::Top),
            self.line(&titles),
            self.rule(Rule::Separator),
        ];
        lines.extend(self.rows.iter().map(|row| self.line(row)));
        lines.push(self.rule(Rule::Bottom));

        lines.join("\n")
    }

    fn rule(&self, rule: Rule) -> String {
        let (left, mid, right) = rule.corners();
        let segments: Vec<String> = self
            .columns
            .iter()
            .map(|c| "─".repeat(c.width + 2))
            .collect();

        format!("{left}{}{right}", segments.join(&mid.to_string()))
    }

    fn line(&self, cells: &[String]) -> String {
        let mut out = String::from("│");

        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or_default();
            let pad = " ".repeat(col.width.saturating_sub(measure_text_width(cell)));
            let padded = match col.align {
                Align::Left => format!("{cell}{pad}"),
                Align::Right => format!("{pad}{cell}"),
            };
            out.push_str(&format!(" {padded} │"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semester_table() -> Table {
        let mut table = Table::new(vec!["Semester", "Passed", "Progress"])
            .align(1, Align::Right)
            .align(2, Align::Right);
        table.add_row(&["Semestre 1", "2/2", "100%"]);
        table.add_row(&["Semestre 2", "0/2", "0%"]);
        table
    }

    #[test]
    fn empty_table_still_shows_titles() {
        let table = Table::new(vec!["Semester", "Passed"]);

        assert!(table.is_empty());
        let output = table.render();
        assert!(output.contains("Semester"));
        assert!(output.contains("Passed"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn renders_borders_and_rows() {
        let table = semester_table();
        let output = table.render();

        assert_eq!(table.row_count(), 2);
        assert!(output.starts_with('┌'));
        assert!(output.ends_with('┘'));
        assert!(output.contains("├"));
        assert!(output.contains("Semestre 2"));
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn right_aligned_cells_pad_on_the_left() {
        let output = semester_table().render();
        assert!(output.contains("│       0% │"));
    }

    #[test]
    fn short_rows_render_blank_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(&["only"]);

        let row = table.render().lines().nth(3).unwrap().to_string();
        assert_eq!(row.matches('│').count(), 4);
    }

    #[test]
    fn extra_cells_are_dropped() {
        let mut table = Table::new(vec!["A"]);
        table.add_row(&["x", "surplus"]);

        assert!(!table.render().contains("surplus"));
    }

    #[test]
    fn accented_names_keep_rows_aligned() {
        let mut table = Table::new(vec!["Course"]);
        table.add_row(&["Cálculo"]);
        table.add_row(&["Fisica1"]);

        let widths: Vec<usize> = table.render().lines().map(measure_text_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
