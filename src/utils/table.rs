//! Fixed-width table rendering for the `show` output.

pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

impl Column {
    pub fn new(header: &'static str, width: usize) -> Self {
        Self { header, width }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn total_width(&self) -> usize {
        // one trailing space per column
        self.columns.iter().map(|c| c.width + 1).sum()
    }

    /// Horizontal rule matching the table width, drawn with the configured
    /// separator character.
    pub fn separator(&self, sep: &str) -> String {
        let ch = sep.chars().next().unwrap_or('-');
        ch.to_string().repeat(self.total_width())
    }

    pub fn render(&self, sep: &str) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');
        out.push_str(&self.separator(sep));
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&format!("{:<width$} ", row[i], width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
