//! Plain-text table with multi-line cells.
//!
//! Layout follows the usual box style:
//!
//! ```text
//! +------+----------+
//! | 车次 |   车站   |
//! +------+----------+
//! | G101 |  北京南  |
//! |      | 上海虹桥 |
//! +------+----------+
//! ```
//!
//! Column widths are measured in terminal columns, so CJK text lines up.
//! Colors are applied after padding and never count towards width.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

/// Foreground color of a cell line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Red,
}

impl Tone {
    /// Wrap `text` in this tone's terminal color.
    pub fn paint(self, text: &str) -> String {
        match self {
            Tone::Green => text.dark_green().to_string(),
            Tone::Red => text.dark_red().to_string(),
        }
    }
}

/// One line of text within a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Option<Tone>,
}

/// A table cell of one or more lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    lines: Vec<Line>,
}

impl Cell {
    /// A single uncolored line.
    pub fn text(text: impl Into<String>) -> Self {
        Self::default().line(text, None)
    }

    /// Append a line.
    pub fn line(mut self, text: impl Into<String>, tone: Option<Tone>) -> Self {
        self.lines.push(Line {
            text: text.into(),
            tone,
        });
        self
    }

    /// The cell's lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.text.width())
            .max()
            .unwrap_or(0)
    }
}

/// A table with a fixed header.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given column headings.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Cell::text).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render blank; extra cells are dropped.
    pub fn add_row(&mut self, mut row: Vec<Cell>) {
        row.resize_with(self.header.len(), Cell::default);
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table, with ANSI colors if `color` is set.
    pub fn render(&self, color: bool) -> String {
        let widths: Vec<usize> = (0..self.header.len())
            .map(|col| {
                std::iter::once(&self.header[col])
                    .chain(self.rows.iter().map(|row| &row[col]))
                    .map(Cell::width)
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let border = border_line(&widths);
        let mut out = String::new();

        out.push_str(&border);
        write_row(&mut out, &self.header, &widths, color);
        out.push_str(&border);
        for row in &self.rows {
            write_row(&mut out, row, &widths, color);
        }
        if !self.rows.is_empty() {
            out.push_str(&border);
        }

        out
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn write_row(out: &mut String, row: &[Cell], widths: &[usize], color: bool) {
    let height = row.iter().map(|c| c.lines.len()).max().unwrap_or(0).max(1);

    for i in 0..height {
        out.push('|');
        for (cell, &width) in row.iter().zip(widths) {
            let line = cell.lines.get(i);
            let text = line.map(|l| l.text.as_str()).unwrap_or("");
            let pad = width.saturating_sub(text.width());
            let left = pad / 2;
            let right = pad - left;

            out.push(' ');
            out.push_str(&" ".repeat(left));
            match line.and_then(|l| l.tone).filter(|_| color) {
                Some(tone) => out.push_str(&tone.paint(text)),
                None => out.push_str(text),
            }
            out.push_str(&" ".repeat(right));
            out.push_str(" |");
        }
        out.push('\n');
    }
}
