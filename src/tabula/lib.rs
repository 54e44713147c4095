//! # Tabula - Styled Box-Drawn Tables
//!
//! A small library for printing tabular data to a terminal with named styles
//! and explicit color control.
//!
//! ## The Problem
//!
//! CLI tools that print API resources want:
//! - Tables with borders, multi-line cells and cells spanning several columns
//! - Semantic styling (an ID is always bold cyan, a label always red)
//! - Plain output when colors are off, without every call site checking a flag
//!
//! ## The Solution
//!
//! Tabula separates three concerns:
//! - Styles are registered by name inside a [`Theme`]
//! - A [`Painter`] pairs a theme with an explicit `color` switch; nothing here
//!   reads process-wide state, so the same code renders identically in tests
//! - A [`Table`] holds already-formatted cells and lays them out, measuring
//!   width with ANSI escapes stripped
//!
//! ## Quick Example
//!
//! ```rust
//! use console::Style;
//! use tabula::{Cell, Painter, Table, Theme};
//!
//! let theme = Theme::new()
//!     .add(tabula::HEAD_STYLE, Style::new().red())
//!     .add("id", Style::new().bold().cyan());
//! let painter = Painter::new(&theme, false);
//!
//! let mut table = Table::with_head(["ID", "Name"]);
//! table.push([painter.paint("id", "42"), "web-1".to_string()]);
//!
//! let output = table.render(&painter);
//! assert!(output.contains("│ 42 │ web-1 │"));
//! ```
//!
//! ## Empty Tables
//!
//! [`Table::push_none`] adds the conventional placeholder row: a single
//! centered `none` cell spanning every declared column.

use console::Style;
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Style name used for header cells.
pub const HEAD_STYLE: &str = "head";

/// Placeholder content for empty tables.
pub const NONE: &str = "none";

/// Named styles.
///
/// Painting with a name the theme does not know leaves the text unstyled.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any style with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }
}

/// A theme plus the decision whether to emit colors.
///
/// This is the only styling capability the rest of an application needs to pass
/// around. It is `Copy`, so it can be handed to pure formatting functions freely.
#[derive(Clone, Copy)]
pub struct Painter<'a> {
    theme: &'a Theme,
    color: bool,
}

impl<'a> Painter<'a> {
    pub fn new(theme: &'a Theme, color: bool) -> Self {
        Self { theme, color }
    }

    /// Uses the `console` crate to decide whether stdout supports colors.
    pub fn detect(theme: &'a Theme) -> Self {
        let color = console::Term::stdout().features().colors_supported();
        Self::new(theme, color)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Applies the named style line by line so that multi-line text never
    /// carries an open escape sequence across a table border.
    pub fn paint(&self, name: &str, text: &str) -> String {
        let style = match self.theme.style(name) {
            Some(style) if self.color => style.clone().force_styling(true),
            _ => return text.to_string(),
        };
        text.split('\n')
            .map(|line| style.apply_to(line).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// A single table cell. Content may contain newlines and ANSI escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    content: String,
    col_span: usize,
    align: Align,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            col_span: 1,
            align: Align::Left,
        }
    }

    /// Makes the cell span `columns` columns (at least one).
    pub fn span(mut self, columns: usize) -> Self {
        self.col_span = columns.max(1);
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn col_span(&self) -> usize {
        self.col_span
    }

    pub fn align(&self) -> Align {
        self.align
    }

    fn lines(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }

    fn width(&self) -> usize {
        self.lines().into_iter().map(display_width).max().unwrap_or(0)
    }
}

impl From<String> for Cell {
    fn from(content: String) -> Self {
        Cell::new(content)
    }
}

impl From<&str> for Cell {
    fn from(content: &str) -> Self {
        Cell::new(content)
    }
}

/// A box-drawn table.
///
/// A table with a header row renders as a grid; a table without one is the
/// key/value layout used for single resources.
#[derive(Debug, Clone, Default)]
pub struct Table {
    head: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates a headerless table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_head<I, S>(head: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            head: head.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn head(&self) -> &[String] {
        &self.head
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push<I, C>(&mut self, row: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Pushes the placeholder row: `none`, centered, spanning every column.
    pub fn push_none(&mut self) {
        let span = self.head.len().max(1);
        self.rows.push(vec![Cell::new(NONE).span(span).centered()]);
    }

    /// Number of columns: the widest of the header and every row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::col_span).sum::<usize>())
            .chain(std::iter::once(self.head.len()))
            .max()
            .unwrap_or(0)
    }

    /// Renders the table. An entirely empty table renders as an empty string.
    pub fn render(&self, painter: &Painter) -> String {
        let columns = self.column_count();
        if columns == 0 {
            return String::new();
        }

        let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(self.rows.len() + 1);
        if !self.head.is_empty() {
            grid.push(
                self.head
                    .iter()
                    .map(|h| Cell::new(painter.paint(HEAD_STYLE, h)))
                    .collect(),
            );
        }
        grid.extend(self.rows.iter().map(|row| fill_row(row, columns)));

        let widths = column_widths(&grid, columns);
        let mut out = String::new();

        let mut above: Option<Vec<bool>> = None;
        for row in &grid {
            let below = boundaries(row, columns);
            let (left, right) = match above {
                None => ('┌', '┐'),
                Some(_) => ('├', '┤'),
            };
            out.push_str(&border(
                &widths,
                above.as_deref(),
                Some(below.as_slice()),
                left,
                right,
            ));
            out.push_str(&row_lines(row, &widths));
            above = Some(below);
        }
        out.push_str(&border(&widths, above.as_deref(), None, '└', '┘'));

        // Trailing newline belongs to the caller.
        out.pop();
        out
    }
}

fn display_width(text: &str) -> usize {
    console::strip_ansi_codes(text).as_ref().width()
}

/// Extends the last cell so that every row covers all columns.
fn fill_row(row: &[Cell], columns: usize) -> Vec<Cell> {
    let mut row = row.to_vec();
    if row.is_empty() {
        row.push(Cell::new(""));
    }
    let used: usize = row.iter().map(Cell::col_span).sum();
    if used < columns {
        if let Some(last) = row.last_mut() {
            last.col_span += columns - used;
        }
    }
    row
}

/// Inner width of each column (content only, padding excluded).
fn column_widths(grid: &[Vec<Cell>], columns: usize) -> Vec<usize> {
    let mut widths = vec![0; columns];

    for row in grid {
        let mut col = 0;
        for cell in row {
            if cell.col_span == 1 {
                widths[col] = widths[col].max(cell.width());
            }
            col += cell.col_span;
        }
    }

    for row in grid {
        let mut col = 0;
        for cell in row {
            if cell.col_span > 1 {
                let available = spanned_width(&widths[col..col + cell.col_span]);
                let needed = cell.width();
                if needed > available {
                    widths[col + cell.col_span - 1] += needed - available;
                }
            }
            col += cell.col_span;
        }
    }

    widths
}

/// Width available to a cell spanning `widths`, counting the swallowed
/// inner borders and their padding.
fn spanned_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)
}

/// For columns `1..columns`, whether a cell of `row` starts there.
fn boundaries(row: &[Cell], columns: usize) -> Vec<bool> {
    let mut starts = vec![false; columns];
    let mut col = 0;
    for cell in row {
        if col > 0 && col < columns {
            starts[col] = true;
        }
        col += cell.col_span;
    }
    starts
}

fn border(
    widths: &[usize],
    above: Option<&[bool]>,
    below: Option<&[bool]>,
    left: char,
    right: char,
) -> String {
    let mut line = String::new();
    line.push(left);
    for (col, width) in widths.iter().enumerate() {
        if col > 0 {
            let a = above.is_some_and(|b| b[col]);
            let b = below.is_some_and(|b| b[col]);
            line.push(match (a, b) {
                (true, true) => '┼',
                (false, true) => '┬',
                (true, false) => '┴',
                (false, false) => '─',
            });
        }
        line.push_str(&"─".repeat(width + 2));
    }
    line.push(right);
    line.push('\n');
    line
}

fn row_lines(row: &[Cell], widths: &[usize]) -> String {
    let cell_lines: Vec<Vec<&str>> = row.iter().map(Cell::lines).collect();
    let height = cell_lines.iter().map(Vec::len).max().unwrap_or(1);

    let mut out = String::new();
    for i in 0..height {
        out.push('│');
        let mut col = 0;
        for (cell, lines) in row.iter().zip(&cell_lines) {
            let width = spanned_width(&widths[col..col + cell.col_span]);
            let text = lines.get(i).copied().unwrap_or("");
            out.push(' ');
            out.push_str(&align(text, width, cell.align));
            out.push(' ');
            out.push('│');
            col += cell.col_span;
        }
        out.push('\n');
    }
    out
}

fn align(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(display_width(text));
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
    }
}
