//! Projection of train entries into display rows.

use crate::domain::{SeatCategory, TrainEntry, format_duration};

use super::table::{Cell, Table, Tone};

/// Which columns the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Common seat classes, availability only.
    Basic,
    /// Every seat class, availability and price.
    #[default]
    Priced,
}

const BASIC_SEATS: &[SeatCategory] = &[
    SeatCategory::First,
    SeatCategory::Second,
    SeatCategory::SoftSleeper,
    SeatCategory::HardSleeper,
    SeatCategory::HardSeat,
    SeatCategory::NoSeat,
];

impl DisplayMode {
    /// Seat categories shown, in column order.
    pub fn seat_columns(self) -> &'static [SeatCategory] {
        match self {
            DisplayMode::Basic => BASIC_SEATS,
            DisplayMode::Priced => &SeatCategory::ALL,
        }
    }

    /// Whether prices are shown (and therefore need fetching).
    pub fn shows_prices(self) -> bool {
        matches!(self, DisplayMode::Priced)
    }

    /// Column headings.
    pub fn header(self) -> Vec<&'static str> {
        let mut header = vec!["车次", "车站", "时间", "历时"];
        header.extend(self.seat_columns().iter().map(|c| c.label()));
        header
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Columns to show.
    pub mode: DisplayMode,
    /// Color origin/departure green and destination/arrival red.
    pub color: bool,
}

impl RenderConfig {
    /// Set the display mode.
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Priced,
            color: true,
        }
    }
}

/// Project one entry into a row of cells.
pub fn train_row(entry: &TrainEntry, mode: DisplayMode) -> Vec<Cell> {
    let mut row = vec![
        Cell::text(&entry.train_code),
        Cell::default()
            .line(entry.from_station_name(), Some(Tone::Green))
            .line(entry.to_station_name(), Some(Tone::Red)),
        Cell::default()
            .line(&entry.start_time, Some(Tone::Green))
            .line(&entry.end_time, Some(Tone::Red)),
        Cell::text(format_duration(&entry.duration)),
    ];

    for &category in mode.seat_columns() {
        let mut cell = Cell::text(entry.seats.get(category));
        if mode.shows_prices() {
            cell = cell.line(entry.prices.get(category), None);
        }
        row.push(cell);
    }

    row
}

/// Build the table for a set of entries.
pub fn train_table(entries: &[TrainEntry], mode: DisplayMode) -> Table {
    let mut table = Table::new(mode.header());
    for entry in entries {
        table.add_row(train_row(entry, mode));
    }
    table
}

/// Render entries as a table string.
pub fn render_trains(entries: &[TrainEntry], config: &RenderConfig) -> String {
    train_table(entries, config.mode).render(config.color)
}
