use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use study_core::model::{DeadlineUrgency, LabStatus, ScoreBand};

pub(crate) fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    table
}

pub(crate) fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub(crate) fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub(crate) fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub(crate) fn lab_status_cell(status: LabStatus) -> Cell {
    let color = match status {
        LabStatus::Low => Color::Blue,
        LabStatus::Normal => Color::Green,
        LabStatus::High => Color::Red,
    };
    Cell::new(status).fg(color)
}

pub(crate) fn band_cell(percentage: u8) -> Cell {
    let band = ScoreBand::from_percentage(percentage);
    let color = match band {
        ScoreBand::Strong => Color::Green,
        ScoreBand::Passing => Color::Yellow,
        ScoreBand::Failing => Color::Red,
    };
    Cell::new(format!("{percentage}%")).fg(color)
}

pub(crate) fn urgency_cell(text: String, urgency: DeadlineUrgency) -> Cell {
    let color = match urgency {
        DeadlineUrgency::Urgent => Color::Red,
        DeadlineUrgency::Soon => Color::Yellow,
        DeadlineUrgency::Later => Color::Green,
    };
    Cell::new(text).fg(color)
}

/// Fixed-width text progress bar, e.g. `[#####-----] 50%`.
pub(crate) fn progress_bar(percent: u8, width: usize) -> String {
    let filled = usize::from(percent.min(100)) * width / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(width - filled)
    )
}
