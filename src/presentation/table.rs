use colored::Colorize;
use std::fmt;

use crate::api::schedule_dto::ScheduleRowDto;
use crate::domain::assignment::Assignment;

/// Timestamp layout expected by the schedule table.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const HEADERS: [&str; 5] = ["Ship", "Berth", "Start", "End", "Containers"];

/// Tabular view of a schedule, one row per assignment in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTable {
    pub rows: Vec<ScheduleRowDto>,
}

impl ScheduleTable {
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        ScheduleTable { rows: assignments.iter().map(row_from_assignment).collect() }
    }

    fn column_widths(&self) -> [usize; 5] {
        let mut widths = HEADERS.map(str::len);
        for row in &self.rows {
            let cells = cells(row);
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

pub fn row_from_assignment(assignment: &Assignment) -> ScheduleRowDto {
    ScheduleRowDto {
        ship: assignment.ship_name.clone(),
        berth: assignment.berth_label(),
        start: assignment.start.format(TIMESTAMP_FORMAT).to_string(),
        end: assignment.end.format(TIMESTAMP_FORMAT).to_string(),
        containers: assignment.containers,
    }
}

fn cells(row: &ScheduleRowDto) -> [String; 5] {
    [row.ship.clone(), row.berth.clone(), row.start.clone(), row.end.clone(), row.containers.to_string()]
}

impl fmt::Display for ScheduleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        let header: Vec<String> = HEADERS.iter().zip(widths).map(|(name, width)| format!("{:<width$}", name, width = width)).collect();
        writeln!(f, "{}", header.join("  ").as_str().bold())?;

        for row in &self.rows {
            let line: Vec<String> = cells(row).iter().zip(widths).map(|(cell, width)| format!("{:<width$}", cell, width = width)).collect();
            writeln!(f, "{}", line.join("  ").trim_end())?;
        }

        Ok(())
    }
}
