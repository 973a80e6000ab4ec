use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::presentation::table::ScheduleTable;

/// Writes the schedule table as `;`-separated CSV with a header row.
pub fn write_csv<W: Write>(table: &ScheduleTable, writer: W) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    for row in &table.rows {
        csv_wtr.serialize(row)?;
    }

    // An empty table still gets its header.
    if table.rows.is_empty() {
        csv_wtr.write_record(["Ship", "Berth", "Start", "End", "Containers"])?;
    }

    csv_wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(table: &ScheduleTable, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(table, file)?;
    log::info!("Schedule with {} rows written to '{}'.", table.rows.len(), path.display());
    Ok(())
}
