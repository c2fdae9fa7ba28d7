use crate::export::model::RecordExport;
use csv::Writer;

/// Write the rows as CSV to the given path.
pub fn write_csv(path: &str, rows: &[RecordExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
