use crate::record::RawRow;
use csv::ReaderBuilder;
use std::io::Read;

/// read all rows of a delimited source, skipping the header line.
///
/// Rows with an unexpected number of fields are passed on as they are,
/// the validator rejects them. Invalid UTF-8 is replaced, not an error.
pub fn read_rows<R: Read>(reader: R) -> eyre::Result<Vec<RawRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.byte_records() {
        let record = result?;
        rows.push(RawRow::new(
            record.iter().map(|field| String::from_utf8_lossy(field)),
        ));
    }
    Ok(rows)
}
