use crate::artifacts::report::file_record::FileRecord;

// Column widths in the header are cosmetic and intentionally not aligned
// with the data rows.
const HEADER_ROW: &str = "| State       | Name         | Type        | Path                     |";
const SEPARATOR_ROW: &str = "|-------------|--------------|-------------|--------------------------|";

/// Renders the record sequence as a Markdown pipe-table, one data row per
/// record in the given order.
///
/// Fields are interpolated verbatim; pipe and backtick characters in
/// filenames are not escaped, which breaks the table for such names. Known
/// limitation, kept for parity with the report consumers that already
/// exist.
pub fn render_table(records: &[FileRecord]) -> String {
    let mut rows = vec![HEADER_ROW.to_string(), SEPARATOR_ROW.to_string()];

    rows.extend(records.iter().map(|record| {
        format!(
            "| {} | {} | {} | {} |",
            record.state,
            record.name,
            record.metadata_type,
            record.path.display()
        )
    }));

    rows.join("\n")
}
