//! Reads exported workbooks back for assertions

use std::io::Cursor;
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        Data::Float(number) => number.to_string(),
        Data::Int(number) => number.to_string(),
        other => other.to_string(),
    }
}

/// Every row of the first sheet, cells rendered as text
pub fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec()))
        .expect("export should be a readable xlsx workbook");
    let range = workbook
        .worksheet_range_at(0)
        .expect("workbook should have a sheet")
        .expect("sheet should be readable");

    range.rows().map(|row| row.iter().map(cell_text).collect()).collect()
}
