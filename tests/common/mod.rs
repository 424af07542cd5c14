#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::{tempdir, TempDir};

/// A cell written into a fixture workbook.
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

pub fn write_workbook(path: &Path, header: &[&str], rows: &[Vec<Cell<'_>>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *name)
            .expect("write header");
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let written = match cell {
                Cell::Text(value) => sheet.write_string(r, col as u16, *value),
                Cell::Number(value) => sheet.write_number(r, col as u16, *value),
            };
            written.expect("write cell");
        }
    }

    workbook.save(path).expect("save workbook");
}

/// `Ausgabe | Titel` table with two issues.
pub fn leica_dataset() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("photo_antiquaria_index.xlsx");
    write_workbook(
        &path,
        &["Ausgabe", "Titel"],
        &[
            vec![Cell::Number(125.0), Cell::Text("Die Leica M3")],
            vec![Cell::Number(126.0), Cell::Text("Kodak Retina")],
        ],
    );
    (dir, path)
}
