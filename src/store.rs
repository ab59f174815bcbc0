// src/store.rs
//! The forecast spreadsheet: one worksheet, header row first, one reading per row.
//! Every save rewrites the whole workbook (read, append, write).

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Format, Workbook};

use crate::config::consts::SHEET_NAME;
use crate::reading::WeatherReading;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Default for Sheet {
    fn default() -> Self {
        Self { headers: WeatherReading::headers(), rows: Vec::new() }
    }
}

impl Sheet {
    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn push(&mut self, reading: &WeatherReading) {
        self.rows.push(reading.to_row());
    }

    /// Rows that parse as readings, in file order.
    pub fn readings(&self) -> Vec<WeatherReading> {
        self.rows.iter().filter_map(|r| WeatherReading::from_row(r)).collect()
    }
}

/// Load the whole sheet. A missing file is an empty sheet, not an error.
pub fn load_sheet(path: &Path) -> Result<Sheet, Box<dyn Error>> {
    if !path.exists() {
        logd!("Store: {} not found, starting empty", path.display());
        return Ok(Sheet::default());
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r?,
        None => return Ok(Sheet::default()),
    };

    let mut iter = range.rows();
    let headers: Vec<String> = match iter.next() {
        Some(first) => first.iter().map(cell_text).collect(),
        None => return Ok(Sheet::default()),
    };
    let width = headers.len();

    let mut rows = Vec::new();
    for row in iter {
        let mut cells: Vec<String> = row.iter().map(cell_text).collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        if cells.len() < width {
            cells.resize(width, s!());
        }
        rows.push(cells);
    }

    let expected = WeatherReading::headers();
    if headers != expected {
        logw!("Store: unexpected headers {:?} in {}", headers, path.display());
    }

    logd!("Store: loaded {} row(s) from {}", rows.len(), path.display());
    Ok(Sheet { headers, rows })
}

/// Text form of a cell. Numbers written by other tools come back as `22`, not `22.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        other => other.to_string(),
    }
}

/// Overwrite `path` with `sheet`: write a sibling temp file, then rename over.
pub fn save_sheet(path: &Path, sheet: &Sheet) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (c, h) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, u16::try_from(c)?, h, &bold)?;
    }
    for (r, row) in sheet.rows.iter().enumerate() {
        let r = u32::try_from(r + 1)?;
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet.write_string(r, u16::try_from(c)?, value)?;
        }
    }

    let tmp = temp_path(path);
    workbook.save(&tmp)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

/// Read-merge-write one reading. Returns the data row count after the append.
pub fn append_reading(path: &Path, reading: &WeatherReading) -> Result<usize, Box<dyn Error>> {
    let mut sheet = load_sheet(path)?;
    sheet.push(reading);
    save_sheet(path, &sheet)?;
    logf!(
        "Store: appended {:?} → {} (rows={})",
        reading.to_row(),
        path.display(),
        sheet.row_count()
    );
    Ok(sheet.row_count())
}

pub fn load_readings(path: &Path) -> Result<Vec<WeatherReading>, Box<dyn Error>> {
    Ok(load_sheet(path)?.readings())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!("sheet.xlsx"));
    path.with_file_name(join!(".", &name, ".tmp"))
}
