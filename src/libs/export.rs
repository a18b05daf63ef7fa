//! Attendance sheet export for external analysis and backup.
//!
//! Writes the display projection to CSV, JSON, or Excel. The exported rows
//! are the same pre-formatted strings the table view shows, so every format
//! agrees on dates, durations, and labels.

use crate::libs::listing::AttendanceRow;
use anyhow::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON preserving types and structure.
    Json,
    /// Excel workbook with a formatted header row.
    Excel,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Exporter { format, output_path }
    }

    /// Writes the rows and returns the path written to. The default file
    /// name carries the date the export was taken.
    pub fn export(&self, rows: &[AttendanceRow], date: NaiveDate) -> Result<PathBuf> {
        let path = match &self.output_path {
            Some(path) => path.clone(),
            None => PathBuf::from(format!(
                "attendance_{}.{}",
                date.format("%Y%m%d"),
                self.format.extension()
            )),
        };
        match self.format {
            ExportFormat::Csv => self.export_csv(rows, &path)?,
            ExportFormat::Json => self.export_json(rows, &path)?,
            ExportFormat::Excel => self.export_excel(rows, &path)?,
        }
        Ok(path)
    }

    fn export_csv(&self, rows: &[AttendanceRow], path: &PathBuf) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[AttendanceRow], path: &PathBuf) -> Result<()> {
        let mut file = File::create(path)?;
        let json = serde_json::to_string_pretty(rows)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[AttendanceRow], path: &PathBuf) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let bold = Format::new().set_bold();

        let headers = ["Date", "Start", "End", "Break", "Status", "Note", "Today"];
        for (column, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, column as u16, *header, &bold)?;
        }

        for (index, row) in rows.iter().enumerate() {
            let line = index as u32 + 1;
            worksheet.write_string(line, 0, &row.training_date)?;
            worksheet.write_string(line, 1, &row.start_time)?;
            worksheet.write_string(line, 2, &row.end_time)?;
            worksheet.write_string(line, 3, &row.blank_time)?;
            worksheet.write_string(line, 4, &row.status_label)?;
            worksheet.write_string(line, 5, &row.note)?;
            worksheet.write_string(line, 6, if row.is_today { "yes" } else { "" })?;
        }

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}
