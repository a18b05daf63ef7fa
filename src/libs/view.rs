use crate::libs::listing::AttendanceRow;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn attendance(rows: &[AttendanceRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "START", "END", "BREAK", "STATUS", "NOTE"]);
        for attendance_row in rows {
            let date = if attendance_row.is_today {
                format!("* {}", attendance_row.display_date)
            } else {
                attendance_row.display_date.clone()
            };
            table.add_row(row![
                date,
                attendance_row.start_time,
                attendance_row.end_time,
                attendance_row.blank_time,
                attendance_row.status_label,
                attendance_row.note
            ]);
        }
        table.printstd();

        Ok(())
    }
}
