// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::week_report::WeekReport;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Write one worksheet per week report, named after the week number.
pub fn export_weeks_xlsx(reports: &[WeekReport], path: &Path, show_nickname: bool) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    for report in reports {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(report.week.to_string())
            .map_err(to_export_error)?;
        write_week_sheet(worksheet, report, show_nickname)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_week_sheet(
    worksheet: &mut Worksheet,
    report: &WeekReport,
    show_nickname: bool,
) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let headers = report.header(show_nickname);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let first_hour_col = headers.len() - report.days.len();

    // ---------------------------
    // Rows: project cells as text, hours as numbers
    // ---------------------------
    for (row_index, line) in report.to_matrix(show_nickname).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };
        let hours = &report.rows[row_index].hours;

        for (col, value) in line.iter().enumerate() {
            if col >= first_hour_col {
                let fmt = Format::new()
                    .set_align(FormatAlign::Right)
                    .set_num_format("0.00")
                    .set_background_color(band)
                    .set_pattern(FormatPattern::Solid)
                    .set_border(FormatBorder::Thin);
                worksheet
                    .write_with_format(row, col as u16, hours[col - first_hour_col], &fmt)
                    .map_err(to_export_error)?;
            } else {
                let fmt = Format::new()
                    .set_background_color(band)
                    .set_pattern(FormatPattern::Solid)
                    .set_border(FormatBorder::Thin);
                worksheet
                    .write_with_format(row, col as u16, value.as_str(), &fmt)
                    .map_err(to_export_error)?;
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
