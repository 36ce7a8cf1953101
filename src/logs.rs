// src/logs.rs

use crate::error::{ClassLogError, Result};
use crate::models::{LogRecord, LogView, LOG_COLUMNS};
use crate::workbook::Workbook;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// 解析单元格中的日期，带时间的取日期部分
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// 检查表头是否与 LOG_COLUMNS 完全一致
fn check_header(header: &[String]) -> Result<()> {
    if header.iter().map(String::as_str).ne(LOG_COLUMNS) {
        return Err(ClassLogError::SchemaMismatch {
            expected: LOG_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found: header.to_vec(),
        });
    }
    Ok(())
}

/// 读取日志表全部记录
pub fn load_logs<W: Workbook + ?Sized>(workbook: &W, log_sheet: &str) -> Result<LogView> {
    let values = workbook
        .get_all_values(log_sheet)
        .map_err(|e| ClassLogError::BackendUnavailable(e.to_string()))?;

    let mut rows = values.into_iter();
    let Some(header) = rows.next() else {
        return Ok(LogView::Empty);
    };
    check_header(&header)?;

    let mut records = Vec::new();
    // 表头是第 1 行
    for (idx, mut cells) in rows.enumerate() {
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        cells.resize(LOG_COLUMNS.len(), String::new());
        let mut cells = cells.into_iter();
        let mut next = || cells.next().unwrap_or_default();

        let raw_date = next();
        let date = parse_date(&raw_date).ok_or(ClassLogError::MalformedDate {
            row: idx + 2,
            value: raw_date.clone(),
        })?;
        records.push(LogRecord {
            date,
            title: next(),
            description: next(),
            teachers: next(),
            students: next(),
            category: next(),
        });
    }

    debug!(sheet = log_sheet, records = records.len(), "loaded logs");
    if records.is_empty() {
        Ok(LogView::Empty)
    } else {
        Ok(LogView::Rows(records))
    }
}
