// src/entry.rs

use crate::error::{ClassLogError, Result};
use crate::models::NewEntry;
use crate::workbook::Workbook;
use tracing::{info, warn};

/// 追加一行到日志表。重复提交会产生重复行。
pub fn submit_entry<W: Workbook + ?Sized>(workbook: &W, log_sheet: &str, entry: &NewEntry) -> Result<()> {
    if entry.category.trim().is_empty() {
        return Err(ClassLogError::InvalidInput(
            "A category must be selected".to_string(),
        ));
    }

    if let Err(e) = workbook.append_row(log_sheet, &entry.to_row()) {
        warn!(sheet = log_sheet, error = %e, "append failed");
        return Err(ClassLogError::BackendWrite(e.to_string()));
    }

    info!(sheet = log_sheet, date = %entry.date, category = %entry.category, "entry saved");
    Ok(())
}
