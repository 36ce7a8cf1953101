// src/reference.rs

use crate::error::{ClassLogError, Result};
use crate::models::SheetNames;
use crate::workbook::Workbook;
use tracing::debug;

/// 读取参考表第一列（不跳过表头）
pub fn load_reference_list<W: Workbook + ?Sized>(workbook: &W, sheet: &str) -> Result<Vec<String>> {
    let values = workbook
        .col_values(sheet, 1)
        .map_err(|e| ClassLogError::BackendUnavailable(e.to_string()))?;
    debug!(sheet, count = values.len(), "loaded reference list");
    Ok(values)
}

/// 两个视图共用的选项列表，会话期间不变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub teachers: Vec<String>,
    pub students: Vec<String>,
    pub categories: Vec<String>,
}

impl ReferenceData {
    pub fn load<W: Workbook + ?Sized>(workbook: &W, sheets: &SheetNames) -> Result<Self> {
        Ok(Self {
            teachers: load_reference_list(workbook, &sheets.teachers)?,
            students: load_reference_list(workbook, &sheets.students)?,
            categories: load_reference_list(workbook, &sheets.categories)?,
        })
    }
}
