// src/filter.rs

use crate::models::LogRecord;
use chrono::NaiveDate;

/// 日期范围选择的状态。只选了一端时不做限制。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    Unset,
    Partial(NaiveDate),
    Between(NaiveDate, NaiveDate),
}

impl DateRange {
    /// 由两个可选端点构造
    pub fn from_endpoints(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) => DateRange::Between(s, e),
            (Some(d), None) | (None, Some(d)) => DateRange::Partial(d),
            (None, None) => DateRange::Unset,
        }
    }

    /// 覆盖全部记录的范围，作为筛选控件的初始值
    pub fn spanning(records: &[LogRecord]) -> Self {
        let min = records.iter().map(|r| r.date).min();
        let max = records.iter().map(|r| r.date).max();
        Self::from_endpoints(min, max)
    }

    /// 两端都有时返回闭区间
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            DateRange::Between(s, e) => Some((s, e)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub teachers: Vec<String>,
    pub students: Vec<String>,
    pub categories: Vec<String>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn is_unrestricted(&self) -> bool {
        self.teachers.is_empty()
            && self.students.is_empty()
            && self.categories.is_empty()
            && self.date_range.bounds().is_none()
    }
}

// 子串匹配：选中 "Ann" 也会命中 "Anna"
fn contains_any(field: &str, selected: &[String]) -> bool {
    selected.iter().any(|name| field.contains(name.as_str()))
}

/// 按条件依次收窄，保持原有顺序
pub fn apply_filters(records: Vec<LogRecord>, criteria: &FilterCriteria) -> Vec<LogRecord> {
    let mut records = records;

    if !criteria.teachers.is_empty() {
        records.retain(|r| contains_any(&r.teachers, &criteria.teachers));
    }
    if !criteria.students.is_empty() {
        records.retain(|r| contains_any(&r.students, &criteria.students));
    }
    if !criteria.categories.is_empty() {
        records.retain(|r| criteria.categories.contains(&r.category));
    }
    if let Some((start, end)) = criteria.date_range.bounds() {
        records.retain(|r| start <= r.date && r.date <= end);
    }

    records
}
