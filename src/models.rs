// src/models.rs

use chrono::NaiveDate;

/// 日志表的列，顺序即存储顺序
pub const LOG_COLUMNS: [&str; 6] = ["Date", "Title", "Description", "Teacher", "Student", "Category"];

/// 多选字段存储时使用的分隔符
pub const LIST_SEPARATOR: &str = ", ";

/// 待提交的一条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub teachers: Vec<String>,
    pub students: Vec<String>,
    pub category: String,
}

impl NewEntry {
    /// 按 LOG_COLUMNS 的顺序转为一行单元格
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.title.clone(),
            self.description.clone(),
            self.teachers.join(LIST_SEPARATOR),
            self.students.join(LIST_SEPARATOR),
            self.category.clone(),
        ]
    }
}

/// 从日志表读回的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub teachers: String, // 以 ", " 连接
    pub students: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogView {
    Empty,
    Rows(Vec<LogRecord>),
}

/// 各工作表的名称
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SheetNames {
    pub teachers: String,
    pub students: String,
    pub categories: String,
    pub log: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            teachers: "Teachers".to_string(),
            students: "Students".to_string(),
            categories: "Categories".to_string(),
            log: "2425".to_string(),
        }
    }
}
