// src/workbook.rs

use crate::error::{ClassLogError, Result};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 表格式存储：若干具名工作表，每行是一组字符串单元格
pub trait Workbook {
    /// 所有工作表标题，按创建顺序
    fn worksheet_titles(&self) -> Result<Vec<String>>;

    /// 读取整张工作表（包括表头行）
    fn get_all_values(&self, sheet: &str) -> Result<Vec<Vec<String>>>;

    /// 读取某一列（从 1 开始），末尾的空单元格会被去掉
    fn col_values(&self, sheet: &str, col: usize) -> Result<Vec<String>> {
        if col == 0 {
            return Err(ClassLogError::InvalidInput(
                "Column numbers start at 1".to_string(),
            ));
        }
        let mut values: Vec<String> = self
            .get_all_values(sheet)?
            .into_iter()
            .map(|mut row| {
                if row.len() >= col {
                    row.swap_remove(col - 1)
                } else {
                    String::new()
                }
            })
            .collect();
        while values.last().is_some_and(|v| v.is_empty()) {
            values.pop();
        }
        Ok(values)
    }

    /// 在工作表末尾追加一行
    fn append_row(&self, sheet: &str, cells: &[String]) -> Result<()>;
}

/// 以 SQLite 文件保存的工作簿
pub struct SqliteWorkbook {
    conn: Connection,
    path: PathBuf,
}

impl SqliteWorkbook {
    /// 打开已有的工作簿，文件不存在时不会创建
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
            .map_err(|e| {
                ClassLogError::BackendUnavailable(format!(
                    "cannot open workbook {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let has_schema: bool = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('worksheets', 'rows')",
                [],
                |row| row.get::<_, i64>(0),
            )
            .map(|n| n == 2)
            .map_err(|e| ClassLogError::BackendUnavailable(e.to_string()))?;
        if !has_schema {
            return Err(ClassLogError::BackendUnavailable(format!(
                "{} is not a classlog workbook (run `classlog init`)",
                path.display()
            )));
        }

        debug!(path = %path.display(), "opened workbook");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// 创建工作簿（已存在则直接打开），并确保表结构存在
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS worksheets (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL UNIQUE
            );
            CREATE TABLE IF NOT EXISTS rows (
                id INTEGER PRIMARY KEY,
                worksheet_id INTEGER NOT NULL REFERENCES worksheets(id),
                cells TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS rows_by_worksheet ON rows (worksheet_id, id);",
        )?;
        debug!(path = %path.display(), "created workbook");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 新建工作表；已存在时返回 false
    pub fn add_worksheet(&self, title: &str) -> Result<bool> {
        let count = self.conn.execute(
            "INSERT OR IGNORE INTO worksheets (title) VALUES (?1)",
            params![title],
        )?;
        Ok(count > 0)
    }

    fn worksheet_id(&self, title: &str) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT id FROM worksheets WHERE title = ?1",
                [title],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| ClassLogError::WorksheetNotFound(title.to_string()))
    }
}

impl Workbook for SqliteWorkbook {
    fn worksheet_titles(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title FROM worksheets ORDER BY id")?;
        let titles = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(titles)
    }

    fn get_all_values(&self, sheet: &str) -> Result<Vec<Vec<String>>> {
        let id = self.worksheet_id(sheet)?;
        let mut stmt = self
            .conn
            .prepare("SELECT cells FROM rows WHERE worksheet_id = ?1 ORDER BY id")?;
        let raw = stmt
            .query_map([id], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut rows = Vec::with_capacity(raw.len());
        for cells in raw {
            rows.push(serde_json::from_str::<Vec<String>>(&cells)?);
        }
        debug!(sheet, rows = rows.len(), "read worksheet");
        Ok(rows)
    }

    fn append_row(&self, sheet: &str, cells: &[String]) -> Result<()> {
        let id = self.worksheet_id(sheet)?;
        let encoded = serde_json::to_string(cells)?;
        self.conn.execute(
            "INSERT INTO rows (worksheet_id, cells) VALUES (?1, ?2)",
            params![id, encoded],
        )?;
        debug!(sheet, cells = cells.len(), "appended row");
        Ok(())
    }
}
