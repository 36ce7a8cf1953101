// src/commands.rs

use crate::cli::ReferenceKind;
use crate::config::Config;
use crate::error::Result;
use crate::frontend::TerminalFrontend;
use crate::models::{SheetNames, LOG_COLUMNS};
use crate::session::Session;
use crate::workbook::{SqliteWorkbook, Workbook};
use std::path::Path;
use tracing::info;

/// 创建工作簿及四张工作表；日志表为空时写入表头
pub fn init_workbook(path: &Path, sheets: &SheetNames) -> Result<SqliteWorkbook> {
    let workbook = SqliteWorkbook::create(path)?;
    for title in [&sheets.teachers, &sheets.students, &sheets.categories, &sheets.log] {
        if workbook.add_worksheet(title)? {
            info!(sheet = %title, "created worksheet");
        }
    }
    if workbook.get_all_values(&sheets.log)?.is_empty() {
        let header: Vec<String> = LOG_COLUMNS.iter().map(|c| c.to_string()).collect();
        workbook.append_row(&sheets.log, &header)?;
    }
    Ok(workbook)
}

/// 处理 'init' 命令
pub fn handle_init(config: &Config) -> Result<()> {
    let workbook = init_workbook(&config.workbook, &config.sheets)?;
    println!("✓ Workbook ready at: {}", workbook.path().display());
    println!("  Sheets: {}", workbook.worksheet_titles()?.join(", "));

    let config_path = Config::config_path()?;
    if !config_path.exists() {
        config.save_to(&config_path)?;
        println!("✓ Config written to: {}", config_path.display());
    }
    Ok(())
}

/// 处理 'seed' 命令
pub fn handle_seed(config: &Config, kind: ReferenceKind, names: &[String]) -> Result<()> {
    let sheet = match kind {
        ReferenceKind::Teachers => &config.sheets.teachers,
        ReferenceKind::Students => &config.sheets.students,
        ReferenceKind::Categories => &config.sheets.categories,
    };

    let workbook = SqliteWorkbook::open(&config.workbook)?;
    for name in names {
        workbook.append_row(sheet, std::slice::from_ref(name))?;
    }
    println!("✓ Added {} name(s) to {}.", names.len(), sheet);
    Ok(())
}

/// 处理 'run' 命令（默认）
pub fn handle_run(config: &Config) -> Result<()> {
    let workbook = SqliteWorkbook::open(&config.workbook)?;
    let mut session = Session::start(&workbook, config.sheets.clone())?;
    let mut frontend = TerminalFrontend::new();
    session.run(&mut frontend)
}
