// src/frontend.rs

use crate::error::{ClassLogError, Result};
use crate::filter::{DateRange, FilterCriteria};
use crate::logs::parse_date;
use crate::models::{LogRecord, NewEntry, LOG_COLUMNS};
use crate::reference::ReferenceData;
use crate::session::{Frontend, View};
use chrono::{Local, NaiveDate};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use std::env;
use std::io::Write;
use std::process::Command;

const OPEN_EDITOR: &str = ".";

fn prompt_err(e: dialoguer::Error) -> ClassLogError {
    ClassLogError::Prompt(e.to_string())
}

/// 基于终端提示的表单
#[derive(Debug, Default)]
pub struct TerminalFrontend;

impl TerminalFrontend {
    pub fn new() -> Self {
        Self
    }

    fn pick_many(&self, prompt: &str, items: &[String], selected: &[String]) -> Result<Vec<String>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let defaults: Vec<bool> = items.iter().map(|i| selected.contains(i)).collect();
        let picked = MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(&defaults)
            .interact()
            .map_err(prompt_err)?;
        Ok(picked.into_iter().map(|i| items[i].clone()).collect())
    }

    fn date_input(&self, prompt: &str, initial: Option<NaiveDate>) -> Result<Option<NaiveDate>> {
        let text: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(initial.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                if input.trim().is_empty() || parse_date(input).is_some() {
                    Ok(())
                } else {
                    Err("Use YYYY-MM-DD".to_string())
                }
            })
            .interact_text()
            .map_err(prompt_err)?;
        Ok(parse_date(&text))
    }
}

impl Frontend for TerminalFrontend {
    fn select_view(&mut self, current: View) -> Result<Option<View>> {
        let mut items: Vec<&str> = View::ALL.iter().map(|v| v.label()).collect();
        items.push("Quit");
        let default = View::ALL.iter().position(|v| *v == current).unwrap_or(0);

        println!();
        let choice = Select::new()
            .with_prompt("Go to")
            .items(&items[..])
            .default(default)
            .interact_opt()
            .map_err(prompt_err)?;
        Ok(choice.and_then(|i| View::ALL.get(i).copied()))
    }

    fn entry_form(&mut self, refs: &ReferenceData, draft: Option<&NewEntry>) -> Result<Option<NewEntry>> {
        println!("\n== Add New Task/Event ==");
        if refs.categories.is_empty() {
            println!("No categories available. Add some with `classlog seed categories <NAME>`.");
            return Ok(None);
        }

        let today = Local::now().date_naive();
        let date = self
            .date_input("Date", Some(draft.map_or(today, |d| d.date)))?
            .unwrap_or(today);

        let title: String = Input::new()
            .with_prompt("Title (Optional)")
            .with_initial_text(draft.map(|d| d.title.clone()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let previous = draft.map(|d| d.description.clone()).unwrap_or_default();
        let prompt = if previous.contains('\n') {
            format!("Description (multi-line kept, Enter to keep, '{}' to edit)", OPEN_EDITOR)
        } else {
            format!("Description ('{}' opens $EDITOR)", OPEN_EDITOR)
        };
        let typed: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(description_initial_text(&previous))
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;
        let description = match resolve_description(&previous, typed) {
            Some(text) => text,
            None => match edit_text(&previous) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("{}", e);
                    previous
                }
            },
        };

        let teachers = self.pick_many(
            "Teacher (Optional)",
            &refs.teachers,
            draft.map(|d| d.teachers.as_slice()).unwrap_or(&[]),
        )?;
        let students = self.pick_many(
            "Student (Optional)",
            &refs.students,
            draft.map(|d| d.students.as_slice()).unwrap_or(&[]),
        )?;

        let category_idx = draft
            .and_then(|d| refs.categories.iter().position(|c| *c == d.category))
            .unwrap_or(0);
        let category_idx = Select::new()
            .with_prompt("Category")
            .items(refs.categories.as_slice())
            .default(category_idx)
            .interact()
            .map_err(prompt_err)?;

        let save = Confirm::new()
            .with_prompt("Save Entry?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;
        if !save {
            println!("Cancelled.");
            return Ok(None);
        }

        Ok(Some(NewEntry {
            date,
            title,
            description,
            teachers,
            students,
            category: refs.categories[category_idx].clone(),
        }))
    }

    fn filter_form(&mut self, refs: &ReferenceData, records: &[LogRecord]) -> Result<FilterCriteria> {
        println!("\n== Filters ==");
        let teachers = self.pick_many("Filter by Teacher", &refs.teachers, &[])?;
        let students = self.pick_many("Filter by Student", &refs.students, &[])?;
        let categories = self.pick_many("Filter by Category", &refs.categories, &[])?;

        let (min, max) = match DateRange::spanning(records) {
            DateRange::Between(s, e) => (Some(s), Some(e)),
            _ => (None, None),
        };
        let start = self.date_input("From (blank for no limit)", min)?;
        let end = self.date_input("To (blank for no limit)", max)?;

        Ok(FilterCriteria {
            teachers,
            students,
            categories,
            date_range: DateRange::from_endpoints(start, end),
        })
    }

    fn show_logs(&mut self, records: &[LogRecord]) {
        println!("\n== All Logs ==");
        if records.is_empty() {
            println!("No entries match the current filters.");
            return;
        }
        print!("{}", render_table(records));
        println!("{} entries", records.len());
    }

    fn success(&mut self, message: &str) {
        println!("✓ {}", message);
    }

    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, err: &ClassLogError) {
        eprintln!("Error: {}", err);
    }
}

// 多行描述无法放进单行输入框，保持为空
fn description_initial_text(previous: &str) -> &str {
    if previous.contains('\n') {
        ""
    } else {
        previous
    }
}

/// 根据输入得到描述；None 表示需要打开编辑器
fn resolve_description(previous: &str, typed: String) -> Option<String> {
    if typed.trim() == OPEN_EDITOR {
        None
    } else if typed.is_empty() && previous.contains('\n') {
        Some(previous.to_string())
    } else {
        Some(typed)
    }
}

/// 用 $EDITOR 编辑一段文本
fn edit_text(initial: &str) -> Result<String> {
    let mut temp_file = tempfile::NamedTempFile::new()?;
    temp_file.write_all(initial.as_bytes())?;
    temp_file.flush()?;

    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor).arg(temp_file.path()).status()?;
    if !status.success() {
        return Err(ClassLogError::EditorError);
    }

    let text = std::fs::read_to_string(temp_file.path())?;
    Ok(text.trim_end().to_string())
}

/// 把记录排成对齐的文本表格
pub fn render_table(records: &[LogRecord]) -> String {
    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.date.format("%Y-%m-%d").to_string(),
                r.title.clone(),
                r.description.replace(['\r', '\n'], " "),
                r.teachers.clone(),
                r.students.clone(),
                r.category.clone(),
            ]
        })
        .collect();

    let mut widths = LOG_COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[&str]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect();
        format!("{}\n", padded.join(" │ ").trim_end())
    };

    let mut out = format_line(&LOG_COLUMNS[..]);
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push_str(&rule.join("─┼─"));
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_line(&cells[..]));
    }
    out
}
