//! Navigation shell driven by a scripted frontend.

use chrono::NaiveDate;
use classlog::commands::init_workbook;
use classlog::error::{ClassLogError, Result};
use classlog::filter::FilterCriteria;
use classlog::logs::load_logs;
use classlog::models::{LogRecord, LogView, NewEntry, SheetNames};
use classlog::reference::ReferenceData;
use classlog::session::{Frontend, Session, View, EMPTY_LOG_MESSAGE, SAVED_MESSAGE};
use classlog::workbook::{SqliteWorkbook, Workbook};
use std::collections::VecDeque;
use tempfile::{tempdir, TempDir};

#[derive(Default)]
struct Scripted {
    views: VecDeque<View>,
    forms: VecDeque<Option<NewEntry>>,
    filters: VecDeque<FilterCriteria>,
    drafts_seen: Vec<Option<NewEntry>>,
    shown: Vec<Vec<LogRecord>>,
    successes: Vec<String>,
    infos: Vec<String>,
    errors: Vec<String>,
}

impl Frontend for Scripted {
    fn select_view(&mut self, _current: View) -> Result<Option<View>> {
        Ok(self.views.pop_front())
    }

    fn entry_form(&mut self, _refs: &ReferenceData, draft: Option<&NewEntry>) -> Result<Option<NewEntry>> {
        self.drafts_seen.push(draft.cloned());
        Ok(self.forms.pop_front().flatten())
    }

    fn filter_form(&mut self, _refs: &ReferenceData, _records: &[LogRecord]) -> Result<FilterCriteria> {
        Ok(self.filters.pop_front().unwrap_or_default())
    }

    fn show_logs(&mut self, records: &[LogRecord]) {
        self.shown.push(records.to_vec());
    }

    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, err: &ClassLogError) {
        self.errors.push(err.to_string());
    }
}

fn setup() -> (TempDir, SqliteWorkbook, SheetNames) {
    let dir = tempdir().expect("Failed to create temp dir");
    let sheets = SheetNames::default();
    let workbook = init_workbook(&dir.path().join("classlog.db"), &sheets).unwrap();
    for name in ["Alice", "Bob", "Carol"] {
        workbook.append_row(&sheets.teachers, &[name.to_string()]).unwrap();
    }
    for name in ["Discipline", "Homework"] {
        workbook.append_row(&sheets.categories, &[name.to_string()]).unwrap();
    }
    (dir, workbook, sheets)
}

fn entry(day: u32, teacher: &str, category: &str) -> NewEntry {
    NewEntry {
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        title: String::new(),
        description: String::new(),
        teachers: vec![teacher.to_string()],
        students: vec![],
        category: category.to_string(),
    }
}

#[test]
fn session_starts_on_add_entry() {
    let (_dir, workbook, sheets) = setup();
    let mut session = Session::start(&workbook, sheets.clone()).unwrap();
    assert_eq!(session.reference_data().teachers, vec!["Alice", "Bob", "Carol"]);

    let mut ui = Scripted {
        forms: VecDeque::from([Some(entry(10, "Alice", "Discipline"))]),
        ..Default::default()
    };
    session.run(&mut ui).unwrap();

    assert_eq!(ui.drafts_seen, vec![None]);
    assert_eq!(ui.successes, vec![SAVED_MESSAGE]);
    assert!(session.draft().is_none());
    assert!(matches!(load_logs(&workbook, &sheets.log).unwrap(), LogView::Rows(r) if r.len() == 1));
}

#[test]
fn startup_fails_without_reference_sheets() {
    let dir = tempdir().unwrap();
    let workbook = SqliteWorkbook::create(&dir.path().join("book.db")).unwrap();
    let result = Session::start(&workbook, SheetNames::default());
    assert!(matches!(result, Err(ClassLogError::BackendUnavailable(_))));
}

#[test]
fn empty_log_shows_message_instead_of_table() {
    let (_dir, workbook, sheets) = setup();
    let mut session = Session::start(&workbook, sheets).unwrap();
    let mut ui = Scripted::default();

    session.render(View::ViewLogs, &mut ui).unwrap();
    assert_eq!(ui.infos, vec![EMPTY_LOG_MESSAGE]);
    assert!(ui.shown.is_empty());
}

#[test]
fn view_logs_rereads_and_filters_each_render() {
    let (_dir, workbook, sheets) = setup();
    let mut session = Session::start(&workbook, sheets).unwrap();
    let mut ui = Scripted {
        views: VecDeque::from([View::ViewLogs, View::AddEntry, View::ViewLogs]),
        forms: VecDeque::from([
            Some(entry(10, "Alice", "Discipline")),
            Some(entry(20, "Carol", "Homework")),
        ]),
        filters: VecDeque::from([
            FilterCriteria::default(),
            FilterCriteria {
                categories: vec!["Homework".to_string()],
                ..Default::default()
            },
        ]),
        ..Default::default()
    };

    session.run(&mut ui).unwrap();

    assert_eq!(ui.successes.len(), 2);
    assert_eq!(ui.shown.len(), 2);
    assert_eq!(ui.shown[0].len(), 1);
    assert_eq!(ui.shown[1].len(), 1);
    assert_eq!(ui.shown[1][0].teachers, "Carol");
}

#[test]
fn failed_save_keeps_the_draft_for_retry() {
    let (_dir, workbook, mut sheets) = setup();
    sheets.log = "Missing".to_string();
    let mut session = Session::start(&workbook, sheets).unwrap();

    let e = entry(10, "Alice", "Discipline");
    let mut ui = Scripted {
        forms: VecDeque::from([Some(e.clone()), None]),
        ..Default::default()
    };

    session.render(View::AddEntry, &mut ui).unwrap();
    assert_eq!(ui.errors.len(), 1);
    assert!(ui.errors[0].starts_with("Failed to save entry"));
    assert_eq!(session.draft(), Some(&e));

    // 下次打开表单时带着上次的内容
    session.render(View::AddEntry, &mut ui).unwrap();
    assert_eq!(ui.drafts_seen, vec![None, Some(e.clone())]);
    assert_eq!(session.draft(), Some(&e));
}

#[test]
fn malformed_date_blocks_only_the_log_view() {
    let (_dir, workbook, sheets) = setup();
    workbook
        .append_row(&sheets.log, &["32/13/2024".to_string(), String::new()])
        .unwrap();
    let mut session = Session::start(&workbook, sheets).unwrap();
    let mut ui = Scripted {
        views: VecDeque::from([View::ViewLogs, View::AddEntry]),
        forms: VecDeque::from([None, Some(entry(10, "Bob", "Homework"))]),
        ..Default::default()
    };

    session.run(&mut ui).unwrap();

    assert_eq!(ui.errors.len(), 1);
    assert!(ui.errors[0].contains("32/13/2024"));
    assert!(ui.shown.is_empty());
    assert_eq!(ui.successes, vec![SAVED_MESSAGE]);
}

#[test]
fn unreadable_log_sheet_blocks_only_the_log_view() {
    let (_dir, workbook, mut sheets) = setup();
    sheets.log = "Missing".to_string();
    let mut session = Session::start(&workbook, sheets).unwrap();
    let mut ui = Scripted {
        views: VecDeque::from([View::ViewLogs, View::ViewLogs]),
        forms: VecDeque::from([None]),
        ..Default::default()
    };

    session.run(&mut ui).unwrap();

    assert_eq!(ui.errors.len(), 2);
    assert!(ui.errors[0].starts_with("Backend unavailable"));
    assert!(ui.errors[0].contains("Missing"));
    assert!(ui.shown.is_empty());
    assert!(ui.infos.is_empty());
}
