// src/session.rs

use crate::entry::submit_entry;
use crate::error::{ClassLogError, Result};
use crate::filter::{apply_filters, FilterCriteria};
use crate::logs::load_logs;
use crate::models::{LogRecord, LogView, NewEntry, SheetNames};
use crate::reference::ReferenceData;
use crate::workbook::Workbook;
use tracing::{debug, warn};

pub const EMPTY_LOG_MESSAGE: &str = "No entries yet. Add your first one!";
pub const SAVED_MESSAGE: &str = "Entry saved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    AddEntry,
    ViewLogs,
}

impl View {
    /// 导航中列出的顺序，第一个为初始视图
    pub const ALL: [View; 2] = [View::AddEntry, View::ViewLogs];

    pub fn label(&self) -> &'static str {
        match self {
            View::AddEntry => "Add New Entry",
            View::ViewLogs => "View All Logs",
        }
    }
}

/// 表单与显示层
pub trait Frontend {
    /// 选择下一个视图；None 表示结束会话
    fn select_view(&mut self, current: View) -> Result<Option<View>>;

    /// 填写表单。draft 是上次保存失败时保留的内容；返回 None 表示放弃
    fn entry_form(&mut self, refs: &ReferenceData, draft: Option<&NewEntry>) -> Result<Option<NewEntry>>;

    fn filter_form(&mut self, refs: &ReferenceData, records: &[LogRecord]) -> Result<FilterCriteria>;

    fn show_logs(&mut self, records: &[LogRecord]);

    fn success(&mut self, message: &str);

    fn info(&mut self, message: &str);

    fn error(&mut self, err: &ClassLogError);
}

/// 一次交互会话：持有工作簿句柄与启动时读取的参考数据
pub struct Session<'a, W: Workbook + ?Sized> {
    workbook: &'a W,
    sheets: SheetNames,
    refs: ReferenceData,
    draft: Option<NewEntry>,
}

impl<'a, W: Workbook + ?Sized> Session<'a, W> {
    /// 读取参考数据；失败则无法启动
    pub fn start(workbook: &'a W, sheets: SheetNames) -> Result<Self> {
        let refs = ReferenceData::load(workbook, &sheets)?;
        Ok(Self {
            workbook,
            sheets,
            refs,
            draft: None,
        })
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.refs
    }

    pub fn draft(&self) -> Option<&NewEntry> {
        self.draft.as_ref()
    }

    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        let mut view = View::ALL[0];
        self.render(view, frontend)?;
        while let Some(next) = frontend.select_view(view)? {
            view = next;
            self.render(view, frontend)?;
        }
        Ok(())
    }

    pub fn render<F: Frontend>(&mut self, view: View, frontend: &mut F) -> Result<()> {
        match view {
            View::AddEntry => self.add_entry(frontend),
            View::ViewLogs => self.view_logs(frontend),
        }
    }

    fn add_entry<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        let Some(entry) = frontend.entry_form(&self.refs, self.draft.as_ref())? else {
            return Ok(());
        };

        match submit_entry(self.workbook, &self.sheets.log, &entry) {
            Ok(()) => {
                self.draft = None;
                frontend.success(SAVED_MESSAGE);
            }
            Err(e @ (ClassLogError::BackendWrite(_) | ClassLogError::InvalidInput(_))) => {
                frontend.error(&e);
                self.draft = Some(entry);
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn view_logs<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        let records = match load_logs(self.workbook, &self.sheets.log) {
            Ok(LogView::Rows(records)) => records,
            Ok(LogView::Empty) => {
                frontend.info(EMPTY_LOG_MESSAGE);
                return Ok(());
            }
            Err(e) => {
                warn!(error = %e, "log view unavailable");
                frontend.error(&e);
                return Ok(());
            }
        };

        let criteria = frontend.filter_form(&self.refs, &records)?;
        let filtered = if criteria.is_unrestricted() {
            records
        } else {
            apply_filters(records, &criteria)
        };
        debug!(shown = filtered.len(), "rendered log view");
        frontend.show_logs(&filtered);
        Ok(())
    }
}
