//! # Recording View
//!
//! [`RecordingView`] is an in-memory [`ShellView`] for tests. Clones share one record,
//! so the test keeps a clone after handing the view to a shell.

use crate::shell::ShellView;
use std::sync::{Arc, Mutex};

/// One call made on the view, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ShowLoading,
    HideLoading,
    ShowError(String),
    DismissError,
    SelectionEnabled(bool),
}

#[derive(Default)]
struct Record {
    events: Vec<ViewEvent>,
    loading: bool,
    error: Option<String>,
    selection_enabled: bool,
}

#[derive(Clone, Default)]
pub struct RecordingView {
    record: Arc<Mutex<Record>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.record.lock().unwrap().events.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.record.lock().unwrap().loading
    }

    /// The notification currently on screen, if any.
    pub fn error(&self) -> Option<String> {
        self.record.lock().unwrap().error.clone()
    }

    pub fn selection_enabled(&self) -> bool {
        self.record.lock().unwrap().selection_enabled
    }

    fn push(&self, event: ViewEvent) {
        let mut record = self.record.lock().unwrap();
        match &event {
            ViewEvent::ShowLoading => record.loading = true,
            ViewEvent::HideLoading => record.loading = false,
            ViewEvent::ShowError(reason) => record.error = Some(reason.clone()),
            ViewEvent::DismissError => record.error = None,
            ViewEvent::SelectionEnabled(enabled) => record.selection_enabled = *enabled,
        }
        record.events.push(event);
    }
}

impl ShellView for RecordingView {
    fn show_loading(&mut self) {
        self.push(ViewEvent::ShowLoading);
    }

    fn hide_loading(&mut self) {
        self.push(ViewEvent::HideLoading);
    }

    fn show_error(&mut self, reason: &str) {
        self.push(ViewEvent::ShowError(reason.to_string()));
    }

    fn dismiss_error(&mut self) {
        self.push(ViewEvent::DismissError);
    }

    fn set_selection_enabled(&mut self, enabled: bool) {
        self.push(ViewEvent::SelectionEnabled(enabled));
    }
}
