//! Router integration point for code that runs outside components

use std::cell::RefCell;
use std::rc::Rc;
use yew_router::history::{BrowserHistory, History};

/// Something that can move the client router to a path
pub trait Navigate {
    fn push(&self, path: &str);
}

pub type SharedNavigator = Rc<dyn Navigate>;

/// Pushes onto the browser history the application's `BrowserRouter`
/// listens to, so the route switch re-renders (and re-runs the guard).
#[derive(Debug, Default, Clone, Copy)]
pub struct HistoryNavigator;

impl Navigate for HistoryNavigator {
    fn push(&self, path: &str) {
        tracing::debug!(path, "Navigating");
        BrowserHistory::new().push(path.to_string());
    }
}

/// Keeps every requested path instead of navigating
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pushes: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pushes(&self) -> Vec<String> {
        self.pushes.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.pushes.borrow().last().cloned()
    }
}

impl Navigate for RecordingNavigator {
    fn push(&self, path: &str) {
        self.pushes.borrow_mut().push(path.to_string());
    }
}
