// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::RepId;
use crate::model::Representative;

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    Roster,
    Ask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub focus: InputFocus,
    pub assistant_enabled: bool,
    pub clear_input_on_submit: bool,
    pub show_summary: bool,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focus: InputFocus::Roster,
            assistant_enabled: true,
            clear_input_on_submit: false,
            show_summary: true,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    FocusAsk,
    FocusRoster,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    FocusChanged(InputFocus),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::FocusAsk => {
                self.focus = InputFocus::Ask;
                vec![AppEvent::FocusChanged(self.focus), self.set_status("ask")]
            }
            AppCommand::FocusRoster => {
                self.focus = InputFocus::Roster;
                vec![
                    AppEvent::FocusChanged(self.focus),
                    self.set_status("browse"),
                ]
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

/// Loading lifecycle for the roster. Resolves at most once per session;
/// anything arriving after the first resolution is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterState {
    Loading,
    Loaded(Vec<Representative>),
    Failed(String),
}

impl Default for RosterState {
    fn default() -> Self {
        Self::Loading
    }
}

impl RosterState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn reps(&self) -> Option<&[Representative]> {
        match self {
            Self::Loaded(reps) => Some(reps),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn resolve_loaded(&mut self, reps: Vec<Representative>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = Self::Loaded(reps);
        true
    }

    pub fn resolve_failed(&mut self, message: String) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = Self::Failed(message);
        true
    }
}

/// At most one representative's detail panel is expanded at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    expanded: Option<RepId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Expanded(RepId),
    Collapsed,
}

impl Selection {
    pub const fn expanded(&self) -> Option<RepId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: RepId) -> bool {
        self.expanded == Some(id)
    }

    pub fn toggle(&mut self, id: RepId) -> SelectionEvent {
        if self.expanded == Some(id) {
            self.expanded = None;
            SelectionEvent::Collapsed
        } else {
            self.expanded = Some(id);
            SelectionEvent::Expanded(id)
        }
    }

    pub fn collapse(&mut self) -> bool {
        self.expanded.take().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskState {
    Idle,
    Waiting { question: String },
    Answered { answer: String },
    Failed { detail: String },
}

impl Default for AskState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Question/answer lifecycle. A new question is only accepted while no
/// other question is waiting on its answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assistant {
    state: AskState,
}

impl Assistant {
    pub const fn state(&self) -> &AskState {
        &self.state
    }

    pub const fn is_waiting(&self) -> bool {
        matches!(self.state, AskState::Waiting { .. })
    }

    /// Accepts a question unless one is already waiting or the trimmed
    /// text is empty. Returns the trimmed question on acceptance.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        if self.is_waiting() {
            return None;
        }
        let question = raw.trim();
        if question.is_empty() {
            return None;
        }
        self.state = AskState::Waiting {
            question: question.to_owned(),
        };
        Some(question.to_owned())
    }

    pub fn resolve_answered(&mut self, answer: String) -> bool {
        if !self.is_waiting() {
            return false;
        }
        self.state = AskState::Answered { answer };
        true
    }

    pub fn resolve_failed(&mut self, detail: String) -> bool {
        if !self.is_waiting() {
            return false;
        }
        self.state = AskState::Failed { detail };
        true
    }

    /// Backs out of a waiting question (explicit cancel). Returns the
    /// abandoned question text when there was one.
    pub fn abandon(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            AskState::Waiting { question } => Some(question),
            other => {
                self.state = other;
                None
            }
        }
    }
}
