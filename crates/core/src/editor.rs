//! # Exception editor
//!
//! State of the dialog that creates, edits or deletes a single exception.
//!
//! ```text
//! Closed --open_new--> New   (defaults from date + template)
//! Closed --open_edit-> Edit  (fields copied verbatim from the record)
//! New/Edit --cancel--> Closed
//! New/Edit --save_command--> caller persists, then close()
//! Edit --delete_command--> caller persists, then close()
//! ```
//!
//! The editor never talks to the backend. A failed save simply leaves it open.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::{
    eligibility,
    errors::{ScheduleError, ScheduleResult},
    models::exception::{ExceptionKind, ExceptionPayload, ScheduleException},
    template::WeeklyTemplate,
};

/// Field values currently shown in the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionDraft {
    pub date: NaiveDate,
    pub kind: ExceptionKind,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub reason: String,
}

impl ExceptionDraft {
    pub fn to_payload(&self) -> ExceptionPayload {
        ExceptionPayload::new(
            self.date,
            self.kind,
            self.start_time,
            self.end_time,
            Some(self.reason.clone()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    OpenNew { draft: ExceptionDraft },
    OpenEdit { id: Uuid, draft: ExceptionDraft },
}

/// Backend call the caller must make to complete a save or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Create(ExceptionPayload),
    Update { id: Uuid, payload: ExceptionPayload },
    Delete(Uuid),
}

#[derive(Debug, Clone, Default)]
pub struct ExceptionEditor {
    state: EditorState,
}

impl ExceptionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Closed)
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        match self.state {
            EditorState::OpenEdit { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&ExceptionDraft> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::OpenNew { draft } | EditorState::OpenEdit { draft, .. } => Some(draft),
        }
    }

    /// Types the type selector offers for the draft's current date.
    pub fn allowed_kinds(&self, template: &WeeklyTemplate) -> &'static [ExceptionKind] {
        match self.draft() {
            Some(draft) => eligibility::allowed_kinds(template, draft.date),
            None => &[],
        }
    }

    pub fn open_new(&mut self, date: NaiveDate, template: &WeeklyTemplate) {
        let defaults = eligibility::defaults_for(template, date);
        self.state = EditorState::OpenNew {
            draft: ExceptionDraft {
                date,
                kind: defaults.kind,
                start_time: Some(defaults.start_time),
                end_time: Some(defaults.end_time),
                reason: String::new(),
            },
        };
    }

    pub fn open_edit(&mut self, exception: &ScheduleException) {
        self.state = EditorState::OpenEdit {
            id: exception.id,
            draft: ExceptionDraft {
                date: exception.date,
                kind: exception.kind,
                start_time: exception.start_time,
                end_time: exception.end_time,
                reason: exception.reason.clone().unwrap_or_default(),
            },
        };
    }

    /// Moves the draft to another date. A new exception has its type corrected
    /// to one the date accepts; an existing one keeps its type untouched.
    pub fn set_date(&mut self, date: NaiveDate, template: &WeeklyTemplate) -> ScheduleResult<()> {
        match &mut self.state {
            EditorState::Closed => Err(closed()),
            EditorState::OpenNew { draft } => {
                draft.date = date;
                draft.kind = eligibility::corrected_kind(template, date, draft.kind);
                Ok(())
            }
            EditorState::OpenEdit { draft, .. } => {
                draft.date = date;
                Ok(())
            }
        }
    }

    /// Re-checks a new draft after the template it was opened against changed.
    /// Like [`set_date`](Self::set_date), an existing exception is left alone.
    pub fn apply_template(&mut self, template: &WeeklyTemplate) {
        if let EditorState::OpenNew { draft } = &mut self.state {
            draft.kind = eligibility::corrected_kind(template, draft.date, draft.kind);
        }
    }

    pub fn set_kind(&mut self, kind: ExceptionKind, template: &WeeklyTemplate) -> ScheduleResult<()> {
        let draft = self.draft_mut()?;
        if !eligibility::is_eligible(template, draft.date, kind) {
            return Err(ScheduleError::Ineligible {
                kind,
                date: draft.date,
            });
        }
        draft.kind = kind;
        Ok(())
    }

    pub fn set_times(&mut self, start_time: Option<NaiveTime>, end_time: Option<NaiveTime>) -> ScheduleResult<()> {
        let draft = self.draft_mut()?;
        draft.start_time = start_time;
        draft.end_time = end_time;
        Ok(())
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) -> ScheduleResult<()> {
        self.draft_mut()?.reason = reason.into();
        Ok(())
    }

    /// The create or update call that persists the draft.
    pub fn save_command(&self) -> ScheduleResult<EditorCommand> {
        let command = match &self.state {
            EditorState::Closed => return Err(closed()),
            EditorState::OpenNew { draft } => EditorCommand::Create(draft.to_payload()),
            EditorState::OpenEdit { id, draft } => EditorCommand::Update {
                id: *id,
                payload: draft.to_payload(),
            },
        };

        if let EditorCommand::Create(payload) | EditorCommand::Update { payload, .. } = &command {
            payload.validate()?;
        }
        Ok(command)
    }

    /// Only an existing exception can be deleted.
    pub fn delete_command(&self) -> ScheduleResult<EditorCommand> {
        match &self.state {
            EditorState::OpenEdit { id, .. } => Ok(EditorCommand::Delete(*id)),
            EditorState::OpenNew { .. } => Err(ScheduleError::Validation(
                "An unsaved exception cannot be deleted".to_string(),
            )),
            EditorState::Closed => Err(closed()),
        }
    }

    /// Discards the draft without persisting anything.
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }

    /// Closes the dialog once the caller's save or delete went through.
    pub fn close(&mut self) {
        self.state = EditorState::Closed;
    }

    fn draft_mut(&mut self) -> ScheduleResult<&mut ExceptionDraft> {
        match &mut self.state {
            EditorState::Closed => Err(closed()),
            EditorState::OpenNew { draft } | EditorState::OpenEdit { draft, .. } => Ok(draft),
        }
    }
}

fn closed() -> ScheduleError {
    ScheduleError::Validation("The exception editor is not open".to_string())
}
