//! # Schedule page
//!
//! Single owner of everything the provider's schedule screen shows: the
//! weekly template, the visible range, the exceptions and appointments fetched
//! for it, the projected events and the exception editor.
//!
//! Failures never tear the page down. A failed load keeps what was already in
//! memory, a failed save leaves the editor open for another try. Nothing is
//! retried automatically.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use chrono::{NaiveDate, NaiveTime};
use slotkeeper_core::{
    calendar::{CalendarInteraction, DateRange, ViewMode},
    editor::{EditorCommand, ExceptionEditor},
    errors::{ScheduleError, ScheduleResult},
    fetch::{FetchGeneration, FetchToken},
    models::{
        appointment::Appointment,
        event::{CalendarEvent, EventAction},
        exception::{ExceptionKind, ScheduleException},
    },
    projector,
    template::{TemplateField, WeeklyTemplate},
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::backend::ScheduleBackend;

/// Shared view of the page's `saving` flag. A clone can be held by the UI and
/// read while a save keeps the page borrowed.
#[derive(Debug, Clone, Default)]
pub struct SavingIndicator(Arc<AtomicBool>);

impl SavingIndicator {
    pub fn is_saving(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn raise(&self) -> SavingGuard {
        self.0.store(true, Ordering::Release);
        SavingGuard(self.0.clone())
    }
}

/// Lowers the flag when the request finishes, fails, or its future is dropped.
struct SavingGuard(Arc<AtomicBool>);

impl Drop for SavingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct SchedulePage<B> {
    backend: B,
    template: WeeklyTemplate,
    selected_date: NaiveDate,
    view_mode: ViewMode,
    range: DateRange,
    exceptions: Vec<ScheduleException>,
    appointments: Vec<Appointment>,
    events: Vec<CalendarEvent>,
    editor: ExceptionEditor,
    generation: FetchGeneration,
    saving: SavingIndicator,
    saved: bool,
}

impl<B: ScheduleBackend> SchedulePage<B> {
    /// A page showing the week around `selected_date`, with the built-in
    /// template until [`load_template`](Self::load_template) succeeds.
    pub fn new(backend: B, selected_date: NaiveDate) -> Self {
        Self::with_view_mode(backend, selected_date, ViewMode::default())
    }

    pub fn with_view_mode(backend: B, selected_date: NaiveDate, view_mode: ViewMode) -> Self {
        Self {
            backend,
            template: WeeklyTemplate::initial(),
            selected_date,
            view_mode,
            range: DateRange::visible(selected_date, view_mode),
            exceptions: Vec::new(),
            appointments: Vec::new(),
            events: Vec::new(),
            editor: ExceptionEditor::new(),
            generation: FetchGeneration::new(),
            saving: SavingIndicator::default(),
            saved: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn template(&self) -> &WeeklyTemplate {
        &self.template
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn exceptions(&self) -> &[ScheduleException] {
        &self.exceptions
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Events for the visible range, as last projected.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn editor(&self) -> &ExceptionEditor {
        &self.editor
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_saving()
    }

    pub fn saving_indicator(&self) -> SavingIndicator {
        self.saving.clone()
    }

    /// Whether the template was saved since its last edit.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    // Weekly template

    pub async fn load_template(&mut self) -> ScheduleResult<()> {
        match self.backend.weekly_schedule().await {
            Ok(rows) => {
                debug!("Loaded {} weekly schedule rows", rows.len());
                self.template = WeeklyTemplate::from_rows(rows);
                self.editor.apply_template(&self.template);
                self.reproject();
                Ok(())
            }
            Err(err) => {
                error!("Failed to load weekly schedule: {}", err);
                Err(err)
            }
        }
    }

    pub fn set_template_field(&mut self, day_of_week: u8, field: TemplateField) -> ScheduleResult<()> {
        self.template.set_field(day_of_week, field)?;
        self.editor.apply_template(&self.template);
        self.saved = false;
        self.reproject();
        Ok(())
    }

    /// Sends all seven rows in one call. The in-memory template is kept as is
    /// whether or not the call succeeds.
    pub async fn save_template(&mut self) -> ScheduleResult<()> {
        self.saved = false;
        if let Err(err) = self.template.validate() {
            warn!("Refusing to save weekly schedule: {}", err);
            return Err(err);
        }

        let saving = self.saving.raise();
        let result = self.backend.save_weekly_schedule(self.template.to_rows()).await;
        drop(saving);

        match result {
            Ok(_) => {
                info!("Weekly schedule saved");
                self.saved = true;
                Ok(())
            }
            Err(err) => {
                error!("Failed to save weekly schedule: {}", err);
                Err(err)
            }
        }
    }

    // Visible range

    /// Issues a token for a fetch of the current range. Any token issued
    /// earlier is stale from now on.
    pub fn begin_range_fetch(&mut self) -> (FetchToken, DateRange) {
        (self.generation.next_token(), self.range)
    }

    pub async fn fetch_range(&self, range: DateRange) -> ScheduleResult<(Vec<ScheduleException>, Vec<Appointment>)> {
        tokio::try_join!(
            self.backend.list_exceptions(range),
            self.backend.list_appointments(range)
        )
    }

    /// Installs a fetch result unless a newer fetch was issued since. Returns
    /// whether it was applied.
    pub fn apply_range(
        &mut self,
        token: FetchToken,
        exceptions: Vec<ScheduleException>,
        appointments: Vec<Appointment>,
    ) -> bool {
        if !self.generation.is_current(token) {
            debug!("Discarding stale range response {:?}", token);
            return false;
        }

        self.exceptions = exceptions;
        self.appointments = appointments;
        self.reproject();
        true
    }

    /// Re-fetches exceptions and appointments for the visible range.
    pub async fn refresh(&mut self) -> ScheduleResult<()> {
        let (token, range) = self.begin_range_fetch();
        match self.fetch_range(range).await {
            Ok((exceptions, appointments)) => {
                self.apply_range(token, exceptions, appointments);
                Ok(())
            }
            Err(err) => {
                error!(
                    "Failed to fetch schedule for {}..{}: {}",
                    range.date_from, range.date_to, err
                );
                Err(err)
            }
        }
    }

    pub async fn set_selected_date(&mut self, date: NaiveDate) -> ScheduleResult<()> {
        self.selected_date = date;
        self.update_range().await
    }

    pub async fn set_view_mode(&mut self, mode: ViewMode) -> ScheduleResult<()> {
        self.view_mode = mode;
        self.update_range().await
    }

    async fn update_range(&mut self) -> ScheduleResult<()> {
        let range = DateRange::visible(self.selected_date, self.view_mode);
        if range == self.range {
            return Ok(());
        }

        self.range = range;
        self.reproject();
        self.refresh().await
    }

    /// Reacts to a callback from the calendar view.
    pub async fn handle(&mut self, interaction: CalendarInteraction) -> ScheduleResult<()> {
        match interaction {
            CalendarInteraction::DateClick(date) | CalendarInteraction::EmptySlotClick { date, .. } => {
                self.open_new_exception(date);
                Ok(())
            }
            CalendarInteraction::EventClick(EventAction::EditException(id)) => self.open_edit_exception(id),
            CalendarInteraction::ViewModeChange(mode) => self.set_view_mode(mode).await,
            CalendarInteraction::DateChange(date) => self.set_selected_date(date).await,
        }
    }

    // Exception editor

    pub fn open_new_exception(&mut self, date: NaiveDate) {
        self.editor.open_new(date, &self.template);
    }

    pub fn open_edit_exception(&mut self, id: Uuid) -> ScheduleResult<()> {
        let exception = self
            .exceptions
            .iter()
            .find(|exception| exception.id == id)
            .ok_or_else(|| ScheduleError::NotFound(format!("Schedule exception with ID {} not found", id)))?;
        self.editor.open_edit(exception);
        Ok(())
    }

    pub fn allowed_exception_kinds(&self) -> &'static [ExceptionKind] {
        self.editor.allowed_kinds(&self.template)
    }

    pub fn set_exception_date(&mut self, date: NaiveDate) -> ScheduleResult<()> {
        self.editor.set_date(date, &self.template)
    }

    pub fn set_exception_kind(&mut self, kind: ExceptionKind) -> ScheduleResult<()> {
        self.editor.set_kind(kind, &self.template)
    }

    pub fn set_exception_times(&mut self, start_time: Option<NaiveTime>, end_time: Option<NaiveTime>) -> ScheduleResult<()> {
        self.editor.set_times(start_time, end_time)
    }

    pub fn set_exception_reason(&mut self, reason: impl Into<String>) -> ScheduleResult<()> {
        self.editor.set_reason(reason)
    }

    pub fn cancel_exception(&mut self) {
        self.editor.cancel();
    }

    /// Creates or updates the exception in the editor, then closes it and
    /// re-fetches the range.
    pub async fn save_exception(&mut self) -> ScheduleResult<()> {
        let command = self.editor.save_command()?;
        self.run_command(command).await
    }

    /// Deletes the exception being edited, then closes the editor and
    /// re-fetches the range.
    pub async fn delete_exception(&mut self) -> ScheduleResult<()> {
        let command = self.editor.delete_command()?;
        self.run_command(command).await
    }

    async fn run_command(&mut self, command: EditorCommand) -> ScheduleResult<()> {
        let saving = self.saving.raise();
        let result = match command {
            EditorCommand::Create(payload) => self.backend.create_exception(payload).await.map(|_| ()),
            EditorCommand::Update { id, payload } => self.backend.update_exception(id, payload).await.map(|_| ()),
            EditorCommand::Delete(id) => self.backend.delete_exception(id).await,
        };
        drop(saving);

        if let Err(err) = result {
            error!("Failed to save schedule exception: {}", err);
            return Err(err);
        }

        self.editor.close();
        // A failed re-fetch is already logged and leaves the old events up.
        let _ = self.refresh().await;
        Ok(())
    }

    fn reproject(&mut self) {
        self.events = projector::project_range(self.range, &self.template, &self.exceptions, &self.appointments);
    }
}
