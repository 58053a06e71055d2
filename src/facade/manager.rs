use super::dialog::{DeleteDialog, EditDialog};
use super::view_state::ViewState;
use crate::config::ManagerConfig;
use crate::core::{Field, Record, RecordDraft, RecordId, RecordSchema, Result, RosterError};
use crate::executor::filter::SearchFilter;
use crate::executor::paginate::last_page;
use crate::executor::{Command, ExecutionContext, ExecutorPipeline, MutationOutcome, derive_view};
use crate::notification::{Notification, NotificationSlot};
use crate::result::DerivedView;
use crate::storage::{IdGenerator, RecordCollection};
use crate::validation::Validator;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Owns the collection and everything the screen shows about it.
///
/// Every user intent goes through one method here. Writes are routed through
/// the executor pipeline and swap in the collection it returns; view state
/// changes only affect [`RecordManager::view`].
pub struct RecordManager {
    config: ManagerConfig,
    collection: RecordCollection,
    ids: IdGenerator,
    validator: Validator,
    pipeline: ExecutorPipeline,
    view_state: ViewState,
    form: RecordDraft,
    edit_dialog: Option<EditDialog>,
    delete_dialog: Option<DeleteDialog>,
    notifications: NotificationSlot,
}

impl RecordManager {
    pub fn new(config: ManagerConfig) -> Result<Self> {
        Self::with_records(config, Vec::new())
    }

    /// Manager seeded with existing records; ids must be unique.
    pub fn with_records(config: ManagerConfig, records: Vec<Record>) -> Result<Self> {
        config.validate()?;

        let collection = RecordCollection::from_records(records)?;
        let mut ids = IdGenerator::new(config.id_strategy);
        if let Some(max) = collection.max_id() {
            ids.observe(max);
        }

        Ok(Self {
            validator: Validator::new(config.schema),
            pipeline: ExecutorPipeline::with_default_executors(),
            view_state: ViewState::new(config.page_size),
            notifications: NotificationSlot::new(config.notification_ttl),
            form: RecordDraft::default(),
            edit_dialog: None,
            delete_dialog: None,
            collection,
            ids,
            config,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn schema(&self) -> RecordSchema {
        self.config.schema
    }

    pub fn collection(&self) -> &RecordCollection {
        &self.collection
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn form(&self) -> &RecordDraft {
        &self.form
    }

    pub fn edit_dialog(&self) -> Option<&EditDialog> {
        self.edit_dialog.as_ref()
    }

    pub fn delete_dialog(&self) -> Option<&DeleteDialog> {
        self.delete_dialog.as_ref()
    }

    /// Latest notification, unless it has outlived its TTL at `now`
    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notifications.current(now)
    }

    /// Current page of the filtered, sorted collection
    pub fn view(&self) -> DerivedView {
        derive_view(&self.collection, self.schema(), &self.view_state.to_query())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub fn add(&mut self, draft: RecordDraft) -> Result<MutationOutcome> {
        self.apply(Command::Add(draft))
    }

    pub fn update(&mut self, id: RecordId, draft: RecordDraft) -> Result<MutationOutcome> {
        self.apply(Command::Update { id, draft })
    }

    pub fn delete(&mut self, id: RecordId) -> Result<MutationOutcome> {
        self.apply(Command::Delete(id))
    }

    fn apply(&mut self, command: Command) -> Result<MutationOutcome> {
        let mut ctx = ExecutionContext::new(&self.collection, &self.validator, &mut self.ids);
        let mutation = self.pipeline.execute(&command, &mut ctx)?;

        if let Some(notification) = mutation.notification() {
            self.notify(notification);
        }
        self.collection = mutation.collection;
        self.clamp_page();

        Ok(mutation.outcome)
    }

    // ========================================================================
    // Intents
    // ========================================================================

    pub fn on_form_changed(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Adds the form; a successful add clears it, a rejected one keeps it
    pub fn on_add_clicked(&mut self, form: RecordDraft) -> Result<MutationOutcome> {
        debug!("add clicked");
        self.form = form.clone();
        let outcome = self.add(form)?;
        if outcome.is_applied() {
            self.form.clear();
        }
        Ok(outcome)
    }

    /// Opens the edit dialog prefilled with the record; unknown ids are ignored
    pub fn on_edit_requested(&mut self, id: RecordId) -> bool {
        debug!(id, "edit requested");
        match self.collection.get(id) {
            Some(record) => {
                self.edit_dialog = Some(EditDialog {
                    id,
                    draft: record.to_draft(),
                });
                true
            }
            None => false,
        }
    }

    pub fn on_edit_saved(&mut self, id: RecordId, fields: RecordDraft) -> Result<MutationOutcome> {
        debug!(id, "edit saved");
        let outcome = self.update(id, fields.clone())?;

        match &outcome {
            MutationOutcome::Rejected(_) => {
                self.edit_dialog = Some(EditDialog { id, draft: fields });
            }
            MutationOutcome::NotFound(missing) => {
                warn!(id = *missing, "edited student no longer exists");
                self.notify(Notification::warning(format!(
                    "Student with id {} no longer exists",
                    missing
                )));
                self.edit_dialog = None;
            }
            _ => self.edit_dialog = None,
        }

        Ok(outcome)
    }

    pub fn on_edit_cancelled(&mut self) {
        self.edit_dialog = None;
    }

    pub fn on_delete_requested(&mut self, id: RecordId) -> bool {
        debug!(id, "delete requested");
        if self.collection.contains(id) {
            self.delete_dialog = Some(DeleteDialog { id });
            true
        } else {
            false
        }
    }

    pub fn on_delete_confirmed(&mut self, id: RecordId) -> Result<MutationOutcome> {
        self.delete_dialog = None;
        self.delete(id)
    }

    pub fn on_delete_cancelled(&mut self) {
        self.delete_dialog = None;
    }

    pub fn on_search_changed(&mut self, text: impl Into<String>) {
        self.view_state.search = text.into();
        self.view_state.page = 0;
        debug!(search = %self.view_state.search, "search changed");
    }

    pub fn on_sort_header_clicked(&mut self, field: Field) {
        if !self.schema().has_field(field) {
            debug!(field = field.key(), "sort on column outside schema ignored");
            return;
        }
        self.view_state.sort_by(field);
        debug!(
            field = field.key(),
            direction = %self.view_state.sort_direction,
            "sort changed"
        );
    }

    /// Moves to `page`, clamped to the last page that shows anything
    pub fn on_page_changed(&mut self, page: usize) {
        self.view_state.page = page;
        self.clamp_page();
    }

    pub fn on_page_size_changed(&mut self, size: usize) -> Result<()> {
        if !self.config.allows_page_size(size) {
            return Err(RosterError::InvalidPageSize(size));
        }
        self.view_state.page_size = size;
        self.view_state.page = 0;
        Ok(())
    }

    /// Dumps the collection to the log as JSON and tells the user it worked.
    ///
    /// Nothing is written anywhere durable.
    pub fn on_save_clicked(&mut self) -> Result<()> {
        match serde_json::to_string(&self.collection) {
            Ok(json) => {
                info!(count = self.collection.len(), students = %json, "students saved");
                self.notify(Notification::saved());
                Ok(())
            }
            Err(err) => {
                let err = RosterError::from(err);
                self.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn on_notification_closed(&mut self) {
        self.notifications.dismiss();
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn notify(&mut self, notification: Notification) {
        self.notifications.show(notification, Instant::now());
    }

    /// Keeps the current page inside the filtered result after it shrinks
    fn clamp_page(&mut self) {
        let total = SearchFilter::new(&self.view_state.search, self.schema())
            .apply(&self.collection)
            .len();
        let last = last_page(total, self.view_state.page_size);
        if self.view_state.page > last {
            self.view_state.page = last;
        }
    }
}
