use taskdeck_model::{
    DEFAULT_PAGE_SIZE, PageRequest, PageView, Task, TaskDraft, TaskFilter, TaskId, TaskStatus,
};

use crate::error::CoreError;
use crate::form::{self, FieldErrors};
use crate::store::TaskStore;
use crate::view;

/// Which dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit,
    Delete,
    View,
}

#[derive(Debug, Clone)]
enum Modal {
    Add { draft: TaskDraft },
    Edit { id: TaskId, draft: TaskDraft },
    Delete { id: TaskId },
    View { id: TaskId },
}

impl Modal {
    fn mode(&self) -> ModalMode {
        match self {
            Modal::Add { .. } => ModalMode::Add,
            Modal::Edit { .. } => ModalMode::Edit,
            Modal::Delete { .. } => ModalMode::Delete,
            Modal::View { .. } => ModalMode::View,
        }
    }
}

/// What a successful [`TaskSession::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Task),
    Updated(Task),
    Deleted(TaskId),
    /// Nothing to commit (view mode, or no dialog open).
    Closed,
}

/// Headless controller for the task table.
///
/// Owns what the page owns: the active filter, the pagination cursor, the
/// open dialog with its working draft, and the current validation messages.
/// The task list itself lives in the shared [`TaskStore`].
pub struct TaskSession {
    store: TaskStore,
    filter: TaskFilter,
    page: PageRequest,
    modal: Option<Modal>,
    errors: FieldErrors,
}

impl TaskSession {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            filter: TaskFilter::new(),
            page: PageRequest::first(DEFAULT_PAGE_SIZE),
            modal: None,
            errors: FieldErrors::default(),
        }
    }

    pub fn with_page_size(mut self, per_page: usize) -> Self {
        self.page = PageRequest::first(per_page);
        self
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// The page of tasks the table renders right now.
    pub fn visible(&self) -> PageView {
        view::derive(&self.store.tasks(), &self.filter, &self.page)
    }

    // ------------------------------------------------------------------
    // Filters and pagination
    // ------------------------------------------------------------------

    /// Change the status filter. Jumps back to the first page so the new
    /// result set cannot open on an out-of-range page.
    pub fn set_status_filter(&mut self, status: Option<TaskStatus>) {
        self.filter.status = status;
        self.page.page = 1;
    }

    /// Change the search text. The current page is kept as-is, matching
    /// the table's behavior (only the status dropdown resets it).
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        if self.page.page < self.visible().total_pages {
            self.page.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page.page > 1 {
            self.page.page -= 1;
        }
    }

    // ------------------------------------------------------------------
    // Dialog lifecycle
    // ------------------------------------------------------------------

    pub fn open_add(&mut self) {
        self.errors.clear();
        self.modal = Some(Modal::Add {
            draft: TaskDraft::new(),
        });
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.errors.clear();
        self.modal = Some(Modal::Edit {
            id: task.id,
            draft: TaskDraft::from(task),
        });
    }

    pub fn open_delete(&mut self, task: &Task) {
        self.errors.clear();
        self.modal = Some(Modal::Delete { id: task.id });
    }

    pub fn open_view(&mut self, task: &Task) {
        self.errors.clear();
        self.modal = Some(Modal::View { id: task.id });
    }

    pub fn close(&mut self) {
        self.modal = None;
        self.errors.clear();
    }

    pub fn modal_mode(&self) -> Option<ModalMode> {
        self.modal.as_ref().map(Modal::mode)
    }

    /// The working draft, when an add/edit dialog is open.
    pub fn draft(&self) -> Option<&TaskDraft> {
        match &self.modal {
            Some(Modal::Add { draft }) | Some(Modal::Edit { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        match &mut self.modal {
            Some(Modal::Add { draft }) | Some(Modal::Edit { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    /// Validation messages from the last blocked submit.
    pub fn form_errors(&self) -> &FieldErrors {
        &self.errors
    }

    // ------------------------------------------------------------------
    // Commits
    // ------------------------------------------------------------------

    /// Commit the open dialog.
    ///
    /// Add/edit validate first; a blocked submit keeps the dialog open
    /// with its messages. On success the dialog closes before the remote
    /// sync resolves, so an awaited sync failure arrives with the local
    /// state already committed.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, CoreError> {
        let Some(modal) = self.modal.clone() else {
            return Ok(SubmitOutcome::Closed);
        };

        match modal {
            Modal::Add { draft } => match form::accept(draft) {
                Ok(new) => {
                    self.close();
                    let task = self.store.create(new).await?;
                    Ok(SubmitOutcome::Created(task))
                }
                Err(errors) => {
                    self.errors = errors.clone();
                    Err(CoreError::Validation(errors))
                }
            },
            Modal::Edit { id, draft } => match form::accept(draft) {
                Ok(new) => {
                    self.close();
                    let task = new.into_task(id);
                    self.store.update(task.clone()).await?;
                    Ok(SubmitOutcome::Updated(task))
                }
                Err(errors) => {
                    self.errors = errors.clone();
                    Err(CoreError::Validation(errors))
                }
            },
            Modal::Delete { id } => {
                self.close();
                self.delete_task(id).await?;
                Ok(SubmitOutcome::Deleted(id))
            }
            Modal::View { .. } => {
                self.close();
                Ok(SubmitOutcome::Closed)
            }
        }
    }

    /// Remove a task and keep the pagination cursor on a populated page.
    ///
    /// When the removal empties the current page (judged against the full,
    /// unfiltered list, as the table does) and we are past page one, the
    /// cursor steps back exactly one page. Deleting an id that is already
    /// gone changes nothing.
    pub async fn delete_task(&mut self, id: TaskId) -> Result<bool, CoreError> {
        let result = self.store.delete(id).await;
        // a sync error can only follow an actual removal
        let removed = result.as_ref().copied().unwrap_or(true);

        if removed && self.page.page > 1 && self.page.offset() >= self.store.len() {
            self.page.page -= 1;
        }

        Ok(result?)
    }

    /// Programmatic add, bypassing the dialog.
    pub async fn submit_new(&mut self, draft: TaskDraft) -> Result<Task, CoreError> {
        let new = form::accept(draft).map_err(CoreError::Validation)?;
        Ok(self.store.create(new).await?)
    }

    /// Programmatic edit, bypassing the dialog.
    pub async fn submit_edit(&mut self, id: TaskId, draft: TaskDraft) -> Result<Task, CoreError> {
        let new = form::accept(draft).map_err(CoreError::Validation)?;
        let task = new.into_task(id);
        self.store.update(task.clone()).await?;
        Ok(task)
    }
}
