//! Note Display Controller.
//!
//! Sequences everything the widget does: load → render, save (create or
//! update), edit lookup, delete. Every operation handles its own failures:
//! a 401 on load reloads the page, server rejections become alerts, and
//! transport/parse failures are logged and shown on the status line.
//! Nothing is retried and nothing is returned as an error.
//!
//! Operations take `&mut self`, so two of them can never run interleaved on
//! the same controller.

use crate::api::{ApiError, NotesApi};
use crate::editor::{validate_submission, EditMode, EditorState, SaveTarget};
use crate::models::{NoteId, Role};
use crate::page::{Page, Status};
use crate::templates::{
    render_notes, NoteAction, CONFIRM_DELETE, DELETE_FAILED, FILL_BOTH_FIELDS, SAVE_FAILED,
    STATUS_DELETE_FAILED, STATUS_EDIT_FAILED, STATUS_LOAD_FAILED, STATUS_SAVE_FAILED,
};
use tracing::{debug, error, info, warn};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

// ============================================================================
// Outcomes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { count: usize },
    /// 401: the page was asked to reload.
    Reloading,
    /// Logged; the region keeps its previous contents.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Blank title or content; nothing was sent.
    Invalid,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Editing,
    NotFound,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Rejected,
    Failed,
}

// ============================================================================
// Controller
// ============================================================================

pub struct NoteDisplayController<A, P> {
    api: A,
    page: P,
    role: Role,
    editor: EditorState,
}

impl<A: NotesApi, P: Page> NoteDisplayController<A, P> {
    pub fn new(api: A, page: P, role: Role) -> Self {
        Self {
            api,
            page,
            role,
            editor: EditorState::new(),
        }
    }

    /// Page-ready entry point: reset the save label and load the notes.
    pub async fn start(&mut self) -> LoadOutcome {
        self.page.set_save_label(EditMode::Create.label());
        self.load().await
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn role(&self) -> Role {
        self.role
    }

    // ------------------------------------------------------------------------
    // Loader
    // ------------------------------------------------------------------------

    pub async fn load(&mut self) -> LoadOutcome {
        match self.api.list().await {
            Ok(notes) => {
                debug!(count = notes.len(), "rendering notes");
                self.page.set_notes_html(render_notes(&notes, self.role));
                self.page.set_status(None);
                LoadOutcome::Rendered { count: notes.len() }
            }
            Err(ApiError::Unauthorized) => {
                warn!("notes API answered 401, reloading page");
                self.page.reload();
                LoadOutcome::Reloading
            }
            Err(err) => {
                error!(error = %err, "error loading notes");
                self.page.set_status(Some(Status::now(STATUS_LOAD_FAILED)));
                LoadOutcome::Failed
            }
        }
    }

    // ------------------------------------------------------------------------
    // Save
    // ------------------------------------------------------------------------

    pub async fn save(&mut self) -> SaveOutcome {
        let title = self.page.title_value();
        let content = self.page.content_value();
        let payload = match validate_submission(&title, &content) {
            Ok(payload) => payload,
            Err(reason) => {
                debug!(%reason, "save blocked by validation");
                self.page.alert(FILL_BOTH_FIELDS);
                return SaveOutcome::Invalid;
            }
        };

        let target = self.editor.save_target();
        let result = match &target {
            SaveTarget::Create => self.api.create(&payload).await,
            SaveTarget::Update(id) => self.api.update(id, &payload).await,
        };

        match result {
            Ok(()) => {
                info!(?target, "note saved");
                self.page.set_title_value("");
                self.page.set_content_value("");
                self.editor.reset();
                self.page.set_save_label(self.editor.mode().label());
                self.load().await;
                SaveOutcome::Saved
            }
            Err(err) if err.is_rejection() => {
                warn!(?target, error = %err, "save rejected");
                self.page.alert(err.server_message().unwrap_or(SAVE_FAILED));
                SaveOutcome::Rejected
            }
            Err(err) => {
                error!(?target, error = %err, "error saving note");
                self.page.set_status(Some(Status::now(STATUS_SAVE_FAILED)));
                SaveOutcome::Failed
            }
        }
    }

    // ------------------------------------------------------------------------
    // Edit / Delete
    // ------------------------------------------------------------------------

    /// Bind the inputs to note `id`. Always re-fetches so the fields never
    /// start from a stale copy.
    pub async fn edit_note(&mut self, id: &NoteId) -> EditOutcome {
        let notes = match self.api.list().await {
            Ok(notes) => notes,
            Err(err) => {
                error!(%id, error = %err, "error editing note");
                self.page.set_status(Some(Status::now(STATUS_EDIT_FAILED)));
                return EditOutcome::Failed;
            }
        };

        let Some(note) = notes.into_iter().find(|n| &n.id == id) else {
            debug!(%id, "note to edit is gone");
            return EditOutcome::NotFound;
        };

        self.page.set_title_value(&note.title);
        self.page.set_content_value(&note.content);
        self.editor.begin_edit(note.id);
        self.page.set_save_label(self.editor.mode().label());
        self.page.focus_title();
        EditOutcome::Editing
    }

    pub async fn delete_note(&mut self, id: &NoteId) -> DeleteOutcome {
        if !self.page.confirm(CONFIRM_DELETE) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                info!(%id, "note deleted");
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(err) if err.is_rejection() => {
                warn!(%id, error = %err, "delete rejected");
                self.page.alert(err.server_message().unwrap_or(DELETE_FAILED));
                DeleteOutcome::Rejected
            }
            Err(err) => {
                error!(%id, error = %err, "error deleting note");
                self.page.set_status(Some(Status::now(STATUS_DELETE_FAILED)));
                DeleteOutcome::Failed
            }
        }
    }

    /// Route a delegated click from the notes region.
    pub async fn handle_action(&mut self, action: NoteAction) {
        match action {
            NoteAction::Edit(id) => {
                self.edit_note(&id).await;
            }
            NoteAction::Delete(id) => {
                self.delete_note(&id).await;
            }
        }
    }

    /// Delegated click given as the raw `data-action` / `data-id` pair.
    /// Clicks that don't name a known action are ignored.
    pub async fn handle_click(&mut self, action: &str, id: &str) -> bool {
        match NoteAction::from_attributes(action, id) {
            Some(action) => {
                self.handle_action(action).await;
                true
            }
            None => {
                debug!(action, id, "ignoring click");
                false
            }
        }
    }
}
