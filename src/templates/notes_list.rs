//! Notes region markup.
//!
//! The region is always rendered whole; the controller swaps it in one go.
//! Action buttons carry `data-action` and `data-id` so a single delegated
//! click listener on the region can route them back through [`NoteAction`].

use super::labels::{DELETE_BUTTON, EDIT_BUTTON, EMPTY_STATE_TEXT};
use crate::models::{Note, NoteId, Role};
use crate::text::{html_escape, render_content};

const ACTION_EDIT: &str = "edit";
const ACTION_DELETE: &str = "delete";

// ============================================================================
// Delegated Actions
// ============================================================================

/// A click on one of the admin controls inside the notes region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    Edit(NoteId),
    Delete(NoteId),
}

impl NoteAction {
    /// Rebuild an action from the `data-action` / `data-id` attribute pair of
    /// the clicked element. Unknown actions and blank ids yield `None`.
    pub fn from_attributes(action: &str, id: &str) -> Option<Self> {
        let id = NoteId::parse(id)?;
        match action {
            ACTION_EDIT => Some(NoteAction::Edit(id)),
            ACTION_DELETE => Some(NoteAction::Delete(id)),
            _ => None,
        }
    }

    pub fn id(&self) -> &NoteId {
        match self {
            NoteAction::Edit(id) | NoteAction::Delete(id) => id,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

pub fn empty_state_html() -> String {
    format!(
        r#"<div class="empty-state"><p>{}</p></div>"#,
        EMPTY_STATE_TEXT
    )
}

fn actions_html(id: &str) -> String {
    format!(
        concat!(
            r#"<div class="note-actions">"#,
            r#"<button class="edit-btn" data-action="{edit}" data-id="{id}">{edit_label}</button>"#,
            r#"<button class="delete-btn" data-action="{delete}" data-id="{id}">"#,
            "{delete_label}</button>",
            "</div>",
        ),
        edit = ACTION_EDIT,
        delete = ACTION_DELETE,
        id = id,
        edit_label = EDIT_BUTTON,
        delete_label = DELETE_BUTTON,
    )
}

pub fn render_note_card(note: &Note, role: Role) -> String {
    let id = html_escape(&note.id.to_string());
    let actions = if role.is_admin() {
        actions_html(&id)
    } else {
        String::new()
    };

    format!(
        r#"<div class="note-card" data-id="{id}">{actions}<h3>{title}</h3><p>{content}</p></div>"#,
        id = id,
        actions = actions,
        title = html_escape(&note.title),
        content = render_content(&note.content),
    )
}

/// Full replacement markup for the notes region, in the order the API
/// returned the notes.
pub fn render_notes(notes: &[Note], role: Role) -> String {
    if notes.is_empty() {
        return empty_state_html();
    }

    notes
        .iter()
        .map(|note| render_note_card(note, role))
        .collect::<Vec<_>>()
        .join("\n")
}
