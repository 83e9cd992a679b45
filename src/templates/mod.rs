//! HTML generation for the notes widget.
//!
//! ## Module Structure
//!
//! - `labels` - User-facing text (French, as shipped)
//! - `notes_list` - Notes region markup and the delegated action attributes

mod labels;
mod notes_list;

pub use labels::{
    CONFIRM_DELETE, DELETE_BUTTON, DELETE_FAILED, EDIT_BUTTON, EMPTY_STATE_TEXT, FILL_BOTH_FIELDS,
    SAVE_FAILED, SAVE_LABEL_CREATE, SAVE_LABEL_UPDATE, STATUS_DELETE_FAILED, STATUS_EDIT_FAILED,
    STATUS_LOAD_FAILED, STATUS_SAVE_FAILED,
};
pub use notes_list::{empty_state_html, render_note_card, render_notes, NoteAction};
