//! User-facing strings.

pub const EMPTY_STATE_TEXT: &str = "Aucune note pour le moment.";

pub const EDIT_BUTTON: &str = "Modifier";
pub const DELETE_BUTTON: &str = "Supprimer";

pub const SAVE_LABEL_CREATE: &str = "Ajouter une note";
pub const SAVE_LABEL_UPDATE: &str = "Mettre à jour";

pub const FILL_BOTH_FIELDS: &str = "Veuillez remplir le titre et le contenu";
pub const CONFIRM_DELETE: &str = "Êtes-vous sûr de vouloir supprimer cette note?";

// Fallbacks when the API rejects a mutation without an `error` field.
pub const SAVE_FAILED: &str = "Erreur lors de la sauvegarde";
pub const DELETE_FAILED: &str = "Erreur lors de la suppression";

// Status line for failures that only get logged.
pub const STATUS_LOAD_FAILED: &str = "Impossible de charger les notes";
pub const STATUS_SAVE_FAILED: &str = "La note n'a pas pu être envoyée";
pub const STATUS_EDIT_FAILED: &str = "Impossible de charger la note à modifier";
pub const STATUS_DELETE_FAILED: &str = "La suppression n'a pas pu être envoyée";
