//! Notes widget - terminal driver.
//!
//! Runs the Note Display Controller against a live notes API. Rendered
//! markup for the notes region goes to stdout; alerts, prompts, status and
//! logs go to stderr. Commands are read one per line from stdin:
//!
//! - `list` - reload the notes
//! - `title <text>` / `content <text>` - fill the input fields
//! - `save` - create or update
//! - `edit <id>` / `delete <id>` - the admin controls
//! - `click <action> <id>` - a raw delegated click (`data-action`, `data-id`)
//! - `show` - print the input fields and save label
//! - `quit`

use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use notes_widget::{
    HttpNotesApi, LoadOutcome, NoteAction, NoteDisplayController, NoteId, Page, Status,
    WidgetConfig, DEFAULT_LOG_FILTER,
};

// ============================================================================
// Terminal Page
// ============================================================================

#[derive(Default)]
struct TerminalPage {
    title: String,
    content: String,
    save_label: String,
    reload_requested: bool,
}

impl Page for TerminalPage {
    fn set_notes_html(&mut self, html: String) {
        println!("{}", html);
    }

    fn title_value(&self) -> String {
        self.title.clone()
    }

    fn content_value(&self) -> String {
        self.content.clone()
    }

    fn set_title_value(&mut self, value: &str) {
        self.title = value.to_string();
    }

    fn set_content_value(&mut self, value: &str) {
        self.content = value.to_string();
    }

    fn set_save_label(&mut self, label: &str) {
        self.save_label = label.to_string();
    }

    fn focus_title(&mut self) {
        eprintln!("> titre: {}", self.title);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        eprint!("? {} [o/N] ", message);
        io::stderr().flush().ok();
        read_line()
            .map(|answer| matches!(answer.trim(), "o" | "O" | "oui" | "y" | "yes"))
            .unwrap_or(false)
    }

    fn reload(&mut self) {
        self.reload_requested = true;
    }

    fn set_status(&mut self, status: Option<Status>) {
        if let Some(status) = status {
            eprintln!("[{}] {}", status.at.format("%H:%M:%S"), status.message);
        }
    }
}

/// One line from stdin without its newline; `None` at end of input.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, PartialEq)]
enum Command {
    List,
    Title(String),
    Content(String),
    Save,
    Action(NoteAction),
    Show,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let note_id =
        |raw: &str| NoteId::parse(raw).ok_or_else(|| format!("{}: identifiant manquant", word));

    match word {
        "list" => Ok(Command::List),
        "title" => Ok(Command::Title(rest.to_string())),
        "content" => Ok(Command::Content(rest.to_string())),
        "save" => Ok(Command::Save),
        "edit" => Ok(Command::Action(NoteAction::Edit(note_id(rest)?))),
        "delete" => Ok(Command::Action(NoteAction::Delete(note_id(rest)?))),
        "click" => {
            let (action, id) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "click <action> <id>".to_string())?;
            NoteAction::from_attributes(action, id)
                .map(Command::Action)
                .ok_or_else(|| format!("action inconnue: {}", action))
        }
        "show" => Ok(Command::Show),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("commande inconnue: {}", other)),
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = WidgetConfig::from_env()?;
    let role = config.role;
    let api = HttpNotesApi::from_config(&config)?;

    info!(api = %config.api_base, ?role, "notes widget starting");
    eprintln!("Notes API: {}", config.api_base);
    if role.is_admin() {
        eprintln!("Role: admin (create, edit and delete enabled)");
    } else {
        eprintln!("Role: reader (set NOTES_ROLE=admin to enable editing)");
    }

    let mut controller = NoteDisplayController::new(api, TerminalPage::default(), role);
    controller.start().await;

    while !controller.page().reload_requested {
        eprint!("{}> ", controller.page().save_label);
        io::stderr().flush().ok();

        let Some(line) = read_line() else { break };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("! {}", message);
                continue;
            }
        };

        let mutating = matches!(command, Command::Save | Command::Action(_));
        if mutating && !role.is_admin() {
            eprintln!("! commande réservée à l'administrateur");
            continue;
        }

        match command {
            Command::List => {
                if controller.load().await == LoadOutcome::Reloading {
                    break;
                }
            }
            Command::Title(text) => controller.page_mut().set_title_value(&text),
            Command::Content(text) => controller.page_mut().set_content_value(&text),
            Command::Save => {
                controller.save().await;
            }
            Command::Action(action) => controller.handle_action(action).await,
            Command::Show => {
                let page = controller.page();
                eprintln!("titre:   {}", page.title);
                eprintln!("contenu: {}", page.content);
                eprintln!("bouton:  {}", page.save_label);
            }
            Command::Quit => break,
        }
    }

    if controller.page().reload_requested {
        eprintln!("Session expirée: reconnectez-vous puis relancez avec NOTES_SESSION.");
    }

    Ok(())
}
