use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::state::{self, ViewState};
use crate::io::store_io::{self, StoreError};
use crate::model::collection::{RemoveOutcome, TaskCollection};
use crate::model::config::Settings;
use crate::model::date::Date;
use crate::model::sort::SortKey;
use crate::ops::task_ops;
use crate::parse::DroppedRecord;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let dir = resolve_dir(cli.dir.as_deref())?;
    let mut session = Session::open(&dir)?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => cmd_list(&session, json),
        Commands::Count => cmd_count(&session, json),

        // Task changes
        Commands::Add(args) => cmd_add(&mut session, args, json),
        Commands::Toggle(args) => {
            let id = task_ops::resolve_position(&session.collection, args.position)?;
            let message = task_ops::toggle_completion(&mut session.collection, id)?;
            session.finish(&message, json)
        }
        Commands::Done(args) => cmd_set_completion(&mut session, args, true, json),
        Commands::Undo(args) => cmd_set_completion(&mut session, args, false, json),
        Commands::Priority(args) => {
            let id = task_ops::resolve_position(&session.collection, args.position)?;
            let message = task_ops::adjust_priority(&mut session.collection, id, args.amount)?;
            session.finish(&message, json)
        }
        Commands::Remove(args) => cmd_remove(&mut session, args, json),
        Commands::Clean => {
            let message = task_ops::remove_completed(&mut session.collection);
            session.finish(&message, json)
        }

        // View changes
        Commands::Sort(args) => {
            let key: SortKey = args.key.parse()?;
            if !SortKey::SELECTABLE.contains(&key) {
                return Err(format!("cannot sort by {}; use `tt group` instead", key).into());
            }
            session.view.sort_by = key;
            session.change_view(json)
        }
        Commands::Reverse => {
            session.view.reversed = !session.view.reversed;
            session.change_view(json)
        }
        Commands::Group => {
            session.view.grouped = !session.view.grouped;
            session.change_view(json)
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Everything one invocation works on: loaded at start, saved at the end.
struct Session {
    dir: PathBuf,
    settings: Settings,
    tasks_path: PathBuf,
    collection: TaskCollection,
    /// Unreadable lines that the next save will leave out of the task file
    dropped: Vec<DroppedRecord>,
    view: ViewState,
    today: Date,
}

impl Session {
    fn open(dir: &Path) -> Result<Self, StoreError> {
        let settings = config_io::read_settings(dir)?;
        let tasks_path = dir.join(&settings.tasks.file);
        let (collection, dropped) = store_io::load_tasks(&tasks_path)?;
        if !dropped.is_empty() {
            eprintln!(
                "warning: skipped {} unreadable line(s) in {}",
                dropped.len(),
                tasks_path.display()
            );
        }
        let view = state::read_view_state(dir)
            .unwrap_or_else(|| ViewState::from_display(&settings.display));

        let mut session = Session {
            dir: dir.to_path_buf(),
            settings,
            tasks_path,
            collection,
            dropped,
            view,
            today: Date::today(),
        };
        session.resort();
        Ok(session)
    }

    fn resort(&mut self) {
        self.collection.sort(&self.view.sort_spec());
    }

    /// Re-sort, save, and report the outcome of a task change.
    fn finish(&mut self, message: &str, json: bool) -> CmdResult {
        self.resort();
        store_io::log_dropped_records(&self.tasks_path, &self.dropped);
        store_io::save_tasks(&self.tasks_path, &self.collection)?;
        self.dropped.clear();
        if json {
            let out = MessageJson {
                message: message.to_string(),
                uncompleted: self.collection.count_uncompleted(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{}", message);
            println!("{}", task_ops::status_line(&self.collection));
        }
        Ok(())
    }

    /// Persist the view and show the list in its new order.
    fn change_view(&mut self, json: bool) -> CmdResult {
        state::write_view_state(&self.dir, &self.view)?;
        self.resort();
        cmd_list(self, json)
    }
}

fn resolve_dir(dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match dir {
        Some(dir) => Ok(std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?),
        None => Ok(std::env::current_dir()?),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(session: &Session, json: bool) -> CmdResult {
    if json {
        let out = list_to_json(&session.collection, &session.view, session.today);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in format_task_listing(
            &session.settings.display.title,
            &session.collection,
            &session.view,
            session.today,
        ) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_count(session: &Session, json: bool) -> CmdResult {
    if json {
        println!(
            "{}",
            serde_json::json!({ "uncompleted": session.collection.count_uncompleted() })
        );
    } else {
        println!("{}", task_ops::status_line(&session.collection));
    }
    Ok(())
}

fn cmd_add(session: &mut Session, args: AddArgs, json: bool) -> CmdResult {
    let (_, message) = task_ops::add_task(
        &mut session.collection,
        &args.name,
        &args.subject,
        &args.priority,
        &args.due,
    )?;
    session.finish(&message, json)
}

fn cmd_set_completion(session: &mut Session, args: PositionArgs, completed: bool, json: bool) -> CmdResult {
    let id = task_ops::resolve_position(&session.collection, args.position)?;
    let message = task_ops::set_completion(&mut session.collection, id, completed)?;
    session.finish(&message, json)
}

fn cmd_remove(session: &mut Session, args: PositionArgs, json: bool) -> CmdResult {
    let id = task_ops::resolve_position(&session.collection, args.position)?;
    match session.collection.remove(id) {
        RemoveOutcome::Removed(message) => session.finish(&message, json),
        RemoveOutcome::NotFound(_) => {
            println!("Task not found; nothing removed.");
            Ok(())
        }
    }
}
