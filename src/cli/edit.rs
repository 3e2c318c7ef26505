//! Interactive editing of a day in the terminal.
//!
//! Events are addressed by their number in `ls` (or by id). Times are
//! typed the way they appear in the line format, e.g. `new 9:00 AM -
//! 10:30 AM`, and are snapped to the configured grid.

use anyhow::{Result, anyhow, bail};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::day::render_events;
use crate::backend::BackendClient;
use crate::core::AppConfig;
use crate::dialog::Dialog;
use crate::schedule::Schedule;
use crate::schedule::clock::{parse_clock, snap_to_grid};
use crate::session::DaySession;
use crate::views::ViewConfig;

const HELP: &str = "\
ls                          list events
new <start> - <end>         create an event
mv <n> <start>              move an event, keeping its length
resize <n> <start> - <end>  change an event's range
rename <n>                  rename an event
rm <n>                      delete an event
text                        print the day in the line format
reload                      discard edits and fetch the day again
save                        send the day to the backend
quit                        leave without saving";

#[derive(Debug, PartialEq, Eq)]
pub enum EditCommand {
    List,
    New { start: NaiveTime, end: NaiveTime },
    Move { target: String, start: NaiveTime },
    Resize { target: String, start: NaiveTime, end: NaiveTime },
    Rename { target: String },
    Delete { target: String },
    Text,
    Reload,
    Save,
    Help,
    Quit,
}

fn parse_range(input: &str) -> Result<(NaiveTime, NaiveTime)> {
    let (start, end) = input
        .split_once('-')
        .ok_or_else(|| anyhow!("Expected a range like `9:00 AM - 10:00 AM`"))?;
    Ok((parse_clock(start)?, parse_clock(end)?))
}

fn split_target(input: &str) -> Result<(String, &str)> {
    match input.trim().split_once(char::is_whitespace) {
        Some((target, rest)) => Ok((target.to_string(), rest)),
        None => bail!("Expected an event number followed by a time"),
    }
}

fn require_target(input: &str) -> Result<String> {
    let target = input.trim();
    if target.is_empty() {
        bail!("Expected an event number");
    }
    Ok(target.to_string())
}

pub fn parse_command(line: &str) -> Result<EditCommand> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let cmd = match word {
        "ls" | "list" => EditCommand::List,
        "new" => {
            let (start, end) = parse_range(rest)?;
            EditCommand::New { start, end }
        }
        "mv" | "move" => {
            let (target, rest) = split_target(rest)?;
            EditCommand::Move {
                target,
                start: parse_clock(rest)?,
            }
        }
        "resize" => {
            let (target, rest) = split_target(rest)?;
            let (start, end) = parse_range(rest)?;
            EditCommand::Resize { target, start, end }
        }
        "rename" => EditCommand::Rename {
            target: require_target(rest)?,
        },
        "rm" | "delete" => EditCommand::Delete {
            target: require_target(rest)?,
        },
        "text" => EditCommand::Text,
        "reload" => EditCommand::Reload,
        "save" => EditCommand::Save,
        "help" | "?" => EditCommand::Help,
        "quit" | "exit" | "q" => EditCommand::Quit,
        other => bail!("Unknown command {:?}, try `help`", other),
    };
    Ok(cmd)
}

/// Resolve an `ls` number or an id to an event id.
pub fn resolve(schedule: &Schedule, target: &str) -> Result<String> {
    if let Ok(n) = target.parse::<usize>()
        && n >= 1
        && let Some(event) = schedule.events().get(n - 1)
    {
        return Ok(event.id.clone());
    }
    match schedule.get(target) {
        Some(event) => Ok(event.id.clone()),
        None => bail!("No event {:?}", target),
    }
}

/// Place a clock range on the schedule's day, snapped to the grid. An end
/// before the start runs into the next day.
fn place(
    schedule: &Schedule,
    start: NaiveTime,
    end: NaiveTime,
    grid: u32,
) -> (NaiveDateTime, NaiveDateTime) {
    let start = schedule.date().and_time(start);
    let mut end = schedule.date().and_time(end);
    if end < start {
        end += Duration::days(1);
    }
    (snap_to_grid(start, grid), snap_to_grid(end, grid))
}

fn ask(rl: &mut DefaultEditor, dialog: &Dialog) -> Result<Option<String>> {
    println!("{}", dialog.heading());
    match rl.readline_with_initial(dialog.label(), (dialog.default_value(), "")) {
        Ok(answer) => Ok(Some(answer)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn answer_dialog(rl: &mut DefaultEditor, dialog: Dialog, schedule: &mut Schedule) -> Result<()> {
    let Some(answer) = ask(rl, &dialog)? else {
        return Ok(());
    };
    match dialog.apply(&answer, schedule)? {
        Some(event) => println!("{}", event.title),
        None => println!("Cancelled"),
    }
    Ok(())
}

fn print_status(session: &DaySession) {
    if let Some(message) = &session.status.message {
        println!("{}", message.text);
    }
}

/// Run one command. Returns false when the editor should exit.
async fn execute(
    cmd: EditCommand,
    session: &mut DaySession,
    backend: &BackendClient,
    rl: &mut DefaultEditor,
    grid: u32,
) -> Result<bool> {
    let schedule = &mut session.schedule;
    match cmd {
        EditCommand::List => println!("{}", render_events(schedule.events())),
        EditCommand::New { start, end } => {
            let (start, end) = place(schedule, start, end, grid);
            answer_dialog(rl, Dialog::CreateEvent { start, end }, schedule)?;
        }
        EditCommand::Move { target, start } => {
            let id = resolve(schedule, &target)?;
            let start = snap_to_grid(schedule.date().and_time(start), grid);
            println!("{}", schedule.move_to(&id, start)?.title);
        }
        EditCommand::Resize { target, start, end } => {
            let id = resolve(schedule, &target)?;
            let (start, end) = place(schedule, start, end, grid);
            println!("{}", schedule.resize(&id, start, end)?.title);
        }
        EditCommand::Rename { target } => {
            let id = resolve(schedule, &target)?;
            let dialog = Dialog::rename(schedule, &id)?;
            answer_dialog(rl, dialog, schedule)?;
        }
        EditCommand::Delete { target } => {
            let id = resolve(schedule, &target)?;
            println!("Deleted {}", schedule.delete(&id)?.title);
        }
        EditCommand::Text => println!("{}", schedule.to_text()),
        EditCommand::Reload => {
            session.reload(backend).await;
            print_status(session);
            println!("{}", render_events(session.schedule.events()));
        }
        EditCommand::Save => {
            session.save(backend).await;
            print_status(session);
        }
        EditCommand::Help => println!("{}", HELP),
        EditCommand::Quit => return Ok(false),
    }
    Ok(true)
}

pub async fn run(config: &AppConfig, date: chrono::NaiveDate) -> Result<()> {
    let backend = BackendClient::new(&config.api_base_url);
    let view = ViewConfig::for_mode(config.view);
    let mut session = DaySession::new(date, config.classifier(), view);

    println!("{} ({})", date.format("%A %B %-d, %Y"), view.label);
    session.reload(&backend).await;
    print_status(&session);
    println!("{}", render_events(session.schedule.events()));

    let mut rl = DefaultEditor::new()?;
    loop {
        let readline = rl.readline("dayplan> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                let keep_going = match parse_command(&line) {
                    Ok(cmd) => execute(cmd, &mut session, &backend, &mut rl, config.snap_minutes)
                        .await
                        .unwrap_or_else(|e| {
                            println!("{}", e);
                            true
                        }),
                    Err(e) => {
                        println!("{}", e);
                        true
                    }
                };
                if !keep_going {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
