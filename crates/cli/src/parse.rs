//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use tripdeck_core::Priority;

/// One user intent from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Run the gateway
    Serve {
        port: Option<u16>,
        bind: Option<String>,
        ephemeral: bool,
    },
    Trip(TripAction),
    Todo(TodoAction),
    Note(NoteAction),
    Pins { search: Option<String> },
}

/// Itinerary intents. Day indexes are zero-based here.
#[derive(Debug, Clone, PartialEq)]
pub enum TripAction {
    Show { day: Option<usize> },
    Toggle { day: usize, stop: String },
    Cost { day: usize, stop: String, value: String },
    Notes {
        day: usize,
        stop: String,
        drafts: Vec<String>,
        yes: bool,
    },
    Import { file: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    List,
    Add {
        text: String,
        note: Option<String>,
        priority: Priority,
    },
    Toggle { id: String },
    Edit {
        id: String,
        text: String,
        note: Option<String>,
        priority: Priority,
    },
    Remove { id: String, yes: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoteAction {
    Show,
    Set { file: String },
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "serve" => Ok(CliAction::Serve {
            port: sub.get_one::<u16>("port").copied(),
            bind: opt_string(sub, "bind"),
            ephemeral: sub.get_flag("ephemeral"),
        }),
        "trip" => parse_trip(sub).map(CliAction::Trip),
        "todo" => parse_todo(sub).map(CliAction::Todo),
        "note" => parse_note(sub).map(CliAction::Note),
        "pins" => Ok(CliAction::Pins {
            search: opt_string(sub, "search"),
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_trip(matches: &ArgMatches) -> Result<TripAction, String> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| "trip: missing subcommand".to_string())?;

    match name {
        "show" => {
            let day = match sub.get_one::<usize>("day") {
                Some(&n) => Some(day_index(n)?),
                None => None,
            };
            Ok(TripAction::Show { day })
        }
        "toggle" => Ok(TripAction::Toggle {
            day: day_arg(sub)?,
            stop: string(sub, "stop")?,
        }),
        "cost" => Ok(TripAction::Cost {
            day: day_arg(sub)?,
            stop: string(sub, "stop")?,
            value: string(sub, "value")?,
        }),
        "notes" => Ok(TripAction::Notes {
            day: day_arg(sub)?,
            stop: string(sub, "stop")?,
            drafts: sub
                .get_many::<String>("text")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            yes: sub.get_flag("yes"),
        }),
        "import" => Ok(TripAction::Import {
            file: string(sub, "file")?,
        }),
        other => Err(format!("trip: unknown subcommand '{}'", other)),
    }
}

fn parse_todo(matches: &ArgMatches) -> Result<TodoAction, String> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| "todo: missing subcommand".to_string())?;

    match name {
        "list" => Ok(TodoAction::List),
        "add" => Ok(TodoAction::Add {
            text: string(sub, "text")?,
            note: opt_string(sub, "note"),
            priority: priority(sub)?,
        }),
        "toggle" => Ok(TodoAction::Toggle {
            id: string(sub, "id")?,
        }),
        "edit" => Ok(TodoAction::Edit {
            id: string(sub, "id")?,
            text: string(sub, "text")?,
            note: opt_string(sub, "note"),
            priority: priority(sub)?,
        }),
        "rm" => Ok(TodoAction::Remove {
            id: string(sub, "id")?,
            yes: sub.get_flag("yes"),
        }),
        other => Err(format!("todo: unknown subcommand '{}'", other)),
    }
}

fn parse_note(matches: &ArgMatches) -> Result<NoteAction, String> {
    match matches.subcommand() {
        Some(("show", _)) => Ok(NoteAction::Show),
        Some(("set", sub)) => Ok(NoteAction::Set {
            file: string(sub, "file")?,
        }),
        Some((other, _)) => Err(format!("note: unknown subcommand '{}'", other)),
        None => Err("note: missing subcommand".to_string()),
    }
}

// ===== Argument helpers =====

fn string(matches: &ArgMatches, name: &str) -> Result<String, String> {
    opt_string(matches, name).ok_or_else(|| format!("missing <{}>", name))
}

fn opt_string(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.get_one::<String>(name).cloned()
}

fn day_arg(matches: &ArgMatches) -> Result<usize, String> {
    let n = matches
        .get_one::<usize>("day")
        .copied()
        .ok_or_else(|| "missing <day>".to_string())?;
    day_index(n)
}

/// Days are numbered from 1 on the command line
fn day_index(n: usize) -> Result<usize, String> {
    n.checked_sub(1)
        .ok_or_else(|| "days are numbered from 1".to_string())
}

fn priority(matches: &ArgMatches) -> Result<Priority, String> {
    match matches.get_one::<String>("priority") {
        Some(raw) => raw.parse().map_err(|e| format!("{}", e)),
        None => Ok(Priority::default()),
    }
}
