//! clap command tree

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the `tripdeck` command
pub fn build_cli() -> Command {
    Command::new("tripdeck")
        .about("Trip planner: itinerary, todos, notes and map pins")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .env("TRIPDECK_DATA_DIR")
                .value_name("DIR")
                .help("Bucket directory holding the JSON documents"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print the raw document instead of the formatted view"),
        )
        .subcommand(serve_command())
        .subcommand(trip_command())
        .subcommand(todo_command())
        .subcommand(note_command())
        .subcommand(
            Command::new("pins").about("List map pins").arg(
                Arg::new("search")
                    .long("search")
                    .short('s')
                    .value_name("QUERY")
                    .help("Only pins whose title or description contains QUERY"),
            ),
        )
}

fn serve_command() -> Command {
    Command::new("serve")
        .about("Run the HTTP gateway")
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .value_parser(value_parser!(u16))
                .help("Port to listen on (overrides TRIPDECK_PORT)"),
        )
        .arg(
            Arg::new("bind")
                .long("bind")
                .value_name("ADDR")
                .help("Interface to bind (overrides TRIPDECK_BIND)"),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .action(ArgAction::SetTrue)
                .help("Keep documents in memory; nothing is written to disk"),
        )
}

fn day_arg() -> Arg {
    Arg::new("day")
        .required(true)
        .value_parser(value_parser!(usize))
        .help("Day number, starting at 1")
}

fn stop_arg() -> Arg {
    Arg::new("stop").required(true).help("Stop id")
}

fn yes_arg() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .action(ArgAction::SetTrue)
        .help("Answer yes to confirmation prompts")
}

fn priority_arg() -> Arg {
    Arg::new("priority")
        .long("priority")
        .value_parser(["low", "high"])
        .help("Priority")
}

fn trip_command() -> Command {
    Command::new("trip")
        .about("Itinerary")
        .subcommand_required(true)
        .subcommand(
            Command::new("show").about("Show the itinerary").arg(
                Arg::new("day")
                    .long("day")
                    .short('d')
                    .value_parser(value_parser!(usize))
                    .help("Only this day"),
            ),
        )
        .subcommand(
            Command::new("toggle")
                .about("Mark a stop done or not done")
                .arg(day_arg())
                .arg(stop_arg()),
        )
        .subcommand(
            Command::new("cost")
                .about("Set a stop's estimated cost")
                .arg(day_arg())
                .arg(stop_arg())
                .arg(
                    Arg::new("value")
                        .required(true)
                        .allow_negative_numbers(true)
                        .help("New cost in SGD"),
                ),
        )
        .subcommand(
            Command::new("notes")
                .about("Replace a stop's notes")
                .long_about(
                    "Replace a stop's notes. Several TEXT values are saved one after \
                     another, asking before a note is overwritten again.",
                )
                .arg(day_arg())
                .arg(stop_arg())
                .arg(
                    Arg::new("text")
                        .required(true)
                        .num_args(1..)
                        .help("Note text"),
                )
                .arg(yes_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Replace the whole itinerary with a JSON file")
                .arg(Arg::new("file").required(true).help("JSON file, or - for stdin")),
        )
}

fn todo_command() -> Command {
    Command::new("todo")
        .about("Todo list")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List todos"))
        .subcommand(
            Command::new("add")
                .about("Add a todo")
                .arg(Arg::new("text").required(true).help("What to do"))
                .arg(Arg::new("note").long("note").short('n').help("Extra detail"))
                .arg(priority_arg()),
        )
        .subcommand(
            Command::new("toggle")
                .about("Mark a todo done or not done")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("edit")
                .about("Replace a todo's text, note and priority")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("text").long("text").short('t').required(true))
                .arg(Arg::new("note").long("note").short('n'))
                .arg(priority_arg()),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a todo")
                .arg(Arg::new("id").required(true))
                .arg(yes_arg()),
        )
}

fn note_command() -> Command {
    Command::new("note")
        .about("General note")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show the note"))
        .subcommand(
            Command::new("set")
                .about("Replace the note body")
                .arg(Arg::new("file").required(true).help("Text file, or - for stdin")),
        )
}
