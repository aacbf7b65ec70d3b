//! # Shell
//!
//! The interactive front end: reads one command per line from stdin, sends it
//! through the [`AddressBookApi`] and prints what comes back.
//!
//! This is the only layer that touches stdin, stdout or the wall clock.
//! Failures of a single command are printed and the loop carries on; only
//! startup problems (for example an unreadable config file) end the process.
//!
//! ## Structure
//!
//! - `run()`: startup, then the read loop
//! - `init_context()`: config loading and API construction
//! - `handle_line()`: parse and dispatch one line
//! - `dispatch()`: one arm per [`ShellCommand`]

use super::render::{
    render_config, render_error, render_messages, render_records, render_upcoming,
};
use super::setup::{get_command_help, get_grouped_help, parse_line, Cli, ShellCommand};
use addrbook::api::{AddressBookApi, CmdResult, ConfigAction};
use addrbook::config::AppConfig;
use addrbook::error::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const WELCOME: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";
const PROMPT: &str = "Enter a command: ";
const INVALID_COMMAND: &str = "Invalid command!";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut api = init_context(&cli)?;
    let interactive = io::stdin().is_terminal();

    let mut out = io::stdout().lock();
    write!(out, "{}\n\n{}", WELCOME, get_grouped_help())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            debug!("stdin closed");
            break;
        };
        let line = line?;
        let today = Local::now().date_naive();
        let (output, flow) = handle_line(&mut api, &line, today);
        out.write_all(output.as_bytes())?;
        if flow == Flow::Exit {
            break;
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    // stderr keeps stdout free for the shell itself
    let filter = if verbose {
        EnvFilter::new("addrbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AddressBookApi> {
    let config_dir = cli.config_dir.clone().or_else(default_config_dir);
    let mut config = match &config_dir {
        Some(dir) => AppConfig::load(dir)?,
        None => AppConfig::default(),
    };
    if let Some(days) = cli.days {
        config.upcoming_days = days;
    }
    info!(
        config_dir = ?config_dir,
        upcoming_days = config.upcoming_days,
        "starting shell"
    );
    Ok(AddressBookApi::new(config, config_dir))
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "addrbook", "addrbook").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Runs one input line and returns the text to print plus whether to go on.
pub fn handle_line(api: &mut AddressBookApi, line: &str, today: NaiveDate) -> (String, Flow) {
    let command = match parse_line(line) {
        None => return (String::new(), Flow::Continue),
        Some(Ok(command)) => command,
        Some(Err(err)) => return (render_parse_error(&err), Flow::Continue),
    };
    debug!(?command, "dispatching");

    if command == ShellCommand::Exit {
        return (format!("{}\n", FAREWELL), Flow::Exit);
    }

    let output = match dispatch(api, command, today) {
        Ok(output) => output,
        Err(err) => render_error(&err),
    };
    (output, Flow::Continue)
}

fn render_parse_error(err: &clap::Error) -> String {
    use clap::error::ErrorKind;
    match err.kind() {
        ErrorKind::InvalidSubcommand => format!("{}\n", INVALID_COMMAND),
        _ => err.render().to_string(),
    }
}

fn dispatch(api: &mut AddressBookApi, command: ShellCommand, today: NaiveDate) -> Result<String> {
    let output = match command {
        ShellCommand::Hello => render_messages(&api.hello().messages),
        ShellCommand::Add { name, phone } => {
            plain(api.add_contact(&name, phone.as_deref())?)
        }
        ShellCommand::Change {
            name,
            old_phone,
            new_phone,
        } => plain(api.change_phone(&name, &old_phone, &new_phone)?),
        ShellCommand::Phone { name } => plain(api.show_phones(&name)?),
        ShellCommand::RemovePhone { name, phone } => plain(api.remove_phone(&name, &phone)?),
        ShellCommand::Delete { name } => plain(api.delete_contact(&name)?),
        ShellCommand::All => {
            let result = api.list_contacts()?;
            render_records(&result.listed_records) + &render_messages(&result.messages)
        }
        ShellCommand::AddBirthday { name, birthday } => {
            plain(api.add_birthday(&name, &birthday)?)
        }
        ShellCommand::ShowBirthday { name } => plain(api.show_birthday(&name)?),
        ShellCommand::Birthdays { days } => {
            let result = api.upcoming_birthdays(days, today)?;
            render_messages(&result.messages) + &render_upcoming(&result.upcoming)
        }
        ShellCommand::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            let show_all = action == ConfigAction::ShowAll;
            let result = api.config(action)?;
            let mut output = String::new();
            if let (true, Some(config)) = (show_all, &result.config) {
                output.push_str(&render_config(config));
            }
            output + &render_messages(&result.messages)
        }
        ShellCommand::Help { command } => match command {
            Some(name) => {
                get_command_help(&name).unwrap_or_else(|| format!("{}\n", INVALID_COMMAND))
            }
            None => get_grouped_help(),
        },
        ShellCommand::Exit => String::new(),
    };
    Ok(output)
}

fn plain(result: CmdResult) -> String {
    render_messages(&result.messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> AddressBookApi {
        colored::control::set_override(false);
        AddressBookApi::new(AppConfig::default(), None)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
    }

    fn run_line(api: &mut AddressBookApi, line: &str) -> String {
        let (output, flow) = handle_line(api, line, today());
        assert_eq!(flow, Flow::Continue, "{line}");
        output
    }

    #[test]
    fn blank_line_prints_nothing() {
        let mut api = api();
        assert_eq!(run_line(&mut api, ""), "");
    }

    #[test]
    fn exit_and_close_stop_the_loop() {
        let mut api = api();
        assert_eq!(
            handle_line(&mut api, "exit", today()),
            ("Good bye!\n".to_string(), Flow::Exit)
        );
        assert_eq!(handle_line(&mut api, "Close", today()).1, Flow::Exit);
    }

    #[test]
    fn unknown_command() {
        let mut api = api();
        assert_eq!(run_line(&mut api, "dance"), "Invalid command!\n");
    }

    #[test]
    fn add_then_list() {
        let mut api = api();
        run_line(&mut api, "add John 1234567890");
        run_line(&mut api, "add-birthday john 20.10.1990");
        assert_eq!(
            run_line(&mut api, "all"),
            "John:\n  Phones:\n    1234567890\n  Birthday: 20.10.1990\n"
        );
    }

    #[test]
    fn errors_are_printed_and_loop_continues() {
        let mut api = api();
        let out = run_line(&mut api, "phone Ghost");
        assert_eq!(out, "There is no contact with the name: 'Ghost'\n");

        let out = run_line(&mut api, "add John 12");
        assert!(out.contains("must contain exactly 10 digits"));
    }

    #[test]
    fn birthdays_lists_congratulation_dates() {
        let mut api = api();
        run_line(&mut api, "add Sat");
        run_line(&mut api, "add-birthday Sat 18.10.1990");
        let out = run_line(&mut api, "birthdays");
        assert_eq!(
            out,
            "1 upcoming birthdays found!\nName: Sat, Congratulations date: 20.10.2025\n"
        );
    }

    #[test]
    fn config_show_all() {
        let mut api = api();
        assert_eq!(
            run_line(&mut api, "config"),
            "upcoming_days = 7\nleap_day = feb28\n"
        );
    }

    #[test]
    fn help_for_known_and_unknown_command() {
        let mut api = api();
        assert!(run_line(&mut api, "help add").contains("Usage"));
        assert_eq!(run_line(&mut api, "help fly"), "Invalid command!\n");
        assert!(run_line(&mut api, "help").contains("Birthday Commands:"));
    }
}
