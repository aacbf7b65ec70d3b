use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Startup options for the shell binary.
#[derive(Parser, Debug)]
#[command(
    name = "addrbook",
    bin_name = "addrbook",
    version,
    about = "Contact book with birthday reminders",
    long_about = None
)]
pub struct Cli {
    /// Days ahead the `birthdays` command looks by default
    #[arg(long)]
    pub days: Option<u32>,

    /// Directory holding config.json
    #[arg(long, env = "ADDRBOOK_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(
    name = "addrbook",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Say hello
    Hello,

    /// Add a contact, or a phone to an existing contact
    Add {
        name: String,
        /// 10-digit phone number
        phone: Option<String>,
    },

    /// Change one of a contact's phone numbers
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phone numbers
    Phone { name: String },

    /// Remove a phone number from a contact
    RemovePhone { name: String, phone: String },

    /// Delete a contact
    Delete { name: String },

    /// Show all contacts
    All,

    /// Set a contact's birthday (DD.MM.YYYY)
    AddBirthday { name: String, birthday: String },

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// List birthdays in the coming days
    Birthdays {
        /// How many days ahead to look
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Show or change settings
    Config {
        /// Setting name (upcoming_days, leap_day)
        key: Option<String>,

        /// New value (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show help
    Help { command: Option<String> },

    /// Leave the shell
    #[command(alias = "close")]
    Exit,
}

/// Parses one input line. Blank lines yield `None`; the command word is
/// matched case-insensitively.
pub fn parse_line(line: &str) -> Option<Result<ShellCommand, clap::Error>> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    let args = std::iter::once(command).chain(words.map(str::to_string));
    Some(ShellLine::try_parse_from(args).map(|parsed| parsed.command))
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Contacts,
    Birthdays,
    Session,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Contacts => "Contact Commands:",
            CommandGroup::Birthdays => "Birthday Commands:",
            CommandGroup::Session => "Session:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "change" | "phone" | "remove-phone" | "delete" | "all" => {
                Some(CommandGroup::Contacts)
            }
            "add-birthday" | "show-birthday" | "birthdays" => Some(CommandGroup::Birthdays),
            "hello" | "config" | "help" | "exit" => Some(CommandGroup::Session),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Contacts,
            CommandGroup::Birthdays,
            CommandGroup::Session,
        ]
    }
}

/// Returns the grouped command overview shown at startup and by `help`.
pub fn get_grouped_help() -> String {
    let cmd = ShellLine::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::new();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<14} {}\n", sc.get_name(), about));
            }
            output.push('\n');
        }
    }
    output
}

/// Help text for a single command, or `None` if there is no such command.
pub fn get_command_help(name: &str) -> Option<String> {
    let mut cmd = ShellLine::command();
    let name = name.to_lowercase();
    let help = cmd
        .get_subcommands_mut()
        .find(|sc| sc.get_name() == name || sc.get_all_aliases().any(|a| a == name))
        .map(|sc| sc.render_help().to_string());
    help
}
