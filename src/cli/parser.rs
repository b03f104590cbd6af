use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build a weekly project timesheet from calendar appointments tagged as PROJECT:TASK:description",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the project registry file (CSV)
    #[arg(global = true, long = "projects", value_name = "FILE")]
    pub projects: Option<String>,

    /// Override the calendar file (CSV or JSON)
    #[arg(global = true, long = "calendar", value_name = "FILE")]
    pub calendar: Option<String>,

    /// Log skipped appointments and other diagnostics to stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the commands printing a week report.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Do not copy the report to the clipboard
    #[arg(long = "no-clipboard")]
    pub no_clipboard: bool,

    /// Print the report as JSON instead of a table
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Report a given week and copy it to the clipboard
    Week {
        #[arg(long, short = 'y', help = "Year of the week")]
        year: i32,

        #[arg(long = "weeknumber", short = 'w', help = "Week number (1..=54)")]
        weeknumber: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Report the current week and copy it to the clipboard
    ///
    /// Uses today's ISO week number. In years starting on Friday to Monday
    /// that number names the previous week, so the report can lag one week;
    /// use `week` to pick it explicitly.
    ThisWeek {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Report the previous week and copy it to the clipboard
    ///
    /// Same ISO week lookup as `this-week`, so it can lag one week too.
    LastWeek {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write one or more weeks to a workbook, one sheet per week
    Export {
        #[arg(long, short = 'y', help = "Year of the weeks")]
        year: i32,

        #[arg(
            long = "weeks",
            short = 'w',
            value_delimiter = ',',
            required = true,
            help = "Comma separated week numbers, e.g. 10,11,12"
        )]
        weeks: Vec<u32>,

        #[arg(long, value_name = "FILE", help = "Output workbook (default: output_file from config)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the workbook without asking")]
        force: bool,
    },

    /// Hours per project between two dates (both included)
    Range {
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: String,
    },
}
