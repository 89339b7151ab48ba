use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPetCare
/// Recurring pet-care scheduling backed by SQLite
#[derive(Parser)]
#[command(
    name = "rpetcare",
    version = env!("CARGO_PKG_VERSION"),
    about = "A pet-care planner CLI: schedule recurring feeding, walks, medication and vet visits using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Schedule a task, expanding its recurrence into dated instances
    Add {
        /// Task title
        title: String,

        #[arg(long, short, help = "Start date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, short, help = "Time of day (HH:MM, default from config)")]
        time: Option<String>,

        #[arg(long, short, help = "Category: feeding, walk, medication, grooming, vet, play or custom")]
        category: Option<String>,

        #[arg(long, help = "Pet id the task is for (omit for a general task)")]
        pet: Option<i64>,

        #[arg(long = "priority", short = 'p', help = "Priority: h/m/l or high/medium/low")]
        priority: Option<String>,

        #[arg(long, short, default_value = "none", help = "Recurrence rule (see `rules`)")]
        recur: String,

        #[arg(long = "desc", help = "Optional description")]
        description: Option<String>,

        #[arg(long = "new-category", help = "Register the category if it is unknown")]
        new_category: bool,
    },

    /// List tasks
    List {
        #[arg(
            long,
            short = 'P',
            help = "YYYY, YYYY-MM, YYYY-MM-DD, a START:END range or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(long, short, conflicts_with = "period", help = "Show a single day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Only tasks for this pet id")]
        pet: Option<i64>,

        #[arg(long, short, help = "Only tasks in this category")]
        category: Option<String>,

        #[arg(long, help = "Only tasks not yet completed")]
        pending: bool,
    },

    /// Show a month grid with a marker on every day that has tasks
    Calendar {
        #[arg(long, short, help = "Month to show (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, short, help = "Also list the tasks of this day below the grid")]
        day: Option<String>,
    },

    /// Show today's tasks and progress
    Today,

    /// Mark a task instance as completed
    Done {
        id: i64,

        #[arg(long, help = "Reopen the task instead")]
        undo: bool,
    },

    /// Delete a task instance, or every task on a date
    Del {
        #[arg(required_unless_present = "date", conflicts_with = "date")]
        id: Option<i64>,

        #[arg(long, help = "Delete all tasks on this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Trigger the reminder hook for a task
    Remind { id: i64 },

    /// Manage pets
    Pet {
        #[command(subcommand)]
        action: PetAction,
    },

    /// Manage task categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// List the supported recurrence rules
    Rules,

    /// Backup the database to a file
    Backup {
        #[arg(long = "file", help = "Destination file path")]
        file: String,

        #[arg(long = "compress", help = "Compress the backup into a .zip file")]
        compress: bool,

        #[arg(long, short, help = "Overwrite an existing file without asking")]
        yes: bool,
    },

    /// Export tasks to CSV or JSON
    Export {
        #[arg(long, value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long, help = "Absolute path of the output file")]
        file: String,

        #[arg(long, help = "YYYY, YYYY-MM, YYYY-MM-DD, a START:END range or 'all'")]
        range: Option<String>,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PetAction {
    /// Register a pet
    Add {
        name: String,

        #[arg(long, short, default_value = "dog")]
        species: String,

        #[arg(long)]
        breed: Option<String>,

        #[arg(long)]
        age: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List pets
    List,

    /// Remove a pet (its tasks are kept)
    Del {
        id: i64,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Register a custom category
    Add { name: String },

    /// List known categories
    List,
}
