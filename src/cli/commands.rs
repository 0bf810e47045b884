use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tt", about = concat!("tasktrack v", env!("CARGO_PKG_VERSION"), " - tasks in a plain text file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks in the current sort order (default)
    List,
    /// Add a task
    Add(AddArgs),
    /// Mark a completed task uncompleted, or the other way round
    Toggle(PositionArgs),
    /// Mark a task completed
    Done(PositionArgs),
    /// Mark a task uncompleted
    Undo(PositionArgs),
    /// Change a task's priority by an amount
    Priority(PriorityArgs),
    /// Remove one task
    Remove(PositionArgs),
    /// Remove all completed tasks
    Clean,
    /// Show how many tasks are left to complete
    Count,
    /// Choose the attribute the list is sorted by
    Sort(SortArgs),
    /// Flip the sort direction
    Reverse,
    /// Turn grouping of completed tasks on or off
    Group,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub name: String,
    /// Subject the task belongs to
    pub subject: String,
    /// Priority (1 is most urgent)
    pub priority: String,
    /// Due date as dd/mm/yyyy
    #[arg(long, default_value = "")]
    pub due: String,
}

#[derive(Args)]
pub struct PositionArgs {
    /// Row number as shown by `tt list`
    pub position: usize,
}

#[derive(Args)]
pub struct PriorityArgs {
    /// Row number as shown by `tt list`
    pub position: usize,
    /// Amount to add; negative numbers make the task more urgent
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

#[derive(Args)]
pub struct SortArgs {
    /// One of: name, subject, priority, due_date
    pub key: String,
}
