use clap::{Parser, Subcommand};

use gradplan::PoolCategory;

/// Gradplan - degree plan validation engine and CLI planner
#[derive(Parser, Debug)]
#[command(name = "gradplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a plan for a program (replaces any existing plan)
    Init {
        /// Program code, e.g. 1001
        program: u32,

        /// Major name within the program
        #[arg(short, long)]
        major: Option<String>,
    },

    /// Print the plan with verdicts and credit totals
    Show,

    /// Validate every placement; exits nonzero if any is invalid
    Check,

    /// Place a course in a term (moves it if already planned)
    Add {
        /// Course code
        code: String,

        /// Term position, 1-based
        #[arg(short, long)]
        term: usize,
    },

    /// Remove a course from a term
    Remove {
        /// Course code
        code: String,

        /// Term position, 1-based
        #[arg(short, long)]
        term: usize,
    },

    /// Move a course to another term
    #[command(name = "move")]
    MoveCourse {
        /// Course code
        code: String,

        /// Term position, 1-based
        #[arg(short, long)]
        term: usize,
    },

    /// Manage terms
    Term {
        #[command(subcommand)]
        action: TermAction,
    },

    /// Author a custom course and place it in the first term
    Custom {
        /// Course code (uppercased)
        code: String,

        /// Course name
        name: String,

        /// Credit points
        #[arg(short, long, default_value_t = 10)]
        credits: u32,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List unplanned courses by category
    Pool {
        /// core, core-options, major, or electives
        #[arg(default_value = "electives")]
        category: PoolCategory,

        /// Case-insensitive name/code filter (electives only)
        #[arg(short, long)]
        search: Option<String>,

        /// Campus filter (electives only)
        #[arg(long)]
        campus: Option<String>,

        /// Trimester label filter, e.g. "Trimester 1" (electives only)
        #[arg(long)]
        trimester: Option<String>,
    },

    /// Print a shareable plan token
    Share,

    /// Load a plan from a share token
    Load {
        /// Token produced by `share`
        token: String,
    },

    /// Clear all placements and re-scaffold
    Clear,

    /// List programs in the catalog
    Programs,
}

#[derive(Subcommand, Debug)]
pub enum TermAction {
    /// Append a term continuing the year/trimester cadence
    Add,

    /// Remove a term; its courses return to the pool
    Remove {
        /// Term position, 1-based
        term: usize,
    },

    /// Change a term's year or trimester
    Set {
        /// Term position, 1-based
        term: usize,

        /// New year
        #[arg(short, long)]
        year: Option<i32>,

        /// New trimester (1-3)
        #[arg(long)]
        trimester: Option<u8>,
    },
}
