// src/cli.rs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "classlog - log school tasks and incidents by teacher, student and category",
    long_about = "classlog keeps a log of events tied to teachers, students and categories in a workbook. Run it without a subcommand to open the interactive session, where you can add entries or browse and filter the log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workbook file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub workbook: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Starts the interactive session (default).
    Run,

    /// Creates the workbook with the Teachers, Students, Categories and log sheets.
    /// Existing sheets and rows are left untouched.
    Init,

    /// Appends names to a reference sheet.
    Seed {
        #[arg(value_enum, help = "Which reference sheet to append to")]
        list: ReferenceKind,

        #[arg(required = true, help = "One or more names to append, in order")]
        names: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReferenceKind {
    Teachers,
    Students,
    Categories,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["classlog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn seed_takes_kind_and_names() {
        let cli = Cli::try_parse_from(["classlog", "seed", "students", "Dan", "Eve", "-w", "book.db"]).unwrap();
        match cli.command {
            Some(Commands::Seed { list, names }) => {
                assert_eq!(list, ReferenceKind::Students);
                assert_eq!(names, vec!["Dan", "Eve"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.workbook, Some(PathBuf::from("book.db")));
    }

    #[test]
    fn seed_requires_a_name() {
        assert!(Cli::try_parse_from(["classlog", "seed", "teachers"]).is_err());
    }
}
