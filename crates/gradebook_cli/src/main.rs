//! Gradebook command-line entry point.
//!
//! # Responsibility
//! - Map subcommands onto `gradebook_core::Service` calls.
//! - Print integer status codes for mutations and one record per line for lists.
//!
//! Usage:
//!   gradebook --data-dir <dir> student add <id> <name> <group>
//!   gradebook --data-dir <dir> student delete <id>
//!   gradebook --data-dir <dir> homework add <id> <description> <deadline> <startline>
//!   gradebook --data-dir <dir> grade add <student-id> <homework-id> <value> <week> [feedback]
//!   gradebook --data-dir <dir> grade list

use clap::{Parser, Subcommand};
use gradebook_core::{default_log_level, init_logging, open_file_service, FileService, StorageConfig};
use log::error;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Students, homework and grades kept in local JSON files")]
#[command(version = gradebook_core::core_version())]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding students.json, homework.json and grades.json
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error; only meaningful with --log-dir
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage students
    #[command(subcommand)]
    Student(StudentCommand),
    /// Manage homework assignments
    #[command(subcommand)]
    Homework(HomeworkCommand),
    /// Record and list grades
    #[command(subcommand)]
    Grade(GradeCommand),
}

#[derive(Subcommand)]
enum StudentCommand {
    /// Prints 1 when added, 0 when the id already exists
    #[command(allow_negative_numbers = true)]
    Add { id: String, name: String, group: i32 },
    /// Prints 1 when removed, 0 when no student matched
    Delete { id: String },
    List,
}

#[derive(Subcommand)]
enum HomeworkCommand {
    /// Prints 1 when added, 0 when the id already exists
    #[command(allow_negative_numbers = true)]
    Add {
        id: String,
        description: String,
        deadline: i32,
        startline: i32,
    },
    /// Prints 1 when removed, 0 when no homework matched
    Delete { id: String },
    List,
}

#[derive(Subcommand)]
enum GradeCommand {
    /// Prints 0 when added, 1 when already graded, -1 when student or homework is unknown
    #[command(allow_negative_numbers = true)]
    Add {
        student_id: String,
        homework_id: String,
        value: f64,
        week: i32,
        #[arg(default_value = "")]
        feedback: String,
    },
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={}", err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut service = open_file_service(&StorageConfig::in_dir(cli.data_dir))?;

    match cli.command {
        Commands::Student(command) => run_student(&mut service, command),
        Commands::Homework(command) => run_homework(&mut service, command),
        Commands::Grade(command) => run_grade(&mut service, command),
    }
}

fn run_student(service: &mut FileService, command: StudentCommand) -> Result<(), Box<dyn Error>> {
    match command {
        StudentCommand::Add { id, name, group } => {
            println!("{}", service.save_student(&id, &name, group)?.code());
        }
        StudentCommand::Delete { id } => {
            println!("{}", service.delete_student(Some(id.as_str()))?.code());
        }
        StudentCommand::List => {
            for student in service.find_all_students()? {
                println!("{}\t{}\t{}", student.id, student.name, student.group);
            }
        }
    }
    Ok(())
}

fn run_homework(
    service: &mut FileService,
    command: HomeworkCommand,
) -> Result<(), Box<dyn Error>> {
    match command {
        HomeworkCommand::Add {
            id,
            description,
            deadline,
            startline,
        } => {
            let outcome = service.save_homework(&id, &description, deadline, startline)?;
            println!("{}", outcome.code());
        }
        HomeworkCommand::Delete { id } => {
            println!("{}", service.delete_homework(Some(id.as_str()))?.code());
        }
        HomeworkCommand::List => {
            for homework in service.find_all_homework()? {
                println!(
                    "{}\t{}\tweeks {}-{}",
                    homework.id, homework.description, homework.startline, homework.deadline
                );
            }
        }
    }
    Ok(())
}

fn run_grade(service: &mut FileService, command: GradeCommand) -> Result<(), Box<dyn Error>> {
    match command {
        GradeCommand::Add {
            student_id,
            homework_id,
            value,
            week,
            feedback,
        } => {
            let outcome = service.save_grade(&student_id, &homework_id, value, week, &feedback)?;
            println!("{}", outcome.code());
        }
        GradeCommand::List => {
            for grade in service.find_all_grades()? {
                println!(
                    "{}\t{}\t{:.2}\tweek {}\t{}",
                    grade.student_id, grade.homework_id, grade.value, grade.week, grade.feedback
                );
            }
        }
    }
    Ok(())
}
