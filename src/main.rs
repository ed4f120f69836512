use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use quiz_bank::data::ensure_txt_extension;
use quiz_bank::session::{self, AnswerLog, OBJECTIVE_LOG, SUBJECTIVE_LOG};
use quiz_bank::{Question, QuizError, authoring, console, export, load_bank};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an objective quiz (judge, choice and multi-choice questions)
    Objective {
        /// Question bank to quiz from (.txt appended when missing)
        bank: Option<String>,
        /// Ask the questions in random order
        #[arg(long, conflicts_with = "sequential")]
        random: bool,
        /// Ask the questions in file order
        #[arg(long)]
        sequential: bool,
        /// Answer log for missed questions
        #[arg(long, default_value = OBJECTIVE_LOG)]
        log: PathBuf,
        /// Seed the shuffles for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a subjective (free-response) quiz
    Subjective {
        /// Question bank to quiz from (.txt appended when missing)
        bank: Option<String>,
        /// Ask the questions in random order
        #[arg(long, conflicts_with = "sequential")]
        random: bool,
        /// Ask the questions in file order
        #[arg(long)]
        sequential: bool,
        /// Answer log; every answer is recorded
        #[arg(long, default_value = SUBJECTIVE_LOG)]
        log: PathBuf,
        /// Seed the shuffle for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Add objective questions to a bank
    InsertObjective {
        /// Bank to append to (.txt appended when missing)
        bank: Option<String>,
    },
    /// Add subjective questions to a bank
    InsertSubjective {
        /// Bank to append to (.txt appended when missing)
        bank: Option<String>,
    },
    /// Convert bank files into one JSON document
    Export {
        /// Banks to convert (.txt appended when missing)
        banks: Vec<String>,
        /// Output file
        #[arg(short, long, default_value = "questions.json")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    match run(Args::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), QuizError> {
    match command {
        Command::Objective {
            bank,
            random,
            sequential,
            log,
            seed,
        } => {
            let bank = resolve_bank(bank)?;
            let questions: Vec<_> = load_bank(&bank)?
                .into_iter()
                .filter_map(Question::into_objective)
                .collect();
            if questions.is_empty() {
                return Err(QuizError::EmptyBank);
            }

            let random_order = resolve_order(random, sequential)?;
            let mut rng = session::session_rng(seed);
            let mut answer_log = AnswerLog::open(&log);
            let outcome = {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                session::run_objective(
                    questions,
                    random_order,
                    &mut rng,
                    &mut answer_log,
                    &mut input,
                    &mut io::stdout(),
                )?
            };

            println!(
                "\nQuiz over, correct {} questions out of {}. Accuracy: {:.0}%",
                outcome.correct,
                outcome.total,
                outcome.accuracy_percent()
            );
            println!("\nIncorrect answers have been recorded in {}", log.display());
            console::pause_for_enter()?;
            Ok(())
        }
        Command::Subjective {
            bank,
            random,
            sequential,
            log,
            seed,
        } => {
            let bank = resolve_bank(bank)?;
            let questions: Vec<_> = load_bank(&bank)?
                .into_iter()
                .filter_map(Question::into_subjective)
                .collect();
            if questions.is_empty() {
                return Err(QuizError::EmptyBank);
            }

            let random_order = resolve_order(random, sequential)?;
            let mut rng = session::session_rng(seed);
            let mut answer_log = AnswerLog::open(&log);
            {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                session::run_subjective(
                    questions,
                    random_order,
                    &mut rng,
                    &mut answer_log,
                    &mut input,
                    &mut io::stdout(),
                )?;
            }

            println!("\nQuiz over, your answers are saved in {}", log.display());
            console::pause_for_enter()?;
            Ok(())
        }
        Command::InsertObjective { bank } => {
            let bank = resolve_bank(bank)?;
            authoring::insert_objective(&bank)?;
            Ok(())
        }
        Command::InsertSubjective { bank } => {
            let bank = resolve_bank(bank)?;
            authoring::insert_subjective(&bank)?;
            Ok(())
        }
        Command::Export { banks, output } => {
            let banks = if banks.is_empty() {
                vec![resolve_bank(None)?]
            } else {
                banks.iter().map(|name| ensure_txt_extension(name)).collect()
            };
            let document = export::collect_banks(&banks)?;
            export::write_json(&document, &output)?;
            println!(
                "Exported {} objective and {} subjective questions to {}",
                document.objective.len(),
                document.subjective.len(),
                output.display()
            );
            Ok(())
        }
    }
}

/// Bank from the CLI, or the interactive filename prompt.
fn resolve_bank(bank: Option<String>) -> Result<PathBuf, QuizError> {
    let name = match bank {
        Some(name) => name,
        None => match console::prompt("Please enter the question bank filename: ")? {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(QuizError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "no bank filename given",
                )));
            }
        },
    };
    Ok(ensure_txt_extension(name.trim()))
}

/// Question order from the CLI flags, or the numeric mode prompt.
fn resolve_order(random: bool, sequential: bool) -> Result<bool, QuizError> {
    if random {
        return Ok(true);
    }
    if sequential {
        return Ok(false);
    }
    let choice =
        console::prompt("Please select mode:\n1. Sequential Quiz\n2. Random Quiz\nPlease choose: ")?;
    Ok(matches!(choice.as_deref().map(str::trim), Some("2")))
}
