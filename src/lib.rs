//! # quiz-bank
//!
//! A flat-file quiz toolkit: question banks are plain text files of
//! `#JUDGE`/`#CHOICE`/`#MULTICHOICE`/`#SUBJECTIVE` records, quizzed
//! interactively in the terminal, with misses (and all free-response
//! answers) appended to an answer log for later review.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io;
//!
//! use quiz_bank::session::{self, AnswerLog};
//! use quiz_bank::{Question, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the objective questions of a bank file
//!     let questions: Vec<_> = quiz_bank::load_bank("questions.txt")?
//!         .into_iter()
//!         .filter_map(Question::into_objective)
//!         .collect();
//!
//!     // Quiz them in file order, logging misses
//!     let mut rng = session::session_rng(None);
//!     let mut log = AnswerLog::open(session::OBJECTIVE_LOG);
//!     let stdin = io::stdin();
//!     let outcome = session::run_objective(
//!         questions,
//!         false,
//!         &mut rng,
//!         &mut log,
//!         &mut stdin.lock(),
//!         &mut io::stdout(),
//!     )?;
//!
//!     println!("{} / {}", outcome.correct, outcome.total);
//!     Ok(())
//! }
//! ```

pub mod authoring;
pub mod console;
pub mod data;
pub mod export;
pub mod models;
pub mod session;

use std::io;

pub use data::{LoadError, load_bank};
pub use models::{ObjectiveQuestion, Question, QuestionKind, SubjectiveQuestion};
pub use session::{AnswerLog, ObjectiveOutcome};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading the question bank.
    Load(LoadError),
    /// IO error during a quiz session.
    Io(io::Error),
    /// The bank loaded fine but holds no questions of the requested
    /// flavor.
    EmptyBank,
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
            QuizError::EmptyBank => {
                write!(f, "No questions found, add some with an insert command first")
            }
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
            QuizError::EmptyBank => None,
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}
