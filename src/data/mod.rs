mod parser;
mod writer;

pub use parser::{parse_bank_lines, parse_correct_line};
pub use writer::{append_to_bank, write_objective, write_question, write_subjective};

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Question;

/// Error loading a question bank.
#[derive(Debug)]
pub enum LoadError {
    /// The bank file could not be opened or read. Distinct from a bank
    /// that reads fine but parses to zero questions.
    Io(io::Error),
    /// A `#CORRECT` entry held something other than a 1-based option number.
    InvalidAnswerIndex { token: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read bank file: {}", e),
            LoadError::InvalidAnswerIndex { token } => {
                write!(f, "invalid #CORRECT entry {:?}: expected a 1-based option number", token)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::InvalidAnswerIndex { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Loads every record of a bank file, in file order.
///
/// Bank files are read as raw bytes and decoded lossily, so a bank
/// written under another encoding still loads line by line.
pub fn load_bank<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_bank_lines(
        text.split_terminator('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line)),
    )
}

/// Bank filenames without the `.txt` suffix get it appended.
pub fn ensure_txt_extension(name: &str) -> PathBuf {
    if name.ends_with(".txt") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_io_error_not_an_empty_bank() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_bank(dir.path().join("no-such-bank.txt"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_existing_empty_file_is_an_empty_bank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert_eq!(load_bank(&path).unwrap(), Vec::new());
    }

    #[test]
    fn test_crlf_banks_load_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        fs::write(&path, "#JUDGE\r\nWindows line endings?\r\n#OPTIONS\r\nT\r\nF\r\n#CORRECT\r\n1\r\n#END\r\n\r\n").unwrap();

        let questions = load_bank(&path).unwrap();
        assert_eq!(questions.len(), 1);
        let Question::Objective(q) = &questions[0] else {
            panic!("expected an objective question");
        };
        assert_eq!(q.stem, vec!["Windows line endings?".to_string()]);
        assert_eq!(q.options, vec!["T".to_string(), "F".to_string()]);
    }

    #[test]
    fn test_txt_extension_is_appended_once() {
        assert_eq!(ensure_txt_extension("bank"), PathBuf::from("bank.txt"));
        assert_eq!(ensure_txt_extension("bank.txt"), PathBuf::from("bank.txt"));
        assert_eq!(ensure_txt_extension("a.b"), PathBuf::from("a.b.txt"));
    }
}
