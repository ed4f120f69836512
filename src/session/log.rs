use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use crate::models::{ObjectiveQuestion, SubjectiveQuestion};
use crate::session::answer::index_to_letter;

/// Default answer log for objective sessions.
pub const OBJECTIVE_LOG: &str = "obj-answers.txt";
/// Default answer log for subjective sessions.
pub const SUBJECTIVE_LOG: &str = "sub-answer.txt";

/// Append-mode log of missed objective answers and of every subjective
/// answer, one flushed record per question.
///
/// Log writes are best-effort: a log that cannot be opened or written
/// costs a warning, never the session.
pub struct AnswerLog {
    path: PathBuf,
    file: Option<File>,
}

impl AnswerLog {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("cannot open answer log {}: {}", path.display(), e);
                None
            }
        };
        Self { path, file }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record_objective(&mut self, question: &ObjectiveQuestion, chosen: &[usize]) {
        self.write_record(&objective_record(question, chosen));
    }

    pub fn record_subjective(&mut self, question: &SubjectiveQuestion, user_answers: &[String]) {
        self.write_record(&subjective_record(question, user_answers));
    }

    fn write_record(&mut self, record: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if let Err(e) = file.write_all(record.as_bytes()).and_then(|()| file.flush()) {
            warn!("cannot write answer log {}: {}", self.path.display(), e);
        }
    }
}

/// Renders a missed objective question: options in storage order with
/// canonical labels, the user's picks as option text in entry order,
/// the correct answers as option text in storage order.
pub fn objective_record(question: &ObjectiveQuestion, chosen: &[usize]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", question.kind.marker());
    for line in &question.stem {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "#OPTIONS");
    for (index, option) in question.options.iter().enumerate() {
        if question.kind.uses_letters() {
            let _ = writeln!(out, "{}. {}", index_to_letter(index), option);
        } else {
            let _ = writeln!(out, "{}. {}", index + 1, option);
        }
    }
    let _ = writeln!(out, "#USER_ANSWER");
    let _ = writeln!(out, "{}", option_texts(question, chosen));
    let _ = writeln!(out, "#CORRECT_ANSWER");
    let _ = writeln!(out, "{}", option_texts(question, &question.correct));
    let _ = writeln!(out, "#END");
    out.push('\n');
    out
}

/// Renders one subjective question with the operator's answer lines
/// and the reference answer lines, all verbatim.
pub fn subjective_record(question: &SubjectiveQuestion, user_answers: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#SUBJECTIVE");
    for line in &question.stem {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "#USER_ANSWER");
    for answer in user_answers {
        let _ = writeln!(out, "{answer}");
    }
    let _ = writeln!(out, "#CORRECT_ANSWER");
    for answer in &question.answers {
        let _ = writeln!(out, "{answer}");
    }
    let _ = writeln!(out, "#END");
    out.push('\n');
    out
}

fn option_texts(question: &ObjectiveQuestion, indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&index| question.options.get(index).map_or("?", String::as_str))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    fn choice_question() -> ObjectiveQuestion {
        ObjectiveQuestion {
            kind: QuestionKind::Choice,
            stem: vec!["Capital of France?".to_string()],
            options: vec![
                "Paris".to_string(),
                "London".to_string(),
                "Berlin".to_string(),
            ],
            correct: vec![0],
        }
    }

    #[test]
    fn test_objective_record_shows_canonical_order_and_texts() {
        // The user picked Berlin then London; the log shows their texts
        // in entry order and the options in authored order.
        let record = objective_record(&choice_question(), &[2, 1]);
        assert_eq!(
            record,
            "#CHOICE\n\
             Capital of France?\n\
             #OPTIONS\n\
             A. Paris\n\
             B. London\n\
             C. Berlin\n\
             #USER_ANSWER\n\
             Berlin,London\n\
             #CORRECT_ANSWER\n\
             Paris\n\
             #END\n\
             \n"
        );
    }

    #[test]
    fn test_judge_record_numbers_its_options() {
        let q = ObjectiveQuestion::judge(vec!["Water is wet.".to_string()], vec![0]);
        let record = objective_record(&q, &[1]);
        assert!(record.contains("1. T\n2. F\n"));
        assert!(record.contains("#USER_ANSWER\nF\n"));
        assert!(record.contains("#CORRECT_ANSWER\nT\n"));
    }

    #[test]
    fn test_subjective_record_is_verbatim() {
        let q = SubjectiveQuestion {
            stem: vec!["Explain lifetimes.".to_string()],
            answers: vec!["borrows must not outlive owners".to_string()],
        };
        let record = subjective_record(&q, &["it is about scope".to_string()]);
        assert_eq!(
            record,
            "#SUBJECTIVE\n\
             Explain lifetimes.\n\
             #USER_ANSWER\n\
             it is about scope\n\
             #CORRECT_ANSWER\n\
             borrows must not outlive owners\n\
             #END\n\
             \n"
        );
    }

    #[test]
    fn test_records_accumulate_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");

        let mut first = AnswerLog::open(&path);
        first.record_objective(&choice_question(), &[1]);
        drop(first);

        let mut second = AnswerLog::open(&path);
        second.record_objective(&choice_question(), &[2]);
        drop(second);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("#CHOICE").count(), 2);
        assert_eq!(text.matches("#END").count(), 2);
    }

    #[test]
    fn test_unwritable_log_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = AnswerLog::open(dir.path().join("missing").join("answers.txt"));
        log.record_objective(&choice_question(), &[1]);
    }
}
