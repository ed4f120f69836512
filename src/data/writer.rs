use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::models::{ObjectiveQuestion, Question, SubjectiveQuestion};

/// Serializes one question in bank record format.
pub fn write_question<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    match question {
        Question::Objective(q) => write_objective(out, q),
        Question::Subjective(q) => write_subjective(out, q),
    }
}

pub fn write_objective<W: Write>(out: &mut W, q: &ObjectiveQuestion) -> io::Result<()> {
    writeln!(out, "{}", q.kind.marker())?;
    for line in &q.stem {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "#OPTIONS")?;
    for option in &q.options {
        writeln!(out, "{option}")?;
    }
    writeln!(out, "#CORRECT")?;
    let numbers: Vec<String> = q.correct.iter().map(|i| (i + 1).to_string()).collect();
    writeln!(out, "{}", numbers.join(","))?;
    writeln!(out, "#END")?;
    writeln!(out)
}

pub fn write_subjective<W: Write>(out: &mut W, q: &SubjectiveQuestion) -> io::Result<()> {
    writeln!(out, "#SUBJECTIVE")?;
    for line in &q.stem {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "#ANSWER")?;
    for answer in &q.answers {
        writeln!(out, "{answer}")?;
    }
    writeln!(out, "#END")?;
    writeln!(out)
}

/// Appends one question to a bank file, creating the file if needed.
pub fn append_to_bank<P: AsRef<Path>>(path: P, question: &Question) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_question(&mut file, question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_bank_lines;
    use crate::models::QuestionKind;

    fn roundtrip(question: Question) {
        let mut buffer = Vec::new();
        write_question(&mut buffer, &question).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let parsed = parse_bank_lines(text.lines()).unwrap();
        assert_eq!(parsed, vec![question]);
    }

    #[test]
    fn test_objective_roundtrip() {
        roundtrip(Question::Objective(ObjectiveQuestion {
            kind: QuestionKind::MultiChoice,
            stem: vec![
                "Which of these hold?".to_string(),
                "    let x = 0;".to_string(),
            ],
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct: vec![2, 0],
        }));
    }

    #[test]
    fn test_judge_roundtrip() {
        roundtrip(Question::Objective(ObjectiveQuestion::judge(
            vec!["The borrow checker runs at compile time.".to_string()],
            vec![0],
        )));
    }

    #[test]
    fn test_subjective_roundtrip() {
        roundtrip(Question::Subjective(SubjectiveQuestion {
            stem: vec!["Name the four scalar type families.".to_string()],
            answers: vec![
                "integers".to_string(),
                "floats".to_string(),
                "booleans".to_string(),
                "characters".to_string(),
            ],
        }));
    }

    #[test]
    fn test_appended_records_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.txt");

        let first = Question::Objective(ObjectiveQuestion::judge(
            vec!["First?".to_string()],
            vec![0],
        ));
        let second = Question::Subjective(SubjectiveQuestion {
            stem: vec!["Second?".to_string()],
            answers: vec!["because".to_string()],
        });
        append_to_bank(&path, &first).unwrap();
        append_to_bank(&path, &second).unwrap();

        let questions = crate::data::load_bank(&path).unwrap();
        assert_eq!(questions, vec![first, second]);
    }
}
