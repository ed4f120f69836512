//! Bank record parsing.
//!
//! A bank file is a flat sequence of records, each opened by a type
//! marker (`#JUDGE`, `#CHOICE`, `#MULTICHOICE`, `#SUBJECTIVE`),
//! sectioned by `#OPTIONS`/`#ANSWER`/`#CORRECT`, and closed by `#END`.
//! Every non-empty, non-marker line is literal content for the section
//! currently open. Markers match a whole line exactly, so `#CHOICE`
//! never swallows a `#MULTICHOICE` record.

use log::warn;

use crate::data::LoadError;
use crate::models::{ObjectiveQuestion, Question, QuestionKind, SubjectiveQuestion};

/// Record and section markers, decoded once per line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Judge,
    Choice,
    MultiChoice,
    Subjective,
    Options,
    Answer,
    Correct,
    End,
}

impl Marker {
    fn parse(line: &str) -> Option<Self> {
        match line {
            "#JUDGE" => Some(Marker::Judge),
            "#CHOICE" => Some(Marker::Choice),
            "#MULTICHOICE" => Some(Marker::MultiChoice),
            "#SUBJECTIVE" => Some(Marker::Subjective),
            "#OPTIONS" => Some(Marker::Options),
            "#ANSWER" => Some(Marker::Answer),
            "#CORRECT" => Some(Marker::Correct),
            "#END" => Some(Marker::End),
            _ => None,
        }
    }
}

/// Which sequence content lines are currently appended to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Stem,
    Options,
    Answers,
    Correct,
}

#[derive(Clone, Copy, Debug)]
enum RecordKind {
    Objective(QuestionKind),
    Subjective,
}

struct RecordBuilder {
    kind: RecordKind,
    stem: Vec<String>,
    options: Vec<String>,
    answers: Vec<String>,
    correct: Vec<usize>,
}

impl RecordBuilder {
    fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            stem: Vec::new(),
            options: Vec::new(),
            answers: Vec::new(),
            correct: Vec::new(),
        }
    }

    fn build(self) -> Question {
        match self.kind {
            RecordKind::Objective(kind) => Question::Objective(ObjectiveQuestion {
                kind,
                stem: self.stem,
                options: self.options,
                correct: self.correct,
            }),
            RecordKind::Subjective => Question::Subjective(SubjectiveQuestion {
                stem: self.stem,
                answers: self.answers,
            }),
        }
    }
}

/// Parses raw bank lines into questions, in file order.
///
/// Recovers from a missing `#END`: a new type marker or the end of
/// input flushes an in-progress record that already has stem content.
/// Lines before the first marker are discarded.
pub fn parse_bank_lines<'a, I>(lines: I) -> Result<Vec<Question>, LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut questions = Vec::new();
    let mut current: Option<(RecordBuilder, Section)> = None;

    for line in lines {
        match Marker::parse(line) {
            Some(Marker::Judge) => {
                start_record(&mut questions, &mut current, QuestionKind::Judge.into());
            }
            Some(Marker::Choice) => {
                start_record(&mut questions, &mut current, QuestionKind::Choice.into());
            }
            Some(Marker::MultiChoice) => {
                start_record(&mut questions, &mut current, QuestionKind::MultiChoice.into());
            }
            Some(Marker::Subjective) => {
                start_record(&mut questions, &mut current, RecordKind::Subjective);
            }
            Some(Marker::Options) => set_section(&mut current, Section::Options),
            Some(Marker::Answer) => set_section(&mut current, Section::Answers),
            Some(Marker::Correct) => set_section(&mut current, Section::Correct),
            Some(Marker::End) => {
                if let Some((builder, _)) = current.take() {
                    questions.push(builder.build());
                }
            }
            None => {
                if line.is_empty() {
                    continue;
                }
                let Some((builder, section)) = current.as_mut() else {
                    continue;
                };
                match section {
                    Section::Stem => builder.stem.push(line.to_string()),
                    Section::Options => builder.options.push(line.to_string()),
                    Section::Answers => builder.answers.push(line.to_string()),
                    Section::Correct => builder.correct.extend(parse_correct_line(line)?),
                }
            }
        }
    }

    if let Some((builder, _)) = current.take() {
        if !builder.stem.is_empty() {
            warn!("bank record missing trailing #END, keeping it anyway");
            questions.push(builder.build());
        }
    }

    Ok(questions)
}

/// Parses a `#CORRECT` payload: comma-separated 1-based option numbers.
///
/// Also used when authoring, where the operator types the same list.
pub fn parse_correct_line(line: &str) -> Result<Vec<usize>, LoadError> {
    line.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| LoadError::InvalidAnswerIndex {
                    token: token.to_string(),
                })
        })
        .collect()
}

fn start_record(
    questions: &mut Vec<Question>,
    current: &mut Option<(RecordBuilder, Section)>,
    kind: RecordKind,
) {
    if let Some((builder, _)) = current.take() {
        if !builder.stem.is_empty() {
            warn!("bank record missing #END before the next marker, keeping it anyway");
            questions.push(builder.build());
        }
    }
    *current = Some((RecordBuilder::new(kind), Section::Stem));
}

fn set_section(current: &mut Option<(RecordBuilder, Section)>, section: Section) {
    if let Some((_, state)) = current.as_mut() {
        *state = section;
    }
}

impl From<QuestionKind> for RecordKind {
    fn from(kind: QuestionKind) -> Self {
        RecordKind::Objective(kind)
    }
}
