//! Quiz session engine.
//!
//! Drives one question at a time: present the stem and options,
//! collect one line of input, score it, and log what needs logging.
//! The engine is strictly sequential and blocking; reaching end of
//! input reads as an empty answer rather than an error.

pub mod answer;
mod log;

pub use self::log::{AnswerLog, OBJECTIVE_LOG, SUBJECTIVE_LOG, objective_record, subjective_record};
pub use answer::{OptionOrder, index_to_letter, parse_choice_answer, parse_judge_answer};

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::console::read_trimmed_line;
use crate::models::{
    ObjectiveQuestion, QuestionKind, StemLine, SubjectiveQuestion, stem_display_lines,
};

/// The session's random source: seeded for reproducible shuffles,
/// otherwise from entropy. Instantiated once per session and threaded
/// through explicitly.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Tally of an objective session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectiveOutcome {
    pub correct: usize,
    pub total: usize,
}

impl ObjectiveOutcome {
    /// Accuracy in percent; an empty session reads as 0 rather than a
    /// division fault.
    pub fn accuracy_percent(&self) -> f64 {
        if self.total > 0 {
            self.correct as f64 * 100.0 / self.total as f64
        } else {
            0.0
        }
    }
}

/// Set comparison with multiset semantics: answering the same correct
/// option twice is not the same as answering it once.
pub fn is_correct_answer(user: &[usize], correct: &[usize]) -> bool {
    let mut user = user.to_vec();
    let mut expected = correct.to_vec();
    user.sort_unstable();
    expected.sort_unstable();
    user == expected
}

/// Runs an objective session over `questions`, reading answers from
/// `input` and rendering to `out`. Misses are appended to `log`.
pub fn run_objective<R, I, O>(
    mut questions: Vec<ObjectiveQuestion>,
    random_order: bool,
    rng: &mut R,
    log: &mut AnswerLog,
    input: &mut I,
    out: &mut O,
) -> io::Result<ObjectiveOutcome>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    if random_order {
        questions.shuffle(rng);
    }

    let total = questions.len();
    let mut correct_count = 0;

    for (number, question) in questions.iter().enumerate() {
        writeln!(out, "\nQuestion {} / {}\n", number + 1, total)?;
        writeln!(out, "{}", question.kind.label())?;
        write_stem(out, &question.stem)?;

        // Judge options keep their authored T/F order; the rest get a
        // fresh permutation per presentation.
        let order = if question.kind == QuestionKind::Judge {
            OptionOrder::identity(question.options.len())
        } else {
            OptionOrder::shuffled(question.options.len(), rng)
        };

        writeln!(out, "\nOptions:")?;
        for (display, &storage) in order.display_order().iter().enumerate() {
            writeln!(
                out,
                "{}. {}",
                display_label(question.kind, display),
                question.options[storage]
            )?;
        }

        let hint = if question.kind == QuestionKind::MultiChoice {
            " (separate multiple answers with [,])"
        } else {
            ""
        };
        write!(out, "\nPlease enter the answer{hint}: ")?;
        out.flush()?;
        let answer_line = read_trimmed_line(input)?.unwrap_or_default();

        let user_answers = match question.kind {
            QuestionKind::Judge => parse_judge_answer(&answer_line, &order),
            QuestionKind::Choice | QuestionKind::MultiChoice => {
                parse_choice_answer(&answer_line, &order)
            }
        };

        if is_correct_answer(&user_answers, &question.correct) {
            writeln!(out, "\n{}", "Correct!".green())?;
            correct_count += 1;
        } else {
            writeln!(out, "\n{}", "Incorrect!".red())?;
            writeln!(
                out,
                "Correct Answer: {}",
                format_correct_answers(question, &order)
            )?;
            log.record_objective(question, &user_answers);
        }
    }

    Ok(ObjectiveOutcome {
        correct: correct_count,
        total,
    })
}

/// Runs a subjective session: no scoring, every question's answer is
/// shown against the reference points and logged verbatim.
pub fn run_subjective<R, I, O>(
    mut questions: Vec<SubjectiveQuestion>,
    random_order: bool,
    rng: &mut R,
    log: &mut AnswerLog,
    input: &mut I,
    out: &mut O,
) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    if random_order {
        questions.shuffle(rng);
    }

    for (number, question) in questions.iter().enumerate() {
        writeln!(out, "\nQuestion {}:", number + 1)?;
        writeln!(out, "[Subjective]")?;
        write_stem(out, &question.stem)?;

        writeln!(
            out,
            "\nPlease enter the main points of your response (one per line, end with a blank line):"
        )?;
        let mut user_answers = Vec::new();
        loop {
            write!(out, "{} - ", user_answers.len() + 1)?;
            out.flush()?;
            match read_trimmed_line(input)? {
                Some(line) if !line.is_empty() => user_answers.push(line),
                _ => break,
            }
        }

        writeln!(out, "\nYour Answer:")?;
        for answer in &user_answers {
            writeln!(out, "{answer}")?;
        }
        writeln!(out, "\nReference Answer:")?;
        for answer in &question.answers {
            writeln!(out, "{answer}")?;
        }

        log.record_subjective(question, &user_answers);
    }

    Ok(())
}

fn write_stem<O: Write>(out: &mut O, stem: &[String]) -> io::Result<()> {
    for line in stem_display_lines(stem) {
        match line {
            StemLine::Text(text) => writeln!(out, "{text}")?,
            StemLine::Code { number, text } => writeln!(out, "{number:2} -| {text}")?,
        }
    }
    Ok(())
}

fn display_label(kind: QuestionKind, display: usize) -> String {
    if kind.uses_letters() {
        index_to_letter(display).to_string()
    } else {
        (display + 1).to_string()
    }
}

/// `B(Paris),D(Rome)` style listing: displayed label, storage text.
fn format_correct_answers(question: &ObjectiveQuestion, order: &OptionOrder) -> String {
    question
        .correct
        .iter()
        .map(|&storage| {
            let label = order
                .display_index(storage)
                .map_or_else(|| "?".to_string(), |d| display_label(question.kind, d));
            let text = question.options.get(storage).map_or("?", String::as_str);
            format!("{label}({text})")
        })
        .collect::<Vec<_>>()
        .join(",")
}
