//! Interactive question authoring.
//!
//! Prompts the operator for one question at a time and appends each to
//! the bank through the bank writer, so everything written here parses
//! back. Closing stdin at any prompt ends the flow cleanly.

use std::io;
use std::path::Path;

use crate::console;
use crate::data::{append_to_bank, parse_correct_line};
use crate::models::{ObjectiveQuestion, Question, QuestionKind, SubjectiveQuestion};

/// Prompts for objective questions until the operator stops.
pub fn insert_objective(bank: &Path) -> io::Result<()> {
    loop {
        let Some(choice) = console::prompt(
            "Select question type:\n1. Judge\n2. Choice\n3. Multi-choice\nPlease choose: ",
        )?
        else {
            break;
        };

        let question = match choice.trim() {
            "1" => author_judge()?,
            "2" => author_choice(QuestionKind::Choice)?,
            "3" => author_choice(QuestionKind::MultiChoice)?,
            _ => {
                println!("Invalid option, question skipped.");
                None
            }
        };

        if let Some(question) = question {
            append_to_bank(bank, &Question::Objective(question))?;
            println!("Question saved to {}", bank.display());
        }

        let Some(again) = console::prompt("Add another question? ([y]/n): ")? else {
            break;
        };
        if again.trim().eq_ignore_ascii_case("n") {
            break;
        }
    }
    Ok(())
}

/// Prompts for subjective questions until the operator stops.
pub fn insert_subjective(bank: &Path) -> io::Result<()> {
    loop {
        println!("Enter the stem (multi-line, blank line to finish):");
        let stem = read_lines_until_blank()?;
        if stem.is_empty() {
            break;
        }

        println!("Enter the reference answer points (one per line, blank line to finish):");
        let answers = read_lines_until_blank()?;

        append_to_bank(bank, &Question::Subjective(SubjectiveQuestion { stem, answers }))?;
        println!("Question saved to {}", bank.display());

        let Some(again) = console::prompt("Add another question? (y/[n]): ")? else {
            break;
        };
        if !again.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }
    Ok(())
}

fn author_judge() -> io::Result<Option<ObjectiveQuestion>> {
    println!("Enter the judge stem (multi-line, blank line to finish):");
    let stem = read_lines_until_blank()?;
    if stem.is_empty() {
        println!("Empty stem, question skipped.");
        return Ok(None);
    }
    Ok(prompt_correct()?.map(|correct| ObjectiveQuestion::judge(stem, correct)))
}

fn author_choice(kind: QuestionKind) -> io::Result<Option<ObjectiveQuestion>> {
    let Some(count_reply) = console::prompt("Number of options (2-9): ")? else {
        return Ok(None);
    };
    let count = match count_reply.trim().parse::<usize>() {
        Ok(count) if (2..=9).contains(&count) => count,
        _ => {
            println!("Option count must be 2-9, question skipped.");
            return Ok(None);
        }
    };

    println!("Enter the {count} options (one per line):");
    let mut options = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(option) = console::read_line()? else {
            return Ok(None);
        };
        options.push(option);
    }

    println!("Enter the stem (multi-line, blank line to finish):");
    let stem = read_lines_until_blank()?;
    if stem.is_empty() {
        println!("Empty stem, question skipped.");
        return Ok(None);
    }

    Ok(prompt_correct()?.map(|correct| ObjectiveQuestion {
        kind,
        stem,
        options,
        correct,
    }))
}

fn prompt_correct() -> io::Result<Option<Vec<usize>>> {
    let Some(reply) =
        console::prompt("Correct option numbers (1-based, comma-separated for multi): ")?
    else {
        return Ok(None);
    };
    match parse_correct_line(reply.trim()) {
        Ok(correct) => Ok(Some(correct)),
        Err(e) => {
            println!("{e}; question skipped.");
            Ok(None)
        }
    }
}

fn read_lines_until_blank() -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        match console::read_line()? {
            Some(line) if !line.is_empty() => lines.push(line),
            _ => break,
        }
    }
    Ok(lines)
}
