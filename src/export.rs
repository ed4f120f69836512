//! Bank → JSON export.
//!
//! Flattens bank records into plain JSON documents for consumption
//! outside the toolkit (study apps, spreadsheets). Stems and reference
//! answers are joined into single newline-separated strings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::data::{LoadError, load_bank};
use crate::models::{Question, QuestionKind};

#[derive(Debug, Serialize)]
pub struct BankExport {
    pub objective: Vec<ObjectiveEntry>,
    pub subjective: Vec<SubjectiveEntry>,
}

#[derive(Debug, Serialize)]
pub struct ObjectiveEntry {
    /// `judge`, `single` or `multi`.
    pub qtype: &'static str,
    pub question: String,
    pub options: Vec<String>,
    /// 0-based indices into `options`.
    pub answer_indices: Vec<usize>,
    /// Bank filename the record came from.
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct SubjectiveEntry {
    pub question: String,
    pub answer: String,
    pub source: String,
}

/// Collects every record of the given banks into one export document,
/// in bank order then file order.
pub fn collect_banks(banks: &[PathBuf]) -> Result<BankExport, LoadError> {
    let mut export = BankExport {
        objective: Vec::new(),
        subjective: Vec::new(),
    };

    for bank in banks {
        let source = bank
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        for question in load_bank(bank)? {
            match question {
                Question::Objective(q) => export.objective.push(ObjectiveEntry {
                    qtype: qtype(q.kind),
                    question: q.stem.join("\n"),
                    options: q.options,
                    answer_indices: q.correct,
                    source: source.clone(),
                }),
                Question::Subjective(q) => export.subjective.push(SubjectiveEntry {
                    question: q.stem.join("\n"),
                    answer: q.answers.join("\n"),
                    source: source.clone(),
                }),
            }
        }
    }

    Ok(export)
}

/// Writes the export as pretty-printed JSON.
pub fn write_json<P: AsRef<Path>>(export: &BankExport, path: P) -> io::Result<()> {
    let json = serde_json::to_string_pretty(export).map_err(io::Error::other)?;
    fs::write(path, json)
}

fn qtype(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Judge => "judge",
        QuestionKind::Choice => "single",
        QuestionKind::MultiChoice => "multi",
    }
}
