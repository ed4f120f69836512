/// Fixed option texts for judge (true/false) questions.
pub const JUDGE_OPTIONS: [&str; 2] = ["T", "F"];

/// Stem lines authored with this prefix are code lines.
const CODE_PREFIX: &str = "    ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    Judge,
    Choice,
    MultiChoice,
}

impl QuestionKind {
    /// The record marker that opens a bank entry of this kind.
    pub fn marker(self) -> &'static str {
        match self {
            QuestionKind::Judge => "#JUDGE",
            QuestionKind::Choice => "#CHOICE",
            QuestionKind::MultiChoice => "#MULTICHOICE",
        }
    }

    /// Tag shown above the stem during a session.
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::Judge => "[Judge]",
            QuestionKind::Choice => "[Choice]",
            QuestionKind::MultiChoice => "[Multi-choice]",
        }
    }

    /// Judge options are labelled `1.`/`2.`, the rest `A.`/`B.`/...
    pub fn uses_letters(self) -> bool {
        !matches!(self, QuestionKind::Judge)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectiveQuestion {
    pub kind: QuestionKind,
    /// Multi-line stem, in display order.
    pub stem: Vec<String>,
    /// Option texts in storage (authored) order.
    pub options: Vec<String>,
    /// 0-based indices into `options`; insertion order preserved,
    /// compared as a multiset when scoring.
    pub correct: Vec<usize>,
}

impl ObjectiveQuestion {
    /// A judge question always carries the fixed `T`/`F` option pair.
    pub fn judge(stem: Vec<String>, correct: Vec<usize>) -> Self {
        Self {
            kind: QuestionKind::Judge,
            stem,
            options: JUDGE_OPTIONS.iter().map(|s| s.to_string()).collect(),
            correct,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectiveQuestion {
    pub stem: Vec<String>,
    /// Reference answer points; shown for self-comparison, never scored.
    pub answers: Vec<String>,
}

/// Any record a bank file can hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Question {
    Objective(ObjectiveQuestion),
    Subjective(SubjectiveQuestion),
}

impl Question {
    pub fn into_objective(self) -> Option<ObjectiveQuestion> {
        match self {
            Question::Objective(q) => Some(q),
            Question::Subjective(_) => None,
        }
    }

    pub fn into_subjective(self) -> Option<SubjectiveQuestion> {
        match self {
            Question::Subjective(q) => Some(q),
            Question::Objective(_) => None,
        }
    }
}

/// One stem line prepared for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StemLine<'a> {
    Text(&'a str),
    /// Dedented code line with its 1-based per-question number.
    Code { number: usize, text: &'a str },
}

/// Splits a stem into display lines, numbering code lines as it goes.
pub fn stem_display_lines(stem: &[String]) -> Vec<StemLine<'_>> {
    let mut code_line = 0;
    stem.iter()
        .map(|line| match line.strip_prefix(CODE_PREFIX) {
            Some(text) => {
                code_line += 1;
                StemLine::Code {
                    number: code_line,
                    text,
                }
            }
            None => StemLine::Text(line),
        })
        .collect()
}
