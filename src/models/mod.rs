mod question;

pub use question::{
    JUDGE_OPTIONS, ObjectiveQuestion, Question, QuestionKind, StemLine, SubjectiveQuestion,
    stem_display_lines,
};
