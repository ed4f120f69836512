//! Answer interpretation.
//!
//! User answers name *displayed* positions (`A`, `b`, `2`, ...), while
//! questions store correctness against the authored option order. The
//! [`OptionOrder`] permutation ties the two together for the lifetime
//! of a single question's presentation.

use rand::Rng;
use rand::seq::SliceRandom;

/// Bidirectional display↔storage index map for one question instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionOrder {
    display_to_storage: Vec<usize>,
    storage_to_display: Vec<usize>,
}

impl OptionOrder {
    /// Options shown in authored order (judge questions, logs).
    pub fn identity(len: usize) -> Self {
        Self::from_display_order((0..len).collect())
    }

    /// A fresh uniform permutation for one presentation.
    pub fn shuffled<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut display_to_storage: Vec<usize> = (0..len).collect();
        display_to_storage.shuffle(rng);
        Self::from_display_order(display_to_storage)
    }

    /// Builds the order from display-ordered storage indices.
    pub fn from_display_order(display_to_storage: Vec<usize>) -> Self {
        let mut storage_to_display = vec![0; display_to_storage.len()];
        for (display, &storage) in display_to_storage.iter().enumerate() {
            storage_to_display[storage] = display;
        }
        Self {
            display_to_storage,
            storage_to_display,
        }
    }

    pub fn len(&self) -> usize {
        self.display_to_storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display_to_storage.is_empty()
    }

    /// Storage index of the option shown at `display` position.
    pub fn storage_index(&self, display: usize) -> Option<usize> {
        self.display_to_storage.get(display).copied()
    }

    /// Display position where the stored option currently appears.
    pub fn display_index(&self, storage: usize) -> Option<usize> {
        self.storage_to_display.get(storage).copied()
    }

    /// Storage indices in display order.
    pub fn display_order(&self) -> &[usize] {
        &self.display_to_storage
    }
}

/// Display-position label for lettered options; `?` past `Z`.
pub fn index_to_letter(index: usize) -> char {
    if index < 26 {
        (b'A' + index as u8) as char
    } else {
        '?'
    }
}

fn letter_to_index(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}

/// Resolves a judge answer: case-insensitive `T`/`F`, or `1`/`2`, with
/// all whitespace stripped. Anything else is an empty answer.
pub fn parse_judge_answer(input: &str, order: &OptionOrder) -> Vec<usize> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let display = match cleaned.as_str() {
        "T" | "t" | "1" => 0,
        "F" | "f" | "2" => 1,
        _ => return Vec::new(),
    };
    order.storage_index(display).into_iter().collect()
}

/// Resolves a comma-separated choice answer.
///
/// Each token, after whitespace-stripping, is a 1-based displayed
/// position if it starts with a digit, otherwise its first character
/// names a displayed letter. Tokens that do not resolve to a displayed
/// option are dropped.
pub fn parse_choice_answer(input: &str, order: &OptionOrder) -> Vec<usize> {
    let mut answers = Vec::new();
    for token in input.split(',') {
        let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        let Some(first) = token.chars().next() else {
            continue;
        };
        let display = if first.is_ascii_digit() {
            token.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
        } else {
            letter_to_index(first)
        };
        if let Some(storage) = display.and_then(|d| order.storage_index(d)) {
            answers.push(storage);
        }
    }
    answers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shuffled_order_is_its_own_inverse() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..8 {
            let order = OptionOrder::shuffled(len, &mut rng);
            for storage in 0..len {
                let display = order.display_index(storage).unwrap();
                assert_eq!(order.storage_index(display), Some(storage));
            }
        }
    }

    #[test]
    fn test_choice_tokens_resolve_through_the_permutation() {
        // Display A shows option 2, B shows option 0, C shows option 1.
        let order = OptionOrder::from_display_order(vec![2, 0, 1]);

        assert_eq!(parse_choice_answer("A", &order), vec![2]);
        assert_eq!(parse_choice_answer("b", &order), vec![0]);
        assert_eq!(parse_choice_answer("3", &order), vec![1]);
        assert_eq!(parse_choice_answer("A,2,c", &order), vec![2, 0, 1]);
    }

    #[test]
    fn test_choice_tokens_tolerate_whitespace() {
        let order = OptionOrder::identity(4);
        assert_eq!(parse_choice_answer(" a , 3 ", &order), vec![0, 2]);
        assert_eq!(parse_choice_answer("\t2\t", &order), vec![1]);
    }

    #[test]
    fn test_out_of_range_tokens_are_dropped() {
        let order = OptionOrder::identity(3);
        assert_eq!(parse_choice_answer("D", &order), Vec::<usize>::new());
        assert_eq!(parse_choice_answer("9", &order), Vec::<usize>::new());
        assert_eq!(parse_choice_answer("0", &order), Vec::<usize>::new());
        assert_eq!(parse_choice_answer("A,D,B", &order), vec![0, 1]);
    }

    #[test]
    fn test_empty_input_is_an_empty_answer() {
        let order = OptionOrder::identity(3);
        assert_eq!(parse_choice_answer("", &order), Vec::<usize>::new());
        assert_eq!(parse_choice_answer(",,", &order), Vec::<usize>::new());
        assert_eq!(parse_judge_answer("", &order), Vec::<usize>::new());
    }

    #[test]
    fn test_judge_answers_map_through_display_order() {
        let order = OptionOrder::identity(2);
        assert_eq!(parse_judge_answer("T", &order), vec![0]);
        assert_eq!(parse_judge_answer(" t ", &order), vec![0]);
        assert_eq!(parse_judge_answer("1", &order), vec![0]);
        assert_eq!(parse_judge_answer("F", &order), vec![1]);
        assert_eq!(parse_judge_answer("f", &order), vec![1]);
        assert_eq!(parse_judge_answer("2", &order), vec![1]);
        assert_eq!(parse_judge_answer("maybe", &order), Vec::<usize>::new());

        // Judge answers go through the display order too.
        let flipped = OptionOrder::from_display_order(vec![1, 0]);
        assert_eq!(parse_judge_answer("T", &flipped), vec![1]);
    }

    #[test]
    fn test_duplicate_tokens_are_kept() {
        let order = OptionOrder::identity(2);
        assert_eq!(parse_choice_answer("1,1", &order), vec![0, 0]);
    }

    #[test]
    fn test_letters_past_the_option_count() {
        assert_eq!(index_to_letter(0), 'A');
        assert_eq!(index_to_letter(25), 'Z');
        assert_eq!(index_to_letter(26), '?');
    }
}
