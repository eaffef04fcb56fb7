use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct option {index} is out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are fewer than two
    /// options, an option is blank, or `correct_option` does not index `options`.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into().trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if correct_option >= options.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: correct_option,
                len: options.len(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

/// Letter shown next to an option: `A` for index 0, `B` for 1, and so on.
///
/// Returns `None` past `Z`.
#[must_use]
pub fn option_label(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
}

/// Inverse of [`option_label`], case-insensitive.
#[must_use]
pub fn option_index(label: char) -> Option<usize> {
    let upper = label.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper as u8 - b'A'))
}

/// How demanding a deck, exam or subject is rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn rejects_correct_option_out_of_range() {
        let err = Question::new("Q", opts(&["a", "b"]), 2, "").unwrap_err();
        assert_eq!(err, QuestionError::CorrectOptionOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn rejects_single_option() {
        let err = Question::new("Q", opts(&["only"]), 0, "").unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { len: 1 });
    }

    #[test]
    fn rejects_blank_prompt_and_options() {
        assert_eq!(
            Question::new("   ", opts(&["a", "b"]), 0, "").unwrap_err(),
            QuestionError::EmptyPrompt
        );
        assert_eq!(
            Question::new("Q", opts(&["a", " "]), 0, "").unwrap_err(),
            QuestionError::EmptyOption { index: 1 }
        );
    }

    #[test]
    fn labels_map_both_ways() {
        assert_eq!(option_label(0), Some('A'));
        assert_eq!(option_label(3), Some('D'));
        assert_eq!(option_label(26), None);
        assert_eq!(option_index('c'), Some(2));
        assert_eq!(option_index('D'), Some(3));
        assert_eq!(option_index('1'), None);
    }
}
