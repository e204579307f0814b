/// Question data and the in-memory question pool
use crate::random::RandomSource;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single trivia question as served by the question endpoint
///
/// Fields are spreadsheet cells, so numbers and booleans are read as their
/// text and null as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, deserialize_with = "cell_text")]
    pub question: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub answer: String,
}

fn cell_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!("expected a cell value, got {}", other))),
    }
}

impl Question {
    pub fn new(question: &str, answer: &str) -> Question {
        Question {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Questions gathered by the most recent fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    pub fn new() -> Self {
        QuestionPool {
            questions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn clear(&mut self) {
        self.questions.clear();
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        shuffle(&mut self.questions, rng);
    }

    /// Pick a question uniformly at random. The pool is left untouched,
    /// so repeated calls may return the same question.
    pub fn pick(&self, rng: &mut impl RandomSource) -> Option<&Question> {
        if self.questions.is_empty() {
            return None;
        }
        self.questions.get(rng.below(self.questions.len()))
    }
}

impl From<Vec<Question>> for QuestionPool {
    fn from(questions: Vec<Question>) -> Self {
        QuestionPool { questions }
    }
}

/// In-place Fisher-Yates shuffle
///
/// Walks from the last index down to 1 and swaps each slot with a
/// uniformly chosen slot in `0..=i`.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
