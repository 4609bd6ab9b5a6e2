//! Answer values and the per-user answer set.
//!
//! Persisted as a JSON object mapping question id to either a string
//! (single-choice) or an array of strings (multi-choice), e.g.
//! `{"goals":["Better Sleep"],"activity":"Moderately Active"}`. Key order
//! and multi-choice element order are insertion order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// The stored answer for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// The selected option of a single-choice question.
    Single(String),
    /// Selected options of a multi-choice question, in first-toggle order.
    Multiple(Vec<String>),
}

impl Answer {
    /// Returns true if the answer counts as "answered": single-choice
    /// always does, multi-choice needs at least one selection.
    pub fn is_answered(&self) -> bool {
        match self {
            Answer::Single(_) => true,
            Answer::Multiple(options) => !options.is_empty(),
        }
    }
}

/// Ordered mapping from question id to answer.
///
/// Insertion order is preserved so the serialized form reflects the order
/// questions were first answered in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserAnswers {
    entries: Vec<(QuestionId, Answer)>,
}

impl UserAnswers {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the stored answer for a question, if any.
    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|(qid, _)| qid == id)
            .map(|(_, a)| a)
    }

    /// Stores the option for a single-choice question, replacing any
    /// previous selection.
    pub fn set_single(&mut self, id: QuestionId, option: impl Into<String>) {
        let answer = Answer::Single(option.into());
        match self.entries.iter_mut().find(|(qid, _)| *qid == id) {
            Some((_, existing)) => *existing = answer,
            None => self.entries.push((id, answer)),
        }
    }

    /// Toggles an option for a multi-choice question: present options are
    /// removed, absent ones appended. A single-choice value stored under
    /// the same id is replaced by a fresh selection list.
    pub fn toggle_multiple(&mut self, id: QuestionId, option: impl Into<String>) {
        let option = option.into();
        match self.entries.iter_mut().find(|(qid, _)| *qid == id) {
            Some((_, Answer::Multiple(options))) => {
                if let Some(pos) = options.iter().position(|o| *o == option) {
                    options.remove(pos);
                } else {
                    options.push(option);
                }
            }
            Some((_, existing)) => *existing = Answer::Multiple(vec![option]),
            None => self.entries.push((id, Answer::Multiple(vec![option]))),
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.entries.iter().map(|(id, a)| (id, a))
    }

    /// Serializes to the persisted JSON object form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses the persisted JSON object form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Serialize for UserAnswers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, answer) in &self.entries {
            map.serialize_entry(id, answer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UserAnswers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AnswersVisitor;

        impl<'de> Visitor<'de> for AnswersVisitor {
            type Value = UserAnswers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of question id to answer")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, answer)) = access.next_entry::<QuestionId, Answer>()? {
                    entries.push((id, answer));
                }
                Ok(UserAnswers { entries })
            }
        }

        deserializer.deserialize_map(AnswersVisitor)
    }
}
