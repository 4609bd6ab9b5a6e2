//! Question definitions and the fixed wellness questionnaire catalog.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ValidationError};

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Exactly one option may be selected; a new selection replaces it.
    Single,
    /// Any subset of options; selecting toggles membership.
    Multiple,
}

/// A static question definition.
///
/// Options are unique within a question; their order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    kind: QuestionKind,
    options: Vec<String>,
}

impl Question {
    /// Creates a question, validating that the title is non-empty and the
    /// options are non-empty and unique.
    pub fn new(
        id: QuestionId,
        title: impl Into<String>,
        kind: QuestionKind,
        options: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if options.is_empty() {
            return Err(ValidationError::empty_field("options"));
        }
        for (i, option) in options.iter().enumerate() {
            if option.is_empty() {
                return Err(ValidationError::empty_field("options"));
            }
            if options[..i].contains(option) {
                return Err(ValidationError::invalid_format(
                    "options",
                    format!("duplicate option '{}'", option),
                ));
            }
        }
        Ok(Self {
            id,
            title,
            kind,
            options,
        })
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Declared option labels in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns true if the label is one of this question's options.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// The fixed onboarding questionnaire, in wizard order.
pub fn questionnaire() -> &'static [Question] {
    &CATALOG
}

static CATALOG: Lazy<Vec<Question>> = Lazy::new(|| {
    fn question(id: &str, title: &str, kind: QuestionKind, options: &[&str]) -> Question {
        Question::new(
            QuestionId::new(id).expect("catalog ids are non-empty"),
            title,
            kind,
            options.iter().map(|s| s.to_string()).collect(),
        )
        .expect("catalog questions are well-formed")
    }

    vec![
        question(
            "goals",
            "What are your main wellness goals?",
            QuestionKind::Multiple,
            &[
                "Weight Management",
                "Better Sleep",
                "Stress Reduction",
                "Fitness Improvement",
                "Nutrition",
                "Mental Health",
            ],
        ),
        question(
            "activity",
            "How active are you currently?",
            QuestionKind::Single,
            &[
                "Sedentary",
                "Lightly Active",
                "Moderately Active",
                "Very Active",
                "Extremely Active",
            ],
        ),
        question(
            "experience",
            "Experience with wellness apps?",
            QuestionKind::Single,
            &["Beginner", "Some Experience", "Experienced", "Expert"],
        ),
        question(
            "preferences",
            "What type of activities do you prefer?",
            QuestionKind::Multiple,
            &[
                "Cardio",
                "Strength Training",
                "Yoga",
                "Swimming",
                "Walking",
                "Dancing",
            ],
        ),
        question(
            "schedule",
            "When do you prefer to exercise?",
            QuestionKind::Single,
            &[
                "Early Morning",
                "Mid Morning",
                "Afternoon",
                "Evening",
                "No Preference",
            ],
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_questions_in_wizard_order() {
        let ids: Vec<&str> = questionnaire().iter().map(|q| q.id().as_str()).collect();
        assert_eq!(
            ids,
            vec!["goals", "activity", "experience", "preferences", "schedule"]
        );
    }

    #[test]
    fn catalog_ids_are_unique() {
        let qs = questionnaire();
        for (i, q) in qs.iter().enumerate() {
            assert!(
                !qs[..i].iter().any(|other| other.id() == q.id()),
                "duplicate id {}",
                q.id()
            );
        }
    }

    #[test]
    fn catalog_kinds_match_product_definition() {
        let kinds: Vec<QuestionKind> = questionnaire().iter().map(|q| q.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                QuestionKind::Multiple,
                QuestionKind::Single,
                QuestionKind::Single,
                QuestionKind::Multiple,
                QuestionKind::Single,
            ]
        );
    }

    #[test]
    fn activity_question_declares_expected_options() {
        let activity = &questionnaire()[1];
        assert!(activity.has_option("Moderately Active"));
        assert!(!activity.has_option("Couch Potato"));
    }

    #[test]
    fn question_rejects_duplicate_options() {
        let result = Question::new(
            QuestionId::new("q").unwrap(),
            "Pick one",
            QuestionKind::Single,
            vec!["A".to_string(), "B".to_string(), "A".to_string()],
        );
        assert!(result.is_err());
    }

    #[test]
    fn question_rejects_empty_option_list() {
        let result = Question::new(
            QuestionId::new("q").unwrap(),
            "Pick one",
            QuestionKind::Single,
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn question_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&QuestionKind::Multiple).unwrap(),
            "\"multiple\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionKind::Single).unwrap(),
            "\"single\""
        );
    }
}
