//! Record of an accepted form submission

use super::AnswerMap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Answers captured when the form was submitted. Reported, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub form_title: String,
    pub answers: AnswerMap,
}

impl Submission {
    pub fn new(form_title: impl Into<String>, answers: AnswerMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form_title: form_title.into(),
            answers,
        }
    }

    /// Short acknowledgment for the status bar
    pub fn summary(&self) -> String {
        let answered = if self.answers.is_empty() {
            "no answers".to_string()
        } else {
            format!("{} answers", self.answers.len())
        };
        format!(
            "Submitted \"{}\" at {} ({answered})",
            self.form_title,
            self.submitted_at.format("%H:%M:%S"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Submission::new("T", AnswerMap::default());
        let b = Submission::new("T", AnswerMap::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_answers_inline() {
        let submission = Submission::new("Signup", AnswerMap::default().with_answer("name", "Ada"));
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["form_title"], "Signup");
        assert_eq!(json["answers"]["name"], "Ada");
        assert!(json["submitted_at"].is_string());
    }

    #[test]
    fn test_summary() {
        let submission = Submission::new("Signup", AnswerMap::default().with_answer("a", "1"));
        let summary = submission.summary();
        assert!(summary.starts_with("Submitted \"Signup\" at "));
        assert!(summary.ends_with("(1 answers)"));
    }

    #[test]
    fn test_summary_without_answers() {
        let submission = Submission::new("Signup", AnswerMap::default());
        assert!(submission.summary().ends_with("(no answers)"));
    }
}
