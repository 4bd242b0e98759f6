use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct QuizId(pub String);

/// A quiz as uploaded and as stored on disk, one document per file.
/// A missing title is kept missing in storage; listings and the
/// upload response fall back to a generated one.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Quiz {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    /// Only meaningful for `multiple` questions.
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Multiple,
    Number,
}

/// The `{id, title}` projection used in listings and as the upload
/// response body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuizPreview {
    pub id: QuizId,
    pub title: String,
}

impl Quiz {
    pub fn title_or_default(&self, id: &QuizId) -> String {
        match &self.title {
            Some(title) => title.to_owned(),
            None => format!("Quiz {}", id.0),
        }
    }
}
