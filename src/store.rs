use std::path::{Path, PathBuf};

use tokio::fs;

use crate::types::quiz::{Quiz, QuizId, QuizPreview};

use handle_errors::Error;

/// File-backed quiz storage: one pretty-printed JSON document per
/// quiz at `<storage_root>/<id>.json`. The root is created lazily on
/// the first write.
#[derive(Debug, Clone)]
pub struct Store {
    storage_root: PathBuf,
}

impl Store {
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Store {
            storage_root: storage_root.into(),
        }
    }

    fn quiz_path(&self, id: &QuizId) -> PathBuf {
        self.storage_root.join(format!("{}.json", id.0))
    }

    pub async fn get_quiz(&self, id: &QuizId) -> Result<Quiz, Error> {
        let content = match fs::read_to_string(self.quiz_path(id)).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::QuizNotFound);
            }
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                return Err(Error::StorageError(e));
            }
        };

        match serde_json::from_str(&content) {
            Ok(quiz) => Ok(quiz),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::InvalidQuizDocument(e))
            }
        }
    }

    pub async fn add_quiz(&self, quiz: &Quiz, id: &QuizId) -> Result<(), Error> {
        if let Err(e) = fs::create_dir_all(&self.storage_root).await {
            tracing::event!(tracing::Level::ERROR, "{:?}", e);
            return Err(Error::StorageError(e));
        }

        let content = serde_json::to_string_pretty(quiz).map_err(Error::InvalidQuizDocument)?;

        match fs::write(self.quiz_path(id), content).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::StorageError(e))
            }
        }
    }

    /// Project every stored quiz to a preview, in directory order.
    /// A root that does not exist yet reads as an empty listing.
    pub async fn list_quizzes(&self) -> Result<Vec<QuizPreview>, Error> {
        let mut entries = match fs::read_dir(&self.storage_root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                return Err(Error::StorageError(e));
            }
        };

        let mut previews = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(Error::StorageError)? {
            let path = entry.path();
            if !path.extension().map_or(false, |ext| ext == "json") {
                continue;
            }
            let id = match quiz_id_of(&path) {
                Some(id) => id,
                None => continue,
            };
            let quiz = self.get_quiz(&id).await?;
            previews.push(QuizPreview {
                title: quiz.title_or_default(&id),
                id,
            });
        }

        Ok(previews)
    }
}

fn quiz_id_of(path: &Path) -> Option<QuizId> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| QuizId(stem.to_string()))
}
