use tracing::{Level, event, instrument};

use crate::store::Store;
use crate::types::quiz::{Quiz, QuizId, QuizPreview};
use crate::views;

/// Persists an uploaded quiz document under a freshly generated id
/// and answers with its `{id, title}` preview.
#[instrument]
pub async fn upload_quiz(
    id: String,
    store: Store,
    quiz: Quiz,
) -> Result<impl warp::Reply, warp::Rejection> {
    event!(target: "quiz_shelf", Level::INFO, "uploading quiz");
    let id = QuizId(id);

    if let Err(e) = store.add_quiz(&quiz, &id).await {
        return Err(warp::reject::custom(e));
    }

    let preview = QuizPreview {
        title: quiz.title_or_default(&id),
        id,
    };
    Ok(warp::reply::json(&preview))
}

#[instrument]
pub async fn list_page(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    event!(target: "quiz_shelf", Level::INFO, "listing quizzes");
    let quizzes = match store.list_quizzes().await {
        Ok(quizzes) => quizzes,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    Ok(warp::reply::html(
        views::list::quiz_list(&quizzes).into_string(),
    ))
}

#[instrument]
pub async fn detail_page(id: String, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let id = QuizId(id);
    let quiz = match store.get_quiz(&id).await {
        Ok(quiz) => quiz,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    Ok(warp::reply::html(
        views::detail::quiz_form(&quiz, &id).into_string(),
    ))
}
