use quiz_shelf::store::Store;
use quiz_shelf::types::quiz::QuizPreview;
use quiz_shelf::{OneshotHandler, oneshot};

// A single end-to-end flow against an in-process server so the fixed
// test port is only bound once.
#[tokio::test]
async fn upload_list_and_take_a_quiz() {
    let storage_root =
        std::env::temp_dir().join(format!("quiz-shelf-flow-{}", uuid::Uuid::new_v4()));
    let store = Store::new(&storage_root);
    let handler: OneshotHandler = oneshot(store).await;

    let client = reqwest::Client::new();

    // Upload a well-formed quiz and get its preview back
    let math_quiz = serde_json::json!({
        "title": "Math",
        "questions": [{
            "id": "1",
            "type": "number",
            "question": "2+2?",
            "options": [],
            "answer": "4"
        }]
    });

    let preview: QuizPreview = client
        .post("http://localhost:3030/api/upload")
        .json(&math_quiz)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(preview.title, "Math");

    // The detail page renders the stored questions
    let detail = client
        .get(format!("http://localhost:3030/quizzes/{}", preview.id.0))
        .send()
        .await
        .unwrap();

    assert_eq!(detail.status(), 200);
    let page = detail.text().await.unwrap();
    assert!(page.contains("2+2?"));
    assert!(page.contains("type=\"number\""));
    assert!(page.contains("Submit Quiz"));

    // A document without a title gets a generated one
    let untitled: QuizPreview = client
        .post("http://localhost:3030/api/upload")
        .json(&serde_json::json!({ "questions": [] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(untitled.title, format!("Quiz {}", untitled.id.0));

    // The list page shows both uploads
    let list = client
        .get("http://localhost:3030/")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(list.contains("Math"));
    assert!(list.contains(&format!("/quizzes/{}", preview.id.0)));
    assert!(list.contains(&format!("Quiz {}", untitled.id.0)));

    // An id that resolves to no file is a 404, not a crash
    let missing = client
        .get("http://localhost:3030/quizzes/does-not-exist")
        .send()
        .await
        .unwrap();

    assert_eq!(missing.status(), 404);

    // Only POST is allowed on the upload endpoint
    let wrong_method = client
        .get("http://localhost:3030/api/upload")
        .send()
        .await
        .unwrap();

    assert_eq!(wrong_method.status(), 405);

    // A body that is not a quiz document is rejected
    let invalid = client
        .post("http://localhost:3030/api/upload")
        .header("content-type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();

    assert_eq!(invalid.status(), 422);

    let _ = handler.sender.send(1);
    let _ = tokio::fs::remove_dir_all(storage_root).await;
}
