use maud::{Markup, PreEscaped, html};

use crate::types::quiz::QuizPreview;

// Reads the chosen file locally first, then hands the parsed document
// to the upload endpoint. The new preview is appended to the table
// without re-fetching the full list.
const UPLOAD_SCRIPT: &str = r#"
const input = document.getElementById('file-upload');
const status = document.getElementById('status');
const errorBox = document.getElementById('error');
const rows = document.getElementById('quiz-rows');
const empty = document.getElementById('empty');

input.addEventListener('change', async () => {
  const file = input.files[0];
  if (!file) return;
  errorBox.textContent = '';
  status.hidden = false;
  try {
    const text = await file.text();
    const doc = JSON.parse(text);

    const res = await fetch('/api/upload', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(doc),
    });
    if (!res.ok) throw new Error('Upload failed');
    const preview = await res.json();

    const row = document.createElement('tr');
    const no = document.createElement('td');
    no.textContent = rows.children.length + 1;
    const topic = document.createElement('td');
    const link = document.createElement('a');
    link.href = '/quizzes/' + preview.id;
    link.textContent = preview.title || 'Untitled Quiz';
    topic.append(link);
    row.append(no, topic);
    rows.append(row);
    if (empty) empty.hidden = true;
  } catch (err) {
    errorBox.textContent = 'Error processing file';
  } finally {
    status.hidden = true;
    input.value = '';
  }
});
"#;

pub fn quiz_list(quizzes: &[QuizPreview]) -> Markup {
    super::page(
        "Upload JSON Quiz",
        html! {
            h3 { "Upload JSON Quiz" }
            p {
                label for="file-upload" class="upload-button" { "Choose File" }
                input id="file-upload" type="file" accept=".json" hidden;
            }
            p id="status" class="status" hidden { "Uploading..." }
            p id="error" class="error" {}
            h2 { "Available Quizzes" }
            @if quizzes.is_empty() {
                span id="empty" class="empty" { "No quizzes available" }
            }
            table {
                caption { "A list of your recent quizzes." }
                thead {
                    tr {
                        th { "No" }
                        th { "Topic" }
                    }
                }
                tbody id="quiz-rows" {
                    @for (index, quiz) in quizzes.iter().enumerate() {
                        tr {
                            td { (index + 1) }
                            td {
                                a href=(format!("/quizzes/{}", quiz.id.0)) { (quiz.title) }
                            }
                        }
                    }
                }
            }
            script { (PreEscaped(UPLOAD_SCRIPT)) }
        },
    )
}
