use maud::{DOCTYPE, Markup, PreEscaped, html};

pub mod detail;
pub mod list;

const STYLE: &str = r#"
body { font-family: sans-serif; background-color: #f9fafb; margin: 0; }
main { max-width: 42rem; margin: 0 auto; padding: 1.5rem; background-color: #fff; }
h1, h3 { color: #2563eb; text-align: center; }
table { width: 100%; border-collapse: collapse; }
caption { color: #6b7280; margin-bottom: 0.5rem; }
th { text-align: left; color: #4b5563; }
td, th { padding: 0.5rem; border-bottom: 1px solid #e5e7eb; }
a { color: #2563eb; text-decoration: none; }
a:hover { text-decoration: underline; }
.upload-button { background-color: #6b7280; color: #fff; padding: 0.5rem 1rem; border-radius: 0.375rem; cursor: pointer; }
.upload-button:hover { background-color: #2563eb; }
.status { color: #3b82f6; }
.error { color: #ef4444; }
.empty { display: block; text-align: center; color: #2563eb; }
.questions, .options { list-style: none; padding: 0; }
.question { margin-bottom: 1.25rem; }
.question input[type=text], .question input[type=number] { width: 100%; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.25rem; box-sizing: border-box; }
.options label { display: inline-block; margin: 0.25rem 0.5rem; padding: 0.5rem; border-radius: 0.375rem; cursor: pointer; }
.options label.selected { background-color: #93c5fd; }
.options label.correct { background-color: #86efac; color: #14532d; }
.options label.incorrect { background-color: #fca5a5; }
.submitted { color: #16a34a; }
button { background-color: #3b82f6; color: #fff; border: none; padding: 0.5rem 1.25rem; border-radius: 0.375rem; cursor: pointer; }
button:disabled { background-color: #9ca3af; cursor: not-allowed; }
"#;

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main { (content) }
            }
        }
    }
}
