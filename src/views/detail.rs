use maud::{Markup, PreEscaped, html};

use crate::types::quiz::{Question, QuestionKind, Quiz, QuizId};

// Checkboxes behave as single-choice: picking an option clears the
// previous one. Submit unlocks once every question has a non-empty
// answer; submitting freezes the form and marks the selected options
// of multiple-choice questions against their answer.
const QUIZ_SCRIPT: &str = r#"
const submit = document.getElementById('submit');
const note = document.getElementById('submitted-note');
const questions = Array.from(document.querySelectorAll('.question'));

function answerOf(question) {
  const typed = question.querySelector('input[type=text], input[type=number]');
  if (typed) return typed.value.trim();
  const checked = question.querySelector('input[type=checkbox]:checked');
  return checked ? checked.value : '';
}

function refresh() {
  submit.disabled = questions.some((question) => answerOf(question) === '');
}

questions.forEach((question) => {
  question.querySelectorAll('input[type=checkbox]').forEach((box) => {
    box.addEventListener('change', () => {
      if (box.checked) {
        question.querySelectorAll('input[type=checkbox]').forEach((other) => {
          if (other !== box) other.checked = false;
        });
      }
      question.querySelectorAll('label').forEach((label) => {
        label.classList.remove('selected');
      });
      const label = question.querySelector('label[for="' + box.id + '"]');
      if (box.checked) label.classList.add('selected');
      refresh();
    });
  });
  question.querySelectorAll('input[type=text], input[type=number]').forEach((typed) => {
    typed.addEventListener('input', refresh);
  });
});

submit.addEventListener('click', () => {
  questions.forEach((question) => {
    question.querySelectorAll('input').forEach((field) => {
      field.disabled = true;
    });
    question.querySelectorAll('input[type=checkbox]:checked').forEach((box) => {
      const label = question.querySelector('label[for="' + box.id + '"]');
      const correct = box.value === question.dataset.answer;
      label.classList.remove('selected');
      label.classList.add(correct ? 'correct' : 'incorrect');
      label.append(correct ? ' - ✅' : ' - ❌');
    });
  });
  submit.hidden = true;
  note.hidden = false;
});

refresh();
"#;

pub fn quiz_form(quiz: &Quiz, id: &QuizId) -> Markup {
    let title = quiz.title_or_default(id);
    super::page(
        &title,
        html! {
            h1 { (title) }
            form id="quiz-form" {
                ul class="questions" {
                    @for (qindex, question) in quiz.questions.iter().enumerate() {
                        li class="question" data-answer=(question.answer) {
                            p { (question.question) }
                            (question_input(question, qindex))
                        }
                    }
                }
                button id="submit" type="button" disabled { "Submit Quiz" }
                p id="submitted-note" class="submitted" hidden {
                    "Quiz submitted! Check your answers above."
                }
            }
            script { (PreEscaped(QUIZ_SCRIPT)) }
        },
    )
}

fn question_input(question: &Question, qindex: usize) -> Markup {
    match question.kind {
        QuestionKind::Text => html! {
            input type="text" placeholder="Type your answer...";
        },
        QuestionKind::Number => html! {
            input type="number" placeholder="Enter a number...";
        },
        QuestionKind::Multiple => html! {
            ul class="options" {
                @for (oindex, option) in question.options.iter().enumerate() {
                    @let option_id = format!("option-{}-{}", qindex, oindex);
                    li {
                        input id=(option_id) type="checkbox" value=(option);
                        label for=(option_id) { (option) }
                    }
                }
            }
        },
    }
}
