use dioxus::prelude::*;

use api::InterviewRecord;

use crate::core::format;

/// Card grid for the displayed (filtered) records.
#[component]
pub fn RecordGrid(records: Vec<InterviewRecord>, on_delete: EventHandler<i64>) -> Element {
    rsx! {
        div { class: "record-grid",
            if records.is_empty() {
                div { class: "record-grid__empty",
                    h3 { "No logs found" }
                    p { "Start an interview to see data." }
                }
            } else {
                for record in records.into_iter() {
                    RecordCard { key: "{record.id}", record, on_delete }
                }
            }
        }
    }
}

#[component]
fn RecordCard(record: InterviewRecord, on_delete: EventHandler<i64>) -> Element {
    let date = format::format_date(&record.submit_time);
    let record_id = record.id;

    rsx! {
        article { class: "record-card",
            div { class: "record-card__top",
                span { class: "record-card__topic", "{record.genre_name}" }
                span { class: "record-card__date", "{date}" }
            }

            div { class: "record-card__qa",
                h4 { "Question" }
                p { class: "record-card__question", "{record.question}" }
            }

            div { class: "record-card__qa",
                h4 { "Your answer" }
                p { class: "record-card__answer", "{record.user_answer}" }
            }

            div { class: "record-card__feedback",
                div { class: "record-card__feedback-header",
                    span { "AI analysis" }
                    span { class: "record-card__score", "{record.rating}/10" }
                }
                p { "{record.feedback}" }
            }

            div { class: "record-card__actions",
                button {
                    r#type: "button",
                    class: "button button--danger",
                    onclick: move |_| on_delete.call(record_id),
                    "Delete log"
                }
            }
        }
    }
}
