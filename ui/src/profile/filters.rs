//! Client-side sort/filter controls for the record list.

use dioxus::prelude::*;

use api::{InterviewRecord, GENRES};

use super::toast::{show_toast, Toast, ToastKind};
use super::{build_report_pdf, deliver_report, report_filename};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeOrder {
    #[default]
    LatestFirst,
    EarliestFirst,
}

impl TimeOrder {
    pub fn value(self) -> &'static str {
        match self {
            TimeOrder::LatestFirst => "latest",
            TimeOrder::EarliestFirst => "earliest",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "earliest" => TimeOrder::EarliestFirst,
            _ => TimeOrder::LatestFirst,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    pub fn value(&self) -> &str {
        match self {
            GenreFilter::All => "all",
            GenreFilter::Only(genre) => genre,
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            GenreFilter::All
        } else {
            GenreFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, genre: &str) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(only) => only == genre,
        }
    }
}

/// Produce the displayed subset: genre narrowing plus a total order on
/// `submit_time` (RFC3339 strings compare chronologically).
pub fn apply_filters(
    records: &[InterviewRecord],
    order: TimeOrder,
    genre: &GenreFilter,
) -> Vec<InterviewRecord> {
    let mut filtered: Vec<InterviewRecord> = records
        .iter()
        .filter(|record| genre.matches(&record.genre_name))
        .cloned()
        .collect();

    match order {
        TimeOrder::LatestFirst => filtered.sort_by(|a, b| b.submit_time.cmp(&a.submit_time)),
        TimeOrder::EarliestFirst => filtered.sort_by(|a, b| a.submit_time.cmp(&b.submit_time)),
    }

    filtered
}

/// Filter selects plus the report download button.
#[component]
pub fn ControlsBar(
    mut time_order: Signal<TimeOrder>,
    mut genre_filter: Signal<GenreFilter>,
    filtered: Vec<InterviewRecord>,
    username: Option<String>,
    toast: Signal<Option<Toast>>,
) -> Element {
    let on_download = {
        let records = filtered.clone();
        let username = username.clone();
        move |_| {
            if records.is_empty() {
                show_toast(toast, ToastKind::Error, "No data to download!");
                return;
            }

            let pdf = build_report_pdf(username.as_deref(), &records);
            let bytes = match pdf {
                Ok(bytes) => bytes,
                Err(err) => {
                    show_toast(toast, ToastKind::Error, format!("Report failed: {err}"));
                    return;
                }
            };
            let filename = report_filename();

            spawn(async move {
                match deliver_report(&filename, bytes).await {
                    Ok(Some(path)) => {
                        show_toast(toast, ToastKind::Success, format!("Report saved to {path}"))
                    }
                    Ok(None) => {
                        show_toast(toast, ToastKind::Success, "Report downloaded successfully!")
                    }
                    Err(err) => show_toast(toast, ToastKind::Error, err),
                }
            });
        }
    };

    rsx! {
        div { class: "controls-bar",
            div { class: "controls-bar__filters",
                span { class: "controls-bar__label", "Interview logs" }

                label { class: "visually-hidden", r#for: "time-filter", "Time" }
                select {
                    id: "time-filter",
                    class: "controls-bar__select",
                    value: "{time_order().value()}",
                    oninput: move |evt| time_order.set(TimeOrder::from_value(&evt.value())),
                    option { value: "latest", "Latest first" }
                    option { value: "earliest", "Oldest first" }
                }

                label { class: "visually-hidden", r#for: "genre-filter", "Topic" }
                select {
                    id: "genre-filter",
                    class: "controls-bar__select controls-bar__select--wide",
                    value: "{genre_filter().value()}",
                    oninput: move |evt| genre_filter.set(GenreFilter::from_value(&evt.value())),
                    option { value: "all", "All topics" }
                    for genre in GENRES.iter() {
                        option { key: "{genre}", value: "{genre}", "{genre}" }
                    }
                }
            }

            button {
                r#type: "button",
                class: "button button--primary",
                onclick: on_download,
                "Download report"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, genre: &str, submit_time: &str) -> InterviewRecord {
        InterviewRecord {
            id,
            submit_time: submit_time.into(),
            genre_name: genre.into(),
            question: String::new(),
            user_answer: String::new(),
            rating: 5.0,
            feedback: String::new(),
        }
    }

    #[test]
    fn latest_first_orders_descending() {
        let records = vec![
            record(1, "Web development", "2026-01-01T10:00:00Z"),
            record(2, "Web development", "2026-03-01T10:00:00Z"),
            record(3, "Web development", "2026-02-01T10:00:00Z"),
        ];
        let out = apply_filters(&records, TimeOrder::LatestFirst, &GenreFilter::All);
        let ids: Vec<_> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn earliest_first_orders_ascending() {
        let records = vec![
            record(1, "Web development", "2026-01-01T10:00:00Z"),
            record(2, "Web development", "2026-03-01T10:00:00Z"),
        ];
        let out = apply_filters(&records, TimeOrder::EarliestFirst, &GenreFilter::All);
        let ids: Vec<_> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn genre_filter_keeps_only_matches() {
        let records = vec![
            record(1, "Computer Networks", "2026-01-01T10:00:00Z"),
            record(2, "Operating systems", "2026-01-02T10:00:00Z"),
            record(3, "Computer Networks", "2026-01-03T10:00:00Z"),
        ];
        let genre = GenreFilter::Only("Computer Networks".into());
        let out = apply_filters(&records, TimeOrder::LatestFirst, &genre);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.genre_name == "Computer Networks"));
    }

    #[test]
    fn all_filter_passes_everything() {
        let records = vec![
            record(1, "Computer Networks", "2026-01-01T10:00:00Z"),
            record(2, "Operating systems", "2026-01-02T10:00:00Z"),
        ];
        let out = apply_filters(&records, TimeOrder::LatestFirst, &GenreFilter::All);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn filter_values_round_trip() {
        assert_eq!(TimeOrder::from_value("latest"), TimeOrder::LatestFirst);
        assert_eq!(TimeOrder::from_value("earliest"), TimeOrder::EarliestFirst);
        assert_eq!(GenreFilter::from_value("all"), GenreFilter::All);
        assert_eq!(
            GenreFilter::from_value("Operating systems"),
            GenreFilter::Only("Operating systems".into())
        );
    }
}
