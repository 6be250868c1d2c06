use dioxus::prelude::*;

use api::ApiClient;

use crate::core::{format, storage};
use crate::profile::{
    apply_filters, chart_points, compute_stats, ConfirmDeleteModal, ControlsBar, GenreFilter,
    ProfileState, RecordGrid, TimeOrder, Toast, ToastHost, ToastKind, TrendChart,
};

#[component]
pub fn Profile() -> Element {
    // Subscribe to global language code (if provided) so headings re-render
    // when the user switches language elsewhere.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // Identity is read once from client-side storage; a corrupt or missing
    // session just means nothing is fetched.
    let session = use_hook(|| storage::load_session().ok().flatten());
    let client = use_hook(|| ApiClient::from_env().ok());

    let mut state = use_signal(ProfileState::default);
    let time_order = use_signal(TimeOrder::default);
    let genre_filter = use_signal(GenreFilter::default);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let toast = use_signal(|| Option::<Toast>::None);

    // First display: fetch all records for the identity, if one exists.
    {
        let client = client.clone();
        let session = session.clone();
        use_future(move || {
            let client = client.clone();
            let session = session.clone();
            async move {
                if let (Some(client), Some(session)) = (client, session) {
                    state.set(ProfileState::load(&client, &session.email).await);
                }
            }
        });
    }

    let stats = use_memo(move || compute_stats(&state().records));
    let filtered =
        use_memo(move || apply_filters(&state().records, time_order(), &genre_filter()));
    let points = use_memo(move || chart_points(&state().records));

    let on_confirm_delete = {
        let client = client.clone();
        let email = session.as_ref().map(|s| s.email.clone());
        move |_: ()| {
            let Some(id) = pending_delete() else {
                return;
            };
            pending_delete.set(None);

            let Some(client) = client.clone() else {
                return;
            };
            let email = email.clone();
            spawn(async move {
                match client.delete_record(id).await {
                    Ok(()) => {
                        show_success(toast, "Log deleted successfully");
                        if let Some(email) = email {
                            state.set(ProfileState::load(&client, &email).await);
                        }
                    }
                    Err(_) => show_error(toast, "Failed to delete report"),
                }
            });
        }
    };

    let (display_name, display_email) = match &session {
        Some(session) => (session.username.clone(), session.email.clone()),
        None => (crate::t!("profile-guest-name"), String::new()),
    };
    let avatar_initial = display_name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    let current_stats = stats();
    let avg_label = format!("{}/10", format::format_score(current_stats.avg_score));
    let top_topic = current_stats
        .top_topic
        .clone()
        .unwrap_or_else(|| "N/A".to_string());
    let load_error = state().error;

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-profile",
            header { class: "profile-header",
                div { class: "profile-header__user",
                    div { class: "profile-header__avatar", "{avatar_initial}" }
                    div { class: "profile-header__identity",
                        h1 { "{display_name}" }
                        if !display_email.is_empty() {
                            p { "{display_email}" }
                        }
                    }
                }

                div { class: "stats-row",
                    div { class: "stat-card",
                        span { class: "stat-card__value", "{current_stats.interviews}" }
                        span { class: "stat-card__label", {crate::t!("profile-stat-interviews")} }
                    }
                    div { class: "stat-card",
                        span { class: "stat-card__value", "{avg_label}" }
                        span { class: "stat-card__label", {crate::t!("profile-stat-avg-score")} }
                    }
                    div { class: "stat-card",
                        span { class: "stat-card__value stat-card__value--small", "{top_topic}" }
                        span { class: "stat-card__label", {crate::t!("profile-stat-top-topic")} }
                    }
                }
            }

            if let Some(error) = load_error {
                div { class: "profile-error", "{error}" }
            }

            TrendChart { points: points() }

            ControlsBar {
                time_order,
                genre_filter,
                filtered: filtered(),
                username: session.as_ref().map(|s| s.username.clone()),
                toast,
            }

            RecordGrid {
                records: filtered(),
                on_delete: move |id| pending_delete.set(Some(id)),
            }

            ConfirmDeleteModal {
                open: pending_delete().is_some(),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: on_confirm_delete,
            }

            ToastHost { toast }
        }
    }
}

fn show_success(toast: Signal<Option<Toast>>, message: &str) {
    crate::profile::show_toast(toast, ToastKind::Success, message);
}

fn show_error(toast: Signal<Option<Toast>>, message: &str) {
    crate::profile::show_toast(toast, ToastKind::Error, message);
}
