mod chart;
pub use chart::{chart_points, ChartPoint, TrendChart};

mod filters;
pub use filters::{apply_filters, ControlsBar, GenreFilter, TimeOrder};

mod list;
pub use list::RecordGrid;

mod modal;
pub use modal::ConfirmDeleteModal;

mod stats;
pub use stats::{compute_stats, ProfileStats};

mod toast;
pub use toast::{show_toast, Toast, ToastHost, ToastKind};

mod export;
pub(crate) use export::{build_report_pdf, deliver_report, report_filename};

use api::{ApiClient, InterviewRecord};

/// Shared state for the profile screen: the full record list or a load error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub records: Vec<InterviewRecord>,
    pub error: Option<String>,
}

impl ProfileState {
    /// Fetch every record for `email`. The list is kept latest-first; RFC3339
    /// timestamps from the backend order lexicographically.
    pub async fn load(client: &ApiClient, email: &str) -> Self {
        match client.fetch_records(email).await {
            Ok(mut records) => {
                records.sort_by(|a, b| b.submit_time.cmp(&a.submit_time));
                Self {
                    records,
                    error: None,
                }
            }
            Err(_) => Self {
                records: Vec::new(),
                error: Some("Could not load profile data.".to_string()),
            },
        }
    }
}
