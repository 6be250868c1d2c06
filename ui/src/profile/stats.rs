//! Summary aggregates for the profile header.

use std::collections::HashMap;

use api::InterviewRecord;

/// One interview is a fixed batch of five questions. Presentation convention,
/// not a stored entity.
const QUESTIONS_PER_INTERVIEW: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStats {
    /// `ceil(record count / 5)`.
    pub interviews: usize,
    /// Mean rating rounded to one decimal; `0.0` for an empty set.
    pub avg_score: f64,
    /// Topic with the highest occurrence count; first topic to reach the
    /// maximum wins ties. `None` for an empty set.
    pub top_topic: Option<String>,
}

pub fn compute_stats(records: &[InterviewRecord]) -> ProfileStats {
    if records.is_empty() {
        return ProfileStats::default();
    }

    let interviews = records.len().div_ceil(QUESTIONS_PER_INTERVIEW);

    let total: f64 = records.iter().map(|record| record.rating).sum();
    let avg_score = (total / records.len() as f64 * 10.0).round() / 10.0;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut max_count = 0;
    let mut top_topic = None;
    for record in records {
        let count = counts
            .entry(record.genre_name.as_str())
            .and_modify(|c| *c += 1)
            .or_insert(1);
        if *count > max_count {
            max_count = *count;
            top_topic = Some(record.genre_name.clone());
        }
    }

    ProfileStats {
        interviews,
        avg_score,
        top_topic,
    }
}
