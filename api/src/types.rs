use serde::{Deserialize, Serialize};

/// One logged practice question/answer/feedback entry, as served by the backend.
///
/// Records are owned by the remote service; the UI holds a read-only copy for
/// the lifetime of the screen. `submit_time` is an RFC3339 timestamp string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub id: i64,
    pub submit_time: String,
    pub genre_name: String,
    pub question: String,
    pub user_answer: String,
    /// Score out of 10.
    pub rating: f64,
    pub feedback: String,
}

/// The fixed set of topic labels a record can carry.
pub const GENRES: [&str; 6] = [
    "Web development",
    "Data structures and algorithms",
    "Computer Networks",
    "Object Oriented Programming",
    "Operating systems",
    "Database Management system",
];

/// Signed-in user identity, persisted client-side at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_from_backend_json() {
        let raw = r#"{
            "id": 42,
            "submit_time": "2026-03-14T09:26:53Z",
            "genre_name": "Computer Networks",
            "question": "What does ARP do?",
            "user_answer": "Resolves IP addresses to MAC addresses.",
            "rating": 8,
            "feedback": "Correct, could mention the cache."
        }"#;

        let record: InterviewRecord = serde_json::from_str(raw).expect("record should decode");
        assert_eq!(record.id, 42);
        assert_eq!(record.genre_name, "Computer Networks");
        assert_eq!(record.rating, 8.0);
    }

    #[test]
    fn session_round_trips() {
        let session = UserSession {
            username: "sam".into(),
            email: "sam@example.com".into(),
        };
        let json = serde_json::to_string(&session).expect("serialize");
        let back: UserSession = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, session);
    }

    #[test]
    fn genre_set_is_distinct() {
        for (i, a) in GENRES.iter().enumerate() {
            for b in GENRES.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
