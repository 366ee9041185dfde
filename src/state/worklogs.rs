//! Work-Log Registry
//!
//! Client-side cache of work-log entries plus the mutations that go through
//! the API. The cache is never patched locally: every mutation re-fetches
//! the list, so the server stays authoritative even when an admin decision
//! races an employee edit.

use chrono::NaiveDate;
use leptos::*;

use crate::api;

/// Lifecycle state of a work-log entry. `Approved` and `Rejected` are
/// terminal; only `Pending` entries may still change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkLogStatus {
    Pending,
    Approved,
    Rejected,
}

impl WorkLogStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, WorkLogStatus::Pending)
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkLogStatus::Pending => "PENDING",
            WorkLogStatus::Approved => "APPROVED",
            WorkLogStatus::Rejected => "REJECTED",
        }
    }

    /// Badge classes for the status pill.
    pub fn badge_class(self) -> &'static str {
        match self {
            WorkLogStatus::Pending => "bg-yellow-100 text-yellow-800",
            WorkLogStatus::Approved => "bg-green-100 text-green-800",
            WorkLogStatus::Rejected => "bg-red-100 text-red-800",
        }
    }
}

/// A single work-log entry as returned by the API. `user_name` is only
/// populated for admins, who see every employee's entries.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    pub id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub date: NaiveDate,
    pub hours_worked: f64,
    #[serde(default)]
    pub remarks: String,
    pub status: WorkLogStatus,
}

/// Create/update payload for a work-log entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogDraft {
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub remarks: String,
}

impl WorkLogDraft {
    /// Client-side check mirroring the server's constraint on hours.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=24.0).contains(&self.hours_worked) {
            return Err("Hours worked must be between 0 and 24".to_string());
        }
        Ok(())
    }
}

/// Work-log cache provided to the component tree.
#[derive(Clone, Copy)]
pub struct WorkLogStore {
    pub logs: RwSignal<Vec<WorkLog>>,
    pub loading: RwSignal<bool>,
}

/// Create the work-log store and provide it via context.
pub fn provide_work_logs() -> WorkLogStore {
    let store = WorkLogStore {
        logs: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
    };
    provide_context(store);
    store
}

impl WorkLogStore {
    /// Replace the cache with the server's view of the list. The server
    /// decides visibility per role; the client does not re-filter.
    pub async fn refresh(&self) -> Result<(), String> {
        self.loading.set(true);
        let result = api::fetch_work_logs().await;
        self.loading.set(false);

        match result {
            Ok(logs) => {
                self.logs.set(logs);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Submit a new entry. The server assigns the id and sets the status
    /// to pending.
    pub async fn create(&self, draft: &WorkLogDraft) -> Result<(), String> {
        api::create_work_log(draft).await?;
        self.refresh().await
    }

    /// Edit a pending entry. A decision that landed first comes back as a
    /// server error; the re-fetch below then replaces the stale row.
    pub async fn update(&self, id: i64, draft: &WorkLogDraft) -> Result<(), String> {
        let outcome = api::update_work_log(id, draft).await.map(|_| ());
        let refreshed = self.refresh().await;
        outcome.and(refreshed)
    }

    /// Delete a pending entry. Callers must have confirmed the action.
    pub async fn remove(&self, id: i64) -> Result<(), String> {
        let outcome = api::delete_work_log(id).await;
        let refreshed = self.refresh().await;
        outcome.and(refreshed)
    }

    /// Approve a pending entry. Admin only.
    pub async fn approve(&self, id: i64) -> Result<(), String> {
        let outcome = api::approve_work_log(id).await.map(|_| ());
        let refreshed = self.refresh().await;
        outcome.and(refreshed)
    }

    /// Reject a pending entry. Admin only.
    pub async fn reject(&self, id: i64) -> Result<(), String> {
        let outcome = api::reject_work_log(id).await.map(|_| ());
        let refreshed = self.refresh().await;
        outcome.and(refreshed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(hours: f64) -> WorkLogDraft {
        WorkLogDraft {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            hours_worked: hours,
            remarks: "on-site".to_string(),
        }
    }

    #[test]
    fn only_pending_is_actionable() {
        assert!(WorkLogStatus::Pending.is_pending());
        assert!(!WorkLogStatus::Approved.is_pending());
        assert!(!WorkLogStatus::Rejected.is_pending());
    }

    #[test]
    fn status_uses_upper_case_wire_format() {
        assert_eq!(
            serde_json::to_string(&WorkLogStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::from_str::<WorkLogStatus>("\"REJECTED\"").unwrap(),
            WorkLogStatus::Rejected
        );
    }

    #[test]
    fn badge_colors_follow_status() {
        assert!(WorkLogStatus::Pending.badge_class().contains("yellow"));
        assert!(WorkLogStatus::Approved.badge_class().contains("green"));
        assert!(WorkLogStatus::Rejected.badge_class().contains("red"));
    }

    #[test]
    fn draft_accepts_a_full_day() {
        assert!(draft(0.0).validate().is_ok());
        assert!(draft(8.0).validate().is_ok());
        assert!(draft(24.0).validate().is_ok());
    }

    #[test]
    fn draft_rejects_out_of_range_hours() {
        assert!(draft(-1.0).validate().is_err());
        assert!(draft(24.5).validate().is_err());
    }

    #[test]
    fn work_log_deserializes_from_api_shape() {
        let log: WorkLog = serde_json::from_str(
            r#"{
                "id": 3,
                "userId": 7,
                "userName": "Jane Doe",
                "date": "2024-01-05",
                "hoursWorked": 8.0,
                "remarks": "on-site",
                "status": "PENDING",
                "calculatedPay": 200.0
            }"#,
        )
        .unwrap();

        assert_eq!(log.id, 3);
        assert_eq!(log.user_name.as_deref(), Some("Jane Doe"));
        assert_eq!(log.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert!(log.status.is_pending());
    }

    #[test]
    fn draft_serializes_to_camel_case() {
        let json = serde_json::to_string(&draft(8.0)).unwrap();
        assert!(json.contains("\"hoursWorked\":8.0"));
        assert!(json.contains("\"date\":\"2024-01-05\""));
    }
}
