use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::models::booking::{
    BookingConfirmation, BookingSnapshot, Submission, SubmissionStatus,
};

#[derive(Debug, PartialEq, Eq)]
pub enum SubmissionError {
    /// The session already has a booking being processed
    AlreadyProcessing(Uuid),
    NotFound(Uuid),
    AlreadyConfirmed(Uuid),
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::AlreadyProcessing(id) => {
                write!(f, "Booking {} is still being processed", id)
            }
            SubmissionError::NotFound(id) => write!(f, "Booking submission {} not found", id),
            SubmissionError::AlreadyConfirmed(id) => {
                write!(f, "Booking {} is already confirmed", id)
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

impl SubmissionError {
    pub fn code(&self) -> &'static str {
        match self {
            SubmissionError::AlreadyProcessing(_) => "already_processing",
            SubmissionError::NotFound(_) => "not_found",
            SubmissionError::AlreadyConfirmed(_) => "already_confirmed",
        }
    }
}

struct Entry {
    submission: Submission,
    task: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Ledger {
    entries: HashMap<Uuid, Entry>,
    // session id -> its processing submission
    processing: HashMap<String, Uuid>,
}

type Store = Arc<Mutex<Ledger>>;

/// Simulated booking completion.
///
/// Each submission captures its snapshot by value and confirms it after a
/// fixed delay. A session may have only one submission processing at a time,
/// and a processing submission can be cancelled until the delay elapses.
/// Settled submissions stay queryable for the retention window, then are
/// dropped.
#[derive(Clone)]
pub struct ConfirmationScheduler {
    delay: Duration,
    retention: Duration,
    submissions: Store,
}

impl ConfirmationScheduler {
    pub fn new(delay: Duration, retention: Duration) -> Self {
        Self {
            delay,
            retention,
            submissions: Arc::new(Mutex::new(Ledger::default())),
        }
    }

    pub fn submit(
        &self,
        session_id: &str,
        snapshot: BookingSnapshot,
    ) -> Result<Submission, SubmissionError> {
        let mut ledger = lock(&self.submissions);

        if let Some(pending) = ledger.processing.get(session_id) {
            return Err(SubmissionError::AlreadyProcessing(*pending));
        }

        let submission = Submission {
            id: Uuid::new_v4(),
            session_id: session_id.to_string(),
            status: SubmissionStatus::Processing,
            submitted_at: Utc::now(),
            confirmation: None,
        };

        let id = submission.id;
        let store = Arc::clone(&self.submissions);
        let delay = self.delay;
        let retention = self.retention;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if complete(&store, id, snapshot) {
                tokio::time::sleep(retention).await;
                evict(&store, id);
            }
        });

        log::info!(
            "Booking {} submitted for session {}, confirming in {:?}",
            id,
            session_id,
            delay
        );

        ledger.processing.insert(session_id.to_string(), id);
        ledger.entries.insert(
            id,
            Entry {
                submission: submission.clone(),
                task: Some(task),
            },
        );

        Ok(submission)
    }

    pub fn status(&self, id: Uuid) -> Option<Submission> {
        lock(&self.submissions)
            .entries
            .get(&id)
            .map(|entry| entry.submission.clone())
    }

    /// Abort a processing submission. Cancelling twice is a no-op.
    pub fn cancel(&self, id: Uuid) -> Result<Submission, SubmissionError> {
        let mut ledger = lock(&self.submissions);
        let entry = ledger
            .entries
            .get_mut(&id)
            .ok_or(SubmissionError::NotFound(id))?;

        match entry.submission.status {
            SubmissionStatus::Confirmed => Err(SubmissionError::AlreadyConfirmed(id)),
            SubmissionStatus::Cancelled => Ok(entry.submission.clone()),
            SubmissionStatus::Processing => {
                if let Some(task) = entry.task.take() {
                    task.abort();
                }
                entry.submission.status = SubmissionStatus::Cancelled;
                let cancelled = entry.submission.clone();
                ledger.processing.remove(&cancelled.session_id);

                let store = Arc::clone(&self.submissions);
                let retention = self.retention;
                tokio::spawn(async move {
                    tokio::time::sleep(retention).await;
                    evict(&store, id);
                });

                log::info!("Booking {} cancelled before confirmation", id);
                Ok(cancelled)
            }
        }
    }

    /// Submissions currently held, settled or not
    pub fn len(&self) -> usize {
        lock(&self.submissions).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock(store: &Store) -> MutexGuard<'_, Ledger> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Confirm a processing submission. Returns false if it was settled already.
fn complete(store: &Store, id: Uuid, snapshot: BookingSnapshot) -> bool {
    let mut ledger = lock(store);
    let Some(entry) = ledger.entries.get_mut(&id) else {
        return false;
    };

    // Lost a race with cancel
    if entry.submission.status != SubmissionStatus::Processing {
        return false;
    }

    let confirmation = build_confirmation(snapshot);
    log::info!(
        "Booking {} confirmed with code {}",
        id,
        confirmation.confirmation_code
    );

    entry.task = None;
    entry.submission.status = SubmissionStatus::Confirmed;
    entry.submission.confirmation = Some(confirmation);
    let session_id = entry.submission.session_id.clone();
    ledger.processing.remove(&session_id);
    true
}

fn evict(store: &Store, id: Uuid) {
    if lock(store).entries.remove(&id).is_some() {
        log::debug!("Dropped settled booking {}", id);
    }
}

pub fn build_confirmation(snapshot: BookingSnapshot) -> BookingConfirmation {
    let BookingSnapshot { draft, summary } = snapshot;

    let confirmation_code = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();

    let email = draft.email.trim().to_string();

    BookingConfirmation {
        reference: Uuid::new_v4(),
        confirmation_code,
        guest_name: format!("{} {}", draft.first_name.trim(), draft.last_name.trim()),
        room_name: summary.room_display_name,
        check_in_display: summary.check_in_display,
        check_out_display: summary.check_out_display,
        nights: summary.nights,
        duration_label: summary.duration_label,
        total_price: summary.total_price,
        total_display: summary.total_display,
        notice: format!("A confirmation email has been sent to {}", email),
        email,
        adults: draft.adults,
        children: draft.children,
        special_requests: draft
            .special_requests
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()),
        confirmed_at: Utc::now(),
    }
}
