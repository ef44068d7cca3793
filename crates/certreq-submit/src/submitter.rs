use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{FixedOffset, Local};

use certreq_model::{BatchOutcome, RequestItem, StudentId, SubjectId};

use crate::due::DueDate;
use crate::error::{Result, SubmitError};
use crate::gateway::RequestGateway;
use crate::reconcile::reconcile;

/// Common parameters for one batch submission.
#[derive(Debug, Clone)]
pub struct SubmitParams {
    pub subject_id: SubjectId,
    pub due_date: DueDate,
}

/// Dispatches one batched certificate-request call at a time and reconciles
/// the per-item results.
///
/// The in-flight guard rejects a second call while one is awaiting the
/// gateway; it never queues or interleaves. Precondition failures and
/// gateway failures leave per-item state untouched.
#[derive(Debug)]
pub struct BatchSubmitter<G> {
    gateway: G,
    zone_offset: FixedOffset,
    in_flight: AtomicBool,
}

impl<G: RequestGateway> BatchSubmitter<G> {
    pub fn new(gateway: G, zone_offset: FixedOffset) -> Self {
        Self {
            gateway,
            zone_offset,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit certificate requests for the selected students.
    ///
    /// Fails fast, before any network call, on an empty selection or a due
    /// date earlier than today in the caller's local date.
    pub async fn submit(
        &self,
        selected: &[StudentId],
        params: &SubmitParams,
    ) -> Result<BatchOutcome> {
        if selected.is_empty() {
            return Err(SubmitError::EmptySelection);
        }
        let today = Local::now().date_naive();
        if !params.due_date.is_on_or_after(today) {
            return Err(SubmitError::DueDateInPast(params.due_date.date()));
        }
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(SubmitError::InFlight)?;

        let due_date = params.due_date.to_instant(self.zone_offset);
        let items: Vec<RequestItem> = selected
            .iter()
            .map(|id| RequestItem {
                target_id: id.clone(),
                scope_id: params.subject_id.clone(),
                due_date,
            })
            .collect();
        tracing::info!(
            items = items.len(),
            subject = %params.subject_id,
            due = %params.due_date,
            "dispatching batch certificate request"
        );
        let results = self.gateway.submit_requests(&items).await?;
        Ok(reconcile(selected, results))
    }
}

/// Releases the busy flag on every exit path, including gateway errors.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
