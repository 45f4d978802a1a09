use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::workflows::deposit::context::EvaluationContext;
use crate::workflows::deposit::domain::{
    AnalysisId, CommunicationChannel, IntakeRecord, ReturnStatus, TriState,
};
use crate::workflows::deposit::repository::{AnalysisRecord, ReportRepository, RepositoryError};
use crate::workflows::deposit::timeline::{FixedClock, Timeline};
use crate::workflows::deposit::{analysis_router, CaseAnalysisService, CaseStrengthEngine};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 31).expect("valid date")
}

pub(super) fn moved_out(days_ago: i64) -> String {
    (today() - Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string()
}

pub(super) fn channels(methods: &[CommunicationChannel]) -> BTreeSet<CommunicationChannel> {
    methods.iter().copied().collect()
}

/// Baseline dispute: nothing refunded, nothing itemized, address unknown.
pub(super) fn intake(days_ago: i64) -> IntakeRecord {
    IntakeRecord {
        tenant_name: "Maria Alvarez".to_string(),
        landlord_name: "Hillcrest Property Group".to_string(),
        property_address: "1400 Oak Ridge Dr, Apt 12, Austin, TX".to_string(),
        lease_start_date: Some("2023-06-01".to_string()),
        lease_end_date: Some("2025-01-31".to_string()),
        move_out_date: moved_out(days_ago),
        deposit_amount: Some("$1,500.00".to_string()),
        pet_deposit_amount: None,
        deposit_returned: ReturnStatus::None,
        amount_returned: None,
        itemization_received: TriState::No,
        forwarding_address_provided: TriState::Unknown,
        forwarding_address_date: None,
        communication_methods: BTreeSet::new(),
        tenant_notes: None,
        lease_text: None,
    }
}

/// 45 days out, full deposit withheld, no itemization, forwarding address given.
pub(super) fn clean_violation() -> IntakeRecord {
    IntakeRecord {
        forwarding_address_provided: TriState::Yes,
        forwarding_address_date: Some(moved_out(44)),
        communication_methods: channels(&[
            CommunicationChannel::Email,
            CommunicationChannel::CertifiedMail,
        ]),
        ..intake(45)
    }
}

/// Refunded in full ten days after move-out.
pub(super) fn full_compliance() -> IntakeRecord {
    IntakeRecord {
        deposit_returned: ReturnStatus::Full,
        amount_returned: Some("1500".to_string()),
        forwarding_address_provided: TriState::Yes,
        communication_methods: channels(&[CommunicationChannel::Email]),
        ..intake(10)
    }
}

/// 22 days out, landlord silent, forwarding address on file.
pub(super) fn approaching_deadline() -> IntakeRecord {
    IntakeRecord {
        forwarding_address_provided: TriState::Yes,
        communication_methods: channels(&[CommunicationChannel::Text]),
        ..intake(22)
    }
}

/// $1000 deposit, $400 returned, no itemization, past the deadline.
pub(super) fn partial_refund() -> IntakeRecord {
    IntakeRecord {
        deposit_amount: Some("1000".to_string()),
        deposit_returned: ReturnStatus::Partial,
        amount_returned: Some("400".to_string()),
        forwarding_address_provided: TriState::Yes,
        communication_methods: channels(&[CommunicationChannel::Email]),
        ..intake(40)
    }
}

pub(super) fn context_for(intake: &IntakeRecord) -> EvaluationContext {
    let timeline = Timeline::compute(&intake.move_out_date, today());
    EvaluationContext::build(intake, timeline)
}

pub(super) fn engine() -> CaseStrengthEngine {
    CaseStrengthEngine::standard()
}

pub(super) type TestService = CaseAnalysisService<MemoryRepository, FixedClock>;

pub(super) fn build_service() -> (TestService, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = CaseAnalysisService::new(repository.clone(), Arc::new(FixedClock(today())));
    (service, repository)
}

pub(super) fn router_with_service(service: TestService) -> axum::Router {
    analysis_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AnalysisId, AnalysisRecord>>>,
}

impl ReportRepository for MemoryRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.analysis_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.analysis_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl ReportRepository for ConflictRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
