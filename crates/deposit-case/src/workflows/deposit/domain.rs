use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted analysis snapshots.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

/// Intake answers that may be left unresolved by the tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    Yes,
    No,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TriState {
    /// Only an explicit `yes` counts; `unknown` is never a compliance signal.
    pub const fn is_yes(self) -> bool {
        matches!(self, TriState::Yes)
    }

    pub const fn label(self) -> &'static str {
        match self {
            TriState::Yes => "yes",
            TriState::No => "no",
            TriState::Unknown => "unknown",
        }
    }
}

/// How much of the deposit the landlord has sent back so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    #[default]
    None,
    Partial,
    Full,
}

impl ReturnStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ReturnStatus::None => "none",
            ReturnStatus::Partial => "partial",
            ReturnStatus::Full => "full",
        }
    }
}

/// Channels the tenant used to reach the landlord about the deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationChannel {
    Email,
    Text,
    Phone,
    Letter,
    CertifiedMail,
    InPerson,
    Portal,
    #[serde(other)]
    Other,
}

impl CommunicationChannel {
    pub const fn label(self) -> &'static str {
        match self {
            CommunicationChannel::Email => "email",
            CommunicationChannel::Text => "text message",
            CommunicationChannel::Phone => "phone",
            CommunicationChannel::Letter => "letter",
            CommunicationChannel::CertifiedMail => "certified mail",
            CommunicationChannel::InPerson => "in person",
            CommunicationChannel::Portal => "tenant portal",
            CommunicationChannel::Other => "other",
        }
    }
}

/// Tenant-submitted dispute facts, already schema-validated upstream.
///
/// Monetary fields keep the raw form strings; the evaluation context parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeRecord {
    pub tenant_name: String,
    pub landlord_name: String,
    pub property_address: String,
    pub lease_start_date: Option<String>,
    pub lease_end_date: Option<String>,
    pub move_out_date: String,
    pub deposit_amount: Option<String>,
    pub pet_deposit_amount: Option<String>,
    pub deposit_returned: ReturnStatus,
    pub amount_returned: Option<String>,
    pub itemization_received: TriState,
    pub forwarding_address_provided: TriState,
    pub forwarding_address_date: Option<String>,
    pub communication_methods: BTreeSet<CommunicationChannel>,
    pub tenant_notes: Option<String>,
    /// Lease text already extracted by the document-ingestion collaborator.
    pub lease_text: Option<String>,
}
