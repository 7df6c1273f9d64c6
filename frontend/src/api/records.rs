//! Travel request records as read from the API.
//!
//! Each request kind nests its approval state under a differently named key
//! (`travel_order_status`, `official_business_status`, `pass_slip_status`).
//! Those shapes are resolved once at deserialization time into a common
//! [`Review`], and the three kinds are unified by [`RequestRecord`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestStatus {
    Pending,
    PendingAdmin,
    Approved,
    Declined,
}

impl RequestStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "pending" => Some(RequestStatus::Pending),
            "pendingAdmin" => Some(RequestStatus::PendingAdmin),
            "approved" => Some(RequestStatus::Approved),
            "declined" => Some(RequestStatus::Declined),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::PendingAdmin => "pendingAdmin",
            RequestStatus::Approved => "approved",
            RequestStatus::Declined => "declined",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::PendingAdmin => "For Admin Approval",
            RequestStatus::Approved => "Approved",
            RequestStatus::Declined => "Declined",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::PendingAdmin)
    }

    pub fn is_final(&self) -> bool {
        !self.is_pending()
    }

    /// The only role allowed to approve or decline a record in this state.
    pub fn acting_role(&self) -> Option<Role> {
        match self {
            RequestStatus::Pending => Some(Role::Evaluator),
            RequestStatus::PendingAdmin => Some(Role::Admin),
            RequestStatus::Approved | RequestStatus::Declined => None,
        }
    }

    pub fn next_on_approve(&self, role: Role) -> Option<RequestStatus> {
        match (self, role) {
            (RequestStatus::Pending, Role::Evaluator) => Some(RequestStatus::PendingAdmin),
            (RequestStatus::PendingAdmin, Role::Admin) => Some(RequestStatus::Approved),
            _ => None,
        }
    }

    pub fn can_decline(&self, role: Role) -> bool {
        self.acting_role() == Some(role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Evaluator,
    Guard,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "evaluator" => Role::Evaluator,
            "guard" => Role::Guard,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Evaluator => "evaluator",
            Role::Guard => "guard",
            Role::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Evaluator => "Evaluator",
            Role::Guard => "Guard",
            Role::Unknown => "Unknown",
        }
    }

    pub fn can_review(&self) -> bool {
        matches!(self, Role::Admin | Role::Evaluator)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    TravelOrder,
    OfficialBusiness,
    PassSlip,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] = [
        RequestKind::TravelOrder,
        RequestKind::OfficialBusiness,
        RequestKind::PassSlip,
    ];

    pub fn api_path(&self) -> &'static str {
        match self {
            RequestKind::TravelOrder => "travel-orders",
            RequestKind::OfficialBusiness => "official-business",
            RequestKind::PassSlip => "pass-slips",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            RequestKind::TravelOrder => "TO",
            RequestKind::OfficialBusiness => "OB",
            RequestKind::PassSlip => "PS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::TravelOrder => "Travel Order",
            RequestKind::OfficialBusiness => "Official Business",
            RequestKind::PassSlip => "Pass Slip",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "TO" | "travel_order" => Some(RequestKind::TravelOrder),
            "OB" | "official_business" => Some(RequestKind::OfficialBusiness),
            "PS" | "pass_slip" => Some(RequestKind::PassSlip),
            _ => None,
        }
    }
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<RequestStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(RequestStatus::parse))
}

/// Approval state shared by all request kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// `None` when the API sent no status or one outside the known set.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub head_position_id: Option<i64>,
    #[serde(default)]
    pub chief_id: Option<i64>,
    #[serde(default)]
    pub oic_id: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelOrder {
    pub id: i64,
    #[serde(default)]
    pub employees: Vec<EmployeeRef>,
    pub destination: String,
    pub purpose: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    #[serde(default)]
    pub fund_source: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, rename = "travel_order_status")]
    pub review: Review,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialBusiness {
    pub id: i64,
    #[serde(default)]
    pub employees: Vec<EmployeeRef>,
    pub place: String,
    pub purpose: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time_departure: Option<String>,
    #[serde(default)]
    pub time_return: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, rename = "official_business_status")]
    pub review: Review,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassSlip {
    pub id: i64,
    #[serde(default)]
    pub employees: Vec<EmployeeRef>,
    pub destination: String,
    pub reason: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time_out: Option<String>,
    #[serde(default)]
    pub time_in: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, rename = "pass_slip_status")]
    pub review: Review,
}

/// Body of `PUT /{kind}/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_position_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chief_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oic_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum RequestRecord {
    TravelOrder(TravelOrder),
    OfficialBusiness(OfficialBusiness),
    PassSlip(PassSlip),
}

impl RequestRecord {
    pub fn kind(&self) -> RequestKind {
        match self {
            RequestRecord::TravelOrder(_) => RequestKind::TravelOrder,
            RequestRecord::OfficialBusiness(_) => RequestKind::OfficialBusiness,
            RequestRecord::PassSlip(_) => RequestKind::PassSlip,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            RequestRecord::TravelOrder(r) => r.id,
            RequestRecord::OfficialBusiness(r) => r.id,
            RequestRecord::PassSlip(r) => r.id,
        }
    }

    /// Stable key across kinds; ids are only unique per kind.
    pub fn key(&self) -> String {
        format!("{}-{}", self.kind().abbreviation(), self.id())
    }

    pub fn review(&self) -> &Review {
        match self {
            RequestRecord::TravelOrder(r) => &r.review,
            RequestRecord::OfficialBusiness(r) => &r.review,
            RequestRecord::PassSlip(r) => &r.review,
        }
    }

    pub fn status(&self) -> Option<RequestStatus> {
        self.review().status
    }

    pub fn employees(&self) -> &[EmployeeRef] {
        match self {
            RequestRecord::TravelOrder(r) => &r.employees,
            RequestRecord::OfficialBusiness(r) => &r.employees,
            RequestRecord::PassSlip(r) => &r.employees,
        }
    }

    pub fn requester_names(&self) -> Vec<String> {
        self.employees().iter().map(|e| e.name.clone()).collect()
    }

    pub fn destination(&self) -> &str {
        match self {
            RequestRecord::TravelOrder(r) => &r.destination,
            RequestRecord::OfficialBusiness(r) => &r.place,
            RequestRecord::PassSlip(r) => &r.destination,
        }
    }

    pub fn purpose(&self) -> &str {
        match self {
            RequestRecord::TravelOrder(r) => &r.purpose,
            RequestRecord::OfficialBusiness(r) => &r.purpose,
            RequestRecord::PassSlip(r) => &r.reason,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            RequestRecord::TravelOrder(r) => r.created_at,
            RequestRecord::OfficialBusiness(r) => r.created_at,
            RequestRecord::PassSlip(r) => r.created_at,
        }
    }

    /// First and last day covered by the request.
    pub fn date_span(&self) -> (NaiveDate, NaiveDate) {
        match self {
            RequestRecord::TravelOrder(r) => (r.date_from, r.date_to.max(r.date_from)),
            RequestRecord::OfficialBusiness(r) => (r.date, r.date),
            RequestRecord::PassSlip(r) => (r.date, r.date),
        }
    }

    pub fn schedule_label(&self) -> String {
        let (from, to) = self.date_span();
        if from == to {
            from.format("%b %d, %Y").to_string()
        } else {
            format!("{} - {}", from.format("%b %d, %Y"), to.format("%b %d, %Y"))
        }
    }
}
