use crate::api::{
    ApiError, HeadPosition, HeadPositionKind, RequestRecord, RequestStatus, Role, StatusUpdate,
};

use super::types::{ActionTarget, Decision, RequestAction};

/// Active signatories resolved from the head-position list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signatories {
    pub chief: Option<HeadPosition>,
    pub oic: Option<HeadPosition>,
    pub regional_director: Option<HeadPosition>,
}

impl Signatories {
    /// Soft-deleted entries are ignored. The OIC prefers the one assigned to the chief.
    pub fn resolve(heads: &[HeadPosition]) -> Self {
        let active = || heads.iter().filter(|head| head.deleted_at.is_none());
        let first_of = |kind: HeadPositionKind| active().find(|head| head.kind == kind).cloned();

        let chief = first_of(HeadPositionKind::Chief);
        let oic = chief
            .as_ref()
            .and_then(|chief| {
                active()
                    .find(|head| {
                        head.kind == HeadPositionKind::Oic && head.chief_id == Some(chief.id)
                    })
                    .cloned()
            })
            .or_else(|| first_of(HeadPositionKind::Oic));
        Self {
            chief,
            oic,
            regional_director: first_of(HeadPositionKind::RegionalDirector),
        }
    }

    fn chief_id(&self) -> Option<i64> {
        self.chief.as_ref().map(|head| head.id)
    }

    fn oic_id(&self) -> Option<i64> {
        self.oic.as_ref().map(|head| head.id)
    }

    /// The head position whose signature goes on an exported document.
    pub fn signer_for<'a>(
        &'a self,
        record: &RequestRecord,
        heads: &'a [HeadPosition],
    ) -> Option<&'a HeadPosition> {
        record
            .review()
            .head_position_id
            .and_then(|id| heads.iter().find(|head| head.id == id))
            .or(self.regional_director.as_ref())
            .or(self.chief.as_ref())
    }
}

/// Validates an approval action and builds the status payload for it.
///
/// Every rejection happens here, before any request is issued.
pub fn build_status_update(
    action: &RequestAction,
    role: Role,
    heads: &[HeadPosition],
) -> Result<StatusUpdate, ApiError> {
    let ActionTarget { id, kind, status } = &action.target;
    if id.is_none() {
        return Err(ApiError::missing_identifier(format!(
            "The selected {} no longer has an identifier. Reload and try again.",
            kind.label()
        )));
    }
    let status = status.ok_or_else(|| {
        ApiError::validation("This request has no recognized status and cannot be acted on.")
    })?;

    match &action.decision {
        Decision::Approve => {
            let next = status.next_on_approve(role).ok_or_else(|| {
                ApiError::validation(format!(
                    "A {} cannot approve a request that is {}.",
                    role.label().to_lowercase(),
                    status.label().to_lowercase()
                ))
            })?;
            let signatories = Signatories::resolve(heads);
            match next {
                RequestStatus::PendingAdmin => {
                    if signatories.chief.is_none() && signatories.oic.is_none() {
                        return Err(ApiError::missing_identifier(
                            "No chief or officer-in-charge is configured to sign this request.",
                        ));
                    }
                    Ok(StatusUpdate {
                        status: next,
                        remarks: None,
                        head_position_id: None,
                        chief_id: signatories.chief_id(),
                        oic_id: signatories.oic_id(),
                    })
                }
                _ => {
                    let director = signatories.regional_director.as_ref().ok_or_else(|| {
                        ApiError::missing_identifier(
                            "No regional director is configured to sign this request.",
                        )
                    })?;
                    Ok(StatusUpdate {
                        status: next,
                        remarks: None,
                        head_position_id: Some(director.id),
                        chief_id: signatories.chief_id(),
                        oic_id: signatories.oic_id(),
                    })
                }
            }
        }
        Decision::Decline { remarks } => {
            let remarks = remarks.trim();
            if remarks.is_empty() {
                return Err(ApiError::validation("Remarks are required to decline a request."));
            }
            if !status.can_decline(role) {
                return Err(ApiError::validation(format!(
                    "A {} cannot decline a request that is {}.",
                    role.label().to_lowercase(),
                    status.label().to_lowercase()
                )));
            }
            Ok(StatusUpdate {
                status: RequestStatus::Declined,
                remarks: Some(remarks.to_string()),
                head_position_id: None,
                chief_id: None,
                oic_id: None,
            })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{full_roster, head};
    use super::*;
    use crate::api::RequestKind;
    use chrono::Utc;

    fn action(status: Option<RequestStatus>, decision: Decision) -> RequestAction {
        RequestAction {
            target: ActionTarget {
                id: Some(7),
                kind: RequestKind::TravelOrder,
                status,
            },
            decision,
        }
    }

    #[test]
    fn resolve_prefers_oic_assigned_to_chief() {
        let signatories = Signatories::resolve(&full_roster());
        assert_eq!(signatories.chief.map(|h| h.id), Some(2));
        assert_eq!(signatories.oic.map(|h| h.id), Some(4));
        assert_eq!(signatories.regional_director.map(|h| h.id), Some(1));
    }

    #[test]
    fn resolve_skips_soft_deleted_heads() {
        let mut roster = full_roster();
        roster[0].deleted_at = Some(Utc::now());
        let signatories = Signatories::resolve(&roster);
        assert!(signatories.regional_director.is_none());
    }

    #[test]
    fn evaluator_approval_moves_to_pending_admin() {
        let update = build_status_update(
            &action(Some(RequestStatus::Pending), Decision::Approve),
            Role::Evaluator,
            &full_roster(),
        )
        .unwrap();
        assert_eq!(update.status, RequestStatus::PendingAdmin);
        assert_eq!(update.chief_id, Some(2));
        assert_eq!(update.oic_id, Some(4));
        assert_eq!(update.head_position_id, None);
    }

    #[test]
    fn admin_approval_attaches_regional_director() {
        let update = build_status_update(
            &action(Some(RequestStatus::PendingAdmin), Decision::Approve),
            Role::Admin,
            &full_roster(),
        )
        .unwrap();
        assert_eq!(update.status, RequestStatus::Approved);
        assert_eq!(update.head_position_id, Some(1));
    }

    #[test]
    fn approval_by_the_wrong_role_is_rejected() {
        let err = build_status_update(
            &action(Some(RequestStatus::Pending), Decision::Approve),
            Role::Admin,
            &full_roster(),
        )
        .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");

        let err = build_status_update(
            &action(Some(RequestStatus::Approved), Decision::Approve),
            Role::Admin,
            &full_roster(),
        )
        .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn approval_without_signatory_is_rejected() {
        let err = build_status_update(
            &action(Some(RequestStatus::PendingAdmin), Decision::Approve),
            Role::Admin,
            &[head(2, HeadPositionKind::Chief, None)],
        )
        .unwrap_err();
        assert_eq!(err.code, "MISSING_IDENTIFIER");

        let err = build_status_update(
            &action(Some(RequestStatus::Pending), Decision::Approve),
            Role::Evaluator,
            &[],
        )
        .unwrap_err();
        assert_eq!(err.code, "MISSING_IDENTIFIER");
    }

    #[test]
    fn decline_requires_remarks() {
        let err = build_status_update(
            &action(
                Some(RequestStatus::Pending),
                Decision::Decline {
                    remarks: "   ".into(),
                },
            ),
            Role::Evaluator,
            &[],
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn decline_trims_remarks_and_clears_signatories() {
        let update = build_status_update(
            &action(
                Some(RequestStatus::PendingAdmin),
                Decision::Decline {
                    remarks: "  Missing itinerary ".into(),
                },
            ),
            Role::Admin,
            &full_roster(),
        )
        .unwrap();
        assert_eq!(update.status, RequestStatus::Declined);
        assert_eq!(update.remarks.as_deref(), Some("Missing itinerary"));
        assert!(update.head_position_id.is_none());
    }

    #[test]
    fn missing_identifier_and_status_are_rejected() {
        let mut stale = action(Some(RequestStatus::Pending), Decision::Approve);
        stale.target.id = None;
        let err = build_status_update(&stale, Role::Evaluator, &full_roster()).unwrap_err();
        assert_eq!(err.code, "MISSING_IDENTIFIER");

        let err = build_status_update(
            &action(None, Decision::Approve),
            Role::Evaluator,
            &full_roster(),
        )
        .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn signer_prefers_recorded_head_position() {
        let roster = full_roster();
        let signatories = Signatories::resolve(&roster);
        let mut record = crate::api::records::fixtures::travel_order(1, "approved");
        assert_eq!(signatories.signer_for(&record, &roster).map(|h| h.id), Some(1));
        if let RequestRecord::TravelOrder(order) = &mut record {
            order.review.head_position_id = Some(2);
        }
        assert_eq!(signatories.signer_for(&record, &roster).map(|h| h.id), Some(2));
    }

    #[test]
    fn signer_falls_back_to_chief_without_a_director() {
        let mut roster = full_roster();
        roster[0].deleted_at = Some(Utc::now());
        let signatories = Signatories::resolve(&roster);
        let record = crate::api::records::fixtures::travel_order(1, "approved");
        assert_eq!(signatories.signer_for(&record, &roster).map(|h| h.id), Some(2));
    }
}
