use crate::api::{PassSlip, RequestRecord, RequestStatus};
use chrono::NaiveDate;

/// Approved pass slips dated `day`, earliest time-out first.
pub fn passes_for_day(records: &[RequestRecord], day: NaiveDate) -> Vec<PassSlip> {
    let mut slips: Vec<PassSlip> = records
        .iter()
        .filter_map(|record| match record {
            RequestRecord::PassSlip(slip) => Some(slip),
            _ => None,
        })
        .filter(|slip| slip.review.status == Some(RequestStatus::Approved) && slip.date == day)
        .cloned()
        .collect();
    slips.sort_by(|a, b| a.time_out.cmp(&b.time_out).then(a.id.cmp(&b.id)));
    slips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::records::fixtures::{pass_slip, travel_order};

    fn slip_at(id: i64, status: &str, time_out: &str) -> RequestRecord {
        let mut record = pass_slip(id, status);
        if let RequestRecord::PassSlip(slip) = &mut record {
            slip.time_out = Some(time_out.to_string());
        }
        record
    }

    #[test]
    fn keeps_approved_slips_for_the_day_in_departure_order() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let records = vec![
            slip_at(1, "approved", "15:00"),
            slip_at(2, "pending", "08:00"),
            slip_at(3, "approved", "09:30"),
            travel_order(4, "approved"),
        ];
        let ids: Vec<i64> = passes_for_day(&records, day).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1]);

        let other_day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert!(passes_for_day(&records, other_day).is_empty());
    }
}
