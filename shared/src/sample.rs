//! Demo records that stand in for a backend until one exists.

use uuid::Uuid;

use crate::records::{FieldValue, RecordKind, TimeRecord};

type Row = &'static [(&'static str, &'static str)];

const RAW_LOGS: &[Row] = &[
    &[("employee_code", "EMP-0001"), ("date", "3/3/2025"), ("log_time", "07:52"), ("log_type", "In"), ("device_code", "BIO-01")],
    &[("employee_code", "EMP-0001"), ("date", "3/3/2025"), ("log_time", "17:06"), ("log_type", "Out"), ("device_code", "BIO-01")],
    &[("employee_code", "EMP-0005"), ("date", "3/3/2025"), ("log_time", "13:58"), ("log_type", "In"), ("device_code", "BIO-02")],
];

const OT_GAPS: &[Row] = &[
    &[("employee_code", "EMP-0003"), ("date", "3/4/2025"), ("workshift_code", "WS-DAY"), ("time_in", "08:00"), ("time_out", "17:00"), ("ot_start", "17:30"), ("ot_end", "20:00"), ("remarks", "30 min break before OT")],
];

const HOURS_PER_DAY: &[Row] = &[
    &[("employee_code", "EMP-0001"), ("date", "3/3/2025"), ("workshift_code", "WS-DAY"), ("time_in", "07:52"), ("time_out", "17:06"), ("hours_worked", "8"), ("night_diff_hours", "0")],
    &[("employee_code", "EMP-0006"), ("date", "3/3/2025"), ("workshift_code", "WS-GY"), ("time_in", "22:00"), ("time_out", "07:00"), ("hours_worked", "8"), ("night_diff_hours", "7")],
];

const TARDINESS: &[Row] = &[
    &[("employee_code", "EMP-0002"), ("date", "3/5/2025"), ("workshift_code", "WS-DAY"), ("hours_late", "0.25"), ("remarks", "Traffic")],
];

const UNDERTIME: &[Row] = &[
    &[("employee_code", "EMP-0004"), ("date", "3/6/2025"), ("workshift_code", "WS-DAY"), ("hours_undertime", "1.5")],
];

const OVERTIME: &[Row] = &[
    &[("employee_code", "EMP-0003"), ("date", "3/4/2025"), ("ot_code", "ROT"), ("hours", "2.5"), ("offset_ot", "false"), ("late_filing", "false")],
    &[("employee_code", "EMP-0007"), ("date", "3/8/2025"), ("ot_code", "RDOT"), ("hours", "4"), ("offset_ot", "true"), ("late_filing", "true"), ("remarks", "Server migration")],
];

const LEAVES: &[Row] = &[
    &[("employee_code", "EMP-0008"), ("date", "3/10/2025"), ("leave_type", "VL"), ("hours", "8"), ("with_pay", "true")],
    &[("employee_code", "EMP-0005"), ("date", "3/11/2025"), ("leave_type", "LWOP"), ("hours", "8"), ("with_pay", "false"), ("late_filing", "true")],
];

const OTHER_EARNINGS: &[Row] = &[
    &[("employee_code", "EMP-0006"), ("date", "3/15/2025"), ("earning_code", "MEAL"), ("hours", "0"), ("amount", "150.00"), ("remarks", "Meal allowance")],
];

const ADJUSTMENTS: &[Row] = &[
    &[("employee_code", "EMP-0001"), ("date", "2/28/2025"), ("ot_code", "ROT"), ("hours", "-1"), ("remarks", "Overpaid OT last cutoff")],
];

const ADVANCED: &[Row] = &[
    &[("employee_code", "EMP-0002"), ("date", "3/12/2025"), ("transaction_type", "Holiday Pay"), ("code", "LH"), ("hours", "8"), ("amount", ""), ("with_pay", "true")],
];

fn rows(kind: RecordKind) -> &'static [Row] {
    match kind {
        RecordKind::RawLog => RAW_LOGS,
        RecordKind::OtGap => OT_GAPS,
        RecordKind::HoursPerDay => HOURS_PER_DAY,
        RecordKind::Tardiness => TARDINESS,
        RecordKind::Undertime => UNDERTIME,
        RecordKind::Overtime => OVERTIME,
        RecordKind::LeaveAbsence => LEAVES,
        RecordKind::OtherEarning => OTHER_EARNINGS,
        RecordKind::Adjustment => ADJUSTMENTS,
        RecordKind::Advanced => ADVANCED,
    }
}

/// Demo records for `R`, each with a fresh id
pub fn sample_records<R: TimeRecord>() -> Vec<R> {
    rows(R::KIND)
        .iter()
        .map(|row| {
            let mut record = R::default();
            record.set_id(Uuid::new_v4());
            for (key, raw) in row.iter() {
                let value = match *raw {
                    "true" => FieldValue::Flag(true),
                    "false" => FieldValue::Flag(false),
                    text => FieldValue::Text(text.to_string()),
                };
                if !record.set_value(key, value) {
                    log::warn!("{}: sample value for '{}' does not fit", R::KIND.label(), key);
                }
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::*;

    #[test]
    fn test_samples_fill_every_field_they_name() {
        fn check<R: TimeRecord>() {
            for (row, record) in rows(R::KIND).iter().zip(sample_records::<R>()) {
                for (key, raw) in row.iter() {
                    let value = record.value(key).unwrap_or_else(|| panic!("{:?} has no field {}", R::KIND, key));
                    let expected = match *raw {
                        "true" => FieldValue::Flag(true),
                        "false" => FieldValue::Flag(false),
                        text => FieldValue::Text(text.to_string()),
                    };
                    assert_eq!(value, expected, "{:?}.{}", R::KIND, key);
                }
            }
        }
        check::<RawLog>();
        check::<OtGap>();
        check::<HoursPerDay>();
        check::<Tardiness>();
        check::<Undertime>();
        check::<Overtime>();
        check::<LeaveAbsence>();
        check::<OtherEarning>();
        check::<Adjustment>();
        check::<Advanced>();
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let logs = sample_records::<RawLog>();
        assert_eq!(logs.len(), 3);
        assert_ne!(logs[0].id, logs[1].id);
        assert!(logs.iter().all(|log| !log.employee_code.is_empty()));
    }
}
