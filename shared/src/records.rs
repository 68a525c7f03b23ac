//! Record kinds edited on the timekeeping screens.
//!
//! Every record is a flat bag of fields. Text-like fields (codes, dates,
//! times, hour quantities, remarks) are kept exactly as typed; only the
//! boolean flags are typed. Each kind describes its own fields through
//! [`TimeRecord::fields`] so forms and tables can be rendered generically.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lookup::LookupKind;

/// Which screen or tab a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    RawLog,
    OtGap,
    HoursPerDay,
    Tardiness,
    Undertime,
    Overtime,
    LeaveAbsence,
    OtherEarning,
    Adjustment,
    Advanced,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::RawLog => "Raw Data",
            RecordKind::OtGap => "Rawdata OT Gap",
            RecordKind::HoursPerDay => "Hours per Day",
            RecordKind::Tardiness => "Tardiness",
            RecordKind::Undertime => "Undertime",
            RecordKind::Overtime => "Overtime",
            RecordKind::LeaveAbsence => "Leave / Absence",
            RecordKind::OtherEarning => "Other Earnings",
            RecordKind::Adjustment => "Adjustment",
            RecordKind::Advanced => "Advanced",
        }
    }
}

/// Tabs of the Processed Data screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessedTab {
    HoursPerDay,
    Tardiness,
    Undertime,
    Overtime,
    LeaveAbsence,
    OtherEarning,
    Adjustment,
    Advanced,
}

impl ProcessedTab {
    pub const ALL: [ProcessedTab; 8] = [
        ProcessedTab::HoursPerDay,
        ProcessedTab::Tardiness,
        ProcessedTab::Undertime,
        ProcessedTab::Overtime,
        ProcessedTab::LeaveAbsence,
        ProcessedTab::OtherEarning,
        ProcessedTab::Adjustment,
        ProcessedTab::Advanced,
    ];

    pub fn kind(&self) -> RecordKind {
        match self {
            ProcessedTab::HoursPerDay => RecordKind::HoursPerDay,
            ProcessedTab::Tardiness => RecordKind::Tardiness,
            ProcessedTab::Undertime => RecordKind::Undertime,
            ProcessedTab::Overtime => RecordKind::Overtime,
            ProcessedTab::LeaveAbsence => RecordKind::LeaveAbsence,
            ProcessedTab::OtherEarning => RecordKind::OtherEarning,
            ProcessedTab::Adjustment => RecordKind::Adjustment,
            ProcessedTab::Advanced => RecordKind::Advanced,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind().label()
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// `M/D/YYYY`, picked from the calendar popup or typed
    Date,
    /// Normalized to `HH:MM` when the input loses focus
    Time,
    Hours,
    Flag,
    /// Code chosen from a lookup popup
    Lookup(LookupKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }

    /// Table cell text
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
        }
    }
}

pub trait TimeRecord:
    Clone + Default + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + 'static
{
    const KIND: RecordKind;

    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    fn employee_code(&self) -> &str;
    fn date(&self) -> &str;

    /// Form and table layout, in display order
    fn fields() -> &'static [FieldSpec];

    fn value(&self, key: &str) -> Option<FieldValue>;

    /// Returns false for an unknown key or a value of the wrong shape.
    fn set_value(&mut self, key: &str, value: FieldValue) -> bool;

    fn row(&self) -> Vec<String> {
        Self::fields()
            .iter()
            .map(|field| self.value(field.key).map(|value| value.display()).unwrap_or_default())
            .collect()
    }
}

macro_rules! field_kind {
    (Text) => { FieldKind::Text };
    (Date) => { FieldKind::Date };
    (Time) => { FieldKind::Time };
    (Hours) => { FieldKind::Hours };
    (Flag) => { FieldKind::Flag };
    (Employee) => { FieldKind::Lookup(LookupKind::Employee) };
    (Workshift) => { FieldKind::Lookup(LookupKind::Workshift) };
    (OtCode) => { FieldKind::Lookup(LookupKind::OtCode) };
    (LeaveType) => { FieldKind::Lookup(LookupKind::LeaveType) };
    (Device) => { FieldKind::Lookup(LookupKind::Device) };
}

macro_rules! field_type {
    (Flag) => { bool };
    ($other:ident) => { String };
}

macro_rules! field_value {
    (Flag, $slot:expr) => { FieldValue::Flag($slot) };
    ($other:ident, $slot:expr) => { FieldValue::Text($slot.clone()) };
}

macro_rules! assign_field {
    (Flag, $slot:expr, $value:expr) => {
        match $value {
            FieldValue::Flag(flag) => {
                $slot = flag;
                true
            }
            FieldValue::Text(_) => false,
        }
    };
    ($other:ident, $slot:expr, $value:expr) => {
        match $value {
            FieldValue::Text(text) => {
                $slot = text;
                true
            }
            FieldValue::Flag(_) => false,
        }
    };
}

/// Declares a record struct and its [`TimeRecord`] impl from a field list.
/// Every record must list `employee_code` and `date`.
macro_rules! time_record {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:expr;
        $( $field:ident : $label:literal, $fkind:ident; )+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub id: Uuid,
            $( pub $field: field_type!($fkind), )+
        }

        impl TimeRecord for $name {
            const KIND: RecordKind = $kind;

            fn id(&self) -> Uuid {
                self.id
            }

            fn set_id(&mut self, id: Uuid) {
                self.id = id;
            }

            fn employee_code(&self) -> &str {
                &self.employee_code
            }

            fn date(&self) -> &str {
                &self.date
            }

            fn fields() -> &'static [FieldSpec] {
                const FIELDS: &[FieldSpec] = &[
                    $( FieldSpec { key: stringify!($field), label: $label, kind: field_kind!($fkind) }, )+
                ];
                FIELDS
            }

            fn value(&self, key: &str) -> Option<FieldValue> {
                match key {
                    $( stringify!($field) => Some(field_value!($fkind, self.$field)), )+
                    _ => None,
                }
            }

            fn set_value(&mut self, key: &str, value: FieldValue) -> bool {
                match key {
                    $( stringify!($field) => assign_field!($fkind, self.$field, value), )+
                    _ => false,
                }
            }
        }
    };
}

time_record! {
    /// A single attendance punch as captured from a device
    RawLog => RecordKind::RawLog;
    employee_code: "Employee Code", Employee;
    date: "Log Date", Date;
    log_time: "Log Time", Time;
    log_type: "Log Type", Text;
    device_code: "Device", Device;
    remarks: "Remarks", Text;
}

time_record! {
    /// Correction of the gap between shift end and the start of overtime
    OtGap => RecordKind::OtGap;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    workshift_code: "Workshift", Workshift;
    time_in: "Time In", Time;
    time_out: "Time Out", Time;
    ot_start: "OT Start", Time;
    ot_end: "OT End", Time;
    remarks: "Remarks", Text;
}

time_record! {
    HoursPerDay => RecordKind::HoursPerDay;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    workshift_code: "Workshift", Workshift;
    time_in: "Time In", Time;
    time_out: "Time Out", Time;
    hours_worked: "Hours Worked", Hours;
    night_diff_hours: "Night Diff Hours", Hours;
    remarks: "Remarks", Text;
}

time_record! {
    Tardiness => RecordKind::Tardiness;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    workshift_code: "Workshift", Workshift;
    hours_late: "Hours Late", Hours;
    remarks: "Remarks", Text;
}

time_record! {
    Undertime => RecordKind::Undertime;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    workshift_code: "Workshift", Workshift;
    hours_undertime: "Hours Undertime", Hours;
    remarks: "Remarks", Text;
}

time_record! {
    Overtime => RecordKind::Overtime;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    ot_code: "OT Code", OtCode;
    hours: "Hours", Hours;
    offset_ot: "Offset OT", Flag;
    late_filing: "Late Filing", Flag;
    remarks: "Remarks", Text;
}

time_record! {
    LeaveAbsence => RecordKind::LeaveAbsence;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    leave_type: "Leave Type", LeaveType;
    hours: "Hours", Hours;
    with_pay: "With Pay", Flag;
    late_filing: "Late Filing", Flag;
    remarks: "Remarks", Text;
}

time_record! {
    OtherEarning => RecordKind::OtherEarning;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    earning_code: "Earning Code", Text;
    hours: "Hours", Hours;
    amount: "Amount", Text;
    remarks: "Remarks", Text;
}

time_record! {
    Adjustment => RecordKind::Adjustment;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    ot_code: "OT Code", OtCode;
    hours: "Hours", Hours;
    late_filing: "Late Filing", Flag;
    remarks: "Remarks", Text;
}

time_record! {
    /// Catch-all transaction for anything the other tabs do not cover
    Advanced => RecordKind::Advanced;
    employee_code: "Employee Code", Employee;
    date: "Date", Date;
    transaction_type: "Transaction Type", Text;
    code: "Code", Text;
    hours: "Hours", Hours;
    amount: "Amount", Text;
    with_pay: "With Pay", Flag;
    late_filing: "Late Filing", Flag;
    remarks: "Remarks", Text;
}
