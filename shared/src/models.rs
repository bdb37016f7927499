use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::ApiError;

/// A student as returned by `/api/students`.
///
/// `student_id` follows the `S` + zero-padded number convention
/// (e.g. `S007`), but the backend is the source of truth for uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub student_class: String,
    /// Kept as the backend sent it; only the forms restrict it to [`Gender`].
    #[serde(default)]
    pub gender: Option<String>,
    /// ISO 8601 date (YYYY-MM-DD)
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a vaccination drive. Only `Pending` drives can be approved
/// or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriveStatus {
    Pending,
    Approved,
    Rejected,
}

impl DriveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveStatus::Pending => "PENDING",
            DriveStatus::Approved => "APPROVED",
            DriveStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for DriveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two decisions an admin can make on a pending drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDecision {
    Approve,
    Reject,
}

impl StatusDecision {
    pub fn target_status(&self) -> DriveStatus {
        match self {
            StatusDecision::Approve => DriveStatus::Approved,
            StatusDecision::Reject => DriveStatus::Rejected,
        }
    }

    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            StatusDecision::Approve => "Approve this vaccination drive?",
            StatusDecision::Reject => "Reject this vaccination drive?",
        }
    }

    pub fn success_message(&self) -> String {
        format!("Drive {}", self.target_status().as_str().to_lowercase())
    }

    pub fn failure_message(&self) -> String {
        format!("{} failed", self.target_status())
    }

    pub fn network_failure_message(&self) -> String {
        format!(
            "Something went wrong while updating status to {}",
            self.target_status()
        )
    }

    /// Message for the status change result. The displayed status is only
    /// updated by the re-fetch that follows success.
    pub fn outcome(&self, result: &Result<(), ApiError>) -> MutationOutcome {
        match result {
            Ok(()) => MutationOutcome::succeeded(self.success_message()),
            Err(ApiError::Status { .. }) => MutationOutcome::failed(self.failure_message()),
            Err(_) => MutationOutcome::failed(self.network_failure_message()),
        }
    }
}

/// What a dashboard mutation shows and whether the drives must be re-fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub message: String,
    pub success: bool,
}

impl MutationOutcome {
    fn succeeded(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    pub fn needs_refresh(&self) -> bool {
        self.success
    }
}

/// Result of recording a dose: the backend's confirmation text on success.
pub fn vaccination_outcome(result: &Result<String, ApiError>) -> MutationOutcome {
    match result {
        Ok(text) => MutationOutcome::succeeded(text.clone()),
        Err(err @ ApiError::Status { .. }) => MutationOutcome::failed(format!(
            "Vaccination failed: {}",
            err.server_message().unwrap_or_default()
        )),
        Err(_) => MutationOutcome::failed("Vaccination failed due to network or server error."),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Pending,
    Vaccinated,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "PENDING",
            RecordStatus::Vaccinated => "VACCINATED",
        }
    }
}

/// A record embedded in a drive's `records` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationRecord {
    pub id: i64,
    #[serde(default)]
    pub student: Option<Student>,
    pub status: RecordStatus,
    #[serde(default)]
    pub vaccination_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationDrive {
    pub id: i64,
    pub vaccine_name: String,
    pub drive_date: String,
    pub available_doses: u32,
    #[serde(default)]
    pub applicable_classes: Vec<String>,
    pub status: DriveStatus,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub records: Vec<VaccinationRecord>,
}

impl VaccinationDrive {
    /// Rejected drives and drives the backend marks read-only cannot be edited.
    pub fn can_edit(&self) -> bool {
        self.status != DriveStatus::Rejected && self.editable
    }

    pub fn awaiting_decision(&self) -> bool {
        self.status == DriveStatus::Pending
    }

    pub fn classes_label(&self) -> String {
        self.applicable_classes.join(", ")
    }

    pub fn to_payload(&self) -> DrivePayload {
        DrivePayload {
            vaccine_name: self.vaccine_name.clone(),
            drive_date: self.drive_date.clone(),
            available_doses: self.available_doses,
            applicable_classes: self.applicable_classes.clone(),
        }
    }
}

/// A record flattened out of its drive, carrying the drive fields the
/// records table and the vaccinate action need.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    pub record: VaccinationRecord,
    pub drive_id: i64,
    pub drive_date: String,
    pub vaccine_name: String,
}

impl FlatRecord {
    pub fn student_name(&self) -> &str {
        self.record
            .student
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("N/A")
    }

    pub fn student_class(&self) -> &str {
        self.record
            .student
            .as_ref()
            .map(|s| s.student_class.as_str())
            .unwrap_or("N/A")
    }

    pub fn vaccination_date(&self) -> &str {
        self.record.vaccination_date.as_deref().unwrap_or("N/A")
    }

    /// Only pending records with a known student can be vaccinated.
    pub fn vaccinate_target(&self) -> Option<&str> {
        match (&self.record.status, &self.record.student) {
            (RecordStatus::Pending, Some(student)) => Some(student.student_id.as_str()),
            _ => None,
        }
    }
}

pub fn flatten_records(drives: &[VaccinationDrive]) -> Vec<FlatRecord> {
    drives
        .iter()
        .flat_map(|drive| {
            drive.records.iter().map(move |record| FlatRecord {
                record: record.clone(),
                drive_id: drive.id,
                drive_date: drive.drive_date.clone(),
                vaccine_name: drive.vaccine_name.clone(),
            })
        })
        .collect()
}

/// Pending drives first. Order among drives with the same status is not
/// meaningful.
pub fn sort_drives_pending_first(drives: &[VaccinationDrive]) -> Vec<VaccinationDrive> {
    let mut sorted = drives.to_vec();
    sorted.sort_by_key(|d| d.status != DriveStatus::Pending);
    sorted
}

pub fn sort_records_pending_first(records: Vec<FlatRecord>) -> Vec<FlatRecord> {
    let mut sorted = records;
    sorted.sort_by_key(|r| r.record.status != RecordStatus::Pending);
    sorted
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: u64,
    pub vaccinated_students: u64,
    pub upcoming_drives: u64,
}

impl DashboardStats {
    /// Rounded percentage of vaccinated students, `None` when there are no students.
    pub fn vaccinated_percent(&self) -> Option<u64> {
        if self.total_students == 0 {
            return None;
        }
        let pct = self.vaccinated_students as f64 / self.total_students as f64 * 100.0;
        Some(pct.round() as u64)
    }

    pub fn progress_label(&self) -> String {
        match self.vaccinated_percent() {
            Some(pct) => format!(
                "{}% vaccinated ({} of {})",
                pct, self.vaccinated_students, self.total_students
            ),
            None => String::new(),
        }
    }
}

/// Body of `POST /api/vaccination/drive` and `PUT /api/vaccination/drive/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrivePayload {
    pub vaccine_name: String,
    pub drive_date: String,
    pub available_doses: u32,
    pub applicable_classes: Vec<String>,
}

/// Body of `POST /api/students` and `PUT /api/students/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub student_id: String,
    pub name: String,
    pub student_class: String,
    pub gender: Gender,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinateRequest {
    pub vaccine_name: String,
    /// RFC 3339 timestamp of the moment the dose was given
    pub vaccination_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(id: i64, status: DriveStatus, records: Vec<VaccinationRecord>) -> VaccinationDrive {
        VaccinationDrive {
            id,
            vaccine_name: format!("Vaccine {}", id),
            drive_date: "2026-11-01".to_string(),
            available_doses: 10,
            applicable_classes: vec!["5A".to_string(), "6B".to_string()],
            status,
            editable: true,
            records,
        }
    }

    fn record(id: i64, student_id: &str, status: RecordStatus) -> VaccinationRecord {
        VaccinationRecord {
            id,
            student: Some(Student {
                student_id: student_id.to_string(),
                name: format!("Student {}", student_id),
                student_class: "5A".to_string(),
                gender: Some("Female".to_string()),
                date_of_birth: Some("2015-03-02".to_string()),
            }),
            status,
            vaccination_date: None,
        }
    }

    #[test]
    fn test_drive_deserializes_from_backend_json() {
        let json = r#"{
            "id": 4,
            "vaccineName": "MMR",
            "driveDate": "2026-11-20",
            "availableDoses": 30,
            "applicableClasses": ["5A"],
            "status": "PENDING",
            "editable": true,
            "records": [
                {"id": 9, "student": {"studentId": "S001", "name": "Asha", "studentClass": "5A"}, "status": "VACCINATED", "vaccinationDate": "2026-11-20"}
            ]
        }"#;
        let drive: VaccinationDrive = serde_json::from_str(json).unwrap();
        assert_eq!(drive.status, DriveStatus::Pending);
        assert_eq!(drive.records.len(), 1);
        assert_eq!(drive.records[0].status, RecordStatus::Vaccinated);
        assert_eq!(drive.classes_label(), "5A");
    }

    #[test]
    fn test_drive_without_records_defaults_to_empty() {
        let json = r#"{"id":1,"vaccineName":"Polio","driveDate":"2026-12-01","availableDoses":5,"status":"APPROVED"}"#;
        let drive: VaccinationDrive = serde_json::from_str(json).unwrap();
        assert!(drive.records.is_empty());
        assert!(!drive.editable);
        assert!(!drive.can_edit());
    }

    #[test]
    fn test_unknown_gender_keeps_the_whole_student_list() {
        let json = r#"[
            {"studentId": "S001", "name": "Asha", "studentClass": "5A", "gender": "Female"},
            {"studentId": "S002", "name": "Ravi", "studentClass": "5B", "gender": "M"}
        ]"#;
        let students: Vec<Student> = serde_json::from_str(json).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].gender.as_deref(), Some("M"));
    }

    #[test]
    fn test_unknown_gender_in_embedded_student_keeps_drives() {
        let json = r#"[{
            "id": 2, "vaccineName": "MMR", "driveDate": "2026-11-20", "availableDoses": 3,
            "status": "PENDING",
            "records": [
                {"id": 1, "student": {"studentId": "S004", "name": "Mei", "studentClass": "6A", "gender": "MALE"}, "status": "PENDING"}
            ]
        }]"#;
        let drives: Vec<VaccinationDrive> = serde_json::from_str(json).unwrap();
        assert_eq!(flatten_records(&drives).len(), 1);
    }

    #[test]
    fn test_rejected_drive_is_never_editable() {
        let mut d = drive(1, DriveStatus::Rejected, vec![]);
        d.editable = true;
        assert!(!d.can_edit());
        assert!(!d.awaiting_decision());
    }

    #[test]
    fn test_drive_payload_for_editing() {
        let payload = drive(3, DriveStatus::Approved, vec![]).to_payload();
        assert_eq!(payload.vaccine_name, "Vaccine 3");
        assert_eq!(payload.applicable_classes, vec!["5A", "6B"]);
        assert_eq!(payload.available_doses, 10);
    }

    #[test]
    fn test_flatten_records_carries_drive_fields() {
        let drives = vec![
            drive(1, DriveStatus::Approved, vec![record(10, "S001", RecordStatus::Pending)]),
            drive(
                2,
                DriveStatus::Pending,
                vec![
                    record(11, "S002", RecordStatus::Vaccinated),
                    record(12, "S003", RecordStatus::Pending),
                ],
            ),
        ];
        let flat = flatten_records(&drives);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].drive_id, 1);
        assert_eq!(flat[0].vaccine_name, "Vaccine 1");
        assert_eq!(flat[2].drive_id, 2);
        assert_eq!(flat[2].vaccinate_target(), Some("S003"));
        assert_eq!(flat[1].vaccinate_target(), None);
    }

    #[test]
    fn test_pending_drives_sort_first() {
        let drives = vec![
            drive(1, DriveStatus::Approved, vec![]),
            drive(2, DriveStatus::Pending, vec![]),
            drive(3, DriveStatus::Rejected, vec![]),
            drive(4, DriveStatus::Pending, vec![]),
        ];
        let sorted = sort_drives_pending_first(&drives);
        assert!(sorted[..2].iter().all(|d| d.status == DriveStatus::Pending));
        assert!(sorted[2..].iter().all(|d| d.status != DriveStatus::Pending));
    }

    #[test]
    fn test_pending_records_sort_first() {
        let drives = vec![drive(
            1,
            DriveStatus::Approved,
            vec![
                record(1, "S001", RecordStatus::Vaccinated),
                record(2, "S002", RecordStatus::Pending),
            ],
        )];
        let sorted = sort_records_pending_first(flatten_records(&drives));
        assert_eq!(sorted[0].record.status, RecordStatus::Pending);
    }

    #[test]
    fn test_flat_record_without_student_shows_placeholders() {
        let flat = FlatRecord {
            record: VaccinationRecord {
                id: 1,
                student: None,
                status: RecordStatus::Pending,
                vaccination_date: None,
            },
            drive_id: 1,
            drive_date: "2026-11-01".to_string(),
            vaccine_name: "MMR".to_string(),
        };
        assert_eq!(flat.student_name(), "N/A");
        assert_eq!(flat.student_class(), "N/A");
        assert_eq!(flat.vaccination_date(), "N/A");
        assert_eq!(flat.vaccinate_target(), None);
    }

    #[test]
    fn test_stats_percentage() {
        let stats = DashboardStats {
            total_students: 3,
            vaccinated_students: 2,
            upcoming_drives: 1,
        };
        assert_eq!(stats.vaccinated_percent(), Some(67));
        assert_eq!(stats.progress_label(), "67% vaccinated (2 of 3)");

        let empty = DashboardStats {
            total_students: 0,
            vaccinated_students: 0,
            upcoming_drives: 0,
        };
        assert_eq!(empty.vaccinated_percent(), None);
        assert_eq!(empty.progress_label(), "");
    }

    #[test]
    fn test_status_decision_messages() {
        assert_eq!(StatusDecision::Approve.success_message(), "Drive approved");
        assert_eq!(StatusDecision::Reject.failure_message(), "REJECTED failed");
        assert_eq!(
            StatusDecision::Approve.network_failure_message(),
            "Something went wrong while updating status to APPROVED"
        );
    }

    fn rejected(status: u16, body: &str) -> ApiError {
        ApiError::Status {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_status_change_outcomes() {
        let approved = StatusDecision::Approve.outcome(&Ok(()));
        assert_eq!(approved.message, "Drive approved");
        assert!(approved.needs_refresh());

        let refused = StatusDecision::Approve.outcome(&Err(rejected(409, "not pending")));
        assert_eq!(refused.message, "APPROVED failed");
        assert!(!refused.needs_refresh());

        let offline = StatusDecision::Reject.outcome(&Err(ApiError::Network("offline".into())));
        assert_eq!(offline.message, "Something went wrong while updating status to REJECTED");
        assert!(!offline.needs_refresh());
    }

    #[test]
    fn test_vaccination_outcomes() {
        let done = vaccination_outcome(&Ok("Student vaccinated".to_string()));
        assert_eq!(done.message, "Student vaccinated");
        assert!(done.needs_refresh());

        let refused = vaccination_outcome(&Err(rejected(400, "No doses left")));
        assert_eq!(refused.message, "Vaccination failed: No doses left");
        assert!(!refused.needs_refresh());

        let offline = vaccination_outcome(&Err(ApiError::Decode("eof".into())));
        assert_eq!(offline.message, "Vaccination failed due to network or server error.");
        assert!(!offline.success);
    }

    #[test]
    fn test_payloads_serialize_camel_case() {
        let payload = StudentPayload {
            student_id: "S004".to_string(),
            name: "Ravi".to_string(),
            student_class: "5A".to_string(),
            gender: Gender::Male,
            date_of_birth: "2015-01-01".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["studentId"], "S004");
        assert_eq!(value["studentClass"], "5A");
        assert_eq!(value["gender"], "Male");
        assert_eq!(value["dateOfBirth"], "2015-01-01");
    }
}
