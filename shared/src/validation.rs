use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{DrivePayload, Gender, Student, StudentPayload};

/// A class code is a grade number followed by a single section letter, e.g. `5A`.
static CLASS_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+[A-Za-z]$").expect("class code pattern is a valid regex")
});

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client-side validation failures. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter only a single class (e.g., 5A)")]
    MultipleClasses,
    #[error("Class must be in format like 5A or 8B (no special characters or spaces)")]
    InvalidClassFormat,
    #[error("Invalid class code in applicable classes: {0}")]
    InvalidApplicableClass(String),
    #[error("At least one applicable class is required")]
    NoApplicableClasses,
    #[error("{0} must be a valid date (YYYY-MM-DD)")]
    InvalidDate(&'static str),
    #[error("Drive date cannot be in the past")]
    DateInPast,
    #[error("Available doses must be a positive whole number")]
    InvalidDoses,
    #[error("Please select a gender")]
    MissingGender,
    #[error("Please select a CSV file first.")]
    MissingFile,
    #[error("Only .csv files can be uploaded")]
    NotCsv,
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Pick a report type first")]
    NoReportType,
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Pick an export format first")]
    NoExportFormat,
}

pub fn is_class_code(value: &str) -> bool {
    CLASS_CODE.is_match(value)
}

/// Validate a single student class entry and return it upper-cased.
pub fn validate_student_class(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("Class"));
    }
    if trimmed.contains(',') || trimmed.split_whitespace().count() > 1 {
        return Err(ValidationError::MultipleClasses);
    }
    if !is_class_code(trimmed) {
        return Err(ValidationError::InvalidClassFormat);
    }
    Ok(trimmed.to_uppercase())
}

/// Split a comma-separated class list, trimming and upper-casing each entry.
/// Empty entries are dropped.
pub fn parse_class_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|cls| cls.trim().to_uppercase())
        .filter(|cls| !cls.is_empty())
        .collect()
}

pub fn validate_class_list(input: &str) -> Result<Vec<String>, ValidationError> {
    let classes = parse_class_list(input);
    if classes.is_empty() {
        return Err(ValidationError::NoApplicableClasses);
    }
    if let Some(bad) = classes.iter().find(|cls| !is_class_code(cls)) {
        return Err(ValidationError::InvalidApplicableClass(bad.clone()));
    }
    Ok(classes)
}

pub fn parse_date(input: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(field))
}

pub fn parse_positive_doses(input: &str) -> Result<u32, ValidationError> {
    match input.trim().parse::<u32>() {
        Ok(doses) if doses > 0 => Ok(doses),
        _ => Err(ValidationError::InvalidDoses),
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Raw text of the drive form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriveForm {
    pub vaccine_name: String,
    pub drive_date: String,
    pub available_doses: String,
    pub applicable_classes: String,
}

impl DriveForm {
    /// Build the form from a drive loaded for editing.
    pub fn from_payload(payload: &DrivePayload) -> Self {
        Self {
            vaccine_name: payload.vaccine_name.clone(),
            drive_date: payload.drive_date.clone(),
            available_doses: payload.available_doses.to_string(),
            applicable_classes: payload.applicable_classes.join(", "),
        }
    }

    /// Validation for a new drive: the date may not be earlier than `today`.
    pub fn validate_new(&self, today: NaiveDate) -> Result<DrivePayload, ValidationError> {
        let payload = self.validate_fields()?;
        let date = parse_date(&payload.drive_date, "Drive date")?;
        if date < today {
            return Err(ValidationError::DateInPast);
        }
        Ok(payload)
    }

    /// Validation for an existing drive, which may already lie in the past.
    pub fn validate_update(&self) -> Result<DrivePayload, ValidationError> {
        self.validate_fields()
    }

    fn validate_fields(&self) -> Result<DrivePayload, ValidationError> {
        let vaccine_name = required(&self.vaccine_name, "Vaccine name")?;
        let date = parse_date(&self.drive_date, "Drive date")?;
        let available_doses = parse_positive_doses(&self.available_doses)?;
        let applicable_classes = validate_class_list(&self.applicable_classes)?;
        Ok(DrivePayload {
            vaccine_name,
            drive_date: date.format(DATE_FORMAT).to_string(),
            available_doses,
            applicable_classes,
        })
    }
}

/// Raw text of the add/update student form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub student_id: String,
    pub name: String,
    pub student_class: String,
    pub gender: String,
    pub date_of_birth: String,
}

impl StudentForm {
    /// Prefill from a student loaded for editing. Missing fields stay blank.
    pub fn from_student(student: &Student) -> Self {
        Self {
            student_id: student.student_id.clone(),
            name: student.name.clone(),
            student_class: student.student_class.clone(),
            gender: student
                .gender
                .as_deref()
                .and_then(Gender::parse)
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
            date_of_birth: student.date_of_birth.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<StudentPayload, ValidationError> {
        let student_id = required(&self.student_id, "Student ID")?;
        let name = required(&self.name, "Name")?;
        let student_class = validate_student_class(&self.student_class)?;
        let gender = Gender::parse(self.gender.trim()).ok_or(ValidationError::MissingGender)?;
        let dob = parse_date(&self.date_of_birth, "Date of birth")?;
        Ok(StudentPayload {
            student_id,
            name,
            student_class,
            gender,
            date_of_birth: dob.format(DATE_FORMAT).to_string(),
        })
    }
}

pub fn validate_upload_file_name(file_name: Option<&str>) -> Result<(), ValidationError> {
    let name = file_name.ok_or(ValidationError::MissingFile)?;
    if name.to_lowercase().ends_with(".csv") {
        Ok(())
    } else {
        Err(ValidationError::NotCsv)
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn drive_form(date: &str) -> DriveForm {
        DriveForm {
            vaccine_name: "  MMR ".to_string(),
            drive_date: date.to_string(),
            available_doses: "25".to_string(),
            applicable_classes: "5a, 6B ,".to_string(),
        }
    }

    #[test]
    fn test_class_code_pattern() {
        for ok in ["5A", "10b", "1Z", "012c"] {
            assert!(is_class_code(ok), "{} should be accepted", ok);
        }
        for bad in ["", "A5", "5", "5AB", "5-A", "5 A", " 5A", "5A ", "5Ä", "٣A"] {
            assert!(!is_class_code(bad), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_student_class_rejects_multiple_entries() {
        assert_eq!(validate_student_class("5A, 6B"), Err(ValidationError::MultipleClasses));
        assert_eq!(validate_student_class("5A 6B"), Err(ValidationError::MultipleClasses));
        assert_eq!(validate_student_class("5A,"), Err(ValidationError::MultipleClasses));
    }

    #[test]
    fn test_student_class_format() {
        assert_eq!(validate_student_class(" 5a "), Ok("5A".to_string()));
        assert_eq!(validate_student_class("5#"), Err(ValidationError::InvalidClassFormat));
        assert_eq!(validate_student_class("   "), Err(ValidationError::Required("Class")));
        assert_eq!(
            ValidationError::InvalidClassFormat.to_string(),
            "Class must be in format like 5A or 8B (no special characters or spaces)"
        );
    }

    #[test]
    fn test_parse_class_list() {
        assert_eq!(parse_class_list("5a, 6B ,"), vec!["5A", "6B"]);
        assert!(parse_class_list(" , ").is_empty());
    }

    #[test]
    fn test_validate_class_list_rejects_bad_entry() {
        assert_eq!(
            validate_class_list("5A, grade six"),
            Err(ValidationError::InvalidApplicableClass("GRADE SIX".to_string()))
        );
        assert_eq!(validate_class_list(""), Err(ValidationError::NoApplicableClasses));
    }

    #[test]
    fn test_new_drive_accepts_today_and_later() {
        let payload = drive_form("2026-10-19").validate_new(today()).unwrap();
        assert_eq!(payload.vaccine_name, "MMR");
        assert_eq!(payload.available_doses, 25);
        assert_eq!(payload.applicable_classes, vec!["5A", "6B"]);
        assert!(drive_form("2027-01-01").validate_new(today()).is_ok());
    }

    #[test]
    fn test_new_drive_rejects_past_date() {
        assert_eq!(
            drive_form("2026-10-18").validate_new(today()),
            Err(ValidationError::DateInPast)
        );
    }

    #[test]
    fn test_update_drive_allows_past_date() {
        assert!(drive_form("2020-01-01").validate_update().is_ok());
    }

    #[test]
    fn test_drive_doses_must_be_positive_integer() {
        for bad in ["0", "-3", "2.5", "", "ten"] {
            let mut form = drive_form("2026-12-01");
            form.available_doses = bad.to_string();
            assert_eq!(form.validate_new(today()), Err(ValidationError::InvalidDoses), "{:?}", bad);
        }
    }

    #[test]
    fn test_drive_form_round_trips_loaded_payload() {
        let payload = drive_form("2026-12-01").validate_update().unwrap();
        let form = DriveForm::from_payload(&payload);
        assert_eq!(form.applicable_classes, "5A, 6B");
        assert_eq!(form.validate_update().unwrap(), payload);
    }

    #[test]
    fn test_drive_rejects_malformed_date() {
        assert_eq!(
            drive_form("19/10/2026").validate_new(today()),
            Err(ValidationError::InvalidDate("Drive date"))
        );
    }

    #[test]
    fn test_student_form_validation() {
        let form = StudentForm {
            student_id: "S004".to_string(),
            name: "Meera".to_string(),
            student_class: "7c".to_string(),
            gender: "Female".to_string(),
            date_of_birth: "2014-06-30".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.student_class, "7C");
        assert_eq!(payload.gender, Gender::Female);

        let mut missing_gender = form.clone();
        missing_gender.gender = String::new();
        assert_eq!(missing_gender.validate(), Err(ValidationError::MissingGender));

        let mut missing_name = form;
        missing_name.name = "  ".to_string();
        assert_eq!(missing_name.validate(), Err(ValidationError::Required("Name")));
    }

    #[test]
    fn test_upload_file_name() {
        assert_eq!(validate_upload_file_name(None), Err(ValidationError::MissingFile));
        assert_eq!(validate_upload_file_name(Some("students.xlsx")), Err(ValidationError::NotCsv));
        assert!(validate_upload_file_name(Some("Students.CSV")).is_ok());
    }

    #[test]
    fn test_credentials() {
        assert!(validate_credentials("admin", "secret").is_ok());
        assert_eq!(validate_credentials(" ", "secret"), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_credentials("admin", ""), Err(ValidationError::MissingCredentials));
    }

    #[test]
    fn test_student_form_prefill() {
        let student = Student {
            student_id: "S010".to_string(),
            name: "Ravi".to_string(),
            student_class: "4B".to_string(),
            gender: Some("Male".to_string()),
            date_of_birth: None,
        };
        let form = StudentForm::from_student(&student);
        assert_eq!(form.gender, "Male");
        assert_eq!(form.date_of_birth, "");
        assert_eq!(form.validate(), Err(ValidationError::Required("Date of birth")));

        let legacy = Student {
            gender: Some("M".to_string()),
            ..student
        };
        assert_eq!(StudentForm::from_student(&legacy).gender, "");
    }
}
