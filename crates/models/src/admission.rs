use crate::{
    department::Department,
    validation::{ValidationErrors, char_len},
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
            .unwrap();
}

/// Items the intake form lists for every new applicant
pub const DEFAULT_REQUIREMENTS: [&str; 5] = [
    "Grade 12 Report Card / Form 138",
    "Original Diploma / Graduation proof",
    "Good Moral Certificate",
    "2x2 ID Picture (2 pcs)",
    "PSA Birth Certificate (photocopy)",
];

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_LEN: usize = 10;

/// One checklist entry on an admission form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementForm {
    pub name: String,
    pub is_submitted: bool,
}

impl RequirementForm {
    pub fn new(name: impl Into<String>, is_submitted: bool) -> Self {
        Self {
            name: name.into(),
            is_submitted,
        }
    }
}

/// The checklist a blank intake form starts with, nothing submitted yet
pub fn default_requirements() -> Vec<RequirementForm> {
    DEFAULT_REQUIREMENTS
        .iter()
        .map(|name| RequirementForm::new(*name, false))
        .collect()
}

/// Applicant-supplied admission data, as posted by the intake form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub admission_no: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub course: String,
    pub program: String,
    pub requirements: Vec<RequirementForm>,
}

impl AdmissionForm {
    /// Checks every field and reports all failures at once
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.admission_no.is_empty() {
            errors.push("admissionNo", "Admission Number required");
        }
        if char_len(&self.first_name) < MIN_NAME_LEN {
            errors.push("firstName", "First name is required");
        }
        if char_len(&self.last_name) < MIN_NAME_LEN {
            errors.push("lastName", "Last name is required");
        }
        if !is_valid_email(&self.email) {
            errors.push("email", "Invalid email address");
        }
        if char_len(&self.phone_number) < MIN_PHONE_LEN {
            errors.push("phoneNumber", "Phone number must be at least 10 digits");
        }

        // Program choices depend on the selected course
        let department = if self.course.is_empty() {
            errors.push("course", "Course is required");
            None
        } else {
            let department = Department::from_name(&self.course);
            if department.is_none() {
                errors.push("course", "Unknown course");
            }
            department
        };

        if self.program.is_empty() {
            errors.push("program", "Program is required");
        } else if let Some(department) = department
            && !department.offers(&self.program)
        {
            errors.push("program", "Program does not belong to the selected course");
        }

        if self.requirements.iter().any(|r| r.name.trim().is_empty()) {
            errors.push("requirements", "Requirement name is required");
        }
        if !self.requirements.iter().any(|r| r.is_submitted) {
            errors.push("requirements", "You must submit at least one requirement");
        }

        errors.into_result()
    }

    /// Middle name as it should be stored; blank means absent
    pub fn normalized_middle_name(&self) -> Option<String> {
        self.middle_name
            .as_deref()
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }

    pub fn full_name(&self) -> String {
        match self.normalized_middle_name() {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[cfg(test)]
mod test {
    use super::*;

    fn valid_form() -> AdmissionForm {
        AdmissionForm {
            id: None,
            admission_no: "2024-001".to_string(),
            first_name: "Ana".to_string(),
            middle_name: None,
            last_name: "Cruz".to_string(),
            email: "ana@x.com".to_string(),
            phone_number: "09171234567".to_string(),
            course: "College Of Computer Studies".to_string(),
            program: "Bachelor of Science in Information Technology".to_string(),
            requirements: vec![RequirementForm::new("Birth Certificate", true)],
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_requires_a_submitted_requirement() {
        let mut form = valid_form();
        form.requirements = default_requirements();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("requirements"),
            Some("You must submit at least one requirement")
        );
        assert_eq!(errors.fields().len(), 1);
    }

    #[test]
    fn test_empty_requirements_rejected() {
        let mut form = valid_form();
        form.requirements.clear();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("requirements"),
            Some("You must submit at least one requirement")
        );
    }

    #[test]
    fn test_collects_every_field_error() {
        let form = AdmissionForm {
            id: None,
            admission_no: String::new(),
            first_name: "A".to_string(),
            middle_name: Some(String::new()),
            last_name: "B".to_string(),
            email: "not-an-email".to_string(),
            phone_number: "12345".to_string(),
            course: String::new(),
            program: String::new(),
            requirements: vec![],
        };

        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "admissionNo",
                "firstName",
                "lastName",
                "email",
                "phoneNumber",
                "course",
                "program",
                "requirements",
            ]
        );
    }

    #[test]
    fn test_program_must_match_course() {
        let mut form = valid_form();
        form.program = "Bachelor of Science in Criminology".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("program"),
            Some("Program does not belong to the selected course")
        );
    }

    #[test]
    fn test_unknown_course() {
        let mut form = valid_form();
        form.course = "College of Magic".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("course"), Some("Unknown course"));
        // No program error when the course itself is unknown
        assert_eq!(errors.message_for("program"), None);
    }

    #[test]
    fn test_phone_has_no_format_check() {
        let mut form = valid_form();
        form.phone_number = "abcdefghij".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("first.last+tag@school.edu.ph"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana@x"));
        assert!(!is_valid_email("ana x@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_middle_name_normalization() {
        let mut form = valid_form();
        form.middle_name = Some(String::new());
        assert_eq!(form.normalized_middle_name(), None);
        assert_eq!(form.full_name(), "Ana Cruz");

        form.middle_name = Some("Reyes".to_string());
        assert_eq!(form.full_name(), "Ana Reyes Cruz");
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{
            "admissionNo": "2024-001",
            "firstName": "Ana",
            "lastName": "Cruz",
            "email": "ana@x.com",
            "phoneNumber": "09171234567",
            "course": "College Of Computer Studies",
            "program": "Bachelor of Science in Information Technology",
            "requirements": [{ "name": "Birth Certificate", "isSubmitted": true }]
        }"#;

        let form: AdmissionForm = serde_json::from_str(json).unwrap();
        assert_eq!(form, valid_form());
    }
}
