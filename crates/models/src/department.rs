use serde::Serialize;
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

/// A degree program offered by a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Program {
    pub name: &'static str,
    pub shortname: &'static str,
}

const CCS_PROGRAMS: &[Program] = &[Program {
    name: "Bachelor of Science in Information Technology",
    shortname: "BSIT",
}];

const CC_PROGRAMS: &[Program] = &[Program {
    name: "Bachelor of Science in Criminology",
    shortname: "BSCrim",
}];

const CBA_PROGRAMS: &[Program] = &[Program {
    name: "Bachelor of Science in Business Administration",
    shortname: "BSBA",
}];

const BED_PROGRAMS: &[Program] = &[
    Program {
        name: "Elementary Education",
        shortname: "ElemEd",
    },
    Program {
        name: "Secondary Education",
        shortname: "SecEd",
    },
];

const COE_PROGRAMS: &[Program] = &[
    Program {
        name: "Bachelor of Science in Civil Engineering",
        shortname: "BSCE",
    },
    Program {
        name: "Bachelor of Science in Electrical Engineering",
        shortname: "BSEE",
    },
];

/// The departments an applicant may choose as their course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumProperty, EnumIter)]
pub enum Department {
    #[strum(props(name = "College Of Computer Studies", shortname = "CCS"))]
    ComputerStudies,
    #[strum(props(name = "College of Criminology", shortname = "CC"))]
    Criminology,
    #[strum(props(name = "College of Business Administration", shortname = "CBA"))]
    BusinessAdministration,
    #[strum(props(name = "Basic Education Department", shortname = "BED"))]
    BasicEducation,
    #[strum(props(name = "College of Engineering", shortname = "COE"))]
    Engineering,
}

impl Department {
    pub fn all() -> Vec<Department> {
        Department::iter().collect()
    }

    /// Looks up a department by its full display name, exactly as stored on an admission
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|d| d.get_str("name") == Some(name))
    }

    pub fn name(&self) -> &'static str {
        self.get_str("name").unwrap_or_default()
    }

    pub fn shortname(&self) -> &'static str {
        self.get_str("shortname").unwrap_or_default()
    }

    pub fn programs(&self) -> &'static [Program] {
        match self {
            Self::ComputerStudies => CCS_PROGRAMS,
            Self::Criminology => CC_PROGRAMS,
            Self::BusinessAdministration => CBA_PROGRAMS,
            Self::BasicEducation => BED_PROGRAMS,
            Self::Engineering => COE_PROGRAMS,
        }
    }

    pub fn offers(&self, program: &str) -> bool {
        self.programs().iter().any(|p| p.name == program)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(
            Department::from_name("College Of Computer Studies"),
            Some(Department::ComputerStudies)
        );
        assert_eq!(Department::from_name("college of computer studies"), None);
        assert_eq!(Department::from_name(""), None);
    }

    #[test]
    fn test_programs_belong_to_department() {
        let bed = Department::BasicEducation;
        assert_eq!(bed.shortname(), "BED");
        assert!(bed.offers("Secondary Education"));
        assert!(!bed.offers("Bachelor of Science in Information Technology"));
    }

    #[test]
    fn test_catalog_is_complete() {
        let all = Department::all();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|d| !d.programs().is_empty()));
    }
}
