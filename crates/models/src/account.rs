use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[cfg(feature = "database")]
#[allow(unused_imports)]
use sea_orm::sea_query::StringLen;

/// What a staff account may do within its office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")
)]
pub enum Role {
    #[cfg_attr(feature = "database", sea_orm(string_value = "Admin"))]
    Admin,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Staff"))]
    Staff,
}

/// The school office an account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")
)]
pub enum Office {
    /// Office of Student Affairs and Services
    #[cfg_attr(feature = "database", sea_orm(string_value = "Osas"))]
    Osas,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Guidance"))]
    Guidance,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Registrar"))]
    Registrar,
}

impl Office {
    /// Offices that review admissions
    pub fn reviews_admissions(&self) -> bool {
        matches!(self, Self::Osas | Self::Guidance)
    }

    /// Offices that manage the shared events calendar
    pub fn manages_events(&self) -> bool {
        matches!(self, Self::Osas)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_office_parse_is_case_insensitive() {
        assert_eq!(Office::from_str("osas").unwrap(), Office::Osas);
        assert_eq!(Office::from_str("GUIDANCE").unwrap(), Office::Guidance);
        assert!(Office::from_str("library").is_err());
    }

    #[test]
    fn test_office_permissions() {
        assert!(Office::Osas.reviews_admissions());
        assert!(Office::Guidance.reviews_admissions());
        assert!(!Office::Registrar.reviews_admissions());
        assert!(Office::Osas.manages_events());
        assert!(!Office::Guidance.manages_events());
    }
}
