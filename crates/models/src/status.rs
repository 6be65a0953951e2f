use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[cfg(feature = "database")]
#[allow(unused_imports)]
use sea_orm::sea_query::StringLen;

/// Review state of an admission.
///
/// Every state is reachable from every other; a reviewer may move an
/// approved admission back to pending.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")
)]
pub enum AdmissionStatus {
    #[default]
    #[cfg_attr(feature = "database", sea_orm(string_value = "Pending"))]
    Pending,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Approved"))]
    Approved,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Denied"))]
    Denied,
}
