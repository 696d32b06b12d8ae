use serde::{Deserialize, Serialize};

/// Headline counters shown on the landing page. Free-form strings on
/// purpose ("10+", "Active"), not numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub projects: String,
    pub internships: String,
    pub open_source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    pub github: String,
    pub linkedin: String,
}

/// One of the service cards under the intro. The client form renders three
/// slots; the schema does not enforce the count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub desc: String,
}
