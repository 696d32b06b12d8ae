use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed category set for achievements. Unlike the free-text `type` on
/// projects and experience entries, anything outside this list is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementCategory {
    Certification,
    Internship,
    Award,
    Hackathon,
    #[serde(rename = "Open Source")]
    OpenSource,
}

impl AchievementCategory {
    pub const ALL: &'static [AchievementCategory] = &[
        AchievementCategory::Certification,
        AchievementCategory::Internship,
        AchievementCategory::Award,
        AchievementCategory::Hackathon,
        AchievementCategory::OpenSource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Certification => "Certification",
            AchievementCategory::Internship => "Internship",
            AchievementCategory::Award => "Award",
            AchievementCategory::Hackathon => "Hackathon",
            AchievementCategory::OpenSource => "Open Source",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

impl Default for AchievementCategory {
    fn default() -> Self {
        AchievementCategory::Certification
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
