//! Feature-toggle codes and permission system keys
//!
//! Feature codes are stored verbatim in `Features.FeatureCode` and are used as
//! cross-system keys, so the string spelling is part of the schema contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCode {
    Unknown,
    UserManagement,
    DataExport,
    OvertimeData,
    LlmInsights,
    TableBuilder,
    LlmDiscovery,
    OpenEnds,
    AiSummarise,
    AiReports,
    DoughnutChart,
    FunnelChart,
}

impl FeatureCode {
    /// Every known code, excluding `Unknown`
    pub const ALL: [FeatureCode; 11] = [
        FeatureCode::UserManagement,
        FeatureCode::DataExport,
        FeatureCode::OvertimeData,
        FeatureCode::LlmInsights,
        FeatureCode::TableBuilder,
        FeatureCode::LlmDiscovery,
        FeatureCode::OpenEnds,
        FeatureCode::AiSummarise,
        FeatureCode::AiReports,
        FeatureCode::DoughnutChart,
        FeatureCode::FunnelChart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureCode::Unknown => "unknown",
            FeatureCode::UserManagement => "user_management",
            FeatureCode::DataExport => "data_export",
            FeatureCode::OvertimeData => "overtime_data",
            FeatureCode::LlmInsights => "llm_insights",
            FeatureCode::TableBuilder => "table_builder",
            FeatureCode::LlmDiscovery => "llm_discovery",
            FeatureCode::OpenEnds => "open_ends",
            FeatureCode::AiSummarise => "ai_summarise",
            FeatureCode::AiReports => "ai_reports",
            FeatureCode::DoughnutChart => "doughnut_chart",
            FeatureCode::FunnelChart => "funnel_chart",
        }
    }

    /// Lenient conversion used when reading stored codes: anything unrecognised is `Unknown`
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or(FeatureCode::Unknown)
    }
}

impl fmt::Display for FeatureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeatureCode(pub String);

impl fmt::Display for UnknownFeatureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown feature code '{}'", self.0)
    }
}

impl std::error::Error for UnknownFeatureCode {}

impl FromStr for FeatureCode {
    type Err = UnknownFeatureCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownFeatureCode(s.to_string()))
    }
}

/// Product system a permission rule or feature belongs to (`SystemKey` columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum SystemKey {
    AllVue = 0,
}

impl SystemKey {
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(SystemKey::AllVue),
            _ => None,
        }
    }
}
