//! Sort field allow-list
//!
//! Callers pick the ranking criterion by name (`sortBy=revenue`). Names are
//! mapped onto a closed set of columns here, so SQL only ever receives one
//! of the static column names below and never caller text.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Revenue,
    TotalEmployees,
    ActualInvestment,
    VirtualInvestment,
    SelectedCount,
    ComparedCount,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Revenue,
        SortField::TotalEmployees,
        SortField::ActualInvestment,
        SortField::VirtualInvestment,
        SortField::SelectedCount,
        SortField::ComparedCount,
    ];

    /// Name used in query strings and JSON
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Revenue => "revenue",
            SortField::TotalEmployees => "totalEmployees",
            SortField::ActualInvestment => "actualInvestment",
            SortField::VirtualInvestment => "virtualInvestment",
            SortField::SelectedCount => "selectedCount",
            SortField::ComparedCount => "comparedCount",
        }
    }

    /// Column in the `companies` table
    pub fn column(self) -> &'static str {
        match self {
            SortField::Revenue => "revenue",
            SortField::TotalEmployees => "total_employees",
            SortField::ActualInvestment => "actual_investment",
            SortField::VirtualInvestment => "virtual_investment",
            SortField::SelectedCount => "selected_count",
            SortField::ComparedCount => "compared_count",
        }
    }

    /// Fields offered on the comparison screen
    pub fn is_comparable(self) -> bool {
        matches!(
            self,
            SortField::Revenue | SortField::TotalEmployees | SortField::ActualInvestment
        )
    }

    /// Lenient parse for query parameters: missing or unknown names yield `default`.
    pub fn parse_or(raw: Option<&str>, default: SortField) -> SortField {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => default,
            Some(name) => name.parse().unwrap_or_else(|_| {
                tracing::warn!(sort_by = %name, fallback = %default, "Unknown sort field, using default");
                default
            }),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown sort field '{}'", s)))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Lenient parse for query parameters, case-insensitive.
    pub fn parse_or(raw: Option<&str>, default: SortOrder) -> SortOrder {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => default,
            Some(name) => name.parse().unwrap_or_else(|_| {
                tracing::warn!(order = %name, fallback = %default, "Unknown sort order, using default");
                default
            }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DomainError::InvalidInput(format!(
                "unknown sort order '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Sort used by the comparison endpoint.
///
/// Only the comparable fields are honored. An unsupported `sortBy` resets
/// both field and direction to revenue ascending; a missing one keeps the
/// requested direction.
pub fn comparison_sort(sort_by: Option<&str>, order: Option<&str>) -> (SortField, SortOrder) {
    let sort_by = sort_by.map(str::trim).filter(|s| !s.is_empty());
    match sort_by.map(str::parse::<SortField>) {
        None => (SortField::Revenue, SortOrder::parse_or(order, SortOrder::Asc)),
        Some(Ok(field)) if field.is_comparable() => {
            (field, SortOrder::parse_or(order, SortOrder::Asc))
        }
        Some(_) => (SortField::Revenue, SortOrder::Asc),
    }
}
