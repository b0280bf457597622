//! Compilation of task-listing query inputs into one composite filter.
//!
//! Inputs are validated in a fixed order (status, priority, dueDate,
//! fromDate, toDate, beforeDate, afterDate) and the first failure aborts
//! compilation. All date inputs target the same `due_date` column, so they
//! are merged into a single [`DueDateConstraint`] instead of overwriting
//! each other:
//!
//! - `dueDate` alone gives `Exact`.
//! - `fromDate`/`toDate` give an inclusive range and replace `Exact`.
//! - `beforeDate`/`afterDate` add exclusive bounds to whatever is there. An
//!   `Exact(v)` is first promoted to `gte: v, lte: v` so it keeps applying.
//!
//! Empty intervals are not rejected; they compile and match no rows.

use serde::Deserialize;
use thiserror::Error;
use time::OffsetDateTime;

use super::dates::parse_instant;
use super::task::{TaskPriority, TaskStatus};

/// Raw listing inputs as they arrive on the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilterCriteria {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub before_date: Option<String>,
    pub after_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    Priority,
    DueDate,
    FromDate,
    ToDate,
    BeforeDate,
    AfterDate,
}

impl FilterField {
    /// Name of the query parameter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Priority => "priority",
            Self::DueDate => "dueDate",
            Self::FromDate => "fromDate",
            Self::ToDate => "toDate",
            Self::BeforeDate => "beforeDate",
            Self::AfterDate => "afterDate",
        }
    }

    fn invalid_message(&self) -> String {
        match self {
            Self::Status => {
                "Invalid status value. Allowed values: PENDING, IN_PROGRESS, COMPLETED".to_string()
            }
            Self::Priority => {
                "Invalid priority value. Allowed values: LOW, MEDIUM, HIGH".to_string()
            }
            date => format!(
                "Invalid {} value. Please provide a valid date.",
                date.as_str()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{}", .field.invalid_message())]
    InvalidValue { field: FilterField },
}

impl FilterError {
    fn invalid(field: FilterField) -> Self {
        Self::InvalidValue { field }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueDateBounds {
    pub gte: Option<OffsetDateTime>,
    pub lte: Option<OffsetDateTime>,
    pub lt: Option<OffsetDateTime>,
    pub gt: Option<OffsetDateTime>,
}

impl DueDateBounds {
    fn point(v: OffsetDateTime) -> Self {
        Self {
            gte: Some(v),
            lte: Some(v),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateConstraint {
    Exact(OffsetDateTime),
    Bounds(DueDateBounds),
}

/// Compiled listing filter. Always scoped to a single owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeTaskFilter {
    pub owner_id: i64,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DueDateConstraint>,
}

impl CompositeTaskFilter {
    /// Filter matching every task of `owner_id`.
    pub fn for_owner(owner_id: i64) -> Self {
        Self {
            owner_id,
            status: None,
            priority: None,
            due_date: None,
        }
    }
}

/// Accumulates the due-date dimension. Rules must be applied in input order.
#[derive(Debug, Default)]
struct DueDateBuilder {
    exact: Option<OffsetDateTime>,
    bounds: Option<DueDateBounds>,
}

impl DueDateBuilder {
    fn exact(&mut self, v: OffsetDateTime) {
        self.exact = Some(v);
    }

    fn range(&mut self, from: Option<OffsetDateTime>, to: Option<OffsetDateTime>) {
        if from.is_none() && to.is_none() {
            return;
        }
        self.exact = None;
        self.bounds = Some(DueDateBounds {
            gte: from,
            lte: to,
            ..DueDateBounds::default()
        });
    }

    fn before(&mut self, v: OffsetDateTime) {
        self.bounds_mut().lt = Some(v);
    }

    fn after(&mut self, v: OffsetDateTime) {
        self.bounds_mut().gt = Some(v);
    }

    fn bounds_mut(&mut self) -> &mut DueDateBounds {
        let promoted = self.exact.take().map(DueDateBounds::point);
        self.bounds
            .get_or_insert_with(|| promoted.unwrap_or_default())
    }

    fn build(self) -> Option<DueDateConstraint> {
        match (self.bounds, self.exact) {
            (Some(bounds), _) => Some(DueDateConstraint::Bounds(bounds)),
            (None, Some(v)) => Some(DueDateConstraint::Exact(v)),
            (None, None) => None,
        }
    }
}

/// Empty strings count as absent.
fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.is_empty())
}

fn date_input(
    raw: &Option<String>,
    field: FilterField,
) -> Result<Option<OffsetDateTime>, FilterError> {
    present(raw)
        .map(|s| parse_instant(s).ok_or(FilterError::invalid(field)))
        .transpose()
}

/// Validate `criteria` and build the filter for `owner_id`.
pub fn compile(
    criteria: &TaskFilterCriteria,
    owner_id: i64,
) -> Result<CompositeTaskFilter, FilterError> {
    let status = present(&criteria.status)
        .map(|s| TaskStatus::parse(s).ok_or(FilterError::invalid(FilterField::Status)))
        .transpose()?;
    let priority = present(&criteria.priority)
        .map(|s| TaskPriority::parse(s).ok_or(FilterError::invalid(FilterField::Priority)))
        .transpose()?;

    let due = date_input(&criteria.due_date, FilterField::DueDate)?;
    let from = date_input(&criteria.from_date, FilterField::FromDate)?;
    let to = date_input(&criteria.to_date, FilterField::ToDate)?;
    let before = date_input(&criteria.before_date, FilterField::BeforeDate)?;
    let after = date_input(&criteria.after_date, FilterField::AfterDate)?;

    let mut due_date = DueDateBuilder::default();
    if let Some(v) = due {
        due_date.exact(v);
    }
    due_date.range(from, to);
    if let Some(v) = before {
        due_date.before(v);
    }
    if let Some(v) = after {
        due_date.after(v);
    }

    Ok(CompositeTaskFilter {
        owner_id,
        status,
        priority,
        due_date: due_date.build(),
    })
}
