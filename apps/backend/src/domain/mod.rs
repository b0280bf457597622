//! Pure domain logic: task vocabulary, date parsing and listing filters.
//!
//! Nothing in here touches the database or HTTP.

pub mod dates;
pub mod task;
pub mod task_filter;

pub use task::{TaskPriority, TaskStatus};
pub use task_filter::{
    compile, CompositeTaskFilter, DueDateBounds, DueDateConstraint, FilterError, FilterField,
    TaskFilterCriteria,
};
