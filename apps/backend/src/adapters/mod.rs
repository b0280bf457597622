//! SeaORM adapters. Functions here speak entities and return `DbErr`; the
//! repos layer maps results into domain types.

pub mod categories_sea;
pub mod task_categories_sea;
pub mod tasks_sea;
pub mod users_sea;
