//! DTOs for task_categories_sea adapter.

#[derive(Debug, Clone, Copy)]
pub struct LinkCreate {
    pub task_id: i64,
    pub category_id: i64,
}
