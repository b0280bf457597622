//! DTOs for categories_sea adapter.

#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub user_id: i64,
    pub name: String,
}
