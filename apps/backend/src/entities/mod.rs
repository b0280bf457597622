pub mod categories;
pub mod task_categories;
pub mod tasks;
pub mod users;

pub use categories::Entity as Categories;
pub use categories::Model as Category;
pub use task_categories::Entity as TaskCategories;
pub use task_categories::Model as TaskCategory;
pub use tasks::Entity as Tasks;
pub use tasks::Model as Task;
pub use users::Entity as Users;
pub use users::Model as User;
