//! Shortcut imports for the entity types used across the repositories.

pub use super::admin_user::Entity as AdminUser;
pub use super::categories::Entity as Categories;
pub use super::game_categories::Entity as GameCategories;
pub use super::games::Entity as Games;
pub use super::packs::Entity as Packs;
pub use super::questions::Entity as Questions;
