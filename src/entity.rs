//! Data entity module.
//!
//! Contains all SeaORM entity definitions, one module per table.

pub mod prelude;

pub mod admin_user;
pub mod categories;
pub mod game_categories;
pub mod games;
pub mod packs;
pub mod questions;
