pub mod categories_repository;
pub mod games_repository;
pub mod packs_repository;
pub mod questions_repository;
pub mod settings_repository;
