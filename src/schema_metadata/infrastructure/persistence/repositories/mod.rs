pub mod catalog_reader_repository;
pub mod sqlite;
