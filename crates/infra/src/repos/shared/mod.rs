pub mod inmemory_db;
pub mod inmemory_repo;
