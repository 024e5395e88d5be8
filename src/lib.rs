pub mod db;
pub mod domain;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
