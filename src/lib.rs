pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod views;
