pub mod auth;
pub mod cart;
pub mod design;
pub mod error;
pub mod health;
pub mod order;
pub mod product;
pub mod security;
pub mod stats;
pub mod tags;
pub mod upload;
pub mod user;
