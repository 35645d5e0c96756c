pub mod chat;
pub mod interview;
pub mod quiz;
pub mod user;
