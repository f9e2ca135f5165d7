pub mod args;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod render;
