// src/lib.rs

pub mod cli;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod filter;
pub mod frontend;
pub mod logs;
pub mod models;
pub mod reference;
pub mod session;
pub mod workbook;
