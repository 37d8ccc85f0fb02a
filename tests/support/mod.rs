#![allow(dead_code)]

pub mod config;
pub mod http;
pub mod logs;
pub mod records;
pub mod vault;
