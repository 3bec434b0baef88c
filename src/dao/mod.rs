// src/dao/mod.rs

pub mod question;
pub mod user;
