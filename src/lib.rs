//! file: lib.rs
//! author: Jacob Xie
//! date: 2025/12/20 09:58:40 Saturday
//! brief: country/capital matching game

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod source;
pub mod view;
