//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:24:16 Saturday
//! brief:

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Loading,
    Failed,
    Playing,
    Won,
}
