//! Attendance-driven Payroll Engine
//!
//! This crate computes monthly salary breakdowns from a wage and a fixed
//! salary structure, pro-rates them by attendance and approved paid leave,
//! and runs month-level payruns over every active employee.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
