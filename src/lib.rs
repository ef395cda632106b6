//! Payslip generator for Australian resident tax rates.
//!
//! This crate computes one employee's monthly payslip (gross income,
//! income tax, net income and superannuation) from their annual salary
//! and super rate, using the 2017-18 resident tax table.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod report;
pub mod validation;
