//! Payroll and access-control policies for HR administration.
//!
//! This crate provides the payroll calculator (gross pay, statutory
//! deductions, and net pay for weekly and biweekly cycles), the role-based
//! page authorizer, workforce reports, and a JSON HTTP facade over them.

#![warn(missing_docs)]

pub mod api;
pub mod authorization;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
