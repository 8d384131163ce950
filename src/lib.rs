//! Seven-day running schedule allocation.
//!
//! [`planner::allocate`] turns a weekly total and two run caps into a
//! [`planner::WeeklyPlan`] whose sessions sum exactly to the rounded total.
//! The remaining modules are the command-line and terminal front ends.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod planner;
pub mod tui;
