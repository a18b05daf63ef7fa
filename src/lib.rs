//! # Kintai - trainee attendance tracking
//!
//! A command-line utility for tracking daily training attendance:
//! clock-in/clock-out punches, derived lateness and early-leave status,
//! break accounting, and bulk correction of attendance sheets.
//!
//! ## Features
//!
//! - **Punching**: clock in and out for today with pre-validation
//! - **Status Derivation**: lateness/early-leave judged against the
//!   official course schedule
//! - **Sheet Editing**: JSON edit forms reconciled back into the ledger
//! - **Display**: attendance table with break expansion and status labels
//! - **Data Export**: CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kintai::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
