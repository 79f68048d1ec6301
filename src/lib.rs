//! `pm`: project management helper
//!
//! Currently provides a single command, `pm prd`, which writes a fixed PRD
//! stub to a chosen path.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
