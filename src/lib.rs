//! cloudman - Manage Docker images, containers, and QEMU virtual machines
//! from one interactive console
//!
//! This library wraps the external `docker` and `qemu` command-line tools
//! behind a small set of typed operations. All process execution flows
//! through the [`runner::CommandRunner`] trait so every operation can be
//! tested without the real binaries installed.

pub mod cli;
pub mod config;
pub mod docker;
pub mod error;
pub mod runner;
pub mod vm;
