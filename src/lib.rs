//! Core library for `spacerm`.
//!
//! Renames (or copies) files so their base names lose spaces and other
//! unwanted characters. Directory components of a path are never touched.
//! The pipeline per file is: permission guard, name computation, optional
//! confirmation, then rename/copy, driven by [`OperationController`].

pub mod cli;
pub mod config;
pub mod console;
pub mod controller;
pub mod errors;
pub mod fs_ops;
pub mod guard;
pub mod naming;
pub mod output;
pub mod platform;

pub use config::{
    default_config_path, load_config, load_config_from_xml_path, path_has_symlink_ancestor, Config,
    LogLevel,
};
pub use console::{Console, TerminalConsole};
pub use controller::{
    ActionTaken, BatchAborted, Operation, OperationController, OperationOutcome, RunOptions,
    SkipReason,
};
pub use errors::SpacermError;
pub use naming::{renamed_path, transform_name, SpacePolicy, TransformPolicy};
