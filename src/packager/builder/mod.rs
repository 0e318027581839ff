//! Packaging pipeline steps.
//!
//! - [`runtime`] - Python interpreter lookup
//! - [`dependencies`] - pip / PyInstaller installation
//! - [`mode_selector`] - one-file / one-directory choice
//! - [`arguments`] - PyInstaller argument list
//! - [`invoke`] - subprocess execution
//! - [`artifact`] - artifact verification and `config.xml` placement
//! - [`checksum`] - SHA-256 and size of artifacts
//! - [`orchestrator`] - the [`Packager`] running all of the above

pub mod arguments;
pub mod artifact;
mod checksum;
pub mod dependencies;
pub mod invoke;
pub mod mode_selector;
mod orchestrator;
pub mod runtime;

pub use orchestrator::Packager;
