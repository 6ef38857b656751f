// SPDX-License-Identifier: MPL-2.0
//! Application layer - Collaborator interfaces.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Platform adapters implement application layer ports
//! - The surface drives collaborators only through these ports

pub mod port;
