//! This module serves as a container for the reusable UI components of the portal shell.
//!
//! Each sub-module defines a specific UI element, such as the navigation bar,
//! the inline icon renderer or the error page template.

pub mod error_template;
pub mod icons;
pub mod navbar;
