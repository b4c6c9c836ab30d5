//! Site-wide chrome configuration and navigation rules.
//!
//! # Responsibility
//! - Hold owner identity and profile links used by header/footer.
//! - Decide which primary navigation link is active for a page path.
//!
//! # Invariants
//! - Paths are compared in trailing-slash normalized form.
//! - The root link `/` is active only on the root page itself.

pub mod config;
pub mod nav;

pub use config::{SiteConfig, SiteConfigError};
pub use nav::{is_active, normalize_path, NavItem, NAV_ITEMS};
