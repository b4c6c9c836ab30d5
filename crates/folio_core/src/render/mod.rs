//! HTML fragment rendering.
//!
//! # Responsibility
//! - Turn filtered records into project card markup.
//! - Render site header and footer chrome.
//!
//! # Invariants
//! - Every feed- or config-supplied string passes through [`escape_html`]
//!   before it is placed in markup, including attribute values.
//! - Rendering never fails; missing optional fields are omitted.

mod card;
mod chrome;
mod escape;

pub use card::{render_card, render_projects, RenderedList, LINK_SEPARATOR, LOAD_FAILED_HTML};
pub use chrome::{current_year, render_footer, render_header};
pub use escape::escape_html;
