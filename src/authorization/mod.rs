//! Role-based page authorization.
//!
//! Access control is a single constant table mapping each [`Role`] to the
//! pages it may view, plus one pure function deciding what happens to a
//! navigation attempt. The web layer performs the actual redirect.
//!
//! [`Role`]: crate::models::Role

mod navigation;
mod policy;
mod request;

pub use navigation::{NavItem, navigation_for};
pub use policy::{ROLE_PAGE_POLICY, allowed_pages, allowed_pages_for, is_authorized};
pub use request::{Decision, UNAUTHORIZED_PATH, authorize_request, authorize_request_str, page_for_path};
