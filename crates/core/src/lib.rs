//! FaqScope core — domain logic shared by the HTTP client and the desktop UI.
//!
//! # Modules
//!
//! - [`types`] — FAQ search hits as returned by the remote service
//! - [`endpoint`] — descriptor table for the known search endpoints
//! - [`escape`] — HTML escaping for externally supplied text
//! - [`render`] — HTML fragments for the search panes
//! - [`debounce`] — generation tokens backing debounce and stale-response rejection

pub mod debounce;
pub mod endpoint;
pub mod escape;
pub mod render;
pub mod types;
