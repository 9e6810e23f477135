//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod image;
mod site_header;

pub use image::Image;
pub use site_header::SiteHeader;
