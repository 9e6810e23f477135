//! ==============================================================================
//! lib.rs - shared header content for the site front-end
//! ==============================================================================
//!
//! purpose:
//!     describes what the site header shows: the logo asset, the navigation
//!     links, the sign-in call-to-action and the layout class names the
//!     stylesheet provides. everything here is static and known at compile
//!     time. the content types derive `Serialize` so consumers can hand
//!     them to templates or json endpoints as-is.
//!
//! relationships:
//!     - used by: site (SiteHeader component renders HeaderContent::site())
//!
//! design rationale:
//!     keeping the content out of the leptos crate means it can be checked
//!     with plain `cargo test` on the host, without a browser or wasm target.
//!
//! ==============================================================================

use serde::Serialize;

// ==============================================================================
// stylesheet class names
// ==============================================================================

/// class names provided by `site/style/site_header.css`
pub mod class {
    /// outer flex row
    pub const CONTAINER: &str = "container";
    /// logo + navigation links
    pub const LEFT: &str = "left";
    /// call-to-action region
    pub const RIGHT: &str = "right";
    /// sizing for the logo image
    pub const LOGO: &str = "logo";
    /// global button-like style for call-to-action anchors
    pub const CTA: &str = "cta";
}

// ==============================================================================
// header content types
// ==============================================================================

/// static image asset shown at the left edge of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogoAsset {
    /// path the asset is served from
    pub src: &'static str,
    /// alt text (empty: the logo is decorative)
    pub alt: &'static str,
}

/// client-side navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// plain anchor prompting a user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    /// anchor target. an empty string resolves to the current page.
    pub href: &'static str,
}

/// everything the site header renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderContent {
    pub logo: LogoAsset,
    pub nav_links: [NavLink; 2],
    pub cta: CallToAction,
}

impl HeaderContent {
    /// the site's header
    ///
    /// the sign-in target is still empty; it has not been wired to an auth
    /// page yet.
    pub const fn site() -> Self {
        Self {
            logo: LogoAsset {
                src: "/assets/logo.svg",
                alt: "",
            },
            nav_links: [
                NavLink { label: "Home", path: "/" },
                NavLink { label: "Catalog", path: "/catalog" },
            ],
            cta: CallToAction {
                label: "Sign In",
                href: "",
            },
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_point_home_and_catalog() {
        let content = HeaderContent::site();
        let paths: Vec<&str> = content.nav_links.iter().map(|l| l.path).collect();
        assert_eq!(paths, vec!["/", "/catalog"]);

        let labels: Vec<&str> = content.nav_links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Catalog"]);
    }

    #[test]
    fn test_cta_is_sign_in_with_empty_target() {
        // changing the target needs a product decision; update this test with it
        let cta = HeaderContent::site().cta;
        assert_eq!(cta.label, "Sign In");
        assert_eq!(cta.href, "");
    }

    #[test]
    fn test_logo_is_decorative() {
        let logo = HeaderContent::site().logo;
        assert!(logo.src.starts_with("/assets/"));
        assert!(logo.alt.is_empty());
    }

    #[test]
    fn test_content_is_stable_across_calls() {
        assert_eq!(HeaderContent::site(), HeaderContent::site());
    }

    #[test]
    fn test_content_serialization() {
        let json = serde_json::to_string(&HeaderContent::site()).unwrap();
        assert!(json.contains("\"path\":\"/catalog\""));
        assert!(json.contains("\"href\":\"\""));
    }

    #[test]
    fn test_class_names_match_stylesheet() {
        let css = include_str!("../../site/style/site_header.css");
        for name in [class::CONTAINER, class::LEFT, class::RIGHT, class::LOGO, class::CTA] {
            assert!(css.contains(&format!(".{} ", name)), "missing .{}", name);
        }
    }
}
