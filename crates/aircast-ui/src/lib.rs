#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Aircast Web UI.
//! This crate holds the Yew front-end entrypoint plus the declarative route
//! table wiring navigation to the page views.

pub mod nav;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::nav::{Page, ROUND_ROUTE, route_table};

    #[test]
    fn navigable_surface_is_four_pages() {
        let table = route_table().expect("table literal is valid");
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.resolve("/round").expect("round resolves").route.view,
            Page::Round
        );
    }

    #[test]
    fn live_round_keeps_its_symbolic_name() {
        let table = route_table().expect("table literal is valid");
        assert_eq!(
            table.resolve_name(ROUND_ROUTE).expect("named route").path,
            "/round"
        );
    }
}
