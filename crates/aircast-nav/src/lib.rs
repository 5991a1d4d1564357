//! Client-side navigation core for Aircast.
//!
//! The crate models the navigable surface of the application as data: an
//! ordered, immutable [`RouteTable`] of path-to-view bindings, compiled and
//! validated at construction, plus a [`Router`] that binds the table to a
//! [`HistoryStrategy`] for the lifetime of the session. Resolution is a pure
//! function from (table, requested path) to (matched route | no match); the
//! host front-end supplies the view handles and performs the actual
//! rendering.

pub mod error;
pub mod router;
pub mod table;

pub use error::RouteTableError;
pub use router::{HistoryStrategy, Router};
pub use table::{Route, RouteMatch, RouteTable};
