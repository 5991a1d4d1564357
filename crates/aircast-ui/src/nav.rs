//! Route table and typed page bindings for the Aircast UI.
//!
//! The navigable surface is declared once as a data-driven table and bridged
//! into `yew_router` by implementing [`Routable`] by hand: recognition,
//! path rendering and the not-found fallback all delegate to the table, so
//! the configuration stays explicit and independently testable.

use aircast_nav::{HistoryStrategy, Route, RouteTable, RouteTableError, Router};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::LazyLock;
use yew_router::Routable;

/// Symbolic name of the live round route, the only page reached
/// programmatically rather than by link click.
pub const ROUND_ROUTE: &str = "round";

/// Path rendered for views that have no table entry of their own.
const NOT_FOUND_PATH: &str = "/404";

/// Page-level views the router hands rendering off to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Page {
    /// Schedule overview and quick links.
    Home,
    /// Programme list for the selected day.
    Broadcasts,
    /// Station identity and playout preferences.
    Settings,
    /// Live round status board.
    Round,
    /// Fallback for unmatched paths.
    NotFound,
}

/// Build the application route table.
///
/// The declared table is exactly the four navigable pages; the not-found
/// view is installed separately as the host fallback and does not count as
/// a declared route.
///
/// # Errors
///
/// Returns an error when the declared literals are malformed; the tests
/// pin the built-in table as valid.
pub fn route_table() -> Result<RouteTable<Page>, RouteTableError> {
    Ok(RouteTable::new(vec![
        Route::new("/", Page::Home),
        Route::new("/broadcasts", Page::Broadcasts),
        Route::new("/settings", Page::Settings),
        Route::named("/round", Page::Round, ROUND_ROUTE),
    ])?
    .with_fallback(Page::NotFound))
}

static TABLE: LazyLock<RouteTable<Page>> =
    LazyLock::new(|| route_table().expect("route table literal is valid"));

/// Shared compiled table backing the [`Routable`] bridge.
///
/// # Panics
///
/// Panics when the built-in table literal is invalid; the table tests keep
/// that case unreachable.
#[must_use]
pub fn shared_table() -> &'static RouteTable<Page> {
    &TABLE
}

impl Routable for Page {
    fn from_path(path: &str, _params: &HashMap<&str, &str>) -> Option<Self> {
        Self::recognize(path)
    }

    fn to_path(&self) -> String {
        shared_table()
            .routes()
            .iter()
            .find(|route| route.view == *self)
            .map_or_else(|| NOT_FOUND_PATH.to_string(), |route| route.path.to_string())
    }

    fn routes() -> Vec<&'static str> {
        shared_table()
            .routes()
            .iter()
            .map(|route| route.path)
            .chain(std::iter::once(NOT_FOUND_PATH))
            .collect()
    }

    fn not_found_route() -> Option<Self> {
        shared_table().fallback().cloned()
    }

    fn recognize(pathname: &str) -> Option<Self> {
        shared_table()
            .resolve(pathname)
            .map(|matched| matched.route.view.clone())
            .or_else(|| shared_table().fallback().cloned())
    }
}

/// Shared handle to the session router, exposed through yew context.
///
/// The application constructs the router exactly once at bootstrap; every
/// access afterwards observes the same instance, which is what the
/// pointer-based equality encodes.
#[derive(Clone, Debug)]
pub struct RouterCtx(Rc<Router<Page>>);

impl RouterCtx {
    /// Construct the session router from the built-in table.
    ///
    /// # Panics
    ///
    /// Panics when the built-in table literal is invalid; the table tests
    /// keep that case unreachable.
    #[must_use]
    pub fn new(strategy: HistoryStrategy) -> Self {
        let table = route_table().expect("route table literal is valid");
        Self(Rc::new(Router::new(table, strategy)))
    }

    /// The session router.
    #[must_use]
    pub fn router(&self) -> &Router<Page> {
        &self.0
    }
}

impl PartialEq for RouterCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
