//! Router construction binding a table to a history strategy.

use crate::table::{Route, RouteMatch, RouteTable};

/// Mechanism by which navigation state is tracked and addressable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryStrategy {
    /// Browser-native path-based history.
    Browser,
    /// Fragment-based history for hosts without path rewriting.
    Fragment,
    /// In-memory history for tests and non-browser hosts.
    Memory,
}

impl HistoryStrategy {
    /// All supported strategies in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Browser, Self::Fragment, Self::Memory]
    }

    /// String identifier used for persisted preferences.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Fragment => "hash",
            Self::Memory => "memory",
        }
    }

    /// Parse a persisted identifier back into a strategy.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "browser" => Some(Self::Browser),
            "hash" | "fragment" => Some(Self::Fragment),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Process-wide router: one table bound to one history strategy.
///
/// A session constructs exactly one router and shares it by reference until
/// page teardown; the instance is read-only after construction and there is
/// no dynamic route registration. The type is deliberately not `Clone` so
/// that repeated accesses observe the same instance.
#[derive(Debug)]
pub struct Router<V> {
    table: RouteTable<V>,
    strategy: HistoryStrategy,
}

impl<V> Router<V> {
    /// Bind a validated table to a history strategy.
    #[must_use]
    pub const fn new(table: RouteTable<V>, strategy: HistoryStrategy) -> Self {
        Self { table, strategy }
    }

    /// Resolve a requested path through the bound table.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        self.table.resolve(path)
    }

    /// Look up a route by its symbolic name.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&Route<V>> {
        self.table.resolve_name(name)
    }

    /// Strategy the host should install history handling with.
    #[must_use]
    pub const fn strategy(&self) -> HistoryStrategy {
        self.strategy
    }

    /// The bound route table.
    #[must_use]
    pub const fn table(&self) -> &RouteTable<V> {
        &self.table
    }
}
