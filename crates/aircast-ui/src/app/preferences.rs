//! Persistence helpers for navigation preferences.

use aircast_nav::HistoryStrategy;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

pub(crate) const HISTORY_KEY: &str = "aircast.history";

pub(crate) fn load_strategy() -> HistoryStrategy {
    if let Ok(value) = LocalStorage::get::<String>(HISTORY_KEY) {
        if let Some(strategy) = HistoryStrategy::from_tag(&value) {
            return strategy;
        }
    }
    HistoryStrategy::Browser
}

pub(crate) fn persist_strategy(strategy: HistoryStrategy) {
    set_storage(HISTORY_KEY, strategy.as_str());
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
