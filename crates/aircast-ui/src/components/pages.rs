//! Placeholder page views the router hands rendering off to.
//!
//! # Design
//! - Pages stay copy-only panels; data loading and state live elsewhere.
//! - One shared panel keeps the markup consistent across pages.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct PagePanelProps {
    title: AttrValue,
    body: AttrValue,
}

#[function_component(PagePanel)]
fn page_panel(props: &PagePanelProps) -> Html {
    html! {
        <div class="page-panel">
            <h2>{props.title.clone()}</h2>
            <p class="muted">{props.body.clone()}</p>
        </div>
    }
}

/// Schedule overview and quick links.
#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! { <PagePanel title="Aircast" body="Schedule overview and quick links." /> }
}

/// Programme list for the selected day.
#[function_component(BroadcastsPage)]
pub(crate) fn broadcasts_page() -> Html {
    html! { <PagePanel title="Broadcasts" body="Programme list for the selected day." /> }
}

/// Station identity and playout preferences.
#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    html! { <PagePanel title="Settings" body="Station identity and playout preferences." /> }
}

#[function_component(RoundPage)]
pub(crate) fn round_page() -> Html {
    html! { <PagePanel title="Round" body="Live round status board." /> }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <PagePanel
            title="Not found"
            body="Use the navigation to return to a supported view."
        />
    }
}
