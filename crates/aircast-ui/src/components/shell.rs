//! Application shell: sidebar navigation around the routed page views.

use crate::nav::{Page, ROUND_ROUTE, RouterCtx};
use aircast_nav::HistoryStrategy;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    /// Strategy the session router was constructed with.
    pub strategy: HistoryStrategy,
    /// Emitted when the user picks a strategy; applies on the next load.
    pub on_strategy_change: Callback<HistoryStrategy>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let active = use_route::<Page>().unwrap_or(Page::Home);
    let navigator = use_navigator();
    let router = use_context::<RouterCtx>();

    // Programmatic navigation by symbolic name rather than literal path.
    let go_live = {
        let navigator = navigator.clone();
        let router = router.clone();
        Callback::from(move |_| {
            let Some(navigator) = navigator.clone() else {
                return;
            };
            let Some(router) = router.clone() else {
                return;
            };
            if let Some(route) = router.router().resolve_name(ROUND_ROUTE) {
                navigator.push(&route.view);
            }
        })
    };

    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="brand">
                    <strong>{"Aircast"}</strong>
                    <span class="muted">{"Studio"}</span>
                </div>
                <nav>
                    {nav_item(Page::Home, "Home", &active)}
                    {nav_item(Page::Broadcasts, "Broadcasts", &active)}
                    {nav_item(Page::Round, "Round", &active)}
                    {nav_item(Page::Settings, "Settings", &active)}
                </nav>
                <div class="sidebar-footer">
                    <button class="ghost" onclick={go_live}>{"Jump to live round"}</button>
                    <div class="history-toggle">
                        <small>{"History"}</small>
                        <div class="segmented">
                            {for HistoryStrategy::all().iter().map(|strategy| {
                                let strategy = *strategy;
                                let cb = props.on_strategy_change.clone();
                                html! {
                                    <button
                                        class={classes!(if props.strategy == strategy { "active" } else { "" })}
                                        onclick={Callback::from(move |_| cb.emit(strategy))}
                                    >
                                        {strategy.as_str()}
                                    </button>
                                }
                            })}
                        </div>
                    </div>
                </div>
            </aside>
            <div class="main">
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(page: Page, label: &str, active: &Page) -> Html {
    let classes = classes!(
        "nav-item",
        if *active == page { Some("active") } else { None }
    );
    html! {
        <Link<Page> to={page} classes={classes}>{label}</Link<Page>>
    }
}
