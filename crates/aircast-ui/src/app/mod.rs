//! Application bootstrap: constructs the session router once, installs the
//! configured history strategy, and mounts the routed shell.

use crate::components::pages::{BroadcastsPage, HomePage, NotFoundPage, RoundPage, SettingsPage};
use crate::components::shell::AppShell;
use crate::nav::{Page, RouterCtx};
use aircast_nav::HistoryStrategy;
use gloo::console;
use preferences::{load_strategy, persist_strategy};
use yew::prelude::*;
use yew_router::history::{AnyHistory, BrowserHistory, HashHistory, MemoryHistory};
use yew_router::prelude::*;
use yew_router::router::Router;

mod preferences;

#[function_component(AircastApp)]
pub(crate) fn aircast_app() -> Html {
    // Single construction per session; every consumer below shares this
    // instance through context.
    let router_ctx = use_memo(|_| RouterCtx::new(load_strategy()), ());
    let history = {
        let router_ctx = router_ctx.clone();
        use_memo(move |_| make_history(router_ctx.router().strategy()), ())
    };
    let initial_strategy = router_ctx.router().strategy();
    let strategy = use_state(move || initial_strategy);

    {
        let strategy = strategy.clone();
        use_effect_with_deps(
            move |strategy| {
                persist_strategy(**strategy);
                || ()
            },
            strategy,
        );
    }

    let on_strategy_change = {
        let strategy = strategy.clone();
        Callback::from(move |next: HistoryStrategy| strategy.set(next))
    };

    let render = move |page: Page| {
        match page {
            Page::Home => html! { <HomePage /> },
            Page::Broadcasts => html! { <BroadcastsPage /> },
            Page::Settings => html! { <SettingsPage /> },
            Page::Round => html! { <RoundPage /> },
            Page::NotFound => {
                console::warn!("navigation fell back to the not-found view");
                html! { <NotFoundPage /> }
            }
        }
    };

    html! {
        <ContextProvider<RouterCtx> context={(*router_ctx).clone()}>
            <Router history={(*history).clone()}>
                <AppShell strategy={*strategy} on_strategy_change={on_strategy_change}>
                    <Switch<Page> render={render} />
                </AppShell>
            </Router>
        </ContextProvider<RouterCtx>>
    }
}

fn make_history(strategy: HistoryStrategy) -> AnyHistory {
    match strategy {
        HistoryStrategy::Browser => BrowserHistory::new().into(),
        HistoryStrategy::Fragment => HashHistory::new().into(),
        HistoryStrategy::Memory => MemoryHistory::new().into(),
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AircastApp>::with_root(root).render();
    } else {
        yew::Renderer::<AircastApp>::new().render();
    }
}
