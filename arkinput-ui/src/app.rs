//! App Root Component
//!
//! Router, navigation and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages;
use crate::routes::{RouteTable, ViewKind, DASHBOARD_PATH, ROOT_PATH};
use crate::state::{provide_global_state, use_global_state};

/// View routes handed to `<Routes>`, in table order after the root redirect
pub(crate) const ROUTED_VIEWS: [ViewKind; 3] =
    [ViewKind::Dashboard, ViewKind::Records, ViewKind::Settings];

/// Root application component.
///
/// `<Router>` tracks the URL through the browser history API, so in-page
/// navigation never reloads the document. `<Routes>` mirrors
/// [`crate::routes::ROUTES`]; paths outside the table render nothing.
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let root_target = RouteTable::standard()
        .redirect_target(ROOT_PATH)
        .unwrap_or(DASHBOARD_PATH);
    let [dashboard, records, settings] = ROUTED_VIEWS;

    view! {
        <Router>
            <div class="shell">
                <Nav />
                <BridgeBanner />
                <BusyIndicator />

                <main class="content">
                    <Routes>
                        <Route path=ROOT_PATH view=move || view! { <RootRedirect to=root_target /> } />
                        <Route path=dashboard.path() view=move || pages::render(dashboard) />
                        <Route path=records.path() view=move || pages::render(records) />
                        <Route path=settings.path() view=move || pages::render(settings) />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// Replaces the current history entry so the visible path becomes `to`
#[component]
fn RootRedirect(to: &'static str) -> impl IntoView {
    let options = NavigateOptions {
        replace: true,
        ..Default::default()
    };

    view! { <Redirect path=to options=options /> }
}

/// Shown when the page is opened outside the desktop app
#[component]
fn BridgeBanner() -> impl IntoView {
    let state = use_global_state();

    view! {
        <Show when=move || !state.bridge_available.get()>
            <div class="banner" role="alert">
                "Not connected to the ArkInput desktop app. "
                "Open this window from the app to see your recorded input."
            </div>
        </Show>
    }
}

/// Thin progress bar while any bridge call is in flight
#[component]
fn BusyIndicator() -> impl IntoView {
    let state = use_global_state();

    view! {
        <Show when=move || state.is_loading()>
            <div class="busy-indicator" role="progressbar" aria-label="Loading" />
        </Show>
    }
}
