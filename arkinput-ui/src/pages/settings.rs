//! Settings Page
//!
//! Capture preferences stored by the desktop host.

use leptos::*;

use crate::bridge::{self, BridgeResult};
use crate::components::Loading;
use crate::dto::{Settings as CaptureSettings, MAX_MERGE_INTERVAL_MS, MIN_MERGE_INTERVAL_MS};
use crate::routes::ViewKind;
use crate::state::use_global_state;

/// Outcome of reading the host settings
#[derive(Clone, Debug, PartialEq)]
enum SettingsLoad {
    Loading,
    Loaded(CaptureSettings),
    /// Nothing editable is shown, so defaults can never be saved over the
    /// host's stored exclusions
    Failed(String),
}

impl SettingsLoad {
    fn from_result(result: BridgeResult<CaptureSettings>) -> Self {
        match result {
            Ok(settings) => SettingsLoad::Loaded(settings),
            Err(e) => SettingsLoad::Failed(e.to_string()),
        }
    }
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_global_state();
    let settings = create_rw_signal(SettingsLoad::Loading);
    let known_apps = create_rw_signal(Vec::<String>::new());

    let load = move || {
        settings.set(SettingsLoad::Loading);
        state.begin();
        spawn_local(async move {
            let result = bridge::fetch_settings().await;
            if let Err(e) = &result {
                state.report("Failed to load settings", e);
            }
            settings.set(SettingsLoad::from_result(result));
            state.end();
        });
    };

    load();

    spawn_local(async move {
        if let Ok(apps) = bridge::fetch_app_list().await {
            known_apps.set(apps);
        }
    });

    view! {
        <div class="page" data-view=ViewKind::Settings.name()>
            <div class="page-header">
                <div>
                    <h1>"Settings"</h1>
                    <p class="subtle">"Control what gets recorded"</p>
                </div>
            </div>

            {move || match settings.get() {
                SettingsLoad::Loading => view! { <Loading /> }.into_view(),
                SettingsLoad::Loaded(loaded) => {
                    view! { <CaptureSettingsForm initial=loaded known_apps=known_apps /> }.into_view()
                }
                SettingsLoad::Failed(message) => view! {
                    <section class="card">
                        <h2>"Settings unavailable"</h2>
                        <p class="subtle">{message}</p>
                        <button on:click=move |_| load()>"Retry"</button>
                    </section>
                }
                .into_view(),
            }}

            <AboutSection />
        </div>
    }
}

/// Editable copy of the host settings; nothing is sent until Save
#[component]
fn CaptureSettingsForm(initial: CaptureSettings, known_apps: RwSignal<Vec<String>>) -> impl IntoView {
    let state = use_global_state();
    let draft = create_rw_signal(initial);
    let (new_app, set_new_app) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let add_app = move || {
        let name = new_app.get_untracked();
        let mut added = false;
        draft.update(|s| added = s.exclude_app(&name));
        if added {
            set_new_app.set(String::new());
        }
    };

    let save = move |_| {
        set_saving.set(true);
        let current = draft.get_untracked();
        spawn_local(async move {
            match bridge::save_settings(&current).await {
                Ok(()) => state.show_success("Settings saved"),
                Err(e) => state.report("Failed to save settings", &e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="card">
            <h2>"Excluded Applications"</h2>
            <p class="subtle">"Input typed into these applications is never recorded."</p>

            <ul class="chip-list">
                <For
                    each=move || draft.with(|s| s.excluded_apps.clone())
                    key=|app| app.clone()
                    children=move |app| {
                        let remove = app.clone();
                        view! {
                            <li class="chip">
                                <span>{app}</span>
                                <button
                                    class="chip-remove"
                                    title="Remove"
                                    on:click=move |_| draft.update(|s| s.include_app(&remove))
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <div class="row">
                <input
                    type="text"
                    list="known-apps"
                    placeholder="Application name"
                    prop:value=move || new_app.get()
                    on:input=move |ev| set_new_app.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add_app();
                        }
                    }
                />
                <datalist id="known-apps">
                    {move || {
                        known_apps
                            .get()
                            .into_iter()
                            .map(|name| view! { <option value=name /> })
                            .collect_view()
                    }}
                </datalist>
                <button class="secondary" on:click=move |_| add_app()>"Add"</button>
            </div>
        </section>

        <section class="card">
            <h2>"Capture"</h2>
            <label class="field">
                <span>"Merge interval (ms)"</span>
                <input
                    type="number"
                    min=MIN_MERGE_INTERVAL_MS
                    max=MAX_MERGE_INTERVAL_MS
                    step="50"
                    prop:value=move || draft.with(|s| s.merge_interval_ms.to_string())
                    on:change=move |ev| {
                        if let Ok(ms) = event_target_value(&ev).trim().parse::<u64>() {
                            draft.update(|s| s.set_merge_interval(ms));
                        } else {
                            // re-render with the last valid value
                            draft.update(|_| {});
                        }
                    }
                />
                <span class="subtle">
                    "Keystrokes closer together than this are merged into one record."
                </span>
            </label>
            <label class="field checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|s| s.auto_start)
                    on:change=move |ev| draft.update(|s| s.auto_start = event_target_checked(&ev))
                />
                <span>"Start recording when the computer starts"</span>
            </label>
        </section>

        <div class="row actions">
            <button class="secondary" on:click=move |_| draft.set(CaptureSettings::default())>
                "Reset to Defaults"
            </button>
            <button on:click=save disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </div>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="card">
            <h2>"About ArkInput"</h2>
            <p>
                "ArkInput keeps a private, local history of what you type so you can find it again. "
                "Records never leave this computer."
            </p>
            <p class="subtle">{format!("Version {}", env!("CARGO_PKG_VERSION"))}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeError;

    #[test]
    fn test_failed_load_offers_no_form() {
        let load = SettingsLoad::from_result(Err(BridgeError::Rejected {
            command: "get_settings".to_string(),
            message: "database is locked".to_string(),
        }));
        assert_eq!(
            load,
            SettingsLoad::Failed("get_settings: database is locked".to_string())
        );
        assert_ne!(load, SettingsLoad::Loaded(CaptureSettings::default()));
    }

    #[test]
    fn test_loaded_settings_are_kept() {
        let mut stored = CaptureSettings::default();
        stored.exclude_app("KeePassXC");

        let load = SettingsLoad::from_result(Ok(stored.clone()));
        assert_eq!(load, SettingsLoad::Loaded(stored));
    }
}
