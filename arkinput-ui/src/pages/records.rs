//! Records Page
//!
//! Search, page through, export and purge recorded input.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::bridge;
use crate::components::Loading;
use crate::dto::{split_page, InputRecord, SearchFilter};
use crate::format::{days_ago, format_count, format_timestamp, truncate};
use crate::routes::ViewKind;
use crate::state::{use_global_state, RequestTracker};

const CONTENT_PREVIEW_CHARS: usize = 160;
const DEFAULT_RETENTION_DAYS: i64 = 30;

/// Records page component
#[component]
pub fn Records() -> impl IntoView {
    let state = use_global_state();

    let filter = create_rw_signal(SearchFilter::default());
    let records = create_rw_signal(Vec::<InputRecord>::new());
    let apps = create_rw_signal(Vec::<String>::new());
    let (loading, set_loading) = create_signal(false);

    spawn_local(async move {
        match bridge::fetch_app_list().await {
            Ok(list) => apps.set(list),
            Err(e) => state.report("Failed to load application list", &e),
        }
    });

    // Reload whenever the filter or page changes; answers to superseded
    // requests are dropped
    let requests = store_value(RequestTracker::default());
    let (has_next, set_has_next) = create_signal(false);
    create_effect(move |_| {
        let current = filter.get();
        let mut ticket = 0;
        requests.update_value(|r| ticket = r.issue());
        set_loading.set(true);
        state.begin();
        spawn_local(async move {
            let result = bridge::fetch_records(&current.with_lookahead()).await;
            state.end();
            if !requests.with_value(|r| r.is_current(ticket)) {
                return;
            }
            match result {
                Ok(list) => {
                    let (page, more) = split_page(list, current.page_size());
                    records.set(page);
                    set_has_next.set(more);
                }
                Err(e) => state.report("Failed to load records", &e),
            }
            set_loading.set(false);
        });
    });

    let has_prev = move || filter.with(|f| f.page() > 0);

    view! {
        <div class="page" data-view=ViewKind::Records.name()>
            <div class="page-header">
                <div>
                    <h1>"Records"</h1>
                    <p class="subtle">"Everything captured, newest first"</p>
                </div>
                <ExportButton filter=filter />
            </div>

            <FilterForm filter=filter apps=apps />

            <section class="card">
                {move || {
                    if loading.get() && records.with(Vec::is_empty) {
                        view! { <Loading /> }.into_view()
                    } else if records.with(Vec::is_empty) {
                        view! { <p class="subtle">"No records match this filter"</p> }.into_view()
                    } else {
                        view! {
                            <ul class="record-list">
                                <For
                                    each=move || records.get()
                                    key=|r| (r.id, r.timestamp)
                                    children=move |r| view! { <RecordRow record=r /> }
                                />
                            </ul>
                        }
                        .into_view()
                    }
                }}

                <div class="pager">
                    <button
                        disabled=move || !has_prev()
                        on:click=move |_| filter.update(|f| *f = f.with_page(f.page() - 1))
                    >
                        "← Newer"
                    </button>
                    <span class="subtle">{move || format!("Page {}", filter.with(|f| f.page()) + 1)}</span>
                    <button
                        disabled=move || !has_next.get()
                        on:click=move |_| filter.update(|f| *f = f.with_page(f.page() + 1))
                    >
                        "Older →"
                    </button>
                </div>
            </section>

            <PurgeSection on_purged=move || filter.update(|f| *f = f.with_page(0)) />
        </div>
    }
}

/// Search form; applying it resets to the first page
#[component]
fn FilterForm(filter: RwSignal<SearchFilter>, apps: RwSignal<Vec<String>>) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (app, set_app) = create_signal(String::new());
    let (start, set_start) = create_signal(String::new());
    let (end, set_end) = create_signal(String::new());

    let apply = move || {
        filter.set(SearchFilter::from_form(
            &query.get_untracked(),
            &app.get_untracked(),
            &start.get_untracked(),
            &end.get_untracked(),
        ));
    };

    let clear = move |_| {
        set_query.set(String::new());
        set_app.set(String::new());
        set_start.set(String::new());
        set_end.set(String::new());
        filter.set(SearchFilter::default());
    };

    view! {
        <form
            class="card filter-form"
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                apply();
            }
        >
            <input
                type="search"
                placeholder="Search content"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <select
                prop:value=move || app.get()
                on:change=move |ev| set_app.set(event_target_value(&ev))
            >
                <option value="">"All applications"</option>
                {move || {
                    apps.get()
                        .into_iter()
                        .map(|name| view! { <option value=name.clone()>{name}</option> })
                        .collect_view()
                }}
            </select>
            <label>
                "From"
                <input
                    type="date"
                    prop:value=move || start.get()
                    on:input=move |ev| set_start.set(event_target_value(&ev))
                />
            </label>
            <label>
                "To"
                <input
                    type="date"
                    prop:value=move || end.get()
                    on:input=move |ev| set_end.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Apply"</button>
            <button type="button" class="secondary" on:click=clear>"Clear"</button>
        </form>
    }
}

#[component]
fn RecordRow(record: InputRecord) -> impl IntoView {
    let title = record
        .window_title
        .clone()
        .filter(|t| !t.is_empty())
        .map(|t| format!(" — {t}"))
        .unwrap_or_default();

    view! {
        <li class="record">
            <div class="record-head">
                <span class="app-name">{record.app_name.clone()}</span>
                <span class="subtle">{truncate(&title, 80)}</span>
                <span class="record-meta">
                    {format!(
                        "{} · {} keys",
                        format_timestamp(&record.timestamp),
                        format_count(i64::from(record.key_count)),
                    )}
                </span>
            </div>
            <pre class="record-content" title=record.content.clone()>
                {truncate(&record.content, CONTENT_PREVIEW_CHARS)}
            </pre>
        </li>
    }
}

/// Downloads the records matching the current filter as JSON
#[component]
fn ExportButton(filter: RwSignal<SearchFilter>) -> impl IntoView {
    let state = use_global_state();
    let (exporting, set_exporting) = create_signal(false);

    let export = move |_| {
        set_exporting.set(true);
        let current = filter.get_untracked().unpaged();
        spawn_local(async move {
            match bridge::export_records(&current).await {
                Ok(json) => {
                    let filename = format!("arkinput-export-{}.json", days_ago(0));
                    match download_text(&filename, &json) {
                        Ok(()) => state.show_success("Records exported"),
                        Err(e) => state.show_error(&format!("Export download failed: {e:?}")),
                    }
                }
                Err(e) => state.report("Export failed", &e),
            }
            set_exporting.set(false);
        });
    };

    view! {
        <button on:click=export disabled=move || exporting.get()>
            {move || if exporting.get() { "Exporting..." } else { "Export JSON" }}
        </button>
    }
}

/// Deletes records older than a chosen date
#[component]
fn PurgeSection<F>(on_purged: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let state = use_global_state();
    let (before, set_before) = create_signal(days_ago(DEFAULT_RETENTION_DAYS));
    let (purging, set_purging) = create_signal(false);

    let purge = move |_| {
        let date = before.get_untracked();
        if date.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete all records before {date}?"))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_purging.set(true);
        spawn_local(async move {
            match bridge::delete_old_records(&date).await {
                Ok(count) => {
                    state.show_success(&format!("Deleted {} records", format_count(count as i64)));
                    on_purged();
                }
                Err(e) => state.report("Purge failed", &e),
            }
            set_purging.set(false);
        });
    };

    view! {
        <section class="card danger-zone">
            <h2>"Purge Old Records"</h2>
            <div class="row">
                <label>
                    "Delete everything before"
                    <input
                        type="date"
                        prop:value=move || before.get()
                        on:input=move |ev| set_before.set(event_target_value(&ev))
                    />
                </label>
                <button class="danger" on:click=purge disabled=move || purging.get()>
                    {move || if purging.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </section>
    }
}

/// Offer `contents` to the user as a file download
fn download_text(filename: &str, contents: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document not available"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let blob = web_sys::Blob::new_with_str_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}
