//! Dashboard Page
//!
//! Today's input activity at a glance.

use leptos::*;

use crate::bridge;
use crate::components::{ListSkeleton, StatCard};
use crate::dto::DailyStats;
use crate::format::format_count;
use crate::routes::ViewKind;
use crate::state::use_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let stats = create_rw_signal(None::<DailyStats>);
    let (loading, set_loading) = create_signal(false);

    let load = move || {
        set_loading.set(true);
        state.begin();
        spawn_local(async move {
            match bridge::fetch_today_stats().await {
                Ok(today) => stats.set(Some(today)),
                Err(e) => state.report("Failed to load today's stats", &e),
            }
            state.end();
            set_loading.set(false);
        });
    };

    load();

    let total_keys = Signal::derive(move || stats.get().map(|s| format_count(s.total_keys)));
    let total_records =
        Signal::derive(move || stats.get().map(|s| format_count(s.total_records)));
    let active_apps =
        Signal::derive(move || stats.get().map(|s| s.app_stats.len().to_string()));
    let top_app = Signal::derive(move || {
        stats
            .get()
            .and_then(|s| s.top_app().map(|a| format!("Most active: {}", a.app_name)))
            .unwrap_or_default()
    });

    view! {
        <div class="page" data-view=ViewKind::Dashboard.name()>
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="subtle">
                        {move || stats.get().map(|s| s.date).unwrap_or_else(|| "Today".to_string())}
                    </p>
                </div>
                <button on:click=move |_| load() disabled=move || loading.get()>
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <section class="stat-grid">
                <StatCard label="Keystrokes" value=total_keys />
                <StatCard label="Records" value=total_records />
                <StatCard label="Applications" value=active_apps hint=top_app />
            </section>

            <section class="card">
                <h2>"By Application"</h2>
                {move || {
                    if loading.get() && stats.get().is_none() {
                        return view! { <ListSkeleton count=4 /> }.into_view();
                    }
                    match stats.get() {
                        Some(today) if !today.app_stats.is_empty() => {
                            view! { <AppBreakdown stats=today /> }.into_view()
                        }
                        _ => view! { <p class="subtle">"No input recorded today"</p> }.into_view(),
                    }
                }}
            </section>
        </div>
    }
}

/// Per-application table with share-of-total bars
#[component]
fn AppBreakdown(stats: DailyStats) -> impl IntoView {
    let rows = stats
        .app_stats
        .iter()
        .map(|app| {
            let share = stats.share_of(app);
            view! {
                <li class="app-row">
                    <div class="app-row-head">
                        <span class="app-name">{app.app_name.clone()}</span>
                        <span class="subtle">
                            {format!(
                                "{} keys · {} records",
                                format_count(app.key_count),
                                format_count(app.record_count),
                            )}
                        </span>
                    </div>
                    <div class="bar">
                        <div class="bar-fill" style=format!("width: {share:.1}%") />
                    </div>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="app-list">{rows}</ul> }
}
