//! Desktop host payloads
//!
//! Shapes exchanged with the desktop host over the command bridge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page size used by the records view and the host's default filter
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Merge interval the host falls back to when none is stored
pub const DEFAULT_MERGE_INTERVAL_MS: u64 = 500;

pub const MIN_MERGE_INTERVAL_MS: u64 = 100;
pub const MAX_MERGE_INTERVAL_MS: u64 = 10_000;

/// A burst of input captured in one application
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub id: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub app_name: String,
    pub window_title: Option<String>,
    pub content: String,
    pub key_count: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppStats {
    pub app_name: String,
    pub key_count: i64,
    pub record_count: i64,
}

/// Totals for the current day
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: String,
    pub total_keys: i64,
    pub total_records: i64,
    pub app_stats: Vec<AppStats>,
}

impl DailyStats {
    /// Share of today's keystrokes typed in `app`, in percent
    pub fn share_of(&self, app: &AppStats) -> f64 {
        if self.total_keys <= 0 {
            return 0.0;
        }
        app.key_count as f64 * 100.0 / self.total_keys as f64
    }

    /// Application with the most keystrokes today
    pub fn top_app(&self) -> Option<&AppStats> {
        self.app_stats.iter().max_by_key(|a| a.key_count)
    }
}

/// Trim a lookahead result to `page_size` rows, reporting whether more exist
pub fn split_page<T>(mut rows: Vec<T>, page_size: i64) -> (Vec<T>, bool) {
    let page_size = usize::try_from(page_size.max(1)).unwrap_or(usize::MAX);
    let has_more = rows.len() > page_size;
    rows.truncate(page_size);
    (rows, has_more)
}

/// Record query sent to the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub query: Option<String>,
    pub app_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            query: None,
            app_name: None,
            start_date: None,
            end_date: None,
            limit: Some(DEFAULT_PAGE_SIZE),
            offset: Some(0),
        }
    }
}

impl SearchFilter {
    /// Build a first-page filter from the records form.
    ///
    /// Blank fields are dropped. Dates are `YYYY-MM-DD`; the end date is
    /// widened to the end of that day since the host compares full timestamps.
    pub fn from_form(query: &str, app_name: &str, start_date: &str, end_date: &str) -> Self {
        fn non_blank(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }

        Self {
            query: non_blank(query),
            app_name: non_blank(app_name),
            start_date: non_blank(start_date).map(|d| format!("{d} 00:00:00")),
            end_date: non_blank(end_date).map(|d| format!("{d} 23:59:59")),
            ..Self::default()
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.query.is_some()
            || self.app_name.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
    }

    /// Zero-based page index derived from limit/offset
    pub fn page(&self) -> i64 {
        let limit = self.page_size();
        self.offset.unwrap_or(0).max(0) / limit
    }

    /// Same filter moved to `page`
    pub fn with_page(&self, page: i64) -> Self {
        let limit = self.page_size();
        Self {
            offset: Some(page.max(0) * limit),
            ..self.clone()
        }
    }

    pub fn page_size(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    /// Same filter asking for one row past the page, so the caller can tell
    /// whether an older page exists
    pub fn with_lookahead(&self) -> Self {
        Self {
            limit: Some(self.page_size() + 1),
            ..self.clone()
        }
    }

    /// Same filter without paging, used for exports
    pub fn unpaged(&self) -> Self {
        Self {
            limit: None,
            offset: None,
            ..self.clone()
        }
    }
}

/// Capture settings stored by the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub excluded_apps: Vec<String>,
    pub merge_interval_ms: u64,
    pub auto_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            excluded_apps: Vec::new(),
            merge_interval_ms: DEFAULT_MERGE_INTERVAL_MS,
            auto_start: false,
        }
    }
}

impl Settings {
    /// Add an excluded application, ignoring blanks and case-insensitive duplicates.
    /// Returns whether the list changed.
    pub fn exclude_app(&mut self, app: &str) -> bool {
        let app = app.trim();
        if app.is_empty() || self.is_excluded(app) {
            return false;
        }
        self.excluded_apps.push(app.to_string());
        true
    }

    pub fn include_app(&mut self, app: &str) {
        self.excluded_apps.retain(|a| !a.eq_ignore_ascii_case(app));
    }

    pub fn is_excluded(&self, app: &str) -> bool {
        self.excluded_apps.iter().any(|a| a.eq_ignore_ascii_case(app))
    }

    pub fn set_merge_interval(&mut self, ms: u64) {
        self.merge_interval_ms = ms.clamp(MIN_MERGE_INTERVAL_MS, MAX_MERGE_INTERVAL_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_filter_default_pages_by_100() {
        let filter = SearchFilter::default();
        assert_eq!(filter.limit, Some(100));
        assert_eq!(filter.offset, Some(0));
        assert_eq!(filter.page(), 0);
    }

    #[test]
    fn test_search_filter_from_form() {
        let filter = SearchFilter::from_form("  todo ", "", "2024-05-01", "2024-05-02");
        assert_eq!(filter.query.as_deref(), Some("todo"));
        assert_eq!(filter.app_name, None);
        assert_eq!(filter.start_date.as_deref(), Some("2024-05-01 00:00:00"));
        assert_eq!(filter.end_date.as_deref(), Some("2024-05-02 23:59:59"));
        assert_eq!(filter.offset, Some(0));
        assert!(filter.is_filtered());

        assert!(!SearchFilter::from_form("", " ", "", "").is_filtered());
    }

    #[test]
    fn test_search_filter_paging() {
        let filter = SearchFilter::default().with_page(3);
        assert_eq!(filter.offset, Some(300));
        assert_eq!(filter.page(), 3);
        assert_eq!(filter.with_page(-1).offset, Some(0));

        let unpaged = filter.unpaged();
        assert_eq!(unpaged.limit, None);
        assert_eq!(unpaged.offset, None);
    }

    #[test]
    fn test_lookahead_keeps_offset() {
        let filter = SearchFilter::default().with_page(2);
        let request = filter.with_lookahead();
        assert_eq!(request.limit, Some(101));
        assert_eq!(request.offset, Some(200));
    }

    #[test]
    fn test_split_page_on_exact_multiple() {
        // 200 records total: the second page comes back full with nothing past it
        let (rows, has_more) = split_page((0..100).collect::<Vec<_>>(), 100);
        assert_eq!(rows.len(), 100);
        assert!(!has_more);

        let (rows, has_more) = split_page((0..101).collect::<Vec<_>>(), 100);
        assert_eq!(rows.len(), 100);
        assert!(has_more);

        let (rows, has_more) = split_page(vec![1, 2, 3], 100);
        assert_eq!(rows, vec![1, 2, 3]);
        assert!(!has_more);
    }

    #[test]
    fn test_settings_exclusions_are_case_insensitive() {
        let mut settings = Settings::default();
        assert!(settings.exclude_app("KeePassXC"));
        assert!(!settings.exclude_app("keepassxc"));
        assert!(!settings.exclude_app("   "));
        assert!(settings.is_excluded("KEEPASSXC"));

        settings.include_app("keepassxc");
        assert!(settings.excluded_apps.is_empty());
    }

    #[test]
    fn test_merge_interval_is_clamped() {
        let mut settings = Settings::default();
        assert_eq!(settings.merge_interval_ms, 500);
        settings.set_merge_interval(5);
        assert_eq!(settings.merge_interval_ms, 100);
        settings.set_merge_interval(60_000);
        assert_eq!(settings.merge_interval_ms, 10_000);
    }

    #[test]
    fn test_daily_stats_share() {
        let stats = DailyStats {
            date: "2024-05-01".to_string(),
            total_keys: 200,
            total_records: 4,
            app_stats: vec![
                AppStats {
                    app_name: "code".to_string(),
                    key_count: 150,
                    record_count: 3,
                },
                AppStats {
                    app_name: "firefox".to_string(),
                    key_count: 50,
                    record_count: 1,
                },
            ],
        };
        assert_eq!(stats.share_of(&stats.app_stats[0]), 75.0);
        assert_eq!(stats.top_app().map(|a| a.app_name.as_str()), Some("code"));
        assert_eq!(DailyStats::default().share_of(&stats.app_stats[1]), 0.0);
    }

    #[test]
    fn test_input_record_from_host_json() {
        let json = r#"{
            "id": 7,
            "timestamp": "2024-05-01T09:30:00Z",
            "app_name": "code",
            "window_title": null,
            "content": "fn main()[Enter]",
            "key_count": 16,
            "created_at": null
        }"#;
        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.key_count, 16);
        assert_eq!(record.timestamp.format("%H:%M").to_string(), "09:30");
    }
}
