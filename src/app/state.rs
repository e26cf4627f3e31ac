// AdMapLog - app/state.rs
//
// Demo host state: what the message bar currently shows and what the log
// panel has accumulated. Owned behind `app::host::SharedHost`.
//
// Widget expiry uses `Instant` so tests can pass an explicit clock; panel
// timestamps are wall-clock (`chrono`) because they are shown to the user.

use crate::core::model::{MessageStyle, PanelLevel, Severity, Verbosity};
use crate::util::constants;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A transient message-bar entry.
#[derive(Debug, Clone)]
pub struct BarWidget {
    pub title: String,
    pub text: String,
    pub style: MessageStyle,
    pub pushed_at: Instant,
    pub timeout: Duration,
}

impl BarWidget {
    /// Whether the widget's timeout has elapsed at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.pushed_at) >= self.timeout
    }
}

/// A persistent log-panel entry.
#[derive(Debug, Clone)]
pub struct PanelEntry {
    pub timestamp: DateTime<Local>,
    pub category: String,
    pub level: PanelLevel,
    pub text: String,
}

/// Top-level demo host state.
#[derive(Debug)]
pub struct HostState {
    /// Widgets currently shown in the message bar (oldest first).
    pub widgets: Vec<BarWidget>,

    /// Log panel entries (oldest first), capped at `MAX_PANEL_ENTRIES`.
    pub panel: VecDeque<PanelEntry>,

    /// Log panel category filter (None = all categories).
    pub category_filter: Option<String>,

    /// Composer: message text being typed.
    pub draft: String,

    /// Composer: severity to send the draft at.
    pub draft_severity: Severity,

    /// Composer: verbosity of the sinks the composer builds.
    pub verbosity: Verbosity,

    /// Composer: also echo dispatched messages to the console sink.
    pub mirror_to_console: bool,

    /// Message the composer asked to send. Taken by the app after the frame
    /// is drawn, once the state lock is released.
    pub pending_dispatch: Option<(Severity, String)>,
}

impl HostState {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            widgets: Vec::new(),
            panel: VecDeque::new(),
            category_filter: None,
            draft: String::new(),
            draft_severity: Severity::Info,
            verbosity,
            mirror_to_console: false,
            pending_dispatch: None,
        }
    }

    /// Remove every message-bar widget.
    pub fn clear_widgets(&mut self) {
        self.widgets.clear();
    }

    /// Show a new message-bar widget, dropping the oldest beyond the cap.
    pub fn push_widget(
        &mut self,
        title: &str,
        text: &str,
        style: MessageStyle,
        timeout_secs: u32,
    ) {
        self.push_widget_at(title, text, style, timeout_secs, Instant::now());
    }

    pub fn push_widget_at(
        &mut self,
        title: &str,
        text: &str,
        style: MessageStyle,
        timeout_secs: u32,
        now: Instant,
    ) {
        self.widgets.push(BarWidget {
            title: title.to_string(),
            text: text.to_string(),
            style,
            pushed_at: now,
            timeout: Duration::from_secs(u64::from(timeout_secs)),
        });
        if self.widgets.len() > constants::MAX_BAR_WIDGETS {
            let excess = self.widgets.len() - constants::MAX_BAR_WIDGETS;
            self.widgets.drain(..excess);
        }
    }

    /// Drop widgets whose timeout elapsed. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.widgets.len();
        self.widgets.retain(|w| !w.is_expired(now));
        before - self.widgets.len()
    }

    /// Time until the next visible widget expires, for repaint scheduling.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.widgets
            .iter()
            .map(|w| (w.pushed_at + w.timeout).saturating_duration_since(now))
            .min()
    }

    /// Append a panel entry, dropping the oldest beyond the cap.
    pub fn append_panel(&mut self, text: &str, category: &str, level: PanelLevel) {
        self.panel.push_back(PanelEntry {
            timestamp: Local::now(),
            category: category.to_string(),
            level,
            text: text.to_string(),
        });
        while self.panel.len() > constants::MAX_PANEL_ENTRIES {
            self.panel.pop_front();
        }
    }

    /// Distinct panel categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for entry in &self.panel {
            if !seen.contains(&entry.category) {
                seen.push(entry.category.clone());
            }
        }
        seen
    }

    /// Panel entries passing the category filter.
    pub fn visible_panel(&self) -> impl Iterator<Item = &PanelEntry> {
        self.panel.iter().filter(move |e| match &self.category_filter {
            Some(category) => &e.category == category,
            None => true,
        })
    }

    /// Clear the log panel.
    pub fn clear_panel(&mut self) {
        self.panel.clear();
    }

    /// Queue the current draft for dispatch and reset the text field.
    /// Blank drafts are ignored.
    pub fn submit_draft(&mut self) {
        let text = self.draft.trim();
        if text.is_empty() {
            return;
        }
        let text: String = text.chars().take(constants::MAX_COMPOSER_LENGTH).collect();
        self.pending_dispatch = Some((self.draft_severity, text));
        self.draft.clear();
    }
}

impl Default for HostState {
    fn default() -> Self {
        Self::new(Verbosity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_expires_after_timeout() {
        let mut state = HostState::default();
        let t0 = Instant::now();
        state.push_widget_at("ERROR", "boom", MessageStyle::Critical, 5, t0);

        assert_eq!(state.expire(t0 + Duration::from_secs(4)), 0);
        assert_eq!(state.widgets.len(), 1);
        assert_eq!(
            state.next_expiry(t0 + Duration::from_secs(4)),
            Some(Duration::from_secs(1))
        );

        assert_eq!(state.expire(t0 + Duration::from_secs(5)), 1);
        assert!(state.widgets.is_empty());
        assert_eq!(state.next_expiry(t0), None);
    }

    #[test]
    fn test_widget_cap() {
        let mut state = HostState::default();
        let now = Instant::now();
        for i in 0..(constants::MAX_BAR_WIDGETS + 3) {
            state.push_widget_at("INFO.", &format!("m{i}"), MessageStyle::Info, 5, now);
        }
        assert_eq!(state.widgets.len(), constants::MAX_BAR_WIDGETS);
        assert_eq!(state.widgets[0].text, "m3");
    }

    #[test]
    fn test_panel_is_bounded() {
        let mut state = HostState::default();
        for i in 0..(constants::MAX_PANEL_ENTRIES + 10) {
            state.append_panel(&format!("line {i}"), "cat", PanelLevel::Info);
        }
        assert_eq!(state.panel.len(), constants::MAX_PANEL_ENTRIES);
        assert_eq!(state.panel.front().map(|e| e.text.as_str()), Some("line 10"));
    }

    #[test]
    fn test_category_filter() {
        let mut state = HostState::default();
        state.append_panel("a", "Plugin", PanelLevel::Info);
        state.append_panel("b", "Other", PanelLevel::Warning);
        state.append_panel("c", "Plugin", PanelLevel::Critical);
        assert_eq!(state.categories(), vec!["Plugin", "Other"]);

        state.category_filter = Some("Plugin".to_string());
        let texts: Vec<&str> = state.visible_panel().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);

        state.category_filter = None;
        assert_eq!(state.visible_panel().count(), 3);

        state.clear_panel();
        assert_eq!(state.visible_panel().count(), 0);
    }

    #[test]
    fn test_submit_draft() {
        let mut state = HostState::default();
        state.draft = "   ".to_string();
        state.submit_draft();
        assert!(state.pending_dispatch.is_none());

        state.draft = "  lane 4 missing ".to_string();
        state.draft_severity = Severity::Warning;
        state.submit_draft();
        assert_eq!(
            state.pending_dispatch.take(),
            Some((Severity::Warning, "lane 4 missing".to_string()))
        );
        assert!(state.draft.is_empty());
    }
}
