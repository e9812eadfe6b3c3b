//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::collections::BTreeMap;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Candidate set from the API
    pub candidates: RwSignal<Vec<Candidate>>,
    /// Current vote tally
    pub tally: RwSignal<Tally>,
    /// Display language
    pub language: RwSignal<Language>,
    /// API reachability (from the last health check)
    pub api_healthy: RwSignal<bool>,
    /// Timestamp of the last vote cast from this page
    pub last_vote: RwSignal<Option<i64>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Candidate definition from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub label_en: String,
    pub label_bn: String,
    pub logo_url: String,
    pub color: String,
}

impl Candidate {
    /// Display label in the given language
    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::English => &self.label_en,
            Language::Bangla => &self.label_bn,
        }
    }
}

/// Vote tally: candidate id to count
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Tally {
    #[serde(default)]
    pub counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub total: u64,
}

impl Tally {
    pub fn count(&self, candidate_id: &str) -> u64 {
        self.counts.get(candidate_id).copied().unwrap_or(0)
    }

    /// Share of the total, in percent; zero when nobody has voted
    pub fn share(&self, candidate_id: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(candidate_id) as f64 / self.total as f64 * 100.0
    }
}

/// Display language for the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Bangla,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Bangla => "bn",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "bn" => Language::Bangla,
            _ => Language::English,
        }
    }
}

/// Fixed UI strings in both languages
pub struct UiStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub vote_button: &'static str,
    pub live_counts: &'static str,
    pub chart_heading: &'static str,
    pub total_votes: &'static str,
    pub votes_suffix: &'static str,
    pub no_votes: &'static str,
    pub vote_recorded: &'static str,
    pub language_label: &'static str,
}

const STRINGS_EN: UiStrings = UiStrings {
    title: "Who do you support?",
    subtitle: "Tap a party to cast your vote",
    vote_button: "Vote",
    live_counts: "Live Counts",
    chart_heading: "Results",
    total_votes: "Total votes",
    votes_suffix: "votes",
    no_votes: "No votes yet - be the first!",
    vote_recorded: "Vote recorded",
    language_label: "Language",
};

const STRINGS_BN: UiStrings = UiStrings {
    title: "আপনি কাকে সমর্থন করেন?",
    subtitle: "ভোট দিতে একটি দলে চাপ দিন",
    vote_button: "ভোট দিন",
    live_counts: "লাইভ গণনা",
    chart_heading: "ফলাফল",
    total_votes: "মোট ভোট",
    votes_suffix: "ভোট",
    no_votes: "এখনো কোনো ভোট পড়েনি - প্রথম হোন!",
    vote_recorded: "ভোট গৃহীত হয়েছে",
    language_label: "ভাষা",
};

impl Language {
    pub fn strings(self) -> &'static UiStrings {
        match self {
            Language::English => &STRINGS_EN,
            Language::Bangla => &STRINGS_BN,
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        candidates: create_rw_signal(Vec::new()),
        tally: create_rw_signal(Tally::default()),
        language: create_rw_signal(load_language()),
        api_healthy: create_rw_signal(false),
        last_vote: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Read the persisted language choice from local storage
fn load_language() -> Language {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(code)) = storage.get_item("votebox_language") {
                return Language::from_code(&code);
            }
        }
    }
    Language::English
}

impl GlobalState {
    /// Switch display language and persist the choice
    pub fn set_language(&self, language: Language) {
        self.language.set(language);

        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item("votebox_language", language.code());
            }
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_share() {
        let mut tally = Tally::default();
        tally.counts.insert("BNP".to_string(), 3);
        tally.counts.insert("Jamaat".to_string(), 1);
        tally.counts.insert("NCP".to_string(), 0);
        tally.total = 4;

        assert_eq!(tally.count("BNP"), 3);
        assert_eq!(tally.share("BNP"), 75.0);
        assert_eq!(tally.share("NCP"), 0.0);
    }

    #[test]
    fn test_tally_share_no_votes() {
        let tally = Tally::default();
        assert_eq!(tally.share("BNP"), 0.0);
    }

    #[test]
    fn test_language_codes_round_trip() {
        assert_eq!(Language::from_code("bn"), Language::Bangla);
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("??"), Language::English);
        assert_eq!(Language::from_code(Language::Bangla.code()), Language::Bangla);
    }
}
