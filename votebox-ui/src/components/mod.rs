//! UI Components
//!
//! Reusable Leptos components for the poll page.

pub mod bar_chart;
pub mod candidate_card;
pub mod language_picker;
pub mod loading;
pub mod toast;

pub use bar_chart::BarChart;
pub use candidate_card::CandidateCard;
pub use language_picker::LanguagePicker;
pub use loading::CardSkeleton;
pub use toast::Toast;
