//! Language Picker Component
//!
//! English / Bangla toggle, persisted in local storage.

use leptos::*;

use crate::state::global::{GlobalState, Language};

/// Language toggle buttons
#[component]
pub fn LanguagePicker() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <LanguageButton label="English" language=Language::English />
            <LanguageButton label="বাংলা" language=Language::Bangla />
        </div>
    }
}

#[component]
fn LanguageButton(label: &'static str, language: Language) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_memo = state.clone();
    let is_active = create_memo(move |_| state_for_memo.language.get() == language);

    let state_for_click = state;
    let on_click = move |_| {
        state_for_click.set_language(language);
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}
