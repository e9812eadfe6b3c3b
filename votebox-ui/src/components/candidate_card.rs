//! Candidate Card Component
//!
//! One card per candidate: logo, bilingual label, live count, vote button.

use leptos::*;

use crate::api;
use crate::state::global::{Candidate, GlobalState};

/// Candidate card with vote button
#[component]
pub fn CandidateCard(candidate: Candidate) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let candidate_id = candidate.id.clone();
    let candidate_id_count = candidate.id.clone();
    let candidate_for_label = candidate.clone();

    // Live count for this candidate
    let count = create_memo(move |_| state.tally.get().count(&candidate_id_count));

    let state_for_click = state.clone();
    let on_vote = move |_| {
        let candidate_id = candidate_id.clone();
        let state = state_for_click.clone();

        spawn_local(async move {
            state.loading.set(true);
            match api::submit_vote(&candidate_id).await {
                Ok(response) => {
                    state.tally.set(response.tally);
                    state.last_vote.set(Some(response.timestamp));
                    let strings = state.language.get_untracked().strings();
                    state.show_success(strings.vote_recorded);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            state.loading.set(false);
        });
    };

    view! {
        <div
            class="bg-gray-800 rounded-xl p-6 flex flex-col items-center text-center border border-gray-700 hover:border-gray-500 transition"
            style=format!("border-top: 4px solid {}", candidate.color)
        >
            // Party logo
            <img
                src=candidate.logo_url.clone()
                alt=candidate.label_en.clone()
                class="w-24 h-24 object-contain mb-4"
            />

            // Label in the selected language
            <h3 class="text-xl font-semibold mb-2">
                {move || candidate_for_label.label(state.language.get()).to_string()}
            </h3>

            // Live count
            <div class="text-3xl font-bold mb-4" style=format!("color: {}", candidate.color)>
                {move || count.get()}
            </div>

            // Vote button
            <button
                on:click=on_vote
                disabled=move || state.loading.get()
                class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:opacity-50 rounded-lg font-medium transition-colors"
            >
                {move || state.language.get().strings().vote_button}
            </button>
        </div>
    }
}
