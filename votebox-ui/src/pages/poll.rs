//! Poll Page
//!
//! The single poll view: title, language picker, candidate cards,
//! live counts, and the results bar chart.

use leptos::*;

use crate::api;
use crate::components::{BarChart, CandidateCard, CardSkeleton, LanguagePicker};
use crate::state::global::GlobalState;

/// Poll page component
#[component]
pub fn Poll() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch candidates and tally on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_candidates().await {
                Ok(candidates) => {
                    state.candidates.set(candidates);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }

            match api::fetch_tally().await {
                Ok(tally) => {
                    state.tally.set(tally);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch tally: {}", e).into());
                }
            }

            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">
                        {move || state.language.get().strings().title}
                    </h1>
                    <p class="text-gray-400 mt-1">
                        {move || state.language.get().strings().subtitle}
                    </p>
                </div>

                <LanguagePicker />
            </div>

            // Candidate cards
            <section>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {move || {
                        let candidates = state.candidates.get();
                        if candidates.is_empty() {
                            (0..3).map(|_| view! { <CardSkeleton /> }.into_view()).collect_view()
                        } else {
                            candidates
                                .into_iter()
                                .map(|candidate| view! {
                                    <CandidateCard candidate=candidate />
                                }.into_view())
                                .collect_view()
                        }
                    }}
                </div>
            </section>

            // Live counts
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || state.language.get().strings().live_counts}
                </h2>
                <LiveCounts />
            </section>

            // Results chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || state.language.get().strings().chart_heading}
                </h2>
                <BarChart />
            </section>
        </div>
    }
}

/// Per-candidate counts with share bars, plus the total
#[component]
fn LiveCounts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-3">
            {move || {
                let tally = state.tally.get();
                let candidates = state.candidates.get();
                let language = state.language.get();
                let strings = language.strings();

                if tally.total == 0 {
                    return view! {
                        <p class="text-gray-400 text-sm">{strings.no_votes}</p>
                    }.into_view();
                }

                candidates.into_iter().map(|candidate| {
                    let count = tally.count(&candidate.id);
                    let share = tally.share(&candidate.id);

                    view! {
                        <div class="flex items-center space-x-4">
                            <span class="w-40 text-sm">{candidate.label(language).to_string()}</span>
                            <div class="flex-1 bg-gray-700 rounded h-4 overflow-hidden">
                                <div
                                    class="h-4 rounded"
                                    style=format!(
                                        "width: {:.1}%; background-color: {}",
                                        share, candidate.color
                                    )
                                />
                            </div>
                            <span class="w-24 text-right text-sm text-gray-300">
                                {format!("{} {} ({:.1}%)", count, strings.votes_suffix, share)}
                            </span>
                        </div>
                    }
                }).collect_view()
            }}

            <div class="pt-3 border-t border-gray-700 text-sm text-gray-400">
                {move || {
                    let strings = state.language.get().strings();
                    format!("{}: {}", strings.total_votes, state.tally.get().total)
                }}
            </div>
        </div>
    }
}
