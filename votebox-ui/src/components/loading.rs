//! Loading Component
//!
//! Skeleton states shown while the candidate set loads.

use leptos::*;

/// Skeleton loader for candidate cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 animate-pulse">
            <div class="h-24 bg-gray-700 rounded w-24 mx-auto mb-4" />
            <div class="h-6 bg-gray-700 rounded w-2/3 mx-auto mb-2" />
            <div class="h-10 bg-gray-700 rounded w-full" />
        </div>
    }
}
