//! Minimal page frame used by every route until its feature view lands.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};

/// Titled page frame with a sign-out action for signed-in users.
#[component]
pub fn PageFrame(#[prop(into)] title: String) -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth_state.with(|s| s.user.is_some());

    view! {
        <main class="page">
            <header class="page__header">
                <h1>{title}</h1>
                <Show when=signed_in>
                    <button class="page__sign-out" on:click=move |_| auth::sign_out(auth_state)>
                        "Sign out"
                    </button>
                </Show>
            </header>
        </main>
    }
}
