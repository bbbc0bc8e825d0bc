//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{
    AdminGuard, AuthGuard, ClientBlockedGuard, ClientGuard, ClientOnboardingGuard, FreelancerBlockedGuard,
    FreelancerGuard, FreelancerOnboardingGuard, GuestGuard, RoleSelectionGuard,
};
use crate::pages::frame::PageFrame;
use crate::state::auth::{self, AuthState};
use crate::util::navigation::{RestoreEpoch, install_restore_listeners};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the process-wide auth store, starts its lifecycle, and wraps
/// every guarded route in the guard for its category.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_store = RwSignal::new(AuthState::booting(None));
    let epoch = RestoreEpoch(RwSignal::new(0));
    provide_context(auth_store);
    provide_context(epoch);

    auth::init(auth_store);
    install_restore_listeners(epoch, move || auth::refresh_from_cache(auth_store));

    view! {
        <Stylesheet id="leptos" href="/pkg/gigboard.css"/>
        <Title text="Gigboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <PageFrame title="Gigboard"/> }/>

                <Route path=StaticSegment("login") view=|| view! { <GuestGuard><PageFrame title="Log in"/></GuestGuard> }/>
                <Route path=StaticSegment("signup") view=|| view! { <GuestGuard><PageFrame title="Sign up"/></GuestGuard> }/>
                <Route
                    path=StaticSegment("forgot-password")
                    view=|| view! { <GuestGuard><PageFrame title="Forgot password"/></GuestGuard> }
                />
                <Route
                    path=StaticSegment("reset-password")
                    view=|| view! { <GuestGuard><PageFrame title="Reset password"/></GuestGuard> }
                />
                <Route
                    path=StaticSegment("verify-otp")
                    view=|| view! { <GuestGuard><PageFrame title="Verify code"/></GuestGuard> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("login"))
                    view=|| view! { <GuestGuard><PageFrame title="Admin log in"/></GuestGuard> }
                />

                <Route
                    path=(StaticSegment("onboarding"), StaticSegment("role"))
                    view=|| view! { <RoleSelectionGuard><PageFrame title="Choose your role"/></RoleSelectionGuard> }
                />
                <Route
                    path=(StaticSegment("onboarding"), StaticSegment("client"))
                    view=|| view! { <ClientOnboardingGuard><PageFrame title="Client setup"/></ClientOnboardingGuard> }
                />
                <Route
                    path=(StaticSegment("onboarding"), StaticSegment("freelancer"))
                    view=|| view! {
                        <FreelancerOnboardingGuard><PageFrame title="Freelancer setup"/></FreelancerOnboardingGuard>
                    }
                />
                <Route
                    path=(StaticSegment("onboarding"), StaticSegment("freelancer"), ParamSegment("step"))
                    view=|| view! {
                        <FreelancerOnboardingGuard><PageFrame title="Freelancer setup"/></FreelancerOnboardingGuard>
                    }
                />

                <Route path=StaticSegment("client") view=|| view! { <ClientGuard><PageFrame title="Client dashboard"/></ClientGuard> }/>
                <Route
                    path=(StaticSegment("client"), StaticSegment("profile"))
                    view=|| view! { <ClientGuard><PageFrame title="Client profile"/></ClientGuard> }
                />
                <Route
                    path=(StaticSegment("client"), StaticSegment("blocked"))
                    view=|| view! { <ClientBlockedGuard><PageFrame title="Client account blocked"/></ClientBlockedGuard> }
                />

                <Route
                    path=StaticSegment("freelancer")
                    view=|| view! { <FreelancerGuard><PageFrame title="Freelancer dashboard"/></FreelancerGuard> }
                />
                <Route
                    path=(StaticSegment("freelancer"), StaticSegment("profile"))
                    view=|| view! { <FreelancerGuard><PageFrame title="Freelancer profile"/></FreelancerGuard> }
                />
                <Route
                    path=(StaticSegment("freelancer"), StaticSegment("blocked"))
                    view=|| view! {
                        <FreelancerBlockedGuard><PageFrame title="Freelancer account blocked"/></FreelancerBlockedGuard>
                    }
                />

                <Route path=StaticSegment("admin") view=|| view! { <AdminGuard><PageFrame title="Admin"/></AdminGuard> }/>

                <Route path=StaticSegment("messages") view=|| view! { <AuthGuard><PageFrame title="Messages"/></AuthGuard> }/>
                <Route
                    path=StaticSegment("notifications")
                    view=|| view! { <AuthGuard><PageFrame title="Notifications"/></AuthGuard> }
                />
                <Route path=StaticSegment("settings") view=|| view! { <AuthGuard><PageFrame title="Settings"/></AuthGuard> }/>
            </Routes>
        </Router>
    }
}
