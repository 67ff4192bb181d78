//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::error_banner::ErrorBanner;
use crate::pages::{
    board::BoardPage, dashboard::DashboardPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::boards::BoardsState;
use crate::state::errors::ErrorsState;
use crate::state::invitations::InvitationsState;
use crate::state::lists::ListsState;
use crate::state::tasks::TasksState;

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
/// Provides the per-resource store contexts and sets up client-side
/// routing. The auth store seeds itself from persisted tokens, so a
/// reloaded tab stays signed in.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::load());
    let boards = RwSignal::new(BoardsState::default());
    let lists = RwSignal::new(ListsState::default());
    let tasks = RwSignal::new(TasksState::default());
    let invitations = RwSignal::new(InvitationsState::default());
    let errors = RwSignal::new(ErrorsState::default());

    provide_context(auth);
    provide_context(boards);
    provide_context(lists);
    provide_context(tasks);
    provide_context(invitations);
    provide_context(errors);

    // Probe the session once at startup so pages have the user record.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::state::auth::fetch_current_user(auth).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/taskboard.css"/>
        <Title text="Taskboard"/>

        <ErrorBanner/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("board"), ParamSegment("id")) view=BoardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
