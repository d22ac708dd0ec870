//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{account::AccountPage, admin::AdminDashboardPage, home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

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
/// Provides shared state contexts, bootstraps the session from
/// `/api/auth/me`, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    // Bootstrap: resolve the current session once on the client. Fetch
    // failures and anonymous visitors both land on the logged-out record.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let session = match crate::net::api::fetch_current_user().await {
                Some(user) => crate::state::auth::Session::logged_in(user),
                None => crate::state::auth::Session::logged_out(),
            };
            log::debug!("session bootstrap: logged={}", session.is_logged);
            auth.set(AuthState {
                session,
                loading: false,
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/milktea-client.css"/>
        <Title text="Milk Tea House"/>

        <ToastList/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
                <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
            </Routes>
        </Router>
    }
}

/// Queued notifications rendered as dismissible banners.
#[component]
fn ToastList() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let message = toast.message;
                    view! {
                        <div class="toast toast--error">
                            <span>{message}</span>
                            <button class="toast__dismiss" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
