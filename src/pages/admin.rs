//! Back-office dashboard, restricted to staff and admins.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::guard::decision::AccessRequest;
use crate::guard::gate::{self, install_route_guard};
use crate::guard::policy::RolePolicy;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

fn dashboard_policy() -> RolePolicy {
    RolePolicy::new(&[Role::Staff, Role::Admin])
}

/// Admin dashboard page — statistics and management shell behind the guard.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    install_route_guard(
        auth,
        toasts,
        AccessRequest {
            current_path: "/dashboard".to_owned(),
            allowed_roles: dashboard_policy(),
            redirect_target: "/login".to_owned(),
        },
        navigate,
    );

    view! {
        <Show
            when=move || gate::allowed(&auth.get(), &dashboard_policy())
            fallback=move || view! { <p>"Loading..."</p> }
        >
            <div class="dashboard-page">
                <h1>"Dashboard"</h1>
                <p>"Statistics and management panels will appear here."</p>
            </div>
        </Show>
    }
}
