//! Customer account page with order history, open to any signed-in role.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::guard::decision::AccessRequest;
use crate::guard::gate::{self, install_route_guard};
use crate::guard::policy::RolePolicy;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

fn account_policy() -> RolePolicy {
    RolePolicy::new(&[Role::User, Role::Staff, Role::Admin])
}

/// Account page — order history shell behind the route guard.
#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    install_route_guard(
        auth,
        toasts,
        AccessRequest {
            current_path: "/account".to_owned(),
            allowed_roles: account_policy(),
            redirect_target: "/login".to_owned(),
        },
        navigate,
    );

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|state| state.session = crate::state::auth::Session::logged_out());
            });
        }
    };

    view! {
        <Show
            when=move || gate::allowed(&auth.get(), &account_policy())
            fallback=move || view! { <p>"Loading..."</p> }
        >
            <div class="account-page">
                <h1>"Your Orders"</h1>
                <p>"Order history will appear here."</p>
                <button class="btn account-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </Show>
    }
}
