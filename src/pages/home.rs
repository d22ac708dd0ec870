//! Public storefront landing page. No guard installed.

use leptos::prelude::*;

/// Home page — public menu shell with a sign-in link.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Milk Tea House"</h1>
            <p>"Freshly brewed. Browse the menu, or sign in to see your orders."</p>
            <a href="/login" class="home-page__login-link">
                "Sign in"
            </a>
        </div>
    }
}
