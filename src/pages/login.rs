//! Login page

use leptos::prelude::*;
use leptos_meta::Title;
use crate::components::{CredentialForm, FormKind, Header};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login - gosearch" />
        <div class="min-h-screen flex flex-col bg-gray-900 text-gray-100">
            <Header />
            <main class="flex flex-col items-center justify-center flex-grow p-4">
                <CredentialForm kind=FormKind::Login />
            </main>
        </div>
    }
}
