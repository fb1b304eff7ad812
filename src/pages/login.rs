//! Login / sign-up page with a controlled form.

use leptos::prelude::*;

use crate::components::password_field::PasswordField;
use crate::state::login::LoginForm;

/// Login page — email and password inputs and a Continue button that stays
/// disabled once the form has been submitted.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |_| {
        let credentials = form.write().submit();

        // The authentication backend is out of scope; surface the payload
        // it would have received.
        match serde_json::to_string(&credentials) {
            Ok(json) => log::info!("login submitted: {json}"),
            Err(err) => log::warn!("login payload not serializable: {err}"),
        }
    };

    view! {
        <div class="login-page">
            <h1 class="login-page__brand">"Cred Saathi"</h1>
            <h2 class="login-page__heading">"Log in or sign up"</h2>

            <input
                class="login-page__input"
                type="email"
                placeholder="Email address"
                prop:value=move || form.get().email
                on:input=move |ev| form.update(|f| f.update_email(event_target_value(&ev)))
            />

            <PasswordField form=form/>

            <button
                class="btn btn--primary login-page__submit"
                on:click=on_submit
                disabled=move || form.get().submitted
            >
                "Continue"
            </button>
        </div>
    }
}
