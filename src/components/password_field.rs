//! Masked password input with a show/hide visibility toggle.

use leptos::prelude::*;

use crate::state::login::LoginForm;

/// Password input bound to the login form, with an eye icon that toggles
/// between masked and plain-text rendering.
#[component]
pub fn PasswordField(form: RwSignal<LoginForm>) -> impl IntoView {
    let input_type = move || {
        if form.get().show_password {
            "text"
        } else {
            "password"
        }
    };

    view! {
        <div class="password-field">
            <input
                class="password-field__input"
                type=input_type
                placeholder="Password"
                prop:value=move || form.get().password
                on:input=move |ev| form.update(|f| f.update_password(event_target_value(&ev)))
            />
            <button
                class="password-field__toggle"
                type="button"
                title="Show or hide password"
                on:click=move |_| form.update(LoginForm::toggle_visibility)
            >
                {move || {
                    if form.get().show_password {
                        eye_off_icon().into_any()
                    } else {
                        eye_icon().into_any()
                    }
                }}
            </button>
        </div>
    }
}

/// Open-eye icon shown while the password is masked.
fn eye_icon() -> impl IntoView {
    view! {
        <svg class="password-field__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"></path>
            <circle cx="12" cy="12" r="3"></circle>
        </svg>
    }
}

/// Crossed-eye icon shown while the password is revealed.
fn eye_off_icon() -> impl IntoView {
    view! {
        <svg class="password-field__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19m-6.72-1.07a3 3 0 1 1-4.24-4.24"></path>
            <line x1="1" y1="1" x2="23" y2="23"></line>
        </svg>
    }
}
