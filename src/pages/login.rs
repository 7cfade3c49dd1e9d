//! Login page with a username/password form.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Login page — submits credentials, caches the issued token, and updates
/// the session mirror before navigating home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("Username and password are required".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let user = user.trim().to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(resp) => {
                        crate::util::credentials::store(
                            &resp.token.access_token,
                            &resp.user.username,
                            resp.user.role.as_str(),
                        );
                        session.set(SessionState::logged_in(
                            resp.user.id,
                            resp.user.username,
                            resp.user.role,
                            Some(resp.token.access_token),
                        ));
                        crate::util::browser::redirect("/");
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(Some("Incorrect username or password".to_owned()));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pass, &session);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Tourism Guide"</h1>
            <p>"Sign in to review destinations and plan routes."</p>
            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="login-page__label">
                    "Username"
                    <input
                        class="login-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                        }
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit">
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
