use shared::validation::validate_credentials;
use shared::{LoginRequest, Session};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notice::{Notice, NoticeBanner};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session::SessionStore;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub api_client: ApiClient,
    pub session_store: SessionStore,
    /// Receives the stored session after a successful login
    pub on_login: Callback<Session>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let notice = use_state(|| Option::<Notice>::None);
    let submitting = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            username.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let api_client = props.api_client.clone();
        let session_store = props.session_store.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = validate_credentials(&username, &password) {
                notice.set(Some(Notice::error(err.to_string())));
                return;
            }

            let request = LoginRequest {
                username: username.trim().to_string(),
                password: (*password).clone(),
            };
            let api_client = api_client.clone();
            let session_store = session_store.clone();
            let on_login = on_login.clone();
            let notice = notice.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            spawn_local(async move {
                match api_client.login(&request).await {
                    Ok(response) => match session_store.save(&response.token) {
                        Ok(session) => {
                            Logger::info_with_component("login", "Signed in");
                            on_login.emit(session);
                        }
                        Err(e) => {
                            Logger::error_with_component("login", &format!("Could not store token: {}", e));
                            notice.set(Some(Notice::error("Login failed")));
                        }
                    },
                    Err(e) => {
                        Logger::warn_with_component("login", &format!("Login rejected: {}", e));
                        notice.set(Some(Notice::error(e.message_or("Login failed"))));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-page">
            <form class="entity-form login-form" onsubmit={on_submit}>
                <h2>{"Admin Login"}</h2>
                <NoticeBanner notice={(*notice).clone()} />
                <label for="username">{"Username"}</label>
                <input id="username" type="text" value={(*username).clone()} oninput={on_username} />
                <label for="password">{"Password"}</label>
                <input id="password" type="password" value={(*password).clone()} oninput={on_password} />
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
