use gloo::history::{BrowserHistory, History};
use shared::{resolve, Access, Route, Session};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod navigation;
mod pages;
mod services;

use navigation::{Navigator, Redirect};
use pages::add_student::AddStudentPage;
use pages::bulk_upload::BulkUploadPage;
use pages::create_drive::CreateDrivePage;
use pages::dashboard::DashboardPage;
use pages::login::LoginPage;
use pages::not_found::NotFoundPage;
use pages::update_drive::UpdateDrivePage;
use pages::update_student::UpdateStudentPage;
use services::api::ApiClient;
use services::logging::Logger;
use services::session::SessionStore;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        let config = config::load();
        Logger::init(config.log_level);
        Logger::info_with_component("app", &format!("API base URL: {}", config.api_base_url));
        config
    });
    let session_store = use_memo(config.clone(), |config| SessionStore::new(config));
    let session = use_state({
        let session_store = session_store.clone();
        move || session_store.load()
    });
    let history = use_memo((), |_| BrowserHistory::new());
    let route = use_state({
        let history = history.clone();
        move || Route::parse(&history.location().path())
    });

    // Follow back/forward and every push made through the navigator.
    use_effect_with((), {
        let history = history.clone();
        let route = route.clone();
        move |_| {
            let listener = {
                let current = history.clone();
                history.listen(move || route.set(Route::parse(&current.location().path())))
            };
            move || drop(listener)
        }
    });

    let navigator = use_memo((), {
        let history = history.clone();
        let session = session.clone();
        let session_store = session_store.clone();
        let redirect_delay_ms = config.redirect_delay_ms;
        move |_| {
            let on_navigate = {
                let history = history.clone();
                Callback::from(move |route: Route| history.push(route.path()))
            };
            let on_logout = {
                let history = history.clone();
                Callback::from(move |_: ()| {
                    session.set(session_store.clear());
                    Logger::info_with_component("app", "Signed out");
                    history.push(Route::Login.path());
                })
            };
            Navigator {
                on_navigate,
                on_logout,
                redirect_delay_ms,
            }
        }
    });

    let api_client = ApiClient::new(&config, (*session).clone());

    let on_login = {
        let session = session.clone();
        let navigator = (*navigator).clone();
        Callback::from(move |next: Session| {
            session.set(next);
            navigator.go(Route::Dashboard);
        })
    };

    let current = (*route).clone();
    let navigator = (*navigator).clone();

    match resolve(&current, &session) {
        Access::Redirect(to) => html! { <Redirect to={to} navigator={navigator} /> },
        Access::Render => match current {
            Route::Login => html! {
                <LoginPage
                    api_client={api_client}
                    session_store={(*session_store).clone()}
                    on_login={on_login}
                />
            },
            Route::Dashboard => html! { <DashboardPage api_client={api_client} navigator={navigator} /> },
            Route::CreateDrive => html! { <CreateDrivePage api_client={api_client} navigator={navigator} /> },
            Route::UpdateDrive(drive_id) => html! {
                <UpdateDrivePage api_client={api_client} navigator={navigator} drive_id={drive_id} />
            },
            Route::CreateStudent => html! { <AddStudentPage api_client={api_client} navigator={navigator} /> },
            Route::UpdateStudent(student_id) => html! {
                <UpdateStudentPage api_client={api_client} navigator={navigator} student_id={student_id} />
            },
            Route::BulkUpload => html! { <BulkUploadPage api_client={api_client} navigator={navigator} /> },
            Route::NotFound => html! { <NotFoundPage navigator={navigator} /> },
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
