use shared::{prefixed_error, DriveForm, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::forms::drive_form::DriveFormView;
use crate::components::navbar::Navbar;
use crate::components::notice::{Notice, NoticeBanner};
use crate::navigation::Navigator;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct UpdateDrivePageProps {
    pub api_client: ApiClient,
    pub navigator: Navigator,
    pub drive_id: String,
}

/// Edits an existing drive. Past dates are accepted here.
#[function_component(UpdateDrivePage)]
pub fn update_drive_page(props: &UpdateDrivePageProps) -> Html {
    let form = use_state(|| Option::<DriveForm>::None);
    let notice = use_state(|| Option::<Notice>::None);
    let submitting = use_state(|| false);

    use_effect_with((props.api_client.clone(), props.drive_id.clone()), {
        let form = form.clone();
        let notice = notice.clone();
        move |(api_client, drive_id)| {
            let api_client = api_client.clone();
            let drive_id = drive_id.clone();
            spawn_local(async move {
                match api_client.get_drive(&drive_id).await {
                    Ok(drive) => form.set(Some(DriveForm::from_payload(&drive.to_payload()))),
                    Err(e) => {
                        Logger::error_with_component("update-drive", &format!("Failed to load drive {}: {}", drive_id, e));
                        notice.set(Some(Notice::error("Failed to load drive data")));
                    }
                }
            });
            || ()
        }
    });

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: DriveForm| form.set(Some(next)))
    };

    let on_submit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let api_client = props.api_client.clone();
        let navigator = props.navigator.clone();
        let drive_id = props.drive_id.clone();

        Callback::from(move |_: ()| {
            let Some(current) = (*form).clone() else {
                return;
            };
            let payload = match current.validate_update() {
                Ok(payload) => payload,
                Err(e) => {
                    notice.set(Some(Notice::error(e.to_string())));
                    return;
                }
            };
            let api_client = api_client.clone();
            let navigator = navigator.clone();
            let notice = notice.clone();
            let submitting = submitting.clone();
            let drive_id = drive_id.clone();

            submitting.set(true);
            spawn_local(async move {
                match api_client.update_drive(&drive_id, &payload).await {
                    Ok(_) => {
                        notice.set(Some(Notice::success("Drive updated!")));
                        navigator.go_after_delay(Route::Dashboard);
                    }
                    Err(e) => {
                        notice.set(Some(Notice::error(prefixed_error("Update failed: ", &e))));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <>
            <Navbar navigator={props.navigator.clone()} />
            <div class="page form-page">
                <h2>{"Update Vaccination Drive"}</h2>
                <NoticeBanner notice={(*notice).clone()} />
                {match (*form).clone() {
                    Some(form) => html! {
                        <DriveFormView
                            form={form}
                            on_change={on_change}
                            on_submit={on_submit}
                            submit_label="Update Drive"
                            submitting={*submitting}
                        />
                    },
                    None => html! { <p class="loading">{"Loading..."}</p> },
                }}
            </div>
        </>
    }
}
