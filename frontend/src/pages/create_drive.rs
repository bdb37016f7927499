use shared::{prefixed_error, DriveForm, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::forms::drive_form::DriveFormView;
use crate::components::navbar::Navbar;
use crate::components::notice::{Notice, NoticeBanner};
use crate::navigation::Navigator;
use crate::services::api::ApiClient;
use crate::services::date_utils::{today, today_string};

const SUCCESS: &str = "Vaccination drive created successfully!";

#[derive(Properties, PartialEq)]
pub struct CreateDrivePageProps {
    pub api_client: ApiClient,
    pub navigator: Navigator,
}

#[function_component(CreateDrivePage)]
pub fn create_drive_page(props: &CreateDrivePageProps) -> Html {
    let form = use_state(DriveForm::default);
    let notice = use_state(|| Option::<Notice>::None);
    let submitting = use_state(|| false);

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: DriveForm| form.set(next))
    };

    let on_submit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let api_client = props.api_client.clone();
        let navigator = props.navigator.clone();

        Callback::from(move |_: ()| {
            let payload = match form.validate_new(today()) {
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

            submitting.set(true);
            spawn_local(async move {
                match api_client.create_drive(&payload).await {
                    Ok(_) => {
                        notice.set(Some(Notice::success(SUCCESS)));
                        navigator.go_after_delay(Route::Dashboard);
                    }
                    Err(e) => {
                        notice.set(Some(Notice::error(prefixed_error("Creation failed: ", &e))));
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
                <h2>{"Create Vaccination Drive"}</h2>
                <NoticeBanner notice={(*notice).clone()} />
                <DriveFormView
                    form={(*form).clone()}
                    on_change={on_change}
                    on_submit={on_submit}
                    submit_label="Create Drive"
                    min_date={Some(AttrValue::from(today_string()))}
                    submitting={*submitting}
                />
            </div>
        </>
    }
}
