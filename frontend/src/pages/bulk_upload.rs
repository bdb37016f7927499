use shared::validation::validate_upload_file_name;
use shared::Route;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::notice::{Notice, NoticeBanner};
use crate::navigation::Navigator;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Static template served next to the app.
const TEMPLATE_PATH: &str = "/bulk-upload.csv";

#[derive(Properties, PartialEq)]
pub struct BulkUploadPageProps {
    pub api_client: ApiClient,
    pub navigator: Navigator,
}

#[function_component(BulkUploadPage)]
pub fn bulk_upload_page(props: &BulkUploadPageProps) -> Html {
    let file = use_state(|| Option::<File>::None);
    let notice = use_state(|| Option::<Notice>::None);
    let uploading = use_state(|| false);

    let on_file_change = {
        let file = file.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            file.set(input.files().and_then(|files| files.get(0)));
        })
    };

    let on_submit = {
        let file = file.clone();
        let notice = notice.clone();
        let uploading = uploading.clone();
        let api_client = props.api_client.clone();
        let navigator = props.navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let selected = (*file).clone();
            let name = selected.as_ref().map(File::name);
            if let Err(err) = validate_upload_file_name(name.as_deref()) {
                notice.set(Some(Notice::error(err.to_string())));
                return;
            }
            let Some(selected) = selected else {
                return;
            };
            let api_client = api_client.clone();
            let navigator = navigator.clone();
            let notice = notice.clone();
            let uploading = uploading.clone();

            uploading.set(true);
            spawn_local(async move {
                match api_client.bulk_upload(&selected).await {
                    Ok(_) => {
                        Logger::info_with_component("bulk-upload", &format!("Uploaded {}", selected.name()));
                        notice.set(Some(Notice::success("Students uploaded successfully!")));
                        navigator.go_after_delay(Route::Dashboard);
                    }
                    Err(e) => {
                        Logger::error_with_component("bulk-upload", &format!("Upload failed: {}", e));
                        notice.set(Some(Notice::error(e.message_or("Bulk upload failed"))));
                        uploading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <>
            <Navbar navigator={props.navigator.clone()} />
            <div class="page form-page">
                <h2>{"Bulk Upload Students"}</h2>
                <p>
                    {"Download the "}
                    <a href={TEMPLATE_PATH} download="bulk-upload.csv">{"CSV template"}</a>
                    {" and fill in one student per row."}
                </p>
                <NoticeBanner notice={(*notice).clone()} />
                <form class="entity-form upload-form" onsubmit={on_submit}>
                    <input type="file" accept=".csv" onchange={on_file_change} />
                    <button type="submit" class="btn btn-primary" disabled={*uploading}>
                        {if *uploading { "Uploading..." } else { "Upload" }}
                    </button>
                </form>
            </div>
        </>
    }
}
