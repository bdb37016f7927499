use shared::{Route, StudentForm};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::forms::student_form::StudentFormView;
use crate::components::navbar::Navbar;
use crate::components::notice::{Notice, NoticeBanner};
use crate::navigation::Navigator;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct UpdateStudentPageProps {
    pub api_client: ApiClient,
    pub navigator: Navigator,
    pub student_id: String,
}

#[function_component(UpdateStudentPage)]
pub fn update_student_page(props: &UpdateStudentPageProps) -> Html {
    let form = use_state(|| Option::<StudentForm>::None);
    let notice = use_state(|| Option::<Notice>::None);
    let submitting = use_state(|| false);

    use_effect_with((props.api_client.clone(), props.student_id.clone()), {
        let form = form.clone();
        let notice = notice.clone();
        move |(api_client, student_id)| {
            let api_client = api_client.clone();
            let student_id = student_id.clone();
            spawn_local(async move {
                match api_client.get_student(&student_id).await {
                    Ok(student) => form.set(Some(StudentForm::from_student(&student))),
                    Err(e) => {
                        Logger::error_with_component("update-student", &format!("Failed to fetch {}: {}", student_id, e));
                        notice.set(Some(Notice::error("Failed to fetch student")));
                    }
                }
            });
            || ()
        }
    });

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: StudentForm| form.set(Some(next)))
    };

    let on_submit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let api_client = props.api_client.clone();
        let navigator = props.navigator.clone();
        let student_id = props.student_id.clone();

        Callback::from(move |_: ()| {
            let Some(current) = (*form).clone() else {
                return;
            };
            let payload = match current.validate() {
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
            let student_id = student_id.clone();

            submitting.set(true);
            spawn_local(async move {
                match api_client.update_student(&student_id, &payload).await {
                    Ok(()) => {
                        notice.set(Some(Notice::success("Student updated successfully!")));
                        navigator.go_after_delay(Route::Dashboard);
                    }
                    Err(e) => {
                        notice.set(Some(Notice::error(e.message_or("Failed to update student"))));
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
                <h2>{"Update Student"}</h2>
                <NoticeBanner notice={(*notice).clone()} />
                {match (*form).clone() {
                    Some(form) => html! {
                        <StudentFormView
                            form={form}
                            on_change={on_change}
                            on_submit={on_submit}
                            submit_label="Update Student"
                            submitting={*submitting}
                        />
                    },
                    None => html! { <p class="loading">{"Loading..."}</p> },
                }}
            </div>
        </>
    }
}
