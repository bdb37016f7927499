use shared::{add_student_error, next_student_id, Route, StudentForm};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::forms::student_form::StudentFormView;
use crate::components::navbar::Navbar;
use crate::components::notice::{Notice, NoticeBanner};
use crate::navigation::Navigator;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AddStudentPageProps {
    pub api_client: ApiClient,
    pub navigator: Navigator,
}

/// New student form. The id is proposed from the current student list and
/// cannot be edited; the backend still rejects duplicates.
#[function_component(AddStudentPage)]
pub fn add_student_page(props: &AddStudentPageProps) -> Html {
    let form = use_state(StudentForm::default);
    let proposed_id = use_state(String::new);
    let notice = use_state(|| Option::<Notice>::None);
    let submitting = use_state(|| false);

    use_effect_with(props.api_client.clone(), {
        let proposed_id = proposed_id.clone();
        move |api_client| {
            let api_client = api_client.clone();
            spawn_local(async move {
                let students = match api_client.get_students().await {
                    Ok(students) => students,
                    Err(e) => {
                        Logger::warn_with_component("add-student", &format!("Could not load students: {}", e));
                        Vec::new()
                    }
                };
                proposed_id.set(next_student_id(&students));
            });
            || ()
        }
    });

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: StudentForm| form.set(next))
    };

    let current = StudentForm {
        student_id: (*proposed_id).clone(),
        ..(*form).clone()
    };

    let on_submit = {
        let current = current.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let api_client = props.api_client.clone();
        let navigator = props.navigator.clone();

        Callback::from(move |_: ()| {
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

            submitting.set(true);
            spawn_local(async move {
                match api_client.create_student(&payload).await {
                    Ok(()) => {
                        notice.set(Some(Notice::success("Student added successfully!")));
                        navigator.go_after_delay(Route::Dashboard);
                    }
                    Err(e) => {
                        notice.set(Some(Notice::error(add_student_error(&e))));
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
                <h2>{"Add Student"}</h2>
                <NoticeBanner notice={(*notice).clone()} />
                <StudentFormView
                    form={current}
                    on_change={on_change}
                    on_submit={on_submit}
                    submit_label="Add Student"
                    submitting={*submitting}
                />
            </div>
        </>
    }
}
