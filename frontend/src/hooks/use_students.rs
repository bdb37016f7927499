use std::rc::Rc;

use gloo::dialogs::confirm;
use shared::{Student, StudentSearch};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notice::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, Default, PartialEq)]
pub struct StudentList {
    pub students: Vec<Student>,
}

pub enum StudentListAction {
    Replace(Vec<Student>),
    Remove(String),
}

impl Reducible for StudentList {
    type Action = StudentListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StudentListAction::Replace(students) => Rc::new(StudentList { students }),
            StudentListAction::Remove(student_id) => {
                let students = self
                    .students
                    .iter()
                    .filter(|s| s.student_id != student_id)
                    .cloned()
                    .collect();
                Rc::new(StudentList { students })
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseStudentsActions {
    pub refresh: Callback<()>,
    pub search: Callback<StudentSearch>,
    pub delete: Callback<String>,
}

pub struct UseStudentsResult {
    pub students: Vec<Student>,
    pub loading: bool,
    pub actions: UseStudentsActions,
}

#[hook]
pub fn use_students(api_client: &ApiClient, on_notice: Callback<Notice>) -> UseStudentsResult {
    let list = use_reducer(StudentList::default);
    let loading = use_state(|| true);

    let refresh = {
        let list = list.clone();
        let loading = loading.clone();

        use_callback(api_client.clone(), move |_: (), api_client| {
            let api_client = api_client.clone();
            let list = list.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.get_students().await {
                    Ok(students) => list.dispatch(StudentListAction::Replace(students)),
                    Err(e) => Logger::error_with_component(
                        "students",
                        &format!("Error fetching students: {}", e),
                    ),
                }
                loading.set(false);
            });
        })
    };

    // The search result replaces the list; an empty filter set returns everyone.
    let search = {
        let list = list.clone();
        let on_notice = on_notice.clone();

        use_callback(api_client.clone(), move |filters: StudentSearch, api_client| {
            let api_client = api_client.clone();
            let list = list.clone();
            let on_notice = on_notice.clone();

            spawn_local(async move {
                match api_client.search_students(&filters).await {
                    Ok(students) => list.dispatch(StudentListAction::Replace(students)),
                    Err(e) => {
                        Logger::error_with_component("students", &format!("Search failed: {}", e));
                        on_notice.emit(Notice::error("Failed to search students"));
                    }
                }
            });
        })
    };

    let delete = {
        let list = list.clone();
        let on_notice = on_notice.clone();

        use_callback(api_client.clone(), move |student_id: String, api_client| {
            if !confirm("Are you sure you want to delete this student?") {
                return;
            }
            let api_client = api_client.clone();
            let list = list.clone();
            let on_notice = on_notice.clone();

            spawn_local(async move {
                match api_client.delete_student(&student_id).await {
                    Ok(()) => {
                        Logger::info_with_component("students", &format!("Deleted student {}", student_id));
                        list.dispatch(StudentListAction::Remove(student_id));
                    }
                    Err(e) => {
                        Logger::error_with_component("students", &format!("Delete failed: {}", e));
                        on_notice.emit(Notice::error("Failed to delete student"));
                    }
                }
            });
        })
    };

    use_effect_with(api_client.clone(), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseStudentsResult {
        students: list.students.clone(),
        loading: *loading,
        actions: UseStudentsActions {
            refresh,
            search,
            delete,
        },
    }
}
