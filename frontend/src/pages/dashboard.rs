use shared::Route;
use yew::prelude::*;

use crate::components::dashboard_stats::DashboardStatsTiles;
use crate::components::drive_table::DriveTable;
use crate::components::notice::NoticeBanner;
use crate::components::record_table::RecordTable;
use crate::components::report_modal::ReportModal;
use crate::components::report_panel::ReportPanel;
use crate::components::student_search::StudentSearchBar;
use crate::components::student_table::StudentTable;
use crate::hooks::use_drives::use_drives;
use crate::hooks::use_notice::use_notice;
use crate::hooks::use_report::use_report;
use crate::hooks::use_students::use_students;
use crate::navigation::Navigator;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api_client: ApiClient,
    pub navigator: Navigator,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let notice = use_notice();
    let drives = use_drives(&props.api_client, notice.show.clone());
    let students = use_students(&props.api_client, notice.show.clone());
    let report = use_report(&props.api_client, notice.show.clone());

    let go = |route: Route| {
        let navigator = props.navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.go(route.clone()))
    };

    let on_logout = {
        let navigator = props.navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.logout())
    };

    let on_edit_drive = {
        let navigator = props.navigator.clone();
        Callback::from(move |id: i64| navigator.go(Route::UpdateDrive(id.to_string())))
    };

    let on_edit_student = {
        let navigator = props.navigator.clone();
        Callback::from(move |id: String| navigator.go(Route::UpdateStudent(id)))
    };

    let drives_section = if drives.state.loading && drives.state.drives.is_empty() {
        html! { <p class="loading">{"Loading..."}</p> }
    } else if let Some(error) = drives.state.error.as_ref() {
        html! { <div class="form-message error">{error}</div> }
    } else {
        html! {
            <DriveTable
                drives={drives.state.sorted_drives.clone()}
                on_edit={on_edit_drive}
                on_decide={drives.actions.decide.clone()}
            />
        }
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{"Vaccination Dashboard"}</h1>
                <button class="btn btn-danger" onclick={on_logout}>{"Logout"}</button>
            </header>

            <NoticeBanner notice={notice.notice.clone()} on_dismiss={Some(notice.dismiss.clone())} />

            <DashboardStatsTiles api_client={props.api_client.clone()} />

            <section class="dashboard-section">
                <div class="section-header">
                    <h2>{"Vaccination Drives"}</h2>
                    <button class="btn btn-primary" onclick={go(Route::CreateDrive)}>{"Create Drive"}</button>
                </div>
                {drives_section}
            </section>

            <section class="dashboard-section">
                <h2>{"Vaccination Records"}</h2>
                <RecordTable
                    records={drives.state.records.clone()}
                    on_vaccinate={drives.actions.vaccinate.clone()}
                />
            </section>

            <section class="dashboard-section">
                <h2>{"Reports"}</h2>
                <ReportPanel
                    workflow={report.workflow.clone()}
                    drives={drives.state.drives.clone()}
                    actions={report.actions.clone()}
                />
                <ReportModal workflow={report.workflow.clone()} actions={report.actions.clone()} />
            </section>

            <section class="dashboard-section">
                <div class="section-header">
                    <h2>{"Students"}</h2>
                    <div class="section-actions">
                        <button class="btn btn-primary" onclick={go(Route::CreateStudent)}>{"Add New Student"}</button>
                        <button class="btn btn-secondary" onclick={go(Route::BulkUpload)}>{"Bulk Upload CSV"}</button>
                    </div>
                </div>
                <StudentSearchBar on_search={students.actions.search.clone()} />
                {if students.loading {
                    html! { <p class="loading">{"Loading..."}</p> }
                } else {
                    html! {
                        <StudentTable
                            students={students.students.clone()}
                            on_edit={on_edit_student}
                            on_delete={students.actions.delete.clone()}
                        />
                    }
                }}
            </section>
        </div>
    }
}
