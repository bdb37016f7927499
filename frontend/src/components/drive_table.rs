use shared::{StatusDecision, VaccinationDrive};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DriveTableProps {
    pub drives: Vec<VaccinationDrive>,
    pub on_edit: Callback<i64>,
    pub on_decide: Callback<(i64, StatusDecision)>,
}

/// Upcoming drives, pending ones first. Approve and Reject are offered only
/// while a drive awaits a decision.
#[function_component(DriveTable)]
pub fn drive_table(props: &DriveTableProps) -> Html {
    if props.drives.is_empty() {
        return html! { <p class="empty-state">{"No upcoming drives."}</p> };
    }

    html! {
        <table class="data-table drive-table">
            <thead>
                <tr>
                    <th>{"Vaccine"}</th>
                    <th>{"Date"}</th>
                    <th>{"Doses"}</th>
                    <th>{"Classes"}</th>
                    <th>{"Status"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.drives.iter().map(|drive| {
                    let id = drive.id;
                    let on_edit = {
                        let on_edit = props.on_edit.clone();
                        Callback::from(move |_: MouseEvent| on_edit.emit(id))
                    };
                    let decision_button = |decision: StatusDecision, label: &'static str, class: &'static str| {
                        let on_decide = props.on_decide.clone();
                        html! {
                            <button
                                class={classes!("btn", class)}
                                onclick={Callback::from(move |_: MouseEvent| on_decide.emit((id, decision)))}
                            >
                                {label}
                            </button>
                        }
                    };

                    html! {
                        <tr key={id.to_string()}>
                            <td>{&drive.vaccine_name}</td>
                            <td>{&drive.drive_date}</td>
                            <td>{drive.available_doses}</td>
                            <td>{drive.classes_label()}</td>
                            <td class={classes!("status", drive.status.as_str().to_lowercase())}>
                                {drive.status.as_str()}
                            </td>
                            <td class="actions">
                                <button class="btn btn-edit" disabled={!drive.can_edit()} onclick={on_edit}>
                                    {"Edit"}
                                </button>
                                {if drive.awaiting_decision() {
                                    html! {
                                        <>
                                            {decision_button(StatusDecision::Approve, "Approve", "btn-approve")}
                                            {decision_button(StatusDecision::Reject, "Reject", "btn-reject")}
                                        </>
                                    }
                                } else { html! {} }}
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
