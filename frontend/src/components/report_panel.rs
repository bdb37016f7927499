use shared::{ParamKey, ReportKind, ReportWorkflow, VaccinationDrive};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_report::UseReportActions;

#[derive(Properties, PartialEq)]
pub struct ReportPanelProps {
    pub workflow: ReportWorkflow,
    /// Drives offered as choices for the per-drive report
    pub drives: Vec<VaccinationDrive>,
    pub actions: UseReportActions,
}

#[function_component(ReportPanel)]
pub fn report_panel(props: &ReportPanelProps) -> Html {
    let selected_kind = props.workflow.kind();

    let on_kind_change = {
        let select_kind = props.actions.select_kind.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            select_kind.emit(ReportKind::parse(&value));
        })
    };

    let param_value = |key: ParamKey| {
        props
            .workflow
            .selection()
            .and_then(|s| s.param(key))
            .unwrap_or_default()
            .to_string()
    };

    let params = match selected_kind {
        Some(ReportKind::Drive) => {
            let set_param = props.actions.set_param.clone();
            let current = param_value(ParamKey::DriveId);
            html! {
                <select
                    class="report-param"
                    onchange={Callback::from(move |e: Event| {
                        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                        set_param.emit((ParamKey::DriveId, value));
                    })}
                >
                    <option value="" selected={current.is_empty()}>{"Select a drive"}</option>
                    {for props.drives.iter().map(|drive| {
                        let id = drive.id.to_string();
                        html! {
                            <option value={id.clone()} selected={current == id}>
                                {format!("{} — {}", drive.vaccine_name, drive.drive_date)}
                            </option>
                        }
                    })}
                </select>
            }
        }
        Some(ReportKind::Class) => {
            let set_param = props.actions.set_param.clone();
            html! {
                <input
                    type="text"
                    class="report-param"
                    placeholder="Class (e.g., 5A)"
                    value={param_value(ParamKey::ClassName)}
                    oninput={Callback::from(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                        set_param.emit((ParamKey::ClassName, value));
                    })}
                />
            }
        }
        _ => html! {},
    };

    let on_preview = {
        let preview = props.actions.preview.clone();
        Callback::from(move |_: MouseEvent| preview.emit(()))
    };

    html! {
        <div class="report-panel">
            <select class="report-kind" onchange={on_kind_change}>
                <option value="" selected={selected_kind.is_none()}>{"Select report"}</option>
                {for ReportKind::ALL.into_iter().map(|kind| html! {
                    <option value={kind.slug()} selected={selected_kind == Some(kind)}>
                        {kind.label()}
                    </option>
                })}
            </select>
            {params}
            <button class="btn btn-preview" disabled={!props.workflow.can_preview()} onclick={on_preview}>{"Preview"}</button>
        </div>
    }
}
