use shared::report::row_key;
use shared::{Cell, ExportFormat, ReportWorkflow};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_report::UseReportActions;

#[derive(Properties, PartialEq)]
pub struct ReportModalProps {
    pub workflow: ReportWorkflow,
    pub actions: UseReportActions,
}

fn render_cell(cell: Cell) -> Html {
    match cell {
        Cell::Text(text) => html! { {text} },
        Cell::Lines(lines) => html! {
            {for lines.into_iter().map(|line| html! { <div>{line}</div> })}
        },
    }
}

/// Preview of the selected report with the export controls.
#[function_component(ReportModal)]
pub fn report_modal(props: &ReportModalProps) -> Html {
    let workflow = &props.workflow;
    let Some(kind) = workflow.kind().filter(|_| workflow.is_preview_open()) else {
        return html! {};
    };
    let columns = kind.columns();

    let on_format_change = {
        let set_export_format = props.actions.set_export_format.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            set_export_format.emit(ExportFormat::parse(&value));
        })
    };

    let on_download = {
        let export = props.actions.export.clone();
        Callback::from(move |_: MouseEvent| export.emit(()))
    };

    let on_close = {
        let close_preview = props.actions.close_preview.clone();
        Callback::from(move |_: MouseEvent| close_preview.emit(()))
    };

    let body = if workflow.rows().is_empty() {
        html! { <p class="empty-state">{"No data to display"}</p> }
    } else {
        html! {
            <table class="data-table report-table">
                <thead>
                    <tr>
                        {for columns.iter().map(|column| html! { <th>{column.label}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for workflow.rows().iter().enumerate().map(|(index, row)| html! {
                        <tr key={row_key(row, index)}>
                            {for columns.iter().map(|column| html! {
                                <td>{render_cell(column.render(row))}</td>
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
        }
    };

    let selected_format = workflow.export_format();

    html! {
        <div class="modal-overlay">
            <div class="modal report-modal">
                <h2>{format!("Preview: {}", kind.label())}</h2>
                <div class="report-body">{body}</div>
                <div class="modal-actions">
                    <select class="export-format" onchange={on_format_change}>
                        <option value="" selected={selected_format.is_none()}>{"Select format"}</option>
                        {for ExportFormat::ALL.into_iter().map(|format| html! {
                            <option value={format.as_str()} selected={selected_format == Some(format)}>
                                {format.label()}
                            </option>
                        })}
                    </select>
                    <button class="btn btn-download" disabled={!workflow.can_export()} onclick={on_download}>
                        {if workflow.is_exporting() { "Downloading..." } else { "Download" }}
                    </button>
                    <button class="btn btn-secondary" onclick={on_close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
