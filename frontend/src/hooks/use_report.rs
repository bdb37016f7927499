use std::rc::Rc;

use serde_json::Value;
use shared::{ExportFormat, ParamKey, PreviewRequest, ReportKind, ReportWorkflow};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notice::Notice;
use crate::services::api::ApiClient;
use crate::services::download::save_bytes;
use crate::services::logging::Logger;

/// Report workflow held in a reducer so async results always apply to the
/// latest state rather than the one captured when the request started.
#[derive(Clone, Default, PartialEq)]
pub struct ReportState {
    pub workflow: ReportWorkflow,
}

pub enum ReportAction {
    SelectKind(Option<ReportKind>),
    SetParam(ParamKey, String),
    SetExportFormat(Option<ExportFormat>),
    OpenPreview,
    LoadRows(PreviewRequest, Value),
    ClosePreview,
    BeginExport,
    FinishExport,
}

impl Reducible for ReportState {
    type Action = ReportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut workflow = self.workflow.clone();
        match action {
            ReportAction::SelectKind(kind) => workflow.select_kind(kind),
            ReportAction::SetParam(key, value) => workflow.set_param(key, &value),
            ReportAction::SetExportFormat(format) => workflow.set_export_format(format),
            ReportAction::OpenPreview => {
                if workflow.open_preview().is_err() {
                    return self;
                }
            }
            ReportAction::LoadRows(request, body) => {
                if !workflow.load_rows(&request, body) {
                    return self;
                }
            }
            ReportAction::ClosePreview => workflow.close_preview(),
            ReportAction::BeginExport => {
                if workflow.begin_export().is_err() {
                    return self;
                }
            }
            ReportAction::FinishExport => workflow.finish_export(),
        }
        Rc::new(ReportState { workflow })
    }
}

#[derive(Clone, PartialEq)]
pub struct UseReportActions {
    pub select_kind: Callback<Option<ReportKind>>,
    pub set_param: Callback<(ParamKey, String)>,
    pub set_export_format: Callback<Option<ExportFormat>>,
    pub preview: Callback<()>,
    pub close_preview: Callback<()>,
    pub export: Callback<()>,
}

pub struct UseReportResult {
    pub workflow: ReportWorkflow,
    pub actions: UseReportActions,
}

#[hook]
pub fn use_report(api_client: &ApiClient, on_notice: Callback<Notice>) -> UseReportResult {
    let state = use_reducer(ReportState::default);

    let select_kind = {
        let state = state.clone();
        Callback::from(move |kind: Option<ReportKind>| state.dispatch(ReportAction::SelectKind(kind)))
    };

    let set_param = {
        let state = state.clone();
        Callback::from(move |(key, value): (ParamKey, String)| state.dispatch(ReportAction::SetParam(key, value)))
    };

    let set_export_format = {
        let state = state.clone();
        Callback::from(move |format: Option<ExportFormat>| state.dispatch(ReportAction::SetExportFormat(format)))
    };

    let close_preview = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ReportAction::ClosePreview))
    };

    // Validation runs on a copy of the current state; a failure reports the
    // problem and no request is sent.
    let preview = {
        let state = state.clone();
        let api_client = api_client.clone();
        let on_notice = on_notice.clone();

        Callback::from(move |_: ()| {
            let request = match state.workflow.clone().open_preview() {
                Ok(request) => request,
                Err(e) => {
                    on_notice.emit(Notice::error(e.to_string()));
                    return;
                }
            };
            state.dispatch(ReportAction::OpenPreview);
            Logger::debug_with_component("reports", &format!("Fetching {}", request.path));

            let state = state.clone();
            let api_client = api_client.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                match api_client.fetch_report(&request).await {
                    Ok(body) => state.dispatch(ReportAction::LoadRows(request, body)),
                    Err(e) => {
                        Logger::error_with_component("reports", &format!("Report fetch failed: {}", e));
                        on_notice.emit(Notice::error("Failed to load report"));
                    }
                }
            });
        })
    };

    let export = {
        let state = state.clone();
        let api_client = api_client.clone();
        let on_notice = on_notice.clone();

        Callback::from(move |_: ()| {
            let request = match state.workflow.clone().begin_export() {
                Ok(request) => request,
                Err(e) => {
                    on_notice.emit(Notice::error(e.to_string()));
                    return;
                }
            };
            state.dispatch(ReportAction::BeginExport);

            let state = state.clone();
            let api_client = api_client.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                let result = match api_client.export_report(&request).await {
                    Ok(bytes) => save_bytes(&bytes, &request.file_name, request.format.mime_type()),
                    Err(e) => Err(e.to_string()),
                };
                match result {
                    Ok(()) => {
                        Logger::info_with_component("reports", &format!("Exported {}", request.file_name));
                        on_notice.emit(Notice::success("Export successful"));
                    }
                    Err(e) => {
                        Logger::error_with_component("reports", &format!("Export failed: {}", e));
                        on_notice.emit(Notice::error("Export failed"));
                    }
                }
                state.dispatch(ReportAction::FinishExport);
            });
        })
    };

    UseReportResult {
        workflow: state.workflow.clone(),
        actions: UseReportActions {
            select_kind,
            set_param,
            set_export_format,
            preview,
            close_preview,
            export,
        },
    }
}
