use gloo::dialogs::confirm;
use shared::{
    flatten_records, sort_drives_pending_first, sort_records_pending_first, vaccination_outcome,
    FlatRecord, StatusDecision, VaccinateRequest, VaccinationDrive,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notice::Notice;
use crate::services::api::ApiClient;
use crate::services::date_utils::now_iso;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct DrivesState {
    /// Drives as the backend returned them
    pub drives: Vec<VaccinationDrive>,
    /// Drives for display, pending first
    pub sorted_drives: Vec<VaccinationDrive>,
    /// Records of every drive, pending first
    pub records: Vec<FlatRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseDrivesActions {
    pub refresh: Callback<()>,
    pub vaccinate: Callback<FlatRecord>,
    pub decide: Callback<(i64, StatusDecision)>,
}

pub struct UseDrivesResult {
    pub state: DrivesState,
    pub actions: UseDrivesActions,
}

#[hook]
pub fn use_drives(api_client: &ApiClient, on_notice: Callback<Notice>) -> UseDrivesResult {
    let drives = use_state(Vec::<VaccinationDrive>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let drives = drives.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(api_client.clone(), move |_: (), api_client| {
            let api_client = api_client.clone();
            let drives = drives.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.get_drives().await {
                    Ok(data) => {
                        error.set(None);
                        drives.set(data);
                    }
                    Err(e) => {
                        Logger::error_with_component("drives", &format!("Failed to fetch drives: {}", e));
                        error.set(Some("Failed to load vaccination drives".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Record a dose for a pending record, then reload the drives.
    let vaccinate = {
        let refresh = refresh.clone();
        let on_notice = on_notice.clone();

        use_callback(api_client.clone(), move |record: FlatRecord, api_client| {
            let Some(student_id) = record.vaccinate_target().map(str::to_string) else {
                return;
            };
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_notice = on_notice.clone();

            spawn_local(async move {
                let request = VaccinateRequest {
                    vaccine_name: record.vaccine_name.clone(),
                    vaccination_date: now_iso(),
                };
                let drive_id = record.drive_id.to_string();
                let result = api_client.vaccinate(&student_id, &drive_id, &request).await;
                if let Err(e) = &result {
                    Logger::error_with_component("drives", &format!("Vaccination failed: {}", e));
                }
                let outcome = vaccination_outcome(&result);
                on_notice.emit(Notice::from(&outcome));
                if outcome.needs_refresh() {
                    refresh.emit(());
                }
            });
        })
    };

    // Approve or reject a pending drive after confirmation. The displayed
    // status only changes through the reload that follows success.
    let decide = {
        let refresh = refresh.clone();
        let on_notice = on_notice.clone();

        use_callback(api_client.clone(), move |(drive_id, decision): (i64, StatusDecision), api_client| {
            if !confirm(decision.confirm_prompt()) {
                return;
            }
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_notice = on_notice.clone();

            spawn_local(async move {
                let id = drive_id.to_string();
                let result = api_client.update_drive_status(&id, decision.target_status()).await;
                if let Err(e) = &result {
                    Logger::warn_with_component("drives", &format!("Status change failed: {}", e));
                }
                let outcome = decision.outcome(&result);
                on_notice.emit(Notice::from(&outcome));
                if outcome.needs_refresh() {
                    refresh.emit(());
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

    let state = DrivesState {
        drives: (*drives).clone(),
        sorted_drives: sort_drives_pending_first(&drives),
        records: sort_records_pending_first(flatten_records(&drives)),
        loading: *loading,
        error: (*error).clone(),
    };

    UseDrivesResult {
        state,
        actions: UseDrivesActions {
            refresh,
            vaccinate,
            decide,
        },
    }
}
