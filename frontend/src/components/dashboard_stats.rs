use shared::DashboardStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DashboardStatsProps {
    pub api_client: ApiClient,
}

#[function_component(DashboardStatsTiles)]
pub fn dashboard_stats_tiles(props: &DashboardStatsProps) -> Html {
    let stats = use_state(|| Option::<DashboardStats>::None);

    use_effect_with(props.api_client.clone(), {
        let stats = stats.clone();
        move |api_client| {
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.get_stats().await {
                    Ok(data) => stats.set(Some(data)),
                    Err(e) => Logger::error_with_component(
                        "dashboard-stats",
                        &format!("Error fetching dashboard stats: {}", e),
                    ),
                }
            });
            || ()
        }
    });

    let Some(stats) = (*stats).clone() else {
        return html! { <p class="loading">{"Loading..."}</p> };
    };

    let width = format!("width: {}%;", stats.vaccinated_percent().unwrap_or(0));

    html! {
        <div class="stats-grid">
            <div class="stat-tile stat-students">
                <h3>{"Total Students"}</h3>
                <p class="stat-value">{stats.total_students}</p>
            </div>
            <div class="stat-tile stat-vaccinated">
                <h3>{"Vaccinated Students"}</h3>
                <p class="stat-value">{stats.vaccinated_students}</p>
                <div class="progress-track">
                    <div class="progress-fill" style={width}></div>
                </div>
                <p class="progress-label">{stats.progress_label()}</p>
            </div>
            <div class="stat-tile stat-drives">
                <h3>{"Upcoming Drives"}</h3>
                <p class="stat-value">{stats.upcoming_drives}</p>
            </div>
        </div>
    }
}
