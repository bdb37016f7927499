use shared::FlatRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecordTableProps {
    pub records: Vec<FlatRecord>,
    pub on_vaccinate: Callback<FlatRecord>,
}

#[function_component(RecordTable)]
pub fn record_table(props: &RecordTableProps) -> Html {
    if props.records.is_empty() {
        return html! { <p class="empty-state">{"No records available"}</p> };
    }

    html! {
        <table class="data-table record-table">
            <thead>
                <tr>
                    <th>{"Student"}</th>
                    <th>{"Class"}</th>
                    <th>{"Vaccine"}</th>
                    <th>{"Drive Date"}</th>
                    <th>{"Status"}</th>
                    <th>{"Vaccinated On"}</th>
                    <th>{"Action"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.records.iter().map(|record| {
                    let action = if record.vaccinate_target().is_some() {
                        let on_vaccinate = props.on_vaccinate.clone();
                        let record = record.clone();
                        html! {
                            <button
                                class="btn btn-vaccinate"
                                onclick={Callback::from(move |_: MouseEvent| on_vaccinate.emit(record.clone()))}
                            >
                                {"Vaccinate"}
                            </button>
                        }
                    } else {
                        html! {}
                    };

                    html! {
                        <tr key={format!("{}-{}", record.drive_id, record.record.id)}>
                            <td>{record.student_name()}</td>
                            <td>{record.student_class()}</td>
                            <td>{&record.vaccine_name}</td>
                            <td>{&record.drive_date}</td>
                            <td>{record.record.status.as_str()}</td>
                            <td>{record.vaccination_date()}</td>
                            <td>{action}</td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
