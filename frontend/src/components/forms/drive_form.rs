use shared::DriveForm;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DriveFormProps {
    pub form: DriveForm,
    pub on_change: Callback<DriveForm>,
    pub on_submit: Callback<()>,
    pub submit_label: AttrValue,
    /// Earliest date the picker offers; `None` allows any date
    #[prop_or_default]
    pub min_date: Option<AttrValue>,
    #[prop_or_default]
    pub submitting: bool,
}

#[function_component(DriveFormView)]
pub fn drive_form_view(props: &DriveFormProps) -> Html {
    let field = |update: fn(&mut DriveForm, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = form.clone();
            update(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
            on_change.emit(next);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="entity-form drive-form" onsubmit={on_submit}>
            <label for="vaccine-name">{"Vaccine Name"}</label>
            <input
                id="vaccine-name"
                type="text"
                value={props.form.vaccine_name.clone()}
                oninput={field(|f, v| f.vaccine_name = v)}
            />

            <label for="drive-date">{"Drive Date"}</label>
            <input
                id="drive-date"
                type="date"
                min={props.min_date.clone()}
                value={props.form.drive_date.clone()}
                oninput={field(|f, v| f.drive_date = v)}
            />

            <label for="available-doses">{"Available Doses"}</label>
            <input
                id="available-doses"
                type="number"
                min="1"
                value={props.form.available_doses.clone()}
                oninput={field(|f, v| f.available_doses = v)}
            />

            <label for="applicable-classes">{"Applicable Classes"}</label>
            <input
                id="applicable-classes"
                type="text"
                placeholder="e.g., 5A, 6B"
                value={props.form.applicable_classes.clone()}
                oninput={field(|f, v| f.applicable_classes = v)}
            />

            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                {props.submit_label.clone()}
            </button>
        </form>
    }
}
