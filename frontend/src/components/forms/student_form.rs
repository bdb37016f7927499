use shared::{Gender, StudentForm};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StudentFormProps {
    pub form: StudentForm,
    pub on_change: Callback<StudentForm>,
    pub on_submit: Callback<()>,
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub submitting: bool,
}

#[function_component(StudentFormView)]
pub fn student_form_view(props: &StudentFormProps) -> Html {
    let field = |update: fn(&mut StudentForm, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = form.clone();
            update(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
            on_change.emit(next);
        })
    };

    let on_gender_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let mut next = form.clone();
            next.gender = e.target_unchecked_into::<HtmlSelectElement>().value();
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
        <form class="entity-form student-form" onsubmit={on_submit}>
            <label for="student-id">{"Student ID"}</label>
            <input
                id="student-id"
                type="text"
                readonly=true
                value={props.form.student_id.clone()}
            />

            <label for="student-name">{"Name"}</label>
            <input
                id="student-name"
                type="text"
                value={props.form.name.clone()}
                oninput={field(|f, v| f.name = v)}
            />

            <label for="student-class">{"Class"}</label>
            <input
                id="student-class"
                type="text"
                placeholder="e.g., 5A"
                value={props.form.student_class.clone()}
                oninput={field(|f, v| f.student_class = v)}
            />

            <label for="student-gender">{"Gender"}</label>
            <select id="student-gender" onchange={on_gender_change}>
                <option value="" selected={props.form.gender.is_empty()}>{"Select gender"}</option>
                {for Gender::ALL.into_iter().map(|gender| html! {
                    <option value={gender.as_str()} selected={props.form.gender == gender.as_str()}>
                        {gender.as_str()}
                    </option>
                })}
            </select>

            <label for="student-dob">{"Date of Birth"}</label>
            <input
                id="student-dob"
                type="date"
                value={props.form.date_of_birth.clone()}
                oninput={field(|f, v| f.date_of_birth = v)}
            />

            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                {props.submit_label.clone()}
            </button>
        </form>
    }
}
