use shared::StudentSearch;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StudentSearchProps {
    pub on_search: Callback<StudentSearch>,
}

#[function_component(StudentSearchBar)]
pub fn student_search_bar(props: &StudentSearchProps) -> Html {
    let filters = use_state(StudentSearch::default);

    let text_input = |update: fn(&mut StudentSearch, String)| {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*filters).clone();
            update(&mut next, value);
            filters.set(next);
        })
    };

    let on_vaccinated_change = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*filters).clone();
            next.vaccinated = StudentSearch::parse_vaccinated_option(&value);
            filters.set(next);
        })
    };

    let on_submit = {
        let filters = filters.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit((*filters).clone());
        })
    };

    html! {
        <form class="student-search" onsubmit={on_submit}>
            <input
                type="text"
                placeholder="Name"
                value={filters.name.clone()}
                oninput={text_input(|f, v| f.name = v)}
            />
            <input
                type="text"
                placeholder="Class"
                value={filters.student_class.clone()}
                oninput={text_input(|f, v| f.student_class = v)}
            />
            <input
                type="text"
                placeholder="Student ID"
                value={filters.student_id.clone()}
                oninput={text_input(|f, v| f.student_id = v)}
            />
            <select onchange={on_vaccinated_change}>
                {for [("", "All"), ("true", "Vaccinated"), ("false", "Unvaccinated")].into_iter().map(|(value, label)| {
                    html! {
                        <option value={value} selected={filters.vaccinated_option() == value}>{label}</option>
                    }
                })}
            </select>
            <button type="submit" class="btn btn-search">{"Search"}</button>
        </form>
    }
}
