use shared::Student;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StudentTableProps {
    pub students: Vec<Student>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(StudentTable)]
pub fn student_table(props: &StudentTableProps) -> Html {
    if props.students.is_empty() {
        return html! { <p class="empty-state">{"No students found."}</p> };
    }

    html! {
        <table class="data-table student-table">
            <thead>
                <tr>
                    <th>{"ID"}</th>
                    <th>{"Name"}</th>
                    <th>{"Class"}</th>
                    <th>{"Gender"}</th>
                    <th>{"Date of Birth"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.students.iter().map(|student| {
                    let on_edit = {
                        let on_edit = props.on_edit.clone();
                        let id = student.student_id.clone();
                        Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
                    };
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        let id = student.student_id.clone();
                        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                    };

                    html! {
                        <tr key={student.student_id.clone()}>
                            <td>{&student.student_id}</td>
                            <td>{&student.name}</td>
                            <td>{&student.student_class}</td>
                            <td>{student.gender.clone().unwrap_or_default()}</td>
                            <td>{student.date_of_birth.clone().unwrap_or_default()}</td>
                            <td class="actions">
                                <button class="btn btn-edit" onclick={on_edit}>{"Edit"}</button>
                                <button class="btn btn-delete" onclick={on_delete}>{"Delete"}</button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
