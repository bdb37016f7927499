pub mod drive_form;
pub mod student_form;
