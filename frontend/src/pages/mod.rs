pub mod add_student;
pub mod bulk_upload;
pub mod create_drive;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod update_drive;
pub mod update_student;
