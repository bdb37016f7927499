pub mod use_drives;
pub mod use_notice;
pub mod use_report;
pub mod use_students;
