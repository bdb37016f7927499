pub mod dashboard_stats;
pub mod drive_table;
pub mod forms;
pub mod navbar;
pub mod notice;
pub mod record_table;
pub mod report_modal;
pub mod report_panel;
pub mod student_search;
pub mod student_table;
