pub mod processed_data;
pub mod record_page;
