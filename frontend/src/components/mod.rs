pub mod calendar_popup;
pub mod date_input;
pub mod header;
pub mod lookup_modal;
pub mod record_form_modal;
pub mod record_table;
pub mod search_bar;
