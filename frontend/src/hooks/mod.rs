pub mod use_date_picker;
pub mod use_modal_stack;
