pub(crate) mod app_state;
pub(crate) mod edit_buffer;
