pub mod search_controller;
pub mod text_editing_controller;
