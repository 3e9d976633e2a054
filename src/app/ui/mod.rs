pub mod highlight_label;
pub mod preview;
pub mod text_editing;
pub mod top_bar;
