pub(crate) mod board;
pub(crate) mod board_theme;
pub(crate) mod dialogs;
pub(crate) mod game_screen;
pub(crate) mod input;
pub(crate) mod status_line;
pub(crate) mod toolbar;
