// Application layer: the interactive menus driving the registry.

pub mod console;
pub mod prompt;
