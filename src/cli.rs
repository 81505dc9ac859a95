pub mod menu;
pub mod progress;
pub mod prompts;
pub mod ui;

pub use menu::*;
pub use progress::*;
pub use prompts::*;
pub use ui::*;
