pub mod app;

pub use app::{greeting_buttons, run_script, GreetingApp, GREETING};
