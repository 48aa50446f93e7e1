use std::cell::Cell;
use std::rc::Rc;

use tapspan_testing::{ClickRecorder, TapRobot};
use tapspan_ui::{Button, ButtonStatus, ClickableText};
use tapspan_ui_graphics::{Brush, Color, DrawScope, Sp, TextStyle};

pub const GREETING: &str = "Hello, I am 000. Nice to meet you :)";

/// Launcher-icon style badge used for every decoration in the demo.
fn badge(scope: &mut dyn DrawScope) {
    scope.draw_rect(Brush::linear_gradient(vec![
        Color::from_rgb_u8(0x3D, 0xDC, 0x84),
        Color::from_rgb_u8(0x07, 0x30, 0x42),
    ]));
}

/// "Hello" re-enables "you", "Nice" disables it.
pub fn greeting_buttons(status: Rc<Cell<ButtonStatus>>) -> Vec<Button> {
    let enable = status.clone();
    let disable = status.clone();
    vec![
        Button::new(0..5)
            .with_on_click(move || enable.set(ButtonStatus::Default))
            .with_trailing(badge),
        Button::new(17..21)
            .with_on_click(move || disable.set(ButtonStatus::Disabled))
            .with_leading(badge),
        Button::new(30..33)
            .with_style(TextStyle::new(Color::BLUE, Sp(28.0)))
            .with_leading(badge)
            .with_trailing(badge)
            .with_status_provider(move || status.get()),
    ]
}

/// The greeting scene driven by a headless robot.
pub struct GreetingApp {
    robot: TapRobot,
    recorder: ClickRecorder,
    status: Rc<Cell<ButtonStatus>>,
}

impl GreetingApp {
    pub fn new() -> Self {
        let status = Rc::new(Cell::new(ButtonStatus::Default));
        let recorder = ClickRecorder::new();
        let text = ClickableText::new(
            GREETING,
            TextStyle::new(Color::BLACK, Sp(18.0)),
            greeting_buttons(status.clone()),
            recorder.callback(),
        );
        Self {
            robot: TapRobot::new(text),
            recorder,
            status,
        }
    }

    pub fn robot(&self) -> &TapRobot {
        &self.robot
    }

    pub fn status(&self) -> ButtonStatus {
        self.status.get()
    }

    /// Taps the middle of button `index` and runs the actions of whatever
    /// fired. Returns the fired indices.
    pub fn tap_button(&mut self, index: usize) -> Vec<usize> {
        let Some(range) = self.robot.composition().click_ranges.get(index).copied() else {
            log::warn!("no button {index} in the scene");
            return Vec::new();
        };
        self.robot.click_offset(range.start + range.length() / 2);

        let fired = self.recorder.take();
        for &clicked in &fired {
            log::info!("button {clicked} clicked");
            self.robot.text().dispatch_button_action(clicked);
        }
        self.robot.wait_for_idle();
        fired
    }
}

/// Taps through the scene and prints what each tap did.
pub fn run_script() {
    let mut app = GreetingApp::new();
    app.robot().dump_screen();

    for (label, index) in [("you", 2), ("Nice", 1), ("you", 2), ("Hello", 0), ("you", 2)] {
        let fired = app.tap_button(index);
        let alphas: Vec<f32> = app
            .robot()
            .composition()
            .decorations
            .iter()
            .map(|(_, entry)| entry.alpha)
            .collect();
        println!(
            "tap {label:>5}: fired {fired:?}, status of \"you\" {:?}, decoration alphas {alphas:?}",
            app.status()
        );
    }
}

impl Default for GreetingApp {
    fn default() -> Self {
        Self::new()
    }
}
