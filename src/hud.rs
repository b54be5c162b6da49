//! DOM overlay decisions
//!
//! What the wasm host shows for a given snapshot, kept free of `web-sys` so it
//! can be tested natively.

use crate::settings::Settings;
use crate::sim::GameState;

/// Class token that hides an element
pub const HIDDEN: &str = "hidden";
/// Class token that plays the reveal animation
pub const POP: &str = "pop";

/// Visibility of each overlay for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView {
    pub score: u32,
    pub show_fps: bool,
    pub start_prompt: bool,
    pub game_over: bool,
    pub secret_panel: bool,
}

impl HudView {
    pub fn new(state: &GameState, settings: &Settings) -> Self {
        Self {
            score: state.score,
            show_fps: settings.show_fps,
            start_prompt: !state.is_playing,
            game_over: state.game_over,
            secret_panel: state.secret_code.is_some(),
        }
    }
}

/// What a tap on the scene does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    Jump,
    Start,
}

impl TapAction {
    pub fn for_state(state: &GameState) -> Self {
        if state.is_active() {
            TapAction::Jump
        } else {
            TapAction::Start
        }
    }
}

/// `class` attribute with `token` added or removed, other tokens untouched
pub fn with_class_token(class: &str, token: &str, present: bool) -> String {
    let mut tokens: Vec<&str> = class.split_whitespace().filter(|t| *t != token).collect();
    if present {
        tokens.push(token);
    }
    tokens.join(" ")
}
