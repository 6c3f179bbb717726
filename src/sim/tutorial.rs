//! Tutorial prompts
//!
//! A forward-only sequence of instructional popups. Player actions advance
//! the state; the popup fades out, swaps its text, then fades back in.

use serde::{Deserialize, Serialize};

use crate::consts::TUTORIAL_POPUP_SPEED;

/// What a popup fade reached during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeEvent {
    None,
    FadedIn,
    FadedOut,
}

/// Fading text overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Popup {
    pub text: String,
    /// Opacity in `[0, 1]`
    pub alpha: f32,
    /// Alpha per second; zero when idle
    pub fade_rate: f32,
}

impl Popup {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alpha: 0.0,
            fade_rate: 0.0,
        }
    }

    pub fn fade_in(&mut self) {
        self.fade_rate = TUTORIAL_POPUP_SPEED;
    }

    pub fn fade_out(&mut self) {
        self.fade_rate = -TUTORIAL_POPUP_SPEED;
    }

    /// Advance the fade. Reports a boundary exactly once, then goes idle.
    pub fn update(&mut self, dt: f32) -> FadeEvent {
        self.alpha += self.fade_rate * dt;

        if self.fade_rate < 0.0 && self.alpha <= 0.0 {
            self.fade_rate = 0.0;
            self.alpha = 0.0;
            FadeEvent::FadedOut
        } else if self.fade_rate > 0.0 && self.alpha >= 1.0 {
            self.fade_rate = 0.0;
            self.alpha = 1.0;
            FadeEvent::FadedIn
        } else {
            FadeEvent::None
        }
    }
}

/// Tutorial progress, strictly forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TutorialState {
    LearningMovement,
    LearningShooting,
    Finished,
}

impl TutorialState {
    /// Prompt shown while in this state (empty once finished)
    pub fn prompt(self) -> &'static str {
        match self {
            TutorialState::LearningMovement => "WASD to move around",
            TutorialState::LearningShooting => "Left click to shoot",
            TutorialState::Finished => "",
        }
    }

    fn next(self) -> Self {
        match self {
            TutorialState::LearningMovement => TutorialState::LearningShooting,
            TutorialState::LearningShooting | TutorialState::Finished => TutorialState::Finished,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutorial {
    state: TutorialState,
    pub popup: Popup,
}

impl Tutorial {
    pub fn new() -> Self {
        let state = TutorialState::LearningMovement;
        let mut popup = Popup::new(state.prompt());
        popup.fade_in();
        Self { state, popup }
    }

    /// Skip straight to the end (no prompt, spawning enabled)
    pub fn finished() -> Self {
        Self {
            state: TutorialState::Finished,
            popup: Popup::new(TutorialState::Finished.prompt()),
        }
    }

    pub fn state(&self) -> TutorialState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == TutorialState::Finished
    }

    /// Advance the popup; a finished fade-out swaps in the current prompt
    pub fn update(&mut self, dt: f32) -> FadeEvent {
        let event = self.popup.update(dt);
        if event == FadeEvent::FadedOut {
            self.popup.text = self.state.prompt().to_string();
            self.popup.fade_in();
        }
        event
    }

    pub fn player_moved(&mut self) {
        self.advance_from(TutorialState::LearningMovement);
    }

    pub fn player_shot(&mut self) {
        self.advance_from(TutorialState::LearningShooting);
    }

    fn advance_from(&mut self, expected: TutorialState) {
        if self.state != expected {
            return;
        }
        self.popup.fade_out();
        self.state = self.state.next();
        log::debug!("Tutorial {:?} -> {:?}", expected, self.state);
        if self.is_finished() {
            log::info!("Tutorial finished, enemies incoming");
        }
    }
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::new()
    }
}
