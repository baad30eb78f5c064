//! Application state and event handling, independent of any renderer.

mod ui;

use std::time::{Duration, Instant};

use zeroize::Zeroizing;

pub use ui::{Element, UiEvent, UiSurface};

use crate::clipboard::{Clipboard, CopyPath};
use crate::config::Config;
use crate::pass::{
    CharacterClass, ClassSet, Estimator, GenerationRequest, Password, clamp_length, generate,
};
use crate::rand::RandomSource;
use crate::settings::{PreferenceStore, Preferences};

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPIED_MESSAGE: &str = "Password copied to clipboard.";
pub const COPY_FAILED_MESSAGE: &str = "Could not copy the password.";
pub const SELECT_CLASS_MESSAGE: &str = "Select at least one character type.";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save preferences.";

/// Class re-enabled when a selection would otherwise be empty.
pub const FALLBACK_CLASS: CharacterClass = CharacterClass::Lowercase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<U, S, R> {
    ui: U,
    store: S,
    clipboard: Clipboard,
    rng: R,
    prefs: Preferences,
    length: usize,
    classes: ClassSet,
    password: Password,
    estimator: Estimator,
    copy_feedback: Duration,
    feedback_until: Option<Instant>,
}

impl<U, S, R> App<U, S, R>
where
    U: UiSurface,
    S: PreferenceStore,
    R: RandomSource,
{
    /// Load preferences, push initial state to `ui` and generate the first
    /// password.
    pub fn init(ui: U, store: S, clipboard: Clipboard, rng: R, config: &Config) -> Self {
        let prefs = Preferences::load(&store);
        log::debug!("preferences: theme={} accent={}", prefs.theme, prefs.accent);

        let mut app = Self {
            ui,
            store,
            clipboard,
            rng,
            prefs,
            length: clamp_length(config.length),
            classes: config.classes,
            password: Zeroizing::new(String::new()),
            estimator: Estimator::new(),
            copy_feedback: config.copy_feedback,
            feedback_until: None,
        };

        app.ui.apply_theme(prefs.theme, prefs.accent);
        if app.classes.is_empty() {
            app.classes.insert(FALLBACK_CLASS);
            app.ui.set_text(Element::Announcer, SELECT_CLASS_MESSAGE);
        }
        for class in CharacterClass::ALL {
            app.ui.set_checked(class, app.classes.contains(class));
        }
        app.ui.set_text(Element::LengthValue, &app.length.to_string());
        app.ui.set_text(Element::CopyButton, COPY_LABEL);
        app.regenerate();
        app.ui.flush();
        app
    }

    /// Dispatch events until the surface runs dry or the user quits.
    pub fn run(mut self) -> U {
        while let Some(event) = self.ui.next_event() {
            if self.handle(event) == Flow::Quit {
                break;
            }
        }
        self.ui
    }

    pub fn handle(&mut self, event: UiEvent) -> Flow {
        match event {
            UiEvent::LengthChanged(n) => self.set_length(n),
            UiEvent::LengthStep(delta) => {
                let n = self.length.saturating_add_signed(delta as isize);
                self.set_length(n);
            }
            UiEvent::ClassToggled(class) => self.toggle_class(class),
            UiEvent::Generate => self.regenerate(),
            UiEvent::Copy => self.copy(),
            UiEvent::PasswordEdited(text) => {
                self.password = Zeroizing::new(text);
                self.ui.set_text(Element::PasswordField, &self.password);
                self.refresh_strength();
            }
            UiEvent::ThemeToggled => {
                let theme = self.prefs.theme.toggled();
                if let Err(e) = self.prefs.set_theme(&mut self.store, theme) {
                    log::warn!("failed to save theme: {e}");
                    self.ui.set_text(Element::Announcer, SAVE_FAILED_MESSAGE);
                }
                self.ui.apply_theme(self.prefs.theme, self.prefs.accent);
            }
            UiEvent::AccentCycled => {
                let accent = self.prefs.accent.next();
                if let Err(e) = self.prefs.set_accent(&mut self.store, accent) {
                    log::warn!("failed to save accent color: {e}");
                    self.ui.set_text(Element::Announcer, SAVE_FAILED_MESSAGE);
                }
                self.ui.apply_theme(self.prefs.theme, self.prefs.accent);
            }
            UiEvent::Tick => self.expire_feedback(),
            UiEvent::Quit => return Flow::Quit,
        }
        self.ui.flush();
        Flow::Continue
    }

    fn set_length(&mut self, n: usize) {
        self.length = clamp_length(n);
        self.ui.set_text(Element::LengthValue, &self.length.to_string());
        self.regenerate();
    }

    /// Flip a class. Turning off the last enabled class is undone.
    fn toggle_class(&mut self, class: CharacterClass) {
        self.classes.toggle(class);
        if self.classes.is_empty() {
            self.classes.insert(class);
            self.ui.set_text(Element::Announcer, SELECT_CLASS_MESSAGE);
            self.ui.set_checked(class, true);
            return;
        }
        self.ui.set_checked(class, self.classes.contains(class));
        if self.feedback_until.is_none() {
            self.ui.set_text(Element::Announcer, "");
        }
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let request = GenerationRequest::new(self.length, self.classes);
        match generate(&request, &mut self.rng) {
            Some(password) => self.password = password,
            None => {
                self.password = Zeroizing::new(String::new());
                self.ui.set_text(Element::Announcer, SELECT_CLASS_MESSAGE);
            }
        }
        self.ui.set_text(Element::PasswordField, &self.password);
        self.refresh_strength();
    }

    fn refresh_strength(&mut self) {
        let assessment = self.estimator.assess(&self.password);
        self.ui.set_text(Element::StrengthLabel, assessment.label);
        self.ui.set_strength(assessment.width_percent, assessment.color);
        self.ui.set_text(Element::CrackTime, &assessment.crack_time);
        self.ui.set_text(
            Element::Entropy,
            &format!("{:.1} bits", assessment.entropy_bits),
        );
    }

    fn copy(&mut self) {
        if self.password.is_empty() {
            return;
        }
        match self.clipboard.copy(&self.password) {
            Ok(path) => {
                if path == CopyPath::Fallback {
                    log::debug!("copied through fallback clipboard");
                }
                self.ui.set_text(Element::CopyButton, COPIED_LABEL);
                self.ui.set_text(Element::Announcer, COPIED_MESSAGE);
                self.feedback_until = Some(Instant::now() + self.copy_feedback);
            }
            Err(e) => {
                log::error!("copy failed: {e}");
                self.ui.set_text(Element::Announcer, COPY_FAILED_MESSAGE);
                self.ui.alert(COPY_FAILED_MESSAGE);
            }
        }
    }

    fn expire_feedback(&mut self) {
        if let Some(until) = self.feedback_until
            && Instant::now() >= until
        {
            self.feedback_until = None;
            self.ui.set_text(Element::CopyButton, COPY_LABEL);
            self.ui.set_text(Element::Announcer, "");
        }
    }
}

#[cfg(test)]
impl<U, S, R> App<U, S, R> {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }
}
