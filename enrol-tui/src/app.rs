//! Event loop and key routing for the registration screen.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use enrol::{EditOutcome, Key, Modifiers, Registration, RegistrationForm};

use crate::render;
use crate::screen::Screen;

/// Status banner shown after a submit attempt.
pub enum Banner {
    /// Last submit was accepted.
    Success,
    /// Last submit failed on this many fields.
    Errors(usize),
}

pub struct App {
    form: RegistrationForm,
    banner: Option<Banner>,
}

impl App {
    pub fn new() -> Self {
        Self {
            form: RegistrationForm::new(),
            banner: None,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut screen = Screen::new()?;
        render::draw(&mut screen, &self.form, self.banner.as_ref())?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        break;
                    }
                    render::draw(&mut screen, &self.form, self.banner.as_ref())?;
                }
                Event::Resize(_, _) => {
                    render::draw(&mut screen, &self.form, self.banner.as_ref())?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, event: KeyEvent) -> bool {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

        // Global bindings; the form never sees these.
        match event.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('r') if ctrl => {
                log::info!("form reset");
                self.form.reset();
                self.banner = None;
                return false;
            }
            _ => {}
        }

        let Some(key) = convert_key(event.code) else {
            return false;
        };
        match self.form.handle_key(key, convert_modifiers(event.modifiers)) {
            EditOutcome::Submitted => self.submit(),
            EditOutcome::Changed => self.banner = None,
            EditOutcome::Handled | EditOutcome::Ignored => {}
        }
        false
    }

    fn submit(&mut self) {
        match self.form.submit() {
            Ok(record) => self.accept(record),
            Err(errors) => self.banner = Some(Banner::Errors(errors.len())),
        }
    }

    /// The submission action: log the accepted record as JSON and show
    /// the success banner. The form has already reset itself.
    fn accept(&mut self, record: Registration) {
        match serde_json::to_string(&record) {
            Ok(json) => log::info!("registration accepted: {json}"),
            Err(e) => log::warn!("registration accepted, serialization failed: {e}"),
        }
        self.banner = Some(Banner::Success);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: mods.contains(KeyModifiers::SHIFT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
    }
}
