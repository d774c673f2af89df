use crossterm::event::{KeyCode, KeyEvent};
use motd::{Endpoints, PICK_A_SOURCE, Source};

pub const BUTTONS: [(char, Source); 3] = [
    ('j', Source::Json),
    ('t', Source::Text),
    ('r', Source::Random),
];

pub struct App {
    pub should_quit: bool,
    pub motd: String,
    pub endpoints: Endpoints,
    pub last_pressed: Option<Source>,
    pub updates: usize,
}

impl App {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            should_quit: false,
            motd: PICK_A_SOURCE.into(),
            endpoints,
            last_pressed: None,
            updates: 0,
        }
    }

    /// Returns the title of the button bound to `key`, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char(c) => {
                let (_, source) = BUTTONS.iter().find(|(k, _)| *k == c.to_ascii_lowercase())?;
                self.last_pressed = Some(*source);
                Some(source.to_string())
            }
            _ => None,
        }
    }

    /// Only called from the UI loop.
    pub fn set_motd(&mut self, motd: String) {
        self.motd = motd;
        self.updates += 1;
    }
}
