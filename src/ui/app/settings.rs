use std::path::Path;

use tracing::{info, warn};

use super::App;
use crate::core::{Algorithm, Config, DiffOptions};
use crate::theme::Theme;

impl App {
    /// Switch between the lookahead and Myers alignments.
    pub fn toggle_algorithm(&mut self) {
        let algorithm = match self.options.algorithm {
            Algorithm::Lookahead => Algorithm::Myers,
            Algorithm::Myers => Algorithm::Lookahead,
        };
        self.set_options(DiffOptions {
            algorithm,
            ..self.options
        });
        self.first_change();
        self.ui.set_status(format!("Algorithm: {} ({})", algorithm, self.stats));
    }

    /// Move to the next theme in [`Theme::list`].
    pub fn cycle_theme(&mut self) {
        let names = Theme::list();
        let next = names
            .iter()
            .position(|n| *n == self.theme.name)
            .map_or(0, |i| (i + 1) % names.len());
        if let Some(name) = names.get(next) {
            self.theme = Theme::load(name);
            self.ui.set_status(format!("Theme: {}", name));
        }
    }

    /// Persist the alignment settings and theme to the user config file.
    pub fn save_settings(&mut self) {
        self.save_settings_to(&Config::default_path());
    }

    /// Persist the alignment settings and theme to `path`.
    ///
    /// Other fields of an existing file are kept. A file that fails to parse
    /// is left alone.
    pub fn save_settings_to(&mut self, path: &Path) {
        let mut config = match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "not overwriting config");
                self.ui.set_error(format!("Save failed: {}", e));
                return;
            }
        };
        config.lookahead_window = self.options.lookahead_window;
        config.tie_break = self.options.tie_break;
        config.algorithm = self.options.algorithm;
        config.theme = self.theme.name.clone();

        match config.save_to(path) {
            Ok(()) => {
                info!(path = %path.display(), "saved settings");
                self.ui
                    .set_status(format!("Saved settings to {}", path.display()));
            }
            Err(e) => self.ui.set_error(format!("Save failed: {}", e)),
        }
    }
}
