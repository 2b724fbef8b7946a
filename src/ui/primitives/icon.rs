use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skip,
    Arrow,
    Sweep,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Skip) => theme::icons::SKIP,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Sweep) => theme::icons::SWEEP,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Skip) => theme::icons_ascii::SKIP,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Sweep) => theme::icons_ascii::SWEEP,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Skip | Icon::Arrow => theme::colors::DIM,
            Icon::Sweep => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
