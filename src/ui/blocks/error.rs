use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    code: Option<String>,
    source: Option<String>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            source: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Where the error came from (a file, a call label)
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = match &self.code {
            Some(code) => format!("ERROR ({code})"),
            None => "ERROR".to_string(),
        };
        let header = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(title).bold().render(supports_color)
        );
        let mut panel = Panel::with_title(header).style(PanelStyle::Error);

        if let Some(source) = &self.source {
            panel.add_line(ColoredText::dim(source.as_str()).render(supports_color));
        }
        panel.add_empty();
        panel.add_line(self.message.as_str());

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(format!("FIX: {}", fix));
        }

        panel.render(supports_color, supports_unicode)
    }
}
