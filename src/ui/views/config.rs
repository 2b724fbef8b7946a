use pingone_sweep::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;

pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = WarningBlock::new("Unknown configuration keys");
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let mut line = format!("'{}' in {}", w.key, location);
        if let Some(suggestion) = &w.suggestion {
            line.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        block.add_line(line);
    }

    if block.is_empty() {
        return String::new();
    }
    block.render(supports_color, supports_unicode)
}
