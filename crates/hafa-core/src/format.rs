use hafa_config::format::FormatConfig;

use crate::entry::VocabularyEntry;

pub trait EntryFormatter {
    // Default card layout: heading, pronunciation, example
    fn format(&self, entry: &VocabularyEntry) -> String {
        render(entry, &FormatConfig::default())
    }
}

pub struct DefaultFormatter;
impl EntryFormatter for DefaultFormatter {}

/// Layout driven by [`FormatConfig`]
pub struct ConfiguredFormatter {
    config: FormatConfig,
}

impl ConfiguredFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }
}

impl EntryFormatter for ConfiguredFormatter {
    fn format(&self, entry: &VocabularyEntry) -> String {
        render(entry, &self.config)
    }
}

fn render(entry: &VocabularyEntry, config: &FormatConfig) -> String {
    let mut out = String::from("\n");

    if config.heading_icon.is_empty() {
        out.push_str(&format!("{} - {}\n", entry.term(), entry.translation()));
    } else {
        out.push_str(&format!(
            "{} {} - {}\n",
            config.heading_icon,
            entry.term(),
            entry.translation()
        ));
    }

    out.push_str(&format!("Pronunciation: {}\n", entry.pronunciation()));

    if config.show_usage {
        out.push_str(&format!("Usage: {}\n", entry.usage()));
    }

    out.push_str(&format!("Example: {}\n", entry.example()));
    out
}
