//! Clock-face page rendering
//!
//! The page carries no zone table of its own. It receives palette and text
//! here, then draws whatever `/api/events` or `/api/schedule` reports.

use crate::config::{DisplayConfig, Language};
use crate::error::{Result, TariffError};
use crate::tariff::Zone;
use serde::Serialize;

const TEMPLATE: &str = include_str!("../../webui/index.html");
const CONFIG_PLACEHOLDER: &str = "/*__PAGE_CONFIG__*/null";
const LANG_PLACEHOLDER: &str = "__LANG__";

/// Localized page strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageText {
    pub working_day: &'static str,
    pub non_working_day: &'static str,
    pub high_season: &'static str,
    pub low_season: &'static str,
    pub remaining_prefix: &'static str,
    pub legend_block: &'static str,
    pub highest: &'static str,
    pub lowest: &'static str,
    pub loading: &'static str,
}

impl PageText {
    pub const fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self {
                working_day: "Working Day",
                non_working_day: "Non-Working Day",
                high_season: "High Season",
                low_season: "Low Season",
                remaining_prefix: "Remaining block time :",
                legend_block: "Block",
                highest: "highest",
                lowest: "lowest",
                loading: "Calculating time until next block...",
            },
            Language::Sl => Self {
                working_day: "Delovni dan",
                non_working_day: "Dela prost dan",
                high_season: "Višja sezona",
                low_season: "Nižja sezona",
                remaining_prefix: "Naslednji blok čez :",
                legend_block: "Blok",
                highest: "najdražji",
                lowest: "najcenejši",
                loading: "Računam čas do naslednjega bloka...",
            },
        }
    }
}

const fn language_code(language: Language) -> &'static str {
    match language {
        Language::En => "en",
        Language::Sl => "sl",
    }
}

#[derive(Serialize)]
struct PageConfig<'a> {
    /// Colours indexed by zone number - 1
    palette: Vec<&'a str>,
    text: PageText,
    refresh_secs: u64,
    events_url: &'static str,
    schedule_url: &'static str,
}

/// Render the index page for the given display settings
pub fn render_index(display: &DisplayConfig) -> Result<String> {
    if !TEMPLATE.contains(CONFIG_PLACEHOLDER) {
        return Err(TariffError::render(
            "page template is missing the config placeholder",
        ));
    }

    let config = PageConfig {
        palette: Zone::ALL
            .iter()
            .map(|zone| display.palette.color(*zone))
            .collect(),
        text: PageText::for_language(display.language),
        refresh_secs: display.refresh_interval_secs,
        events_url: "/api/events",
        schedule_url: "/api/schedule",
    };
    let json = serde_json::to_string(&config)
        .map_err(|e| TariffError::render(format!("page config: {e}")))?;
    // keep the inline script from being closed by data
    let json = json.replace('<', "\\u003c");

    Ok(TEMPLATE
        .replacen(CONFIG_PLACEHOLDER, &json, 1)
        .replacen(LANG_PLACEHOLDER, language_code(display.language), 1))
}
