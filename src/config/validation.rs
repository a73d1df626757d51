use log::warn;

use crate::config::TocConfig;
use crate::utils::error::{BoxResult, TocError};

/// Validate the configuration
pub fn validate_config(config: &TocConfig) -> BoxResult<()> {
    validate_levels(config)?;

    validate_element_id("container_id", &config.container_id)?;

    if let Some(content_id) = &config.content_id {
        validate_element_id("content_id", content_id)?;

        if content_id == &config.container_id {
            warn!("content_id and container_id are both '{}'; every heading will be excluded", content_id);
        }
    }

    if config.page_url.contains('#') {
        warn!("page_url '{}' already contains a fragment; links will carry two", config.page_url);
    }

    if config.style_attribute.is_empty() {
        warn!("style_attribute is empty; the container can no longer select the list style");
    }

    Ok(())
}

/// Validate the heading level range
fn validate_levels(config: &TocConfig) -> BoxResult<()> {
    for (name, level) in [("min_level", config.min_level), ("max_level", config.max_level)] {
        if !(1..=6).contains(&level) {
            return Err(TocError::Config(format!(
                "{} must be between 1 and 6, got {}", name, level
            )).into());
        }
    }

    if config.min_level > config.max_level {
        return Err(TocError::Config(format!(
            "min_level ({}) is greater than max_level ({})", config.min_level, config.max_level
        )).into());
    }

    if config.min_level == 1 {
        warn!("min_level is 1; the page title will usually be listed too");
    }

    Ok(())
}

/// Validate an element id used to locate the container or content region
fn validate_element_id(name: &str, id: &str) -> BoxResult<()> {
    if id.is_empty() {
        return Err(TocError::Config(format!("{} must not be empty", name)).into());
    }

    if id.chars().any(char::is_whitespace) {
        return Err(TocError::Config(format!(
            "{} must not contain whitespace: '{}'", name, id
        )).into());
    }

    Ok(())
}
