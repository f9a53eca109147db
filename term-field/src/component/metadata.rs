//! Resolved component metadata.

use crate::field::RandomizeSettings;
use crate::logging::LogConfig;
use crate::terms::{Culture, TermCase};
use crate::triggers::BoxedTrigger;

/// Term settings declared at one level: a member, its page, or the global
/// configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataLevel {
    pub culture: Option<&'static Culture>,
    pub format: Option<String>,
    pub case: Option<TermCase>,
}

impl MetadataLevel {
    pub fn is_empty(&self) -> bool {
        self.culture.is_none() && self.format.is_none() && self.case.is_none()
    }
}

/// Metadata of a single component, resolved from declarations.
///
/// Term lookups fall through the member, page and global levels and take
/// the first value found. Triggers are the member's own, in declaration
/// order.
///
/// # Examples
///
/// ```rust
/// use term_field::component::{MetadataLevel, UIComponentMetadata};
/// use term_field::terms::Culture;
///
/// let metadata = UIComponentMetadata::builder("amount")
///     .format("N2")
///     .page(MetadataLevel {
///         culture: Some(Culture::find("de-DE").unwrap()),
///         ..Default::default()
///     })
///     .build();
///
/// assert_eq!(metadata.get_culture().name(), "de-DE");
/// assert_eq!(metadata.get_format(), Some("N2"));
/// ```
#[derive(Debug, Clone)]
pub struct UIComponentMetadata {
    name: String,
    member: MetadataLevel,
    page: MetadataLevel,
    global: MetadataLevel,
    randomize: RandomizeSettings,
    log: LogConfig,
    triggers: Vec<BoxedTrigger>,
}

impl UIComponentMetadata {
    pub fn builder(name: impl Into<String>) -> UIComponentMetadataBuilder {
        UIComponentMetadataBuilder {
            metadata: UIComponentMetadata {
                name: name.into(),
                member: MetadataLevel::default(),
                page: MetadataLevel::default(),
                global: MetadataLevel::default(),
                randomize: RandomizeSettings::default(),
                log: LogConfig::default(),
                triggers: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> [&MetadataLevel; 3] {
        [&self.member, &self.page, &self.global]
    }

    /// The effective culture; invariant when no level declares one.
    pub fn get_culture(&self) -> &'static Culture {
        self.levels()
            .into_iter()
            .find_map(|level| level.culture)
            .unwrap_or_else(Culture::invariant)
    }

    /// The effective format, if any level declares one.
    pub fn get_format(&self) -> Option<&str> {
        self.levels()
            .into_iter()
            .find_map(|level| level.format.as_deref())
    }

    /// The effective term case; title case when no level declares one.
    pub fn get_case(&self) -> TermCase {
        self.levels()
            .into_iter()
            .find_map(|level| level.case)
            .unwrap_or_default()
    }

    pub fn randomize(&self) -> &RandomizeSettings {
        &self.randomize
    }

    pub fn log_config(&self) -> &LogConfig {
        &self.log
    }

    /// Triggers attached to this component, in declaration order.
    pub fn triggers(&self) -> &[BoxedTrigger] {
        &self.triggers
    }
}

/// Builder for [`UIComponentMetadata`].
#[derive(Debug, Clone)]
pub struct UIComponentMetadataBuilder {
    metadata: UIComponentMetadata,
}

impl UIComponentMetadataBuilder {
    /// Sets the member-level culture.
    pub fn culture(mut self, culture: &'static Culture) -> Self {
        self.metadata.member.culture = Some(culture);
        self
    }

    /// Sets the member-level format.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.metadata.member.format = Some(format.into());
        self
    }

    /// Sets the member-level case.
    pub fn case(mut self, case: TermCase) -> Self {
        self.metadata.member.case = Some(case);
        self
    }

    pub fn member(mut self, level: MetadataLevel) -> Self {
        self.metadata.member = level;
        self
    }

    pub fn page(mut self, level: MetadataLevel) -> Self {
        self.metadata.page = level;
        self
    }

    pub fn global(mut self, level: MetadataLevel) -> Self {
        self.metadata.global = level;
        self
    }

    pub fn randomize(mut self, settings: RandomizeSettings) -> Self {
        self.metadata.randomize = settings;
        self
    }

    pub fn log_config(mut self, log: LogConfig) -> Self {
        self.metadata.log = log;
        self
    }

    /// Appends a trigger.
    pub fn trigger(mut self, trigger: BoxedTrigger) -> Self {
        self.metadata.triggers.push(trigger);
        self
    }

    /// Appends several triggers, keeping their order.
    pub fn triggers(mut self, triggers: impl IntoIterator<Item = BoxedTrigger>) -> Self {
        self.metadata.triggers.extend(triggers);
        self
    }

    pub fn build(self) -> UIComponentMetadata {
        self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn culture(name: &str) -> &'static Culture {
        Culture::find(name).unwrap()
    }

    #[test]
    fn test_defaults() {
        let metadata = UIComponentMetadata::builder("title").build();
        assert!(metadata.get_culture().is_invariant());
        assert_eq!(metadata.get_format(), None);
        assert_eq!(metadata.get_case(), TermCase::Title);
        assert!(metadata.triggers().is_empty());
    }

    #[test]
    fn test_member_overrides_page_overrides_global() {
        let metadata = UIComponentMetadata::builder("amount")
            .culture(culture("fr-FR"))
            .page(MetadataLevel {
                culture: Some(culture("de-DE")),
                format: Some("F1".to_string()),
                case: None,
            })
            .global(MetadataLevel {
                culture: Some(culture("en-US")),
                format: Some("N2".to_string()),
                case: Some(TermCase::Upper),
            })
            .build();

        assert_eq!(metadata.get_culture().name(), "fr-FR");
        assert_eq!(metadata.get_format(), Some("F1"));
        assert_eq!(metadata.get_case(), TermCase::Upper);
    }

    #[test]
    fn test_empty_level() {
        assert!(MetadataLevel::default().is_empty());
        let level = MetadataLevel {
            case: Some(TermCase::Lower),
            ..Default::default()
        };
        assert!(!level.is_empty());
    }
}
