use anyhow::{Context, Result, anyhow};
use fluent::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use std::path::Path;
use tracing::{debug, warn};
use unic_langid::{LanguageIdentifier, langid};

/// Looks up a message by key and fills in its arguments.
pub trait Translate {
    fn translate(&self, key: &str, args: &Args) -> String;
}

impl<T: Translate + ?Sized> Translate for &T {
    fn translate(&self, key: &str, args: &Args) -> String {
        (**self).translate(key, args)
    }
}

/// Arguments passed along with a translation key.
#[derive(Debug)]
pub struct Args(FluentArgs<'static>);

impl Default for Args {
    fn default() -> Self {
        Self(FluentArgs::new())
    }
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// A count argument, available to messages as `$n`.
    pub fn count(n: u64) -> Self {
        Self::new().with("n", n)
    }

    pub fn with(mut self, name: &str, value: impl Into<FluentValue<'static>>) -> Self {
        self.0.set(name.to_string(), value);
        self
    }

    /// Plain text of a string or number argument.
    pub fn get(&self, name: &str) -> Option<String> {
        let (_, value) = self.0.iter().find(|(key, _)| *key == name)?;
        match value {
            FluentValue::String(s) => Some(s.to_string()),
            FluentValue::Number(n) => Some(n.as_string().into_owned()),
            _ => None,
        }
    }

    pub fn as_fluent(&self) -> &FluentArgs<'static> {
        &self.0
    }
}

const ENGLISH_FTL: &str = r#"
timeInterval =
    .ago = { $interval } ago
    .justNow = just now
    .years = { $n ->
        [one] { $n } year
       *[other] { $n } years
    }
    .months = { $n ->
        [one] { $n } month
       *[other] { $n } months
    }
    .days = { $n ->
        [one] { $n } day
       *[other] { $n } days
    }
    .hours = { $n ->
        [one] { $n } hour
       *[other] { $n } hours
    }
    .minutes = { $n ->
        [one] { $n } minute
       *[other] { $n } minutes
    }
    .seconds = { $n ->
        [one] { $n } second
       *[other] { $n } seconds
    }
"#;

/// Fluent message catalog.
///
/// A key `message.attribute` names an attribute of a Fluent message, so
/// `timeInterval.days` is the `.days` attribute of `timeInterval`. Layers are
/// searched in order; a loaded catalog sits in front of the built-in English
/// layer, which answers any key the loaded one lacks.
pub struct Catalog {
    layers: Vec<FluentBundle<FluentResource>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

fn make_bundle(
    locale: LanguageIdentifier,
    resource: FluentResource,
) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![locale]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        warn!(errors = ?errors, "Duplicate catalog messages");
    }
    bundle
}

impl Catalog {
    pub fn empty() -> Self {
        Self { layers: Vec::new() }
    }

    /// Built-in English messages for every key the formatter uses.
    pub fn english() -> Self {
        let resource = FluentResource::try_new(ENGLISH_FTL.to_string())
            .unwrap_or_else(|(resource, _)| resource);
        Self {
            layers: vec![make_bundle(langid!("en-US"), resource)],
        }
    }

    /// Load an FTL file. `locale` drives plural categories such as `[one]`.
    pub fn load(path: &Path, locale: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::parse(&content, locale)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
        debug!(path = %path.display(), locale = locale, "Catalog loaded");
        Ok(catalog)
    }

    /// Parse FTL source into a catalog layered over the English defaults.
    pub fn parse(source: &str, locale: &str) -> Result<Self> {
        let locale: LanguageIdentifier = locale
            .parse()
            .map_err(|e| anyhow!("Invalid catalog locale {locale:?}: {e:?}"))?;
        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Invalid catalog messages: {errors:?}"))?;

        let mut catalog = Self::english();
        catalog.layers.insert(0, make_bundle(locale, resource));
        Ok(catalog)
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str, args: &Args) -> String {
        let (id, attribute) = match key.split_once('.') {
            Some((id, attribute)) => (id, Some(attribute)),
            None => (key, None),
        };

        for bundle in &self.layers {
            let Some(message) = bundle.get_message(id) else {
                continue;
            };
            let pattern = match attribute {
                Some(attribute) => message.get_attribute(attribute).map(|a| a.value()),
                None => message.value(),
            };
            let Some(pattern) = pattern else {
                continue;
            };

            let mut errors = Vec::new();
            let text = bundle.format_pattern(pattern, Some(args.as_fluent()), &mut errors);
            if !errors.is_empty() {
                warn!(key = key, errors = ?errors, "Translation errors");
            }
            return text.into_owned();
        }

        warn!(key = key, "Missing translation");
        key.to_string()
    }
}
