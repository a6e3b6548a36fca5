use crate::domain::Coordinate;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserializer;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub geocoding: GeocodingSettings,
    pub completion: CompletionSettings,
    pub municipality: MunicipalitySettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub base_url: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct GeocodingSettings {
    pub base_url: String,
    pub user_agent: String,
    /// Reverse-geocode the marker before drafting a letter.
    #[serde(default = "default_geocoding_settings_enrich_reports")]
    pub enrich_reports: bool,
}

fn default_geocoding_settings_enrich_reports() -> bool {
    true
}

#[derive(serde::Deserialize, Clone)]
pub struct CompletionSettings {
    pub provider: CompletionProviderKind,
    pub api_key: SecretString,
    pub base_url: Option<String>,
    pub model: Option<String>,
    #[serde(
        default = "default_completion_settings_temperature",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub temperature: f32,
}

fn default_completion_settings_temperature() -> f32 {
    0.2
}

#[derive(serde::Deserialize, Clone)]
pub struct MunicipalitySettings {
    /// Addressee of every drafted letter, e.g. "Община Русе".
    pub authority: String,
    /// Prepended to every forward-geocoding query.
    pub region_qualifier: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub default_latitude: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub default_longitude: f64,
}

/// The runtime environment for our application.
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}
impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not supported environment.\
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

/// Which chat-completions flavour to talk to. Both speak the same wire format,
/// they differ in endpoint and default model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionProviderKind {
    OpenAi,
    Groq,
}
impl CompletionProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Groq => "groq",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Groq => "https://api.groq.com/openai/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-4o-mini",
            Self::Groq => "llama-3.1-8b-instant",
        }
    }
}
impl TryFrom<String> for CompletionProviderKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "groq" => Ok(Self::Groq),
            other => Err(format!(
                "'{}' is not a supported completion provider. \
                Use either 'openai' or 'groq'.",
                other
            )),
        }
    }
}
impl<'de> serde::Deserialize<'de> for CompletionProviderKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CompletionProviderKind::try_from(s).map_err(serde::de::Error::custom)
    }
}

impl CompletionSettings {
    // Marker left in the shipped configuration files.
    const PLACEHOLDER_MARKER: &'static str = "PASTE_";

    /// `false` when the key is missing or still the shipped placeholder.
    pub fn has_usable_api_key(&self) -> bool {
        let key = self.api_key.expose_secret().trim();
        !key.is_empty() && !key.contains(Self::PLACEHOLDER_MARKER)
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }
}

impl MunicipalitySettings {
    pub fn default_location(&self) -> Result<Coordinate, anyhow::Error> {
        Coordinate::new(self.default_latitude, self.default_longitude)
            .map_err(|e| anyhow::anyhow!("Invalid default location: {}", e))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
