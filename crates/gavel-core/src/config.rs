/// Trait for loading service configuration from environment variables.
///
/// Implementors should derive `serde::Deserialize` and then call
/// `Config::from_env()` to load configuration at startup. Field names map to
/// upper-case variables (`database_url` → `DATABASE_URL`).
///
/// # Panics
///
/// Panics if any required env var is missing or cannot be deserialized.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        envy::from_env().expect("failed to load config from environment")
    }

    /// Same as [`Config::from_env`] but reads from an explicit variable list.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
