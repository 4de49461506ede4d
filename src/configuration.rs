use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub allowed_origins: Vec<String>,
    pub admin: AdminSettings,
    pub media: MediaSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

// Admin credentials and the token secret are explicit configuration,
// injected where needed; handlers never read process env directly.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AdminSettings {
    pub email: String,
    pub password: String,
    pub jwt_secret: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct MediaSettings {
    pub base_url: String,
    pub api_key: String,
    pub folder: String,
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

impl AdminSettings {
    // Secrets come from the environment in deployed setups; the file
    // values are development defaults.
    pub fn override_from_env(&mut self) {
        if let Ok(email) = std::env::var("ADMIN_EMAIL") {
            self.email = email;
        }
        if let Ok(password) = std::env::var("ADMIN_PASSWORD") {
            self.password = password;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.jwt_secret = secret;
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize our configuration reader
    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    // Try to convert the configuration values it read into
    // our Settings type
    let mut config: Settings = settings.try_deserialize()?;

    config.admin.override_from_env();

    Ok(config)
}
