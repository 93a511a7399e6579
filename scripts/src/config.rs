use envconfig::Envconfig;

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    #[envconfig(from = "ENV", default = "local")]
    pub env: String,

    #[envconfig(from = "DATABASE_URL", default = "sqlite:data/horse_index.db")]
    pub db_host: String,

    /// SQLCipher key; the database is opened unencrypted when unset.
    #[envconfig(from = "DB_PASS_ENCRYPT")]
    pub db_pass_encrypt: Option<String>,
}

impl AppConfig {
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }
}
