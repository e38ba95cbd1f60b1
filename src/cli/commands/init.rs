use crate::config::Config;
use crate::db::SqliteSlotStore;
use crate::errors::AppResult;
use crate::storage::ChaChaCipher;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// Creates, when missing:
///  - the config directory and configuration file
///  - the encryption key file
///  - the SQLite database and its `slots` table
pub fn handle(cfg: &Config) -> AppResult<()> {
    let config_file = Config::config_file();
    if config_file.exists() {
        info(format!("Config file : {} (kept)", config_file.display()));
    } else {
        cfg.save_to(&config_file)?;
        success(format!("Config file : {}", config_file.display()));
    }

    let key_path = Path::new(&cfg.key_file);
    if key_path.exists() {
        info(format!("Key file    : {} (kept)", key_path.display()));
    } else {
        ChaChaCipher::generate().write_key_file(key_path)?;
        success(format!("Key file    : {}", key_path.display()));
    }

    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    SqliteSlotStore::open(&cfg.database)?;
    success(format!("Database    : {}", cfg.database));

    success("rTimeclock initialization completed!");
    Ok(())
}
