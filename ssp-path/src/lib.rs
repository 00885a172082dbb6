use std::path::PathBuf;

/// Database path constants.
pub const DB_DATA_DIR: &str = "data";
pub const DB_FILE_NAME: &str = "ssp_admin.db";
pub const EXPORT_SUBDIR: &str = "exports";

/// Resolve the base data directory from the platform conventions.
pub fn get_base_data_dir() -> Result<PathBuf, String> {
    use directories::BaseDirs;

    let base_dirs = BaseDirs::new().ok_or_else(|| "unable to resolve system directories".to_string())?;

    #[cfg(target_os = "windows")]
    {
        Ok(base_dirs.data_dir().join("dev.iaoht.ssp-admin"))
    }

    #[cfg(target_os = "macos")]
    {
        Ok(base_dirs.data_dir().join("dev.iaoht.ssp-admin"))
    }

    #[cfg(target_os = "linux")]
    {
        Ok(base_dirs.data_dir().join("ssp-admin"))
    }
}

/// Path of the SQLite database file.
pub fn get_db_path() -> Result<PathBuf, String> {
    Ok(get_base_data_dir()?.join(DB_DATA_DIR).join(DB_FILE_NAME))
}

/// Default directory for question export files.
pub fn get_default_export_path() -> Result<PathBuf, String> {
    Ok(get_base_data_dir()?.join(DB_DATA_DIR).join(EXPORT_SUBDIR))
}
