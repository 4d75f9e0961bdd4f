use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .algorunrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn scripts_path(&self) -> PathBuf {
        PathBuf::from(self.get("SCRIPTS_PATH").unwrap())
    }

    pub fn default_color(&self) -> Option<String> {
        self.get("DEFAULT_COLOR")
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or ALGORUN_* for forward-compat
    const KEYS: &[&str] = &["SCRIPTS_PATH", "DEFAULT_COLOR", "PRETTY_OUTPUT"];

    KEYS.contains(&k) || k.starts_with("ALGORUN_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("algorun").join(".algorunrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Scripts live next to the invocation by default, mirroring the
    // `./<name>` resource convention.
    m.insert("SCRIPTS_PATH".into(), ".".into());

    m.insert("DEFAULT_COLOR".into(), "cyan".into());
    m.insert("PRETTY_OUTPUT".into(), "true".into());

    m
}
