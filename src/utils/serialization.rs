use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

pub fn to_json<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("serialize output: {err}")))
}

pub fn save_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut text = to_json(value)?;
    text.push('\n');
    fs::write(path, text)
}

pub fn load_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> io::Result<T> {
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, format!("deserialize input: {err}")))
}
