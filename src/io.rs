use serde::{de::DeserializeOwned, Serialize};

/// Scene file formats.
/// Read from the file extension, or picked on the command line for printed scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// Extensions accepted for scene files.
    pub const EXTENSIONS: [&'static str; 4] = ["json", "toml", "yaml", "yml"];

    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> IoResult<Self> {
        let extension = std::path::Path::new(path).extension().and_then(|ext| ext.to_str());
        match extension {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(IoError{
                file: Some(path.to_string()),
                cause: IoErrorType::UnsupportedFormat(format!(
                    "Unsupported filetype for scene file: {}\nSupported filetypes: {:?}", path, Format::EXTENSIONS,
                )),
            }),
        }
    }
}

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlDe(toml::de::Error),
    TomlSer(toml::ser::Error),
    UnsupportedFormat(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::UnsupportedFormat(error) => write!(f, "- {}", error),
        }
    }
}

/// Verbose IO error, with the file it came from when there is one.
#[derive(Debug)]
pub struct IoError {
    pub file: Option<String>,
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}
impl From<IoErrorType> for IoError {
    fn from(cause: IoErrorType) -> Self {
        IoError{file: None, cause}
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Parse a value from text in the given format.
pub fn parse_str<T>(format: Format, contents: &str) -> std::result::Result<T, IoErrorType>
where T: DeserializeOwned
{
    match format {
        Format::Json => serde_json::from_str(contents).map_err(IoErrorType::SerdeJson),
        Format::Toml => toml::from_str(contents).map_err(IoErrorType::TomlDe),
        Format::Yaml => serde_yaml::from_str(contents).map_err(IoErrorType::SerdeYaml),
    }
}

/// Render a value as text in the given format.
pub fn render<T>(format: Format, value: &T) -> IoResult<String>
where T: Serialize + ?Sized
{
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(value).map_err(IoErrorType::SerdeJson)?,
        Format::Toml => toml::to_string_pretty(value).map_err(IoErrorType::TomlSer)?,
        Format::Yaml => serde_yaml::to_string(value).map_err(IoErrorType::SerdeYaml)?,
    };
    Ok(rendered)
}

/// Read a scene-like config file, with the format picked by extension.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: DeserializeOwned
{
    let format = Format::from_path(path)?;
    let contents = std::fs::read_to_string(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})?;
    parse_str(format, &contents).map_err(|cause| IoError{file: Some(path.to_string()), cause})
}

/// Write a value to a file as pretty JSON.
pub fn write_json<T>(path: &str, value: &T) -> IoResult<()>
where T: Serialize + ?Sized
{
    let buffer = render(Format::Json, value)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: error.cause})?;
    std::fs::write(path, buffer)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Tiny {
        value: f64,
    }

    fn temp_path(name: &str) -> String {
        std::env::temp_dir().join(format!("planar_io_{}_{}", std::process::id(), name)).to_string_lossy().to_string()
    }

    #[test]
    fn reads_each_supported_format() {
        let cases = [
            ("tiny.json", "{\"value\": 1.5}"),
            ("tiny.toml", "value = 1.5"),
            ("tiny.yaml", "value: 1.5"),
            ("tiny.yml", "value: 1.5"),
        ];
        for (name, contents) in cases {
            let path = temp_path(name);
            std::fs::write(&path, contents).unwrap();
            let tiny: Tiny = read_cfg_file(&path).unwrap();
            assert_eq!(tiny.value, 1.5, "failed on {}", name);
            std::fs::remove_file(&path).unwrap();
        }
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path("scenes/a.b/scene.yml").unwrap(), Format::Yaml);
        assert_eq!(Format::from_path("scene.toml").unwrap(), Format::Toml);
        assert!(Format::from_path("scene").is_err());
    }

    #[test]
    fn unsupported_extension_names_the_file() {
        let error = read_cfg_file::<Tiny>("scene.txt").unwrap_err();
        assert_eq!(error.file.as_deref(), Some("scene.txt"));
        assert!(matches!(error.cause, IoErrorType::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let error = read_cfg_file::<Tiny>(&temp_path("does_not_exist.yaml")).unwrap_err();
        assert!(matches!(error.cause, IoErrorType::File(_)));
    }

    #[test]
    fn bad_contents_keep_the_format_error() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "{\"value\": ").unwrap();
        let error = read_cfg_file::<Tiny>(&path).unwrap_err();
        assert!(matches!(error.cause, IoErrorType::SerdeJson(_)));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rendered_text_parses_back() {
        for format in [Format::Json, Format::Toml, Format::Yaml] {
            let rendered = render(format, &Tiny{value: -2.25}).unwrap();
            let tiny: Tiny = parse_str(format, &rendered).unwrap();
            assert_eq!(tiny.value, -2.25, "failed on {:?}", format);
        }
    }

    #[test]
    fn writes_pretty_json() {
        let path = temp_path("written.json");
        write_json(&path, &[Tiny{value: 1.0}, Tiny{value: 2.0}]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n"));
        let back: Vec<Tiny> = parse_str(Format::Json, &contents).unwrap();
        assert_eq!(back.len(), 2);
        std::fs::remove_file(&path).unwrap();
    }
}
