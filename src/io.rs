use std::io::Write;
use std::path::Path;

/// Config and result file formats understood by `read_cfg_file`.
pub const SUPPORTED_FILETYPES: &[&str] = &["json", "toml", "yaml", "yml"];

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Deserialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error (`None` for stdout).
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn at(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Read a whole file to a string with verbose errors.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Write bytes to a file with verbose errors.
pub fn write_to_file(path: &str, buffer: &[u8]) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Write a rendered image to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&str>, buffer: &[u8]) -> IoResult<()> {
    match path {
        Some(path) => write_to_file(path, buffer),
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(buffer)
                .and_then(|_| lock.flush())
                .map_err(|error| IoError{file: None, cause: IoErrorType::File(error)})
        },
    }
}

/// Read in cfg files from the supported filetypes, chosen by extension.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    let extension = Path::new(path).extension().and_then(|ext| ext.to_str());
    match extension {
        Some("json") => {
            serde_json::from_reader(std::io::BufReader::new(open(path)?))
                .map_err(|error| IoError::at(path, IoErrorType::SerdeJson(error)))
        },
        Some("toml") => {
            toml::from_str(&read_to_string(path)?)
                .map_err(|error| IoError::at(path, IoErrorType::TomlDe(error)))
        },
        Some("yaml") | Some("yml") => {
            serde_yaml::from_reader(open(path)?)
                .map_err(|error| IoError::at(path, IoErrorType::SerdeYaml(error)))
        },
        _ => {
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, SUPPORTED_FILETYPES);
            Err(IoError::at(path, IoErrorType::StringOnly(error_string)))
        },
    }
}
