use quick_xml::events::attributes::AttrError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ErrorType {
    InputError,
    FormatError,
    IoError,
    LogicError,
    ExternalError,
}

#[derive(Debug, Clone, Serialize)]
pub struct Error {
    #[serde(rename = "type")]
    type_: ErrorType,
    msg: String,
}

impl Error {
    pub fn new(type_: ErrorType, msg: String) -> Self {
        Error { type_, msg }
    }

    pub fn new_s(type_: ErrorType, msg: &str) -> Self {
        Error {
            type_,
            msg: msg.into(),
        }
    }

    pub fn convert<T>(type_: ErrorType, msg: &str, err: &T) -> Self
    where
        T: fmt::Display,
    {
        Error::new(type_, format!("{}: {}", msg, err))
    }

    pub fn get_type(&self) -> ErrorType {
        self.type_
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.type_, self.msg)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::new(ErrorType::IoError, value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        let error_type = match value.classify() {
            serde_json::error::Category::Io => ErrorType::IoError,
            _ => ErrorType::FormatError,
        };
        Error::new(error_type, value.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(value: quick_xml::Error) -> Self {
        match value {
            quick_xml::Error::Io(err) => {
                Error::new(ErrorType::IoError, err.to_string())
            }
            _ => Error::new(ErrorType::FormatError, value.to_string()),
        }
    }
}

impl From<AttrError> for Error {
    fn from(value: AttrError) -> Self {
        Error::convert(ErrorType::FormatError, "invalid attribute", &value)
    }
}

impl From<regex::Error> for Error {
    fn from(value: regex::Error) -> Self {
        Error::convert(ErrorType::InputError, "invalid name pattern", &value)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Error::new(ErrorType::ExternalError, value.to_string())
    }
}

pub fn convert_err<T, Err>(
    result: std::result::Result<T, Err>,
    error_type: ErrorType,
) -> Result<T>
where
    Err: std::error::Error,
{
    result.map_err(|err| Error::new(error_type, err.to_string()))
}
