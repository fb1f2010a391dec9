use std::fmt;

/// Tipo de resultado usado en toda la librería
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errores que pueden ocurrir al leer o escribir archivos
#[derive(Debug)]
pub enum ConfigError {
    /// El archivo no fue encontrado
    FileNotFound(String),

    /// Error al leer el archivo (permisos, es un directorio, ...)
    ReadError(String),

    /// El archivo se leyó pero su contenido no es UTF-8 válido
    InvalidUtf8 { path: String, valid_up_to: usize },

    /// Error al escribir o renombrar el archivo
    WriteError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Archivo no encontrado: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Error al leer archivo: {}", msg)
            }
            ConfigError::InvalidUtf8 { path, valid_up_to } => {
                write!(f, "UTF-8 inválido en {} (byte {})", path, valid_up_to)
            }
            ConfigError::WriteError(msg) => {
                write!(f, "Error al escribir archivo: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
