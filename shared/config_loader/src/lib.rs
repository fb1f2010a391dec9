//! # Config Loader
//!
//! Una librería genérica para leer y escribir archivos de texto completos
//! desde disco: documentos JSON y archivos de configuración.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_text_file, save_file};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Opción 1: Buscar automáticamente
//!     let path = find_config_file("jsondoc.json")?;
//!     let content = load_text_file(&path)?;
//!
//!     // Opción 2: Path específico
//!     let content = load_text_file("./data/document.json")?;
//!
//!     // El consumidor decide cómo parsear
//!     // let doc = json_doc::parse(&content)?;
//!
//!     // Escritura atómica: archivo temporal + rename
//!     save_file("./data/document.json", &content)?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

/// Variable de entorno que apunta directamente al archivo de configuración
pub const CONFIG_ENV: &str = "JSONDOC_CONFIG";

const UTF8_BOM: char = '\u{feff}';

/// Carga el contenido completo de un archivo de texto.
///
/// Lee el archivo especificado y retorna su contenido como String, sin el
/// BOM UTF-8 inicial si lo tuviera.
/// No parsea ni valida el contenido - eso es responsabilidad del consumidor.
///
/// # Ejemplos
///
/// ```no_run
/// use config_loader::load_text_file;
///
/// let content = load_text_file("./config/jsondoc.json")?;
/// println!("Config content: {}", content);
/// # Ok::<(), config_loader::ConfigError>(())
/// ```
pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)
        .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
    let content = String::from_utf8(bytes).map_err(|e| ConfigError::InvalidUtf8 {
        path: path.display().to_string(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    Ok(match content.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Escribe `contents` como el archivo completo en `path`.
///
/// Primero escribe un archivo temporal en el mismo directorio y luego lo
/// renombra, así un lector nunca ve un archivo a medio escribir.
pub fn save_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let write_error = |e: std::io::Error| ConfigError::WriteError(format!("{}: {}", path.display(), e));

    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::WriteError(format!("Ruta sin nombre de archivo: {}", path.display())))?;
    let temp_path = path.with_file_name(format!(
        ".{}.tmp-{}",
        file_name.to_string_lossy(),
        process::id()
    ));

    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(e)
    })
}

/// Busca un archivo de configuración en ubicaciones comunes.
///
/// Busca en el siguiente orden:
/// 1. Variable de entorno `JSONDOC_CONFIG` (si existe)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
///
/// # Ejemplos
///
/// ```no_run
/// use config_loader::find_config_file;
///
/// // Busca jsondoc.json en ubicaciones comunes
/// let path = find_config_file("jsondoc.json")?;
/// println!("Found config at: {}", path.display());
/// # Ok::<(), config_loader::ConfigError>(())
/// ```
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    locate(filename, env::var(CONFIG_ENV).ok(), Path::new("."))
}

/// Busca y carga un archivo de configuración automáticamente.
///
/// Combina `find_config_file` y `load_text_file` en un solo paso.
///
/// # Ejemplos
///
/// ```no_run
/// use config_loader::find_and_load;
///
/// let content = find_and_load("jsondoc.json")?;
/// // Ahora parsea el contenido según tu necesidad
/// # Ok::<(), config_loader::ConfigError>(())
/// ```
pub fn find_and_load(filename: &str) -> Result<String> {
    let path = find_config_file(filename)?;
    load_text_file(path)
}

fn locate(filename: &str, env_path: Option<String>, base: &Path) -> Result<PathBuf> {
    // 1. Variable de entorno
    if let Some(path) = env_path {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    // 2. {base}/config/{filename}
    let config_dir = base.join("config").join(filename);
    if config_dir.exists() {
        return Ok(config_dir);
    }

    // 3. {base}/{filename}
    let current_dir = base.join(filename);
    if current_dir.exists() {
        return Ok(current_dir);
    }

    Err(ConfigError::FileNotFound(format!(
        "No se encontró '{}'. Buscado en: {} env var, ./config/{}, ./{}",
        filename, CONFIG_ENV, filename, filename
    )))
}
