// crates/service/src/server.rs
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

use comment_ripper_engine::config::LanguageCatalog;
use comment_ripper_engine::spec::LanguageSpec;
use comment_ripper_engine::fs as engine_fs;

use crate::error::AppError;
use crate::store::FileStore;

/// The one language every upload is stripped as.
pub const LANGUAGE: &str = "COBOL";

/// Extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["txt", "c", "cpp", "cbl", "ini"];

const UPLOAD_FORM: &str = r"<!doctype html>
<title>Upload new File</title>
<h1>Upload new File</h1>
<form method=post enctype=multipart/form-data>
  <p><input type=file name=file>
     <input type=submit value=Upload>
</form>
";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory uploads are saved into; cleaned copies land in its
    /// `output` subfolder.
    pub upload_dir: PathBuf,

    /// SQLite database recording uploaded filenames.
    pub db_path: PathBuf,

    /// Language configuration file.
    pub config_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            upload_dir: PathBuf::from("/tmp/code"),
            db_path: PathBuf::from("/tmp/code/files.db"),
            config_path: PathBuf::from("config.json"),
        }
    }
}

pub struct AppState {
    spec: LanguageSpec,
    upload_dir: PathBuf,
    store: Mutex<FileStore>,
}

impl AppState {
    pub fn new(spec: LanguageSpec, upload_dir: PathBuf, store: FileStore) -> Self {
        Self {
            spec,
            upload_dir,
            store: Mutex::new(store),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(upload_form).post(upload_file))
        .route("/uploads/{filename}", get(uploaded_file))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&config.upload_dir)?;

    let catalog = LanguageCatalog::load(&config.config_path)?;
    let spec = catalog.resolve(LANGUAGE)?;
    let store = FileStore::open(&config.db_path)?;
    let state = Arc::new(AppState::new(spec, config.upload_dir.clone(), store));

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;
    info!("Starting upload service on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// Accepts one multipart upload in a `file` field, strips it as
/// [`LANGUAGE`], records the filename and redirects to the cleaned copy.
async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = sanitize_filename(field.file_name().unwrap_or_default())
            .ok_or_else(|| AppError::BadRequest("File not selected, please provide a file.".to_string()))?;
        if !allowed_file(&filename) {
            return Err(AppError::BadRequest(
                "Extension not valid, please select another file.".to_string(),
            ));
        }

        let data = field.bytes().await?;
        let path = state.upload_dir.join(&filename);
        tokio::fs::write(&path, &data).await?;

        // The engine is synchronous; keep it off the async workers.
        let spec = state.spec.clone();
        let strip_path = path.clone();
        tokio::task::spawn_blocking(move || engine_fs::process_file(&strip_path, &spec))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

        state.store.lock().await.record(&filename)?;
        info!("accepted upload '{filename}'");

        return Ok(Redirect::to(&format!("/uploads/{filename}")));
    }

    Err(AppError::BadRequest(
        "File not selected, please provide a file.".to_string(),
    ))
}

/// Serves a cleaned file back by its original name.
async fn uploaded_file(
    State(state): State<Arc<AppState>>,
    axum::extract::Path(filename): axum::extract::Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let filename =
        sanitize_filename(&filename).ok_or_else(|| AppError::NotFound(filename.clone()))?;
    let path = state.upload_dir.join(engine_fs::OUTPUT_DIR).join(&filename);

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|_| AppError::NotFound(filename))?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], content))
}

/// Whether the filename carries one of the accepted extensions.
pub fn allowed_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Reduces an uploaded filename to a safe basename: directory components
/// are dropped and anything outside `[A-Za-z0-9._-]` becomes `_`. Returns
/// `None` when nothing usable remains.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = Path::new(name).file_name()?.to_str()?;
    let safe: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = safe.trim_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_extensions_are_case_insensitive() {
        assert!(allowed_file("report.TXT"));
        assert!(allowed_file("prog.cbl"));
        assert!(!allowed_file("archive.tar.gz"));
        assert!(!allowed_file("noext"));
    }

    #[test]
    fn sanitize_drops_directories_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd.txt").unwrap(), "passwd.txt");
        assert_eq!(sanitize_filename("my report.cbl").unwrap(), "my_report.cbl");
        assert_eq!(sanitize_filename("..").as_deref(), None);
        assert_eq!(sanitize_filename("").as_deref(), None);
    }
}
