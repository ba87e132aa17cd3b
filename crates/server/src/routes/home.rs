use actix_files::NamedFile;
use actix_web::{get, web};
use std::sync::Arc;

use crate::state::AppState;

/// Landing page
#[get("/")]
pub async fn home(state: web::Data<Arc<AppState>>) -> actix_web::Result<NamedFile> {
    let index = state.config.static_dir.join("index.html");
    Ok(NamedFile::open(index)?)
}
