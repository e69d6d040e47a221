use comrak::ComrakOptions;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tera::Tera;
use warp::Filter;

use crate::content::{parse_frontmatter, render_markdown};
use crate::menu::build_menu;
use crate::template::render_page;

const SELECT_PROMPT: &str = "<h1>Select a file from the menu</h1>";
const NOT_FOUND: &str = "<h1>File not found</h1>";

pub struct AppState {
    pub tera: Tera,
    pub mirror_dir: PathBuf,
    pub comrak_options: ComrakOptions,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub file: Option<String>,
}

/// The single content route: `GET /?file=<relative path>`.
pub fn routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::get()
        .and(warp::path::end())
        .and(warp::query::<PageQuery>())
        .map(move |query: PageQuery| warp::reply::html(page(&state, &query)))
}

fn page(state: &AppState, query: &PageQuery) -> String {
    let main_content = match &query.file {
        Some(relative) => {
            load_document(state, relative).unwrap_or_else(|| NOT_FOUND.to_string())
        }
        None => SELECT_PROMPT.to_string(),
    };

    // Rebuilt from the live mirror on every request; nothing is cached.
    let tree = state
        .mirror_dir
        .exists()
        .then(|| build_menu(&state.mirror_dir, &state.mirror_dir));

    render_page(&state.tera, tree.as_ref(), &main_content)
}

/// Resolves the requested path inside the mirror and renders it. Containment
/// is verified segment-wise on canonical paths, so `../` escapes and sibling
/// directories sharing a name prefix with the mirror root both fail closed.
/// Any failure maps to `None` and renders as the not-found message.
fn load_document(state: &AppState, relative: &str) -> Option<String> {
    let root = state.mirror_dir.canonicalize().ok()?;
    let resolved = state.mirror_dir.join(relative).canonicalize().ok()?;
    if !resolved.starts_with(&root) || !resolved.is_file() {
        return None;
    }
    let text = fs::read_to_string(&resolved).ok()?;
    let (_metadata, body) = parse_frontmatter(&text);
    Some(render_markdown(body, &state.comrak_options))
}
