use anyhow::{Context as _, Result};
use log::error;
use tera::{Context, Tera};

use crate::domain::Node;

pub fn init_tera() -> Result<Tera> {
    Tera::new("templates/**/*.html").context("failed to initialize templates")
}

/// Composes the full page: style block, sidebar tree (or the not-ready
/// placeholder when the mirror is absent) and the rendered main content.
/// A template failure degrades to a plain error body, still served as 200.
pub fn render_page(tera: &Tera, tree: Option<&Node>, content: &str) -> String {
    let mut context = Context::new();
    context.insert("tree", &tree);
    context.insert("content", &content);
    match tera.render("base.html", &context) {
        Ok(html) => html,
        Err(err) => {
            error!("template rendering failed for base.html: {err}");
            format!("template rendering failed: {err}")
        }
    }
}
