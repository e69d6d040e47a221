use serde::Serialize;
use std::collections::HashMap;

/// Frontmatter key/value pairs. All keys are parsed and kept; rendering
/// currently consumes only `menu_option` (the sidebar label).
pub type Metadata = HashMap<String, String>;

/// One folder in the sidebar tree. Child folders render before pages,
/// each group sorted by name.
#[derive(Debug, Serialize, Clone)]
pub struct Node {
    pub name: String,
    pub nodes: Vec<Node>,
    pub pages: Vec<Page>,
}

/// A renderable markdown document in the sidebar.
#[derive(Debug, Serialize, Clone)]
pub struct Page {
    pub title: String,
    /// Path relative to the mirror root, `/`-separated. Used as the link target.
    pub path: String,
}
