use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::parse_frontmatter;
use crate::domain::{Node, Page};

/// Builds the sidebar tree for one directory level, recursing into
/// subdirectories. Dot-entries (`.git` included) are skipped, as are
/// non-markdown files. Folders sort before pages; each group is ordered by
/// name, case-sensitive ascending.
///
/// The walk runs against the live mirror with no locking; an entry that a
/// concurrent pull removes mid-walk is simply dropped from the tree.
pub fn build_menu(dir: &Path, root: &Path) -> Node {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut node = Node {
        name,
        nodes: Vec::new(),
        pages: Vec::new(),
    };

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok());

    for entry in entries {
        let file_name = entry.file_name().to_string_lossy();
        if file_name.starts_with('.') {
            continue;
        }
        if entry.file_type().is_dir() {
            node.nodes.push(build_menu(entry.path(), root));
        } else if file_name.ends_with(".md") {
            if let Some(page) = page_for(entry.path(), root) {
                node.pages.push(page);
            }
        }
    }
    node
}

fn page_for(path: &Path, root: &Path) -> Option<Page> {
    let text = fs::read_to_string(path).ok()?;
    let (metadata, _) = parse_frontmatter(&text);
    let title = metadata.get("menu_option").cloned().unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    let relative = path.strip_prefix(root).ok()?;
    let link = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Some(Page { title, path: link })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn builds_nested_tree_with_labels() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "guide/intro.md", "---\nmenu_option: Intro\n---\n# Hello");
        write(root, "guide/setup.md", "# Setup");
        write(root, "readme.md", "plain body");
        write(root, "logo.png", "not markdown");
        write(root, ".git/config", "[core]");

        let tree = build_menu(root, root);

        // .git excluded, logo.png produces no page
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.pages.len(), 1);
        assert_eq!(tree.pages[0].title, "readme");
        assert_eq!(tree.pages[0].path, "readme.md");

        let guide = &tree.nodes[0];
        assert_eq!(guide.name, "guide");
        assert!(guide.nodes.is_empty());
        assert_eq!(guide.pages.len(), 2);
        assert_eq!(guide.pages[0].title, "Intro");
        assert_eq!(guide.pages[0].path, "guide/intro.md");
        assert_eq!(guide.pages[1].title, "setup");
        assert_eq!(guide.pages[1].path, "guide/setup.md");
    }

    #[test]
    fn orders_folders_and_pages_by_name() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "zoo/a.md", "z");
        write(root, "api/a.md", "a");
        write(root, "zeta.md", "z");
        write(root, "alpha.md", "a");

        let tree = build_menu(root, root);
        let folder_names: Vec<&str> = tree.nodes.iter().map(|n| n.name.as_str()).collect();
        let page_titles: Vec<&str> = tree.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(folder_names, ["api", "zoo"]);
        assert_eq!(page_titles, ["alpha", "zeta"]);
    }

    #[test]
    fn hidden_files_are_skipped_too() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, ".hidden.md", "secret");
        write(root, "visible.md", "ok");

        let tree = build_menu(root, root);
        assert_eq!(tree.pages.len(), 1);
        assert_eq!(tree.pages[0].title, "visible");
    }

    #[test]
    fn empty_directory_yields_empty_node() {
        let dir = TempDir::new().unwrap();
        let tree = build_menu(dir.path(), dir.path());
        assert!(tree.nodes.is_empty());
        assert!(tree.pages.is_empty());
    }
}
