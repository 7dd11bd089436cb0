//! Page generation over a content tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use turnup::{extract_title, markdown_to_html};

use crate::template::Template;

/// Compile one Markdown file into an HTML page.
pub fn generate_page(from: &Path, template: &Template, dest: &Path) -> Result<()> {
    info!(from = %from.display(), dest = %dest.display(), "generating page");

    let markdown =
        fs::read_to_string(from).with_context(|| format!("reading {}", from.display()))?;
    let title = extract_title(&markdown)
        .with_context(|| format!("extracting title from {}", from.display()))?;
    let content =
        markdown_to_html(&markdown).with_context(|| format!("compiling {}", from.display()))?;

    fs::write(dest, template.apply(&title, &content))
        .with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}

/// Walk the content tree depth-first and mirror it into the destination,
/// compiling every file with its extension swapped to `.html`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
) -> Result<()> {
    let entries = fs::read_dir(content_dir)
        .with_context(|| format!("reading content directory {}", content_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let dest = dest_dir.join(entry.file_name());
            fs::create_dir_all(&dest)
                .with_context(|| format!("creating directory {}", dest.display()))?;
            generate_pages_recursive(&path, template, &dest)?;
        } else {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<title>{{ Title }}</title><body>{{ Content }}</body>";

    #[test]
    fn test_generate_page() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("index.md");
        fs::write(&from, "# Home\n\nWelcome to **turnup**.").unwrap();

        let dest = tmp.path().join("index.html");
        generate_page(&from, &Template::new(TEMPLATE), &dest).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<title>Home</title><body><div><h1>Home</h1><p>Welcome to \
             <b>turnup</b>.</p></div></body>"
        );
    }

    #[test]
    fn test_generate_page_without_title_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("untitled.md");
        fs::write(&from, "just a paragraph").unwrap();

        let dest = tmp.path().join("untitled.html");
        let err = generate_page(&from, &Template::new(TEMPLATE), &dest).unwrap_err();
        assert!(err.to_string().contains("extracting title"));
        assert!(!dest.exists());
    }

    #[test]
    fn test_generate_pages_recursive_mirrors_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(content.join("blog")).unwrap();
        fs::write(content.join("index.md"), "# Home\n\nhi").unwrap();
        fs::write(content.join("blog/post.md"), "# Post\n\nwords").unwrap();

        let public = tmp.path().join("public");
        fs::create_dir_all(&public).unwrap();
        generate_pages_recursive(&content, &Template::new(TEMPLATE), &public).unwrap();

        assert!(public.join("index.html").exists());
        assert!(public.join("blog/post.html").exists());
        let post = fs::read_to_string(public.join("blog/post.html")).unwrap();
        assert!(post.contains("<title>Post</title>"));
    }
}
