use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::content::{from_toml_datetime, parse_front_matter, Posts};

#[derive(Debug)]
pub struct Post {
    pub meta: PostFrontMatter,
    pub path: PathBuf,
    pub slug: String,
    pub raw_content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostFrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,

    #[serde(default, deserialize_with = "from_toml_datetime")]
    pub date: Option<String>,

    /// Tag display names, verbatim. Slugging happens at link-building time.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Error, Debug)]
pub enum ParsePostError {
    #[error("failed to read post: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid front matter in {filepath:?}")]
    InvalidFrontMatter { filepath: PathBuf },
}

impl Post {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParsePostError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        Self::parse(&contents, path)
    }

    pub fn parse(text: &str, filepath: &Path) -> Result<Self, ParsePostError> {
        let (front_matter, content) =
            parse_front_matter::<PostFrontMatter>(text).ok_or_else(|| {
                ParsePostError::InvalidFrontMatter {
                    filepath: filepath.to_owned(),
                }
            })?;

        let slug = front_matter.slug.clone().unwrap_or_else(|| {
            filepath
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default()
        });

        Ok(Self {
            meta: front_matter,
            path: filepath.to_owned(),
            slug,
            raw_content: content.to_string(),
        })
    }
}

#[derive(Error, Debug)]
pub enum LoadPostsError {
    #[error("failed to walk content directory: {0}")]
    Io(#[from] walkdir::Error),

    #[error("failed to parse post: {0}")]
    ParsePost(#[from] ParsePostError),
}

/// Loads every post beneath `content_path`.
pub fn load_posts(content_path: impl AsRef<Path>) -> Result<Posts, LoadPostsError> {
    let walker = WalkDir::new(content_path.as_ref())
        .follow_links(true)
        .into_iter();

    let mut posts = Posts::default();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str() else {
            continue;
        };

        if !filename.ends_with(".md") || filename.starts_with('.') {
            continue;
        }

        let post = Post::from_path(path)?;
        posts.insert(post.path.clone(), post);
    }

    Ok(posts)
}
