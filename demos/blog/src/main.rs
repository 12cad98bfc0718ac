use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use guillemot::content::{load_posts, TagSource};
use guillemot::html::*;
use guillemot::widgets::{popular_tags_widget, PopularTagsProps};
use guillemot::SiteConfig;

fn main() -> Result<()> {
    let root = PathBuf::from("demos/blog");

    let config = SiteConfig::from_path(root.join("config.toml"))?;
    let posts = load_posts(root.join("content"))?;
    let groups = posts.tag_groups()?;

    let rendered = page(PageProps {
        config: &config,
        children: vec![popular_tags_widget(PopularTagsProps {
            config: &config,
            groups,
        })],
    })
    .render_to_string()?;

    fs::create_dir_all(root.join("public"))?;

    let filepath = root.join("public").join("index.html");
    let mut out_file = File::create(&filepath)?;
    out_file.write_all(rendered.as_bytes())?;

    println!("Wrote {:?}", filepath);

    Ok(())
}

struct PageProps<'a> {
    pub config: &'a SiteConfig,
    pub children: Vec<HtmlElement>,
}

fn page(PageProps { config, children }: PageProps) -> HtmlElement {
    let styles = r#"
        body {
            background-color: darkslategray;
            color: #f4f4f4;
            font-family: sans-serif;
        }

        .content {
            max-width: 720px;
            margin: auto;
        }

        .tc { text-align: center; }
        .flex { display: flex; }
        .items-center { align-items: center; }
        .mt4 { margin-top: 2rem; }
        .mb1 { margin-bottom: 0.25rem; }
        .mb5 { margin-bottom: 4rem; }
        .mr2 { margin-right: 0.5rem; }

        .tag-link {
            color: #f4f4f4;
            text-decoration: none;
        }

        .tag-count {
            color: #9db4b4;
        }
    "#;

    let page_title = config.title.clone().unwrap_or_else(|| "Blog".to_string());

    html()
        .lang("en")
        .child(
            head()
                .child(title().child(page_title.as_str()))
                .child(style().child(styles)),
        )
        .child(
            body()
                .child(h1().class("tc").child(page_title.as_str()))
                .child(
                    div()
                        .class("content")
                        .child(h2().child("Popular tags"))
                        .children(children),
                ),
        )
}
