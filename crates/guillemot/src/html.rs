use std::fmt::Write;

use indexmap::IndexMap;

#[derive(Debug)]
pub struct HtmlElement {
    pub tag_name: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<HtmlNode>,
}

#[derive(Debug)]
pub enum HtmlNode {
    Element(HtmlElement),
    Text(String),
}

impl From<HtmlElement> for HtmlNode {
    fn from(element: HtmlElement) -> Self {
        Self::Element(element)
    }
}

impl From<String> for HtmlNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for HtmlNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl HtmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag_name: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr<V>(mut self, name: impl Into<String>, value: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        let name = name.into();
        match value.into() {
            Some(value) => {
                *self.attrs.entry(name).or_default() = value.into();
            }
            None => {
                self.attrs.remove(&name);
            }
        }

        self
    }

    pub fn child(mut self, child: impl Into<HtmlNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<N>(mut self, children: impl IntoIterator<Item = N>) -> Self
    where
        N: Into<HtmlNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn render_to_string(&self) -> Result<String, std::fmt::Error> {
        let mut html = String::new();
        self.render_into(&mut html)?;

        Ok(html)
    }

    fn render_into(&self, html: &mut String) -> std::fmt::Result {
        if self.tag_name == "html" {
            write!(html, "<!DOCTYPE html>")?;
        }

        write!(html, "<{}", self.tag_name)?;

        for (name, value) in &self.attrs {
            write!(html, " ")?;
            if value.is_empty() {
                write!(html, "{name}")?;
            } else {
                write!(html, r#"{name}="{}""#, escape_attr(value))?;
            }
        }

        write!(html, ">")?;

        for child in &self.children {
            match child {
                HtmlNode::Element(element) => element.render_into(html)?,
                HtmlNode::Text(text) => write!(html, "{}", escape_text(text))?,
            }
        }

        write!(html, "</{}>", self.tag_name)?;

        Ok(())
    }
}

impl HtmlElement {
    pub fn id<V>(self, id: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("id", id)
    }

    pub fn class<V>(self, class: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("class", class)
    }

    pub fn href<V>(self, href: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("href", href)
    }

    pub fn lang<V>(self, lang: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("lang", lang)
    }

    pub fn title<V>(self, title: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("title", title)
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

pub fn html() -> HtmlElement {
    HtmlElement::new("html")
}

pub fn head() -> HtmlElement {
    HtmlElement::new("head")
}

pub fn title() -> HtmlElement {
    HtmlElement::new("title")
}

pub fn style() -> HtmlElement {
    HtmlElement::new("style")
}

pub fn body() -> HtmlElement {
    HtmlElement::new("body")
}

pub fn section() -> HtmlElement {
    HtmlElement::new("section")
}

pub fn div() -> HtmlElement {
    HtmlElement::new("div")
}

pub fn a() -> HtmlElement {
    HtmlElement::new("a")
}

pub fn span() -> HtmlElement {
    HtmlElement::new("span")
}

pub fn p() -> HtmlElement {
    HtmlElement::new("p")
}

pub fn h1() -> HtmlElement {
    HtmlElement::new("h1")
}

pub fn h2() -> HtmlElement {
    HtmlElement::new("h2")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render() {
        let element = div()
            .class("outer")
            .child(div().class("inner").child(h1().child("Hello!")));

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<div class="outer"><div class="inner"><h1>Hello!</h1></div></div>"#
        );
    }

    #[test]
    fn test_render_escapes_text() {
        let element = span().child("Fish & Chips <3");

        assert_eq!(
            element.render_to_string().unwrap(),
            "<span>Fish &amp; Chips &lt;3</span>"
        );
    }

    #[test]
    fn test_render_escapes_attrs() {
        let element = a().href(r#"/tags/say-"what""#).child("say \"what\"");

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<a href="/tags/say-&quot;what&quot;">say "what"</a>"#
        );
    }

    #[test]
    fn test_attrs_render_in_insertion_order() {
        let element = a().class("tag-link").href("/tags/rust");

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<a class="tag-link" href="/tags/rust"></a>"#
        );
    }

    #[test]
    fn test_html_renders_its_doctype() {
        let element = html().lang("en").child(body());

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<!DOCTYPE html><html lang="en"><body></body></html>"#
        );
    }
}
