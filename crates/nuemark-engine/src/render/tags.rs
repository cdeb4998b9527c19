//! Tag block renderers.
//!
//! A [`TagRenderer`] receives the parsed [`TagBlock`] and the active
//! [`Renderer`], which it can use to render the tag's nested blocks with the
//! same options.

use std::collections::HashMap;

use crate::{
    error::BoxError,
    parsing::{attrs::Attrs, blocks::TagBlock},
    render::{
        Renderer,
        html::{elem, escape},
    },
};

pub trait TagRenderer {
    fn render_tag(&self, tag: &TagBlock, renderer: &mut Renderer<'_>) -> Result<String, BoxError>;
}

/// Built-in tags: `image` plus a generic `<div>` wrapper for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTags;

impl HtmlTags {
    pub const IMAGE: &'static str = "image";

    /// `<div class="name ...">` around the rendered body.
    fn div(tag: &TagBlock, renderer: &mut Renderer<'_>) -> Result<String, BoxError> {
        let mut attrs = Attrs::new();
        if !tag.name.is_empty() {
            attrs.add_class(&tag.name);
        }
        if let Some(class) = tag.attr.get_str("class") {
            attrs.add_class(class);
        }
        if let Some(id) = tag.attr.id() {
            attrs.insert("id", id);
        }
        let body = renderer.render(&tag.blocks)?;
        Ok(elem("div", &attrs, &body))
    }

    /// `[image src=... alt=... caption=... href=...]`. A caption or id/class
    /// wraps the image in a `<figure>`.
    fn image(tag: &TagBlock) -> Result<String, BoxError> {
        let src = tag
            .data
            .get_str("src")
            .ok_or("image tag requires a `src` argument")?;
        let caption = tag.data.get_str("caption");

        let mut img_attrs = Attrs::from([("src", src)]);
        for key in ["alt", "width", "height", "loading"] {
            if let Some(value) = tag.data.get(key) {
                img_attrs.insert(key, value.clone());
            }
        }
        if !img_attrs.contains("alt") {
            if let Some(caption) = caption {
                img_attrs.insert("alt", caption);
            }
        }

        let mut img = elem("img", &img_attrs, "");
        if let Some(href) = tag.data.get_str("href") {
            img = elem("a", &Attrs::from([("href", href)]), &img);
        }

        if caption.is_none() && tag.attr.is_empty() {
            return Ok(img);
        }
        let figcaption = caption
            .map(|c| elem("figcaption", &Attrs::new(), &escape(c)))
            .unwrap_or_default();
        Ok(elem("figure", &tag.attr, &format!("{img}{figcaption}")))
    }
}

impl TagRenderer for HtmlTags {
    fn render_tag(&self, tag: &TagBlock, renderer: &mut Renderer<'_>) -> Result<String, BoxError> {
        match tag.name.as_str() {
            Self::IMAGE => Self::image(tag),
            _ => Self::div(tag, renderer),
        }
    }
}

/// Name → renderer lookup. Unregistered names fall back to [`HtmlTags`].
#[derive(Default)]
pub struct TagRegistry {
    tags: HashMap<String, Box<dyn TagRenderer>>,
    fallback: HtmlTags,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, tag: impl TagRenderer + 'static) -> &mut Self {
        let name = name.into();
        if self.tags.insert(name.clone(), Box::new(tag)).is_some() {
            log::debug!("tag `{name}` re-registered");
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }
}

impl TagRenderer for TagRegistry {
    fn render_tag(&self, tag: &TagBlock, renderer: &mut Renderer<'_>) -> Result<String, BoxError> {
        match self.tags.get(&tag.name) {
            Some(custom) => custom.render_tag(tag, renderer),
            None => self.fallback.render_tag(tag, renderer),
        }
    }
}
