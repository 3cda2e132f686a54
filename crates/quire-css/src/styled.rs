//! Per-node style handles.
//!
//! A [`StyledElement`] holds the declarations the cascade settled on for one
//! node and exposes them through typed lookups. Each lookup reports one of
//! the three cascade outcomes; the renderer decides what to do with
//! `Inherit` and `NoStyles`.

use std::collections::HashMap;

use quire_common::warning::warn_once;

use crate::cascade::{Cascaded, Declared, StyleError};
use crate::display::DisplayType;
use crate::values::{ColorValue, parse_px};

/// Cascaded declarations for a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledElement {
    declarations: HashMap<String, Declared>,
}

impl StyledElement {
    /// A handle with no declarations; every lookup reports `NoStyles`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyledElement::set`].
    #[must_use]
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.set(property, value);
        self
    }

    /// Record the cascaded text for `property`. `inherit` is recognised.
    pub fn set(&mut self, property: &str, value: &str) {
        let _previous = self
            .declarations
            .insert(property.to_ascii_lowercase(), Declared::parse(value));
    }

    /// The raw declaration for `property`, if any.
    pub fn declared(&self, property: &str) -> Option<&Declared> {
        self.declarations.get(property)
    }

    /// Whether no declarations were cascaded onto this node.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn lookup(&self, property: &str) -> Cascaded<&str> {
        match self.declarations.get(property) {
            Some(Declared::Value(text)) => Cascaded::Value(text.as_str()),
            Some(Declared::Inherit) => Cascaded::Inherit,
            None => Cascaded::NoStyles,
        }
    }

    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    ///
    /// The node's own font size in whole pixels.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] when the declared value is not an
    /// absolute pixel length within [`MAX_PX`](crate::MAX_PX). The renderer
    /// has no fallback for this case.
    pub fn font_size(&self) -> Result<Cascaded<i32>, StyleError> {
        match self.lookup("font-size") {
            Cascaded::Value(text) => parse_px(text).map(Cascaded::Value).ok_or_else(|| {
                StyleError::InvalidValue {
                    property: "font-size".to_string(),
                    value: text.to_string(),
                }
            }),
            Cascaded::Inherit => Ok(Cascaded::Inherit),
            Cascaded::NoStyles => Ok(Cascaded::NoStyles),
        }
    }

    /// Override the node's font size in place.
    pub fn set_font_size(&mut self, px: i32) {
        self.set("font-size", &format!("{px}px"));
    }

    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    ///
    /// An unparseable value is reported once and resolves to `default`.
    pub fn background_color(&self, default: ColorValue) -> Cascaded<ColorValue> {
        self.lookup("background-color")
            .map(|text| parse_color("background-color", text).unwrap_or(default))
    }

    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    ///
    /// The text color, or `default` when unset, inherited or unparseable.
    pub fn color(&self, default: ColorValue) -> ColorValue {
        self.lookup("color")
            .value()
            .and_then(|text| parse_color("color", text))
            .unwrap_or(default)
    }

    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// `None` when the property is unset, inherited or empty.
    pub fn display_type(&self) -> Option<DisplayType> {
        self.lookup("display")
            .value()
            .filter(|text| !text.is_empty())
            .and_then(|text| text.parse().ok())
    }

    /// An explicit, non-negative pixel length for `property`.
    ///
    /// `auto`, `inherit` and unset all yield `None`; other unsupported
    /// values are reported once and also yield `None`.
    pub fn pixel_length(&self, property: &str) -> Option<i32> {
        let text = self.lookup(property).value()?;
        if text.eq_ignore_ascii_case("auto") {
            return None;
        }
        let px = parse_px(text);
        if px.is_none() {
            warn_once("CSS", &format!("ignoring unsupported length {property}: {text}"));
        }
        px
    }

    /// [`StyledElement::pixel_length`] with a fallback.
    pub fn pixel_length_or(&self, property: &str, default: i32) -> i32 {
        self.pixel_length(property).unwrap_or(default)
    }
}

fn parse_color(property: &str, text: &str) -> Option<ColorValue> {
    match text.parse() {
        Ok(color) => Some(color),
        Err(err) => {
            warn_once("CSS", &format!("ignoring {property}: {err}"));
            None
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for StyledElement {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut styles = Self::new();
        for (property, value) in iter {
            styles.set(property.as_ref(), value.as_ref());
        }
        styles
    }
}
