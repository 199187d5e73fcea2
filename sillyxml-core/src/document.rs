// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Labeled document tree: the serialized form the codec produces and consumes.
//!
//! A [`DocumentNode`] is either a *leaf* (optional text, no children) or a
//! *branch* (ordered children, no text). The setters keep that invariant:
//! setting text drops children and appending a child drops text.
//!
//! Parsing is backed by `roxmltree`, rendering by `quick-xml`'s writer.
//! Attributes, comments, processing instructions and the declaration are
//! ignored on input; mixed text/element content is rejected.

use crate::config::Config;
use crate::error::Error;
use crate::types::DECLARATION;
use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentNode {
    name: String,
    text: Option<String>,
    children: Vec<DocumentNode>,
}

impl DocumentNode {
    pub fn new<S: Into<String>>(name: S) -> DocumentNode {
        DocumentNode {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Leaf node carrying `text`.
    pub fn with_text<S: Into<String>, T: Into<String>>(name: S, text: T) -> DocumentNode {
        DocumentNode {
            name: name.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    #[inline(always)]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Turns the node into a leaf; existing children are dropped.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.children.clear();
        self.text = Some(text.into());
    }

    /// Turns the node into a branch; existing text is dropped.
    pub fn append_child(&mut self, child: DocumentNode) {
        self.text = None;
        self.children.push(child);
    }

    #[inline(always)]
    pub fn children(&self) -> &[DocumentNode] {
        &self.children
    }

    pub fn into_children(self) -> Vec<DocumentNode> {
        self.children
    }

    #[inline(always)]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// No children and no (or empty) text: the encoding of an absent value.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.as_deref().map_or(true, str::is_empty)
    }

    /// Parses raw text into a tree rooted at the document element.
    pub fn parse(text: &str) -> Result<DocumentNode, Error> {
        let document = roxmltree::Document::parse(text)
            .map_err(|e| Error::parse_error(format!("Failed to parse document: {}", e)))?;
        from_element(document.root_element())
    }

    /// Renders the tree, prefixed with the declaration header when configured.
    pub fn render(&self, config: &Config) -> Result<String, Error> {
        let body = match config.indent() {
            Some(width) => {
                let mut writer = Writer::new_with_indent(Vec::new(), b' ', width);
                self.write_to(&mut writer)?;
                writer.into_inner()
            }
            None => {
                let mut writer = Writer::new(Vec::new());
                self.write_to(&mut writer)?;
                writer.into_inner()
            }
        };
        let body = String::from_utf8(body)
            .map_err(|e| Error::render_error(format!("Rendered document is not UTF-8: {}", e)))?;
        if !config.is_declaration() {
            return Ok(body);
        }
        let separator = if config.indent().is_some() { "\n" } else { "" };
        Ok(format!("{}{}{}", DECLARATION, separator, body))
    }

    fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        let name = self.name.as_str();
        if self.is_empty() {
            return write_event(writer, Event::Empty(BytesStart::new(name)));
        }
        write_event(writer, Event::Start(BytesStart::new(name)))?;
        match &self.text {
            Some(text) => {
                let escaped = escape_text(text)?;
                write_event(writer, Event::Text(BytesText::from_escaped(escaped)))?;
            }
            None => {
                for child in &self.children {
                    child.write_to(writer)?;
                }
            }
        }
        write_event(writer, Event::End(BytesEnd::new(name)))
    }
}

fn write_event<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|e| Error::render_error(format!("Failed to write document: {}", e)))
}

/// Whether `c` matches the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

/// Escapes leaf text for element content.
///
/// Carriage returns become `&#xD;` so parsers do not fold them into line
/// feeds. Characters XML cannot carry at all are a render error.
fn escape_text(text: &str) -> Result<Cow<'_, str>, Error> {
    if let Some(c) = text.chars().find(|c| !is_xml_char(*c)) {
        return Err(Error::render_error(format!(
            "Character {:?} cannot appear in an XML document",
            c
        )));
    }
    let escaped = escape(text);
    if escaped.contains('\r') {
        return Ok(Cow::Owned(escaped.replace('\r', "&#xD;")));
    }
    Ok(escaped)
}

fn from_element(element: roxmltree::Node<'_, '_>) -> Result<DocumentNode, Error> {
    let mut node = DocumentNode::new(element.tag_name().name());
    let mut text = String::new();
    for child in element.children() {
        if child.is_element() {
            node.children.push(from_element(child)?);
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }
    if node.children.is_empty() {
        if !text.is_empty() {
            node.text = Some(text);
        }
    } else if !text.trim().is_empty() {
        return Err(Error::parse_error(format!(
            "Mixed text and element content is not supported in <{}>",
            node.name
        )));
    }
    Ok(node)
}
