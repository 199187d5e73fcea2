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

use crate::config::Config;
use crate::document::DocumentNode;
use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::resolver::type_resolver::TypeResolver;
use crate::serializer::{XmlType, XmlWrite};
use std::sync::{Arc, OnceLock};

/// The codec entry point.
///
/// `Xml` owns the rendering configuration and a handle to the descriptor
/// cache. Instances are cheap to clone and several instances may share one
/// [`TypeResolver`].
///
/// # Examples
///
/// ```rust
/// use sillyxml_core::Xml;
///
/// let xml = Xml::default().declaration(false);
/// assert_eq!(xml.serialize(&42i32).unwrap(), "<I32>42</I32>");
/// assert_eq!(xml.deserialize::<String>("<String>Banana</String>").unwrap(), "Banana");
/// ```
///
/// Derived types:
///
/// ```rust, ignore
/// use sillyxml::{Xml, XmlObject};
///
/// #[derive(XmlObject, Debug, PartialEq)]
/// #[xml(rename_all = "PascalCase")]
/// struct SimpleClass {
///     foo: i32,
///     bar: String,
/// }
///
/// let xml = Xml::default().declaration(false);
/// let value = SimpleClass { foo: 42, bar: "Banana".to_string() };
/// let text = xml.serialize(&value)?;
/// assert_eq!(text, "<SimpleClass><Foo>42</Foo><Bar>Banana</Bar></SimpleClass>");
/// assert_eq!(xml.deserialize::<SimpleClass>(&text)?, value);
/// ```
#[derive(Clone, Default)]
pub struct Xml {
    config: Config,
    type_resolver: Arc<TypeResolver>,
}

impl Xml {
    /// Whether rendered output starts with the declaration header. Defaults to `true`.
    pub fn declaration(mut self, declaration: bool) -> Self {
        self.config.declaration = declaration;
        self
    }

    /// Pretty-prints with `indent` spaces per level; `None` renders on one line.
    ///
    /// ```rust
    /// use sillyxml_core::Xml;
    ///
    /// let xml = Xml::default().declaration(false).indent(Some(2));
    /// let text = xml.serialize(&vec![1u8, 2]).unwrap();
    /// assert!(text.contains('\n'));
    /// ```
    pub fn indent(mut self, indent: Option<usize>) -> Self {
        self.config.indent = indent;
        self
    }

    /// Sets the maximum nesting depth for both directions.
    ///
    /// Deeper value graphs or documents fail with
    /// [`Error::DepthExceed`](crate::error::Error::DepthExceed).
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Shares a descriptor cache with other instances.
    pub fn type_resolver(mut self, type_resolver: Arc<TypeResolver>) -> Self {
        self.type_resolver = type_resolver;
        self
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_type_resolver(&self) -> &TypeResolver {
        &self.type_resolver
    }

    pub fn serialize<T: XmlWrite>(&self, value: &T) -> Result<String, Error> {
        self.to_document(value)?.render(&self.config)
    }

    pub fn deserialize<T: XmlType>(&self, text: &str) -> Result<T, Error> {
        let node = DocumentNode::parse(text)?;
        self.from_document(&node)
    }

    /// Encodes `value` into a tree rooted at a node named by its canonical name.
    pub fn to_document<T: XmlWrite>(&self, value: &T) -> Result<DocumentNode, Error> {
        WriteContext::new(&self.type_resolver, &self.config).encode(value, None)
    }

    /// Decodes a tree whose root must be named by `T`'s canonical name.
    pub fn from_document<T: XmlType>(&self, node: &DocumentNode) -> Result<T, Error> {
        ReadContext::new(&self.type_resolver, &self.config).decode(node)
    }
}

fn default_instance() -> &'static Xml {
    static DEFAULT: OnceLock<Xml> = OnceLock::new();
    DEFAULT.get_or_init(Xml::default)
}

/// Serializes with the default configuration.
pub fn to_string<T: XmlWrite>(value: &T) -> Result<String, Error> {
    default_instance().serialize(value)
}

/// Deserializes with the default configuration.
pub fn from_str<T: XmlType>(text: &str) -> Result<T, Error> {
    default_instance().deserialize(text)
}
