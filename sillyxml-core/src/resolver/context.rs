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
use crate::meta::{Arguments, Constructor};
use crate::resolver::type_resolver::TypeResolver;
use crate::serializer::{XmlType, XmlWrite};
use crate::types::{FormatHint, Kind};
use std::collections::HashSet;
use tracing::{debug, trace};

fn depth_error(max_depth: u32, current_depth: u32) -> Error {
    Error::depth_exceed(format!(
        "Maximum nesting depth ({}) exceeded. Current depth: {}. \
        This may indicate a cyclic or overly deep object graph. \
        Consider increasing max_depth if this is expected.",
        max_depth, current_depth
    ))
}

/// State of one encode call: the value graph is walked depth-first and the
/// tree is built bottom-up, each subtree owned by the call that made it.
pub struct WriteContext<'a> {
    type_resolver: &'a TypeResolver,
    config: &'a Config,
    current_depth: u32,
}

impl<'a> WriteContext<'a> {
    pub fn new(type_resolver: &'a TypeResolver, config: &'a Config) -> WriteContext<'a> {
        WriteContext {
            type_resolver,
            config,
            current_depth: 0,
        }
    }

    #[inline(always)]
    pub fn get_type_resolver(&self) -> &'a TypeResolver {
        self.type_resolver
    }

    #[inline(always)]
    pub fn get_config(&self) -> &'a Config {
        self.config
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.config.max_depth() {
            return Err(depth_error(self.config.max_depth(), self.current_depth));
        }
        Ok(())
    }

    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Encodes `value` into a node named by its own canonical name.
    pub fn encode(
        &mut self,
        value: &dyn XmlWrite,
        hint: Option<FormatHint>,
    ) -> Result<DocumentNode, Error> {
        self.inc_depth()?;
        let result = self.encode_by_kind(value, hint);
        self.dec_depth();
        result
    }

    fn encode_by_kind(
        &mut self,
        value: &dyn XmlWrite,
        hint: Option<FormatHint>,
    ) -> Result<DocumentNode, Error> {
        let descriptor = value.xml_descriptor(self.type_resolver);
        let name = descriptor.get_canonical_name();
        if value.xml_is_none() {
            return Ok(DocumentNode::new(name));
        }
        if let Some(writable) = value.xml_as_writable() {
            return writable.write_xml(self);
        }
        match descriptor.get_kind() {
            kind if kind.is_leaf() => Ok(DocumentNode::with_text(name, value.xml_to_text(hint)?)),
            Kind::Sequence => {
                let mut node = DocumentNode::new(name);
                for element in value.xml_elements() {
                    node.append_child(self.encode(element, hint)?);
                }
                Ok(node)
            }
            Kind::Composite => {
                let mut node = DocumentNode::new(name);
                let owner = value.as_any();
                for field in value.xml_fields(self.type_resolver).iter() {
                    if field.is_excluded() {
                        continue;
                    }
                    let field_value = field.access(owner).ok_or_else(|| {
                        Error::unsupported(format!(
                            "Field `{}` of {} has no accessor for this value",
                            field.get_name(),
                            name
                        ))
                    })?;
                    node.append_child(self.encode_field(
                        field.get_name(),
                        field_value,
                        field.get_format_hint(),
                    )?);
                }
                Ok(node)
            }
            _ => Err(Error::unsupported(format!(
                "{} is declared writable but does not expose a Writable implementation",
                name
            ))),
        }
    }

    /// Encodes `value` under a node named `name`, collapsing the node the
    /// recursive call names after the value's type.
    pub fn encode_field(
        &mut self,
        name: &str,
        value: &dyn XmlWrite,
        hint: Option<FormatHint>,
    ) -> Result<DocumentNode, Error> {
        let mut field_node = DocumentNode::new(name);
        if value.xml_is_none() {
            return Ok(field_node);
        }
        let encoded = self.encode(value, hint)?;
        if encoded.has_children() {
            for child in encoded.into_children() {
                field_node.append_child(child);
            }
        } else if let Some(text) = encoded.text() {
            field_node.set_text(text);
        }
        Ok(field_node)
    }
}

/// State of one decode call.
pub struct ReadContext<'a> {
    type_resolver: &'a TypeResolver,
    config: &'a Config,
    current_depth: u32,
}

impl<'a> ReadContext<'a> {
    pub fn new(type_resolver: &'a TypeResolver, config: &'a Config) -> ReadContext<'a> {
        ReadContext {
            type_resolver,
            config,
            current_depth: 0,
        }
    }

    #[inline(always)]
    pub fn get_type_resolver(&self) -> &'a TypeResolver {
        self.type_resolver
    }

    #[inline(always)]
    pub fn get_config(&self) -> &'a Config {
        self.config
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.config.max_depth() {
            return Err(depth_error(self.config.max_depth(), self.current_depth));
        }
        Ok(())
    }

    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Decodes a node that must be named by `T`'s canonical name.
    pub fn decode<T: XmlType>(&mut self, node: &DocumentNode) -> Result<T, Error> {
        self.decode_with_hint(node, None)
    }

    pub fn decode_with_hint<T: XmlType>(
        &mut self,
        node: &DocumentNode,
        hint: Option<FormatHint>,
    ) -> Result<T, Error> {
        let descriptor = self.type_resolver.resolve::<T>();
        let expected = descriptor.get_canonical_name();
        if node.name() != expected {
            return Err(Error::format_error(format!(
                "Expected root <{}> but found <{}>",
                expected,
                node.name()
            )));
        }
        self.read_value(node, hint)
    }

    /// Decodes a node whatever its name, as a field or parameter value is.
    pub fn read_value<T: XmlType>(
        &mut self,
        node: &DocumentNode,
        hint: Option<FormatHint>,
    ) -> Result<T, Error> {
        self.inc_depth()?;
        let result = T::xml_read(self, node, hint);
        self.dec_depth();
        result
    }

    /// Kind dispatch used by [`XmlType::xml_read`] unless a type overrides it.
    pub fn read_by_kind<T: XmlType>(
        &mut self,
        node: &DocumentNode,
        hint: Option<FormatHint>,
    ) -> Result<T, Error> {
        match T::xml_kind() {
            Kind::Writable => T::xml_read_writable(self, node),
            kind if kind.is_leaf() => T::xml_from_text(node.text().unwrap_or_default(), hint)
                .map_err(Error::enhance_value_error::<T>),
            Kind::Sequence => T::xml_from_elements(self, node.children(), hint),
            _ => self.construct(node),
        }
    }

    /// Builds a composite from the first constructor whose parameters are all
    /// named by the node's children (case-insensitively).
    pub fn construct<T: XmlType>(&mut self, node: &DocumentNode) -> Result<T, Error> {
        let present: HashSet<String> = node
            .children()
            .iter()
            .map(|child| child.name().to_lowercase())
            .collect();
        let constructors = T::xml_constructors();
        let scores: Vec<usize> = constructors.iter().map(|c| c.score(&present)).collect();
        let max_score = scores.iter().copied().max().unwrap_or_default();
        let selected = constructors
            .iter()
            .zip(&scores)
            .position(|(constructor, &score)| score == max_score && score == constructor.arity());
        let Some(index) = selected else {
            debug!(
                node = node.name(),
                constructors = constructors.len(),
                max_score,
                "no constructor fully satisfied by child names"
            );
            return Err(Error::unsupported_shape(format!(
                "No constructor of {} can be satisfied by the children of <{}> ({} available, best match {} parameters)",
                std::any::type_name::<T>(),
                node.name(),
                constructors.len(),
                max_score
            )));
        };
        let constructor = &constructors[index];
        trace!(
            node = node.name(),
            constructor = index,
            arity = constructor.arity(),
            "selected constructor"
        );
        self.invoke(constructor, node)
    }

    fn invoke<T: XmlType>(
        &mut self,
        constructor: &Constructor<T>,
        node: &DocumentNode,
    ) -> Result<T, Error> {
        let mut nodes = Vec::with_capacity(constructor.arity());
        for parameter in constructor.get_parameters() {
            let key = parameter.get_name().to_lowercase();
            let child = node
                .children()
                .iter()
                .find(|child| child.name().to_lowercase() == key)
                .ok_or_else(|| {
                    Error::unsupported_shape(format!(
                        "Missing child <{}> in <{}>",
                        parameter.get_name(),
                        node.name()
                    ))
                })?;
            nodes.push(child);
        }
        let mut arguments = Arguments::new(self, constructor.get_parameters(), nodes);
        constructor.invoke(&mut arguments)
    }
}
