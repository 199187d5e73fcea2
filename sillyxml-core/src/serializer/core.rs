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

use crate::document::DocumentNode;
use crate::error::Error;
use crate::meta::{Constructor, FieldDescriptor};
use crate::resolver::context::ReadContext;
use crate::resolver::type_resolver::{TypeDescriptor, TypeResolver, TypeShape};
use crate::serializer::Writable;
use crate::types::{FormatHint, Kind};
use std::any::Any;
use std::sync::Arc;

/// Encode-side view of a value.
///
/// This trait is object safe: the encoder walks a value graph as
/// `&dyn XmlWrite`, asking each value for its descriptor and then for the
/// piece of content its [`Kind`] calls for. Implementations only override the
/// hooks that apply to their kind; the rest keep the defaults, which the
/// encoder never reaches for that kind.
///
/// Implemented for the built-in types in this crate and generated for user
/// types by `#[derive(XmlObject)]`.
pub trait XmlWrite: 'static {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor>;

    /// Field table of a composite value.
    fn xml_fields(&self, _type_resolver: &TypeResolver) -> Arc<[FieldDescriptor]> {
        Arc::from(Vec::new())
    }

    /// Whether this value is absent and encodes to an empty node.
    fn xml_is_none(&self) -> bool {
        false
    }

    /// Leaf text of a primitive, text, decimal, enum or date-time value.
    fn xml_to_text(&self, _hint: Option<FormatHint>) -> Result<String, Error> {
        Err(Error::unsupported(format!(
            "{} has no text representation",
            std::any::type_name::<Self>()
        )))
    }

    /// Elements of a sequence value, in order.
    fn xml_elements(&self) -> Vec<&dyn XmlWrite> {
        Vec::new()
    }

    /// The writable capability, checked by the encoder before kind dispatch.
    fn xml_as_writable(&self) -> Option<&dyn Writable> {
        None
    }

    /// The value field accessors downcast from.
    fn as_any(&self) -> &dyn Any;
}

/// Static description and decode-side hooks of a type.
///
/// `xml_kind` and `xml_shape` feed the [`TypeResolver`]; the remaining hooks
/// are called by [`ReadContext`] according to the kind.
pub trait XmlType: XmlWrite + Sized {
    fn xml_kind() -> Kind;

    fn xml_shape(type_resolver: &TypeResolver) -> TypeShape;

    fn xml_field_descriptors() -> Vec<FieldDescriptor> {
        Vec::new()
    }

    /// Candidate constructors in tie-break order.
    fn xml_constructors() -> Vec<Constructor<Self>> {
        Vec::new()
    }

    fn xml_from_text(_text: &str, _hint: Option<FormatHint>) -> Result<Self, Error> {
        Err(Error::unsupported(format!(
            "{} cannot be read from text",
            std::any::type_name::<Self>()
        )))
    }

    fn xml_from_elements(
        _context: &mut ReadContext,
        _nodes: &[DocumentNode],
        _hint: Option<FormatHint>,
    ) -> Result<Self, Error> {
        Err(Error::unsupported(format!(
            "{} cannot be read from a sequence",
            std::any::type_name::<Self>()
        )))
    }

    fn xml_read_writable(_context: &mut ReadContext, _node: &DocumentNode) -> Result<Self, Error> {
        Err(Error::unsupported(format!(
            "{} is not writable",
            std::any::type_name::<Self>()
        )))
    }

    /// Entry point for decoding a node that has already passed the name check.
    fn xml_read(
        context: &mut ReadContext,
        node: &DocumentNode,
        hint: Option<FormatHint>,
    ) -> Result<Self, Error> {
        context.read_by_kind(node, hint)
    }
}
