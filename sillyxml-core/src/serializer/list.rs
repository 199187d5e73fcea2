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

//! Sequence kinds. Each element is encoded at top level, so its node is
//! named by the element type, and decoded with the root-name check.

use crate::document::DocumentNode;
use crate::error::Error;
use crate::resolver::context::ReadContext;
use crate::resolver::type_resolver::{TypeDescriptor, TypeResolver, TypeShape};
use crate::serializer::{XmlType, XmlWrite};
use crate::types::{FormatHint, Kind};
use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

fn read_elements<T: XmlType>(
    context: &mut ReadContext,
    nodes: &[DocumentNode],
    hint: Option<FormatHint>,
) -> Result<Vec<T>, Error> {
    nodes
        .iter()
        .map(|node| context.decode_with_hint::<T>(node, hint))
        .collect()
}

impl<T: XmlType> XmlWrite for Vec<T> {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        type_resolver.resolve::<Self>()
    }

    fn xml_elements(&self) -> Vec<&dyn XmlWrite> {
        self.iter().map(|e| e as &dyn XmlWrite).collect()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: XmlType> XmlType for Vec<T> {
    fn xml_kind() -> Kind {
        Kind::Sequence
    }

    fn xml_shape(type_resolver: &TypeResolver) -> TypeShape {
        TypeShape::Array(type_resolver.resolve::<T>())
    }

    fn xml_from_elements(
        context: &mut ReadContext,
        nodes: &[DocumentNode],
        hint: Option<FormatHint>,
    ) -> Result<Self, Error> {
        read_elements(context, nodes, hint)
    }
}

impl<T: XmlType, const N: usize> XmlWrite for [T; N] {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        type_resolver.resolve::<Self>()
    }

    fn xml_elements(&self) -> Vec<&dyn XmlWrite> {
        self.iter().map(|e| e as &dyn XmlWrite).collect()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: XmlType, const N: usize> XmlType for [T; N] {
    fn xml_kind() -> Kind {
        Kind::Sequence
    }

    fn xml_shape(type_resolver: &TypeResolver) -> TypeShape {
        TypeShape::Array(type_resolver.resolve::<T>())
    }

    fn xml_from_elements(
        context: &mut ReadContext,
        nodes: &[DocumentNode],
        hint: Option<FormatHint>,
    ) -> Result<Self, Error> {
        let elements = read_elements::<T>(context, nodes, hint)?;
        <[T; N]>::try_from(elements).map_err(|elements| {
            Error::value_error(format!(
                "Expected {} elements but found {}",
                N,
                elements.len()
            ))
        })
    }
}

impl<T: XmlType> XmlWrite for VecDeque<T> {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        type_resolver.resolve::<Self>()
    }

    fn xml_elements(&self) -> Vec<&dyn XmlWrite> {
        self.iter().map(|e| e as &dyn XmlWrite).collect()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: XmlType> XmlType for VecDeque<T> {
    fn xml_kind() -> Kind {
        Kind::Sequence
    }

    fn xml_shape(type_resolver: &TypeResolver) -> TypeShape {
        TypeShape::Generic {
            base: Cow::Borrowed("VecDeque"),
            arguments: vec![type_resolver.resolve::<T>()],
        }
    }

    fn xml_from_elements(
        context: &mut ReadContext,
        nodes: &[DocumentNode],
        hint: Option<FormatHint>,
    ) -> Result<Self, Error> {
        read_elements(context, nodes, hint).map(VecDeque::from)
    }
}

impl<T: XmlType + Ord> XmlWrite for BTreeSet<T> {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        type_resolver.resolve::<Self>()
    }

    fn xml_elements(&self) -> Vec<&dyn XmlWrite> {
        self.iter().map(|e| e as &dyn XmlWrite).collect()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: XmlType + Ord> XmlType for BTreeSet<T> {
    fn xml_kind() -> Kind {
        Kind::Sequence
    }

    fn xml_shape(type_resolver: &TypeResolver) -> TypeShape {
        TypeShape::Generic {
            base: Cow::Borrowed("BTreeSet"),
            arguments: vec![type_resolver.resolve::<T>()],
        }
    }

    fn xml_from_elements(
        context: &mut ReadContext,
        nodes: &[DocumentNode],
        hint: Option<FormatHint>,
    ) -> Result<Self, Error> {
        nodes
            .iter()
            .map(|node| context.decode_with_hint::<T>(node, hint))
            .collect()
    }
}
