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

use crate::meta::FieldDescriptor;
use crate::serializer::XmlType;
use crate::types::{Kind, ANONYMOUS_PREFIX, ARGUMENT_SEPARATOR, ARRAY_PREFIX, GENERIC_SEPARATOR};
use std::any::TypeId;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Structural description of a type's name, as reported by [`XmlType::xml_shape`].
///
/// The canonical tag is derived from the shape alone, so the same type always
/// yields the same tag.
#[derive(Clone, Debug)]
pub enum TypeShape {
    /// A plainly named type: primitives, strings, enums, date-times and
    /// non-generic composites.
    Named(Cow<'static, str>),
    /// A parameterized type `Base<A, B, ..>`.
    Generic {
        base: Cow<'static, str>,
        arguments: Vec<Arc<TypeDescriptor>>,
    },
    /// An array-like sequence of one element type.
    Array(Arc<TypeDescriptor>),
    /// A compiler-synthesized record with no declared name (a tuple).
    Anonymous(Vec<Arc<TypeDescriptor>>),
}

impl TypeShape {
    pub fn named(name: &'static str) -> TypeShape {
        TypeShape::Named(Cow::Borrowed(name))
    }

    pub fn canonical_name(&self) -> String {
        match self {
            TypeShape::Named(name) => name.to_string(),
            TypeShape::Generic { base, arguments } => {
                format!("{}{}{}", base, GENERIC_SEPARATOR, join_names(arguments))
            }
            TypeShape::Array(element) => {
                format!("{}{}", ARRAY_PREFIX, element.get_canonical_name())
            }
            TypeShape::Anonymous(items) => format!("{}{}", ANONYMOUS_PREFIX, join_names(items)),
        }
    }

    fn into_arguments(self) -> Vec<Arc<TypeDescriptor>> {
        match self {
            TypeShape::Named(_) => Vec::new(),
            TypeShape::Generic { arguments, .. } => arguments,
            TypeShape::Array(element) => vec![element],
            TypeShape::Anonymous(items) => items,
        }
    }
}

fn join_names(descriptors: &[Arc<TypeDescriptor>]) -> String {
    descriptors
        .iter()
        .map(|d| d.get_canonical_name())
        .collect::<Vec<_>>()
        .join(ARGUMENT_SEPARATOR)
}

/// Resolved kind and canonical tag of a type. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    kind: Kind,
    canonical_name: String,
    type_arguments: Vec<Arc<TypeDescriptor>>,
}

impl TypeDescriptor {
    pub fn new(kind: Kind, shape: TypeShape) -> TypeDescriptor {
        let canonical_name = shape.canonical_name();
        TypeDescriptor {
            kind,
            canonical_name,
            type_arguments: shape.into_arguments(),
        }
    }

    #[inline(always)]
    pub fn get_kind(&self) -> Kind {
        self.kind
    }

    #[inline(always)]
    pub fn get_canonical_name(&self) -> &str {
        &self.canonical_name
    }

    #[inline(always)]
    pub fn get_type_arguments(&self) -> &[Arc<TypeDescriptor>] {
        &self.type_arguments
    }
}

/// Process-wide cache of type descriptors and field tables, keyed by type identity.
///
/// Entries are computed on first use and never invalidated. The locks are
/// only held for the lookup or the insert, never while a shape is being
/// computed, so nested resolution of type arguments cannot deadlock. Two
/// threads racing on the same type compute equal descriptors; the first
/// insert wins.
#[derive(Default)]
pub struct TypeResolver {
    descriptors: RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>,
    fields: RwLock<HashMap<TypeId, Arc<[FieldDescriptor]>>>,
}

impl TypeResolver {
    pub fn new() -> TypeResolver {
        TypeResolver::default()
    }

    pub fn resolve<T: XmlType>(&self) -> Arc<TypeDescriptor> {
        let type_id = TypeId::of::<T>();
        if let Some(found) = self
            .descriptors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return found.clone();
        }
        let descriptor = Arc::new(TypeDescriptor::new(T::xml_kind(), T::xml_shape(self)));
        debug!(
            rust_type = std::any::type_name::<T>(),
            canonical_name = descriptor.get_canonical_name(),
            kind = ?descriptor.get_kind(),
            "resolved type descriptor"
        );
        self.descriptors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert(descriptor)
            .clone()
    }

    pub fn canonical_name<T: XmlType>(&self) -> String {
        self.resolve::<T>().get_canonical_name().to_string()
    }

    /// Field table of a composite type in declaration order, excluded fields included.
    pub fn fields<T: XmlType>(&self) -> Arc<[FieldDescriptor]> {
        let type_id = TypeId::of::<T>();
        if let Some(found) = self
            .fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return found.clone();
        }
        let fields: Arc<[FieldDescriptor]> = T::xml_field_descriptors().into();
        debug!(
            rust_type = std::any::type_name::<T>(),
            fields = fields.len(),
            excluded = fields.iter().filter(|f| f.is_excluded()).count(),
            "built field table"
        );
        self.fields
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert(fields)
            .clone()
    }

    /// Number of types with a cached descriptor.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.descriptors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
