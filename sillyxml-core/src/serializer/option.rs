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

//! `Option<T>` takes `T`'s descriptor. `None` encodes to an empty node and
//! an empty node decodes to `None`, so `Some(String::new())` reads back as
//! `None`.

use crate::document::DocumentNode;
use crate::error::Error;
use crate::meta::FieldDescriptor;
use crate::resolver::context::ReadContext;
use crate::resolver::type_resolver::{TypeDescriptor, TypeResolver, TypeShape};
use crate::serializer::{Writable, XmlType, XmlWrite};
use crate::types::{FormatHint, Kind};
use std::sync::Arc;

impl<T: XmlType> XmlWrite for Option<T> {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        match self {
            Some(v) => v.xml_descriptor(type_resolver),
            None => type_resolver.resolve::<T>(),
        }
    }

    fn xml_fields(&self, type_resolver: &TypeResolver) -> Arc<[FieldDescriptor]> {
        match self {
            Some(v) => v.xml_fields(type_resolver),
            None => Arc::from(Vec::new()),
        }
    }

    #[inline(always)]
    fn xml_is_none(&self) -> bool {
        match self {
            Some(v) => v.xml_is_none(),
            None => true,
        }
    }

    fn xml_to_text(&self, hint: Option<FormatHint>) -> Result<String, Error> {
        match self {
            Some(v) => v.xml_to_text(hint),
            None => Ok(String::new()),
        }
    }

    fn xml_elements(&self) -> Vec<&dyn XmlWrite> {
        match self {
            Some(v) => v.xml_elements(),
            None => Vec::new(),
        }
    }

    fn xml_as_writable(&self) -> Option<&dyn Writable> {
        self.as_ref().and_then(XmlWrite::xml_as_writable)
    }

    /// Field accessors registered for `T` see the inner value.
    fn as_any(&self) -> &dyn std::any::Any {
        match self {
            Some(v) => v.as_any(),
            None => self,
        }
    }
}

impl<T: XmlType> XmlType for Option<T> {
    #[inline(always)]
    fn xml_kind() -> Kind {
        T::xml_kind()
    }

    #[inline(always)]
    fn xml_shape(type_resolver: &TypeResolver) -> TypeShape {
        T::xml_shape(type_resolver)
    }

    fn xml_read(
        context: &mut ReadContext,
        node: &DocumentNode,
        hint: Option<FormatHint>,
    ) -> Result<Self, Error> {
        if node.is_empty() {
            return Ok(None);
        }
        T::xml_read(context, node, hint).map(Some)
    }
}
