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
use crate::meta::FieldDescriptor;
use crate::resolver::context::ReadContext;
use crate::resolver::type_resolver::{TypeDescriptor, TypeResolver, TypeShape};
use crate::serializer::{Writable, XmlType, XmlWrite};
use crate::types::{FormatHint, Kind};
use std::sync::Arc;

impl<T: XmlType> XmlWrite for Box<T> {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        (**self).xml_descriptor(type_resolver)
    }

    fn xml_fields(&self, type_resolver: &TypeResolver) -> Arc<[FieldDescriptor]> {
        (**self).xml_fields(type_resolver)
    }

    fn xml_is_none(&self) -> bool {
        (**self).xml_is_none()
    }

    fn xml_to_text(&self, hint: Option<FormatHint>) -> Result<String, Error> {
        (**self).xml_to_text(hint)
    }

    fn xml_elements(&self) -> Vec<&dyn XmlWrite> {
        (**self).xml_elements()
    }

    fn xml_as_writable(&self) -> Option<&dyn Writable> {
        (**self).xml_as_writable()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        (**self).as_any()
    }
}

impl<T: XmlType> XmlType for Box<T> {
    fn xml_kind() -> Kind {
        T::xml_kind()
    }

    fn xml_shape(type_resolver: &TypeResolver) -> TypeShape {
        T::xml_shape(type_resolver)
    }

    fn xml_read(
        context: &mut ReadContext,
        node: &DocumentNode,
        hint: Option<FormatHint>,
    ) -> Result<Self, Error> {
        T::xml_read(context, node, hint).map(Box::new)
    }
}
