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

use crate::error::Error;
use crate::resolver::type_resolver::{TypeDescriptor, TypeResolver, TypeShape};
use crate::serializer::{XmlType, XmlWrite};
use crate::types::{FormatHint, Kind};
use std::sync::Arc;

impl XmlWrite for bool {
    #[inline(always)]
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        type_resolver.resolve::<Self>()
    }

    #[inline(always)]
    fn xml_to_text(&self, _: Option<FormatHint>) -> Result<String, Error> {
        Ok(self.to_string())
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl XmlType for bool {
    #[inline(always)]
    fn xml_kind() -> Kind {
        Kind::Primitive
    }

    #[inline(always)]
    fn xml_shape(_: &TypeResolver) -> TypeShape {
        TypeShape::named("Bool")
    }

    fn xml_from_text(text: &str, _: Option<FormatHint>) -> Result<Self, Error> {
        match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => crate::bail!("{:?} is not a Bool", text),
        }
    }
}
