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

// `Display` and `FromStr` for the numeric types are locale-free: `.` is the
// only decimal separator and no grouping is ever written.
macro_rules! impl_num_serializer {
    ($ty:ty, $name:literal, $kind:expr) => {
        impl XmlWrite for $ty {
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

        impl XmlType for $ty {
            #[inline(always)]
            fn xml_kind() -> Kind {
                $kind
            }

            #[inline(always)]
            fn xml_shape(_: &TypeResolver) -> TypeShape {
                TypeShape::named($name)
            }

            fn xml_from_text(text: &str, _: Option<FormatHint>) -> Result<Self, Error> {
                text.trim().parse::<$ty>().map_err(|e| {
                    Error::value_error(format!("Cannot parse {:?} as {}: {}", text, $name, e))
                })
            }
        }
    };
}

impl_num_serializer!(i8, "I8", Kind::Primitive);
impl_num_serializer!(i16, "I16", Kind::Primitive);
impl_num_serializer!(i32, "I32", Kind::Primitive);
impl_num_serializer!(i64, "I64", Kind::Primitive);
impl_num_serializer!(i128, "I128", Kind::Primitive);
impl_num_serializer!(isize, "Isize", Kind::Primitive);
impl_num_serializer!(u8, "U8", Kind::Primitive);
impl_num_serializer!(u16, "U16", Kind::Primitive);
impl_num_serializer!(u32, "U32", Kind::Primitive);
impl_num_serializer!(u64, "U64", Kind::Primitive);
impl_num_serializer!(u128, "U128", Kind::Primitive);
impl_num_serializer!(usize, "Usize", Kind::Primitive);
impl_num_serializer!(f32, "F32", Kind::Decimal);
impl_num_serializer!(f64, "F64", Kind::Decimal);
