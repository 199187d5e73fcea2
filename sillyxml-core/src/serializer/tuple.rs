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

//! Tuples are the anonymous records: composites named
//! `AnonymousTypeOf<A>And<B>..` with fields `Item1`, `Item2`, ...

use crate::meta::{Constructor, FieldDescriptor, Parameter};
use crate::resolver::type_resolver::{TypeDescriptor, TypeResolver, TypeShape};
use crate::serializer::{XmlType, XmlWrite};
use crate::types::Kind;
use std::sync::Arc;

macro_rules! impl_tuple_serializer {
    ($(($idx:tt, $T:ident, $item:literal)),+) => {
        impl<$($T: XmlType),+> XmlWrite for ($($T,)+) {
            fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
                type_resolver.resolve::<Self>()
            }

            fn xml_fields(&self, type_resolver: &TypeResolver) -> Arc<[FieldDescriptor]> {
                type_resolver.fields::<Self>()
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl<$($T: XmlType),+> XmlType for ($($T,)+) {
            fn xml_kind() -> Kind {
                Kind::Composite
            }

            fn xml_shape(type_resolver: &TypeResolver) -> TypeShape {
                TypeShape::Anonymous(vec![$(type_resolver.resolve::<$T>()),+])
            }

            fn xml_field_descriptors() -> Vec<FieldDescriptor> {
                vec![$(
                    FieldDescriptor::new($item, |owner| {
                        owner
                            .downcast_ref::<Self>()
                            .map(|tuple| &tuple.$idx as &dyn XmlWrite)
                    })
                ),+]
            }

            fn xml_constructors() -> Vec<Constructor<Self>> {
                vec![Constructor::new(
                    vec![$(Parameter::new($item, None)),+],
                    |args| Ok(($(args.get::<$T>($idx)?,)+)),
                )]
            }
        }
    };
}

impl_tuple_serializer!((0, T0, "Item1"));
impl_tuple_serializer!((0, T0, "Item1"), (1, T1, "Item2"));
impl_tuple_serializer!((0, T0, "Item1"), (1, T1, "Item2"), (2, T2, "Item3"));
impl_tuple_serializer!(
    (0, T0, "Item1"),
    (1, T1, "Item2"),
    (2, T2, "Item3"),
    (3, T3, "Item4")
);
impl_tuple_serializer!(
    (0, T0, "Item1"),
    (1, T1, "Item2"),
    (2, T2, "Item3"),
    (3, T3, "Item4"),
    (4, T4, "Item5")
);
impl_tuple_serializer!(
    (0, T0, "Item1"),
    (1, T1, "Item2"),
    (2, T2, "Item3"),
    (3, T3, "Item4"),
    (4, T4, "Item5"),
    (5, T5, "Item6")
);
impl_tuple_serializer!(
    (0, T0, "Item1"),
    (1, T1, "Item2"),
    (2, T2, "Item3"),
    (3, T3, "Item4"),
    (4, T4, "Item5"),
    (5, T5, "Item6"),
    (6, T6, "Item7")
);
impl_tuple_serializer!(
    (0, T0, "Item1"),
    (1, T1, "Item2"),
    (2, T2, "Item3"),
    (3, T3, "Item4"),
    (4, T4, "Item5"),
    (5, T5, "Item6"),
    (6, T6, "Item7"),
    (7, T7, "Item8")
);
