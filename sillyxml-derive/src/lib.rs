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


//! # sillyxml Derive Macros
//!
//! `#[derive(XmlObject)]` implements `XmlWrite` and `XmlType` for a struct or
//! enum, so values of the type can be encoded to and decoded from XML.
//!
//! **Supported Types:**
//! - Structs with named fields, encoded as composites
//! - Tuple structs, whose fields are named `Item1`, `Item2`, ...
//! - Unit structs
//! - Enums with unit variants, encoded by variant name
//! - Any struct or enum marked `#[xml(writable)]` that implements `Writable`
//!
//! ## Container Attributes
//!
//! - `#[xml(rename = "Name")]`: element name of the type
//! - `#[xml(rename_all = "PascalCase")]`: field naming rule, `"PascalCase"` or `"camelCase"`
//! - `#[xml(writable)]`: delegate both directions to the type's `Writable` impl
//! - `#[xml(constructors = "path::to::fn")]`: additional constructors, tried
//!   after the memberwise one
//!
//! ## Field Attributes
//!
//! - `#[xml(rename = "Name")]`: element name of the field
//! - `#[xml(ignore)]`: never encoded; filled with `Default::default()` on decode
//! - `#[xml(format = "date")]` / `#[xml(format = "time")]`: date-time pattern
//!
//! Generated code refers to `sillyxml_core` by name, so crates deriving
//! `XmlObject` depend on it directly.
//!
//! ```rust,ignore
//! use sillyxml_derive::XmlObject;
//!
//! #[derive(XmlObject, Debug, PartialEq)]
//! #[xml(rename_all = "PascalCase")]
//! struct SimpleClass {
//!     foo: String,
//!     bar: String,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro for XML encoding and decoding.
///
/// See the crate documentation for the supported attributes.
#[proc_macro_derive(XmlObject, attributes(xml))]
pub fn proc_macro_derive_xml_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_serializer(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
