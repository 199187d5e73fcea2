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


//! # SillyXml
//!
//! A type-driven codec between Rust values and XML documents. The shape of
//! the document follows entirely from the value's type: element names are
//! canonical type names, composite fields become child elements, sequences
//! become repeated children and leaves carry text.
//!
//! ## Encoding and decoding
//!
//! ```rust
//! use sillyxml::{Xml, XmlObject};
//!
//! #[derive(XmlObject, Debug, PartialEq)]
//! #[xml(rename_all = "PascalCase")]
//! struct SimpleClass {
//!     foo: String,
//!     bar: String,
//! }
//!
//! let xml = Xml::default().declaration(false);
//! let value = SimpleClass {
//!     foo: "Monkey".to_string(),
//!     bar: "Avocado".to_string(),
//! };
//! let text = xml.serialize(&value).unwrap();
//! assert_eq!(
//!     text,
//!     "<SimpleClass><Foo>Monkey</Foo><Bar>Avocado</Bar></SimpleClass>"
//! );
//! assert_eq!(xml.deserialize::<SimpleClass>(&text).unwrap(), value);
//! ```
//!
//! Element names are matched case-insensitively when decoding, and a
//! composite is rebuilt through the first of its constructors whose every
//! parameter is present among the element's children.
//!
//! ## Generic types
//!
//! Generic types are named after their arguments:
//!
//! ```rust
//! use sillyxml::{Xml, XmlObject};
//!
//! #[derive(XmlObject, Debug, PartialEq)]
//! struct Wrapper<T> {
//!     value: T,
//! }
//!
//! let xml = Xml::default().declaration(false);
//! let text = xml.serialize(&Wrapper { value: vec![1i32, 2] }).unwrap();
//! assert_eq!(
//!     text,
//!     "<WrapperOfArrayOfI32><value><I32>1</I32><I32>2</I32></value></WrapperOfArrayOfI32>"
//! );
//! ```
//!
//! ## Custom representations
//!
//! Types marked `#[xml(writable)]` implement [`Writable`] and produce their
//! own subtree; see the trait docs for an example.
//!
//! Code generated by `#[derive(XmlObject)]` names the `sillyxml_core` crate,
//! so depend on it alongside this one.

pub use sillyxml_core::{
    config::Config, document::DocumentNode, error::Error, from_str, to_string, Arguments,
    Constructor, FieldDescriptor, FormatHint, Kind, Parameter, ReadContext, TypeDescriptor,
    TypeResolver, TypeShape, Writable, WriteContext, Xml, XmlType, XmlWrite,
};
pub use sillyxml_derive::XmlObject;
