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

//! # SillyXml Core
//!
//! Runtime of a type-driven codec that turns values into a labeled document
//! tree (element name, optional text, ordered children) and back.
//!
//! ## Architecture
//!
//! - **`xml`**: the [`Xml`] entry point and its builder configuration
//! - **`types`**: [`Kind`], format hints and naming constants
//! - **`resolver`**: the [`TypeResolver`] descriptor cache and the
//!   encode/decode contexts
//! - **`meta`**: field tables and constructor lists of composite types
//! - **`serializer`**: the [`XmlWrite`]/[`XmlType`] traits, the
//!   [`Writable`] capability and the built-in type impls
//! - **`document`**: the [`DocumentNode`] tree with parsing and rendering
//! - **`error`**: the error taxonomy
//!
//! ## Naming
//!
//! Every type has a canonical tag derived only from its type:
//!
//! | Rust type                | Tag                          |
//! |--------------------------|------------------------------|
//! | `i32`, `String`, `f64`   | `I32`, `String`, `F64`       |
//! | `Vec<T>`, `[T; N]`       | `ArrayOf` + tag of `T`       |
//! | `Wrapper<A, B>`          | `WrapperOfAAndB`             |
//! | `(A, B)`                 | `AnonymousTypeOfAAndB`       |
//! | `Option<T>`, `Box<T>`    | tag of `T`                   |
//!
//! ## Usage
//!
//! ```rust
//! use sillyxml_core::{DocumentNode, Xml};
//!
//! let xml = Xml::default().declaration(false);
//! let tree = xml.to_document(&vec![42i32, 15, 22]).unwrap();
//! assert_eq!(tree.name(), "ArrayOfI32");
//! assert_eq!(tree.children().len(), 3);
//!
//! let back: Vec<i32> = xml.from_document(&tree).unwrap();
//! assert_eq!(back, [42, 15, 22]);
//! ```
//!
//! User types implement the traits through `#[derive(XmlObject)]` from the
//! `sillyxml` crate.

pub mod config;
pub mod document;
pub mod error;
pub mod meta;
pub mod resolver;
pub mod serializer;
pub mod types;
pub mod xml;

pub use config::Config;
pub use document::DocumentNode;
pub use error::Error;
pub use meta::{Arguments, Constructor, FieldDescriptor, Parameter};
pub use resolver::context::{ReadContext, WriteContext};
pub use resolver::type_resolver::{TypeDescriptor, TypeResolver, TypeShape};
pub use serializer::{Writable, XmlType, XmlWrite};
pub use types::{FormatHint, Kind};
pub use xml::{from_str, to_string, Xml};
