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
use crate::resolver::context::{ReadContext, WriteContext};

/// Capability for types that own their tree representation.
///
/// The encoder checks for this capability before looking at the value's
/// kind, and substitutes whatever `write_xml` returns. Types opt in with
/// `#[xml(writable)]` on their derive, which makes their kind
/// [`Kind::Writable`](crate::types::Kind::Writable) and routes decoding to
/// `read_xml`.
///
/// ```rust
/// use sillyxml_core::document::DocumentNode;
/// use sillyxml_core::error::Error;
/// use sillyxml_core::resolver::context::{ReadContext, WriteContext};
/// use sillyxml_core::serializer::Writable;
///
/// struct Celsius(f64);
///
/// impl Writable for Celsius {
///     fn write_xml(&self, _: &mut WriteContext) -> Result<DocumentNode, Error> {
///         Ok(DocumentNode::with_text("Celsius", format!("{}C", self.0)))
///     }
///
///     fn read_xml(_: &mut ReadContext, node: &DocumentNode) -> Result<Self, Error> {
///         let text = node.text().unwrap_or_default().trim_end_matches('C');
///         text.parse()
///             .map(Celsius)
///             .map_err(|e| Error::value_error(format!("bad temperature: {}", e)))
///     }
/// }
/// ```
pub trait Writable {
    fn write_xml(&self, context: &mut WriteContext) -> Result<DocumentNode, Error>;

    fn read_xml(context: &mut ReadContext, node: &DocumentNode) -> Result<Self, Error>
    where
        Self: Sized;
}
