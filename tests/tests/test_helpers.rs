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

#![allow(dead_code)]

use sillyxml::{Xml, XmlType};
use std::fmt::Debug;

/// An `Xml` instance rendering without the declaration header.
pub fn compact() -> Xml {
    Xml::default().declaration(false)
}

/// Generic helper for roundtrip serialization testing
pub fn test_roundtrip<T>(xml: &Xml, value: T)
where
    T: XmlType + PartialEq + Debug,
{
    let text = xml.serialize(&value).unwrap();
    let result: T = xml.deserialize(&text).unwrap();
    assert_eq!(value, result);
}

/// Removes all whitespace, for comparing pretty and compact renderings.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
