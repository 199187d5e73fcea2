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

use crate::serializer::XmlWrite;
use crate::types::FormatHint;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// Reads one field out of its owner. The owner arrives type-erased and the
/// accessor downcasts it to the concrete type it was registered for.
pub type FieldAccessor = fn(&dyn Any) -> Option<&dyn XmlWrite>;

#[derive(Clone)]
pub struct FieldDescriptor {
    name: Cow<'static, str>,
    accessor: FieldAccessor,
    excluded: bool,
    format_hint: Option<FormatHint>,
}

fn no_access(_: &dyn Any) -> Option<&dyn XmlWrite> {
    None
}

impl FieldDescriptor {
    pub fn new<S: Into<Cow<'static, str>>>(name: S, accessor: FieldAccessor) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            accessor,
            excluded: false,
            format_hint: None,
        }
    }

    /// A field that is never encoded.
    pub fn ignored<S: Into<Cow<'static, str>>>(name: S) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            accessor: no_access,
            excluded: true,
            format_hint: None,
        }
    }

    pub fn with_format_hint(mut self, format_hint: Option<FormatHint>) -> FieldDescriptor {
        self.format_hint = format_hint;
        self
    }

    #[inline(always)]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn is_excluded(&self) -> bool {
        self.excluded
    }

    #[inline(always)]
    pub fn get_format_hint(&self) -> Option<FormatHint> {
        self.format_hint
    }

    /// `None` when the field is excluded or `owner` is not the registered type.
    #[inline(always)]
    pub fn access<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn XmlWrite> {
        if self.excluded {
            return None;
        }
        (self.accessor)(owner)
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("excluded", &self.excluded)
            .field("format_hint", &self.format_hint)
            .finish()
    }
}
