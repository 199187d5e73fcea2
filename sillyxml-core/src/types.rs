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

/// Declaration header prepended to rendered documents.
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#;

/// `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `HH:MM:SS`, 24-hour clock.
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// `YYYY-MM-DDTHH:MM:SS`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const GENERIC_SEPARATOR: &str = "Of";
pub const ARGUMENT_SEPARATOR: &str = "And";
pub const ARRAY_PREFIX: &str = "ArrayOf";
pub const ANONYMOUS_PREFIX: &str = "AnonymousTypeOf";

/// Shape category a type is dispatched on.
///
/// Every type has exactly one kind. A derived type marked `#[xml(writable)]`
/// is Writable whatever its shape; otherwise structs are Composite and
/// unit enums are Enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Primitive,
    Text,
    Decimal,
    Enum,
    DateTime,
    Sequence,
    Writable,
    Composite,
}

impl Kind {
    /// Whether values of this kind encode to a leaf node carrying text.
    #[inline(always)]
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            Kind::Primitive | Kind::Text | Kind::Decimal | Kind::Enum | Kind::DateTime
        )
    }
}

/// Per-field formatting hint for date-time values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatHint {
    Date,
    Time,
}

impl FormatHint {
    pub const fn pattern(self) -> &'static str {
        match self {
            FormatHint::Date => DATE_FORMAT,
            FormatHint::Time => TIME_FORMAT,
        }
    }
}

/// chrono pattern for an optional hint; `None` selects the full date-and-time form.
#[inline(always)]
pub const fn date_time_pattern(hint: Option<FormatHint>) -> &'static str {
    match hint {
        Some(hint) => hint.pattern(),
        None => DATE_TIME_FORMAT,
    }
}
