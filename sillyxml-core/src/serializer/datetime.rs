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
use crate::types::{date_time_pattern, FormatHint, Kind, DATE_FORMAT, TIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Arc;

fn parse_error(text: &str, pattern: &str, e: chrono::ParseError) -> Error {
    Error::value_error(format!(
        "Cannot parse {:?} with pattern {:?}: {}",
        text, pattern, e
    ))
}

/// Written with whole-second precision: fractional seconds are dropped, so
/// `22:15:00.500` reads back as `22:15:00`.
impl XmlWrite for NaiveDateTime {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        type_resolver.resolve::<Self>()
    }

    /// The hint picks the pattern; without one the full date and time is written.
    fn xml_to_text(&self, hint: Option<FormatHint>) -> Result<String, Error> {
        Ok(self.format(date_time_pattern(hint)).to_string())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl XmlType for NaiveDateTime {
    fn xml_kind() -> Kind {
        Kind::DateTime
    }

    fn xml_shape(_: &TypeResolver) -> TypeShape {
        TypeShape::named("NaiveDateTime")
    }

    /// Components the hinted pattern leaves out are filled with midnight or
    /// 1970-01-01.
    fn xml_from_text(text: &str, hint: Option<FormatHint>) -> Result<Self, Error> {
        let text = text.trim();
        let pattern = date_time_pattern(hint);
        let parsed = match hint {
            None => NaiveDateTime::parse_from_str(text, pattern),
            Some(FormatHint::Date) => NaiveDate::parse_from_str(text, pattern)
                .map(|date| date.and_time(NaiveTime::default())),
            Some(FormatHint::Time) => NaiveTime::parse_from_str(text, pattern)
                .map(|time| NaiveDate::default().and_time(time)),
        };
        parsed.map_err(|e| parse_error(text, pattern, e))
    }
}

impl XmlWrite for NaiveDate {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        type_resolver.resolve::<Self>()
    }

    fn xml_to_text(&self, _: Option<FormatHint>) -> Result<String, Error> {
        Ok(self.format(DATE_FORMAT).to_string())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl XmlType for NaiveDate {
    fn xml_kind() -> Kind {
        Kind::DateTime
    }

    fn xml_shape(_: &TypeResolver) -> TypeShape {
        TypeShape::named("NaiveDate")
    }

    fn xml_from_text(text: &str, _: Option<FormatHint>) -> Result<Self, Error> {
        let text = text.trim();
        NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| parse_error(text, DATE_FORMAT, e))
    }
}

impl XmlWrite for NaiveTime {
    fn xml_descriptor(&self, type_resolver: &TypeResolver) -> Arc<TypeDescriptor> {
        type_resolver.resolve::<Self>()
    }

    fn xml_to_text(&self, _: Option<FormatHint>) -> Result<String, Error> {
        Ok(self.format(TIME_FORMAT).to_string())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl XmlType for NaiveTime {
    fn xml_kind() -> Kind {
        Kind::DateTime
    }

    fn xml_shape(_: &TypeResolver) -> TypeShape {
        TypeShape::named("NaiveTime")
    }

    fn xml_from_text(text: &str, _: Option<FormatHint>) -> Result<Self, Error> {
        let text = text.trim();
        NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|e| parse_error(text, TIME_FORMAT, e))
    }
}
