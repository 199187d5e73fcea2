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
use crate::resolver::context::ReadContext;
use crate::serializer::XmlType;
use crate::types::FormatHint;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    name: Cow<'static, str>,
    format_hint: Option<FormatHint>,
}

impl Parameter {
    pub fn new<S: Into<Cow<'static, str>>>(name: S, format_hint: Option<FormatHint>) -> Parameter {
        Parameter {
            name: name.into(),
            format_hint,
        }
    }

    #[inline(always)]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn get_format_hint(&self) -> Option<FormatHint> {
        self.format_hint
    }
}

pub type BuildFn<T> = fn(&mut Arguments<'_, '_>) -> Result<T, Error>;

/// A named-parameter construction path for `T`.
///
/// The decoder only calls `build` once every parameter name is matched by a
/// child node, so `build` may fetch each argument unconditionally.
pub struct Constructor<T> {
    parameters: Vec<Parameter>,
    build: BuildFn<T>,
}

impl<T> Constructor<T> {
    pub fn new(parameters: Vec<Parameter>, build: BuildFn<T>) -> Constructor<T> {
        Constructor { parameters, build }
    }

    #[inline(always)]
    pub fn get_parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Number of parameters named by `present`, which holds lowercased child names.
    pub fn score(&self, present: &HashSet<String>) -> usize {
        self.parameters
            .iter()
            .filter(|p| present.contains(&p.name.to_lowercase()))
            .count()
    }

    pub fn invoke(&self, arguments: &mut Arguments<'_, '_>) -> Result<T, Error> {
        (self.build)(arguments)
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// Child nodes bound to a constructor's parameters, in parameter order.
pub struct Arguments<'c, 'r> {
    context: &'c mut ReadContext<'r>,
    parameters: &'c [Parameter],
    nodes: Vec<&'c DocumentNode>,
}

impl<'c, 'r> Arguments<'c, 'r> {
    pub fn new(
        context: &'c mut ReadContext<'r>,
        parameters: &'c [Parameter],
        nodes: Vec<&'c DocumentNode>,
    ) -> Arguments<'c, 'r> {
        Arguments {
            context,
            parameters,
            nodes,
        }
    }

    /// Converts the node bound to parameter `index` into a `P`.
    ///
    /// The node carries the parameter's name rather than `P`'s tag, so it is
    /// decoded without the root-name check.
    pub fn get<P: XmlType>(&mut self, index: usize) -> Result<P, Error> {
        let node = self.nodes.get(index).copied().ok_or_else(|| {
            Error::unsupported_shape(format!(
                "Constructor argument {} requested but only {} bound",
                index,
                self.nodes.len()
            ))
        })?;
        let hint = self
            .parameters
            .get(index)
            .and_then(Parameter::get_format_hint);
        self.context.read_value::<P>(node, hint)
    }
}
