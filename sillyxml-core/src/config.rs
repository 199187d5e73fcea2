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

/// Configuration for encoding, decoding and rendering.
///
/// This struct is shared between the main `Xml` instance and the
/// `WriteContext`/`ReadContext` so that every step of one call sees the
/// same settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether rendered output starts with the declaration header.
    pub declaration: bool,
    /// Indentation width for pretty-printed output; `None` renders compactly.
    pub indent: Option<usize>,
    /// Maximum nesting depth for encode/decode recursion.
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            declaration: true,
            indent: None,
            max_depth: 64,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the declaration header is written.
    #[inline(always)]
    pub fn is_declaration(&self) -> bool {
        self.declaration
    }

    /// Get the indentation width, if pretty-printing.
    #[inline(always)]
    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    /// Get maximum nesting depth.
    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
