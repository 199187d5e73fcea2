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

//! Field-level metadata parsing for `#[xml(...)]` attributes.
//!
//! - `ignore`: never encode the field; the memberwise constructor fills it
//!   with `Default::default()`
//! - `format = "date" | "time"`: date-time pattern hint
//! - `rename = "Name"`: node name used instead of the field name

use proc_macro2::TokenStream;
use quote::quote;
use syn::Attribute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    Date,
    Time,
}

impl FormatHint {
    pub fn to_tokens(self) -> TokenStream {
        match self {
            FormatHint::Date => quote! { sillyxml_core::FormatHint::Date },
            FormatHint::Time => quote! { sillyxml_core::FormatHint::Time },
        }
    }
}

/// `Some(..)`/`None` tokens for an optional hint.
pub fn hint_tokens(hint: Option<FormatHint>) -> TokenStream {
    match hint {
        Some(hint) => {
            let hint = hint.to_tokens();
            quote! { Some(#hint) }
        }
        None => quote! { None },
    }
}

/// Represents parsed `#[xml(...)]` field attributes
#[derive(Debug, Clone, Default)]
pub struct XmlFieldMeta {
    pub ignore: bool,
    pub format: Option<FormatHint>,
    pub rename: Option<String>,
}

/// Parse `#[xml(...)]` attributes from a field or variant
pub fn parse_field_meta(attrs: &[Attribute]) -> syn::Result<XmlFieldMeta> {
    let mut meta = XmlFieldMeta::default();

    for attr in attrs {
        if !attr.path().is_ident("xml") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("ignore") {
                meta.ignore = true;
            } else if nested.path.is_ident("format") {
                let lit: syn::LitStr = nested.value()?.parse()?;
                meta.format = Some(match lit.value().as_str() {
                    "date" => FormatHint::Date,
                    "time" => FormatHint::Time,
                    other => {
                        return Err(syn::Error::new(
                            lit.span(),
                            format!("unknown format `{}`, expected \"date\" or \"time\"", other),
                        ))
                    }
                });
            } else if nested.path.is_ident("rename") {
                let lit: syn::LitStr = nested.value()?.parse()?;
                meta.rename = Some(lit.value());
            } else {
                return Err(nested.error("unknown xml field attribute"));
            }
            Ok(())
        })?;
    }

    Ok(meta)
}
