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

use crate::object::field_meta::{parse_field_meta, XmlFieldMeta};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Fields, Member};

/// Field naming convention applied by `#[xml(rename_all = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    PascalCase,
    CamelCase,
}

impl RenameRule {
    fn parse(lit: &syn::LitStr) -> syn::Result<RenameRule> {
        match lit.value().as_str() {
            "PascalCase" => Ok(RenameRule::PascalCase),
            "camelCase" => Ok(RenameRule::CamelCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!(
                    "unknown rename rule `{}`, expected \"PascalCase\" or \"camelCase\"",
                    other
                ),
            )),
        }
    }

    /// Applies the rule to a snake_case identifier.
    pub fn apply(self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        for (i, word) in name.split('_').filter(|w| !w.is_empty()).enumerate() {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                if i == 0 && self == RenameRule::CamelCase {
                    out.extend(first.to_lowercase());
                } else {
                    out.extend(first.to_uppercase());
                }
                out.push_str(chars.as_str());
            }
        }
        out
    }
}

/// Parsed container-level `#[xml(...)]` attributes.
#[derive(Default)]
pub struct XmlAttrs {
    pub rename: Option<String>,
    pub rename_all: Option<RenameRule>,
    pub writable: bool,
    pub constructors: Option<syn::Path>,
}

pub fn parse_container_attrs(attrs: &[syn::Attribute]) -> syn::Result<XmlAttrs> {
    let mut parsed = XmlAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("xml") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                parsed.rename = Some(lit.value());
            } else if meta.path.is_ident("rename_all") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                parsed.rename_all = Some(RenameRule::parse(&lit)?);
            } else if meta.path.is_ident("writable") {
                parsed.writable = true;
            } else if meta.path.is_ident("constructors") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                parsed.constructors = Some(lit.parse()?);
            } else {
                return Err(meta.error("unknown xml container attribute"));
            }
            Ok(())
        })?;
    }
    Ok(parsed)
}

/// A struct field with its resolved node name and metadata.
///
/// Tuple-struct fields are named `Item1`, `Item2`, ... the same way tuples are.
pub struct SourceField<'a> {
    pub field: &'a Field,
    pub member: Member,
    pub xml_name: String,
    pub meta: XmlFieldMeta,
}

impl<'a> SourceField<'a> {
    /// Field initialization syntax for struct construction.
    pub fn field_init(&self, value: TokenStream) -> TokenStream {
        match &self.member {
            Member::Named(ident) => quote! { #ident: #value },
            Member::Unnamed(_) => value,
        }
    }
}

/// Returns fields in declaration order.
pub fn source_fields(
    fields: &Fields,
    rule: Option<RenameRule>,
) -> syn::Result<Vec<SourceField<'_>>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let meta = parse_field_meta(&field.attrs)?;
            let (member, default_name) = match &field.ident {
                Some(ident) => {
                    let name = ident.to_string();
                    let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
                    let name = match rule {
                        Some(rule) => rule.apply(&name),
                        None => name,
                    };
                    (Member::Named(ident.clone()), name)
                }
                None => (Member::Unnamed(index.into()), format!("Item{}", index + 1)),
            };
            let xml_name = meta.rename.clone().unwrap_or(default_name);
            Ok(SourceField {
                field,
                member,
                xml_name,
                meta,
            })
        })
        .collect()
}

/// `Self(..)`, `Self { .. }` or `Self` for unit structs.
pub fn self_construction(fields: &Fields, field_inits: &[TokenStream]) -> TokenStream {
    match fields {
        Fields::Named(_) => quote! { Self { #(#field_inits),* } },
        Fields::Unnamed(_) => quote! { Self( #(#field_inits),* ) },
        Fields::Unit => quote! { Self },
    }
}
