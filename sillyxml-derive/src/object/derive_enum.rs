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

use super::field_meta::parse_field_meta;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Ident};

/// Variant identifiers with their symbolic names.
fn variant_names(data_enum: &DataEnum) -> syn::Result<(Vec<&Ident>, Vec<String>)> {
    let mut idents = Vec::with_capacity(data_enum.variants.len());
    let mut names = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "XmlObject enums may only have unit variants; \
                 use #[xml(writable)] to encode data-carrying variants",
            ));
        }
        let meta = parse_field_meta(&variant.attrs)?;
        if meta.ignore || meta.format.is_some() {
            return Err(syn::Error::new_spanned(
                variant,
                "only `rename` is supported on enum variants",
            ));
        }
        idents.push(&variant.ident);
        names.push(meta.rename.unwrap_or_else(|| variant.ident.to_string()));
    }
    if idents.is_empty() {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "XmlObject cannot be derived for an enum without variants",
        ));
    }
    Ok((idents, names))
}

/// `fn xml_to_text`: the variant's symbolic name, never its discriminant.
pub fn gen_to_text(data_enum: &DataEnum) -> syn::Result<TokenStream> {
    let (idents, names) = variant_names(data_enum)?;
    Ok(quote! {
        fn xml_to_text(
            &self,
            _: Option<sillyxml_core::FormatHint>,
        ) -> Result<String, sillyxml_core::Error> {
            let name = match self {
                #(Self::#idents => #names,)*
            };
            Ok(name.to_string())
        }
    })
}

/// `fn xml_from_text`: exact match on the symbolic name.
pub fn gen_from_text(data_enum: &DataEnum, tag: &str) -> syn::Result<TokenStream> {
    let (idents, names) = variant_names(data_enum)?;
    Ok(quote! {
        fn xml_from_text(
            text: &str,
            _: Option<sillyxml_core::FormatHint>,
        ) -> Result<Self, sillyxml_core::Error> {
            match text {
                #(#names => Ok(Self::#idents),)*
                _ => Err(sillyxml_core::Error::value_error(format!(
                    "{:?} is not a variant of {}",
                    text, #tag
                ))),
            }
        }
    })
}
