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

use super::field_meta::hint_tokens;
use crate::util::{self_construction, SourceField};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Fields;

/// The memberwise constructor: one parameter per encoded field, in
/// declaration order. Ignored fields are filled with `Default::default()`.
fn gen_memberwise(fields: &Fields, source_fields: &[SourceField<'_>]) -> TokenStream {
    let parameters: Vec<TokenStream> = source_fields
        .iter()
        .filter(|sf| !sf.meta.ignore)
        .map(|sf| {
            let name = &sf.xml_name;
            let hint = hint_tokens(sf.meta.format);
            quote! { sillyxml_core::Parameter::new(#name, #hint) }
        })
        .collect();

    let mut index = 0usize;
    let field_inits: Vec<TokenStream> = source_fields
        .iter()
        .map(|sf| {
            if sf.meta.ignore {
                return sf.field_init(quote! { ::std::default::Default::default() });
            }
            let ty = &sf.field.ty;
            let value = quote! { args.get::<#ty>(#index)? };
            index += 1;
            sf.field_init(value)
        })
        .collect();
    let construction = self_construction(fields, &field_inits);
    let args = if parameters.is_empty() {
        quote! { _args }
    } else {
        quote! { args }
    };

    quote! {
        sillyxml_core::Constructor::new(
            vec![#(#parameters),*],
            |#args| Ok(#construction),
        )
    }
}

/// `fn xml_constructors`: the memberwise constructor first, then any listed
/// with `#[xml(constructors = "path")]`.
pub fn gen_constructors(
    fields: &Fields,
    source_fields: &[SourceField<'_>],
    extra: Option<&syn::Path>,
) -> TokenStream {
    let memberwise = gen_memberwise(fields, source_fields);
    let body = match extra {
        Some(path) => quote! {
            let mut constructors = vec![#memberwise];
            constructors.extend(#path());
            constructors
        },
        None => quote! { vec![#memberwise] },
    };
    quote! {
        fn xml_constructors() -> Vec<sillyxml_core::Constructor<Self>> {
            #body
        }
    }
}
