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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident};

pub fn type_params(generics: &Generics) -> Vec<&Ident> {
    generics.type_params().map(|param| &param.ident).collect()
}

/// `fn xml_shape`: a plain name, or `NameOfAAndB` for generic types.
pub fn gen_shape(tag: &str, generics: &Generics) -> TokenStream {
    let params = type_params(generics);
    if params.is_empty() {
        return quote! {
            fn xml_shape(_: &sillyxml_core::TypeResolver) -> sillyxml_core::TypeShape {
                sillyxml_core::TypeShape::named(#tag)
            }
        };
    }
    quote! {
        fn xml_shape(type_resolver: &sillyxml_core::TypeResolver) -> sillyxml_core::TypeShape {
            sillyxml_core::TypeShape::Generic {
                base: ::std::borrow::Cow::Borrowed(#tag),
                arguments: vec![#(type_resolver.resolve::<#params>()),*],
            }
        }
    }
}

pub fn gen_kind(kind: TokenStream) -> TokenStream {
    quote! {
        #[inline(always)]
        fn xml_kind() -> sillyxml_core::Kind {
            #kind
        }
    }
}

/// Adds `XmlType` bounds on every type parameter.
pub fn bounded_generics(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<Ident> = type_params(&generics).into_iter().cloned().collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(syn::parse_quote! { #param: sillyxml_core::XmlType });
    }
    generics
}
