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
use crate::util::SourceField;
use proc_macro2::TokenStream;
use quote::quote;

fn gen_field_descriptor(source_field: &SourceField<'_>) -> TokenStream {
    let name = &source_field.xml_name;
    if source_field.meta.ignore {
        return quote! { sillyxml_core::FieldDescriptor::ignored(#name) };
    }
    let member = &source_field.member;
    let descriptor = quote! {
        sillyxml_core::FieldDescriptor::new(#name, |owner| {
            owner
                .downcast_ref::<Self>()
                .map(|value| &value.#member as &dyn sillyxml_core::XmlWrite)
        })
    };
    match source_field.meta.format {
        Some(_) => {
            let hint = hint_tokens(source_field.meta.format);
            quote! { #descriptor.with_format_hint(#hint) }
        }
        None => descriptor,
    }
}

/// `fn xml_field_descriptors`, fields in declaration order.
pub fn gen_field_descriptors(source_fields: &[SourceField<'_>]) -> TokenStream {
    let descriptors = source_fields.iter().map(gen_field_descriptor);
    quote! {
        fn xml_field_descriptors() -> Vec<sillyxml_core::FieldDescriptor> {
            vec![#(#descriptors),*]
        }
    }
}

/// The `XmlWrite` methods every derived composite shares.
pub fn gen_composite_write() -> TokenStream {
    quote! {
        fn xml_fields(
            &self,
            type_resolver: &sillyxml_core::TypeResolver,
        ) -> ::std::sync::Arc<[sillyxml_core::FieldDescriptor]> {
            type_resolver.fields::<Self>()
        }
    }
}
