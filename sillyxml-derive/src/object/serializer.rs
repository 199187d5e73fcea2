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

use crate::object::{derive_enum, misc, read, write};
use crate::util::{parse_container_attrs, source_fields, XmlAttrs};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

/// Hooks contributed by one shape of input, split by trait.
struct Hooks {
    write: TokenStream,
    read: TokenStream,
}

fn writable_hooks() -> (TokenStream, Hooks) {
    let hooks = Hooks {
        write: quote! {
            fn xml_as_writable(&self) -> Option<&dyn sillyxml_core::Writable> {
                Some(self)
            }
        },
        read: quote! {
            fn xml_read_writable(
                context: &mut sillyxml_core::ReadContext,
                node: &sillyxml_core::DocumentNode,
            ) -> Result<Self, sillyxml_core::Error> {
                <Self as sillyxml_core::Writable>::read_xml(context, node)
            }
        },
    };
    (quote! { sillyxml_core::Kind::Writable }, hooks)
}

fn struct_hooks(data: &syn::DataStruct, attrs: &XmlAttrs) -> syn::Result<(TokenStream, Hooks)> {
    let fields = source_fields(&data.fields, attrs.rename_all)?;
    let descriptors = write::gen_field_descriptors(&fields);
    let constructors = read::gen_constructors(&data.fields, &fields, attrs.constructors.as_ref());
    let hooks = Hooks {
        write: write::gen_composite_write(),
        read: quote! {
            #descriptors
            #constructors
        },
    };
    Ok((quote! { sillyxml_core::Kind::Composite }, hooks))
}

fn enum_hooks(data: &syn::DataEnum, tag: &str) -> syn::Result<(TokenStream, Hooks)> {
    let hooks = Hooks {
        write: derive_enum::gen_to_text(data)?,
        read: derive_enum::gen_from_text(data, tag)?,
    };
    Ok((quote! { sillyxml_core::Kind::Enum }, hooks))
}

pub fn derive_serializer(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let attrs = parse_container_attrs(&ast.attrs)?;
    if attrs.writable && (attrs.rename_all.is_some() || attrs.constructors.is_some()) {
        return Err(syn::Error::new_spanned(
            name,
            "`rename_all` and `constructors` do not apply to writable types",
        ));
    }
    let tag = attrs.rename.clone().unwrap_or_else(|| name.to_string());

    let (kind, hooks) = match &ast.data {
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "XmlObject cannot be derived for unions",
            ))
        }
        _ if attrs.writable => writable_hooks(),
        Data::Struct(s) => struct_hooks(s, &attrs)?,
        Data::Enum(e) => enum_hooks(e, &tag)?,
    };
    let Hooks {
        write: write_ts,
        read: read_ts,
    } = hooks;

    let kind_ts = misc::gen_kind(kind);
    let shape_ts = misc::gen_shape(&tag, &ast.generics);
    let generics = misc::bounded_generics(&ast.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics sillyxml_core::XmlWrite for #name #ty_generics #where_clause {
            fn xml_descriptor(
                &self,
                type_resolver: &sillyxml_core::TypeResolver,
            ) -> ::std::sync::Arc<sillyxml_core::TypeDescriptor> {
                type_resolver.resolve::<Self>()
            }

            #write_ts

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl #impl_generics sillyxml_core::XmlType for #name #ty_generics #where_clause {
            #kind_ts

            #shape_ts

            #read_ts
        }
    })
}
