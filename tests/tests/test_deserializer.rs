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

mod test_helpers;

use sillyxml::{from_str, Error, XmlObject};
use test_helpers::{compact, test_roundtrip};
use tests::{ClassWithEnumerable, ClassWithNestedObjects, GenericClass, SimpleClass};

const DECLARATION_WITH_SPACE: &str =
    r#"<?xml version="1.0" encoding="utf-8" standalone="yes" ?>"#;

#[derive(XmlObject, Debug, PartialEq)]
#[xml(rename_all = "PascalCase")]
struct SimpleDeserializationClass {
    foo: i32,
    bar: String,
}

#[derive(XmlObject, Debug, PartialEq)]
#[xml(rename_all = "PascalCase")]
struct SimpleNestedDeserializationClass {
    contained: SimpleDeserializationClass,
}

#[test]
fn test_simple_class() {
    let xml = format!(
        "{}<SimpleDeserializationClass><Foo>42</Foo><Bar>Banana</Bar></SimpleDeserializationClass>",
        DECLARATION_WITH_SPACE
    );
    let actual: SimpleDeserializationClass = from_str(&xml).unwrap();
    assert_eq!(actual.foo, 42);
    assert_eq!(actual.bar, "Banana");
}

#[test]
fn test_simple_nested_class() {
    let xml = format!(
        "{}<SimpleNestedDeserializationClass><Contained><Foo>42</Foo><Bar>Banana</Bar></Contained></SimpleNestedDeserializationClass>",
        DECLARATION_WITH_SPACE
    );
    let actual: SimpleNestedDeserializationClass = from_str(&xml).unwrap();
    assert_eq!(actual.contained.foo, 42);
    assert_eq!(actual.contained.bar, "Banana");
}

#[test]
fn test_child_names_are_case_insensitive() {
    let xml = "<SimpleDeserializationClass><FOO>7</FOO><bar>Kiwi</bar></SimpleDeserializationClass>";
    let actual: SimpleDeserializationClass = from_str(xml).unwrap();
    assert_eq!(
        actual,
        SimpleDeserializationClass {
            foo: 7,
            bar: "Kiwi".to_string()
        }
    );
}

#[test]
fn test_child_order_and_extra_children_do_not_matter() {
    let xml = "<SimpleDeserializationClass><Extra>1</Extra><Bar>Kiwi</Bar><Foo>7</Foo></SimpleDeserializationClass>";
    let actual: SimpleDeserializationClass = from_str(xml).unwrap();
    assert_eq!(actual.foo, 7);
    assert_eq!(actual.bar, "Kiwi");
}

#[test]
fn test_pretty_input() {
    let xml = "<SimpleDeserializationClass>\n  <Foo> 42 </Foo>\n  <Bar>Banana</Bar>\n</SimpleDeserializationClass>\n";
    let actual: SimpleDeserializationClass = from_str(xml).unwrap();
    assert_eq!(actual.foo, 42);
    assert_eq!(actual.bar, "Banana");
}

#[test]
fn test_empty_text_reads_as_empty_string() {
    let xml = "<SimpleDeserializationClass><Foo>1</Foo><Bar/></SimpleDeserializationClass>";
    let actual: SimpleDeserializationClass = from_str(xml).unwrap();
    assert_eq!(actual.bar, "");
}

#[test]
fn test_root_name_mismatch() {
    let xml = "<SimpleClass><Foo>42</Foo><Bar>Banana</Bar></SimpleClass>";
    let err = from_str::<SimpleDeserializationClass>(xml).unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn test_root_name_is_case_sensitive() {
    let err = from_str::<i32>("<i32>1</i32>").unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn test_missing_child_is_unsupported_shape() {
    let xml = "<SimpleDeserializationClass><Foo>42</Foo></SimpleDeserializationClass>";
    let err = from_str::<SimpleDeserializationClass>(xml).unwrap_err();
    assert!(matches!(err, Error::UnsupportedShape(_)));
}

#[test]
fn test_malformed_integer_is_value_error() {
    let xml = "<SimpleDeserializationClass><Foo>forty-two</Foo><Bar>Banana</Bar></SimpleDeserializationClass>";
    let err = from_str::<SimpleDeserializationClass>(xml).unwrap_err();
    assert!(matches!(err, Error::Value(_)));
}

#[test]
fn test_malformed_values() {
    assert!(matches!(
        from_str::<u8>("<U8>256</U8>").unwrap_err(),
        Error::Value(_)
    ));
    assert!(matches!(
        from_str::<bool>("<Bool>yes</Bool>").unwrap_err(),
        Error::Value(_)
    ));
    assert!(matches!(
        from_str::<char>("<Char>ab</Char>").unwrap_err(),
        Error::Value(_)
    ));
}

#[test]
fn test_malformed_document_is_parse_error() {
    let err = from_str::<i32>("<I32>42</I64>").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_roundtrips() {
    let xml = compact();
    test_roundtrip(&xml, SimpleClass::default());
    test_roundtrip(&xml, ClassWithEnumerable::default());
    test_roundtrip(&xml, ClassWithNestedObjects::default());
    test_roundtrip(
        &xml,
        GenericClass {
            contained: SimpleClass::default(),
        },
    );
    test_roundtrip(&xml, "  padded  ".to_string());
    test_roundtrip(&xml, "a < b && c > d".to_string());
    test_roundtrip(&xml, 3.14f64);
    test_roundtrip(&xml, i64::MIN);
    test_roundtrip(&xml, 'λ');
}

#[test]
fn test_roundtrip_with_declaration() {
    test_roundtrip(&sillyxml::Xml::default(), ClassWithNestedObjects::default());
}
