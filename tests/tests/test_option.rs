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

use sillyxml::XmlObject;
use test_helpers::{compact, test_roundtrip};
use tests::SimpleClass;

#[derive(XmlObject, Debug, PartialEq)]
#[xml(rename_all = "PascalCase")]
struct Profile {
    name: String,
    nickname: Option<String>,
    favorite: Option<SimpleClass>,
}

#[derive(XmlObject, Debug, PartialEq)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

fn chain(len: i32) -> Node {
    let mut node = Node {
        value: len,
        next: None,
    };
    for value in (1..len).rev() {
        node = Node {
            value,
            next: Some(Box::new(node)),
        };
    }
    node
}

#[test]
fn test_none_field_is_an_empty_node() {
    let profile = Profile {
        name: "Ann".to_string(),
        nickname: None,
        favorite: None,
    };
    let text = compact().serialize(&profile).unwrap();
    assert_eq!(
        text,
        "<Profile><Name>Ann</Name><Nickname/><Favorite/></Profile>"
    );
    test_roundtrip(&compact(), profile);
}

#[test]
fn test_some_field_is_transparent() {
    let profile = Profile {
        name: "Ann".to_string(),
        nickname: Some("Annie".to_string()),
        favorite: Some(SimpleClass::default()),
    };
    let text = compact().serialize(&profile).unwrap();
    assert_eq!(
        text,
        "<Profile><Name>Ann</Name><Nickname>Annie</Nickname>\
         <Favorite><Foo>42</Foo><Bar>Banana</Bar></Favorite></Profile>"
    );
    test_roundtrip(&compact(), profile);
}

#[test]
fn test_none_root() {
    let xml = compact();
    let text = xml.serialize(&None::<i32>).unwrap();
    assert_eq!(text, "<I32/>");
    assert_eq!(xml.deserialize::<Option<i32>>(&text).unwrap(), None);
    assert_eq!(xml.deserialize::<Option<i32>>("<I32>3</I32>").unwrap(), Some(3));
}

#[test]
fn test_none_elements_keep_their_position() {
    let values = vec![Some(1i32), None, Some(3)];
    let text = compact().serialize(&values).unwrap();
    assert_eq!(text, "<ArrayOfI32><I32>1</I32><I32/><I32>3</I32></ArrayOfI32>");
    test_roundtrip(&compact(), values);
}

#[test]
fn test_recursive_type() {
    let list = chain(3);
    let text = compact().serialize(&list).unwrap();
    assert_eq!(
        text,
        "<Node><value>1</value><next><value>2</value><next><value>3</value><next/></next></next></Node>"
    );
    test_roundtrip(&compact(), list);
}

#[test]
fn test_box_is_transparent() {
    let xml = compact();
    let text = xml.serialize(&Box::new(5u16)).unwrap();
    assert_eq!(text, "<U16>5</U16>");
    assert_eq!(*xml.deserialize::<Box<u16>>(&text).unwrap(), 5);
}
