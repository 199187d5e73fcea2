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

use proptest::prelude::*;
use sillyxml::{Error, XmlObject};
use std::collections::{BTreeSet, VecDeque};
use test_helpers::{compact, test_roundtrip};

#[derive(XmlObject, Debug, PartialEq, Clone)]
struct Inner {
    value: i32,
}

#[derive(XmlObject, Debug, PartialEq)]
struct Wrapper<T> {
    inner: T,
}

#[test]
fn test_array_of_inner() {
    let items = vec![Inner { value: 1 }, Inner { value: 2 }];
    let text = compact().serialize(&items).unwrap();
    assert_eq!(
        text,
        "<ArrayOfInner><Inner><value>1</value></Inner><Inner><value>2</value></Inner></ArrayOfInner>"
    );
    test_roundtrip(&compact(), items);
}

#[test]
fn test_wrapper_of_inner() {
    let wrapper = Wrapper {
        inner: Inner { value: 5 },
    };
    let text = compact().serialize(&wrapper).unwrap();
    assert_eq!(
        text,
        "<WrapperOfInner><inner><value>5</value></inner></WrapperOfInner>"
    );
    test_roundtrip(&compact(), wrapper);
}

#[test]
fn test_fixed_size_array() {
    let xml = compact();
    let text = xml.serialize(&[1i32, 2, 3]).unwrap();
    assert_eq!(text, "<ArrayOfI32><I32>1</I32><I32>2</I32><I32>3</I32></ArrayOfI32>");
    let back: [i32; 3] = xml.deserialize(&text).unwrap();
    assert_eq!(back, [1, 2, 3]);
}

#[test]
fn test_fixed_size_array_length_mismatch() {
    let err = compact()
        .deserialize::<[i32; 3]>("<ArrayOfI32><I32>1</I32></ArrayOfI32>")
        .unwrap_err();
    assert!(matches!(err, Error::Value(_)));
}

#[test]
fn test_vec_and_array_share_a_name() {
    let xml = compact();
    let text = xml.serialize(&vec![4i32, 5]).unwrap();
    let back: [i32; 2] = xml.deserialize(&text).unwrap();
    assert_eq!(back, [4, 5]);
}

#[test]
fn test_other_collections() {
    let xml = compact();
    let deque: VecDeque<i32> = VecDeque::from(vec![3, 1, 2]);
    let text = xml.serialize(&deque).unwrap();
    assert_eq!(
        text,
        "<VecDequeOfI32><I32>3</I32><I32>1</I32><I32>2</I32></VecDequeOfI32>"
    );
    test_roundtrip(&xml, deque);

    let set: BTreeSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
    let text = xml.serialize(&set).unwrap();
    assert_eq!(
        text,
        "<BTreeSetOfString><String>a</String><String>b</String></BTreeSetOfString>"
    );
    test_roundtrip(&xml, set);
}

#[test]
fn test_empty_sequence() {
    let xml = compact();
    let text = xml.serialize(&Vec::<i32>::new()).unwrap();
    assert_eq!(text, "<ArrayOfI32/>");
    let back: Vec<i32> = xml.deserialize(&text).unwrap();
    assert!(back.is_empty());
}

#[test]
fn test_sequence_field_of_composites() {
    #[derive(XmlObject, Debug, PartialEq)]
    struct Basket {
        items: Vec<Inner>,
        counts: Vec<u32>,
    }

    let basket = Basket {
        items: vec![Inner { value: 9 }],
        counts: vec![],
    };
    let text = compact().serialize(&basket).unwrap();
    assert_eq!(
        text,
        "<Basket><items><Inner><value>9</value></Inner></items><counts/></Basket>"
    );
    test_roundtrip(&compact(), basket);
}

proptest! {
    #[test]
    fn test_sequence_order_is_preserved(values in prop::collection::vec(any::<i64>(), 0..32)) {
        let xml = compact();
        let text = xml.serialize(&values).unwrap();
        let back: Vec<i64> = xml.deserialize(&text).unwrap();
        prop_assert_eq!(back, values);
    }

    #[test]
    fn test_string_elements_keep_order(values in prop::collection::vec("[a-z0-9 ]{1,8}", 0..16)) {
        let xml = compact();
        let text = xml.serialize(&values).unwrap();
        let back: Vec<String> = xml.deserialize(&text).unwrap();
        prop_assert_eq!(back, values);
    }

    #[test]
    fn test_decimal_text_is_culture_invariant(value in prop::num::f64::NORMAL) {
        let xml = compact();
        let tree = xml.to_document(&value).unwrap();
        let text = tree.text().unwrap();
        prop_assert!(!text.contains(','));
        let back: f64 = xml.from_document(&tree).unwrap();
        prop_assert_eq!(back, value);
    }
}
