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

use sillyxml::{Error, XmlObject};
use test_helpers::{compact, test_roundtrip};

#[test]
fn test_anonymous_record() {
    let value = (1i32, "one".to_string());
    let text = compact().serialize(&value).unwrap();
    assert_eq!(
        text,
        "<AnonymousTypeOfI32AndString><Item1>1</Item1><Item2>one</Item2></AnonymousTypeOfI32AndString>"
    );
    test_roundtrip(&compact(), value);
}

#[test]
fn test_single_element_tuple() {
    let text = compact().serialize(&(true,)).unwrap();
    assert_eq!(
        text,
        "<AnonymousTypeOfBool><Item1>true</Item1></AnonymousTypeOfBool>"
    );
}

#[test]
fn test_large_tuple() {
    test_roundtrip(
        &compact(),
        (1u8, 2u16, 3u32, 4u64, 5i8, 6i16, 7i32, "eight".to_string()),
    );
}

#[test]
fn test_sequence_of_tuples() {
    let values = vec![(1i32, true), (2, false)];
    let text = compact().serialize(&values).unwrap();
    assert!(text.starts_with("<ArrayOfAnonymousTypeOfI32AndBool><AnonymousTypeOfI32AndBool>"));
    test_roundtrip(&compact(), values);
}

#[test]
fn test_tuple_struct() {
    #[derive(XmlObject, Debug, PartialEq)]
    struct Point(i32, i32);

    let text = compact().serialize(&Point(3, -4)).unwrap();
    assert_eq!(text, "<Point><Item1>3</Item1><Item2>-4</Item2></Point>");
    test_roundtrip(&compact(), Point(3, -4));
}

#[test]
fn test_tuple_struct_with_ignored_field() {
    #[derive(XmlObject, Debug, PartialEq)]
    struct Tagged(String, #[xml(ignore)] u64, #[xml(rename = "Weight")] f32);

    let text = compact()
        .serialize(&Tagged("a".to_string(), 99, 1.5))
        .unwrap();
    assert_eq!(text, "<Tagged><Item1>a</Item1><Weight>1.5</Weight></Tagged>");
    let back: Tagged = compact().deserialize(&text).unwrap();
    assert_eq!(back, Tagged("a".to_string(), 0, 1.5));
}

#[test]
fn test_unit_struct() {
    #[derive(XmlObject, Debug, PartialEq)]
    struct Marker;

    let text = compact().serialize(&Marker).unwrap();
    assert_eq!(text, "<Marker/>");
    test_roundtrip(&compact(), Marker);
}

#[test]
fn test_tuple_field() {
    #[derive(XmlObject, Debug, PartialEq)]
    struct Segment {
        ends: (i32, i32),
    }

    let segment = Segment { ends: (0, 10) };
    let text = compact().serialize(&segment).unwrap();
    assert_eq!(
        text,
        "<Segment><ends><Item1>0</Item1><Item2>10</Item2></ends></Segment>"
    );
    test_roundtrip(&compact(), segment);
}

#[test]
fn test_tuple_missing_item() {
    let err = compact()
        .deserialize::<(i32, i32)>("<AnonymousTypeOfI32AndI32><Item1>1</Item1></AnonymousTypeOfI32AndI32>")
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedShape(_)));
}
