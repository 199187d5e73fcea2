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

#[derive(XmlObject, Debug, PartialEq, Clone, Copy)]
enum Color {
    Red,
    Green,
    #[xml(rename = "Azul")]
    Blue,
}

#[derive(XmlObject, Debug, PartialEq)]
#[xml(rename = "Level")]
#[allow(dead_code)]
enum Priority {
    Low = 10,
    High = 20,
}

#[test]
fn test_enum_is_written_by_name() {
    let xml = compact();
    assert_eq!(xml.serialize(&Color::Red).unwrap(), "<Color>Red</Color>");
    assert_eq!(xml.serialize(&Color::Blue).unwrap(), "<Color>Azul</Color>");
    assert_eq!(xml.serialize(&Priority::High).unwrap(), "<Level>High</Level>");
}

#[test]
fn test_enum_is_read_by_name() {
    let xml = compact();
    assert_eq!(
        xml.deserialize::<Color>("<Color>Green</Color>").unwrap(),
        Color::Green
    );
    assert_eq!(
        xml.deserialize::<Color>("<Color>Azul</Color>").unwrap(),
        Color::Blue
    );
    for color in [Color::Red, Color::Green, Color::Blue] {
        test_roundtrip(&xml, color);
    }
}

#[test]
fn test_unknown_variant_is_value_error() {
    let xml = compact();
    let err = xml
        .deserialize::<Color>("<Color>Purple</Color>")
        .unwrap_err();
    assert!(matches!(err, Error::Value(_)));
    let err = xml.deserialize::<Color>("<Color>Blue</Color>").unwrap_err();
    assert!(matches!(err, Error::Value(_)));
    let err = xml.deserialize::<Priority>("<Level>20</Level>").unwrap_err();
    assert!(matches!(err, Error::Value(_)));
}

#[test]
fn test_enum_fields_and_sequences() {
    #[derive(XmlObject, Debug, PartialEq)]
    #[xml(rename_all = "PascalCase")]
    struct Palette {
        primary: Color,
        others: Vec<Color>,
        accent: Option<Color>,
    }

    let palette = Palette {
        primary: Color::Red,
        others: vec![Color::Green, Color::Blue],
        accent: None,
    };
    let text = compact().serialize(&palette).unwrap();
    assert_eq!(
        text,
        "<Palette><Primary>Red</Primary><Others><Color>Green</Color><Color>Azul</Color></Others><Accent/></Palette>"
    );
    test_roundtrip(&compact(), palette);
}
