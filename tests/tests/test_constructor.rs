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

use sillyxml::{Constructor, Error, Parameter, Xml, XmlObject};


#[derive(XmlObject, Debug, PartialEq)]
#[xml(constructors = "Point::partial_constructors")]
struct Point {
    x: i32,
    y: i32,
}

impl Point {
    fn partial_constructors() -> Vec<Constructor<Point>> {
        vec![
            Constructor::new(vec![Parameter::new("x", None)], |args| {
                Ok(Point {
                    x: args.get(0)?,
                    y: 0,
                })
            }),
            // Full match on the same names as the memberwise constructor; never chosen.
            Constructor::new(
                vec![Parameter::new("x", None), Parameter::new("y", None)],
                |args| {
                    Ok(Point {
                        x: -args.get::<i32>(0)?,
                        y: -args.get::<i32>(1)?,
                    })
                },
            ),
            Constructor::new(vec![Parameter::new("Y", None)], |args| {
                Ok(Point {
                    x: 0,
                    y: args.get(0)?,
                })
            }),
        ]
    }
}

fn read(text: &str) -> Result<Point, Error> {
    Xml::default().deserialize(text)
}

#[test]
fn test_first_full_match_wins() {
    let point = read("<Point><x>1</x><y>2</y></Point>").unwrap();
    assert_eq!(point, Point { x: 1, y: 2 });
}

#[test]
fn test_partial_constructor_selected() {
    let point = read("<Point><x>5</x></Point>").unwrap();
    assert_eq!(point, Point { x: 5, y: 0 });
}

#[test]
fn test_parameter_names_are_case_insensitive() {
    let point = read("<Point><y>8</y></Point>").unwrap();
    assert_eq!(point, Point { x: 0, y: 8 });
}

#[test]
fn test_no_full_match_is_unsupported_shape() {
    let err = read("<Point><z>1</z></Point>").unwrap_err();
    assert!(matches!(err, Error::UnsupportedShape(_)));
    let err = read("<Point/>").unwrap_err();
    assert!(matches!(err, Error::UnsupportedShape(_)));
}

#[test]
fn test_highest_score_must_be_full() {
    #[derive(XmlObject, Debug, PartialEq)]
    #[xml(constructors = "Span::from_start")]
    struct Span {
        start: u32,
        end: u32,
        label: String,
    }

    impl Span {
        fn from_start() -> Vec<Constructor<Span>> {
            vec![Constructor::new(
                vec![Parameter::new("start", None)],
                |args| {
                    Ok(Span {
                        start: args.get(0)?,
                        end: 0,
                        label: String::new(),
                    })
                },
            )]
        }
    }

    let xml = Xml::default();
    let span: Span = xml.deserialize("<Span><start>4</start></Span>").unwrap();
    assert_eq!(span.start, 4);
    // The memberwise constructor scores 2 of 3 and blocks the one-parameter match.
    let err = xml
        .deserialize::<Span>("<Span><start>4</start><end>9</end></Span>")
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedShape(_)));
}

#[test]
fn test_argument_errors_propagate() {
    let err = read("<Point><x>one</x><y>2</y></Point>").unwrap_err();
    assert!(matches!(err, Error::Value(_)));
}
