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

//! Fixture types shared by the integration tests.

use sillyxml::XmlObject;

#[derive(XmlObject, Debug, PartialEq, Clone)]
#[xml(rename_all = "PascalCase")]
pub struct SimpleClass {
    pub foo: i32,
    pub bar: String,
}

impl Default for SimpleClass {
    fn default() -> Self {
        SimpleClass {
            foo: 42,
            bar: "Banana".to_string(),
        }
    }
}

#[derive(XmlObject, Debug, PartialEq, Clone)]
#[xml(rename_all = "PascalCase")]
pub struct ClassWithEnumerable {
    pub collection: Vec<i32>,
}

impl Default for ClassWithEnumerable {
    fn default() -> Self {
        ClassWithEnumerable {
            collection: vec![42, 15, 22],
        }
    }
}

#[derive(XmlObject, Debug, PartialEq, Clone, Default)]
#[xml(rename_all = "PascalCase")]
pub struct ClassWithNestedObjects {
    pub monkey: SimpleClass,
    pub avocado: ClassWithEnumerable,
}

#[derive(XmlObject, Debug, PartialEq, Clone)]
#[xml(rename_all = "PascalCase")]
pub struct GenericClass<T> {
    pub contained: T,
}
