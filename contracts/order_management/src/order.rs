// Copyright 2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Documents stored in world state.
//!
//! Every document carries a `docType` discriminator naming its shape. The field names are the
//! storage format and must not change.
//!
//! Decoding accepts everything the clients that wrote the existing records produce: missing
//! fields and `null` leave a field at its empty value, unknown fields are ignored, field names
//! match regardless of case, and a repeated field takes its last value.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

pub const ORDER_DOC_TYPE: &str = "order";
pub const ORDER_LINE_DOC_TYPE: &str = "orderline";
pub const PART_DOC_TYPE: &str = "part";
pub const STATUS_LINE_DOC_TYPE: &str = "statusline";
pub const PO_STATUS_DOC_TYPE: &str = "status";
pub const ORGANIZATION_DOC_TYPE: &str = "organization";
pub const USER_DOC_TYPE: &str = "user";

/// Returns true if the object key `key` names the field stored as `name`.
fn field_matches(key: &str, name: &str) -> bool {
    key == name || key.to_lowercase() == name.to_lowercase()
}

/// Implements `Deserialize` for a document from its field to key mapping.
///
/// Keys are applied in the order they appear. A `null` value leaves the field as it is, and a
/// `null` document decodes as the empty document.
macro_rules! impl_document_deserialize {
    ($document:ident { $($field:ident => $key:expr),* $(,)? }) => {
        impl<'de> Deserialize<'de> for $document {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct DocumentVisitor;

                impl<'de> Visitor<'de> for DocumentVisitor {
                    type Value = $document;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "a {} document", stringify!($document))
                    }

                    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                        Ok($document::default())
                    }

                    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
                    where
                        A: MapAccess<'de>,
                    {
                        let mut document = $document::default();
                        while let Some(key) = map.next_key::<String>()? {
                            $(
                                if field_matches(&key, $key) {
                                    if let Some(value) = map.next_value::<Option<_>>()? {
                                        document.$field = value;
                                    }
                                    continue;
                                }
                            )*
                            map.next_value::<IgnoredAny>()?;
                        }
                        Ok(document)
                    }
                }

                deserializer.deserialize_any(DocumentVisitor)
            }
        }
    };
}

/// A purchase or sales order, stored under its order number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Order {
    #[serde(rename = "docType")]
    pub doc_type: String,
    #[serde(rename = "ordernumber")]
    pub order_number: String,
    #[serde(rename = "referencenumber")]
    pub reference_number: String,
    #[serde(rename = "referencetype")]
    pub reference_type: String,
    pub from: String,
    pub to: String,
    pub part: Vec<OrderLine>,
    #[serde(rename = "poDate")]
    pub po_date: String,
}

impl Order {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn has_expected_doc_type(&self) -> bool {
        self.doc_type == ORDER_DOC_TYPE
    }
}

/// A single line of an order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderLine {
    #[serde(rename = "docType")]
    pub doc_type: String,
    pub part: PartDetail,
    pub price: f64,
    pub quantity: i64,
    #[serde(rename = "deliverydate")]
    pub delivery_date: String,
}

impl OrderLine {
    pub fn has_expected_doc_type(&self) -> bool {
        self.doc_type == ORDER_LINE_DOC_TYPE
    }
}

/// Part details, only ever embedded in another document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartDetail {
    #[serde(rename = "docType")]
    pub doc_type: String,
    #[serde(rename = "partnumber")]
    pub part_number: String,
    pub description: String,
    #[serde(rename = "unitofmeasure")]
    pub unit_of_measure: String,
}

impl PartDetail {
    pub fn has_expected_doc_type(&self) -> bool {
        self.doc_type == PART_DOC_TYPE
    }
}

/// Updated expected delivery for one line of a purchase order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusLine {
    #[serde(rename = "docType")]
    pub doc_type: String,
    pub part: PartDetail,
    #[serde(rename = "expecteddeliverydate")]
    pub expected_delivery_date: String,
}

impl StatusLine {
    pub fn has_expected_doc_type(&self) -> bool {
        self.doc_type == STATUS_LINE_DOC_TYPE
    }
}

/// Status of a purchase order. No operation reads or writes these yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoStatus {
    #[serde(rename = "docType")]
    pub doc_type: String,
    #[serde(rename = "ponumber")]
    pub po_number: String,
    #[serde(rename = "referencenumber")]
    pub reference_number: String,
    pub status: Vec<StatusLine>,
}

impl PoStatus {
    pub fn has_expected_doc_type(&self) -> bool {
        self.doc_type == PO_STATUS_DOC_TYPE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "docType")]
    pub doc_type: String,
    #[serde(rename = "orgid")]
    pub org_id: String,
    pub name: String,
    pub details: String,
}

impl Organization {
    pub fn has_expected_doc_type(&self) -> bool {
        self.doc_type == ORGANIZATION_DOC_TYPE
    }
}

/// A user, associated with an `Organization` by `orgid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    #[serde(rename = "docType")]
    pub doc_type: String,
    #[serde(rename = "username")]
    pub user_name: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    #[serde(rename = "orgid")]
    pub org_id: String,
}

impl User {
    pub fn has_expected_doc_type(&self) -> bool {
        self.doc_type == USER_DOC_TYPE
    }
}

impl_document_deserialize!(Order {
    doc_type => "docType",
    order_number => "ordernumber",
    reference_number => "referencenumber",
    reference_type => "referencetype",
    from => "from",
    to => "to",
    part => "part",
    po_date => "poDate",
});

impl_document_deserialize!(OrderLine {
    doc_type => "docType",
    part => "part",
    price => "price",
    quantity => "quantity",
    delivery_date => "deliverydate",
});

impl_document_deserialize!(PartDetail {
    doc_type => "docType",
    part_number => "partnumber",
    description => "description",
    unit_of_measure => "unitofmeasure",
});

impl_document_deserialize!(StatusLine {
    doc_type => "docType",
    part => "part",
    expected_delivery_date => "expecteddeliverydate",
});

impl_document_deserialize!(PoStatus {
    doc_type => "docType",
    po_number => "ponumber",
    reference_number => "referencenumber",
    status => "status",
});

impl_document_deserialize!(Organization {
    doc_type => "docType",
    org_id => "orgid",
    name => "name",
    details => "details",
});

impl_document_deserialize!(User {
    doc_type => "docType",
    user_name => "username",
    first_name => "firstname",
    last_name => "lastname",
    org_id => "orgid",
});

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "docType": "order",
        "ordernumber": "PO-1",
        "referencenumber": "SO-7",
        "referencetype": "sales",
        "from": "A",
        "to": "B",
        "poDate": "2020-01-01",
        "part": [
            {
                "docType": "orderline",
                "part": {
                    "docType": "part",
                    "partnumber": "P-100",
                    "description": "hex bolt",
                    "unitofmeasure": "EA"
                },
                "price": 1.25,
                "quantity": 40,
                "deliverydate": "2020-02-01"
            }
        ]
    }"#;

    #[test]
    // Test that an order decodes using the stored field names
    fn test_order_from_json() {
        let order = Order::from_json(ORDER_JSON.as_bytes()).expect("Failed to decode order");

        assert_eq!(order.order_number, "PO-1");
        assert_eq!(order.reference_number, "SO-7");
        assert_eq!(order.reference_type, "sales");
        assert_eq!(order.po_date, "2020-01-01");
        assert!(order.has_expected_doc_type());

        let line = &order.part[0];
        assert!(line.has_expected_doc_type());
        assert!(line.part.has_expected_doc_type());
        assert_eq!(line.part.part_number, "P-100");
        assert_eq!(line.part.unit_of_measure, "EA");
        assert_eq!(line.price, 1.25);
        assert_eq!(line.quantity, 40);
        assert_eq!(line.delivery_date, "2020-02-01");
    }

    #[test]
    // Test that missing fields are left empty and unknown fields are ignored
    fn test_order_lenient_decode() {
        let order = Order::from_json(br#"{"ordernumber":"PO-2","color":"red"}"#)
            .expect("Failed to decode order");

        assert_eq!(order.order_number, "PO-2");
        assert!(order.doc_type.is_empty());
        assert!(order.part.is_empty());
        assert!(!order.has_expected_doc_type());
    }

    #[test]
    // Test that a field of the wrong type is a decode error
    fn test_order_wrong_field_type() {
        let result = Order::from_json(br#"{"ordernumber":"PO-3","part":[{"quantity":"many"}]}"#);
        assert!(result.is_err());

        let result = Order::from_json(br#""PO-3""#);
        assert!(result.is_err());
    }

    #[test]
    // Test that an order with no lines, written with every field present and a null line list,
    // decodes to an order with no lines
    fn test_order_null_part_list() {
        let order = Order::from_json(
            br#"{"docType":"order","ordernumber":"PO-9","referencenumber":"","referencetype":"","from":"A","to":"B","part":null,"poDate":"2020-01-01"}"#,
        )
        .expect("Failed to decode order");

        assert_eq!(order.order_number, "PO-9");
        assert_eq!(order.from, "A");
        assert!(order.part.is_empty());
    }

    #[test]
    // Test that null leaves any field, or a whole line, at its empty value
    fn test_order_null_fields() {
        let order = Order::from_json(
            br#"{"ordernumber":"PO-9","from":null,"part":[null,{"part":null,"price":null,"quantity":null}]}"#,
        )
        .expect("Failed to decode order");

        assert!(order.from.is_empty());
        assert_eq!(order.part.len(), 2);
        assert_eq!(order.part[0], OrderLine::default());
        assert_eq!(order.part[1], OrderLine::default());

        assert_eq!(
            Order::from_json(b"null").expect("Failed to decode order"),
            Order::default()
        );
    }

    #[test]
    // Test that a repeated field takes its last non-null value
    fn test_order_repeated_fields() {
        let order = Order::from_json(
            br#"{"ordernumber":"PO-1","ordernumber":"PO-9","from":"A","from":null}"#,
        )
        .expect("Failed to decode order");

        assert_eq!(order.order_number, "PO-9");
        assert_eq!(order.from, "A");
    }

    #[test]
    // Test that field names match regardless of case
    fn test_order_field_name_case() {
        let order = Order::from_json(
            br#"{"OrderNumber":"PO-9","PODATE":"2020-01-01","Part":[{"Part":{"PartNumber":"X-1"},"Quantity":2}]}"#,
        )
        .expect("Failed to decode order");

        assert_eq!(order.order_number, "PO-9");
        assert_eq!(order.po_date, "2020-01-01");
        assert_eq!(order.part[0].part.part_number, "X-1");
        assert_eq!(order.part[0].quantity, 2);
    }

    #[test]
    // Test that the remaining documents serialize with the stored field names
    fn test_reference_document_field_names() {
        let status = PoStatus {
            doc_type: PO_STATUS_DOC_TYPE.to_string(),
            po_number: "PO-1".to_string(),
            reference_number: "SO-7".to_string(),
            status: vec![StatusLine {
                doc_type: STATUS_LINE_DOC_TYPE.to_string(),
                part: PartDetail::default(),
                expected_delivery_date: "2020-03-01".to_string(),
            }],
        };
        let value = serde_json::to_value(&status).expect("Failed to serialize status");
        assert_eq!(value["ponumber"], "PO-1");
        assert_eq!(value["status"][0]["expecteddeliverydate"], "2020-03-01");
        assert_eq!(value["status"][0]["part"]["unitofmeasure"], "");

        let user: User = serde_json::from_str(
            r#"{"docType":"user","username":"jdoe","firstname":"J","lastname":"Doe","orgid":"o1"}"#,
        )
        .expect("Failed to decode user");
        assert!(user.has_expected_doc_type());
        assert_eq!(user.user_name, "jdoe");
        assert_eq!(user.org_id, "o1");

        let org: Organization =
            serde_json::from_str(r#"{"docType":"organization","orgid":"o1","name":"Acme"}"#)
                .expect("Failed to decode organization");
        assert!(org.has_expected_doc_type());
        assert_eq!(org.name, "Acme");
        assert!(org.details.is_empty());
    }
}
