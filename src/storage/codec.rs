use super::*;

use serde::Serialize;
use serde_json::{Map, Value};

const COLLECTION_FIELD: &str = "customers";

const CUSTOMER_FIELDS: [&str; 6] = [
    "customerId",
    "customerName",
    "customerLocation",
    "email",
    "phone",
    "address",
];

#[derive(Serialize)]
struct CollectionRef<'a> {
    customers: &'a [Customer],
}

/// Parses a customer collection document.
///
/// Field names are matched case-insensitively at both levels, so `Customers`,
/// `CustomerID` and `customerid` all resolve. A document without a usable
/// `customers` array is an empty collection rather than an error.
pub fn decode_collection(data: &str) -> Result<Vec<Customer>, AppError> {
    // serde_json will give an error if data is empty
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(data)?;

    let Value::Object(root) = value else {
        return Ok(Vec::new());
    };

    let Some(Value::Array(records)) = take_ignore_case(root, COLLECTION_FIELD) else {
        return Ok(Vec::new());
    };

    records
        .into_iter()
        .map(|record| {
            serde_json::from_value::<Customer>(canonical_record(record)).map_err(AppError::from)
        })
        .collect()
}

/// Whole-collection document, pretty printed with non-ASCII text kept literal.
pub fn encode_collection(customers: &[Customer]) -> Result<String, AppError> {
    let mut data = serde_json::to_string_pretty(&CollectionRef { customers })?;
    data.push('\n');
    Ok(data)
}

fn take_ignore_case(map: Map<String, Value>, field: &str) -> Option<Value> {
    map.into_iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(field))
        .map(|(_, value)| value)
}

fn canonical_record(record: Value) -> Value {
    let Value::Object(fields) = record else {
        return record;
    };

    let renamed = fields
        .into_iter()
        .map(|(key, value)| {
            let key = CUSTOMER_FIELDS
                .iter()
                .find(|known| known.eq_ignore_ascii_case(&key))
                .map_or(key, |known| known.to_string());
            (key, value)
        })
        .collect::<Map<String, Value>>();

    Value::Object(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_records_in_file_order() {
        let data = r#"{"customers":[
            {"customerId":5,"customerName":"Beta","customerLocation":"LA"},
            {"customerId":1,"customerName":"Acme","customerLocation":"NY","email":null}
        ]}"#;

        let customers = decode_collection(data).unwrap();

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].customer_id, 5);
        assert_eq!(customers[1].customer_name, "Acme");
        assert_eq!(customers[1].email, None);
    }

    #[test]
    fn field_names_are_case_insensitive() {
        let data = r#"{"Customers":[{"CustomerID":7,"CUSTOMERNAME":"Acme",
            "customerlocation":"NY","Email":"a@acme.com","PHONE":"555"}]}"#;

        let customers = decode_collection(data).unwrap();

        assert_eq!(customers[0].customer_id, 7);
        assert_eq!(customers[0].customer_name, "Acme");
        assert_eq!(customers[0].customer_location, "NY");
        assert_eq!(customers[0].email.as_deref(), Some("a@acme.com"));
        assert_eq!(customers[0].phone.as_deref(), Some("555"));
    }

    #[test]
    fn missing_or_malformed_wrapper_is_empty() {
        assert!(decode_collection("").unwrap().is_empty());
        assert!(decode_collection("  \n").unwrap().is_empty());
        assert!(decode_collection("{}").unwrap().is_empty());
        assert!(decode_collection(r#"{"customers":null}"#).unwrap().is_empty());
        assert!(decode_collection(r#"{"customers":{"a":1}}"#).unwrap().is_empty());
        assert!(decode_collection("[]").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = decode_collection(r#"{"customers":["#).unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn record_missing_required_field_is_an_error() {
        let err = decode_collection(r#"{"customers":[{"customerId":1}]}"#).unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn encoding_is_indented_and_keeps_non_ascii() {
        let customer = Customer {
            customer_id: 1,
            customer_name: "台北商行".to_string(),
            customer_location: "台北".to_string(),
            email: None,
            phone: Some("02-1234".to_string()),
            address: None,
        };

        let data = encode_collection(&[customer]).unwrap();

        assert!(data.starts_with("{\n  \"customers\": [\n"));
        assert!(data.contains("\"customerName\": \"台北商行\""));
        assert!(data.contains("\"phone\": \"02-1234\""));
        assert!(!data.contains("\\u"));
        assert!(!data.contains("email"));
        assert!(data.ends_with("}\n"));
    }
}
