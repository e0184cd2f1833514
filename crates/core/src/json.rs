use serde_json::Value;

/// Recursively remove all object fields whose value is `Value::Null`.
///
/// Unset optional payload fields must never appear in the request body, not
/// even as `null`. Array elements that are null are preserved so element
/// indices keep their meaning; nested objects and arrays are recursed into.
pub fn prune_null_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for v in map.values_mut() {
                prune_null_fields(v);
            }
            map.retain(|_, v| !matches!(v, Value::Null));
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                prune_null_fields(v);
            }
        }
        _ => {}
    }
}

/// Return a cloned JSON value with all null-valued object fields removed.
pub fn without_null_fields(value: &Value) -> Value {
    let mut cloned = value.clone();
    prune_null_fields(&mut cloned);
    cloned
}

#[cfg(test)]
mod tests {
    use super::{prune_null_fields, without_null_fields};
    use serde_json::json;

    #[test]
    fn removes_null_object_fields_top_level() {
        let mut v = json!({"prompt": "cat", "seed": null, "aspect_ratio": null});
        prune_null_fields(&mut v);
        assert_eq!(v, json!({"prompt": "cat"}));
    }

    #[test]
    fn removes_nested_null_fields_but_keeps_array_nulls() {
        let input = json!({
            "input": {
                "prompt": "cat",
                "seed": null,
                "messages": [{"role": "user", "name": null}, null]
            },
            "webhook": null
        });
        let out = without_null_fields(&input);
        assert_eq!(
            out,
            json!({
                "input": {
                    "prompt": "cat",
                    "messages": [{"role": "user"}, null]
                }
            })
        );
    }

    #[test]
    fn explicit_falsy_values_are_kept() {
        let mut v = json!({"prompt": "", "seed": 0, "go_fast": false});
        prune_null_fields(&mut v);
        assert_eq!(v, json!({"prompt": "", "seed": 0, "go_fast": false}));
    }
}
