use serde_json::Value;

/// Coerce a JSON scalar into the integer identifier domain. The exports are
/// inconsistent about representation: the same identifier shows up as a JSON
/// number in one family and a numeric string in the other, so the join
/// compares both sides after coercion. A value that cannot be coerced yields
/// `None` and simply never matches.
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}
