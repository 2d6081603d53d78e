//! Projection of nodes onto plain JSON values.
//! 将节点投影为普通 JSON 值。

use crate::{NodeId, NodeKind, Tree};
use serde_json::{Map, Number, Value};

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Tree {
    /// Materialize the subtree at `id` as a [`serde_json::Value`].
    /// 将 `id` 处的子树实体化为 [`serde_json::Value`]。
    ///
    /// Objects keep their key order. Returns `Value::Null` for an unknown id.
    pub fn to_plain_value(&self, id: NodeId) -> Value {
        let Some(node) = self.get(id) else {
            return Value::Null;
        };

        match &node.kind {
            NodeKind::Object(object) => {
                let map: Map<String, Value> = object
                    .iter()
                    .map(|(key, value)| (key.to_string(), self.to_plain_value(value)))
                    .collect();
                Value::Object(map)
            }
            NodeKind::Array(array) => Value::Array(
                array
                    .items()
                    .iter()
                    .map(|&item| self.to_plain_value(item))
                    .collect(),
            ),
            NodeKind::String(value) => Value::String(value.clone()),
            NodeKind::Number(value) => number_value(*value),
            NodeKind::Boolean(value) => Value::Bool(*value),
            NodeKind::Null => Value::Null,
        }
    }

    /// The plain value of the root, or `None` without one.
    pub fn to_plain(&self) -> Option<Value> {
        self.root().map(|root| self.to_plain_value(root))
    }
}

/// Integral values that fit exactly become JSON integers; the rest stay
/// floating point. Non-finite values have no JSON form and become `null`.
fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return Value::Number(Number::from(value as i64));
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}
