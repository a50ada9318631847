use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::any::Any;
use crate::field::Field;
use crate::hlist::{HCons, HList, HNil};
use crate::label::Label;
use crate::record::{NamedTuple, Record};

pub trait ToJson {
    fn to_json(&self) -> crate::error::Result<Value>;
}

#[doc(hidden)]
pub trait SerializeFields {
    fn serialize_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error>;
}

impl SerializeFields for HNil {
    fn serialize_fields<M: SerializeMap>(&self, _: &mut M) -> Result<(), M::Error> {
        Ok(())
    }
}

impl<K: Label, V: Serialize, T: SerializeFields> SerializeFields for HCons<Field<K, V>, T> {
    fn serialize_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry(K::NAME, &self.head.value)?;
        self.tail.serialize_fields(map)
    }
}

/// A map from field name to value, in declared order. The tag is not part
/// of the output.
impl<Tag: Label, F: HList + SerializeFields> Serialize for NamedTuple<Tag, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(F::LEN))?;
        self.fields().serialize_fields(&mut map)?;
        map.end()
    }
}

impl<Tag: Label, F: HList + SerializeFields> ToJson for NamedTuple<Tag, F> {
    fn to_json(&self) -> crate::error::Result<Value> {
        tracing::trace!("rendering {} with {} fields as JSON", Tag::NAME, F::LEN);
        Ok(serde_json::to_value(self)?)
    }
}

impl ToJson for Any {
    fn to_json(&self) -> crate::error::Result<Value> {
        Any::to_json(self)
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> crate::error::Result<Value> {
        self.iter()
            .map(ToJson::to_json)
            .collect::<crate::error::Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> crate::error::Result<Value> {
        self.as_slice().to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{name, named_tuple};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn records_render_as_ordered_maps() {
        let trade = named_tuple!(Trade { size = 100u32, price = 42.5 });
        assert_eq!(
            serde_json::to_string(&trade).unwrap(),
            r#"{"size":100,"price":42.5}"#
        );
        assert_eq!(trade.to_json().unwrap(), json!({"size": 100, "price": 42.5}));
    }

    #[test]
    fn placeholders_and_nesting_render_as_json() {
        let mut attendee = named_tuple!(Attendee { name = named_tuple!("first", "last"), "position" });
        attendee[name!(name)][name!(first)] = "Lho".into();
        assert_eq!(
            attendee.to_json().unwrap(),
            json!({"name": {"first": "Lho", "last": null}, "position": null})
        );
    }

    #[test]
    fn slices_render_as_arrays() {
        let rows = vec![named_tuple!(id = 1), named_tuple!(id = 2)];
        assert_eq!(rows.to_json().unwrap(), json!([{"id": 1}, {"id": 2}]));
    }
}
