// src/domain/payload.rs
use crate::domain::pagination::LengthAwarePaginator;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::{Any, type_name};
use std::fmt;

/// Ordered field -> value mapping produced by every to-mapping conversion.
pub type Mapping = Map<String, Value>;

/// Object-safe access to the concrete type behind a payload trait object.
pub trait AsAny: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value that knows how to turn itself into a structured mapping.
pub trait Arrayable: AsAny {
    fn to_array(&self) -> Mapping;
}

/// A value with a generic JSON serialization.
///
/// Every `Serialize` type has this capability; wrap it with
/// [`Payload::serializable`].
pub trait JsonSerializable: AsAny {
    fn json_serialize(&self) -> serde_json::Result<Value>;
}

impl<T> JsonSerializable for T
where
    T: Serialize + Send + Sync + 'static,
{
    fn json_serialize(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Gives a plain mapping the to-mapping capability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayWrapper(Mapping);

impl ArrayWrapper {
    pub const fn new(data: Mapping) -> Self {
        Self(data)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn into_inner(self) -> Mapping {
        self.0
    }
}

impl Arrayable for ArrayWrapper {
    fn to_array(&self) -> Mapping {
        self.0.clone()
    }
}

impl From<Mapping> for ArrayWrapper {
    fn from(data: Mapping) -> Self {
        Self(data)
    }
}

/// The value a handler hands back for serialization.
///
/// Each variant is one capability the response pipeline knows how to deal
/// with; see `application::classifier` for the order in which they are
/// considered.
pub enum Payload {
    Null,
    Bool(bool),
    Text(String),
    /// An already finished response, passed through untouched.
    Resource(Response),
    Collection(Vec<Payload>),
    Paginated(LengthAwarePaginator<Payload>),
    Arrayable(Box<dyn Arrayable>),
    /// A plain structured mapping.
    Array(Mapping),
    Serializable(Box<dyn JsonSerializable>),
    /// A domain object without any serialization capability. Only a
    /// transformer can make sense of it.
    Object {
        value: Box<dyn AsAny>,
        type_name: &'static str,
    },
}

impl Payload {
    pub fn item<T: Arrayable>(item: T) -> Self {
        Self::Arrayable(Box::new(item))
    }

    pub fn items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Arrayable,
    {
        Self::Collection(items.into_iter().map(Self::item).collect())
    }

    pub fn collection<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Collection(items.into_iter().map(Into::into).collect())
    }

    pub fn paginated<T: Into<Self>>(paginator: LengthAwarePaginator<T>) -> Self {
        Self::Paginated(paginator.map(Into::into))
    }

    pub fn serializable<T: JsonSerializable>(value: T) -> Self {
        Self::Serializable(Box::new(value))
    }

    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    pub fn resource(response: impl IntoResponse) -> Self {
        Self::Resource(response.into_response())
    }

    /// Borrow the concrete value behind an object-like payload.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Arrayable(value) => (**value).as_any().downcast_ref(),
            Self::Serializable(value) => (**value).as_any().downcast_ref(),
            Self::Object { value, .. } => (**value).as_any().downcast_ref(),
            _ => None,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Text(_) => "string",
            Self::Resource(_) => "response",
            Self::Collection(_) => "collection",
            Self::Paginated(_) => "paginator",
            Self::Arrayable(_) => "arrayable",
            Self::Array(_) => "array",
            Self::Serializable(_) => "json serializable",
            Self::Object { type_name, .. } => *type_name,
        }
    }

    /// Whether this payload is a plain structured mapping.
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Resource(response) => f
                .debug_tuple("Resource")
                .field(&response.status())
                .finish(),
            Self::Collection(items) => f.debug_tuple("Collection").field(items).finish(),
            Self::Paginated(page) => f.debug_tuple("Paginated").field(page).finish(),
            Self::Arrayable(value) => f
                .debug_tuple("Arrayable")
                .field(&value.to_array())
                .finish(),
            Self::Array(map) => f.debug_tuple("Array").field(map).finish(),
            Self::Serializable(_) => f.write_str("Serializable(..)"),
            Self::Object { type_name, .. } => f.debug_tuple("Object").field(type_name).finish(),
        }
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Mapping> for Payload {
    fn from(value: Mapping) -> Self {
        Self::Array(value)
    }
}

impl From<ArrayWrapper> for Payload {
    fn from(value: ArrayWrapper) -> Self {
        Self::item(value)
    }
}

impl From<Response> for Payload {
    fn from(value: Response) -> Self {
        Self::Resource(value)
    }
}

impl From<Vec<Self>> for Payload {
    fn from(value: Vec<Self>) -> Self {
        Self::Collection(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Moon {
        name: &'static str,
    }

    impl Arrayable for Moon {
        fn to_array(&self) -> Mapping {
            let mut map = Mapping::new();
            map.insert("name".into(), json!(self.name));
            map
        }
    }

    #[test]
    fn downcast_reaches_the_boxed_value() {
        let payload = Payload::item(Moon { name: "Io" });
        let moon = payload.downcast_ref::<Moon>().expect("moon");
        assert_eq!(moon.name, "Io");
        assert!(payload.downcast_ref::<String>().is_none());

        let object = Payload::object(42_u32);
        assert_eq!(object.downcast_ref::<u32>(), Some(&42));
        assert!(object.type_name().ends_with("u32"));
    }

    #[test]
    fn array_wrapper_behaves_like_a_mapping() {
        let mut wrapper = ArrayWrapper::new(Mapping::new());
        assert!(wrapper.insert("a", json!(1)).is_none());
        assert!(wrapper.contains_key("a"));
        assert_eq!(wrapper.get("a"), Some(&json!(1)));
        assert_eq!(wrapper.to_array().len(), 1);
        assert_eq!(wrapper.remove("a"), Some(json!(1)));
        assert!(wrapper.into_inner().is_empty());
    }

    #[test]
    fn option_maps_none_to_null() {
        assert!(matches!(Payload::from(None::<String>), Payload::Null));
        assert!(matches!(Payload::from(Some("x")), Payload::Text(ref s) if s == "x"));
    }
}
