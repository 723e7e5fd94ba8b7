// tests/support/fixtures.rs
use json_responder::domain::fault::{HandlerFault, MessageBag};
use json_responder::domain::payload::{Arrayable, Mapping};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone)]
pub struct Moon {
    pub name: String,
    pub radius: u32,
}

impl Moon {
    pub fn new(name: &str, radius: u32) -> Self {
        Self {
            name: name.into(),
            radius,
        }
    }
}

impl Arrayable for Moon {
    fn to_array(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("name".into(), json!(self.name));
        map.insert("radius".into(), json!(self.radius));
        map
    }
}

#[derive(Debug, Serialize)]
pub struct Spacecraft {
    pub name: &'static str,
    pub launched: u16,
}

/// Value with no serialization capability at all.
#[derive(Debug)]
pub struct Opaque;

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CodedFault {
    pub code: i64,
    pub message: String,
}

impl CodedFault {
    pub fn new(code: i64, message: &str) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl HandlerFault for CodedFault {
    fn code(&self) -> i64 {
        self.code
    }
}

#[derive(Debug, thiserror::Error)]
#[error("custom validation failed")]
pub struct CustomValidationFault {
    pub code: i64,
    pub bag: MessageBag,
}

impl CustomValidationFault {
    pub fn new(code: i64) -> Self {
        Self {
            code,
            bag: MessageBag::new()
                .with("error1", "test1")
                .with("error2", "test2"),
        }
    }
}

impl HandlerFault for CustomValidationFault {
    fn code(&self) -> i64 {
        self.code
    }

    fn message_bag(&self) -> Option<&MessageBag> {
        Some(&self.bag)
    }
}
